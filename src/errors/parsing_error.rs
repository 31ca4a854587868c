use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParsingError {
    Csv(String),
    NoHeaderRow,
    EmptyTable,
    MissingColumn(String),
    InvalidDate { column: String, value: String },
    UnknownFileKind(String),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::Csv(error) => write!(f, "Could not read csv: {error}"),
            ParsingError::NoHeaderRow => {
                write!(f, "Could not find a complete header row in the file")
            }
            ParsingError::EmptyTable => write!(f, "The file contains a header but no rows"),
            ParsingError::MissingColumn(column) => write!(f, "Missing column '{column}'"),
            ParsingError::InvalidDate { column, value } => {
                write!(f, "Cannot parse date '{value}' in column '{column}'")
            }
            ParsingError::UnknownFileKind(file_name) => {
                write!(f, "Could not understand file origin of {file_name}")
            }
        }
    }
}

impl From<csv::Error> for ParsingError {
    fn from(error: csv::Error) -> Self {
        ParsingError::Csv(error.to_string())
    }
}
