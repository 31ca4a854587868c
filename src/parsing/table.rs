use std::{fs::File, io::Read};

use chrono::NaiveDate;
use csv::{ByteRecord, ReaderBuilder};
use hashbrown::HashMap;
use rust_decimal::Decimal;

use crate::{errors::ParsingError, utils::parse_date};

use super::clean_decimal;

/* A table read from a bank export.

Exports start with a few lines of information (account, dates of extraction...) before the real table.
The header is the first line that is as wide as the widest line and where every cell is filled. */
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    columns: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_path(path: &str, delimiter: u8) -> Result<Table, ParsingError> {
        let file = File::open(path).map_err(|e| ParsingError::Csv(e.to_string()))?;
        Self::from_reader(file, delimiter)
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Table, ParsingError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let mut lines: Vec<Vec<String>> = Vec::new();
        let mut record = ByteRecord::new();
        while csv_reader.read_byte_record(&mut record)? {
            // Exports are not always utf-8
            lines.push(
                record
                    .iter()
                    .map(|cell| String::from_utf8_lossy(cell).trim().to_string())
                    .collect(),
            );
        }

        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        let header_index = lines
            .iter()
            .position(|line| {
                line.len() == width && width > 0 && line.iter().all(|cell| !cell.is_empty())
            })
            .ok_or(ParsingError::NoHeaderRow)?;

        let mut lines = lines.into_iter().skip(header_index);
        let headers: Vec<String> = lines
            .next()
            .ok_or(ParsingError::NoHeaderRow)?
            .into_iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let rows: Vec<Vec<String>> = lines
            .filter(|line| line.iter().any(|cell| !cell.is_empty()))
            .collect();
        if rows.is_empty() {
            return Err(ParsingError::EmptyTable);
        }

        let columns = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (header.clone(), index))
            .collect();
        Ok(Table {
            headers,
            columns,
            rows,
        })
    }

    pub fn headers(&self) -> &Vec<String> {
        &self.headers
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /* Fail early when the file is not the export we think it is */
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), ParsingError> {
        match columns.iter().find(|column| !self.has_column(column)) {
            Some(missing) => Err(ParsingError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            columns: &self.columns,
            values,
        })
    }
}

pub struct Row<'a> {
    columns: &'a HashMap<String, usize>,
    values: &'a Vec<String>,
}

impl<'a> Row<'a> {
    /* Cell of a column, empty when the column or the cell is missing */
    pub fn text(&self, column: &str) -> &'a str {
        self.columns
            .get(column)
            .and_then(|index| self.values.get(*index))
            .map(|value| value.as_str())
            .unwrap_or("")
    }

    pub fn decimal(&self, column: &str) -> Decimal {
        clean_decimal(self.text(column))
    }

    pub fn date(&self, column: &str) -> Result<NaiveDate, ParsingError> {
        let value = self.text(column);
        parse_date(value).ok_or_else(|| ParsingError::InvalidDate {
            column: column.to_string(),
            value: value.to_string(),
        })
    }

    pub fn optional_date(&self, column: &str) -> Option<NaiveDate> {
        parse_date(self.text(column))
    }
}
