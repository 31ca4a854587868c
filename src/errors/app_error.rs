use std::fmt;

use crate::structs::MovementCategory;

use super::{ConfigError, IoError, ParsingError, RangeError};

/* Top level error returned by the command line entry point */
#[derive(Debug, Clone)]
pub enum AppError {
    Io(IoError),
    Parsing { file: String, error: ParsingError },
    Range(RangeError),
    Config(ConfigError),
    UnknownSecurity(String),
    UnknownCategory(String),
    Output(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Io(error) => write!(f, "Storage error: {error}"),
            AppError::Parsing { file, error } => write!(f, "{file}: {error}"),
            AppError::Range(error) => error.fmt(f),
            AppError::Config(error) => error.fmt(f),
            AppError::UnknownSecurity(isin) => write!(f, "No security or order found for {isin}"),
            AppError::UnknownCategory(name) => write!(
                f,
                "Unknown movement category '{name}', expected one of: {}",
                MovementCategory::ALL.map(|category| category.name()).join(", ")
            ),
            AppError::Output(error) => write!(f, "Could not render output: {error}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<IoError> for AppError {
    fn from(error: IoError) -> Self {
        AppError::Io(error)
    }
}

impl From<RangeError> for AppError {
    fn from(error: RangeError) -> Self {
        AppError::Range(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Config(error)
    }
}
