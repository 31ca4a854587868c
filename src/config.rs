use std::env;

use crate::errors::ConfigError;

pub const DATA_DIR_KEY: &str = "PORTAFOGLIO_DATA_DIR";
pub const CSV_DELIMITER_KEY: &str = "PORTAFOGLIO_CSV_DELIMITER";

/* Settings read from the environment (and the .env file loaded by dotenv in main) */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: String,
    pub csv_delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: String::from(".data"),
            csv_delimiter: b';',
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /* Build from any key/value source, missing keys keep their default */
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(data_dir) = lookup(DATA_DIR_KEY).filter(|dir| !dir.trim().is_empty()) {
            config.data_dir = data_dir.trim().to_string();
        }
        if let Some(delimiter) = lookup(CSV_DELIMITER_KEY) {
            config.csv_delimiter = parse_delimiter(&delimiter)
                .ok_or_else(|| ConfigError::new(CSV_DELIMITER_KEY, &delimiter))?;
        }
        Ok(config)
    }
}

/* A single ascii character, or "tab" */
pub fn parse_delimiter(value: &str) -> Option<u8> {
    if value.eq_ignore_ascii_case("tab") || value == "\t" {
        return Some(b'\t');
    }
    match value.as_bytes() {
        [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() => Some(*byte),
        _ => None,
    }
}
