use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    key: String,
    value: String,
}

impl ConfigError {
    pub fn new(key: &str, value: &str) -> Self {
        return ConfigError {
            key: key.to_string(),
            value: value.to_string(),
        };
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid value '{}' for {}", self.value, self.key)
    }
}
