use std::str::FromStr;

use log::warn;
use rust_decimal::Decimal;

/* Numbers of the exports: empty cells are 0, the decimal separator is a comma and when both
separators appear the dot groups thousands. Anything else is logged and read as 0. */
pub fn clean_decimal(value: &str) -> Decimal {
    let value: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if value.is_empty() {
        return Decimal::ZERO;
    }
    let normalized = if value.contains(',') {
        value.replace('.', "").replace(',', ".")
    } else {
        value
    };
    match Decimal::from_str(&normalized).or_else(|_| Decimal::from_scientific(&normalized)) {
        Ok(decimal) => decimal,
        Err(e) => {
            warn!("Could not convert to decimal: {normalized} ({e})");
            Decimal::ZERO
        }
    }
}
