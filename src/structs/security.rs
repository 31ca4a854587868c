use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::Isin;

/* A security ("titolo") as listed in the portfolio export. Orders reference it through the ISIN. */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Security {
    pub isin: Isin,
    pub name: String,
    pub symbol: String,
    pub market: String,
    pub instrument_type: InstrumentType,
    pub currency: String,
}

impl Security {
    pub fn is_bond(&self) -> bool {
        self.instrument_type.is_bond()
    }
}

/* Instrument ("Strumento") of a security. Only bonds change the way orders are valued. */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    Share,
    Etf,
    Bond,
    Other(String),
}

impl InstrumentType {
    // Bonds are quoted in percentage of the nominal value
    pub const BOND_PAR: Decimal = dec!(100);

    pub fn from_label(s: &str) -> InstrumentType {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "azione" | "azioni" => InstrumentType::Share,
            "etf" => InstrumentType::Etf,
            "obbligazione" | "obbligazioni" => InstrumentType::Bond,
            _ => InstrumentType::Other(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            InstrumentType::Share => "Azione",
            InstrumentType::Etf => "ETF",
            InstrumentType::Bond => "Obbligazione",
            InstrumentType::Other(label) => label,
        }
    }

    pub fn is_bond(&self) -> bool {
        matches!(self, InstrumentType::Bond)
    }
}
