use log::warn;

use crate::{
    errors::ParsingError,
    structs::{InstrumentType, Security},
};

use super::{Parsed, Table};

pub const ISIN: &str = "ISIN";
pub const NAME: &str = "Titolo";
pub const SYMBOL: &str = "Simbolo";
pub const MARKET: &str = "Mercato";
pub const INSTRUMENT: &str = "Strumento";
pub const CURRENCY: &str = "Valuta";

/* Portfolio export: only the descriptive columns of the securities are kept */
pub fn parse_securities(table: &Table) -> Result<Parsed<Security>, ParsingError> {
    table.require_columns(&[ISIN])?;

    let mut parsed = Parsed::default();
    for (index, row) in table.rows().enumerate() {
        let isin = row.text(ISIN).to_uppercase();
        if isin.is_empty() {
            warn!("Security at row {index} rejected: missing isin");
            parsed.rejected += 1;
            continue;
        }
        parsed.records.push(Security {
            isin,
            name: row.text(NAME).to_string(),
            symbol: row.text(SYMBOL).to_string(),
            market: row.text(MARKET).to_string(),
            instrument_type: InstrumentType::from_label(row.text(INSTRUMENT)),
            currency: row.text(CURRENCY).to_string(),
        });
    }
    Ok(parsed)
}
