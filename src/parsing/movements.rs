use log::warn;

use crate::{errors::ParsingError, structs::Movement};

use super::{Parsed, Table};

pub const OPERATION_DATE: &str = "Data_Operazione";
pub const VALUE_DATE: &str = "Data_Valuta";
pub const DESCRIPTION: &str = "Descrizione";
pub const FULL_DESCRIPTION: &str = "Descrizione_Completa";
pub const INCOMES: &str = "Entrate";
pub const EXPENSES: &str = "Uscite";

/* Movements export of the current account. Incomes and expenses are in two columns,
expenses already negative. */
pub fn parse_movements(table: &Table) -> Result<Parsed<Movement>, ParsingError> {
    table.require_columns(&[OPERATION_DATE, DESCRIPTION])?;

    let mut parsed = Parsed::default();
    for (index, row) in table.rows().enumerate() {
        let operation_date = match row.date(OPERATION_DATE) {
            Ok(date) => date,
            Err(e) => {
                warn!("Movement at row {index} rejected: {e}");
                parsed.rejected += 1;
                continue;
            }
        };
        parsed.records.push(Movement::new(
            operation_date,
            row.optional_date(VALUE_DATE),
            row.decimal(INCOMES) + row.decimal(EXPENSES),
            row.text(DESCRIPTION).to_string(),
            row.text(FULL_DESCRIPTION).to_string(),
        ));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_parse_movements() {
        let csv = "Data_Operazione;Data_Valuta;Descrizione;Descrizione_Completa;Entrate;Uscite;Stato\n\
                   02/01/2024;02/01/2024;Bonifico;Bonifico da Mario;1500,00;;Contabilizzato\n\
                   05/01/2024;;Canone mensile;Canone mensile conto;;-2,50;Contabilizzato\n\
                   in corso;;Pagamento;Pagamento POS;;-10;Non contabilizzato\n";
        let table = Table::from_reader(csv.as_bytes(), b';').unwrap();
        let parsed = parse_movements(&table).unwrap();

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.rejected, 1);
        assert_eq!(parsed.records[0].amount, dec!(1500));
        assert_eq!(parsed.records[0].value_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(parsed.records[1].amount, dec!(-2.5));
        assert_eq!(parsed.records[1].value_date, None);
        assert_eq!(parsed.records[1].full_description, "Canone mensile conto");
    }

    #[test]
    fn test_not_a_movements_export() {
        let table = Table::from_reader("ISIN;Titolo\nIT0001;Enel\n".as_bytes(), b';').unwrap();
        assert_eq!(
            parse_movements(&table).unwrap_err(),
            ParsingError::MissingColumn(OPERATION_DATE.to_string())
        );
    }
}
