use log::warn;
use rust_decimal::Decimal;

use crate::{
    errors::ParsingError,
    structs::{OrderRecord, Sign},
};

use super::{Parsed, Row, Table};

pub const OPERATION_DATE: &str = "Operazione";
pub const VALUE_DATE: &str = "Data valuta";
pub const ISIN: &str = "Isin";
pub const DESCRIPTION: &str = "Descrizione";
pub const SIGN: &str = "Segno";
pub const QUANTITY: &str = "Quantita";
pub const CURRENCY: &str = "Divisa";
pub const PRICE: &str = "Prezzo";
pub const EXCHANGE_RATE: &str = "Cambio";
pub const GROSS_VALUE: &str = "Controvalore";

/* The fee columns of the export, in the order used to name the kind of fee */
pub const FEE_COLUMNS: [&str; 4] = [
    "Commissioni Fondi Sw/Ingr/Uscita",
    "Commissioni Fondi Banca Corrispondente",
    "Spese Fondi Sgr",
    "Commissioni amministrato",
];

/* Orders export. Every row becomes a normalized OrderRecord: signed amount, total fee and kind. */
pub fn parse_orders(table: &Table) -> Result<Parsed<OrderRecord>, ParsingError> {
    table.require_columns(&[OPERATION_DATE, ISIN, SIGN, QUANTITY, PRICE, GROSS_VALUE])?;

    let mut parsed = Parsed::default();
    for (index, row) in table.rows().enumerate() {
        match parse_order(&row) {
            Ok(order) => parsed.records.push(order),
            Err(e) => {
                warn!("Order at row {index} rejected: {e}");
                parsed.rejected += 1;
            }
        }
    }
    Ok(parsed)
}

fn parse_order(row: &Row) -> Result<OrderRecord, String> {
    let operation_date = row.date(OPERATION_DATE).map_err(|e| e.to_string())?;
    let isin = row.text(ISIN).to_uppercase();
    if isin.is_empty() {
        return Err(String::from("missing isin"));
    }
    let quantity = row.decimal(QUANTITY);
    if quantity < Decimal::ZERO {
        return Err(format!("negative quantity {quantity}"));
    }

    let fees: Vec<Decimal> = FEE_COLUMNS.iter().map(|column| row.decimal(column)).collect();
    if fees.iter().any(|fee| *fee < Decimal::ZERO) {
        return Err(String::from("negative fee"));
    }
    let fee_kind = FEE_COLUMNS
        .iter()
        .zip(&fees)
        .find(|(_, fee)| **fee > Decimal::ZERO)
        .map(|(column, _)| column.to_string())
        .unwrap_or(OrderRecord::NO_FEE.to_string());

    let mut order = OrderRecord::new(
        operation_date,
        isin,
        Sign::from_code(row.text(SIGN)),
        quantity,
        row.decimal(PRICE),
        row.decimal(GROSS_VALUE),
        fees.iter().sum(),
    );
    order.value_date = row.optional_date(VALUE_DATE);
    order.description = row.text(DESCRIPTION).to_string();
    order.currency = row.text(CURRENCY).to_string();
    let exchange_rate = row.decimal(EXCHANGE_RATE);
    if !exchange_rate.is_zero() {
        order.exchange_rate = exchange_rate;
    }
    order.fee_kind = fee_kind;
    Ok(order)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        functions::analyze_orders,
        structs::{InstrumentType, RecordKind},
    };

    use super::*;

    const ORDERS: &str = "Lista ordini eseguiti;;;;;;;;;;;;;;\n\
        Operazione;Data valuta;Descrizione;Titolo;Isin;Segno;Quantita;Divisa;Prezzo;Cambio;Controvalore;Commissioni Fondi Sw/Ingr/Uscita;Commissioni Fondi Banca Corrispondente;Spese Fondi Sgr;Commissioni amministrato\n\
        10/01/2024;12/01/2024;Acquisto;ENEL;it0003128367;A;100;EUR;6,50;1;650;0;0;0;2,95\n\
        20/03/2024;22/03/2024;Vendita;ENEL;IT0003128367;V;40;EUR;7,00;1;280;0;0;0;2,95\n\
        22/04/2024;22/04/2024;Dividendo;ENEL;IT0003128367;;0;EUR;0;1;21,40;;;;\n\
        23/04/2024;23/04/2024;Sottoscrizione;FONDO;LU0000000001;A;10;EUR;10;;100;1,50;0,50;;\n\
        24/04/2024;24/04/2024;Errore;ENEL;IT0003128367;A;-5;EUR;7;1;35;;;;\n";

    #[test]
    fn test_parse_orders() {
        let table = Table::from_reader(ORDERS.as_bytes(), b';').unwrap();
        let parsed = parse_orders(&table).unwrap();
        assert_eq!(parsed.records.len(), 4);
        assert_eq!(parsed.rejected, 1);

        let buy = &parsed.records[0];
        assert_eq!(buy.isin, "IT0003128367");
        assert_eq!(buy.sign, Sign::Buy);
        assert_eq!(buy.kind, RecordKind::Buy);
        assert_eq!(buy.amount, dec!(-650));
        assert_eq!(buy.fee, dec!(2.95));
        assert_eq!(buy.fee_kind, "Commissioni amministrato");

        let sell = &parsed.records[1];
        assert_eq!(sell.kind, RecordKind::Sell);
        assert_eq!(sell.amount, dec!(280));

        let dividend = &parsed.records[2];
        assert_eq!(dividend.sign, Sign::Other);
        assert_eq!(dividend.kind, RecordKind::CashFlow);
        assert_eq!(dividend.amount, dec!(21.40));
        assert_eq!(dividend.fee_kind, OrderRecord::NO_FEE);

        let fund = &parsed.records[3];
        assert_eq!(fund.fee, dec!(2));
        assert_eq!(fund.fee_kind, "Commissioni Fondi Sw/Ingr/Uscita");
        assert_eq!(fund.exchange_rate, dec!(1));
    }

    #[test]
    fn test_withholding_keeps_its_sign() {
        let csv = "Operazione;Data valuta;Descrizione;Titolo;Isin;Segno;Quantita;Divisa;Prezzo;Cambio;Controvalore\n\
            10/01/2024;12/01/2024;Acquisto;ENEL;IT0003128367;A;10;EUR;100;1;1000\n\
            22/04/2024;22/04/2024;Ritenuta su dividendo;ENEL;IT0003128367;;0;EUR;0;1;-7,50\n";
        let table = Table::from_reader(csv.as_bytes(), b';').unwrap();
        let parsed = parse_orders(&table).unwrap();

        let withholding = &parsed.records[1];
        assert_eq!(withholding.kind, RecordKind::CashFlow);
        assert_eq!(withholding.amount, dec!(-7.50));

        let result = analyze_orders(&parsed.records, &InstrumentType::Share);
        assert_eq!(result.net_proceeds, dec!(-7.50));
        assert_eq!(result.cost_basis, dec!(1000));
    }

    #[test]
    fn test_zero_price_is_always_a_cash_flow() {
        let table = Table::from_reader(ORDERS.as_bytes(), b';').unwrap();
        let parsed = parse_orders(&table).unwrap();
        for order in parsed.records {
            assert_eq!(order.price.is_zero(), order.kind == RecordKind::CashFlow);
        }
    }
}
