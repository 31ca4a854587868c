use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::generate_id;

pub type Isin = String;
pub type RecordId = String;

/* An OrderRecord is one row of the orders export: a buy, a sell, or a cash movement attached to a
security (dividend, coupon, redemption, tax...).

The export has no explicit type for cash movements: they are the rows with a zero price. We keep that
convention at the border and classify every row once, when it is ingested (see RecordKind::classify),
so that nothing downstream has to look at the price to know what a record is.

Records are never modified after being persisted.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: RecordId,
    pub operation_date: NaiveDate,
    pub value_date: Option<NaiveDate>,
    pub isin: Isin,
    pub description: String,
    pub sign: Sign,
    pub kind: RecordKind,
    pub quantity: Decimal,
    pub price: Decimal,
    pub currency: String,
    pub exchange_rate: Decimal,
    pub gross_value: Decimal, // "Controvalore", negative on withholdings and taxes
    pub amount: Decimal,      // Signed cash effect: negative when cash goes out
    pub fee: Decimal,
    pub fee_kind: String,
}

impl OrderRecord {
    pub const NO_FEE: &'static str = "Nessuna";

    /* Build a normalized record: the amount is signed from the gross value and the kind derived from it */
    pub fn new(
        operation_date: NaiveDate,
        isin: Isin,
        sign: Sign,
        quantity: Decimal,
        price: Decimal,
        gross_value: Decimal,
        fee: Decimal,
    ) -> Self {
        let amount = gross_value * sign.cash_direction();
        let id = Self::identity(&operation_date, &isin, &amount);
        Self {
            id,
            operation_date,
            value_date: None,
            isin,
            description: String::new(),
            sign,
            kind: RecordKind::classify(price, amount),
            quantity,
            price,
            currency: String::new(),
            exchange_rate: Decimal::ONE,
            gross_value,
            amount,
            fee,
            fee_kind: Self::NO_FEE.to_string(),
        }
    }

    /* Same identity as the bank uses: operation date, security and amount */
    pub fn identity(operation_date: &NaiveDate, isin: &str, amount: &Decimal) -> RecordId {
        generate_id(&[
            &operation_date.to_string(),
            isin,
            &amount.normalize().to_string(),
        ])
    }

    pub fn is_trade(&self) -> bool {
        self.kind != RecordKind::CashFlow
    }
}

/* Direction written in the export ("Segno") */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Buy,   // A (acquisto)
    Sell,  // V (vendita)
    Other, // Anything else: coupons, dividends, redemptions
}

impl Sign {
    pub fn from_code(code: &str) -> Sign {
        match code.trim().to_uppercase().as_str() {
            "A" => Sign::Buy,
            "V" => Sign::Sell,
            _ => Sign::Other,
        }
    }

    /* Only buys take cash out of the account */
    pub fn cash_direction(&self) -> Decimal {
        match self {
            Sign::Buy => Decimal::NEGATIVE_ONE,
            Sign::Sell | Sign::Other => Decimal::ONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Buy,
    Sell,
    CashFlow,
}

impl RecordKind {
    /* A zero price always means a cash flow, whatever the amount. A priced row with no cash
    effect is a cash flow too: it changes neither the averages nor the proceeds. */
    pub fn classify(price: Decimal, amount: Decimal) -> RecordKind {
        if price.is_zero() || amount.is_zero() {
            RecordKind::CashFlow
        } else if amount < Decimal::ZERO {
            RecordKind::Buy
        } else {
            RecordKind::Sell
        }
    }
}
