/* Taxes paid through the current account. The stamp duties ("imposta di bollo") are charged by the bank,
the period they refer to is only written in the full description of the movement. */
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    structs::{DateRange, MovementCategory, MovementsManager},
    utils::parse_date,
};

pub const ACCOUNT_STAMP_DUTY: &str = "Imposta bollo conto corrente";
pub const DOSSIER_STAMP_DUTY: &str = "Imposta bollo dossier titoli";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStampDuty {
    pub operation_date: NaiveDate,
    pub amount: Decimal, // Positive: what was paid
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DossierStampDuty {
    pub operation_date: NaiveDate,
    pub amount: Decimal,
    pub dossier: Option<String>,
}

pub fn account_stamp_duties(movements: &MovementsManager, range: DateRange) -> Vec<AccountStampDuty> {
    movements
        .by_description(ACCOUNT_STAMP_DUTY)
        .filter(|movement| range.contains(&movement.operation_date))
        .map(|movement| AccountStampDuty {
            operation_date: movement.operation_date,
            amount: -movement.amount,
            reference_date: find_reference_date(&movement.full_description),
        })
        .collect()
}

pub fn dossier_stamp_duties(movements: &MovementsManager, range: DateRange) -> Vec<DossierStampDuty> {
    movements
        .by_description(DOSSIER_STAMP_DUTY)
        .filter(|movement| range.contains(&movement.operation_date))
        .map(|movement| DossierStampDuty {
            operation_date: movement.operation_date,
            amount: -movement.amount,
            dossier: movement
                .full_description
                .split_whitespace()
                .last()
                .map(|dossier| dossier.to_string()),
        })
        .collect()
}

/* Every tax and withholding paid in the range, as a positive amount */
pub fn total_taxes(movements: &MovementsManager, range: DateRange) -> Decimal {
    -movements
        .in_range(range)
        .filter(|movement| movement.is_category(MovementCategory::Tasse))
        .map(|movement| movement.amount)
        .sum::<Decimal>()
        .round_dp(2)
}

lazy_static! {
    static ref DOTTED_DATE: Regex = Regex::new(r"\d{2}\.\d{2}\.\d{4}").expect("Invalid date pattern");
}

/* First dd.mm.yyyy date written in a description */
fn find_reference_date(description: &str) -> Option<NaiveDate> {
    DOTTED_DATE
        .find(description)
        .and_then(|found| parse_date(found.as_str()))
}
