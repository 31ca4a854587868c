use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::generate_id;

use super::RecordId;

/* A movement ("movimento") of the current account. Incomes and expenses are two columns in the
export, they are merged into a single signed amount at ingestion. */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movement {
    pub id: RecordId,
    pub operation_date: NaiveDate,
    pub value_date: Option<NaiveDate>,
    pub amount: Decimal,
    pub description: String,
    pub full_description: String,
}

impl Movement {
    pub fn new(
        operation_date: NaiveDate,
        value_date: Option<NaiveDate>,
        amount: Decimal,
        description: String,
        full_description: String,
    ) -> Self {
        let id = generate_id(&[
            &operation_date.to_string(),
            &amount.normalize().to_string(),
            &full_description,
        ]);
        Self {
            id,
            operation_date,
            value_date,
            amount,
            description,
            full_description,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /* Main category, used for display */
    pub fn category(&self) -> MovementCategory {
        MovementCategory::of(&self.description)
    }

    /* Categories overlap: a redemption with a withholding is both a trade and a tax */
    pub fn is_category(&self, category: MovementCategory) -> bool {
        category.matches(&self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementCategory {
    CompravenditaTitoli,
    SpeseConto,
    Bonifici,
    Commissioni,
    Tasse,
    Dividendi,
    AltriMovimenti,
    Interessi,
}

impl MovementCategory {
    pub const ALL: [MovementCategory; 8] = [
        MovementCategory::CompravenditaTitoli,
        MovementCategory::SpeseConto,
        MovementCategory::Bonifici,
        MovementCategory::Commissioni,
        MovementCategory::Tasse,
        MovementCategory::Dividendi,
        MovementCategory::AltriMovimenti,
        MovementCategory::Interessi,
    ];

    /* Categories matched by keyword, in matching order. AltriMovimenti is whatever is left. */
    const MATCHED: [MovementCategory; 6] = [
        MovementCategory::Bonifici,
        MovementCategory::CompravenditaTitoli,
        MovementCategory::Tasse,
        MovementCategory::Dividendi,
        MovementCategory::Interessi,
        MovementCategory::SpeseConto,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            MovementCategory::Bonifici => &["bonifico"],
            MovementCategory::CompravenditaTitoli => &["compravendita titoli", "rimborso titoli"],
            MovementCategory::Tasse => &["imposta", "riten"],
            MovementCategory::Dividendi => &["stacco cedole", "dividendo"],
            MovementCategory::Interessi => &["interessi"],
            MovementCategory::SpeseConto => &["canone mensile"],
            MovementCategory::Commissioni | MovementCategory::AltriMovimenti => &[],
        }
    }

    pub fn matches(&self, description: &str) -> bool {
        let description = description.to_lowercase();
        match self {
            MovementCategory::AltriMovimenti => !Self::MATCHED
                .iter()
                .any(|category| category.matches(&description)),
            _ => self
                .keywords()
                .iter()
                .any(|keyword| description.contains(keyword)),
        }
    }

    /* First matching category of a description */
    pub fn of(description: &str) -> MovementCategory {
        Self::MATCHED
            .iter()
            .copied()
            .find(|category| category.matches(description))
            .unwrap_or(MovementCategory::AltriMovimenti)
    }

    pub fn from_name(s: &str) -> Option<MovementCategory> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(s.trim()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            MovementCategory::CompravenditaTitoli => "CompravenditaTitoli",
            MovementCategory::SpeseConto => "SpeseConto",
            MovementCategory::Bonifici => "Bonifici",
            MovementCategory::Commissioni => "Commissioni",
            MovementCategory::Tasse => "Tasse",
            MovementCategory::Dividendi => "Dividendi",
            MovementCategory::AltriMovimenti => "AltriMovimenti",
            MovementCategory::Interessi => "Interessi",
        }
    }
}
