use rust_decimal::Decimal;
use serde::Serialize;

use super::{InstrumentType, Isin};

/* Snapshot of cost basis and performance of one security, computed from its orders.
It is never persisted: it is recomputed every time it is needed. */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub avg_buy_price: Decimal,
    pub avg_sell_price: Decimal,
    pub quantity_bought: Decimal,
    pub quantity_sold: Decimal,
    pub net_quantity: Decimal,
    pub cost_basis: Decimal, // Cost of everything ever bought, not only what is still held
    pub net_proceeds: Decimal,
    pub total_fees: Decimal,
    pub yield_ratio: Decimal, // 0 until something is sold, check has_sales() before reading it
    pub book_value: Decimal,  // What is still held at the average cost plus what was already realized
}

impl AnalysisResult {
    pub fn has_sales(&self) -> bool {
        !self.quantity_sold.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityAnalysis {
    pub isin: Isin,
    pub name: Option<String>,
    pub instrument_type: InstrumentType,
    pub orders: usize,
    pub result: AnalysisResult,
}

/* Analysis of every security with orders, plus totals over the whole portfolio */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioAnalysis {
    pub securities: Vec<SecurityAnalysis>,
    pub total_cost_basis: Decimal,
    pub total_net_proceeds: Decimal,
    pub total_fees: Decimal,
    pub total_book_value: Decimal,
}
