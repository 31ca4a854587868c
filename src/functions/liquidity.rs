/* Views over the current account and the orders: how much cash is available, how much was invested,
and how money moved month after month. */
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    structs::{DateRange, Movement, MovementCategory, MovementsManager, OrdersManager},
    utils::month_key,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub liquidity: Decimal,
    pub investments: Decimal,
    pub patrimony: Decimal,
    pub liquidity_last_30_days: Decimal,
    pub investments_last_30_days: Decimal,
    pub patrimony_last_30_days: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyInOut {
    pub month: String,
    pub incomes: Decimal,
    pub expenses: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    ExternalToAccount,
    AccountToExternal,
    AccountToPortfolio,
    PortfolioToAccount,
}

impl Flow {
    pub fn matches(&self, movement: &Movement) -> bool {
        match self {
            Flow::ExternalToAccount => {
                movement.is_income() && movement.is_category(MovementCategory::Bonifici)
            }
            Flow::AccountToExternal => {
                movement.is_expense() && movement.is_category(MovementCategory::Bonifici)
            }
            Flow::AccountToPortfolio => {
                movement.is_expense() && movement.is_category(MovementCategory::CompravenditaTitoli)
            }
            Flow::PortfolioToAccount => {
                movement.is_income() && movement.is_category(MovementCategory::CompravenditaTitoli)
            }
        }
    }
}

/* Cash on the current account */
pub fn liquidity(movements: &MovementsManager, range: DateRange) -> Decimal {
    movements
        .in_range(range)
        .map(|movement| movement.amount)
        .sum::<Decimal>()
        .round_dp(2)
}

/* Money moved from the account to buy securities, net of what came back */
pub fn invested_from_account(movements: &MovementsManager, range: DateRange) -> Decimal {
    -movements
        .in_range(range)
        .filter(|movement| movement.is_category(MovementCategory::CompravenditaTitoli))
        .map(|movement| movement.amount)
        .sum::<Decimal>()
        .round_dp(2)
}

/* Signed sum of the orders: buys are negative, sells and coupons positive */
pub fn investments(orders: &OrdersManager, range: DateRange) -> Decimal {
    orders
        .in_range(range)
        .map(|order| order.amount)
        .sum::<Decimal>()
        .round_dp(2)
}

pub fn summary(movements: &MovementsManager, orders: &OrdersManager, today: NaiveDate) -> Summary {
    let everything = DateRange {
        start: NaiveDate::MIN,
        end: today,
    };
    let last_30_days = DateRange {
        start: today - Duration::days(30),
        end: today,
    };

    let liquidity_total = liquidity(movements, everything);
    let investments_total = investments(orders, everything);
    let liquidity_recent = liquidity(movements, last_30_days);
    let investments_recent = investments(orders, last_30_days);

    Summary {
        liquidity: liquidity_total,
        investments: investments_total,
        patrimony: liquidity_total + investments_total,
        liquidity_last_30_days: liquidity_recent,
        investments_last_30_days: investments_recent,
        patrimony_last_30_days: liquidity_recent + investments_recent,
    }
}

/* Incomes and expenses of each month, oldest month first */
pub fn monthly_in_and_out(movements: &MovementsManager) -> Vec<MonthlyInOut> {
    let mut months: BTreeMap<String, MonthlyInOut> = BTreeMap::new();
    for movement in movements.get() {
        let key = month_key(&movement.operation_date);
        let month = months.entry(key.clone()).or_insert_with(|| MonthlyInOut {
            month: key,
            ..Default::default()
        });
        if movement.is_income() {
            month.incomes += movement.amount;
        } else {
            month.expenses += movement.amount;
        }
    }
    months.into_values().collect()
}

/* Total of a flow for each month where it happened */
pub fn monthly_flow(movements: &MovementsManager, flow: Flow) -> Vec<(String, Decimal)> {
    let mut months: BTreeMap<String, Decimal> = BTreeMap::new();
    for movement in movements.get().iter().filter(|m| flow.matches(m)) {
        *months.entry(month_key(&movement.operation_date)).or_default() += movement.amount;
    }
    months.into_iter().collect()
}
