/* Weighted average cost analysis of the orders of a security.

The orders are split in three: buys, sells and cash flows (coupons, dividends, taxes...).
Purchase order does not matter (this is not FIFO): every unit bought costs the average price.

    avg_buy_price = sum(price * quantity) / quantity_bought   (same for sells)
    net_proceeds  = cash flows + sells - quantity_sold * avg_buy_price - fees
    yield_ratio   = net_proceeds / cost_basis, once something was sold

Bond prices are quoted per 100 of nominal value, their averages are divided by 100.
Nothing is rounded before the end.
*/
use hashbrown::HashMap;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::structs::{
    AnalysisResult, InstrumentType, OrderRecord, OrdersManager, PortfolioAnalysis, RecordKind,
    SecurityAnalysis, SecuritiesManager,
};

const MONEY_DECIMALS: u32 = 2;
const RATIO_DECIMALS: u32 = 4;

/* Running sums of one side (buys or sells) */
#[derive(Default)]
struct SideTotals {
    quantity: Decimal,
    value: Decimal, // sum of price * quantity
    amount: Decimal,
}

impl SideTotals {
    fn add(&mut self, order: &OrderRecord) {
        self.quantity += order.quantity;
        self.value += order.price * order.quantity;
        self.amount += order.amount;
    }

    fn average_price(&self) -> Decimal {
        if self.quantity.is_zero() {
            return Decimal::ZERO;
        }
        self.value / self.quantity
    }
}

/* Input is expected to be clean (see parsing): non negative quantities and fees, and kinds
classified from the price. Order of the records has no effect on the result. */
pub fn analyze_orders(records: &[OrderRecord], instrument_type: &InstrumentType) -> AnalysisResult {
    let mut buys = SideTotals::default();
    let mut sells = SideTotals::default();
    let mut cash_flows = Decimal::ZERO;
    let mut total_fees = Decimal::ZERO;

    for order in records {
        match order.kind {
            RecordKind::Buy => buys.add(order),
            RecordKind::Sell => sells.add(order),
            RecordKind::CashFlow => cash_flows += order.amount,
        }
        total_fees += order.fee;
    }

    let mut avg_buy_price = buys.average_price();
    let mut avg_sell_price = sells.average_price();
    if instrument_type.is_bond() {
        avg_buy_price /= InstrumentType::BOND_PAR;
        avg_sell_price /= InstrumentType::BOND_PAR;
    }

    let net_proceeds = cash_flows + sells.amount - sells.quantity * avg_buy_price - total_fees;
    let cost_basis = buys.quantity * avg_buy_price;
    let net_quantity = buys.quantity - sells.quantity;
    let book_value = net_quantity * avg_buy_price + net_proceeds;

    let yield_ratio = if sells.quantity > Decimal::ZERO && avg_buy_price > Decimal::ZERO {
        net_proceeds / cost_basis
    } else {
        Decimal::ZERO
    };

    AnalysisResult {
        avg_buy_price: avg_buy_price.round_dp(MONEY_DECIMALS),
        avg_sell_price: avg_sell_price.round_dp(MONEY_DECIMALS),
        quantity_bought: buys.quantity,
        quantity_sold: sells.quantity,
        net_quantity,
        cost_basis: cost_basis.round_dp(MONEY_DECIMALS),
        net_proceeds: net_proceeds.round_dp(MONEY_DECIMALS),
        total_fees: total_fees.round_dp(MONEY_DECIMALS),
        yield_ratio: yield_ratio.round_dp(RATIO_DECIMALS),
        book_value: book_value.round_dp(MONEY_DECIMALS),
    }
}

/* Analyze every security that has orders, with the instrument registered for it */
pub fn analyze_portfolio(orders: &OrdersManager, securities: &SecuritiesManager) -> PortfolioAnalysis {
    let groups: HashMap<String, Vec<OrderRecord>> = orders.group_by_isin();
    let mut isins: Vec<&String> = groups.keys().collect();
    isins.sort();

    let mut portfolio = PortfolioAnalysis::default();
    for isin in isins {
        let records = &groups[isin];
        let security = securities.get(isin);
        if security.is_none() {
            warn!("No security registered for {isin}, its orders are valued as a plain instrument");
        }
        let instrument_type = securities.instrument_type(isin);
        let result = analyze_orders(records, &instrument_type);
        debug!("{isin}: {} orders analyzed", records.len());

        portfolio.total_cost_basis += result.cost_basis;
        portfolio.total_net_proceeds += result.net_proceeds;
        portfolio.total_fees += result.total_fees;
        portfolio.total_book_value += result.book_value;
        portfolio.securities.push(SecurityAnalysis {
            isin: isin.clone(),
            name: security.map(|s| s.name.clone()),
            instrument_type,
            orders: records.len(),
            result,
        });
    }
    portfolio
}
