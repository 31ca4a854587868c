/* Text rendering of the views for the terminal. Amounts are already rounded by the functions. */
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    errors::AppError,
    functions::{AccountStampDuty, DossierStampDuty, MonthlyInOut, Summary},
    parsing::ImportReport,
    structs::{AnalysisResult, Movement, OrderRecord, PortfolioAnalysis, Security},
};

pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AppError::Output(e.to_string()))?;
    println!("{json}");
    Ok(())
}

pub fn print_import(file: &str, report: &ImportReport) {
    println!(
        "{file} ({}): {} inserted, {} already present, {} rejected",
        report.kind.name(),
        report.inserted,
        report.duplicates,
        report.rejected
    );
}

pub fn print_summary(summary: &Summary) {
    println!("{:<14}{:>14}{:>22}", "", "Total", "Last 30 days");
    println!(
        "{:<14}{:>14}{:>22}",
        "Liquidità",
        euro(summary.liquidity),
        euro(summary.liquidity_last_30_days)
    );
    println!(
        "{:<14}{:>14}{:>22}",
        "Investimenti",
        euro(summary.investments),
        euro(summary.investments_last_30_days)
    );
    println!(
        "{:<14}{:>14}{:>22}",
        "Patrimonio",
        euro(summary.patrimony),
        euro(summary.patrimony_last_30_days)
    );
}

pub fn print_security(security: Option<&Security>, isin: &str) {
    match security {
        Some(security) => {
            println!("Isin:      {}", security.isin);
            println!("Titolo:    {}", security.name);
            println!("Simbolo:   {}", security.symbol);
            println!("Mercato:   {}", security.market);
            println!("Strumento: {}", security.instrument_type.label());
            println!("Valuta:    {}", security.currency);
        }
        None => println!("Isin:      {isin} (not registered)"),
    }
}

pub fn print_orders(orders: &[OrderRecord]) {
    println!(
        "{:<12}{:>12}{:>12}{:>6}{:>14}{:>12}  {}",
        "Data", "Quantità", "Prezzo", "", "Importo", "Commiss.", "Tipo commissione"
    );
    for order in orders {
        println!(
            "{:<12}{:>12}{:>12}{:>6}{:>14}{:>12}  {}",
            order.operation_date.format("%d-%m-%Y").to_string(),
            order.quantity.normalize().to_string(),
            format!("{:.2}", order.price),
            order.currency,
            euro(order.amount),
            format!("{:.2}", order.fee),
            order.fee_kind
        );
    }
}

pub fn print_analysis(result: &AnalysisResult) {
    println!("Quantità attiva:            {}", result.net_quantity.normalize());
    println!("Quantità acquistata:        {}", result.quantity_bought.normalize());
    println!("Quantità venduta:           {}", result.quantity_sold.normalize());
    println!("Prezzo medio di acquisto:   {}", euro(result.avg_buy_price));
    println!("Prezzo medio di vendita:    {}", euro(result.avg_sell_price));
    println!("Costo totale:               {}", euro(result.cost_basis));
    println!("Totale commissioni:         {}", euro(result.total_fees));
    println!("Incassi netti:              {}", euro(result.net_proceeds));
    if result.has_sales() {
        println!("Rendimento:                 {}", percent(result.yield_ratio));
    } else {
        println!("Rendimento:                 - (nothing sold yet)");
    }
    println!("Valore:                     {}", euro(result.book_value));
}

pub fn print_portfolio(portfolio: &PortfolioAnalysis) {
    println!(
        "{:<14}{:<28}{:>10}{:>12}{:>14}{:>14}{:>10}",
        "Isin", "Titolo", "Quantità", "Pr. medio", "Costo", "Incassi", "Rend."
    );
    for security in &portfolio.securities {
        let result = &security.result;
        let yield_ratio = if result.has_sales() {
            percent(result.yield_ratio)
        } else {
            String::from("-")
        };
        println!(
            "{:<14}{:<28}{:>10}{:>12}{:>14}{:>14}{:>10}",
            security.isin,
            truncate(security.name.as_deref().unwrap_or("?"), 26),
            result.net_quantity.normalize().to_string(),
            euro(result.avg_buy_price),
            euro(result.cost_basis),
            euro(result.net_proceeds),
            yield_ratio
        );
    }
    println!();
    println!("Costo totale:       {}", euro(portfolio.total_cost_basis));
    println!("Incassi netti:      {}", euro(portfolio.total_net_proceeds));
    println!("Commissioni:        {}", euro(portfolio.total_fees));
    println!("Valore:             {}", euro(portfolio.total_book_value));
}

pub fn print_securities(securities: &[&Security]) {
    for security in securities {
        println!(
            "{:<14}{:<32}{:<14}{}",
            security.isin,
            truncate(&security.name, 30),
            security.instrument_type.label(),
            security.currency
        );
    }
}

pub fn print_taxes(account: &[AccountStampDuty], dossier: &[DossierStampDuty], total: Decimal) {
    println!("Imposte di bollo (conto corrente)");
    for duty in account {
        let reference = duty
            .reference_date
            .map(|date| date.format("%d-%m-%Y").to_string())
            .unwrap_or_else(|| String::from("-"));
        println!(
            "  {:<12}{:>12}  rif. {}",
            duty.operation_date.format("%d-%m-%Y").to_string(),
            euro(duty.amount),
            reference
        );
    }
    println!("Imposte sul dossier titoli");
    for duty in dossier {
        println!(
            "  {:<12}{:>12}  {}",
            duty.operation_date.format("%d-%m-%Y").to_string(),
            euro(duty.amount),
            duty.dossier.as_deref().unwrap_or("-")
        );
    }
    println!("Totale imposte e ritenute: {}", euro(total));
}

pub fn print_monthly(months: &[MonthlyInOut]) {
    println!("{:<10}{:>14}{:>14}", "Mese", "Entrate", "Uscite");
    for month in months {
        println!(
            "{:<10}{:>14}{:>14}",
            month.month,
            euro(month.incomes),
            euro(month.expenses)
        );
    }
}

pub fn print_flow(months: &[(String, Decimal)]) {
    println!("{:<10}{:>14}", "Mese", "Totale");
    for (month, total) in months {
        println!("{:<10}{:>14}", month, euro(*total));
    }
}

pub fn print_movements(movements: &[&Movement]) {
    for movement in movements {
        println!(
            "{:<12}{:>12}  {:<22}{}",
            movement.operation_date.format("%d-%m-%Y").to_string(),
            euro(movement.amount),
            movement.category().name(),
            movement.description
        );
    }
}

fn euro(amount: Decimal) -> String {
    format!("{:.2} €", amount)
}

fn percent(ratio: Decimal) -> String {
    format!("{:.2}%", ratio * Decimal::ONE_HUNDRED)
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
