pub mod config;
pub mod errors;
pub mod functions;
pub mod parsing;
pub mod report;
pub mod structs;
pub mod utils;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use log::{error, info};

use config::Config;
use errors::AppError;
use functions::{
    account_stamp_duties, analyze_orders, analyze_portfolio, dossier_stamp_duties, monthly_flow,
    monthly_in_and_out, summary, total_taxes, Flow,
};
use parsing::import_file;
use structs::{DateRange, MovementCategory, Storage};
use utils::{init_logging, parse_date, today};

#[derive(Parser)]
#[command(name = "portafoglio", about = "Personal finance dashboard over bank exports")]
struct Args {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import movements, orders or securities exports (recognized by file name)
    Import { files: Vec<String> },
    /// Liquidity, investments and patrimony
    Summary,
    /// Analysis of every security with orders
    Portfolio,
    /// Details, orders and analysis of one security
    Security { isin: String },
    /// Registered securities
    Securities {
        #[arg(long)]
        bonds: bool,
    },
    /// Stamp duties and taxes paid
    Taxes {
        #[arg(long, value_parser = cli_date)]
        from: Option<NaiveDate>,
        #[arg(long, value_parser = cli_date)]
        to: Option<NaiveDate>,
    },
    /// Monthly incomes and expenses, or the monthly total of a flow
    Monthly {
        #[arg(long, value_enum)]
        flow: Option<FlowArg>,
    },
    /// Movements of the current account
    Movements {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_parser = cli_date)]
        from: Option<NaiveDate>,
        #[arg(long, value_parser = cli_date)]
        to: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FlowArg {
    ExternalToAccount,
    AccountToExternal,
    AccountToPortfolio,
    PortfolioToAccount,
}

impl From<FlowArg> for Flow {
    fn from(flow: FlowArg) -> Self {
        match flow {
            FlowArg::ExternalToAccount => Flow::ExternalToAccount,
            FlowArg::AccountToExternal => Flow::AccountToExternal,
            FlowArg::AccountToPortfolio => Flow::AccountToPortfolio,
            FlowArg::PortfolioToAccount => Flow::PortfolioToAccount,
        }
    }
}

fn cli_date(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("invalid date '{value}', expected dd/mm/yyyy"))
}

fn main() {
    dotenv().ok();
    init_logging();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;
    info!("Using data directory {}", config.data_dir);
    let mut storage = Storage::open(&config.data_dir)?;

    match args.command {
        Command::Import { files } => {
            for file in &files {
                let imported = import_file(file, config.csv_delimiter, &mut storage).map_err(
                    |error| AppError::Parsing {
                        file: file.clone(),
                        error,
                    },
                )?;
                report::print_import(file, &imported);
            }
            storage.save()?;
        }
        Command::Summary => {
            let summary = summary(&storage.movements, &storage.orders, today());
            if args.json {
                report::print_json(&summary)?;
            } else {
                report::print_summary(&summary);
            }
        }
        Command::Portfolio => {
            let portfolio = analyze_portfolio(&storage.orders, &storage.securities);
            if args.json {
                report::print_json(&portfolio)?;
            } else {
                report::print_portfolio(&portfolio);
            }
        }
        Command::Security { isin } => {
            let isin = isin.trim().to_uppercase();
            let security = storage.securities.get(&isin);
            let orders = storage.orders.get_by_isin(&isin);
            if security.is_none() && orders.is_empty() {
                return Err(AppError::UnknownSecurity(isin));
            }
            let result = analyze_orders(&orders, &storage.securities.instrument_type(&isin));
            if args.json {
                report::print_json(&result)?;
            } else {
                report::print_security(security, &isin);
                println!();
                report::print_orders(&orders);
                println!();
                report::print_analysis(&result);
            }
        }
        Command::Securities { bonds } => {
            let securities = if bonds {
                storage.securities.bonds()
            } else {
                storage.securities.shares()
            };
            if args.json {
                report::print_json(&securities)?;
            } else {
                report::print_securities(&securities);
            }
        }
        Command::Taxes { from, to } => {
            let range = DateRange::new(from, to)?;
            let account = account_stamp_duties(&storage.movements, range);
            let dossier = dossier_stamp_duties(&storage.movements, range);
            let total = total_taxes(&storage.movements, range);
            if args.json {
                report::print_json(&(account, dossier, total))?;
            } else {
                report::print_taxes(&account, &dossier, total);
            }
        }
        Command::Monthly { flow } => match flow {
            Some(flow) => {
                let months = monthly_flow(&storage.movements, flow.into());
                if args.json {
                    report::print_json(&months)?;
                } else {
                    report::print_flow(&months);
                }
            }
            None => {
                let months = monthly_in_and_out(&storage.movements);
                if args.json {
                    report::print_json(&months)?;
                } else {
                    report::print_monthly(&months);
                }
            }
        },
        Command::Movements { category, from, to } => {
            let range = DateRange::new(from, to)?;
            let category = match category {
                Some(name) => Some(
                    MovementCategory::from_name(&name).ok_or(AppError::UnknownCategory(name))?,
                ),
                None => None,
            };
            let movements: Vec<_> = storage
                .movements
                .in_range(range)
                .filter(|movement| category.map_or(true, |c| movement.is_category(c)))
                .collect();
            if args.json {
                report::print_json(&movements)?;
            } else {
                report::print_movements(&movements);
            }
        }
    }
    Ok(())
}
