use std::path::PathBuf;
use std::process;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{error, info};

use crate::command::{execute_calc, execute_export, format_profit, record_trade, render_table};
use crate::config::{default_config_path, Config};
use crate::db::Database;
use crate::transaction::TradeType;
use crate::window::Window;

mod command;
mod common;
mod config;
mod db;
mod profit;
mod transaction;
mod util;
mod window;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Trade store file, overrides `store_path` from the config file
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sell stocks
    #[command(visible_alias = "s")]
    Sell {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },

    /// Buy stocks
    #[command(visible_alias = "b")]
    Buy {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },

    /// Calculate realized profit
    #[command(visible_alias = "c")]
    Calc(CalcArgs),

    /// Show transaction records
    #[command(visible_alias = "l")]
    List,

    /// Export transaction records to a csv file
    #[command(visible_alias = "e")]
    Export {
        file: PathBuf,
    },
}

#[derive(Args)]
struct CalcArgs {
    /// Profit of today's trades
    #[arg(short, long)]
    today: bool,

    /// Profit of this week's trades
    #[arg(short, long)]
    week: bool,

    /// Profit of this month's trades
    #[arg(short, long)]
    month: bool,

    /// Profit of all trades
    #[arg(short, long)]
    all: bool,

    /// Show buy, sell and fee totals
    #[arg(short, long)]
    verbose: bool,
}

impl CalcArgs {
    fn windows(&self) -> Vec<Window> {
        [
            (self.today, Window::Today),
            (self.week, Window::Week),
            (self.month, Window::Month),
            (self.all, Window::All),
        ]
            .into_iter()
            .filter(|(selected, _)| *selected)
            .map(|(_, window)| window)
            .collect()
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli: Cli = Cli::parse();

    process::exit(exit_code(run(cli)));
}

/// Report a failed run on stderr. Success is 0, any error is 1.
fn exit_code(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = Config::load_from_file(&config_path)?;
    let store_path = config.resolve_store_path(cli.store);
    let mut db = Database::load(&store_path)?;
    info!("Using store {}", db.file_path().display());
    let today = util::today();

    match cli.command {
        Commands::Sell { amount, price } => {
            let t = record_trade(&mut db, TradeType::Sell, &amount, &price, today)
                .context("Unable to record sell")?;
            println!("Recorded sell of {} @ {}", t.amount, t.price);
        },
        Commands::Buy { amount, price } => {
            let t = record_trade(&mut db, TradeType::Buy, &amount, &price, today)
                .context("Unable to record buy")?;
            println!("Recorded buy of {} @ {}", t.amount, t.price);
        },
        Commands::Calc(args) => {
            let windows = args.windows();
            if windows.is_empty() {
                info!("No window selected, pass -t, -w, -m or -a");
            }
            for (window, breakdown) in execute_calc(&db, &windows, today)? {
                println!("{}: {}", window.label(), format_profit(breakdown.profit));
                if args.verbose {
                    println!("  bought {}, sold {}, fees {}",
                             format_profit(breakdown.buy_sum),
                             format_profit(breakdown.sell_sum),
                             format_profit(breakdown.fee));
                }
            }
        },
        Commands::List => {
            println!("{}", render_table(db.transactions()));
        },
        Commands::Export { file } => {
            let count = execute_export(&db, &file)?;
            println!("Exported {} transactions to {}", count, file.display());
        },
    }

    Ok(())
}
