#![warn(clippy::all, clippy::nursery)]

use clap::{Parser, Subcommand};
use session::{print_prices, run_demo, run_session};

pub mod commands;
pub mod error;
pub mod models;
pub mod pricing;
pub mod session;

pub mod prelude {
    pub use crate::{error::InternalError, models::*};

    pub type Result<T> = core::result::Result<T, InternalError>;
}

#[derive(Parser)]
#[command(about = "Brew potions against a gold balance.")]
pub struct CauldronCli {
    #[command(subcommand)]
    pub command: Option<CauldronCommands>,
}

#[derive(Subcommand)]
pub enum CauldronCommands {
    /// Run the fixed brewing demonstration.
    Demo,
    /// Start an interactive brewing session.
    Session {
        /// Brewer running the session.
        #[arg(long, default_value = "Gandalf, the Wise")]
        name: String,
        /// Starting gold balance.
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        gold: f64,
    },
    /// View the ingredient prices.
    Prices,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CauldronCli::parse();
    match cli.command.unwrap_or(CauldronCommands::Demo) {
        CauldronCommands::Demo => run_demo(),
        CauldronCommands::Session { name, gold } => run_session(name, gold).await?,
        CauldronCommands::Prices => print_prices(),
    }
    Ok(())
}
