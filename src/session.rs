use tokio::io::{self, AsyncBufReadExt};

use crate::{
    pricing::{HERB_PRICE, MUSHROOM_PRICE, StandardPrices},
    prelude::*,
};

/// The fixed demonstration batch: two brews against a hardcoded starting
/// state, then a status report.
pub fn run_demo() {
    let mut wizard = Brewer::new("Gandalf, the Wise".to_string(), 100.0);

    println!("{}", wizard.attempt_brew(3, 2, &StandardPrices));
    println!("{}", wizard.attempt_brew(5, 4, &StandardPrices));

    println!("\n{wizard}");
}

pub async fn run_session(name: String, starting_gold: f64) -> Result<()> {
    let mut brewer = Brewer::new(name, starting_gold);
    print_prices();
    println!("Commands: brew <herbs> <mushrooms>, status, quit");

    let mut lines = io::BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "quit" | "exit" => break,
            "status" => println!("{brewer}"),
            _ => {
                let Ok((_, command)) = crate::commands::parse_brew(line) else {
                    println!("Invalid command");
                    continue;
                };
                println!(
                    "{}",
                    brewer.attempt_brew(command.herbs, command.mushrooms, &StandardPrices)
                );
            }
        }
    }

    println!("\n{brewer}");
    Ok(())
}

pub fn print_prices() {
    println!("Herbs: {HERB_PRICE:.2} gold each");
    println!("Mushrooms: {MUSHROOM_PRICE:.2} gold each");
}
