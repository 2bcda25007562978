use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pricing::CostModel;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Brewer {
    name: String,
    gold_coins: f64,
    potions_brewed: u32,
}

impl Brewer {
    /// No validation: a negative starting balance and an empty name are
    /// accepted as given.
    pub const fn new(name: String, starting_gold: f64) -> Self {
        Self {
            name,
            gold_coins: starting_gold,
            potions_brewed: 0,
        }
    }

    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn gold_coins(&self) -> f64 {
        self.gold_coins
    }

    pub const fn potions_brewed(&self) -> u32 {
        self.potions_brewed
    }

    /// Brews a potion if the gold covers the ingredient bill. Negative
    /// counts are not rejected: a zero or negative bill always passes the
    /// guard, and a negative bill credits the balance.
    pub fn attempt_brew(
        &mut self,
        herbs: i32,
        mushrooms: i32,
        prices: &dyn CostModel,
    ) -> BrewOutcome {
        let total_cost = prices.total_cost(herbs, mushrooms);
        if total_cost <= self.gold_coins {
            self.gold_coins -= total_cost;
            self.potions_brewed += 1;
            BrewOutcome::Brewed { cost: total_cost }
        } else {
            BrewOutcome::ShortOfGold { needed: total_cost }
        }
    }
}

impl fmt::Display for Brewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Brewer Status ===")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Gold remaining: {:.2}", self.gold_coins)?;
        write!(f, "Potions brewed: {}", self.potions_brewed)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum BrewOutcome {
    Brewed { cost: f64 },
    ShortOfGold { needed: f64 },
}

impl fmt::Display for BrewOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brewed { cost } => {
                write!(f, "Success! Potion brewed for {cost:.2} gold.")
            }
            Self::ShortOfGold { needed } => {
                write!(f, "Not enough gold! Need: {needed:.2}")
            }
        }
    }
}
