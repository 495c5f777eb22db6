//! Runtime configuration, from CLI flags or environment variables.

use crate::error::PartyError;
use clap::Parser;
use pizza_core::PRICE_PER_PIZZA;
use std::path::PathBuf;

/// Settings for a party book.
///
/// Parsed by the binary with [`Parser::parse`]; library users and tests start
/// from [`PartyConfig::default`].
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "pizza-party",
    version,
    about = "Works out how many pizzas a group needs and who owes what"
)]
pub struct PartyConfig {
    /// Price of one whole pizza. A half-and-half is billed the same.
    ///
    /// Environment variable: `PIZZA_PRICE_PER_PIZZA`
    #[arg(long, env = "PIZZA_PRICE_PER_PIZZA", default_value_t = PRICE_PER_PIZZA)]
    pub price_per_pizza: f64,

    /// Capacity of the book's request channel. Clients wait when it is full.
    ///
    /// Environment variable: `PIZZA_BUFFER_SIZE`
    #[arg(long, env = "PIZZA_BUFFER_SIZE", default_value_t = 32)]
    pub buffer_size: usize,

    /// Seed for the random titles handed to top eaters.
    ///
    /// Environment variable: `PIZZA_TITLE_SEED`
    #[arg(long, env = "PIZZA_TITLE_SEED", default_value_t = 42)]
    pub title_seed: u64,

    /// JSON file holding an array of order forms to place on startup.
    ///
    /// Environment variable: `PIZZA_ORDERS`
    #[arg(long, env = "PIZZA_ORDERS")]
    pub orders: Option<PathBuf>,
}

impl Default for PartyConfig {
    fn default() -> Self {
        Self {
            price_per_pizza: PRICE_PER_PIZZA,
            buffer_size: 32,
            title_seed: 42,
            orders: None,
        }
    }
}

impl PartyConfig {
    pub fn validate(&self) -> Result<(), PartyError> {
        if !self.price_per_pizza.is_finite() || self.price_per_pizza < 0.0 {
            return Err(PartyError::Config(format!(
                "PIZZA_PRICE_PER_PIZZA must be a non-negative number, got {}",
                self.price_per_pizza
            )));
        }
        if self.buffer_size == 0 {
            return Err(PartyError::Config(
                "PIZZA_BUFFER_SIZE must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let parsed = PartyConfig::try_parse_from(["pizza-party"]).unwrap();
        assert_eq!(parsed.buffer_size, PartyConfig::default().buffer_size);
        assert_eq!(parsed.title_seed, 42);
        assert_eq!(parsed.price_per_pizza, 10.53);
    }

    #[test]
    fn test_flags_override_defaults() {
        let parsed = PartyConfig::try_parse_from([
            "pizza-party",
            "--price-per-pizza",
            "12.5",
            "--buffer-size",
            "4",
            "--title-seed",
            "7",
            "--orders",
            "party.json",
        ])
        .unwrap();
        assert_eq!(parsed.price_per_pizza, 12.5);
        assert_eq!(parsed.buffer_size, 4);
        assert_eq!(parsed.title_seed, 7);
        assert_eq!(parsed.orders, Some(PathBuf::from("party.json")));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(PartyConfig::default().validate().is_ok());

        let negative = PartyConfig {
            price_per_pizza: -1.0,
            ..PartyConfig::default()
        };
        assert!(matches!(negative.validate(), Err(PartyError::Config(_))));

        let nan = PartyConfig {
            price_per_pizza: f64::NAN,
            ..PartyConfig::default()
        };
        assert!(nan.validate().is_err());

        let unbuffered = PartyConfig {
            buffer_size: 0,
            ..PartyConfig::default()
        };
        assert!(matches!(unbuffered.validate(), Err(PartyError::Config(_))));
    }
}
