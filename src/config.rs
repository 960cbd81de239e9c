use clap::Parser;

/// Factory-pattern vehicle builder with randomized attributes.
#[derive(Debug, Parser)]
#[command(name = "motorfleet")]
#[command(about = "Builds vehicles from kind codes and prints their descriptions")]
pub struct Cli {
    /// Vehicle kind codes: 0 = bike, 1 = scooter, 2 = car, 3 = bus
    #[arg(value_name = "CODE", allow_negative_numbers = true)]
    pub codes: Vec<String>,

    /// RNG seed for reproducible runs (random if omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Resolved run configuration.
pub struct AppConfig {
    pub codes: Vec<String>,
    pub seed: u64,
}

impl AppConfig {
    pub fn resolve(cli: &Cli) -> Self {
        let seed = cli.seed.unwrap_or_else(rand::random);

        Self {
            codes: cli.codes.clone(),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_is_kept() {
        let cli = Cli {
            codes: vec!["0".to_string()],
            seed: Some(42),
        };
        let cfg = AppConfig::resolve(&cli);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.codes, vec!["0".to_string()]);
    }
}
