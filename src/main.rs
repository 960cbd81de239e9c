mod config;
mod driver;
mod error;
mod factory;
mod sampler;
mod vehicle;

use clap::Parser;
use config::{AppConfig, Cli};

fn main() {
    let cli = Cli::parse();

    let cfg = AppConfig::resolve(&cli);

    if let Err(e) = driver::run(&cfg) {
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
}
