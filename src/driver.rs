use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::error::VehicleError;
use crate::factory;
use crate::vehicle::{Vehicle, VehicleKind};

/// Process each argument independently: PARSE -> DISPATCH -> CREATE -> PRINT.
/// A bad argument is reported on stderr and the loop moves on; only the
/// zero-argument case fails the whole run.
pub fn run(cfg: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    if cfg.codes.is_empty() {
        print_usage();
        return Err("enter a vehicle kind code".into());
    }

    let mut rng = StdRng::seed_from_u64(cfg.seed);

    for raw in &cfg.codes {
        match build_vehicle(raw, &mut rng) {
            Ok(vehicle) => println!("{}\n", vehicle),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}

pub fn build_vehicle(raw: &str, rng: &mut StdRng) -> Result<Vehicle, VehicleError> {
    let code: i64 = raw
        .trim()
        .parse()
        .map_err(|_| VehicleError::MalformedInput(raw.to_string()))?;

    let factory = factory::factory_for_code(code)?;
    Ok(factory.create(rng))
}

fn print_usage() {
    print!("{}", usage_legend());
}

fn usage_legend() -> String {
    let mut out = String::new();
    for kind in VehicleKind::ALL {
        out.push_str(&format!("{} = {}\n", kind, kind.code()));
    }
    out
}
