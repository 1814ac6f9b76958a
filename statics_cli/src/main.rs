//! # Statics CLI
//!
//! Command-line front end for `statics_core`. Inputs are the same JSON
//! documents the library deserializes, so a beam file looks like:
//!
//! ```json
//! {
//!   "length": 6.0,
//!   "supports": [
//!     { "kind": "Pinned", "position": 0.0 },
//!     { "kind": "Roller", "position": 6.0 }
//!   ],
//!   "loads": [ { "type": "Point", "position": 3.0, "magnitude": 10.0 } ]
//! }
//! ```

mod cli;
mod commands;

use clap::Parser;
use log::debug;

use statics_core::AnalysisError;

use crate::cli::{Cli, Command};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = commands::load_settings(cli.settings.as_deref())?;
    debug!("Settings: {:?}", settings);

    match &cli.command {
        Command::Beam { input } => commands::run_beam(input, &settings, cli.json),
        Command::Truss { input } => commands::run_truss(input, &settings, cli.json),
        Command::Combos {
            dead,
            live,
            wind,
            snow,
        } => commands::run_combos(*dead, *live, *wind, *snow, cli.json),
        Command::Material { grade, stress } => {
            commands::run_material(grade.as_deref(), *stress, &settings, cli.json)
        }
        Command::Convert { value, from, to } => commands::run_convert(*value, from, to, cli.json),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);

        // Structured errors also go out as JSON for front ends
        if let Some(analysis) = err.downcast_ref::<AnalysisError>() {
            if let Ok(json) = serde_json::to_string_pretty(analysis) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(1);
    }
}
