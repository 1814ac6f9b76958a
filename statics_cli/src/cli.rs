//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "statics",
    version,
    about = "Structural statics calculator - reactions, diagrams, trusses, load combinations",
    long_about = "Solve beams and plane trusses described in JSON, evaluate standard\n\
                  load combinations and look up material design properties."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON instead of a text report.
    #[arg(long, global = true)]
    pub json: bool,

    /// Analysis settings file (JSON); missing fields take defaults.
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Solve a beam: reactions, shear and moment diagrams.
    Beam {
        /// Beam configuration JSON ("-" reads stdin).
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Solve a plane truss by the direct stiffness method.
    Truss {
        /// Truss model JSON with nodes, members and loads ("-" reads stdin).
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Evaluate the standard load combinations.
    Combos {
        /// Dead load effect (G)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        dead: f64,
        /// Live load effect (Q)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        live: f64,
        /// Wind load effect (W)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        wind: f64,
        /// Snow load effect (S)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        snow: f64,
    },

    /// Show material properties, or list the catalog when no grade is given.
    Material {
        /// Grade designation, e.g. S355, C30/37, GL24h, 6061-T6.
        grade: Option<String>,

        /// Check this stress (MPa) against the design strengths.
        #[arg(long, allow_negative_numbers = true)]
        stress: Option<f64>,
    },

    /// Convert a value between units of the same dimension.
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit symbol, e.g. kN
        from: String,
        /// Target unit symbol, e.g. N
        to: String,
    },
}
