//! Beam loads and load combinations
//!
//! # Overview
//!
//! - [`Load`] - Point, uniform, triangular and moment loads on a beam
//! - [`LoadSymbol`] - The characteristic load categories G, Q, W, S
//! - [`LoadCombination`] - Factors for one standard combination
//! - [`evaluate_all`] / [`summarize`] - Apply the standard catalog
//!
//! # Example
//!
//! ```
//! use statics_core::loads::{evaluate_all, critical_combination, LoadSymbol};
//! use std::collections::HashMap;
//!
//! let mut loads = HashMap::new();
//! loads.insert(LoadSymbol::G, 10.0);
//! loads.insert(LoadSymbol::Q, 5.0);
//!
//! let results = evaluate_all(&loads);
//! let critical = critical_combination(&results).unwrap();
//! println!("{} governs: {:.1}", critical.name, critical.value);
//! ```

pub mod beam_load;
pub mod combinations;
pub mod load_types;

pub use beam_load::{DistributedSegment, Load};
pub use combinations::{
    critical_combination,
    evaluate,
    evaluate_all,
    standard_combinations,
    summarize,
    CombinationResult,
    CombinationSummary,
    LoadCombination,
};
pub use load_types::LoadSymbol;
