//! # statics_core - Structural Statics Computation Core
//!
//! `statics_core` computes support reactions, shear and moment diagrams,
//! truss member forces and standard load combinations for linear elastic
//! structures, with a material catalog and unit conversions alongside. All
//! inputs and outputs are JSON-serializable so any front end can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use statics_core::calculations::{analyze, BeamConfig, Support};
//! use statics_core::loads::Load;
//!
//! let config = BeamConfig::new(8.0)
//!     .with_support(Support::fixed(0.0))
//!     .with_load(Load::point(15.0, 8.0));
//!
//! let results = analyze(&config).unwrap();
//! assert!((results.reactions[0].moment - 120.0).abs() < 1e-9);
//!
//! let json = serde_json::to_string_pretty(&results).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam reactions, diagrams, truss stiffness solver
//! - [`loads`] - Beam loads and standard load combinations
//! - [`materials`] - Material catalog (concrete, steel, timber, aluminum)
//! - [`checks`] - Stress checks against design strengths
//! - [`linalg`] - Dense matrix and LU decomposition
//! - [`units`] - Type-safe unit wrappers and conversions
//! - [`settings`] - Analysis settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod checks;
pub mod errors;
pub mod linalg;
pub mod loads;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{AnalysisError, StaticsResult};
pub use settings::AnalysisSettings;
