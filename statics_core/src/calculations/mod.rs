//! # Structural Calculations
//!
//! Each solver is a pure function over an immutable input value:
//!
//! - [`beam`] - Support reactions of a statically determinate beam
//! - [`diagrams`] - Shear and moment diagrams from a solved beam
//! - [`truss`] - Member forces of a plane pin-jointed truss (direct stiffness)
//!
//! Inputs and results are JSON-serializable; failures come back as
//! [`AnalysisError`](crate::errors::AnalysisError).

pub mod beam;
pub mod diagrams;
pub mod truss;

// Re-export commonly used types
pub use beam::{BeamConfig, ReactionResult, Support, SupportKind};
pub use diagrams::{analyze, AnalysisResults, Diagrams, Extremum};
pub use truss::{
    DeterminacyPolicy, ForceKind, MemberForce, NodalLoad, NodeDisplacement, NodeReaction,
    TrussMember, TrussModel, TrussNode, TrussOptions, TrussResult,
};
