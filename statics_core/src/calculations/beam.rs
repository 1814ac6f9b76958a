//! # Beam Equilibrium Solver
//!
//! Support reactions of a statically determinate straight beam from the two
//! transverse equilibrium equations (ΣFy = 0, ΣM = 0). Without axial loads
//! the horizontal equation is trivially satisfied and every horizontal
//! reaction is zero.
//!
//! ## Determinacy
//!
//! Reported unknowns are the total reaction components (Pinned 2, Roller 1,
//! Fixed 3). Classification uses the transverse components only (one
//! vertical per support, plus a moment for Fixed): fewer than two is a
//! mechanism, more than two is redundant.
//!
//! ## Sign Convention
//! - Reactions: vertical positive up, moment positive counter-clockwise
//! - Loads: forces positive down, applied moments positive counter-clockwise
//!
//! ## Example
//!
//! ```rust
//! use statics_core::calculations::beam::{solve, BeamConfig, Support};
//! use statics_core::loads::Load;
//!
//! let config = BeamConfig::new(6.0)
//!     .with_support(Support::pinned(0.0))
//!     .with_support(Support::roller(6.0))
//!     .with_load(Load::point(10.0, 2.0));
//!
//! let reactions = solve(&config).unwrap();
//! assert!((reactions[0].vertical - 6.667).abs() < 1e-3);
//! assert!((reactions[1].vertical - 3.333).abs() < 1e-3);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, StaticsResult};
use crate::linalg::{self, DenseMatrix};
use crate::loads::Load;

/// Independent equilibrium equations for a beam under transverse load
pub const EQUILIBRIUM_EQUATIONS: usize = 2;

/// Support boundary condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportKind {
    /// Restrains horizontal and vertical translation
    Pinned,
    /// Restrains vertical translation only
    Roller,
    /// Restrains both translations and rotation
    Fixed,
}

impl SupportKind {
    /// Reaction components this support provides
    pub fn unknown_count(&self) -> usize {
        match self {
            SupportKind::Pinned => 2,
            SupportKind::Roller => 1,
            SupportKind::Fixed => 3,
        }
    }

    /// Reaction components that take part in ΣFy and ΣM
    pub fn transverse_unknowns(&self) -> usize {
        match self {
            SupportKind::Pinned | SupportKind::Roller => 1,
            SupportKind::Fixed => 2,
        }
    }

    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SupportKind::Pinned => "Pinned",
            SupportKind::Roller => "Roller",
            SupportKind::Fixed => "Fixed",
        };
        write!(f, "{}", name)
    }
}

/// A support at a position along the beam (m from the left end)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    pub kind: SupportKind,
    pub position: f64,
}

impl Support {
    pub fn new(kind: SupportKind, position: f64) -> Self {
        Support { kind, position }
    }

    pub fn pinned(position: f64) -> Self {
        Support::new(SupportKind::Pinned, position)
    }

    pub fn roller(position: f64) -> Self {
        Support::new(SupportKind::Roller, position)
    }

    pub fn fixed(position: f64) -> Self {
        Support::new(SupportKind::Fixed, position)
    }

    pub fn unknown_count(&self) -> usize {
        self.kind.unknown_count()
    }
}

/// Beam geometry, supports and loads
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 6.0,
///   "supports": [
///     { "kind": "Pinned", "position": 0.0 },
///     { "kind": "Roller", "position": 6.0 }
///   ],
///   "loads": [
///     { "type": "Point", "position": 2.0, "magnitude": 10.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Beam length (m)
    pub length: f64,
    pub supports: Vec<Support>,
    #[serde(default)]
    pub loads: Vec<Load>,
}

impl BeamConfig {
    /// Create an unsupported, unloaded beam
    pub fn new(length: f64) -> Self {
        BeamConfig {
            length,
            supports: Vec::new(),
            loads: Vec::new(),
        }
    }

    /// Add a support (builder pattern)
    pub fn with_support(mut self, support: Support) -> Self {
        self.supports.push(support);
        self
    }

    /// Add a load (builder pattern)
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Validate geometry, support positions and loads
    pub fn validate(&self) -> StaticsResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(AnalysisError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be positive",
            ));
        }

        for (i, support) in self.supports.iter().enumerate() {
            let x = support.position;
            if !x.is_finite() || x < 0.0 || x > self.length {
                return Err(AnalysisError::invalid_input(
                    format!("supports[{}].position", i),
                    x.to_string(),
                    format!("Support must lie within 0..={}", self.length),
                ));
            }
            if self.supports[..i].iter().any(|other| other.position == x) {
                return Err(AnalysisError::invalid_input(
                    format!("supports[{}].position", i),
                    x.to_string(),
                    "Support positions must be unique",
                ));
            }
        }

        for load in &self.loads {
            load.validate(self.length)?;
        }
        Ok(())
    }

    /// Sum of all downward applied forces (kN)
    pub fn total_vertical_load(&self) -> f64 {
        self.loads.iter().map(Load::resultant).sum()
    }

    /// Total reaction components over all supports
    pub fn unknown_count(&self) -> usize {
        self.supports.iter().map(Support::unknown_count).sum()
    }
}

/// Reaction at one support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionResult {
    /// Index into `BeamConfig::supports`
    pub support_index: usize,
    /// Horizontal reaction (kN); zero without axial loads
    pub horizontal: f64,
    /// Vertical reaction (kN), positive up
    pub vertical: f64,
    /// Reaction moment (kN·m), positive counter-clockwise; zero unless Fixed
    pub moment: f64,
}

impl ReactionResult {
    fn new(support_index: usize, vertical: f64, moment: f64) -> Self {
        ReactionResult {
            support_index,
            horizontal: 0.0,
            vertical,
            moment,
        }
    }
}

/// Classify the support layout
///
/// Returns the total unknown count for a determinate layout.
pub fn check_determinacy(supports: &[Support]) -> StaticsResult<usize> {
    if supports.is_empty() {
        return Err(AnalysisError::InsufficientSupports);
    }

    let unknowns: usize = supports.iter().map(Support::unknown_count).sum();
    let transverse: usize = supports.iter().map(|s| s.kind.transverse_unknowns()).sum();
    debug!(
        "Beam determinacy: {} unknowns ({} transverse), {} equations",
        unknowns, transverse, EQUILIBRIUM_EQUATIONS
    );

    if transverse < EQUILIBRIUM_EQUATIONS {
        Err(AnalysisError::unstable(unknowns, EQUILIBRIUM_EQUATIONS))
    } else if transverse > EQUILIBRIUM_EQUATIONS {
        Err(AnalysisError::indeterminate(unknowns, EQUILIBRIUM_EQUATIONS))
    } else {
        Ok(unknowns)
    }
}

/// Solve for support reactions, one result per support in input order
pub fn solve(config: &BeamConfig) -> StaticsResult<Vec<ReactionResult>> {
    if config.supports.is_empty() {
        return Err(AnalysisError::InsufficientSupports);
    }
    config.validate()?;
    check_determinacy(&config.supports)?;

    let reactions = match config.supports.as_slice() {
        [a, b] if !a.kind.restrains_rotation() && !b.kind.restrains_rotation() => {
            solve_two_supports(config, a, b)
        }
        _ => solve_general(config)?,
    };

    for r in &reactions {
        debug!(
            "Reaction {}: V = {:.4} kN, M = {:.4} kN·m",
            r.support_index, r.vertical, r.moment
        );
    }
    Ok(reactions)
}

/// Closed form for two force-only supports
///
/// Moments about the first support give the second reaction, vertical
/// equilibrium gives the first.
fn solve_two_supports(config: &BeamConfig, first: &Support, second: &Support) -> Vec<ReactionResult> {
    debug!("Beam solve: two-support closed form");
    let total_load = config.total_vertical_load();
    let load_moment: f64 = config
        .loads
        .iter()
        .map(|load| load.moment_about(first.position))
        .sum();

    let r_second = -load_moment / (second.position - first.position);
    let r_first = total_load - r_second;

    vec![
        ReactionResult::new(0, r_first, 0.0),
        ReactionResult::new(1, r_second, 0.0),
    ]
}

/// Assemble ΣFy and ΣM (about x = 0) over the transverse unknowns and solve
fn solve_general(config: &BeamConfig) -> StaticsResult<Vec<ReactionResult>> {
    // (support index, is moment component)
    let columns: Vec<(usize, bool)> = config
        .supports
        .iter()
        .enumerate()
        .flat_map(|(i, s)| {
            let moment = s.kind.restrains_rotation().then_some((i, true));
            std::iter::once((i, false)).chain(moment)
        })
        .collect();
    debug!("Beam solve: general {}x{} system", EQUILIBRIUM_EQUATIONS, columns.len());

    let mut a = DenseMatrix::zeros(EQUILIBRIUM_EQUATIONS, columns.len());
    for (col, &(i, is_moment)) in columns.iter().enumerate() {
        if is_moment {
            a.set(1, col, 1.0);
        } else {
            a.set(0, col, 1.0);
            a.set(1, col, config.supports[i].position);
        }
    }

    let load_moment: f64 = config.loads.iter().map(|load| load.moment_about(0.0)).sum();
    let b = [config.total_vertical_load(), -load_moment];
    let x = linalg::solve(&a, &b)?;

    let mut reactions: Vec<ReactionResult> = (0..config.supports.len())
        .map(|i| ReactionResult::new(i, 0.0, 0.0))
        .collect();
    for (&(i, is_moment), value) in columns.iter().zip(x) {
        if is_moment {
            reactions[i].moment = value;
        } else {
            reactions[i].vertical = value;
        }
    }
    Ok(reactions)
}

/// Out-of-balance force and moment for a set of reactions
///
/// Returns (ΣFy, ΣM about `about`), both zero for a correct solution.
/// Reactions whose index does not match a support are ignored.
pub fn equilibrium_residual(config: &BeamConfig, reactions: &[ReactionResult], about: f64) -> (f64, f64) {
    let mut sum_fy = -config.total_vertical_load();
    let mut sum_m: f64 = config.loads.iter().map(|load| load.moment_about(about)).sum();

    for r in reactions {
        if let Some(support) = config.supports.get(r.support_index) {
            sum_fy += r.vertical;
            sum_m += r.vertical * (support.position - about) + r.moment;
        }
    }
    (sum_fy, sum_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn simple_beam(length: f64) -> BeamConfig {
        BeamConfig::new(length)
            .with_support(Support::pinned(0.0))
            .with_support(Support::roller(length))
    }

    #[test]
    fn test_simple_beam_point_load() {
        let config = simple_beam(6.0).with_load(Load::point(10.0, 2.0));
        let r = solve(&config).unwrap();

        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0].vertical, 20.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(r[1].vertical, 10.0 / 3.0, epsilon = 1e-9);
        assert_eq!(r[0].horizontal, 0.0);
        assert_eq!(r[1].moment, 0.0);
    }

    #[test]
    fn test_symmetric_point_load() {
        let config = simple_beam(6.0).with_load(Load::point(10.0, 3.0));
        let r = solve(&config).unwrap();
        assert_relative_eq!(r[0].vertical, 5.0, epsilon = 1e-9);
        assert_relative_eq!(r[1].vertical, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cantilever() {
        let config = BeamConfig::new(8.0)
            .with_support(Support::fixed(0.0))
            .with_load(Load::point(15.0, 8.0));
        let r = solve(&config).unwrap();

        assert_eq!(r.len(), 1);
        assert_relative_eq!(r[0].vertical, 15.0, epsilon = 1e-9);
        assert_relative_eq!(r[0].moment, 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cantilever_fixed_at_right() {
        // Fixed at 8, load at the free end x = 0: reaction moment is clockwise
        let config = BeamConfig::new(8.0)
            .with_support(Support::fixed(8.0))
            .with_load(Load::point(15.0, 0.0));
        let r = solve(&config).unwrap();
        assert_relative_eq!(r[0].vertical, 15.0, epsilon = 1e-9);
        assert_relative_eq!(r[0].moment, -120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_supports() {
        let config = BeamConfig::new(6.0).with_load(Load::point(10.0, 2.0));
        assert_eq!(solve(&config).unwrap_err(), AnalysisError::InsufficientSupports);
    }

    #[test]
    fn test_three_pinned_is_indeterminate() {
        let config = BeamConfig::new(6.0)
            .with_support(Support::pinned(0.0))
            .with_support(Support::pinned(3.0))
            .with_support(Support::pinned(6.0))
            .with_load(Load::uniform(2.0, 0.0, 6.0));
        assert_eq!(
            solve(&config).unwrap_err(),
            AnalysisError::StaticallyIndeterminate { unknowns: 6, equations: 2 }
        );
    }

    #[test]
    fn test_single_roller_is_unstable() {
        let config = BeamConfig::new(6.0).with_support(Support::roller(3.0));
        assert_eq!(
            solve(&config).unwrap_err(),
            AnalysisError::StaticallyUnstable { unknowns: 1, equations: 2 }
        );
    }

    #[test]
    fn test_propped_cantilever_is_indeterminate() {
        let config = BeamConfig::new(6.0)
            .with_support(Support::fixed(0.0))
            .with_support(Support::roller(6.0));
        assert_eq!(
            solve(&config).unwrap_err(),
            AnalysisError::StaticallyIndeterminate { unknowns: 4, equations: 2 }
        );
    }

    #[test]
    fn test_overhanging_beam_with_mixed_loads() {
        // Supports at 1 and 5 on a 7 m beam
        let config = BeamConfig::new(7.0)
            .with_support(Support::pinned(1.0))
            .with_support(Support::roller(5.0))
            .with_load(Load::uniform(3.0, 0.0, 7.0))
            .with_load(Load::triangular(6.0, 2.0, 5.0))
            .with_load(Load::point(8.0, 7.0))
            .with_load(Load::moment(5.0, 3.0));
        let r = solve(&config).unwrap();

        let total = 21.0 + 9.0 + 8.0;
        assert_relative_eq!(r[0].vertical + r[1].vertical, total, epsilon = 1e-9);

        for about in [0.0, 1.0, 3.3, 7.0] {
            let (fy, m) = equilibrium_residual(&config, &r, about);
            assert!(fy.abs() < 1e-9, "ΣFy = {}", fy);
            assert!(m.abs() < 1e-9, "ΣM about {} = {}", about, m);
        }
    }

    #[test]
    fn test_support_order_independent() {
        let forward = simple_beam(6.0).with_load(Load::point(10.0, 2.0));
        let reversed = BeamConfig::new(6.0)
            .with_support(Support::roller(6.0))
            .with_support(Support::pinned(0.0))
            .with_load(Load::point(10.0, 2.0));

        let a = solve(&forward).unwrap();
        let b = solve(&reversed).unwrap();
        assert_relative_eq!(a[0].vertical, b[1].vertical, epsilon = 1e-12);
        assert_relative_eq!(a[1].vertical, b[0].vertical, epsilon = 1e-12);
    }

    #[test]
    fn test_applied_moment_only() {
        // CCW couple of 12 on a 6 m simple span: R_right = -2 (down), R_left = +2
        let config = simple_beam(6.0).with_load(Load::moment(12.0, 2.0));
        let r = solve(&config).unwrap();
        assert_relative_eq!(r[0].vertical, 2.0, epsilon = 1e-12);
        assert_relative_eq!(r[1].vertical, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_validation_errors() {
        let coincident = BeamConfig::new(6.0)
            .with_support(Support::pinned(2.0))
            .with_support(Support::roller(2.0));
        assert_eq!(solve(&coincident).unwrap_err().error_code(), "INVALID_INPUT");

        let outside = BeamConfig::new(6.0).with_support(Support::fixed(7.0));
        assert!(solve(&outside).is_err());

        let bad_length = BeamConfig::new(0.0).with_support(Support::fixed(0.0));
        assert!(bad_length.validate().is_err());
    }

    #[test]
    fn test_repeat_solve_identical() {
        let config = simple_beam(5.3)
            .with_load(Load::uniform(1.7, 0.4, 4.9))
            .with_load(Load::point(3.1, 2.2));
        let a = solve(&config).unwrap();
        let b = solve(&config).unwrap();
        assert_eq!(a, b);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.vertical.to_bits(), y.vertical.to_bits());
        }
    }

    #[test]
    fn test_config_json() {
        let json = r#"{
            "length": 6.0,
            "supports": [
                { "kind": "Pinned", "position": 0.0 },
                { "kind": "Roller", "position": 6.0 }
            ],
            "loads": [
                { "type": "Point", "position": 2.0, "magnitude": 10.0 }
            ]
        }"#;
        let config: BeamConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, simple_beam(6.0).with_load(Load::point(10.0, 2.0)));
        assert_eq!(config.unknown_count(), 3);
    }
}
