//! # Shear and Moment Diagrams
//!
//! Walks the beam left to right over every event (support, point load,
//! applied moment, distributed-load boundary). Point forces step the shear,
//! couples step the moment, and between events the distributed intensity is
//! linear so shear and moment are integrated exactly:
//!
//! ```text
//! q(t) = qa + qs·t                        (downward intensity)
//! V(t) = V0 − qa·t − qs·t²/2
//! M(t) = M0 + V0·t − qa·t²/2 − qs·t³/6
//! ```
//!
//! Each step is sampled on both sides. Inside a loaded segment the walk adds
//! the point where V = 0 (true moment extremum) and where q = 0 (shear
//! extremum), so the reported extrema are exact, not grid-limited.
//!
//! ## Sign Convention
//! - Positive shear: net upward force left of the cut
//! - Positive moment: sagging (tension on bottom fibre)
//!
//! ## Example
//! ```rust
//! use statics_core::calculations::beam::{BeamConfig, Support};
//! use statics_core::calculations::diagrams::analyze;
//! use statics_core::loads::Load;
//!
//! // 6 m simple span, 4 kN/m: wL²/8 = 18 kN·m at midspan
//! let config = BeamConfig::new(6.0)
//!     .with_support(Support::pinned(0.0))
//!     .with_support(Support::roller(6.0))
//!     .with_load(Load::uniform(4.0, 0.0, 6.0));
//!
//! let results = analyze(&config).unwrap();
//! assert!((results.max_moment.value - 18.0).abs() < 1e-9);
//! assert!((results.max_moment.position - 3.0).abs() < 1e-9);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::beam::{self, BeamConfig, ReactionResult};
use crate::errors::StaticsResult;
use crate::loads::{DistributedSegment, Load};

/// Evenly spaced interior samples per loaded segment, for plotting
pub const DEFAULT_SUBDIVISIONS: usize = 8;

/// A diagram extreme value and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub value: f64,
    /// Position along the beam (m)
    pub position: f64,
}

/// Sampled shear (kN) and moment (kN·m) diagrams with their extrema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagrams {
    /// (x, V) pairs, x non-decreasing; a step appears as two samples at the same x
    pub shear_diagram: Vec<(f64, f64)>,
    /// (x, M) pairs, sampled at the same positions as the shear diagram
    pub moment_diagram: Vec<(f64, f64)>,
    pub max_shear: Extremum,
    pub min_shear: Extremum,
    pub max_moment: Extremum,
    pub min_moment: Extremum,
}

/// Reactions plus diagrams for one beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub reactions: Vec<ReactionResult>,
    pub shear_diagram: Vec<(f64, f64)>,
    pub moment_diagram: Vec<(f64, f64)>,
    pub max_shear: Extremum,
    pub min_shear: Extremum,
    pub max_moment: Extremum,
    pub min_moment: Extremum,
}

impl AnalysisResults {
    fn new(reactions: Vec<ReactionResult>, diagrams: Diagrams) -> Self {
        AnalysisResults {
            reactions,
            shear_diagram: diagrams.shear_diagram,
            moment_diagram: diagrams.moment_diagram,
            max_shear: diagrams.max_shear,
            min_shear: diagrams.min_shear,
            max_moment: diagrams.max_moment,
            min_moment: diagrams.min_moment,
        }
    }

    /// Largest absolute moment
    pub fn governing_moment(&self) -> Extremum {
        if self.min_moment.value.abs() > self.max_moment.value.abs() {
            self.min_moment
        } else {
            self.max_moment
        }
    }

    /// Largest absolute shear
    pub fn governing_shear(&self) -> Extremum {
        if self.min_shear.value.abs() > self.max_shear.value.abs() {
            self.min_shear
        } else {
            self.max_shear
        }
    }
}

/// A concentrated action: shear step (up positive) and sagging-moment step
#[derive(Debug, Clone, Copy)]
struct PointEvent {
    position: f64,
    shear_jump: f64,
    moment_jump: f64,
}

fn point_events(config: &BeamConfig, reactions: &[ReactionResult]) -> Vec<PointEvent> {
    let mut events = Vec::with_capacity(config.loads.len() + reactions.len());

    for r in reactions {
        if let Some(support) = config.supports.get(r.support_index) {
            events.push(PointEvent {
                position: support.position,
                shear_jump: r.vertical,
                // A counter-clockwise couple reduces the sagging moment
                moment_jump: -r.moment,
            });
        }
    }

    for load in &config.loads {
        match load {
            Load::Point { position, magnitude } => events.push(PointEvent {
                position: *position,
                shear_jump: -magnitude,
                moment_jump: 0.0,
            }),
            Load::Moment { position, magnitude } => events.push(PointEvent {
                position: *position,
                shear_jump: 0.0,
                moment_jump: -magnitude,
            }),
            Load::UniformDistributed { .. } | Load::Triangular { .. } => {}
        }
    }
    events
}

/// Sorted event positions, merged when closer than `tol`
fn event_positions(config: &BeamConfig, points: &[PointEvent], tol: f64) -> Vec<f64> {
    let mut xs: Vec<f64> = vec![0.0, config.length];
    xs.extend(config.supports.iter().map(|s| s.position));
    xs.extend(points.iter().map(|e| e.position));
    xs.extend(config.loads.iter().flat_map(Load::event_positions));
    xs.sort_by(|a, b| a.total_cmp(b));

    let mut merged: Vec<f64> = Vec::with_capacity(xs.len());
    for x in xs {
        match merged.last() {
            Some(last) if (x - last).abs() <= tol => {}
            _ => merged.push(x),
        }
    }
    merged
}

/// Collects samples and tracks extrema
struct SampleSet {
    shear: Vec<(f64, f64)>,
    moment: Vec<(f64, f64)>,
}

impl SampleSet {
    fn push(&mut self, x: f64, v: f64, m: f64) {
        trace!("sample x = {:.6}: V = {:.6}, M = {:.6}", x, v, m);
        self.shear.push((x, v));
        self.moment.push((x, m));
    }

    fn extremum(samples: &[(f64, f64)], better: impl Fn(f64, f64) -> bool) -> Extremum {
        let mut best = Extremum { value: 0.0, position: 0.0 };
        for (i, &(x, value)) in samples.iter().enumerate() {
            if i == 0 || better(value, best.value) {
                best = Extremum { value, position: x };
            }
        }
        best
    }

    fn finish(self) -> Diagrams {
        let max_shear = Self::extremum(&self.shear, |a, b| a > b);
        let min_shear = Self::extremum(&self.shear, |a, b| a < b);
        let max_moment = Self::extremum(&self.moment, |a, b| a > b);
        let min_moment = Self::extremum(&self.moment, |a, b| a < b);
        Diagrams {
            shear_diagram: self.shear,
            moment_diagram: self.moment,
            max_shear,
            min_shear,
            max_moment,
            min_moment,
        }
    }
}

/// Real roots of `a·t² + b·t + c = 0`
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < f64::EPSILON * (b.abs() + c.abs()).max(1.0) {
        if b == 0.0 {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }
    let sqrt_disc = disc.sqrt();
    vec![(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)]
}

/// Generate diagrams with the default plotting density
pub fn generate(config: &BeamConfig, reactions: &[ReactionResult]) -> Diagrams {
    generate_with(config, reactions, DEFAULT_SUBDIVISIONS)
}

/// Generate diagrams with `subdivisions` evenly spaced interior samples per
/// loaded segment (zero keeps only event and extremum samples)
pub fn generate_with(config: &BeamConfig, reactions: &[ReactionResult], subdivisions: usize) -> Diagrams {
    let tol = 1e-9 * config.length.abs().max(1.0);
    let points = point_events(config, reactions);
    let segments: Vec<DistributedSegment> = config.loads.iter().filter_map(Load::distributed).collect();
    let positions = event_positions(config, &points, tol);
    debug!(
        "Diagram walk: {} events, {} point actions, {} distributed segments",
        positions.len(),
        points.len(),
        segments.len()
    );

    let mut samples = SampleSet {
        shear: Vec::new(),
        moment: Vec::new(),
    };
    let mut v = 0.0;
    let mut m = 0.0;
    let mut prev: Option<f64> = None;

    for &x in &positions {
        if let Some(a) = prev {
            let h = x - a;

            // Every segment boundary is an event, so each segment either
            // covers (a, x) entirely or not at all
            let (qa, qs) = segments
                .iter()
                .filter(|s| s.start <= a + tol && s.end >= x - tol)
                .fold((0.0, 0.0), |(qa, qs), s| (qa + s.intensity_at(a), qs + s.slope()));

            let v0 = v;
            let m0 = m;
            let shear = |t: f64| v0 - qa * t - qs * t * t / 2.0;
            let moment = |t: f64| m0 + v0 * t - qa * t * t / 2.0 - qs * t * t * t / 6.0;

            if qa != 0.0 || qs != 0.0 {
                let mut interior: Vec<f64> = (1..=subdivisions)
                    .map(|k| h * k as f64 / (subdivisions + 1) as f64)
                    .collect();
                // V = 0: qs/2·t² + qa·t − V0 = 0
                interior.extend(quadratic_roots(qs / 2.0, qa, -v0));
                // q = 0: shear extremum
                if qs != 0.0 {
                    interior.push(-qa / qs);
                }
                interior.retain(|t| *t > tol && *t < h - tol);
                interior.sort_by(|p, q| p.total_cmp(q));
                interior.dedup_by(|p, q| (*p - *q).abs() <= tol);

                for t in interior {
                    samples.push(a + t, shear(t), moment(t));
                }
            }

            v = shear(h);
            m = moment(h);
        }

        // Left limit, then the right limit after any steps
        samples.push(x, v, m);
        let mut stepped = false;
        for e in points.iter().filter(|e| (e.position - x).abs() <= tol) {
            v += e.shear_jump;
            m += e.moment_jump;
            stepped = true;
        }
        if stepped {
            samples.push(x, v, m);
        }

        prev = Some(x);
    }

    trace!("Diagram closure: V = {:.3e}, M = {:.3e}", v, m);
    samples.finish()
}

/// Solve reactions and generate diagrams in one call
pub fn analyze(config: &BeamConfig) -> StaticsResult<AnalysisResults> {
    analyze_with(config, DEFAULT_SUBDIVISIONS)
}

/// [`analyze`] with an explicit plotting density
pub fn analyze_with(config: &BeamConfig, subdivisions: usize) -> StaticsResult<AnalysisResults> {
    let reactions = beam::solve(config)?;
    let diagrams = generate_with(config, &reactions, subdivisions);
    Ok(AnalysisResults::new(reactions, diagrams))
}

/// Force and sagging moment about `x` from the part of a distributed
/// segment left of `x`
fn distributed_left_of(seg: &DistributedSegment, x: f64) -> (f64, f64) {
    let end = seg.end.min(x);
    if end <= seg.start {
        return (0.0, 0.0);
    }
    let h = end - seg.start;
    let k = seg.slope();
    let d = x - seg.start;
    let force = seg.w_start * h + k * h * h / 2.0;
    // ∫ w(u)·(d − u) du over 0..h
    let moment = seg.w_start * (d * h - h * h / 2.0) + k * (d * h * h / 2.0 - h * h * h / 3.0);
    (force, moment)
}

/// Shear at `x`, including every concentrated action at or left of `x`
/// (the right-hand limit at a step)
pub fn shear_at(config: &BeamConfig, reactions: &[ReactionResult], x: f64) -> f64 {
    let concentrated: f64 = point_events(config, reactions)
        .iter()
        .filter(|e| e.position <= x)
        .map(|e| e.shear_jump)
        .sum();
    let distributed: f64 = config
        .loads
        .iter()
        .filter_map(Load::distributed)
        .map(|seg| distributed_left_of(&seg, x).0)
        .sum();
    concentrated - distributed
}

/// Sagging moment at `x`, including every concentrated action at or left
/// of `x` (the right-hand limit at a step)
pub fn moment_at(config: &BeamConfig, reactions: &[ReactionResult], x: f64) -> f64 {
    let concentrated: f64 = point_events(config, reactions)
        .iter()
        .filter(|e| e.position <= x)
        .map(|e| e.shear_jump * (x - e.position) + e.moment_jump)
        .sum();
    let distributed: f64 = config
        .loads
        .iter()
        .filter_map(Load::distributed)
        .map(|seg| distributed_left_of(&seg, x).1)
        .sum();
    concentrated - distributed
}
