//! # Truss Stiffness Solver
//!
//! Direct stiffness method for plane pin-jointed trusses.
//!
//! ## Method
//!
//! 1. Direction cosines `(c, s) = (Δx/L, Δy/L)` for every member
//! 2. Member stiffness `k·[[c², cs], [cs, s²]]` added to both diagonal node
//!    blocks and subtracted from the cross blocks of the global `2n×2n` matrix
//! 3. Fixed-node rows and columns are eliminated and the reduced system
//!    `K_ff·u_f = F_f` is solved by LU decomposition with partial pivoting
//! 4. Reactions are recovered at the fixed degrees of freedom as `R = K·u − F`
//! 5. Member force `k·[(u_Bx − u_Ax)·c + (u_By − u_Ay)·s]`, tension positive
//!
//! Fixed nodes are pins (restrained in both axes). Each member has axial
//! stiffness `EA/L`, taken from the member when given and otherwise from
//! [`TrussOptions::default_stiffness`].
//!
//! ## Example
//!
//! ```rust
//! use statics_core::calculations::truss::{solve, NodalLoad, TrussMember, TrussNode};
//!
//! let nodes = vec![
//!     TrussNode::fixed("A", 0.0, 0.0),
//!     TrussNode::fixed("B", 4.0, 0.0),
//!     TrussNode::free("C", 2.0, 2.0),
//! ];
//! let members = vec![TrussMember::new("AC", "A", "C"), TrussMember::new("BC", "B", "C")];
//! let loads = vec![NodalLoad::new("C", 0.0, -10.0)];
//!
//! let result = solve(&nodes, &members, &loads).unwrap();
//! let ac = result.member_force("AC").unwrap();
//! assert!((ac.force + 7.071).abs() < 1e-3); // compression
//! ```

use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, StaticsResult};
use crate::linalg::{DenseMatrix, LuDecomposition};

/// Uniform axial stiffness EA/L used when a member does not give its own
pub const DEFAULT_STIFFNESS: f64 = 1000.0;

/// A truss joint; `fixed` pins it in both axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub fixed: bool,
}

impl TrussNode {
    pub fn new(id: impl Into<String>, x: f64, y: f64, fixed: bool) -> Self {
        TrussNode { id: id.into(), x, y, fixed }
    }

    /// A pinned support node
    pub fn fixed(id: impl Into<String>, x: f64, y: f64) -> Self {
        TrussNode::new(id, x, y, true)
    }

    /// An unrestrained joint
    pub fn free(id: impl Into<String>, x: f64, y: f64) -> Self {
        TrussNode::new(id, x, y, false)
    }
}

/// A two-force bar between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussMember {
    pub id: String,
    pub node_a: String,
    pub node_b: String,
    /// Axial stiffness EA/L; `None` uses the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f64>,
}

impl TrussMember {
    pub fn new(id: impl Into<String>, node_a: impl Into<String>, node_b: impl Into<String>) -> Self {
        TrussMember {
            id: id.into(),
            node_a: node_a.into(),
            node_b: node_b.into(),
            stiffness: None,
        }
    }

    /// Override the axial stiffness (builder pattern)
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = Some(stiffness);
        self
    }
}

/// External force applied at a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodalLoad {
    pub node: String,
    #[serde(default)]
    pub fx: f64,
    #[serde(default)]
    pub fy: f64,
}

impl NodalLoad {
    pub fn new(node: impl Into<String>, fx: f64, fy: f64) -> Self {
        NodalLoad { node: node.into(), fx, fy }
    }
}

/// How the member/reaction count is checked before solving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeterminacyPolicy {
    /// Unknowns must equal equations exactly
    #[default]
    Strict,
    /// Redundant members or supports are resolved by the stiffness method;
    /// too few unknowns is still rejected
    AllowRedundant,
}

/// Solver options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrussOptions {
    /// EA/L for members without their own stiffness
    pub default_stiffness: f64,
    pub determinacy: DeterminacyPolicy,
}

impl Default for TrussOptions {
    fn default() -> Self {
        TrussOptions {
            default_stiffness: DEFAULT_STIFFNESS,
            determinacy: DeterminacyPolicy::Strict,
        }
    }
}

/// Sense of a member's axial force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceKind {
    Tension,
    Compression,
}

impl ForceKind {
    /// Tension when strictly positive
    pub fn from_force(force: f64) -> Self {
        if force > 0.0 {
            ForceKind::Tension
        } else {
            ForceKind::Compression
        }
    }
}

impl std::fmt::Display for ForceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForceKind::Tension => write!(f, "Tension"),
            ForceKind::Compression => write!(f, "Compression"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberForce {
    pub member_id: String,
    /// Axial force, tension positive
    pub force: f64,
    pub kind: ForceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplacement {
    pub node_id: String,
    pub ux: f64,
    pub uy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeReaction {
    pub node_id: String,
    pub rx: f64,
    pub ry: f64,
}

/// Member forces, displacements and support reactions
///
/// Members, displacements and reactions are listed in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussResult {
    pub member_forces: Vec<MemberForce>,
    pub displacements: Vec<NodeDisplacement>,
    pub reactions: Vec<NodeReaction>,
}

impl TrussResult {
    pub fn member_force(&self, member_id: &str) -> Option<&MemberForce> {
        self.member_forces.iter().find(|m| m.member_id == member_id)
    }

    pub fn displacement(&self, node_id: &str) -> Option<&NodeDisplacement> {
        self.displacements.iter().find(|d| d.node_id == node_id)
    }

    pub fn reaction(&self, node_id: &str) -> Option<&NodeReaction> {
        self.reactions.iter().find(|r| r.node_id == node_id)
    }
}

/// Member geometry resolved against the node list
struct MemberGeometry {
    a: usize,
    b: usize,
    c: f64,
    s: f64,
    k: f64,
}

fn index_nodes(nodes: &[TrussNode]) -> StaticsResult<HashMap<&str, usize>> {
    if nodes.is_empty() {
        return Err(AnalysisError::invalid_input("nodes", "[]", "A truss needs at least one node"));
    }
    let mut index = HashMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        if !node.x.is_finite() || !node.y.is_finite() {
            return Err(AnalysisError::invalid_input(
                format!("nodes[{}]", i),
                format!("({}, {})", node.x, node.y),
                "Node coordinates must be finite",
            ));
        }
        if index.insert(node.id.as_str(), i).is_some() {
            return Err(AnalysisError::invalid_input(
                format!("nodes[{}].id", i),
                node.id.clone(),
                "Duplicate node id",
            ));
        }
    }
    Ok(index)
}

fn resolve_members(
    nodes: &[TrussNode],
    members: &[TrussMember],
    index: &HashMap<&str, usize>,
    options: &TrussOptions,
) -> StaticsResult<Vec<MemberGeometry>> {
    let lookup = |field: String, id: &str| -> StaticsResult<usize> {
        index
            .get(id)
            .copied()
            .ok_or_else(|| AnalysisError::invalid_input(field, id, "Unknown node id"))
    };

    let mut seen = HashSet::with_capacity(members.len());
    let mut geometry = Vec::with_capacity(members.len());
    for (i, member) in members.iter().enumerate() {
        if !seen.insert(member.id.as_str()) {
            return Err(AnalysisError::invalid_input(
                format!("members[{}].id", i),
                member.id.clone(),
                "Duplicate member id",
            ));
        }

        let a = lookup(format!("members[{}].node_a", i), &member.node_a)?;
        let b = lookup(format!("members[{}].node_b", i), &member.node_b)?;
        let dx = nodes[b].x - nodes[a].x;
        let dy = nodes[b].y - nodes[a].y;
        let length = dx.hypot(dy);
        if length <= 0.0 {
            return Err(AnalysisError::invalid_input(
                format!("members[{}]", i),
                member.id.clone(),
                "Member has zero length",
            ));
        }

        let k = member.stiffness.unwrap_or(options.default_stiffness);
        if !k.is_finite() || k <= 0.0 {
            return Err(AnalysisError::invalid_input(
                format!("members[{}].stiffness", i),
                k.to_string(),
                "Axial stiffness must be positive",
            ));
        }

        geometry.push(MemberGeometry {
            a,
            b,
            c: dx / length,
            s: dy / length,
            k,
        });
    }
    Ok(geometry)
}

fn check_determinacy(nodes: &[TrussNode], members: &[TrussMember], policy: DeterminacyPolicy) -> StaticsResult<()> {
    let fixed = nodes.iter().filter(|n| n.fixed).count();
    let unknowns = members.len() + 2 * fixed;
    let equations = 2 * nodes.len();
    debug!(
        "Truss determinacy: {} members + 2x{} fixed = {} unknowns, {} equations",
        members.len(),
        fixed,
        unknowns,
        equations
    );

    if unknowns < equations {
        return Err(AnalysisError::unstable(unknowns, equations));
    }
    if unknowns > equations {
        match policy {
            DeterminacyPolicy::Strict => return Err(AnalysisError::indeterminate(unknowns, equations)),
            DeterminacyPolicy::AllowRedundant => warn!(
                "Truss is {} degree(s) indeterminate; solving by stiffness",
                unknowns - equations
            ),
        }
    }
    Ok(())
}

/// Global stiffness matrix
fn assemble(n_nodes: usize, geometry: &[MemberGeometry]) -> DenseMatrix {
    let mut k_global = DenseMatrix::zeros(2 * n_nodes, 2 * n_nodes);
    for m in geometry {
        let block = [
            [m.k * m.c * m.c, m.k * m.c * m.s],
            [m.k * m.c * m.s, m.k * m.s * m.s],
        ];
        let dofs_a = [2 * m.a, 2 * m.a + 1];
        let dofs_b = [2 * m.b, 2 * m.b + 1];
        for i in 0..2 {
            for j in 0..2 {
                k_global.add(dofs_a[i], dofs_a[j], block[i][j]);
                k_global.add(dofs_b[i], dofs_b[j], block[i][j]);
                k_global.add(dofs_a[i], dofs_b[j], -block[i][j]);
                k_global.add(dofs_b[i], dofs_a[j], -block[i][j]);
            }
        }
    }
    k_global
}

/// A complete truss model as read from JSON
///
/// ```json
/// {
///   "nodes": [{ "id": "A", "x": 0.0, "y": 0.0, "fixed": true }],
///   "members": [{ "id": "AB", "node_a": "A", "node_b": "B" }],
///   "loads": [{ "node": "B", "fx": 0.0, "fy": -10.0 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrussModel {
    pub nodes: Vec<TrussNode>,
    pub members: Vec<TrussMember>,
    #[serde(default)]
    pub loads: Vec<NodalLoad>,
}

impl TrussModel {
    pub fn solve(&self) -> StaticsResult<TrussResult> {
        solve(&self.nodes, &self.members, &self.loads)
    }

    pub fn solve_with(&self, options: &TrussOptions) -> StaticsResult<TrussResult> {
        solve_with(&self.nodes, &self.members, &self.loads, options)
    }
}

/// Solve with default options (strict determinacy, k = 1000)
pub fn solve(nodes: &[TrussNode], members: &[TrussMember], loads: &[NodalLoad]) -> StaticsResult<TrussResult> {
    solve_with(nodes, members, loads, &TrussOptions::default())
}

/// Solve for member forces, displacements and reactions
pub fn solve_with(
    nodes: &[TrussNode],
    members: &[TrussMember],
    loads: &[NodalLoad],
    options: &TrussOptions,
) -> StaticsResult<TrussResult> {
    let index = index_nodes(nodes)?;
    let geometry = resolve_members(nodes, members, &index, options)?;
    check_determinacy(nodes, members, options.determinacy)?;

    let n_dof = 2 * nodes.len();
    let mut forces = vec![0.0; n_dof];
    for (i, load) in loads.iter().enumerate() {
        let node = index.get(load.node.as_str()).copied().ok_or_else(|| {
            AnalysisError::invalid_input(format!("loads[{}].node", i), load.node.clone(), "Unknown node id")
        })?;
        if !load.fx.is_finite() || !load.fy.is_finite() {
            return Err(AnalysisError::invalid_input(
                format!("loads[{}]", i),
                format!("({}, {})", load.fx, load.fy),
                "Load components must be finite",
            ));
        }
        forces[2 * node] += load.fx;
        forces[2 * node + 1] += load.fy;
    }

    let k_global = assemble(nodes.len(), &geometry);

    let free: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| !n.fixed)
        .flat_map(|(i, _)| [2 * i, 2 * i + 1])
        .collect();
    debug!("Truss stiffness: {}x{} global, {} free DOFs", n_dof, n_dof, free.len());

    let mut displacements = vec![0.0; n_dof];
    if !free.is_empty() {
        let k_ff = k_global.select(&free, &free);
        let f_f: Vec<f64> = free.iter().map(|&d| forces[d]).collect();
        let u_f = LuDecomposition::factor(&k_ff)?.solve(&f_f)?;
        for (&dof, u) in free.iter().zip(u_f) {
            displacements[dof] = u;
        }
    }

    let internal = k_global.mul_vec(&displacements)?;

    let member_forces = members
        .iter()
        .zip(&geometry)
        .map(|(member, m)| {
            let du_x = displacements[2 * m.b] - displacements[2 * m.a];
            let du_y = displacements[2 * m.b + 1] - displacements[2 * m.a + 1];
            let force = m.k * (du_x * m.c + du_y * m.s);
            debug!("Member {}: {:.4} ({})", member.id, force, ForceKind::from_force(force));
            MemberForce {
                member_id: member.id.clone(),
                force,
                kind: ForceKind::from_force(force),
            }
        })
        .collect();

    let node_displacements = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| NodeDisplacement {
            node_id: n.id.clone(),
            ux: displacements[2 * i],
            uy: displacements[2 * i + 1],
        })
        .collect();

    let reactions = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.fixed)
        .map(|(i, n)| NodeReaction {
            node_id: n.id.clone(),
            rx: internal[2 * i] - forces[2 * i],
            ry: internal[2 * i + 1] - forces[2 * i + 1],
        })
        .collect();

    Ok(TrussResult {
        member_forces,
        displacements: node_displacements,
        reactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_nodes() -> Vec<TrussNode> {
        vec![
            TrussNode::fixed("A", 0.0, 0.0),
            TrussNode::fixed("B", 4.0, 0.0),
            TrussNode::free("C", 2.0, 2.0),
        ]
    }

    fn triangle_members() -> Vec<TrussMember> {
        vec![
            TrussMember::new("AB", "A", "B"),
            TrussMember::new("AC", "A", "C"),
            TrussMember::new("BC", "B", "C"),
        ]
    }

    #[test]
    fn test_triangle_strict_is_indeterminate() {
        let loads = vec![NodalLoad::new("C", 0.0, -10.0)];
        let err = solve(&triangle_nodes(), &triangle_members(), &loads).unwrap_err();
        assert_eq!(err, AnalysisError::StaticallyIndeterminate { unknowns: 7, equations: 6 });
    }

    #[test]
    fn test_triangle_hand_calculation() {
        // Apex load 10 down: each rafter carries 10/(2·sin45°) = 7.071 compression
        let loads = vec![NodalLoad::new("C", 0.0, -10.0)];
        let options = TrussOptions {
            determinacy: DeterminacyPolicy::AllowRedundant,
            ..TrussOptions::default()
        };
        let result = solve_with(&triangle_nodes(), &triangle_members(), &loads, &options).unwrap();

        let expected = 10.0 / (2.0 * std::f64::consts::FRAC_1_SQRT_2);
        for id in ["AC", "BC"] {
            let m = result.member_force(id).unwrap();
            assert_relative_eq!(m.force, -expected, max_relative = 1e-3);
            assert_eq!(m.kind, ForceKind::Compression);
        }
        assert!(result.member_force("AB").unwrap().force.abs() < 1e-9);

        let c = result.displacement("C").unwrap();
        assert!(c.ux.abs() < 1e-12);
        assert_relative_eq!(c.uy, -0.01, epsilon = 1e-12);

        let ra = result.reaction("A").unwrap();
        let rb = result.reaction("B").unwrap();
        assert_relative_eq!(ra.rx, 5.0, epsilon = 1e-9);
        assert_relative_eq!(ra.ry, 5.0, epsilon = 1e-9);
        assert_relative_eq!(rb.rx, -5.0, epsilon = 1e-9);
        assert_relative_eq!(rb.ry, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_two_bar_determinate() {
        let members = vec![TrussMember::new("AC", "A", "C"), TrussMember::new("BC", "B", "C")];
        let loads = vec![NodalLoad::new("C", 0.0, -10.0)];
        let result = solve(&triangle_nodes(), &members, &loads).unwrap();

        assert_relative_eq!(result.member_force("AC").unwrap().force, -7.0711, max_relative = 1e-3);
        assert_relative_eq!(result.member_force("BC").unwrap().force, -7.0711, max_relative = 1e-3);
        assert_eq!(result.reactions.len(), 2);
    }

    #[test]
    fn test_tension_member() {
        // Hanging load below two supports puts both bars in tension
        let nodes = vec![
            TrussNode::fixed("A", 0.0, 0.0),
            TrussNode::fixed("B", 4.0, 0.0),
            TrussNode::free("C", 2.0, -2.0),
        ];
        let members = vec![TrussMember::new("AC", "A", "C"), TrussMember::new("BC", "B", "C")];
        let loads = vec![NodalLoad::new("C", 0.0, -10.0)];
        let result = solve(&nodes, &members, &loads).unwrap();

        for m in &result.member_forces {
            assert_eq!(m.kind, ForceKind::Tension);
            assert_relative_eq!(m.force, 7.0711, max_relative = 1e-3);
        }
    }

    fn portal() -> (Vec<TrussNode>, Vec<TrussMember>, Vec<NodalLoad>) {
        let nodes = vec![
            TrussNode::fixed("A", 0.0, 0.0),
            TrussNode::fixed("B", 4.0, 0.0),
            TrussNode::free("C", 0.0, 3.0),
            TrussNode::free("D", 4.0, 3.0),
        ];
        let members = vec![
            TrussMember::new("AC", "A", "C"),
            TrussMember::new("BD", "B", "D"),
            TrussMember::new("CD", "C", "D"),
            TrussMember::new("AD", "A", "D"),
        ];
        let loads = vec![NodalLoad::new("C", 6.0, 0.0)];
        (nodes, members, loads)
    }

    #[test]
    fn test_braced_frame_hand_calculation() {
        let (nodes, members, loads) = portal();
        let result = solve(&nodes, &members, &loads).unwrap();

        // Joint C: CD = -6; joint D: AD·0.8 = 6, BD = -0.6·AD
        assert!(result.member_force("AC").unwrap().force.abs() < 1e-9);
        assert_relative_eq!(result.member_force("CD").unwrap().force, -6.0, epsilon = 1e-9);
        assert_relative_eq!(result.member_force("AD").unwrap().force, 7.5, epsilon = 1e-9);
        assert_relative_eq!(result.member_force("BD").unwrap().force, -4.5, epsilon = 1e-9);

        let sum_rx: f64 = result.reactions.iter().map(|r| r.rx).sum();
        let sum_ry: f64 = result.reactions.iter().map(|r| r.ry).sum();
        assert_relative_eq!(sum_rx, -6.0, epsilon = 1e-9);
        assert!(sum_ry.abs() < 1e-9);
    }

    #[test]
    fn test_determinate_forces_independent_of_stiffness() {
        let (nodes, mut members, loads) = portal();
        let base = solve(&nodes, &members, &loads).unwrap();

        members[3] = members[3].clone().with_stiffness(25_000.0);
        let stiff = solve(&nodes, &members, &loads).unwrap();

        for (a, b) in base.member_forces.iter().zip(&stiff.member_forces) {
            assert_relative_eq!(a.force, b.force, epsilon = 1e-9);
        }
        let d_base = base.displacement("D").unwrap();
        let d_stiff = stiff.displacement("D").unwrap();
        assert!(d_stiff.ux.abs() < d_base.ux.abs());
    }

    #[test]
    fn test_collinear_nodes_are_singular() {
        let nodes = vec![
            TrussNode::fixed("A", 0.0, 0.0),
            TrussNode::free("B", 2.0, 0.0),
            TrussNode::fixed("C", 4.0, 0.0),
        ];
        let members = vec![TrussMember::new("AB", "A", "B"), TrussMember::new("BC", "B", "C")];
        let loads = vec![NodalLoad::new("B", 0.0, -1.0)];
        let err = solve(&nodes, &members, &loads).unwrap_err();
        assert_eq!(err.error_code(), "MATRIX_SOLUTION_FAILED");
    }

    #[test]
    fn test_too_few_members_is_unstable() {
        let members = vec![TrussMember::new("AC", "A", "C")];
        let err = solve(&triangle_nodes(), &members, &[]).unwrap_err();
        assert_eq!(err, AnalysisError::StaticallyUnstable { unknowns: 5, equations: 6 });

        let options = TrussOptions {
            determinacy: DeterminacyPolicy::AllowRedundant,
            ..TrussOptions::default()
        };
        assert!(solve_with(&triangle_nodes(), &members, &[], &options).is_err());
    }

    #[test]
    fn test_invalid_references() {
        let nodes = triangle_nodes();
        let dangling = vec![TrussMember::new("AX", "A", "X"), TrussMember::new("BC", "B", "C")];
        assert_eq!(solve(&nodes, &dangling, &[]).unwrap_err().error_code(), "INVALID_INPUT");

        let duplicate = vec![TrussMember::new("M", "A", "C"), TrussMember::new("M", "B", "C")];
        assert!(solve(&nodes, &duplicate, &[]).is_err());

        let zero_length = vec![TrussMember::new("AA", "A", "A"), TrussMember::new("BC", "B", "C")];
        assert!(solve(&nodes, &zero_length, &[]).is_err());

        let members = vec![TrussMember::new("AC", "A", "C"), TrussMember::new("BC", "B", "C")];
        let bad_load = vec![NodalLoad::new("Z", 1.0, 0.0)];
        assert!(solve(&nodes, &members, &bad_load).is_err());

        let mut dup_nodes = nodes.clone();
        dup_nodes[1].id = "A".to_string();
        assert!(solve(&dup_nodes, &members, &[]).is_err());
    }

    #[test]
    fn test_non_finite_load_rejected() {
        let members = vec![TrussMember::new("AC", "A", "C"), TrussMember::new("BC", "B", "C")];
        for load in [
            NodalLoad::new("C", f64::NAN, 0.0),
            NodalLoad::new("C", 0.0, f64::INFINITY),
        ] {
            let err = solve(&triangle_nodes(), &members, &[load]).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_zero_load_gives_zero_compression_label() {
        let members = vec![TrussMember::new("AC", "A", "C"), TrussMember::new("BC", "B", "C")];
        let result = solve(&triangle_nodes(), &members, &[]).unwrap();
        for m in &result.member_forces {
            assert_eq!(m.force, 0.0);
            assert_eq!(m.kind, ForceKind::Compression);
        }
    }

    #[test]
    fn test_repeat_solve_identical() {
        let (nodes, members, loads) = portal();
        assert_eq!(solve(&nodes, &members, &loads).unwrap(), solve(&nodes, &members, &loads).unwrap());
    }

    #[test]
    fn test_json_input() {
        let nodes: Vec<TrussNode> = serde_json::from_str(
            r#"[{"id":"A","x":0,"y":0,"fixed":true},{"id":"B","x":4,"y":0,"fixed":true},{"id":"C","x":2,"y":2}]"#,
        )
        .unwrap();
        assert_eq!(nodes, triangle_nodes());

        let model: TrussModel = serde_json::from_str(
            r#"{"nodes":[{"id":"A","x":0,"y":0,"fixed":true},{"id":"B","x":4,"y":0,"fixed":true},{"id":"C","x":2,"y":2}],
                "members":[{"id":"AC","node_a":"A","node_b":"C"},{"id":"BC","node_a":"B","node_b":"C"}],
                "loads":[{"node":"C","fy":-10}]}"#,
        )
        .unwrap();
        let result = model.solve().unwrap();
        assert_eq!(result.member_force("BC").unwrap().kind, ForceKind::Compression);

        let member: TrussMember =
            serde_json::from_str(r#"{"id":"AC","node_a":"A","node_b":"C","stiffness":2000}"#).unwrap();
        assert_eq!(member.stiffness, Some(2000.0));
    }
}
