//! Stress checks against catalog design strengths.
//!
//! Demand/capacity ratios are always computed on the magnitude of the
//! demand, so a sign convention for compression never flips a result.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, StaticsResult};
use crate::materials::Material;

/// Result of a single stress check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressCheck {
    /// Applied stress (MPa)
    pub demand_mpa: f64,
    /// Design strength (MPa)
    pub capacity_mpa: f64,
    /// |demand| / capacity
    pub ratio: f64,
    pub passes: bool,
}

impl StressCheck {
    fn new(demand_mpa: f64, capacity_mpa: f64) -> Self {
        let ratio = demand_mpa.abs() / capacity_mpa;
        StressCheck {
            demand_mpa,
            capacity_mpa,
            ratio,
            passes: ratio <= 1.0,
        }
    }
}

/// Compare a compressive stress against the material's design compressive strength
pub fn check_compressive_stress(material: &Material, stress_mpa: f64) -> StressCheck {
    let check = StressCheck::new(stress_mpa, material.design_compressive_strength());
    debug!(
        "Compression check {}: {:.2} / {:.2} MPa = {:.3}",
        material.grade(),
        stress_mpa,
        check.capacity_mpa,
        check.ratio
    );
    check
}

/// Compare a bending stress against the material's design bending strength
pub fn check_bending_stress(material: &Material, stress_mpa: f64) -> StressCheck {
    let check = StressCheck::new(stress_mpa, material.design_bending_strength());
    debug!(
        "Bending check {}: {:.2} / {:.2} MPa = {:.3}",
        material.grade(),
        stress_mpa,
        check.capacity_mpa,
        check.ratio
    );
    check
}

/// Extreme fibre bending stress σ = M / S (MPa) from kN·m and mm³
pub fn bending_stress(moment_knm: f64, section_modulus_mm3: f64) -> StaticsResult<f64> {
    if section_modulus_mm3 <= 0.0 || !section_modulus_mm3.is_finite() {
        return Err(AnalysisError::invalid_input(
            "section_modulus_mm3",
            section_modulus_mm3.to_string(),
            "Section modulus must be positive",
        ));
    }
    Ok(moment_knm * 1.0e6 / section_modulus_mm3)
}

/// Axial stress σ = N / A (MPa) from kN and mm²
pub fn axial_stress(force_kn: f64, area_mm2: f64) -> StaticsResult<f64> {
    if area_mm2 <= 0.0 || !area_mm2.is_finite() {
        return Err(AnalysisError::invalid_input(
            "area_mm2",
            area_mm2.to_string(),
            "Area must be positive",
        ));
    }
    Ok(force_kn * 1.0e3 / area_mm2)
}
