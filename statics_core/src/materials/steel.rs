//! Structural Steel (EN 10025-2, EN 1993-1-1 Table 3.1)
//!
//! Hot-rolled structural steel grades, nominal values for element
//! thickness t ≤ 40 mm. Elastic constants are common to all grades.

use serde::{Deserialize, Serialize};

/// Modulus of elasticity (GPa)
pub const ELASTIC_MODULUS_GPA: f64 = 210.0;

/// Poisson ratio in the elastic range
pub const POISSON_RATIO: f64 = 0.3;

/// Coefficient of thermal expansion (1/°C)
pub const THERMAL_COEFFICIENT: f64 = 12.0e-6;

/// Unit weight (kN/m³)
pub const UNIT_WEIGHT_KN_M3: f64 = 78.5;

/// Partial factor for resistance of cross-sections
pub const GAMMA_M0: f64 = 1.0;

/// Structural steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    S235,
    S275,
    S355,
    S460,
}

impl SteelGrade {
    /// All grades for selection lists
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::S235,
        SteelGrade::S275,
        SteelGrade::S355,
        SteelGrade::S460,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
            SteelGrade::S460 => "S460",
        }
    }

    /// Nominal yield strength f_y (MPa)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::S235 => 235.0,
            SteelGrade::S275 => 275.0,
            SteelGrade::S355 => 355.0,
            SteelGrade::S460 => 460.0,
        }
    }

    /// Nominal ultimate tensile strength f_u (MPa)
    pub fn fu_mpa(&self) -> f64 {
        match self {
            SteelGrade::S235 => 360.0,
            SteelGrade::S275 => 430.0,
            SteelGrade::S355 => 510.0,
            SteelGrade::S460 => 540.0,
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A steel material selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    pub grade: SteelGrade,
}

impl SteelMaterial {
    pub fn new(grade: SteelGrade) -> Self {
        SteelMaterial { grade }
    }

    /// Design yield strength f_y/γ_M0 (MPa), used for both axial and bending checks
    pub fn design_strength(&self) -> f64 {
        self.grade.fy_mpa() / GAMMA_M0
    }

    pub fn display_name(&self) -> String {
        format!("Steel {}", self.grade)
    }
}

impl Default for SteelMaterial {
    fn default() -> Self {
        SteelMaterial::new(SteelGrade::S355)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strengths_increase_with_grade() {
        let fy: Vec<f64> = SteelGrade::ALL.iter().map(SteelGrade::fy_mpa).collect();
        assert!(fy.windows(2).all(|w| w[0] < w[1]));
        assert!(SteelGrade::ALL.iter().all(|g| g.fu_mpa() > g.fy_mpa()));
    }

    #[test]
    fn test_design_strength() {
        assert_eq!(SteelMaterial::new(SteelGrade::S275).design_strength(), 275.0);
    }

    #[test]
    fn test_serialization() {
        let mat = SteelMaterial::new(SteelGrade::S355);
        let json = serde_json::to_string(&mat).unwrap();
        assert_eq!(json, r#"{"grade":"S355"}"#);
    }
}
