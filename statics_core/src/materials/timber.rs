//! Timber Materials
//!
//! Softwood strength classes per EN 338 and homogeneous glulam per EN 14080.

use serde::{Deserialize, Serialize};

/// Partial factor for solid timber and glulam
pub const GAMMA_M: f64 = 1.3;

/// Modification factor, service class 1-2, medium-term load duration
pub const K_MOD: f64 = 0.8;

/// Nominal Poisson ratio (parallel to grain)
pub const POISSON_RATIO: f64 = 0.35;

/// Coefficient of thermal expansion parallel to grain (1/°C)
pub const THERMAL_COEFFICIENT: f64 = 5.0e-6;

/// Timber strength classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimberGrade {
    C16,
    C24,
    #[serde(rename = "GL24h")]
    Gl24h,
    #[serde(rename = "GL28h")]
    Gl28h,
}

/// Tabulated characteristic values for one timber class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimberProperties {
    /// Bending strength f_m,k (MPa)
    pub fm_k_mpa: f64,
    /// Tension parallel to grain f_t,0,k (MPa)
    pub ft0_k_mpa: f64,
    /// Compression parallel to grain f_c,0,k (MPa)
    pub fc0_k_mpa: f64,
    /// Mean modulus of elasticity parallel to grain E_0,mean (GPa)
    pub e0_mean_gpa: f64,
    /// Mean density (kg/m³)
    pub density_mean_kg_m3: f64,
}

impl TimberGrade {
    pub const ALL: [TimberGrade; 4] = [
        TimberGrade::C16,
        TimberGrade::C24,
        TimberGrade::Gl24h,
        TimberGrade::Gl28h,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TimberGrade::C16 => "C16",
            TimberGrade::C24 => "C24",
            TimberGrade::Gl24h => "GL24h",
            TimberGrade::Gl28h => "GL28h",
        }
    }

    /// Is this a glued laminated product
    pub fn is_glulam(&self) -> bool {
        matches!(self, TimberGrade::Gl24h | TimberGrade::Gl28h)
    }

    pub fn properties(&self) -> TimberProperties {
        match self {
            TimberGrade::C16 => TimberProperties {
                fm_k_mpa: 16.0,
                ft0_k_mpa: 8.5,
                fc0_k_mpa: 17.0,
                e0_mean_gpa: 8.0,
                density_mean_kg_m3: 370.0,
            },
            TimberGrade::C24 => TimberProperties {
                fm_k_mpa: 24.0,
                ft0_k_mpa: 14.5,
                fc0_k_mpa: 21.0,
                e0_mean_gpa: 11.0,
                density_mean_kg_m3: 420.0,
            },
            TimberGrade::Gl24h => TimberProperties {
                fm_k_mpa: 24.0,
                ft0_k_mpa: 19.2,
                fc0_k_mpa: 24.0,
                e0_mean_gpa: 11.5,
                density_mean_kg_m3: 420.0,
            },
            TimberGrade::Gl28h => TimberProperties {
                fm_k_mpa: 28.0,
                ft0_k_mpa: 22.3,
                fc0_k_mpa: 28.0,
                e0_mean_gpa: 12.6,
                density_mean_kg_m3: 460.0,
            },
        }
    }
}

impl std::fmt::Display for TimberGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A timber material selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimberMaterial {
    pub grade: TimberGrade,
}

impl TimberMaterial {
    pub fn new(grade: TimberGrade) -> Self {
        TimberMaterial { grade }
    }

    /// Design value k_mod·f_k/γ_M for a characteristic strength (MPa)
    fn design_value(fk_mpa: f64) -> f64 {
        K_MOD * fk_mpa / GAMMA_M
    }

    /// Design compressive strength parallel to grain (MPa)
    pub fn design_compressive_strength(&self) -> f64 {
        Self::design_value(self.grade.properties().fc0_k_mpa)
    }

    /// Design bending strength (MPa)
    pub fn design_bending_strength(&self) -> f64 {
        Self::design_value(self.grade.properties().fm_k_mpa)
    }

    /// Unit weight from mean density (kN/m³)
    pub fn unit_weight_kn_m3(&self) -> f64 {
        self.grade.properties().density_mean_kg_m3 * 9.81 / 1000.0
    }

    pub fn display_name(&self) -> String {
        if self.grade.is_glulam() {
            format!("Glulam {}", self.grade)
        } else {
            format!("Timber {}", self.grade)
        }
    }
}

impl Default for TimberMaterial {
    fn default() -> Self {
        TimberMaterial::new(TimberGrade::C24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_c24_design_bending() {
        // 0.8 * 24 / 1.3 = 14.77 MPa
        let c24 = TimberMaterial::new(TimberGrade::C24);
        assert_relative_eq!(c24.design_bending_strength(), 14.769, epsilon = 0.001);
    }

    #[test]
    fn test_unit_weight() {
        let c16 = TimberMaterial::new(TimberGrade::C16);
        assert_relative_eq!(c16.unit_weight_kn_m3(), 3.63, epsilon = 0.01);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TimberMaterial::new(TimberGrade::Gl24h).display_name(), "Glulam GL24h");
        assert_eq!(TimberMaterial::default().display_name(), "Timber C24");
    }
}
