//! Aluminium Alloys (EN 1999-1-1 Table 3.2b, extrusions)

use serde::{Deserialize, Serialize};

pub const ELASTIC_MODULUS_GPA: f64 = 70.0;

pub const POISSON_RATIO: f64 = 0.3;

/// Coefficient of thermal expansion (1/°C)
pub const THERMAL_COEFFICIENT: f64 = 23.0e-6;

/// Unit weight (kN/m³)
pub const UNIT_WEIGHT_KN_M3: f64 = 27.0;

/// Partial factor for cross-section resistance
pub const GAMMA_M1: f64 = 1.1;

/// Alloy and temper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluminumGrade {
    #[serde(rename = "6061-T6")]
    Alloy6061T6,
    #[serde(rename = "6063-T6")]
    Alloy6063T6,
    #[serde(rename = "5083-H111")]
    Alloy5083H111,
}

impl AluminumGrade {
    pub const ALL: [AluminumGrade; 3] = [
        AluminumGrade::Alloy6061T6,
        AluminumGrade::Alloy6063T6,
        AluminumGrade::Alloy5083H111,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AluminumGrade::Alloy6061T6 => "6061-T6",
            AluminumGrade::Alloy6063T6 => "6063-T6",
            AluminumGrade::Alloy5083H111 => "5083-H111",
        }
    }

    /// 0.2% proof strength f_0 (MPa)
    pub fn f0_mpa(&self) -> f64 {
        match self {
            AluminumGrade::Alloy6061T6 => 240.0,
            AluminumGrade::Alloy6063T6 => 160.0,
            AluminumGrade::Alloy5083H111 => 110.0,
        }
    }

    /// Ultimate tensile strength f_u (MPa)
    pub fn fu_mpa(&self) -> f64 {
        match self {
            AluminumGrade::Alloy6061T6 => 260.0,
            AluminumGrade::Alloy6063T6 => 195.0,
            AluminumGrade::Alloy5083H111 => 270.0,
        }
    }
}

impl std::fmt::Display for AluminumGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An aluminium material selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AluminumMaterial {
    pub grade: AluminumGrade,
}

impl AluminumMaterial {
    pub fn new(grade: AluminumGrade) -> Self {
        AluminumMaterial { grade }
    }

    /// Design strength f_0/γ_M1 (MPa)
    pub fn design_strength(&self) -> f64 {
        self.grade.f0_mpa() / GAMMA_M1
    }

    pub fn display_name(&self) -> String {
        format!("Aluminium {}", self.grade)
    }
}

impl Default for AluminumMaterial {
    fn default() -> Self {
        AluminumMaterial::new(AluminumGrade::Alloy6061T6)
    }
}
