//! # Materials Catalog
//!
//! Material definitions and property lookups for the statics core.
//! Every supported grade lives in one read-only catalog built on first use.
//!
//! ## Material Families
//!
//! - **Concrete**: EN 1992-1-1 strength classes C20/25 to C50/60
//! - **Steel**: EN 10025 structural grades S235 to S460
//! - **Timber**: EN 338 softwood (C16, C24) and EN 14080 glulam (GL24h, GL28h)
//! - **Aluminum**: EN 1999 extrusion alloys 6061-T6, 6063-T6, 5083-H111
//!
//! ## Example
//!
//! ```rust
//! use statics_core::materials::{lookup, MaterialFamily};
//!
//! let steel = lookup("s355").unwrap();
//! assert_eq!(steel.family(), MaterialFamily::Steel);
//!
//! let props = steel.properties();
//! println!("fy = {} MPa, E = {} GPa", props.fc_mpa, props.e_gpa);
//! ```

pub mod aluminum;
pub mod concrete;
pub mod steel;
pub mod timber;

pub use aluminum::{AluminumGrade, AluminumMaterial};
pub use concrete::{ConcreteGrade, ConcreteMaterial};
pub use steel::{SteelGrade, SteelMaterial};
pub use timber::{TimberGrade, TimberMaterial, TimberProperties};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, StaticsResult};

/// Shear modulus of an isotropic material, G = E / (2(1 + ν))
pub fn shear_modulus(elastic_modulus: f64, poisson_ratio: f64) -> f64 {
    elastic_modulus / (2.0 * (1.0 + poisson_ratio))
}

/// Unified material properties for all families
///
/// Strengths are characteristic values. For the metals the compressive and
/// bending entries carry the yield (proof) strength and the tensile entry the
/// ultimate strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Compressive strength (MPa)
    pub fc_mpa: f64,
    /// Tensile strength (MPa)
    pub ft_mpa: f64,
    /// Bending strength (MPa)
    pub fb_mpa: f64,
    /// Modulus of elasticity (GPa)
    pub e_gpa: f64,
    /// Shear modulus (GPa)
    pub g_gpa: f64,
    pub poisson_ratio: f64,
    /// Coefficient of thermal expansion (1/°C)
    pub thermal_coefficient: f64,
    /// Unit weight (kN/m³)
    pub unit_weight_kn_m3: f64,
}

/// Material family discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialFamily {
    Concrete,
    Steel,
    Timber,
    Aluminum,
}

impl std::fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MaterialFamily::Concrete => "Concrete",
            MaterialFamily::Steel => "Steel",
            MaterialFamily::Timber => "Timber",
            MaterialFamily::Aluminum => "Aluminum",
        };
        write!(f, "{}", name)
    }
}

/// Unified material enum for all structural materials
///
/// ## JSON Serialization
///
/// Materials serialize with a "type" discriminator:
///
/// ```json
/// { "type": "Concrete", "grade": "C30/37" }
/// { "type": "Steel", "grade": "S355" }
/// { "type": "Timber", "grade": "GL24h" }
/// { "type": "Aluminum", "grade": "6061-T6" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    Concrete(ConcreteMaterial),
    Steel(SteelMaterial),
    Timber(TimberMaterial),
    Aluminum(AluminumMaterial),
}

impl Material {
    /// Unified characteristic properties for this material
    pub fn properties(&self) -> MaterialProperties {
        match self {
            Material::Concrete(mat) => {
                let fck = mat.grade.fck_mpa();
                let e = concrete::elastic_modulus_from_strength(fck);
                MaterialProperties {
                    fc_mpa: fck,
                    ft_mpa: concrete::mean_tensile_strength(fck),
                    fb_mpa: fck,
                    e_gpa: e,
                    g_gpa: shear_modulus(e, concrete::POISSON_RATIO),
                    poisson_ratio: concrete::POISSON_RATIO,
                    thermal_coefficient: concrete::THERMAL_COEFFICIENT,
                    unit_weight_kn_m3: concrete::UNIT_WEIGHT_KN_M3,
                }
            }
            Material::Steel(mat) => MaterialProperties {
                fc_mpa: mat.grade.fy_mpa(),
                ft_mpa: mat.grade.fu_mpa(),
                fb_mpa: mat.grade.fy_mpa(),
                e_gpa: steel::ELASTIC_MODULUS_GPA,
                g_gpa: shear_modulus(steel::ELASTIC_MODULUS_GPA, steel::POISSON_RATIO),
                poisson_ratio: steel::POISSON_RATIO,
                thermal_coefficient: steel::THERMAL_COEFFICIENT,
                unit_weight_kn_m3: steel::UNIT_WEIGHT_KN_M3,
            },
            Material::Timber(mat) => {
                let props = mat.grade.properties();
                MaterialProperties {
                    fc_mpa: props.fc0_k_mpa,
                    ft_mpa: props.ft0_k_mpa,
                    fb_mpa: props.fm_k_mpa,
                    e_gpa: props.e0_mean_gpa,
                    g_gpa: shear_modulus(props.e0_mean_gpa, timber::POISSON_RATIO),
                    poisson_ratio: timber::POISSON_RATIO,
                    thermal_coefficient: timber::THERMAL_COEFFICIENT,
                    unit_weight_kn_m3: mat.unit_weight_kn_m3(),
                }
            }
            Material::Aluminum(mat) => MaterialProperties {
                fc_mpa: mat.grade.f0_mpa(),
                ft_mpa: mat.grade.fu_mpa(),
                fb_mpa: mat.grade.f0_mpa(),
                e_gpa: aluminum::ELASTIC_MODULUS_GPA,
                g_gpa: shear_modulus(aluminum::ELASTIC_MODULUS_GPA, aluminum::POISSON_RATIO),
                poisson_ratio: aluminum::POISSON_RATIO,
                thermal_coefficient: aluminum::THERMAL_COEFFICIENT,
                unit_weight_kn_m3: aluminum::UNIT_WEIGHT_KN_M3,
            },
        }
    }

    /// Design compressive strength (MPa)
    pub fn design_compressive_strength(&self) -> f64 {
        match self {
            Material::Concrete(mat) => mat.design_compressive_strength(),
            Material::Steel(mat) => mat.design_strength(),
            Material::Timber(mat) => mat.design_compressive_strength(),
            Material::Aluminum(mat) => mat.design_strength(),
        }
    }

    /// Design bending strength (MPa)
    ///
    /// Concrete has no separate flexural design value here; the compression
    /// limit governs the extreme fibre.
    pub fn design_bending_strength(&self) -> f64 {
        match self {
            Material::Concrete(mat) => mat.design_compressive_strength(),
            Material::Steel(mat) => mat.design_strength(),
            Material::Timber(mat) => mat.design_bending_strength(),
            Material::Aluminum(mat) => mat.design_strength(),
        }
    }

    /// Grade designation (e.g. "C30/37", "S355", "GL24h")
    pub fn grade(&self) -> &'static str {
        match self {
            Material::Concrete(mat) => mat.grade.code(),
            Material::Steel(mat) => mat.grade.code(),
            Material::Timber(mat) => mat.grade.code(),
            Material::Aluminum(mat) => mat.grade.code(),
        }
    }

    pub fn family(&self) -> MaterialFamily {
        match self {
            Material::Concrete(_) => MaterialFamily::Concrete,
            Material::Steel(_) => MaterialFamily::Steel,
            Material::Timber(_) => MaterialFamily::Timber,
            Material::Aluminum(_) => MaterialFamily::Aluminum,
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> String {
        match self {
            Material::Concrete(mat) => mat.display_name(),
            Material::Steel(mat) => mat.display_name(),
            Material::Timber(mat) => mat.display_name(),
            Material::Aluminum(mat) => mat.display_name(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::Steel(SteelMaterial::default())
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// Convenience conversions
impl From<ConcreteMaterial> for Material {
    fn from(mat: ConcreteMaterial) -> Self {
        Material::Concrete(mat)
    }
}

impl From<SteelMaterial> for Material {
    fn from(mat: SteelMaterial) -> Self {
        Material::Steel(mat)
    }
}

impl From<TimberMaterial> for Material {
    fn from(mat: TimberMaterial) -> Self {
        Material::Timber(mat)
    }
}

impl From<AluminumMaterial> for Material {
    fn from(mat: AluminumMaterial) -> Self {
        Material::Aluminum(mat)
    }
}

static CATALOG: Lazy<Vec<Material>> = Lazy::new(|| {
    let concrete = ConcreteGrade::ALL
        .iter()
        .map(|&g| Material::from(ConcreteMaterial::new(g)));
    let steel = SteelGrade::ALL
        .iter()
        .map(|&g| Material::from(SteelMaterial::new(g)));
    let timber = TimberGrade::ALL
        .iter()
        .map(|&g| Material::from(TimberMaterial::new(g)));
    let aluminum = AluminumGrade::ALL
        .iter()
        .map(|&g| Material::from(AluminumMaterial::new(g)));
    concrete.chain(steel).chain(timber).chain(aluminum).collect()
});

/// Every catalogued grade, concrete first
pub fn catalog() -> &'static [Material] {
    &CATALOG
}

/// Uppercase with whitespace, '-' and '_' removed
fn normalize_grade(grade: &str) -> String {
    grade
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Find a material by grade designation.
///
/// Matching ignores case, spaces and dashes, so "s355", "GL 24h" and
/// "6061T6" all resolve. A concrete class may be given by its cylinder
/// strength alone ("C30" finds C30/37) when no other grade has that name.
pub fn lookup(grade: &str) -> StaticsResult<Material> {
    let wanted = normalize_grade(grade);
    if wanted.is_empty() {
        return Err(AnalysisError::material_not_found(grade));
    }

    if let Some(mat) = CATALOG.iter().find(|m| normalize_grade(m.grade()) == wanted) {
        return Ok(mat.clone());
    }

    // Concrete shorthand: match on the part before the slash
    CATALOG
        .iter()
        .find(|m| {
            m.family() == MaterialFamily::Concrete
                && m.grade()
                    .split('/')
                    .next()
                    .is_some_and(|cyl| normalize_grade(cyl) == wanted)
        })
        .cloned()
        .ok_or_else(|| AnalysisError::material_not_found(grade))
}
