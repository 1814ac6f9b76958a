//! # Analysis Settings
//!
//! Optional knobs shared by the solvers. Everything has a default, so a
//! settings file only needs the fields it changes:
//!
//! ```json
//! { "truss": { "determinacy": "AllowRedundant" } }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::truss::TrussOptions;
use crate::calculations::diagrams::DEFAULT_SUBDIVISIONS;
use crate::errors::{AnalysisError, StaticsResult};

/// Settings for one analysis session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Largest acceptable equilibrium residual (kN, kN·m)
    pub tolerance: f64,

    /// Interior diagram samples per loaded segment
    pub diagram_subdivisions: usize,

    /// Grade used when a stress check names no material
    pub default_material: String,

    pub truss: TrussOptions,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            tolerance: 1e-6,
            diagram_subdivisions: DEFAULT_SUBDIVISIONS,
            default_material: "S355".to_string(),
            truss: TrussOptions::default(),
        }
    }
}

impl AnalysisSettings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> StaticsResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json).map_err(|e| {
            AnalysisError::invalid_input("settings", e.to_string(), "Settings must be valid JSON")
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> StaticsResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AnalysisError::invalid_input(
                "tolerance",
                self.tolerance.to_string(),
                "Tolerance must be positive",
            ));
        }
        if !self.truss.default_stiffness.is_finite() || self.truss.default_stiffness <= 0.0 {
            return Err(AnalysisError::invalid_input(
                "truss.default_stiffness",
                self.truss.default_stiffness.to_string(),
                "Stiffness must be positive",
            ));
        }
        Ok(())
    }

    /// True when both residuals are within tolerance
    pub fn accepts_residual(&self, force: f64, moment: f64) -> bool {
        force.abs() <= self.tolerance && moment.abs() <= self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::truss::DeterminacyPolicy;

    #[test]
    fn test_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.truss.default_stiffness, 1000.0);
        assert_eq!(settings.truss.determinacy, DeterminacyPolicy::Strict);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let settings = AnalysisSettings::from_json(r#"{ "truss": { "determinacy": "AllowRedundant" } }"#).unwrap();
        assert_eq!(settings.truss.determinacy, DeterminacyPolicy::AllowRedundant);
        assert_eq!(settings.truss.default_stiffness, 1000.0);
        assert_eq!(settings.tolerance, 1e-6);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AnalysisSettings::from_json(r#"{ "tolerance": -1.0 }"#).is_err());
        assert!(AnalysisSettings::from_json(r#"{ "truss": { "default_stiffness": 0.0 } }"#).is_err());
        assert!(AnalysisSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_accepts_residual() {
        let settings = AnalysisSettings::default();
        assert!(settings.accepts_residual(1e-9, -1e-9));
        assert!(!settings.accepts_residual(1e-3, 0.0));
    }
}
