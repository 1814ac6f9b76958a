//! Standard Load Combinations
//!
//! A fixed catalog of ultimate (ULS) and serviceability (SLS) combinations
//! over the four load symbols G, Q, W and S.
//!
//! Factored values are summed in [`LoadSymbol::ALL`] order so that repeated
//! evaluation of the same input is bit-identical.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::load_types::LoadSymbol;

/// A load combination with factors for each load symbol
///
/// # Example
/// ```
/// use statics_core::loads::{LoadCombination, LoadSymbol};
/// use std::collections::HashMap;
///
/// let combo = LoadCombination::new("ULS-2", "1.4G + 1.6Q")
///     .with_factor(LoadSymbol::G, 1.4)
///     .with_factor(LoadSymbol::Q, 1.6);
///
/// let loads: HashMap<LoadSymbol, f64> =
///     [(LoadSymbol::G, 10.0), (LoadSymbol::Q, 5.0)].into_iter().collect();
///
/// assert!((combo.apply(&loads) - 22.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "ULS-1", "SLS-3")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.4G + 1.6Q")
    pub equation: String,

    /// Load factors keyed by symbol
    pub factors: HashMap<LoadSymbol, f64>,

    /// Ultimate limit state (strength) combination
    pub is_ultimate: bool,
}

impl LoadCombination {
    /// Create a new ultimate load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
            is_ultimate: true,
        }
    }

    /// Create a new serviceability load combination
    pub fn serviceability(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            is_ultimate: false,
            ..LoadCombination::new(name, equation)
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, symbol: LoadSymbol, factor: f64) -> Self {
        self.factors.insert(symbol, factor);
        self
    }

    /// Get the factor for a symbol (0.0 if not in combination)
    pub fn get_factor(&self, symbol: LoadSymbol) -> f64 {
        self.factors.get(&symbol).copied().unwrap_or(0.0)
    }

    /// Total factored load. Symbols absent from `loads` contribute zero.
    pub fn apply(&self, loads: &HashMap<LoadSymbol, f64>) -> f64 {
        LoadSymbol::ALL
            .iter()
            .map(|symbol| self.get_factor(*symbol) * loads.get(symbol).copied().unwrap_or(0.0))
            .sum()
    }
}

/// One evaluated combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationResult {
    pub name: String,
    pub equation: String,
    /// Factored total
    pub value: f64,
    pub is_ultimate: bool,
}

/// The standard combination catalog, ultimate first
///
/// | Name  | Equation           |
/// |-------|--------------------|
/// | ULS-1 | 1.4G               |
/// | ULS-2 | 1.4G + 1.6Q        |
/// | ULS-3 | 1.4G + 1.6S        |
/// | ULS-4 | 1.4G + 1.4W        |
/// | ULS-5 | 1.0G + 1.4W        |
/// | ULS-6 | 1.2G + 1.2Q + 1.2W |
/// | ULS-7 | 1.2G + 1.2Q + 1.2S |
/// | SLS-1 | G + Q              |
/// | SLS-2 | G + S              |
/// | SLS-3 | G + W              |
/// | SLS-4 | G + 0.8Q + 0.8W    |
pub fn standard_combinations() -> Vec<LoadCombination> {
    vec![
        // Ultimate
        LoadCombination::new("ULS-1", "1.4G")
            .with_factor(LoadSymbol::G, 1.4),

        LoadCombination::new("ULS-2", "1.4G + 1.6Q")
            .with_factor(LoadSymbol::G, 1.4)
            .with_factor(LoadSymbol::Q, 1.6),

        LoadCombination::new("ULS-3", "1.4G + 1.6S")
            .with_factor(LoadSymbol::G, 1.4)
            .with_factor(LoadSymbol::S, 1.6),

        LoadCombination::new("ULS-4", "1.4G + 1.4W")
            .with_factor(LoadSymbol::G, 1.4)
            .with_factor(LoadSymbol::W, 1.4),

        // Minimum permanent load with wind (overturning)
        LoadCombination::new("ULS-5", "1.0G + 1.4W")
            .with_factor(LoadSymbol::G, 1.0)
            .with_factor(LoadSymbol::W, 1.4),

        LoadCombination::new("ULS-6", "1.2G + 1.2Q + 1.2W")
            .with_factor(LoadSymbol::G, 1.2)
            .with_factor(LoadSymbol::Q, 1.2)
            .with_factor(LoadSymbol::W, 1.2),

        LoadCombination::new("ULS-7", "1.2G + 1.2Q + 1.2S")
            .with_factor(LoadSymbol::G, 1.2)
            .with_factor(LoadSymbol::Q, 1.2)
            .with_factor(LoadSymbol::S, 1.2),

        // Serviceability
        LoadCombination::serviceability("SLS-1", "G + Q")
            .with_factor(LoadSymbol::G, 1.0)
            .with_factor(LoadSymbol::Q, 1.0),

        LoadCombination::serviceability("SLS-2", "G + S")
            .with_factor(LoadSymbol::G, 1.0)
            .with_factor(LoadSymbol::S, 1.0),

        LoadCombination::serviceability("SLS-3", "G + W")
            .with_factor(LoadSymbol::G, 1.0)
            .with_factor(LoadSymbol::W, 1.0),

        LoadCombination::serviceability("SLS-4", "G + 0.8Q + 0.8W")
            .with_factor(LoadSymbol::G, 1.0)
            .with_factor(LoadSymbol::Q, 0.8)
            .with_factor(LoadSymbol::W, 0.8),
    ]
}

/// Apply the given combinations, preserving their order
pub fn evaluate(
    loads: &HashMap<LoadSymbol, f64>,
    combinations: &[LoadCombination],
) -> Vec<CombinationResult> {
    combinations
        .iter()
        .map(|combo| CombinationResult {
            name: combo.name.clone(),
            equation: combo.equation.clone(),
            value: combo.apply(loads),
            is_ultimate: combo.is_ultimate,
        })
        .collect()
}

/// Evaluate every standard combination
///
/// # Example
/// ```
/// use statics_core::loads::{evaluate_all, LoadSymbol};
/// use std::collections::HashMap;
///
/// let loads: HashMap<LoadSymbol, f64> = [(LoadSymbol::G, 10.0)].into_iter().collect();
/// let results = evaluate_all(&loads);
/// assert_eq!(results.len(), 11);
/// assert!((results[0].value - 14.0).abs() < 1e-12);
/// ```
pub fn evaluate_all(loads: &HashMap<LoadSymbol, f64>) -> Vec<CombinationResult> {
    evaluate(loads, &standard_combinations())
}

/// The ultimate combination with the largest magnitude
///
/// Serviceability results never govern. Returns `None` when there are no
/// ultimate results. Ties keep the first combination in catalog order.
pub fn critical_combination(results: &[CombinationResult]) -> Option<&CombinationResult> {
    results
        .iter()
        .filter(|r| r.is_ultimate)
        .fold(None, |best: Option<&CombinationResult>, r| match best {
            Some(b) if b.value.abs() >= r.value.abs() => Some(b),
            _ => Some(r),
        })
}

/// All results plus the governing extremes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationSummary {
    pub results: Vec<CombinationResult>,
    /// Largest-magnitude ultimate combination
    pub critical: Option<CombinationResult>,
    /// Largest signed value over all combinations
    pub maximum: Option<CombinationResult>,
    /// Smallest signed value over all combinations (uplift when negative)
    pub minimum: Option<CombinationResult>,
}

/// Evaluate every standard combination and find the governing results
pub fn summarize(loads: &HashMap<LoadSymbol, f64>) -> CombinationSummary {
    let results = evaluate_all(loads);

    let mut maximum: Option<&CombinationResult> = None;
    let mut minimum: Option<&CombinationResult> = None;
    for r in &results {
        if maximum.map_or(true, |m| r.value > m.value) {
            maximum = Some(r);
        }
        if minimum.map_or(true, |m| r.value < m.value) {
            minimum = Some(r);
        }
    }

    let critical = critical_combination(&results).cloned();
    if let Some(c) = &critical {
        debug!("Critical combination {} ({}) = {:.3}", c.name, c.equation, c.value);
    }

    CombinationSummary {
        critical,
        maximum: maximum.cloned(),
        minimum: minimum.cloned(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn loads(g: f64, q: f64, w: f64, s: f64) -> HashMap<LoadSymbol, f64> {
        [
            (LoadSymbol::G, g),
            (LoadSymbol::Q, q),
            (LoadSymbol::W, w),
            (LoadSymbol::S, s),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_catalog_shape() {
        let combos = standard_combinations();
        assert_eq!(combos.len(), 11);
        assert_eq!(combos.iter().filter(|c| c.is_ultimate).count(), 7);
        assert!(combos.iter().take(7).all(|c| c.name.starts_with("ULS")));
        assert!(combos.iter().skip(7).all(|c| c.name.starts_with("SLS")));
    }

    #[test]
    fn test_uls2_dead_plus_live() {
        let mut map = HashMap::new();
        map.insert(LoadSymbol::G, 10.0);
        map.insert(LoadSymbol::Q, 5.0);

        let results = evaluate_all(&map);
        let uls2 = results.iter().find(|r| r.name == "ULS-2").unwrap();
        assert_eq!(uls2.value, 22.0);
    }

    #[test]
    fn test_absent_symbols_contribute_zero() {
        let mut map = HashMap::new();
        map.insert(LoadSymbol::G, 10.0);

        let results = evaluate_all(&map);
        let sls4 = results.iter().find(|r| r.name == "SLS-4").unwrap();
        assert_relative_eq!(sls4.value, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_every_catalog_value() {
        let map = loads(10.0, 5.0, 4.0, 2.0);
        let expected = [
            ("ULS-1", 14.0),
            ("ULS-2", 22.0),
            ("ULS-3", 17.2),
            ("ULS-4", 19.6),
            ("ULS-5", 15.6),
            ("ULS-6", 22.8),
            ("ULS-7", 20.4),
            ("SLS-1", 15.0),
            ("SLS-2", 12.0),
            ("SLS-3", 14.0),
            ("SLS-4", 17.2),
        ];
        let results = evaluate_all(&map);
        for (name, value) in expected {
            let r = results.iter().find(|r| r.name == name).unwrap();
            assert_relative_eq!(r.value, value, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_critical_ignores_serviceability() {
        let result = |name: &str, value: f64, is_ultimate: bool| CombinationResult {
            name: name.to_string(),
            equation: String::new(),
            value,
            is_ultimate,
        };
        let results = vec![
            result("ULS-A", 10.0, true),
            result("SLS-A", 500.0, false),
            result("ULS-B", -12.0, true),
        ];
        let critical = critical_combination(&results).unwrap();
        assert_eq!(critical.name, "ULS-B");
    }

    #[test]
    fn test_critical_live_dominated() {
        // ULS-2 = 1.4 + 160 = 161.4
        let results = evaluate_all(&loads(1.0, 100.0, 0.0, 0.0));
        let critical = critical_combination(&results).unwrap();
        assert_eq!(critical.name, "ULS-2");
        assert_relative_eq!(critical.value, 161.4, epsilon = 1e-9);
    }

    #[test]
    fn test_critical_uses_magnitude() {
        // Wind uplift: ULS-5 = 1.0*2 + 1.4*(-50) = -68 dominates ULS-4 = 2.8 - 70 = -67.2
        let results = evaluate_all(&loads(2.0, 0.0, -50.0, 0.0));
        let critical = critical_combination(&results).unwrap();
        assert_eq!(critical.name, "ULS-5");
        assert_relative_eq!(critical.value, -68.0, epsilon = 1e-9);
    }

    #[test]
    fn test_critical_empty() {
        assert!(critical_combination(&[]).is_none());
    }

    #[test]
    fn test_summarize_min_max() {
        let summary = summarize(&loads(2.0, 0.0, -50.0, 0.0));
        assert_eq!(summary.results.len(), 11);
        assert_eq!(summary.maximum.as_ref().unwrap().name, "ULS-1");
        assert_eq!(summary.minimum.as_ref().unwrap().name, "ULS-5");
        assert_eq!(summary.critical.as_ref().unwrap().name, "ULS-5");
    }

    #[test]
    fn test_repeat_evaluation_identical() {
        let map = loads(12.3, 4.56, 7.89, 0.12);
        let a = evaluate_all(&map);
        let b = evaluate_all(&map);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.value.to_bits(), y.value.to_bits());
        }
    }

    #[test]
    fn test_combination_serialization() {
        let combo = LoadCombination::serviceability("SLS-1", "G + Q")
            .with_factor(LoadSymbol::G, 1.0)
            .with_factor(LoadSymbol::Q, 1.0);

        let json = serde_json::to_string(&combo).unwrap();
        let parsed: LoadCombination = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, combo);
        assert!(!parsed.is_ultimate);
        assert_eq!(parsed.get_factor(LoadSymbol::W), 0.0);
    }
}
