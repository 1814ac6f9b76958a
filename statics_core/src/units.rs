//! # Unit Types
//!
//! Type-safe wrappers for engineering units plus a runtime converter for
//! values whose unit is only known from user input.
//!
//! ## SI Units (Primary)
//!
//! The solvers are unit-agnostic but the catalog, checks and reports use a
//! consistent SI set:
//! - Length: metres (m), millimetres (mm)
//! - Force: kilonewtons (kN), newtons (N)
//! - Moment: kilonewton-metres (kNm)
//! - Distributed load: kilonewtons per metre (kN/m)
//! - Stress: megapascals (MPa), gigapascals (GPa)
//!
//! ## Example
//!
//! ```rust
//! use statics_core::units::{convert, Meters, Millimeters, Unit};
//!
//! let span = Meters(6.0);
//! let span_mm: Millimeters = span.into();
//! assert_eq!(span_mm.0, 6000.0);
//!
//! assert_eq!(convert(2.5, Unit::KiloNewton, Unit::Newton).unwrap(), 2500.0);
//! assert!(convert(1.0, Unit::KiloNewton, Unit::Meter).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::errors::{AnalysisError, StaticsResult};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment and Distributed Load Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonsPerMeter(pub f64);

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

/// Stress in gigapascals (kN/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GigaPascals(pub f64);

impl From<GigaPascals> for MegaPascals {
    fn from(gpa: GigaPascals) -> Self {
        MegaPascals(gpa.0 * 1000.0)
    }
}

impl From<MegaPascals> for GigaPascals {
    fn from(mpa: MegaPascals) -> Self {
        GigaPascals(mpa.0 / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtonMeters);
impl_arithmetic!(KiloNewtonsPerMeter);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(GigaPascals);

// Force × lever arm
impl Mul<Meters> for KiloNewtons {
    type Output = KiloNewtonMeters;
    fn mul(self, rhs: Meters) -> Self::Output {
        KiloNewtonMeters(self.0 * rhs.0)
    }
}

// Intensity × loaded length
impl Mul<Meters> for KiloNewtonsPerMeter {
    type Output = KiloNewtons;
    fn mul(self, rhs: Meters) -> Self::Output {
        KiloNewtons(self.0 * rhs.0)
    }
}

// ============================================================================
// Runtime Units
// ============================================================================

/// Physical dimension of a [`Unit`]; conversion is only defined within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Length,
    Force,
    Moment,
    DistributedLoad,
    Stress,
}

/// A unit whose identity is only known at runtime (parsed from input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Meter,
    Millimeter,
    Centimeter,
    Newton,
    KiloNewton,
    MegaNewton,
    NewtonMeter,
    KiloNewtonMeter,
    NewtonPerMeter,
    KiloNewtonPerMeter,
    Pascal,
    KiloPascal,
    MegaPascal,
    GigaPascal,
}

impl Unit {
    /// All units in display order
    pub const ALL: [Unit; 14] = [
        Unit::Meter,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Newton,
        Unit::KiloNewton,
        Unit::MegaNewton,
        Unit::NewtonMeter,
        Unit::KiloNewtonMeter,
        Unit::NewtonPerMeter,
        Unit::KiloNewtonPerMeter,
        Unit::Pascal,
        Unit::KiloPascal,
        Unit::MegaPascal,
        Unit::GigaPascal,
    ];

    /// Standard symbol (m, kN, kNm, ...)
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Newton => "N",
            Unit::KiloNewton => "kN",
            Unit::MegaNewton => "MN",
            Unit::NewtonMeter => "Nm",
            Unit::KiloNewtonMeter => "kNm",
            Unit::NewtonPerMeter => "N/m",
            Unit::KiloNewtonPerMeter => "kN/m",
            Unit::Pascal => "Pa",
            Unit::KiloPascal => "kPa",
            Unit::MegaPascal => "MPa",
            Unit::GigaPascal => "GPa",
        }
    }

    /// Dimension this unit measures
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Meter | Unit::Millimeter | Unit::Centimeter => Dimension::Length,
            Unit::Newton | Unit::KiloNewton | Unit::MegaNewton => Dimension::Force,
            Unit::NewtonMeter | Unit::KiloNewtonMeter => Dimension::Moment,
            Unit::NewtonPerMeter | Unit::KiloNewtonPerMeter => Dimension::DistributedLoad,
            Unit::Pascal | Unit::KiloPascal | Unit::MegaPascal | Unit::GigaPascal => Dimension::Stress,
        }
    }

    /// Multiplier to the SI base unit of the dimension (m, N, Nm, N/m, Pa)
    fn to_base(self) -> f64 {
        match self {
            Unit::Meter => 1.0,
            Unit::Millimeter => 1e-3,
            Unit::Centimeter => 1e-2,
            Unit::Newton => 1.0,
            Unit::KiloNewton => 1e3,
            Unit::MegaNewton => 1e6,
            Unit::NewtonMeter => 1.0,
            Unit::KiloNewtonMeter => 1e3,
            Unit::NewtonPerMeter => 1.0,
            Unit::KiloNewtonPerMeter => 1e3,
            Unit::Pascal => 1.0,
            Unit::KiloPascal => 1e3,
            Unit::MegaPascal => 1e6,
            Unit::GigaPascal => 1e9,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Symbols are case-sensitive: "mN" and "MN" differ by 10⁹
        let exact = Unit::ALL
            .iter()
            .find(|unit| unit.symbol() == trimmed)
            .copied()
            .or(match trimmed {
                "kN-m" | "kN.m" | "kN·m" => Some(Unit::KiloNewtonMeter),
                "N-m" | "N.m" | "N·m" => Some(Unit::NewtonMeter),
                "N/mm2" | "N/mm²" => Some(Unit::MegaPascal),
                _ => None,
            });
        if let Some(unit) = exact {
            return Ok(unit);
        }

        if Unit::ALL.iter().any(|unit| unit.symbol().eq_ignore_ascii_case(trimmed)) {
            return Err(AnalysisError::invalid_input(
                "unit",
                s,
                "Unit symbols are case-sensitive (m = milli, M = mega)",
            ));
        }
        Err(AnalysisError::invalid_input("unit", s, "Unknown unit symbol"))
    }
}

/// Convert `value` from one unit to another of the same dimension.
///
/// Converting across dimensions (force to length, etc.) is an
/// [`AnalysisError::UnsupportedUnitConversion`].
pub fn convert(value: f64, from: Unit, to: Unit) -> StaticsResult<f64> {
    if from.dimension() != to.dimension() {
        return Err(AnalysisError::unsupported_conversion(from.symbol(), to.symbol()));
    }
    if from == to {
        return Ok(value);
    }
    Ok(value * from.to_base() / to.to_base())
}
