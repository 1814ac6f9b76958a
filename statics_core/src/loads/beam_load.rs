//! Beam Load Variants
//!
//! Loads applied along a straight beam, positions measured in metres from the
//! left end.
//!
//! ## Sign Convention
//! - Force magnitudes are positive acting downward (gravity)
//! - Moment magnitudes are positive counter-clockwise
//!
//! ## Example
//! ```rust
//! use statics_core::loads::Load;
//!
//! // 4 kN/m over 0-6 m: resultant 24 kN at 3 m
//! let udl = Load::uniform(4.0, 0.0, 6.0);
//! assert_eq!(udl.resultant(), 24.0);
//! assert_eq!(udl.centroid(), Some(3.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, StaticsResult};

/// A single load applied to the beam
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Point", "position": 2.0, "magnitude": 10.0 }
/// { "type": "UniformDistributed", "start": 0.0, "end": 6.0, "magnitude": 4.0 }
/// { "type": "Moment", "position": 3.0, "magnitude": 12.0 }
/// { "type": "Triangular", "start": 0.0, "end": 6.0, "peak_magnitude": 6.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Concentrated force (kN)
    Point { position: f64, magnitude: f64 },

    /// Constant intensity (kN/m) between `start` and `end`
    UniformDistributed { start: f64, end: f64, magnitude: f64 },

    /// Applied couple (kN·m), positive counter-clockwise
    Moment { position: f64, magnitude: f64 },

    /// Linearly varying intensity, zero at `start` rising to `peak_magnitude` (kN/m) at `end`
    Triangular { start: f64, end: f64, peak_magnitude: f64 },
}

/// A linearly varying distributed load segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributedSegment {
    pub start: f64,
    pub end: f64,
    /// Downward intensity at `start` (kN/m)
    pub w_start: f64,
    /// Downward intensity at `end` (kN/m)
    pub w_end: f64,
}

impl DistributedSegment {
    /// Rate of change of intensity (kN/m per m)
    pub fn slope(&self) -> f64 {
        (self.w_end - self.w_start) / (self.end - self.start)
    }

    /// Intensity at `x`, zero outside the segment
    pub fn intensity_at(&self, x: f64) -> f64 {
        if x < self.start || x > self.end {
            0.0
        } else {
            self.w_start + self.slope() * (x - self.start)
        }
    }
}

impl Load {
    /// Create a point load
    pub fn point(magnitude: f64, position: f64) -> Self {
        Load::Point { position, magnitude }
    }

    /// Create a uniformly distributed load
    pub fn uniform(magnitude: f64, start: f64, end: f64) -> Self {
        Load::UniformDistributed { start, end, magnitude }
    }

    /// Create an applied moment
    pub fn moment(magnitude: f64, position: f64) -> Self {
        Load::Moment { position, magnitude }
    }

    /// Create a triangular load peaking at `end`
    pub fn triangular(peak_magnitude: f64, start: f64, end: f64) -> Self {
        Load::Triangular { start, end, peak_magnitude }
    }

    /// Total downward force (kN); zero for applied moments
    pub fn resultant(&self) -> f64 {
        match self {
            Load::Point { magnitude, .. } => *magnitude,
            Load::UniformDistributed { start, end, magnitude } => magnitude * (end - start),
            Load::Moment { .. } => 0.0,
            Load::Triangular { start, end, peak_magnitude } => 0.5 * peak_magnitude * (end - start),
        }
    }

    /// Line of action of the resultant; `None` for applied moments
    ///
    /// Triangular loads act at two thirds of their length from `start`.
    pub fn centroid(&self) -> Option<f64> {
        match self {
            Load::Point { position, .. } => Some(*position),
            Load::UniformDistributed { start, end, .. } => Some(0.5 * (start + end)),
            Load::Moment { .. } => None,
            Load::Triangular { start, end, .. } => Some(start + 2.0 / 3.0 * (end - start)),
        }
    }

    /// Applied couple (kN·m, CCW positive); zero for force loads
    pub fn applied_moment(&self) -> f64 {
        match self {
            Load::Moment { magnitude, .. } => *magnitude,
            _ => 0.0,
        }
    }

    /// Counter-clockwise moment of this load about `point`
    pub fn moment_about(&self, point: f64) -> f64 {
        let force_moment = match self.centroid() {
            Some(x) => -self.resultant() * (x - point),
            None => 0.0,
        };
        force_moment + self.applied_moment()
    }

    /// Distributed intensity description, if this is a distributed load
    pub fn distributed(&self) -> Option<DistributedSegment> {
        match self {
            Load::UniformDistributed { start, end, magnitude } => Some(DistributedSegment {
                start: *start,
                end: *end,
                w_start: *magnitude,
                w_end: *magnitude,
            }),
            Load::Triangular { start, end, peak_magnitude } => Some(DistributedSegment {
                start: *start,
                end: *end,
                w_start: 0.0,
                w_end: *peak_magnitude,
            }),
            Load::Point { .. } | Load::Moment { .. } => None,
        }
    }

    /// Positions where this load starts, stops or acts
    pub fn event_positions(&self) -> Vec<f64> {
        match self {
            Load::Point { position, .. } | Load::Moment { position, .. } => vec![*position],
            Load::UniformDistributed { start, end, .. } | Load::Triangular { start, end, .. } => {
                vec![*start, *end]
            }
        }
    }

    /// Get display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::Point { .. } => "Point",
            Load::UniformDistributed { .. } => "Uniform",
            Load::Moment { .. } => "Moment",
            Load::Triangular { .. } => "Triangular",
        }
    }

    /// Check positions lie on a beam of `length` and values are finite
    pub fn validate(&self, length: f64) -> StaticsResult<()> {
        let in_span = |field: &str, x: f64| -> StaticsResult<()> {
            if !x.is_finite() || x < 0.0 || x > length {
                return Err(AnalysisError::invalid_input(
                    field,
                    x.to_string(),
                    format!("{} load position must lie within 0..={}", self.display_name(), length),
                ));
            }
            Ok(())
        };

        let magnitude = match self {
            Load::Point { position, magnitude } | Load::Moment { position, magnitude } => {
                in_span("position", *position)?;
                *magnitude
            }
            Load::UniformDistributed { start, end, magnitude: m }
            | Load::Triangular { start, end, peak_magnitude: m } => {
                in_span("start", *start)?;
                in_span("end", *end)?;
                if start >= end {
                    return Err(AnalysisError::invalid_input(
                        "end",
                        end.to_string(),
                        format!("{} load must end after it starts ({})", self.display_name(), start),
                    ));
                }
                *m
            }
        };

        if !magnitude.is_finite() {
            return Err(AnalysisError::invalid_input(
                "magnitude",
                magnitude.to_string(),
                "Load magnitude must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangular_resultant_and_centroid() {
        // 0 → 6 kN/m over 3 m: 9 kN at 2 m
        let tri = Load::triangular(6.0, 0.0, 3.0);
        assert_relative_eq!(tri.resultant(), 9.0, epsilon = 1e-12);
        assert_relative_eq!(tri.centroid().unwrap(), 2.0, epsilon = 1e-12);

        let offset = Load::triangular(6.0, 3.0, 6.0);
        assert_relative_eq!(offset.centroid().unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moment_about() {
        // Downward 10 kN at 2 m about 0 is clockwise
        assert_relative_eq!(Load::point(10.0, 2.0).moment_about(0.0), -20.0, epsilon = 1e-12);
        // Applied couples are independent of the reference point
        let couple = Load::moment(12.0, 4.0);
        assert_eq!(couple.moment_about(0.0), 12.0);
        assert_eq!(couple.moment_about(100.0), 12.0);
        assert_eq!(couple.resultant(), 0.0);
    }

    #[test]
    fn test_distributed_segment() {
        let seg = Load::triangular(6.0, 0.0, 3.0).distributed().unwrap();
        assert_relative_eq!(seg.slope(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(seg.intensity_at(1.5), 3.0, epsilon = 1e-12);
        assert_eq!(seg.intensity_at(4.0), 0.0);
        assert!(Load::point(1.0, 1.0).distributed().is_none());
    }

    #[test]
    fn test_validate() {
        assert!(Load::point(10.0, 2.0).validate(6.0).is_ok());
        assert!(Load::point(10.0, 7.0).validate(6.0).is_err());
        assert!(Load::uniform(1.0, 4.0, 4.0).validate(6.0).is_err());
        assert!(Load::triangular(1.0, 5.0, 2.0).validate(6.0).is_err());
        assert!(Load::moment(f64::NAN, 2.0).validate(6.0).is_err());
    }

    #[test]
    fn test_tagged_json() {
        let json = r#"{"type":"UniformDistributed","start":0.0,"end":6.0,"magnitude":4.0}"#;
        let load: Load = serde_json::from_str(json).unwrap();
        assert_eq!(load, Load::uniform(4.0, 0.0, 6.0));
        assert_eq!(load.event_positions(), vec![0.0, 6.0]);
    }
}
