//! Load Records
//!
//! Types for the three load kinds a single-span analysis accepts: point
//! loads, linearly-varying (trapezoidal) distributed loads, and applied
//! moments, along with the resultant/centroid arithmetic the reaction solver
//! builds on.
//!
//! ## Sign Convention
//!
//! - Point load magnitude: signed; a negative magnitude acts downward in the
//!   drawing convention. The solver treats magnitudes algebraically.
//! - Distributed load intensity: signed, interpolated linearly between the
//!   start and end magnitudes.
//! - Applied moment magnitude: positive = clockwise, negative = anticlockwise.
//!
//! Positions are measured from the left end of the beam. The engine is
//! unit-agnostic: any consistent unit system works (the reference values in
//! the tests read naturally as kN, m and kNm).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BeamError, BeamResult};

// ============================================================================
// Point Load
// ============================================================================

/// A concentrated load at a single position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLoad {
    /// Unique identifier for this load (for UI row management)
    pub id: Uuid,

    /// Distance from the left end of the beam
    pub position: f64,

    /// Signed magnitude; negative acts downward in the drawing convention
    pub magnitude: f64,

    /// User note/description for this load
    #[serde(default)]
    pub note: String,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(position: f64, magnitude: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            magnitude,
            note: String::new(),
        }
    }

    /// Create with a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Validate against the beam span
    pub fn validate(&self, length: f64) -> BeamResult<()> {
        if self.position < 0.0 || self.position > length {
            return Err(BeamError::invalid_input(
                "position",
                self.position.to_string(),
                format!("Point load position must lie within [0, {}]", length),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Distributed Load
// ============================================================================

/// A linearly-varying (trapezoidal) distributed load over part of the span
///
/// The intensity varies linearly from `start_magnitude` at `start_position`
/// to `end_magnitude` at `end_position`. A uniform load is the special case
/// with equal end magnitudes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Unique identifier for this load (for UI row management)
    pub id: Uuid,

    /// Left edge of the loaded span, from the left end of the beam
    pub start_position: f64,

    /// Right edge of the loaded span, from the left end of the beam
    pub end_position: f64,

    /// Intensity at `start_position`
    pub start_magnitude: f64,

    /// Intensity at `end_position`
    pub end_magnitude: f64,

    /// User note/description for this load
    #[serde(default)]
    pub note: String,
}

impl DistributedLoad {
    /// Create a new trapezoidal distributed load
    pub fn new(
        start_position: f64,
        end_position: f64,
        start_magnitude: f64,
        end_magnitude: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_position,
            end_position,
            start_magnitude,
            end_magnitude,
            note: String::new(),
        }
    }

    /// Create a uniform load over `[start_position, end_position]`
    pub fn uniform(start_position: f64, end_position: f64, magnitude: f64) -> Self {
        Self::new(start_position, end_position, magnitude, magnitude)
    }

    /// Create with a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Loaded span length
    pub fn span(&self) -> f64 {
        self.end_position - self.start_position
    }

    /// The single equivalent force: the area under the intensity diagram
    ///
    /// `W = (w0 + w1) / 2 * span`
    pub fn resultant(&self) -> f64 {
        0.5 * (self.start_magnitude + self.end_magnitude) * self.span()
    }

    /// Distance of the resultant's line of action from `start_position`
    ///
    /// `c = (span / 3) * (2 * w1 + w0) / (w1 + w0)`
    ///
    /// Fails with [`BeamError::ZeroResultantNormalization`] when the end
    /// intensities cancel exactly: the resultant is zero and the centroid is
    /// undefined. Callers treat that load's moment contribution as zero (a
    /// pure couple is not modeled).
    pub fn centroid_from_start(&self) -> BeamResult<f64> {
        let intensity_sum = self.start_magnitude + self.end_magnitude;
        if intensity_sum == 0.0 {
            return Err(BeamError::ZeroResultantNormalization {
                start_magnitude: self.start_magnitude,
                end_magnitude: self.end_magnitude,
            });
        }
        Ok((self.span() / 3.0) * (2.0 * self.end_magnitude + self.start_magnitude) / intensity_sum)
    }

    /// Interpolated intensity at position `x`
    ///
    /// Linear interpolation between the end magnitudes. The caller restricts
    /// `x` to the loaded span; the span is non-zero for any validated load.
    pub fn intensity_at(&self, x: f64) -> f64 {
        self.start_magnitude
            + (self.end_magnitude - self.start_magnitude)
                * ((x - self.start_position) / self.span())
    }

    /// Whether `x` falls on the loaded span (edges inclusive)
    pub fn contains(&self, x: f64) -> bool {
        self.start_position <= x && x <= self.end_position
    }

    /// Validate against the beam span
    pub fn validate(&self, length: f64) -> BeamResult<()> {
        if self.start_position == self.end_position {
            return Err(BeamError::DegenerateDistributedLoad {
                position: self.start_position,
            });
        }
        if self.end_position < self.start_position {
            return Err(BeamError::invalid_input(
                "end_position",
                self.end_position.to_string(),
                "Distributed load must end after it starts",
            ));
        }
        if self.start_position < 0.0 || self.end_position > length {
            return Err(BeamError::invalid_input(
                "start_position/end_position",
                format!("[{}, {}]", self.start_position, self.end_position),
                format!("Distributed load must lie within [0, {}]", length),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Applied Moment
// ============================================================================

/// A concentrated moment applied at a single position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedMoment {
    /// Unique identifier for this load (for UI row management)
    pub id: Uuid,

    /// Distance from the left end of the beam
    pub position: f64,

    /// Signed magnitude; positive = clockwise, negative = anticlockwise
    pub magnitude: f64,

    /// User note/description for this load
    #[serde(default)]
    pub note: String,
}

impl AppliedMoment {
    /// Create a new applied moment
    pub fn new(position: f64, magnitude: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            magnitude,
            note: String::new(),
        }
    }

    /// Create with a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Rotation sense for display
    pub fn sense(&self) -> &'static str {
        if self.magnitude >= 0.0 {
            "Clockwise"
        } else {
            "Anticlockwise"
        }
    }

    /// Validate against the beam span
    pub fn validate(&self, length: f64) -> BeamResult<()> {
        if self.position < 0.0 || self.position > length {
            return Err(BeamError::invalid_input(
                "position",
                self.position.to_string(),
                format!("Applied moment position must lie within [0, {}]", length),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_trapezoidal_resultant() {
        // Intensity 2 -> 4 over a 6-long span: W = (2+4)/2 * 6 = 18
        let load = DistributedLoad::new(1.0, 7.0, 2.0, 4.0);
        assert!(approx_eq(load.resultant(), 18.0, 1e-12));
    }

    #[test]
    fn test_trapezoidal_centroid() {
        // Same load: c = (6/3) * (2*4 + 2) / (4 + 2) = 2 * 10/6 = 10/3
        let load = DistributedLoad::new(1.0, 7.0, 2.0, 4.0);
        let c = load.centroid_from_start().unwrap();
        assert!(approx_eq(c, 10.0 / 3.0, 1e-12));
    }

    #[test]
    fn test_triangular_centroid() {
        // Triangle rising from 0: centroid at two thirds of the span
        let load = DistributedLoad::new(0.0, 6.0, 0.0, 9.0);
        let c = load.centroid_from_start().unwrap();
        assert!(approx_eq(c, 4.0, 1e-12));

        // Triangle falling to 0: centroid at one third
        let load = DistributedLoad::new(0.0, 6.0, 9.0, 0.0);
        let c = load.centroid_from_start().unwrap();
        assert!(approx_eq(c, 2.0, 1e-12));
    }

    #[test]
    fn test_uniform_centroid_is_midspan() {
        let load = DistributedLoad::uniform(2.0, 8.0, -5.0);
        assert!(approx_eq(load.centroid_from_start().unwrap(), 3.0, 1e-12));
        assert!(approx_eq(load.resultant(), -30.0, 1e-12));
    }

    #[test]
    fn test_cancelling_intensities_have_no_centroid() {
        let load = DistributedLoad::new(0.0, 4.0, -3.0, 3.0);
        assert!(approx_eq(load.resultant(), 0.0, 1e-12));
        assert!(matches!(
            load.centroid_from_start(),
            Err(BeamError::ZeroResultantNormalization { .. })
        ));
    }

    #[test]
    fn test_intensity_interpolation() {
        let load = DistributedLoad::new(2.0, 6.0, 1.0, 9.0);
        assert!(approx_eq(load.intensity_at(2.0), 1.0, 1e-12));
        assert!(approx_eq(load.intensity_at(4.0), 5.0, 1e-12));
        assert!(approx_eq(load.intensity_at(6.0), 9.0, 1e-12));
    }

    #[test]
    fn test_distributed_load_validation() {
        // Zero-length span is degenerate, not merely out of range
        let load = DistributedLoad::uniform(3.0, 3.0, -2.0);
        assert!(matches!(
            load.validate(10.0),
            Err(BeamError::DegenerateDistributedLoad { .. })
        ));

        // Reversed span
        let load = DistributedLoad::uniform(8.0, 2.0, -2.0);
        assert!(matches!(
            load.validate(10.0),
            Err(BeamError::InvalidInput { .. })
        ));

        // Past the right end of the beam
        let load = DistributedLoad::uniform(2.0, 12.0, -2.0);
        assert!(load.validate(10.0).is_err());

        let load = DistributedLoad::uniform(2.0, 8.0, -2.0);
        assert!(load.validate(10.0).is_ok());
    }

    #[test]
    fn test_point_load_validation() {
        assert!(PointLoad::new(11.0, -5.0).validate(10.0).is_err());
        assert!(PointLoad::new(-0.5, -5.0).validate(10.0).is_err());
        assert!(PointLoad::new(10.0, -5.0).validate(10.0).is_ok());
    }

    #[test]
    fn test_moment_sense() {
        assert_eq!(AppliedMoment::new(2.0, 15.0).sense(), "Clockwise");
        assert_eq!(AppliedMoment::new(2.0, -15.0).sense(), "Anticlockwise");
    }

    #[test]
    fn test_serialization() {
        let load = DistributedLoad::new(0.0, 4.0, -1.0, -3.0).with_note("snow drift");
        let json = serde_json::to_string(&load).unwrap();
        let parsed: DistributedLoad = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, load.id);
        assert_eq!(parsed.note, "snow drift");
        assert_eq!(parsed.end_magnitude, -3.0);
    }
}
