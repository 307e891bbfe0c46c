//! Analysis Settings
//!
//! The per-analysis parameters that are not part of the beam itself: the
//! discretization resolution and the flexural rigidity inputs. The engine is
//! unit-agnostic; the defaults read naturally as kN/m² and m⁴ for a typical
//! beam section.

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Lowest accepted resolution (samples per unit length)
pub const MIN_RESOLUTION: f64 = 10.0;

/// Highest accepted resolution; the unit-load matrix is N×N, so resolution
/// bounds both memory and the dominant build cost
pub const MAX_RESOLUTION: f64 = 1000.0;

/// Discretization and stiffness parameters for one analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Samples per unit length; higher = more precision
    pub resolution: f64,

    /// Young's modulus E
    pub youngs_modulus: f64,

    /// Second moment of area I
    pub moment_of_inertia: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            resolution: 100.0,
            youngs_modulus: 2.0e8,
            moment_of_inertia: 1.0e-4,
        }
    }
}

impl AnalysisSettings {
    /// Create new settings
    pub fn new(resolution: f64, youngs_modulus: f64, moment_of_inertia: f64) -> Self {
        Self {
            resolution,
            youngs_modulus,
            moment_of_inertia,
        }
    }

    /// Flexural rigidity EI
    pub fn ei(&self) -> f64 {
        self.youngs_modulus * self.moment_of_inertia
    }

    /// Number of samples over a beam of the given length
    ///
    /// `N = ⌊length · resolution⌋ + 1`, positions spaced evenly over
    /// `[0, length]` inclusive.
    pub fn sample_count(&self, length: f64) -> usize {
        (length * self.resolution).floor() as usize + 1
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> BeamResult<()> {
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(BeamError::invalid_input(
                "resolution",
                self.resolution.to_string(),
                format!(
                    "Resolution must lie within [{}, {}]",
                    MIN_RESOLUTION, MAX_RESOLUTION
                ),
            ));
        }
        if self.youngs_modulus <= 0.0 {
            return Err(BeamError::invalid_input(
                "youngs_modulus",
                self.youngs_modulus.to_string(),
                "Young's modulus must be positive",
            ));
        }
        if self.moment_of_inertia <= 0.0 {
            return Err(BeamError::invalid_input(
                "moment_of_inertia",
                self.moment_of_inertia.to_string(),
                "Moment of inertia must be positive",
            ));
        }
        Ok(())
    }
}
