//! # Analysis Pipeline
//!
//! The four engine stages and their orchestration:
//!
//! 1. [`reactions`] - support reactions from equilibrium
//! 2. [`fields`] - discretized shear and bending-moment sequences
//! 3. [`unit_load`] - the N×N unit-load moment matrix (geometry only)
//! 4. [`deflection`] - the virtual-work deflection integral
//!
//! [`analyze`] runs all four and assembles [`AnalysisResults`]. Every stage
//! is a pure function of its inputs; a reaction-solver failure
//! short-circuits everything downstream. There is no cache: any change to
//! the model or settings means a full recompute.

pub mod deflection;
pub mod fields;
pub mod reactions;
pub mod unit_load;

use log::debug;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::beam::BeamModel;
use crate::errors::{BeamError, BeamResult};
use crate::settings::AnalysisSettings;

pub use deflection::integrate_deflection;
pub use fields::{moment_field, sample_positions, shear_field};
pub use reactions::{solve_reactions, Reaction, ReactionMoment, ReactionSet};
pub use unit_load::unit_load_moment_matrix;

/// A field extreme: the largest-magnitude sample and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    /// Signed value of the largest-magnitude sample
    pub value: f64,
    /// Sample position of that value
    pub position: f64,
}

/// Complete results of one beam analysis
///
/// All sequences are aligned to `x_coords`. `reactions.forces` is an
/// unordered set keyed by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Support reactions (and the cantilever's reaction moment)
    pub reactions: ReactionSet,

    /// Ordered sample positions over `[0, length]`
    pub x_coords: Vec<f64>,

    /// Shear force at each sample
    pub shear: Vec<f64>,

    /// Bending moment at each sample
    pub bending_moment: Vec<f64>,

    /// Deflection at each sample; negative is downward
    pub deflection: Vec<f64>,

    /// Moment response at sample j to a −1 unit load at sample i
    pub unit_load_matrix: DMatrix<f64>,

    /// Largest-magnitude shear and its position
    pub max_shear: Extreme,

    /// Largest-magnitude bending moment and its position
    pub max_moment: Extreme,

    /// Largest-magnitude deflection and its position
    pub max_deflection: Extreme,
}

/// Run the full analysis pipeline for one model and settings pair
///
/// Validates the inputs, solves the reactions, builds the internal force
/// fields and the unit-load matrix, and integrates the deflections. Fails
/// with the first error any stage reports.
pub fn analyze(model: &BeamModel, settings: &AnalysisSettings) -> BeamResult<AnalysisResults> {
    model.validate()?;
    settings.validate()?;
    if settings.sample_count(model.length) < 2 {
        return Err(BeamError::invalid_input(
            "resolution",
            settings.resolution.to_string(),
            "Discretization needs at least two samples over the span",
        ));
    }

    debug!(
        "analyzing '{}': length {}, {} supports, resolution {}",
        model.label,
        model.length,
        model.supports.len(),
        settings.resolution
    );

    let reactions = solve_reactions(model)?;
    let x_coords = sample_positions(model.length, settings.resolution);
    let shear = shear_field(model, &reactions, &x_coords);
    let bending_moment = moment_field(model, &reactions, &x_coords);
    let unit_load_matrix = unit_load_moment_matrix(model, settings)?;
    let deflection =
        integrate_deflection(&bending_moment, &unit_load_matrix, model.length, settings.ei());

    let max_shear = peak(&shear, &x_coords);
    let max_moment = peak(&bending_moment, &x_coords);
    let max_deflection = peak(&deflection, &x_coords);

    Ok(AnalysisResults {
        reactions,
        x_coords,
        shear,
        bending_moment,
        deflection,
        unit_load_matrix,
        max_shear,
        max_moment,
        max_deflection,
    })
}

/// The largest-magnitude sample of a field, keeping its sign
fn peak(values: &[f64], x_coords: &[f64]) -> Extreme {
    let mut peak = Extreme {
        value: 0.0,
        position: 0.0,
    };
    for (&value, &position) in values.iter().zip(x_coords) {
        if value.abs() > peak.value.abs() {
            peak = Extreme { value, position };
        }
    }
    peak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::PointLoad;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_full_pipeline_smoke() {
        let model = BeamModel::simply_supported("B-1", 10.0)
            .with_point_load(PointLoad::new(5.0, -10.0));
        let settings = AnalysisSettings::default();

        let results = analyze(&model, &settings).unwrap();
        let n = settings.sample_count(10.0);
        assert_eq!(results.x_coords.len(), n);
        assert_eq!(results.shear.len(), n);
        assert_eq!(results.bending_moment.len(), n);
        assert_eq!(results.deflection.len(), n);
        assert_eq!(results.unit_load_matrix.nrows(), n);

        // Peak moment PL/4 = 25 at midspan; the beam sags there
        assert!(approx_eq(results.max_moment.value, 25.0, 1e-9));
        assert!(approx_eq(results.max_moment.position, 5.0, 1e-9));
        assert!(results.max_deflection.value < 0.0);
        assert!(approx_eq(results.max_deflection.position, 5.0, 0.1));
    }

    #[test]
    fn test_solver_failure_short_circuits() {
        let model = BeamModel::new("B-1", 10.0, vec![]);
        assert!(matches!(
            analyze(&model, &AnalysisSettings::default()),
            Err(BeamError::UnsupportedSupportCount { count: 0 })
        ));
    }

    #[test]
    fn test_too_coarse_for_the_span() {
        // 0.05 long at resolution 10 leaves a single sample
        let model = BeamModel::simply_supported("B-1", 0.05);
        let settings = AnalysisSettings::new(10.0, 2.0e8, 1.0e-4);
        assert!(matches!(
            analyze(&model, &settings),
            Err(BeamError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_peak_keeps_sign() {
        let values = vec![1.0, -3.0, 2.0];
        let x = vec![0.0, 1.0, 2.0];
        let extreme = peak(&values, &x);
        assert_eq!(extreme.value, -3.0);
        assert_eq!(extreme.position, 1.0);
    }
}
