//! # Unit-Load Moment Matrix
//!
//! For every sample position, the bending-moment field caused by a single
//! point load of magnitude −1 placed there. Row i holds the moment response
//! to the unit load at sample i; the deflection integrator contracts these
//! rows against the real moment field.
//!
//! The matrix depends only on the beam length, the supports and the
//! resolution - never on the real loads - so one matrix serves every load
//! set sharing that tuple. Building it is the dominant cost of an analysis
//! (N reaction solves and N moment fields); rows are independent and are
//! built in parallel.

use log::debug;
use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::analysis::fields::{moment_field, sample_positions};
use crate::analysis::reactions::solve_reactions;
use crate::beam::BeamModel;
use crate::errors::BeamResult;
use crate::loads::PointLoad;
use crate::settings::AnalysisSettings;

/// Build the N×N unit-load moment matrix for a beam's geometry and supports
///
/// `matrix[(i, j)]` is the bending moment at sample j due to a −1 point load
/// at sample i. Each row runs the full reaction solve and moment field for
/// its synthetic load case; an invalid support configuration fails the whole
/// build with the solver's error.
pub fn unit_load_moment_matrix(
    model: &BeamModel,
    settings: &AnalysisSettings,
) -> BeamResult<DMatrix<f64>> {
    model.validate()?;
    settings.validate()?;

    let x_coords = sample_positions(model.length, settings.resolution);
    let n = x_coords.len();
    debug!(
        "building {n}x{n} unit-load moment matrix for '{}'",
        model.label
    );

    let rows: Vec<Vec<f64>> = x_coords
        .par_iter()
        .map(|&position| -> BeamResult<Vec<f64>> {
            let unit_case = unit_case(model, position);
            let reactions = solve_reactions(&unit_case)?;
            Ok(moment_field(&unit_case, &reactions, &x_coords))
        })
        .collect::<BeamResult<Vec<_>>>()?;

    Ok(DMatrix::from_row_iterator(
        n,
        n,
        rows.into_iter().flatten(),
    ))
}

/// The synthetic load case for one row: same geometry and supports, a single
/// −1 point load, nothing else
fn unit_case(model: &BeamModel, position: f64) -> BeamModel {
    BeamModel {
        label: String::new(),
        length: model.length,
        supports: model.supports.clone(),
        point_loads: vec![PointLoad::new(position, -1.0)],
        distributed_loads: Vec::new(),
        moments: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Support;
    use crate::errors::BeamError;
    use crate::loads::DistributedLoad;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn small_settings() -> AnalysisSettings {
        AnalysisSettings::new(10.0, 2.0e8, 1.0e-4)
    }

    #[test]
    fn test_matrix_dimensions() {
        let model = BeamModel::simply_supported("B-1", 2.0);
        let matrix = unit_load_moment_matrix(&model, &small_settings()).unwrap();
        assert_eq!(matrix.nrows(), 21);
        assert_eq!(matrix.ncols(), 21);
    }

    #[test]
    fn test_unit_load_at_a_support_leaves_no_moment() {
        // A unit load straight above a support goes straight into it
        let model = BeamModel::simply_supported("B-1", 2.0);
        let matrix = unit_load_moment_matrix(&model, &small_settings()).unwrap();
        for j in 0..matrix.ncols() {
            assert!(approx_eq(matrix[(0, j)], 0.0, 1e-12));
            assert!(approx_eq(matrix[(matrix.nrows() - 1, j)], 0.0, 1e-12));
        }
    }

    #[test]
    fn test_simply_supported_diagonal() {
        // Load -1 at a: moment under the load is a(1 - a/L)
        let model = BeamModel::simply_supported("B-1", 2.0);
        let matrix = unit_load_moment_matrix(&model, &small_settings()).unwrap();
        let x = sample_positions(2.0, 10.0);
        for (i, &a) in x.iter().enumerate() {
            assert!(
                approx_eq(matrix[(i, i)], a * (1.0 - a / 2.0), 1e-9),
                "m[{i}][{i}] = {}",
                matrix[(i, i)]
            );
        }
    }

    #[test]
    fn test_simply_supported_matrix_is_symmetric() {
        let model = BeamModel::simply_supported("B-1", 2.0);
        let matrix = unit_load_moment_matrix(&model, &small_settings()).unwrap();
        for i in 0..matrix.nrows() {
            for j in 0..matrix.ncols() {
                assert!(
                    approx_eq(matrix[(i, j)], matrix[(j, i)], 1e-9),
                    "m[{i}][{j}] != m[{j}][{i}]"
                );
            }
        }
    }

    #[test]
    fn test_cantilever_rows() {
        // Load -1 at a on a left-fixed cantilever: m(x) = x - a up to the
        // load, zero beyond it
        let model = BeamModel::cantilever("CB-1", 2.0);
        let matrix = unit_load_moment_matrix(&model, &small_settings()).unwrap();
        let x = sample_positions(2.0, 10.0);
        for (i, &a) in x.iter().enumerate() {
            for (j, &xj) in x.iter().enumerate() {
                let expected = if xj < a { xj - a } else { 0.0 };
                assert!(
                    approx_eq(matrix[(i, j)], expected, 1e-9),
                    "m[{i}][{j}] = {}",
                    matrix[(i, j)]
                );
            }
        }
    }

    #[test]
    fn test_matrix_ignores_real_loads() {
        let bare = BeamModel::simply_supported("B-1", 2.0);
        let loaded = BeamModel::simply_supported("B-2", 2.0)
            .with_distributed_load(DistributedLoad::uniform(0.0, 2.0, -4.0));

        let a = unit_load_moment_matrix(&bare, &small_settings()).unwrap();
        let b = unit_load_moment_matrix(&loaded, &small_settings()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_configuration_fails_the_build() {
        let model = BeamModel::new("B-1", 2.0, vec![Support::roller(0.0)]);
        assert!(matches!(
            unit_load_moment_matrix(&model, &small_settings()),
            Err(BeamError::UnsolvableSupportConfiguration { .. })
        ));
    }
}
