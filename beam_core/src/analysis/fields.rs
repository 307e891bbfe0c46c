//! # Internal Force Fields
//!
//! Discretized shear-force and bending-moment sequences over the span.
//!
//! Every contribution is a step or ramp switched on at its position: a
//! reaction or point load adds its force to all samples at or beyond it,
//! an applied moment adds a constant step, and a distributed load adds a
//! forward Riemann accumulation of `intensity(x)·dx` slices. The moment
//! field weights the same contributions by their lever arms.
//!
//! The distributed accumulations run as single-pass prefix sums (running
//! force and running first moment), which reproduces the slice-by-slice
//! sum in O(N) per load. Accuracy of the distributed terms scales with the
//! resolution; point contributions are exact at every sample.

use crate::analysis::reactions::ReactionSet;
use crate::beam::BeamModel;

/// Sample positions over `[0, length]`, both ends inclusive
///
/// `N = ⌊length · resolution⌋ + 1` evenly spaced samples. All field
/// sequences and the unit-load matrix are aligned to this grid.
pub fn sample_positions(length: f64, resolution: f64) -> Vec<f64> {
    let count = (length * resolution).floor() as usize + 1;
    if count < 2 {
        return vec![0.0];
    }
    let last = (count - 1) as f64;
    (0..count).map(|i| length * i as f64 / last).collect()
}

/// Grid spacing between consecutive samples
fn step(x_coords: &[f64]) -> f64 {
    if x_coords.len() < 2 {
        0.0
    } else {
        x_coords[1] - x_coords[0]
    }
}

/// Shear force at every sample position
///
/// `V(x)` accumulates every reaction force and point load at or left of
/// `x`, plus the running integral of each distributed load up to `x`.
pub fn shear_field(model: &BeamModel, reactions: &ReactionSet, x_coords: &[f64]) -> Vec<f64> {
    let mut shear = vec![0.0; x_coords.len()];
    let dx = step(x_coords);

    for reaction in &reactions.forces {
        for (j, &x) in x_coords.iter().enumerate() {
            if x >= reaction.position {
                shear[j] += reaction.force;
            }
        }
    }

    for load in &model.point_loads {
        for (j, &x) in x_coords.iter().enumerate() {
            if x >= load.position {
                shear[j] += load.magnitude;
            }
        }
    }

    for load in &model.distributed_loads {
        let mut running_force = 0.0;
        for (j, &x) in x_coords.iter().enumerate() {
            if load.contains(x) {
                running_force += load.intensity_at(x) * dx;
            }
            shear[j] += running_force;
        }
    }

    shear
}

/// Bending moment at every sample position
///
/// Forces contribute `force · (x − position)` once passed; the cantilever's
/// reaction moment enters with its sign tied to which end holds the fixed
/// support (added at the left end, subtracted at the right); applied moments
/// contribute a step. Distributed loads accumulate slice forces weighted by
/// their lever arms, tracked as running force and running first moment.
pub fn moment_field(model: &BeamModel, reactions: &ReactionSet, x_coords: &[f64]) -> Vec<f64> {
    let mut moment = vec![0.0; x_coords.len()];
    let dx = step(x_coords);

    for reaction in &reactions.forces {
        for (j, &x) in x_coords.iter().enumerate() {
            if x >= reaction.position {
                moment[j] += reaction.force * (x - reaction.position);
            }
        }
    }

    if let Some(reaction_moment) = &reactions.moment {
        let fixed_at_left = reaction_moment.position == 0.0;
        for (j, &x) in x_coords.iter().enumerate() {
            if x >= reaction_moment.position {
                if fixed_at_left {
                    moment[j] += reaction_moment.moment;
                } else {
                    moment[j] -= reaction_moment.moment;
                }
            }
        }
    }

    for load in &model.point_loads {
        for (j, &x) in x_coords.iter().enumerate() {
            if x >= load.position {
                moment[j] += load.magnitude * (x - load.position);
            }
        }
    }

    for load in &model.distributed_loads {
        let mut running_force = 0.0;
        let mut running_first_moment = 0.0;
        for (j, &x) in x_coords.iter().enumerate() {
            if load.contains(x) {
                let increment = load.intensity_at(x) * dx;
                running_force += increment;
                running_first_moment += x * increment;
            }
            // Σ (x − xᵢ)·wᵢ·dx over all slices left of x
            moment[j] += x * running_force - running_first_moment;
        }
    }

    for applied in &model.moments {
        for (j, &x) in x_coords.iter().enumerate() {
            if x >= applied.position {
                moment[j] += applied.magnitude;
            }
        }
    }

    moment
}
