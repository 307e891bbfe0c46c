//! # Reaction Solver
//!
//! Support reactions for the two statically determinate configurations.
//!
//! ## Method
//!
//! - **Cantilever** (one fixed support at an end): the two free equilibrium
//!   equations give the reaction force and reaction moment directly, no
//!   linear system required.
//! - **Simply supported** (two simple supports): force and moment equilibrium
//!   about the origin form a 2×2 linear system in the two reactions, solved
//!   by LU decomposition.
//!
//! ## Sign Convention
//!
//! Loads are the cause, reactions their negated resultant: a downward
//! (negative) load set produces positive (upward) reaction forces. The
//! cantilever's reaction moment is positive clockwise. Distributed loads
//! enter through their resultant acting at the trapezoid centroid; a load
//! whose end intensities cancel exactly has zero resultant and its moment
//! contribution is defined as zero (a pure couple is not modeled).

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use crate::beam::{BeamModel, SupportKind};
use crate::errors::{BeamError, BeamResult};

/// Reaction force at a support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Support position along the beam
    pub position: f64,
    /// Reaction force, positive upward
    pub force: f64,
}

impl Reaction {
    /// Create a new reaction
    pub fn new(position: f64, force: f64) -> Self {
        Self { position, force }
    }
}

/// Moment reaction at a fixed support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionMoment {
    /// Support position along the beam
    pub position: f64,
    /// Reaction moment, positive clockwise
    pub moment: f64,
}

/// The full reaction set for one solve
///
/// `forces` is an unordered set keyed by position; consumers must not rely
/// on its order. The moment is present only for the cantilever configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionSet {
    /// Reaction force at each support
    pub forces: Vec<Reaction>,

    /// Reaction moment at the fixed support (cantilever only)
    pub moment: Option<ReactionMoment>,
}

impl ReactionSet {
    /// Sum of all reaction forces
    pub fn total_force(&self) -> f64 {
        self.forces.iter().map(|r| r.force).sum()
    }

    /// Reaction force at the given support position, if one exists there
    pub fn force_at(&self, position: f64) -> Option<f64> {
        self.forces
            .iter()
            .find(|r| r.position == position)
            .map(|r| r.force)
    }
}

/// Solve the support reactions for a beam model
///
/// Dispatches on the support count:
/// - 1 support: must be fixed and sit at an end of the beam
/// - 2 supports: must both be simple, at distinct positions
/// - anything else fails with [`BeamError::UnsupportedSupportCount`]
pub fn solve_reactions(model: &BeamModel) -> BeamResult<ReactionSet> {
    model.validate()?;
    match model.supports.len() {
        1 => cantilever_reactions(model),
        2 => simple_reactions(model),
        count => Err(BeamError::UnsupportedSupportCount { count }),
    }
}

/// Cantilever: force and moment equilibrium about the fixed support
fn cantilever_reactions(model: &BeamModel) -> BeamResult<ReactionSet> {
    let support = model.supports[0];
    if support.kind != SupportKind::Fixed {
        return Err(BeamError::unsolvable(
            "a single support must be fixed to restrain the beam",
        ));
    }
    let fixed_at_left = support.position == 0.0;
    if !fixed_at_left && support.position != model.length {
        return Err(BeamError::unsolvable(
            "a single fixed support must sit at an end of the beam",
        ));
    }

    let mut force_sum = 0.0;
    let mut moment_sum = 0.0;

    for load in &model.point_loads {
        force_sum += load.magnitude;
        moment_sum += load.magnitude * (load.position - support.position).abs();
    }

    for load in &model.distributed_loads {
        force_sum += load.resultant();
        match load.centroid_from_start() {
            Ok(centroid_from_start) => {
                // Lever arm measured from the fixed end to the centroid
                let arm = if fixed_at_left {
                    load.start_position + centroid_from_start
                } else {
                    (model.length - load.end_position) + (load.span() - centroid_from_start)
                };
                moment_sum += load.resultant() * arm;
            }
            // Cancelling intensities: zero resultant, zero moment contribution
            Err(BeamError::ZeroResultantNormalization { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    let applied_sum: f64 = model.moments.iter().map(|m| m.magnitude).sum();

    Ok(ReactionSet {
        forces: vec![Reaction::new(support.position, -force_sum)],
        moment: Some(ReactionMoment {
            position: support.position,
            moment: moment_sum - applied_sum,
        }),
    })
}

/// Simply supported: 2×2 equilibrium system in the two reactions
fn simple_reactions(model: &BeamModel) -> BeamResult<ReactionSet> {
    if model.supports.iter().any(|s| s.kind == SupportKind::Fixed) {
        return Err(BeamError::unsolvable(
            "a two-support solve requires both supports to be simple",
        ));
    }
    let p1 = model.supports[0].position;
    let p2 = model.supports[1].position;
    if p1 == p2 {
        return Err(BeamError::SingularSupportConfiguration { position: p1 });
    }

    let mut force_sum = 0.0;
    // Moment of all loads about the origin (left end)
    let mut moment_sum = 0.0;

    for load in &model.point_loads {
        force_sum += load.magnitude;
        moment_sum += load.magnitude * load.position;
    }

    for load in &model.distributed_loads {
        force_sum += load.resultant();
        match load.centroid_from_start() {
            Ok(centroid_from_start) => {
                moment_sum += load.resultant() * (load.start_position + centroid_from_start);
            }
            Err(BeamError::ZeroResultantNormalization { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    let applied_sum: f64 = model.moments.iter().map(|m| m.magnitude).sum();

    // Row 1: R1 + R2 balances the total load
    // Row 2: moments about the origin balance
    let coefficients = Matrix2::new(1.0, 1.0, p1, p2);
    let constants = Vector2::new(force_sum, moment_sum - applied_sum);

    let solution = coefficients
        .lu()
        .solve(&constants)
        .ok_or(BeamError::SingularSupportConfiguration { position: p1 })?;

    Ok(ReactionSet {
        forces: vec![
            Reaction::new(p1, -solution[0]),
            Reaction::new(p2, -solution[1]),
        ],
        moment: None,
    })
}
