//! # beam_core - Single-Span Beam Analysis Engine
//!
//! `beam_core` computes support reactions, shear-force and bending-moment
//! fields, and virtual-work deflections for a single-span beam under point
//! loads, linearly-varying distributed loads, and applied moments. Two
//! statically determinate configurations are supported: a cantilever (one
//! fixed support) and a simply supported beam (two simple supports).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every operation is a pure function of explicit inputs
//! - **JSON-First**: all inputs and outputs implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Presentation-free**: the engine never prints, draws or prompts; the
//!   consuming layer renders results and failures however it likes
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, AnalysisSettings, BeamModel, PointLoad};
//!
//! // 10-long simply supported beam, 10 downward at midspan
//! let model = BeamModel::simply_supported("B-1", 10.0)
//!     .with_point_load(PointLoad::new(5.0, -10.0));
//!
//! let results = analyze(&model, &AnalysisSettings::default()).unwrap();
//!
//! // Symmetric split: each support carries half the load
//! assert!((results.reactions.force_at(0.0).unwrap() - 5.0).abs() < 1e-9);
//! assert!((results.reactions.force_at(10.0).unwrap() - 5.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - beam geometry, supports and the model container
//! - [`loads`] - point, distributed and moment load records
//! - [`settings`] - resolution and flexural rigidity parameters
//! - [`analysis`] - reaction solver, field builders, unit-load matrix and
//!   deflection integrator
//! - [`errors`] - structured error types

pub mod analysis;
pub mod beam;
pub mod errors;
pub mod loads;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use analysis::{
    analyze, integrate_deflection, moment_field, sample_positions, shear_field, solve_reactions,
    unit_load_moment_matrix, AnalysisResults, Extreme, Reaction, ReactionMoment, ReactionSet,
};
pub use beam::{BeamModel, Support, SupportKind};
pub use errors::{BeamError, BeamResult};
pub use loads::{AppliedMoment, DistributedLoad, PointLoad};
pub use settings::{AnalysisSettings, MAX_RESOLUTION, MIN_RESOLUTION};
