//! # Beam Model
//!
//! Geometry, supports and loads for one single-span analysis. The model is
//! an explicit, immutable value: build it, validate it, hand it to the
//! analysis functions. Nothing in the engine reads ambient state.
//!
//! ## Supported Configurations
//!
//! Exactly two statically determinate layouts are solvable:
//!
//! - **Cantilever**: one support, kind [`SupportKind::Fixed`], at either end
//!   of the beam.
//! - **Simply supported**: two supports, both non-moment-resisting
//!   ([`SupportKind::Hinge`] or [`SupportKind::Roller`]), at distinct
//!   positions.
//!
//! Every other layout is rejected by the reaction solver as an invalid
//! configuration rather than silently resolved.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::{BeamModel, DistributedLoad, PointLoad};
//!
//! let model = BeamModel::simply_supported("B-1", 10.0)
//!     .with_point_load(PointLoad::new(5.0, -10.0))
//!     .with_distributed_load(DistributedLoad::uniform(0.0, 10.0, -2.0));
//!
//! assert!(model.validate().is_ok());
//! assert!(model.is_simply_supported());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::loads::{AppliedMoment, DistributedLoad, PointLoad};

// =============================================================================
// SUPPORT KIND
// =============================================================================

/// Support condition at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SupportKind {
    /// Fixed support - restrains translation and rotation
    ///
    /// Produces a reaction force and a reaction moment. The only support
    /// kind allowed in the single-support (cantilever) configuration.
    #[default]
    Fixed,

    /// Hinged support - restrains translation, allows rotation
    Hinge,

    /// Roller support - equivalent to a hinge for vertical beam analysis
    Roller,
}

impl SupportKind {
    /// All available support kinds for UI selection
    pub const ALL: [SupportKind; 3] = [SupportKind::Fixed, SupportKind::Hinge, SupportKind::Roller];

    /// Returns true for the non-moment-resisting kinds (Hinge, Roller)
    pub fn is_simple(&self) -> bool {
        matches!(self, SupportKind::Hinge | SupportKind::Roller)
    }

    /// Returns true if this support restrains rotation
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Fixed => "Fixed",
            SupportKind::Hinge => "Hinge",
            SupportKind::Roller => "Roller",
        }
    }

    /// Get short symbol for diagrams
    pub fn symbol(&self) -> &'static str {
        match self {
            SupportKind::Fixed => "▣",
            SupportKind::Hinge => "△",
            SupportKind::Roller => "○",
        }
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// SUPPORT
// =============================================================================

/// A support at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Support condition
    pub kind: SupportKind,

    /// Distance from the left end of the beam
    pub position: f64,
}

impl Support {
    /// Create a new support
    pub fn new(kind: SupportKind, position: f64) -> Self {
        Self { kind, position }
    }

    /// Create a fixed support
    pub fn fixed(position: f64) -> Self {
        Self::new(SupportKind::Fixed, position)
    }

    /// Create a hinged support
    pub fn hinge(position: f64) -> Self {
        Self::new(SupportKind::Hinge, position)
    }

    /// Create a roller support
    pub fn roller(position: f64) -> Self {
        Self::new(SupportKind::Roller, position)
    }
}

// =============================================================================
// BEAM MODEL
// =============================================================================

/// Complete input for one single-span beam analysis
///
/// Positions are measured from the left end; `length` is the full span.
/// The model owns its loads and supports so an analysis is a pure function
/// of one value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamModel {
    /// User label for this beam
    pub label: String,

    /// Beam length; must be positive
    pub length: f64,

    /// Supports (one fixed, or two simple)
    pub supports: Vec<Support>,

    /// Concentrated loads
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,

    /// Linearly-varying distributed loads
    #[serde(default)]
    pub distributed_loads: Vec<DistributedLoad>,

    /// Applied moments
    #[serde(default)]
    pub moments: Vec<AppliedMoment>,
}

impl BeamModel {
    /// Create a beam with an explicit support layout
    pub fn new(label: impl Into<String>, length: f64, supports: Vec<Support>) -> Self {
        Self {
            label: label.into(),
            length,
            supports,
            point_loads: Vec::new(),
            distributed_loads: Vec::new(),
            moments: Vec::new(),
        }
    }

    /// Create a cantilever fixed at the left end
    pub fn cantilever(label: impl Into<String>, length: f64) -> Self {
        Self::new(label, length, vec![Support::fixed(0.0)])
    }

    /// Create a simply supported beam (hinge at the left end, roller at the right)
    pub fn simply_supported(label: impl Into<String>, length: f64) -> Self {
        let supports = vec![Support::hinge(0.0), Support::roller(length)];
        Self::new(label, length, supports)
    }

    /// Add a point load
    pub fn with_point_load(mut self, load: PointLoad) -> Self {
        self.point_loads.push(load);
        self
    }

    /// Add a distributed load
    pub fn with_distributed_load(mut self, load: DistributedLoad) -> Self {
        self.distributed_loads.push(load);
        self
    }

    /// Add an applied moment
    pub fn with_moment(mut self, moment: AppliedMoment) -> Self {
        self.moments.push(moment);
        self
    }

    /// Check if this is a cantilever (single fixed support)
    pub fn is_cantilever(&self) -> bool {
        matches!(self.supports.as_slice(), [s] if s.kind == SupportKind::Fixed)
    }

    /// Check if this is a simply supported beam (two simple supports)
    pub fn is_simply_supported(&self) -> bool {
        matches!(self.supports.as_slice(), [a, b] if a.kind.is_simple() && b.kind.is_simple())
    }

    /// The fixed support, if the layout has one
    pub fn fixed_support(&self) -> Option<&Support> {
        self.supports.iter().find(|s| s.kind == SupportKind::Fixed)
    }

    /// Positions of interest along the beam: both ends, every support,
    /// every load edge and every moment, sorted and deduplicated.
    ///
    /// The presentation layer uses these for dimension lines and diagram
    /// annotations; the engine itself samples a uniform grid instead.
    pub fn stations(&self) -> Vec<f64> {
        let mut positions = vec![0.0, self.length];
        positions.extend(self.supports.iter().map(|s| s.position));
        positions.extend(self.point_loads.iter().map(|l| l.position));
        for load in &self.distributed_loads {
            positions.push(load.start_position);
            positions.push(load.end_position);
        }
        positions.extend(self.moments.iter().map(|m| m.position));

        positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        positions.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
        positions
    }

    /// Validate geometry, support positions and load positions
    ///
    /// Support count and kind combinations are the reaction solver's
    /// responsibility; this checks that every position lies on the beam and
    /// every distributed load has a usable span.
    pub fn validate(&self) -> BeamResult<()> {
        if self.length <= 0.0 {
            return Err(BeamError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be positive",
            ));
        }

        for support in &self.supports {
            if support.position < 0.0 || support.position > self.length {
                return Err(BeamError::invalid_input(
                    "supports",
                    support.position.to_string(),
                    format!("Support position must lie within [0, {}]", self.length),
                ));
            }
        }

        for load in &self.point_loads {
            load.validate(self.length)?;
        }
        for load in &self.distributed_loads {
            load.validate(self.length)?;
        }
        for moment in &self.moments {
            moment.validate(self.length)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_kind_predicates() {
        assert!(!SupportKind::Fixed.is_simple());
        assert!(SupportKind::Hinge.is_simple());
        assert!(SupportKind::Roller.is_simple());
        assert!(SupportKind::Fixed.restrains_rotation());
        assert!(!SupportKind::Roller.restrains_rotation());
    }

    #[test]
    fn test_support_kind_display() {
        assert_eq!(SupportKind::Fixed.display_name(), "Fixed");
        assert_eq!(SupportKind::Hinge.to_string(), "Hinge");
        assert_eq!(SupportKind::Roller.symbol(), "○");
    }

    #[test]
    fn test_configuration_predicates() {
        let cantilever = BeamModel::cantilever("CB-1", 4.0);
        assert!(cantilever.is_cantilever());
        assert!(!cantilever.is_simply_supported());
        assert_eq!(cantilever.fixed_support().unwrap().position, 0.0);

        let simple = BeamModel::simply_supported("B-1", 10.0);
        assert!(simple.is_simply_supported());
        assert!(!simple.is_cantilever());
        assert!(simple.fixed_support().is_none());

        // Two supports with a fixed one is neither
        let mixed = BeamModel::new(
            "M-1",
            10.0,
            vec![Support::fixed(0.0), Support::roller(10.0)],
        );
        assert!(!mixed.is_cantilever());
        assert!(!mixed.is_simply_supported());
    }

    #[test]
    fn test_validation_rejects_bad_geometry() {
        let model = BeamModel::simply_supported("B-1", 0.0);
        assert!(model.validate().is_err());

        let model = BeamModel::new("B-2", 10.0, vec![Support::hinge(-1.0), Support::roller(5.0)]);
        assert!(model.validate().is_err());

        let model = BeamModel::simply_supported("B-3", 10.0)
            .with_point_load(PointLoad::new(12.0, -1.0));
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_stations_sorted_and_deduplicated() {
        let model = BeamModel::simply_supported("B-1", 10.0)
            .with_point_load(PointLoad::new(5.0, -10.0))
            .with_distributed_load(DistributedLoad::uniform(5.0, 8.0, -2.0))
            .with_moment(AppliedMoment::new(2.0, 15.0));

        // 0 and 10 come from the ends and the supports; 5 appears once
        assert_eq!(model.stations(), vec![0.0, 2.0, 5.0, 8.0, 10.0]);
    }

    #[test]
    fn test_serialization() {
        let model = BeamModel::cantilever("CB-1", 4.0)
            .with_point_load(PointLoad::new(4.0, -8.0));

        let json = serde_json::to_string_pretty(&model).unwrap();
        let parsed: BeamModel = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.label, model.label);
        assert_eq!(parsed.supports, model.supports);
        assert_eq!(parsed.point_loads.len(), 1);
    }
}
