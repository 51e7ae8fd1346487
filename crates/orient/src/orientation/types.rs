//! Data types for the orientation pass.

use nalgebra::Vector3;
use thiserror::Error;

use crate::model::{BarId, NodeId};

/// Fatal integrity failures. Nothing partial survives these: the engine
/// returns no angles and the session layer writes nothing back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrientError {
    #[error("bar {bar} references missing node {node}")]
    MissingNode { bar: BarId, node: NodeId },
    #[error("working set references unknown bar {bar}")]
    UnknownBar { bar: BarId },
}

/// Per-run derived graph: direction vectors by bar slot, incident vectors by
/// node slot.
#[derive(Clone, Debug)]
pub struct Graph {
    /// Direction vector per bar slot; `None` marks a zero-length bar that is
    /// excluded from angle assignment.
    pub vectors: Vec<Option<Vector3<f64>>>,
    /// Incident bar vectors per node slot, in bar-processing order. A bar's
    /// vector is shared un-flipped between both endpoints: selection only
    /// consumes `|dot|`, so re-orienting per endpoint would change nothing.
    pub adj: Vec<Vec<Vector3<f64>>>,
}

/// Per-reason tallies of bars a run left untouched. These are expected
/// geometric edge cases, not errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipCounts {
    /// Coincident endpoints; no axis to rotate about.
    pub zero_length: usize,
    /// Axis parallel to global Z; the horizontal basis degenerates.
    pub vertical: usize,
    /// Every incident vector near-parallel to the axis; no transverse
    /// reference to measure against.
    pub no_reference: usize,
}

impl SkipCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.zero_length + self.vertical + self.no_reference
    }
}

/// Outcome of one engine pass. Returning this is the "run complete" signal:
/// the caller may now batch write-backs and refresh dependent views.
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// `(bar, γ_up degrees)` in working-set order.
    pub angles: Vec<(BarId, f64)>,
    pub skipped: SkipCounts,
}
