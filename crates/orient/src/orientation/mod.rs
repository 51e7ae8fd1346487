//! Orientation pass: graph build, reference selection, angle solve, engine.
//!
//! Purpose
//! - Turn a model snapshot into per-bar direction vectors and per-node
//!   incident lists (`build`), pick the most orthogonal incident reference
//!   at a bar's start node and derive the rotation angle from it (`solve`),
//!   and drive one pass over a working set of bars (`engine`).
//!
//! Why this shape
//! - Each bar's angle depends only on the shared read-only graph, so the
//!   engine is a plain loop with per-bar skip accounting and no cross-bar
//!   state. The graph is rebuilt from scratch every run; nothing persists
//!   between runs except the angles the caller applies.

mod build;
mod engine;
mod solve;
mod types;

pub use build::build_graph;
pub use engine::{orient_bars, orient_model};
pub use solve::{frame_angle_deg, most_orthogonal};
pub use types::{Graph, OrientError, RunReport, SkipCounts};
