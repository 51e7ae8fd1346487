//! Curated re-export surface for drivers, benches, and experiments.
//!
//! Prefer these re-exports in binaries and benches; the module tree stays
//! free to move internals around without breaking callers.

pub use crate::geom3::{angle_deg, is_vertical, unit_or_none, GeomCfg};
pub use crate::model::{Bar, BarId, Model, ModelError, Node, NodeId};
pub use crate::orientation::{
    build_graph, frame_angle_deg, most_orthogonal, orient_bars, orient_model, Graph, OrientError,
    RunReport, SkipCounts,
};
pub use crate::randgrid::{draw_grid_model, GridCfg, ReplayToken};
pub use crate::session::{
    Command, CommandId, Host, MemoryHost, Session, SessionError, CMD_ORIENT,
};
