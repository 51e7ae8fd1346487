//! Bar orientation for 3-D wireframe structural models.
//!
//! Given a read-only snapshot of nodes and bars, compute for each bar a
//! rotation angle about its own axis that aligns the cross-section with the
//! members meeting it at its start node, instead of leaving the section in
//! the global default orientation.
//!
//! Module map
//! - `geom3`: tolerances and the handful of 3D vector helpers.
//! - `model`: node/bar snapshot with id→slot indices.
//! - `orientation`: graph build, reference selection, angle solve, engine.
//! - `session`: host handshake, command table, write-back/refresh boundary.
//! - `randgrid`: deterministic jittered-grid models for benches and tests.

pub mod api;
pub mod geom3;
pub mod model;
pub mod orientation;
pub mod randgrid;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::GeomCfg;
pub use nalgebra::{Point3, Vector3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom3::{angle_deg, GeomCfg};
    pub use crate::model::{Bar, BarId, Model, ModelError, Node, NodeId};
    pub use crate::orientation::{
        build_graph, orient_bars, orient_model, Graph, OrientError, RunReport, SkipCounts,
    };
    pub use crate::session::{
        Command, CommandId, Host, MemoryHost, Session, SessionError, CMD_ORIENT,
    };
    pub use nalgebra::{Point3, Vector3};
}
