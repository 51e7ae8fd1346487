//! Small 3D helpers for the orientation pass.
//!
//! Purpose
//! - Centralize the epsilons the pass depends on (`GeomCfg`) and keep the
//!   few vector predicates next to them.
//! - Angles are degree-valued throughout; the host convention stores degrees
//!   on the bar object.

mod types;
mod util;

pub use types::GeomCfg;
pub use util::{angle_deg, is_vertical, unit_or_none};
