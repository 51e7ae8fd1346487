//! Tolerance configuration.

/// Geometry configuration (tolerances and the axial-dot cutoff).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Below this length a bar has no usable axis and is excluded.
    pub eps_len: f64,
    /// Verticality tolerance: `|u_z| > 1 - eps_parallel` counts as vertical.
    pub eps_parallel: f64,
    /// A reference qualifies only while `|u · v̂|` stays at or below this.
    /// Above it every incident member is within ~18° of the bar's own axis.
    pub max_axial_dot: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-12,
            eps_parallel: 1e-10,
            max_axial_dot: 0.95,
        }
    }
}
