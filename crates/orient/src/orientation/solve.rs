//! Reference selection and the frame angle.

use nalgebra::Vector3;

use crate::geom3::{angle_deg, unit_or_none, GeomCfg};

/// Most orthogonal incident vector to unit axis `u`.
///
/// Scans `candidates` in stored order with a running minimum of `|u · v̂|`;
/// only strict improvement replaces the incumbent, so the first vector that
/// attains the minimum wins ties. Returns `None` when even the best
/// candidate exceeds `cfg.max_axial_dot` — an isolated bar sees only its own
/// vector (`|dot| = 1`) and is rejected here.
pub fn most_orthogonal(
    u: Vector3<f64>,
    candidates: &[Vector3<f64>],
    cfg: GeomCfg,
) -> Option<Vector3<f64>> {
    let mut cur_min = 1.0;
    let mut best = None;
    for &v in candidates {
        // Zero-length neighbors have no direction and never qualify.
        let Some(v_hat) = unit_or_none(v, cfg.eps_len) else {
            continue;
        };
        let dot = u.dot(&v_hat).abs();
        if dot < cur_min {
            cur_min = dot;
            best = Some(v);
        }
    }
    if cur_min > cfg.max_axial_dot {
        return None;
    }
    best
}

/// Rotation angle (degrees) of the member frame for unit axis `u` and
/// selected reference `v`.
///
/// The normalized reference is projected onto the plane perpendicular to
/// `u`, then measured against the right-handed in-plane basis built from
/// the global vertical: `c = u × Z` (horizontal) and `d = c × u`. Which side
/// of `c` the projection falls on fixes the sign, and the final ±90° shift
/// is the host's stored convention — the angle orients the section's minor
/// axis, not the raw reference — reproduced verbatim, not derived.
///
/// Caller guarantees: `u` is unit and not vertical, `v` is normalizable.
/// Output lies in `(-90, 90]` for generic geometry.
pub fn frame_angle_deg(u: Vector3<f64>, v: Vector3<f64>) -> f64 {
    let v_hat = v.normalize();
    let a = v_hat - u * u.dot(&v_hat);
    let c = u.cross(&Vector3::z()).normalize();
    let d = c.cross(&u).normalize();
    let theta1 = angle_deg(a, d);
    let theta2 = angle_deg(a, c);
    let gamma = if theta2 < 90.0 { theta1 } else { -theta1 };
    if gamma < 0.0 {
        gamma + 90.0
    } else {
        gamma - 90.0
    }
}
