//! Vector predicates and the degree-valued angle.

use nalgebra::Vector3;

/// Angle between `a` and `b` in degrees, in `[0, 180]`.
///
/// Uses `atan2(‖a×b‖, a·b)`, which keeps precision near 0° and 180° where
/// the acos formulation loses digits.
#[inline]
pub fn angle_deg(a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    a.cross(&b).norm().atan2(a.dot(&b)).to_degrees()
}

/// Unit vector of `w`, or `None` when `‖w‖ <= eps_len` (or non-finite).
#[inline]
pub fn unit_or_none(w: Vector3<f64>, eps_len: f64) -> Option<Vector3<f64>> {
    let n = w.norm();
    if !n.is_finite() || n <= eps_len {
        return None;
    }
    Some(w / n)
}

/// Whether unit axis `u` is parallel to global Z within `eps_parallel`.
#[inline]
pub fn is_vertical(u: Vector3<f64>, eps_parallel: f64) -> bool {
    u.z.abs() > 1.0 - eps_parallel
}
