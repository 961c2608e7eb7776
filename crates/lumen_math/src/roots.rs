//! Root finding and root selection for implicit-surface intersection.
//!
//! A shape solves `f(origin + direction * t) = 0` for `t`. Whatever the
//! solver, the hit it reports must be the smallest root at or beyond the
//! acceptance threshold that also meets the shape's own constraints
//! (finite extents and the like). [`nearest_root`] applies that rule.

use crate::Interval;

/// Real roots of `a t² + b t + c = 0`, smallest first.
///
/// Returns `None` when there are no real roots. A repeated root (grazing
/// ray) is returned twice. When `a` is zero the equation is linear and its
/// single root is returned twice.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0.0 {
        if b == 0.0 {
            return None;
        }
        let t = -c / b;
        return Some((t, t));
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    // Avoid cancellation between -b and the square root
    let sqrtd = discriminant.sqrt();
    let q = if b < 0.0 {
        -0.5 * (b - sqrtd)
    } else {
        -0.5 * (b + sqrtd)
    };

    if q == 0.0 {
        // b == 0 and c == 0
        return Some((0.0, 0.0));
    }

    let t0 = q / a;
    let t1 = c / q;
    Some(if t0 <= t1 { (t0, t1) } else { (t1, t0) })
}

/// Smallest root in `range` for which `accept` holds.
///
/// Non-finite roots never qualify, so a degenerate solve quietly becomes
/// "no intersection".
pub fn nearest_root<I, F>(roots: I, range: Interval, accept: F) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
    F: Fn(f64) -> bool,
{
    roots
        .into_iter()
        .filter(|t| t.is_finite() && range.contains(*t) && accept(*t))
        .fold(None, |best: Option<f64>, t| match best {
            Some(b) if b <= t => Some(b),
            _ => Some(t),
        })
}
