#![allow(dead_code)]

use lumen_core::{Shape, TraceConfig};
use lumen_math::roots::{nearest_root, solve_quadratic};
use lumen_math::{Direction, Position, Ray};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sphere of radius 1 at the origin: `x² + y² + z² - 1 = 0`.
pub struct UnitSphere;

impl Shape for UnitSphere {
    fn intersect_local(&self, ray: &Ray, config: &TraceConfig) -> Option<f64> {
        let o = ray.origin.to_direction();
        let v = ray.direction;
        let (t0, t1) = solve_quadratic(v.dot(v), 2.0 * o.dot(v), o.dot(o) - 1.0)?;
        nearest_root([t0, t1], config.root_range(), |_| true)
    }

    fn normal_local(&self, r: Position) -> Direction {
        r.to_direction()
    }

    fn inside_local(&self, r: Position) -> bool {
        r.to_direction().length_squared() <= 1.0
    }
}

/// Open tube of radius 1 around the Z axis, cut off at `|z| <= 1`.
pub struct Tube;

impl Shape for Tube {
    fn intersect_local(&self, ray: &Ray, config: &TraceConfig) -> Option<f64> {
        let (ox, oy) = (ray.origin.x(), ray.origin.y());
        let (vx, vy) = (ray.direction.x(), ray.direction.y());
        let (t0, t1) = solve_quadratic(
            vx * vx + vy * vy,
            2.0 * (ox * vx + oy * vy),
            ox * ox + oy * oy - 1.0,
        )?;
        nearest_root([t0, t1], config.root_range(), |t| ray.at(t).z().abs() <= 1.0)
    }

    fn normal_local(&self, r: Position) -> Direction {
        Direction::new(r.x(), r.y(), 0.0)
    }

    fn inside_local(&self, r: Position) -> bool {
        r.x() * r.x() + r.y() * r.y() <= 1.0 && r.z().abs() <= 1.0
    }
}

pub fn approx(a: Direction, b: Direction, tolerance: f64) -> bool {
    (a - b).length() < tolerance
}
