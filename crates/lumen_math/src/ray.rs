use std::ops::{Add, AddAssign};

use glam::DMat4;

use crate::{Direction, Mat4Ext, Position};

/// A ray in 3D space: `r(t) = origin + direction * t`.
///
/// The direction does not have to be unit length. If it is, `t` is the
/// distance along the ray. A zero direction is allowed but useless, since
/// every intersection test will end up dividing by zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Position,
    pub direction: Direction,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Position, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Position {
        self.origin + self.direction * t
    }

    /// Map the ray through a matrix. The origin is moved as a position and
    /// the direction as a direction, so only the origin is translated.
    ///
    /// Ray parameters are preserved: `ray.transform(m).at(t)` is
    /// `m` applied to `ray.at(t)`.
    #[inline]
    pub fn transform(&self, matrix: &DMat4) -> Ray {
        Ray {
            origin: matrix.transform_position(self.origin),
            direction: matrix.transform_direction(self.direction),
        }
    }

    /// A copy of the ray starting `dt` further along, so that
    /// `ray.advance(dt).at(t) == ray.at(t + dt)`.
    #[inline]
    pub fn advance(&self, dt: f64) -> Ray {
        Ray {
            origin: self.at(dt),
            direction: self.direction,
        }
    }
}

impl Add<f64> for Ray {
    type Output = Ray;

    fn add(self, dt: f64) -> Ray {
        self.advance(dt)
    }
}

impl Add<Ray> for f64 {
    type Output = Ray;

    fn add(self, ray: Ray) -> Ray {
        ray.advance(self)
    }
}

impl AddAssign<f64> for Ray {
    fn add_assign(&mut self, dt: f64) {
        self.origin = self.at(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Position::ORIGIN, Direction::X);

        assert_eq!(ray.at(0.0), Position::ORIGIN);
        assert_eq!(ray.at(1.0), Position::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.0), Position::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Position::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_advance_identity() {
        let ray = Ray::new(Position::new(1.0, -2.0, 0.5), Direction::new(0.3, 2.0, -1.7));

        for &dt in &[-3.25, 0.0, 0.001, 4.7, 1e3] {
            let advanced = ray + dt;
            for &t in &[-10.0, -1.0, 0.0, 0.5, 2.0, 100.0] {
                let lhs = advanced.at(t);
                let rhs = ray.at(t + dt);
                assert!((lhs - rhs).length() < 1e-9, "dt={dt} t={t}");
            }
            assert_eq!(advanced.direction, ray.direction);

            // Both operand orders and the in-place form agree with advance
            assert_eq!(dt + ray, advanced);
            let mut in_place = ray;
            in_place += dt;
            assert_eq!(in_place, advanced);
        }
    }

    #[test]
    fn test_ray_transform_translates_origin_only() {
        let ray = Ray::new(Position::new(1.0, 2.0, 3.0), Direction::new(0.0, 0.0, -1.0));
        let moved = ray.transform(&DMat4::from_translation(DVec3::new(5.0, 0.0, 0.0)));

        assert_eq!(moved.origin, Position::new(6.0, 2.0, 3.0));
        assert_eq!(moved.direction, ray.direction);
    }

    #[test]
    fn test_ray_transform_preserves_parameter() {
        let m = DMat4::from_scale_rotation_translation(
            DVec3::new(2.0, 0.5, 3.0),
            glam::DQuat::from_rotation_y(0.7),
            DVec3::new(-1.0, 4.0, 2.0),
        );
        let ray = Ray::new(Position::new(0.2, 0.3, 0.4), Direction::new(1.0, -1.0, 0.5));
        let moved = ray.transform(&m);

        for &t in &[0.0, 1.0, 2.5] {
            let expected = m.transform_position(ray.at(t));
            assert!((moved.at(t) - expected).length() < 1e-9);
        }
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Position::ORIGIN, Direction::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
