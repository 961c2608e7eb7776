// Transform utilities for DMat4
//
// Extends glam::DMat4 so positions and directions go through the same
// 4x4 product. The w component alone decides whether the translation
// column applies.

use glam::{DMat3, DMat4};

use crate::{Direction, Position};

/// Extension trait for DMat4 to apply it to homogeneous vectors
pub trait Mat4Ext {
    /// Transform a position (w=1): rotation, scale, shear and translation.
    fn transform_position(&self, position: Position) -> Position;

    /// Transform a direction (w=0): rotation, scale and shear only.
    fn transform_direction(&self, direction: Direction) -> Direction;

    /// True if the upper-left 3x3 block satisfies `MᵗM = I` within `tolerance`.
    fn is_orthonormal(&self, tolerance: f64) -> bool;
}

impl Mat4Ext for DMat4 {
    fn transform_position(&self, position: Position) -> Position {
        Position::from_homogeneous(*self * position.to_vec4())
    }

    fn transform_direction(&self, direction: Direction) -> Direction {
        Direction::from_homogeneous(*self * direction.to_vec4())
    }

    fn is_orthonormal(&self, tolerance: f64) -> bool {
        let m = DMat3::from_mat4(*self);
        (m.transpose() * m).abs_diff_eq(DMat3::IDENTITY, tolerance)
    }
}
