//! Lumen math - the geometric transformation stack.
//!
//! - **Homogeneous vectors**: [`Position`] (w=1) and [`Direction`] (w=0)
//! - **Rays**: [`Ray`], evaluation, transformation and advancement
//! - **Transformations**: [`Transformation`] variants and the Point-Toward algorithm
//! - **Composition**: [`Transformable`], a cached `M_rb` / `M_br` / `N_rb` set
//! - **Roots**: quadratic solving and the nearest-root selection rule

// Re-export the glam types used at the API boundary
pub use glam::{DMat3, DMat4, DVec3, DVec4};

mod interval;
mod ray;
pub mod roots;
mod transform;
mod transformable;
mod transformation;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use transform::Mat4Ext;
pub use transformable::{FrameMatrices, Transformable};
pub use transformation::{
    location_look_at, point_toward, point_toward_residual, AngleUnit, Axis, LocationLookAt,
    PointToward, Transformation,
};
pub use vector::{Direction, Position};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_matrix_for_both_kinds() {
        let m = Transformation::translate(1.0, 2.0, 3.0).matrix();

        assert_eq!(
            m.transform_position(Position::new(1.0, 1.0, 1.0)),
            Position::new(2.0, 3.0, 4.0)
        );
        assert_eq!(
            m.transform_direction(Direction::new(1.0, 1.0, 1.0)),
            Direction::new(1.0, 1.0, 1.0)
        );
    }
}
