//! The plugin interface concrete primitive shapes implement.

use lumen_math::{Direction, Position, Ray};

use crate::TraceConfig;

/// Local-space geometry of a primitive.
///
/// Everything here works in the shape's own frame. World-space placement,
/// normal transformation, normalization and `inside_out` handling are done
/// by [`Primitive`](crate::Primitive), so a shape only has to describe
/// itself at the origin.
pub trait Shape: Send + Sync {
    /// Intersect a local-space ray with the surface.
    ///
    /// Any surface can be written as `f(r) = 0`; substituting the ray gives
    /// the scalar equation `f(origin + direction * t) = 0`. Among its real
    /// roots that satisfy the shape's constraints (finite extents, for
    /// example) return the smallest one inside `config.root_range()`, or
    /// `None` if no root qualifies.
    /// [`nearest_root`](lumen_math::roots::nearest_root) implements that
    /// selection.
    fn intersect_local(&self, ray: &Ray, config: &TraceConfig) -> Option<f64>;

    /// Surface normal at a local-space point on the surface.
    ///
    /// Need not be unit length; it is renormalized in world space anyway.
    /// The result for a point off the surface is unspecified, so callers
    /// must only pass points returned by an intersection.
    fn normal_local(&self, r: Position) -> Direction;

    /// Whether a local-space point is inside the shape.
    fn inside_local(&self, r: Position) -> bool;
}
