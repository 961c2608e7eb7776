//! Transformations that physically move an object.
//!
//! Each variant stores only its own parameters and builds its 4x4 matrix on
//! demand; nothing is cached here. Composition and caching live in
//! [`Transformable`](crate::Transformable).
//!
//! Like POV-Ray, every transformation acts about the world origin, not the
//! object's current centre: scaling an object sitting at `<5,0,0>` by 3
//! leaves it at `<15,0,0>`.

use glam::{DMat3, DMat4, DVec3};

use crate::{Direction, Mat4Ext, Position};

/// Unit in which an angle parameter is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    #[inline]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }
}

/// Coordinate axis for a single-axis rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Point-Toward parameters. See [`point_toward`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointToward {
    /// Point direction in the body frame
    pub p_b: Direction,
    /// Point direction in the reference frame
    pub p_r: Direction,
    /// Toward direction in the body frame
    pub t_b: Direction,
    /// Toward direction in the reference frame
    pub t_r: Direction,
}

/// Location/look-at parameters, POV-Ray's camera model generalised to any
/// object. See [`location_look_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationLookAt {
    pub location: Position,
    pub look_at: Position,
    /// Body direction aimed at `look_at`, default +Z (camera direction)
    pub p_b: Direction,
    /// Body toward direction, default +Y (camera down)
    pub t_b: Direction,
    /// Reference toward direction, default -Z (ground)
    pub t_r: Direction,
}

impl LocationLookAt {
    pub const DEFAULT_P_B: Direction = Direction::Z;
    pub const DEFAULT_T_B: Direction = Direction::Y;
    pub const DEFAULT_T_R: Direction = Direction::NEG_Z;

    /// Location/look-at with the default body and toward directions.
    pub fn new(location: Position, look_at: Position) -> Self {
        Self {
            location,
            look_at,
            p_b: Self::DEFAULT_P_B,
            t_b: Self::DEFAULT_T_B,
            t_r: Self::DEFAULT_T_R,
        }
    }

    pub fn with_point_body(mut self, p_b: Direction) -> Self {
        self.p_b = p_b;
        self
    }

    pub fn with_toward(mut self, t_b: Direction, t_r: Direction) -> Self {
        self.t_b = t_b;
        self.t_r = t_r;
        self
    }
}

/// One step in an object's placement.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    /// Move the body origin to this offset in the reference frame.
    Translation(Direction),
    /// Per-axis stretch. A zero factor is read as 1 so the matrix stays
    /// invertible (POV-Ray's convention, minus the warning).
    Scaling(DVec3),
    /// Same stretch on all three axes, with the same zero handling.
    UniformScaling(f64),
    /// Right-handed rotation about one coordinate axis.
    AxisRotation { angle: f64, axis: Axis, unit: AngleUnit },
    /// Rotation about X by `angles.x`, then Y by `angles.y`, then Z by
    /// `angles.z`. The order is fixed.
    EulerVectorRotation { angles: DVec3, unit: AngleUnit },
    PointToward(PointToward),
    LocationLookAt(LocationLookAt),
}

impl Transformation {
    pub fn translate(x: f64, y: f64, z: f64) -> Self {
        Transformation::Translation(Direction::new(x, y, z))
    }

    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        Transformation::Scaling(DVec3::new(x, y, z))
    }

    pub fn uniform_scale(amount: f64) -> Self {
        Transformation::UniformScaling(amount)
    }

    /// Rotation about X, in degrees.
    pub fn rotate_x(degrees: f64) -> Self {
        Self::rotate(Axis::X, degrees, AngleUnit::Degrees)
    }

    /// Rotation about Y, in degrees.
    pub fn rotate_y(degrees: f64) -> Self {
        Self::rotate(Axis::Y, degrees, AngleUnit::Degrees)
    }

    /// Rotation about Z, in degrees.
    pub fn rotate_z(degrees: f64) -> Self {
        Self::rotate(Axis::Z, degrees, AngleUnit::Degrees)
    }

    pub fn rotate(axis: Axis, angle: f64, unit: AngleUnit) -> Self {
        Transformation::AxisRotation { angle, axis, unit }
    }

    pub fn rotate_vector(x: f64, y: f64, z: f64, unit: AngleUnit) -> Self {
        Transformation::EulerVectorRotation {
            angles: DVec3::new(x, y, z),
            unit,
        }
    }

    pub fn point_toward(p_b: Direction, p_r: Direction, t_b: Direction, t_r: Direction) -> Self {
        Transformation::PointToward(PointToward { p_b, p_r, t_b, t_r })
    }

    pub fn look_at(location: Position, look_at: Position) -> Self {
        Transformation::LocationLookAt(LocationLookAt::new(location, look_at))
    }

    /// Build the matrix for this transformation from its current parameters.
    pub fn matrix(&self) -> DMat4 {
        match self {
            Transformation::Translation(amount) => DMat4::from_translation(amount.as_vec3()),
            Transformation::Scaling(amount) => DMat4::from_scale(DVec3::new(
                nonzero_scale(amount.x),
                nonzero_scale(amount.y),
                nonzero_scale(amount.z),
            )),
            Transformation::UniformScaling(amount) => {
                DMat4::from_scale(DVec3::splat(nonzero_scale(*amount)))
            }
            Transformation::AxisRotation { angle, axis, unit } => {
                axis_rotation(*axis, unit.to_radians(*angle))
            }
            Transformation::EulerVectorRotation { angles, unit } => {
                axis_rotation(Axis::Z, unit.to_radians(angles.z))
                    * axis_rotation(Axis::Y, unit.to_radians(angles.y))
                    * axis_rotation(Axis::X, unit.to_radians(angles.x))
            }
            Transformation::PointToward(pt) => point_toward(pt.p_b, pt.p_r, pt.t_b, pt.t_r),
            Transformation::LocationLookAt(la) => {
                location_look_at(la.location, la.look_at, la.p_b, la.t_b, la.t_r)
            }
        }
    }
}

#[inline]
fn nonzero_scale(s: f64) -> f64 {
    if s == 0.0 {
        1.0
    } else {
        s
    }
}

fn axis_rotation(axis: Axis, radians: f64) -> DMat4 {
    match axis {
        Axis::X => DMat4::from_rotation_x(radians),
        Axis::Y => DMat4::from_rotation_y(radians),
        Axis::Z => DMat4::from_rotation_z(radians),
    }
}

/// Orthonormal right-handed basis `[p̂, ŝ, û]` with `ŝ = p × t` and
/// `û = p × ŝ`, as matrix columns.
fn point_toward_basis(p: Direction, t: Direction) -> DMat3 {
    let s = p.cross(t).normalize();
    let u = p.cross(s).normalize();
    DMat3::from_cols(p.normalize().as_vec3(), s.as_vec3(), u.as_vec3())
}

/// Rotation taking `p_b` exactly onto `p_r` while bringing `t_b` as close
/// as possible to `t_r`.
///
/// Both constraints can hold only when the angle between `p` and `t` is the
/// same in both frames. Otherwise the point constraint wins and the residual
/// is smallest when `p`, the rotated `t_b` and `t_r` share a plane. Its
/// normal `ŝ = normalize(p × t)` is then a third exactly-matched direction,
/// and `û = p × ŝ` completes an orthonormal basis in each frame:
///
/// ```text
/// R = M_rb · B   =>   M_rb = R · B⁻¹ = R · Bᵗ
/// ```
///
/// Both bases are orthonormal, so the inverse is a transpose and the result
/// is a pure rotation with no translation.
///
/// If `p` is parallel to `t` in either frame the cross product vanishes and
/// the matrix comes out non-finite.
pub fn point_toward(p_b: Direction, p_r: Direction, t_b: Direction, t_r: Direction) -> DMat4 {
    let b = point_toward_basis(p_b, t_b);
    let r = point_toward_basis(p_r, t_r);
    DMat4::from_mat3(r * b.transpose())
}

/// Angle in radians left between `M · t_b` and `t_r` after a Point-Toward.
pub fn point_toward_residual(matrix: &DMat4, t_b: Direction, t_r: Direction) -> f64 {
    matrix.transform_direction(t_b).angle_between(t_r)
}

/// Point `p_b` from `location` toward `look_at`, then move the body origin
/// to `location`.
///
/// When the look direction is parallel to `t_r` the toward constraint says
/// nothing about roll, so `t_b` itself is used as the reference toward
/// direction. This keeps e.g. a default camera looking straight down -Z
/// well defined.
pub fn location_look_at(
    location: Position,
    look_at: Position,
    p_b: Direction,
    t_b: Direction,
    t_r: Direction,
) -> DMat4 {
    let p_r = look_at - location;
    let t_r = if is_parallel(p_r, t_r) { t_b } else { t_r };
    DMat4::from_translation(location.as_vec3()) * point_toward(p_b, p_r, t_b, t_r)
}

fn is_parallel(a: Direction, b: Direction) -> bool {
    a.cross(b).length() <= 1e-12 * a.length() * b.length()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Direction, b: Direction, tol: f64) -> bool {
        (a - b).length() < tol
    }

    #[test]
    fn test_translation_column() {
        let m = Transformation::translate(1.0, 2.0, 3.0).matrix();
        assert_eq!(m.w_axis, glam::DVec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(
            m.transform_position(Position::ORIGIN),
            Position::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_scaling_zero_is_one() {
        assert_eq!(
            Transformation::scale(0.0, 2.0, 3.0).matrix(),
            Transformation::scale(1.0, 2.0, 3.0).matrix()
        );
        assert_eq!(
            Transformation::scale(2.0, 0.0, 3.0).matrix(),
            Transformation::scale(2.0, 1.0, 3.0).matrix()
        );
        assert_eq!(
            Transformation::scale(2.0, 3.0, 0.0).matrix(),
            Transformation::scale(2.0, 3.0, 1.0).matrix()
        );
        assert_eq!(
            Transformation::uniform_scale(0.0).matrix(),
            Transformation::uniform_scale(1.0).matrix()
        );
        assert_eq!(Transformation::uniform_scale(0.0).matrix(), DMat4::IDENTITY);
    }

    #[test]
    fn test_scaling_is_diagonal() {
        let m = Transformation::scale(2.0, -3.0, 4.0).matrix();
        let p = m.transform_position(Position::new(1.0, 1.0, 1.0));
        assert_eq!(p, Position::new(2.0, -3.0, 4.0));

        let m = Transformation::uniform_scale(2.5).matrix();
        assert_eq!(m, DMat4::from_scale(DVec3::splat(2.5)));
    }

    #[test]
    fn test_axis_rotation_right_handed() {
        // Pointing down +X, rotating +90° about Z, ends up pointing down +Y
        let m = Transformation::rotate_z(90.0).matrix();
        assert!(close(m.transform_direction(Direction::X), Direction::Y, 1e-12));

        let m = Transformation::rotate_x(90.0).matrix();
        assert!(close(m.transform_direction(Direction::Y), Direction::Z, 1e-12));

        let m = Transformation::rotate_y(90.0).matrix();
        assert!(close(m.transform_direction(Direction::Z), Direction::X, 1e-12));
    }

    #[test]
    fn test_axis_rotation_units_agree() {
        let deg = Transformation::rotate(Axis::Y, 30.0, AngleUnit::Degrees).matrix();
        let rad = Transformation::rotate(Axis::Y, 30f64.to_radians(), AngleUnit::Radians).matrix();
        assert!(deg.abs_diff_eq(rad, 1e-15));
    }

    #[test]
    fn test_rotation_is_about_origin() {
        let m = Transformation::rotate_z(90.0).matrix();
        let p = m.transform_position(Position::new(5.0, 0.0, 0.0));
        assert!((p - Position::new(0.0, 5.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_euler_order_x_then_y_then_z() {
        let euler = Transformation::rotate_vector(90.0, 90.0, 0.0, AngleUnit::Degrees).matrix();
        let sequential =
            Transformation::rotate_y(90.0).matrix() * Transformation::rotate_x(90.0).matrix();
        assert!(euler.abs_diff_eq(sequential, 1e-12));

        // +Y -> (X by 90) -> +Z -> (Y by 90) -> +X
        assert!(close(euler.transform_direction(Direction::Y), Direction::X, 1e-12));

        // Reversed order lands somewhere else
        let reversed =
            Transformation::rotate_x(90.0).matrix() * Transformation::rotate_y(90.0).matrix();
        assert!(!euler.abs_diff_eq(reversed, 1e-6));
    }

    #[test]
    fn test_point_toward_worked_example() {
        let d = f64::to_radians;
        let p_b = Direction::new(d(13.0).cos(), 0.0, -d(13.0).sin());
        let t_b = Direction::new(0.0, 0.0, 1.0);
        let p_r = Direction::new(
            d(30.0).cos() * d(80.0).sin(),
            d(30.0).cos() * d(80.0).cos(),
            d(30.0).sin(),
        );
        let t_r = Direction::new(0.0, 0.0, -1.0);

        let m = point_toward(p_b, p_r, t_b, t_r);

        assert!(close(m.transform_direction(p_b), p_r, 1e-6));
        assert!(m.is_orthonormal(1e-9));
        assert!((m.determinant() - 1.0).abs() < 1e-9);

        // Translation column untouched
        assert_eq!(m.w_axis, glam::DVec4::W);

        // Body s and u land on their reference counterparts
        let s_b = Direction::new(0.0, -1.0, 0.0);
        let s_r = Direction::new(-0.173648, 0.984808, 0.0);
        assert!(close(m.transform_direction(s_b), s_r, 1e-5));

        let mt = m.transform_direction(t_b);
        assert!(close(mt, Direction::new(0.287930, 0.050770, -0.956305), 1e-5));

        let residual = point_toward_residual(&m, t_b, t_r).to_degrees();
        assert!((residual - 17.0).abs() < 1e-6, "residual {residual}");
    }

    #[test]
    fn test_point_toward_exact_when_angles_match() {
        // Same angle between p and t in both frames: both constraints hold
        let m = point_toward(Direction::X, Direction::Y, Direction::Y, Direction::NEG_X);
        assert!(close(m.transform_direction(Direction::X), Direction::Y, 1e-12));
        assert!(point_toward_residual(&m, Direction::Y, Direction::NEG_X) < 1e-9);
    }

    #[test]
    fn test_point_toward_unnormalized_inputs() {
        let m = point_toward(
            Direction::new(3.0, 0.0, 0.0),
            Direction::new(0.0, 0.0, 7.0),
            Direction::new(0.0, 2.0, 0.0),
            Direction::new(0.0, 5.0, 0.0),
        );
        assert!(m.is_orthonormal(1e-12));
        assert!(close(m.transform_direction(Direction::X), Direction::Z, 1e-12));
    }

    #[test]
    fn test_point_toward_parallel_is_not_finite() {
        let m = point_toward(Direction::Z, Direction::X, Direction::Z, Direction::Y);
        assert!(!m.is_finite());
    }

    #[test]
    fn test_location_look_at_default_down_neg_z() {
        let m = Transformation::look_at(Position::ORIGIN, Position::new(0.0, 0.0, -10.0)).matrix();

        assert!(m.is_finite());
        let pointed = m.transform_direction(LocationLookAt::DEFAULT_P_B);
        assert!(close(pointed, Direction::NEG_Z, 1e-12));
        assert!(m.is_orthonormal(1e-12));
    }

    #[test]
    fn test_location_look_at_translates_and_points() {
        let location = Position::new(1.0, -5.0, 2.0);
        let look_at = Position::new(1.0, 5.0, 2.0);
        let m = Transformation::look_at(location, look_at).matrix();

        // Body origin sits at location
        assert!((m.transform_position(Position::ORIGIN) - location).length() < 1e-12);
        // Body +Z points at look_at
        assert!(close(m.transform_direction(Direction::Z), Direction::Y, 1e-12));
        // Body +Y (camera down) points at the ground
        assert!(close(m.transform_direction(Direction::Y), Direction::NEG_Z, 1e-12));
        // A point one unit along the body axis is one unit toward look_at
        let ahead = m.transform_position(Position::new(0.0, 0.0, 1.0));
        assert!((ahead - Position::new(1.0, -4.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_location_look_at_custom_directions() {
        let la = LocationLookAt::new(Position::ORIGIN, Position::new(10.0, 0.0, 0.0))
            .with_point_body(Direction::X)
            .with_toward(Direction::Z, Direction::Z);
        let m = Transformation::LocationLookAt(la).matrix();
        assert!(m.abs_diff_eq(DMat4::IDENTITY, 1e-12));
    }
}
