//! Homogeneous position and direction vectors.
//!
//! Both kinds carry three Cartesian components and an implied `w`:
//! a [`Position`] has `w = 1` and picks up the translation column of a
//! 4x4 matrix, a [`Direction`] has `w = 0` and ignores it. Keeping the two
//! as distinct types means a point can never be accidentally transformed
//! like a free vector (or the other way around).

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::{DVec3, DVec4};

/// A point in space. Participates in translation (`w = 1`).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Position(DVec3);

/// A free vector. Never participates in translation (`w = 0`).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Direction(DVec3);

impl Position {
    pub const ORIGIN: Position = Position(DVec3::ZERO);

    /// Homogeneous weight of every position.
    pub const W: f64 = 1.0;

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub const fn from_vec3(v: DVec3) -> Self {
        Self(v)
    }

    /// Build a position from the leading three components of a homogeneous
    /// vector. The `w` slot is discarded; affine matrices keep it at 1.
    #[inline]
    pub fn from_homogeneous(v: DVec4) -> Self {
        Self(v.truncate())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn w(&self) -> f64 {
        Self::W
    }

    #[inline]
    pub fn as_vec3(&self) -> DVec3 {
        self.0
    }

    /// The `(x, y, z, 1)` form consumed by matrix products.
    #[inline]
    pub fn to_vec4(&self) -> DVec4 {
        self.0.extend(Self::W)
    }

    /// Vector from the origin to this point.
    #[inline]
    pub fn to_direction(&self) -> Direction {
        Direction(self.0)
    }

    pub fn distance(&self, other: Position) -> f64 {
        self.0.distance(other.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Direction {
    pub const ZERO: Direction = Direction(DVec3::ZERO);
    pub const X: Direction = Direction(DVec3::X);
    pub const Y: Direction = Direction(DVec3::Y);
    pub const Z: Direction = Direction(DVec3::Z);
    pub const NEG_X: Direction = Direction(DVec3::NEG_X);
    pub const NEG_Y: Direction = Direction(DVec3::NEG_Y);
    pub const NEG_Z: Direction = Direction(DVec3::NEG_Z);

    /// Homogeneous weight of every direction.
    pub const W: f64 = 0.0;

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub const fn from_vec3(v: DVec3) -> Self {
        Self(v)
    }

    /// Build a direction from the leading three components of a homogeneous
    /// vector, dropping `w`.
    #[inline]
    pub fn from_homogeneous(v: DVec4) -> Self {
        Self(v.truncate())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn w(&self) -> f64 {
        Self::W
    }

    #[inline]
    pub fn as_vec3(&self) -> DVec3 {
        self.0
    }

    /// The `(x, y, z, 0)` form consumed by matrix products.
    #[inline]
    pub fn to_vec4(&self) -> DVec4 {
        self.0.extend(Self::W)
    }

    #[inline]
    pub fn dot(&self, other: Direction) -> f64 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn cross(&self, other: Direction) -> Direction {
        Direction(self.0.cross(other.0))
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.0.length_squared()
    }

    /// Scale to unit length.
    ///
    /// A zero-length direction produces non-finite components. This is not
    /// checked: degenerate geometry is expected to show up downstream as
    /// NaN or infinity rather than as an error.
    #[inline]
    pub fn normalize(&self) -> Direction {
        Direction(self.0 / self.0.length())
    }

    /// Angle between two directions in radians, in `[0, pi]`.
    pub fn angle_between(&self, other: Direction) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Sub for Position {
    type Output = Direction;

    fn sub(self, rhs: Position) -> Direction {
        Direction(self.0 - rhs.0)
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, rhs: Direction) -> Position {
        Position(self.0 + rhs.0)
    }
}

impl AddAssign<Direction> for Position {
    fn add_assign(&mut self, rhs: Direction) {
        self.0 += rhs.0;
    }
}

impl Sub<Direction> for Position {
    type Output = Position;

    fn sub(self, rhs: Direction) -> Position {
        Position(self.0 - rhs.0)
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, rhs: Direction) -> Direction {
        Direction(self.0 + rhs.0)
    }
}

impl Sub for Direction {
    type Output = Direction;

    fn sub(self, rhs: Direction) -> Direction {
        Direction(self.0 - rhs.0)
    }
}

impl Mul<f64> for Direction {
    type Output = Direction;

    fn mul(self, rhs: f64) -> Direction {
        Direction(self.0 * rhs)
    }
}

impl Mul<Direction> for f64 {
    type Output = Direction;

    fn mul(self, rhs: Direction) -> Direction {
        Direction(rhs.0 * self)
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction(-self.0)
    }
}

impl From<Position> for DVec4 {
    fn from(p: Position) -> DVec4 {
        p.to_vec4()
    }
}

impl From<Direction> for DVec4 {
    fn from(d: Direction) -> DVec4 {
        d.to_vec4()
    }
}
