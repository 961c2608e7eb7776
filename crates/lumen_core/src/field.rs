//! Fields: functions from a point in space to a fixed-size vector.
//!
//! A field has its own transformation list, so it can be positioned
//! independently or (the usual case for a pigment) be moved in lockstep
//! with the object it decorates.

use lumen_math::{Position, Transformable, Transformation};

/// Number of components in an [`ObjectColor`].
pub const COLOR_COMPONENTS: usize = 5;

/// Red, green, blue, filter, transmit.
pub type ObjectColor = [f64; COLOR_COMPONENTS];

/// An opaque color with no filter or transmit.
pub const fn rgb(r: f64, g: f64, b: f64) -> ObjectColor {
    [r, g, b, 0.0, 0.0]
}

/// The closed set of field functions.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind<const N: usize> {
    /// Same value everywhere.
    Constant([f64; N]),
    /// Alternates between two values on unit cubes: `even` where
    /// `floor(x) + floor(y) + floor(z)` is even, `odd` elsewhere.
    Checker { even: [f64; N], odd: [f64; N] },
}

impl<const N: usize> FieldKind<N> {
    /// Evaluate at a point already in the field's local frame.
    pub fn eval_local(&self, r: Position) -> [f64; N] {
        match self {
            FieldKind::Constant(value) => *value,
            FieldKind::Checker { even, odd } => {
                let cell = r.x().floor() + r.y().floor() + r.z().floor();
                if cell.rem_euclid(2.0) == 0.0 {
                    *even
                } else {
                    *odd
                }
            }
        }
    }
}

/// A positioned field producing `N` components.
#[derive(Debug, Clone)]
pub struct Field<const N: usize> {
    kind: FieldKind<N>,
    transformable: Transformable,
}

/// A field used as a pigment.
pub type ColorField = Field<COLOR_COMPONENTS>;

impl<const N: usize> Field<N> {
    pub fn new(kind: FieldKind<N>) -> Self {
        Self {
            kind,
            transformable: Transformable::new(),
        }
    }

    pub fn constant(value: [f64; N]) -> Self {
        Self::new(FieldKind::Constant(value))
    }

    pub fn checker(even: [f64; N], odd: [f64; N]) -> Self {
        Self::new(FieldKind::Checker { even, odd })
    }

    pub fn kind(&self) -> &FieldKind<N> {
        &self.kind
    }

    pub fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    pub fn append(&mut self, transformation: Transformation) {
        self.transformable.append(transformation);
    }

    pub fn prepare_render(&self) {
        self.transformable.prepare_render();
    }

    /// Evaluate at a world-space point.
    pub fn eval(&self, r: Position) -> [f64; N] {
        self.kind.eval_local(self.transformable.to_local(r))
    }
}
