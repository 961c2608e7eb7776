//! Ordered transformation lists with cached composite matrices.
//!
//! Transformations are applied in list order, each one physically moving
//! the object from wherever the previous ones left it. All the matrix work
//! happens once in [`Transformable::prepare_render`]; during rendering the
//! cost is the same whether the list holds zero or a thousand entries.

use std::sync::OnceLock;

use glam::DMat4;

use crate::{Direction, Mat4Ext, Position, Ray, Transformation};

/// Matrices derived from a transformation list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    /// Body to reference (local to world)
    pub m_rb: DMat4,
    /// Reference to body, the inverse of `m_rb`
    pub m_br: DMat4,
    /// Body to reference for normals, the transpose of `m_br`
    pub n_rb: DMat4,
}

impl FrameMatrices {
    /// Derive the inverse and normal matrices from a composite matrix.
    ///
    /// Normals must stay perpendicular to every tangent `p`: from
    /// `(Q n)ᵗ (M p) = nᵗ p = 0` for all `p` follows `Q = (M⁻¹)ᵗ`.
    pub fn from_composite(m_rb: DMat4) -> Self {
        let m_br = m_rb.inverse();
        Self {
            m_rb,
            m_br,
            n_rb: m_br.transpose(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.m_rb.is_finite() && self.m_br.is_finite()
    }
}

impl Default for FrameMatrices {
    fn default() -> Self {
        Self::from_composite(DMat4::IDENTITY)
    }
}

/// Something that can be moved around by a list of transformations.
///
/// The derived matrices live in a cache that [`append`](Self::append)
/// clears. Every accessor recomposes on demand, so a stale matrix can never
/// be observed; [`prepare_render`](Self::prepare_render) just does that work
/// up front. The cache is a `OnceLock`, so a prepared `Transformable` can be
/// read from many render threads at once.
#[derive(Debug, Clone, Default)]
pub struct Transformable {
    transformations: Vec<Transformation>,
    cache: OnceLock<FrameMatrices>,
}

impl Transformable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transformation after all existing ones. Invalidates the cache.
    pub fn append(&mut self, transformation: Transformation) {
        self.transformations.push(transformation);
        self.cache = OnceLock::new();
    }

    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }

    /// Compose the list into one matrix: `Tn · … · T2 · T1`.
    ///
    /// Multiplying on the left means `M · v` applies `T1` first, matching
    /// the order the transformations were appended in.
    pub fn combine(&self) -> DMat4 {
        self.transformations
            .iter()
            .fold(DMat4::IDENTITY, |acc, t| t.matrix() * acc)
    }

    /// True if the derived matrices are currently cached.
    pub fn is_prepared(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Compose and cache `M_rb`, `M_br` and `N_rb`.
    pub fn prepare_render(&self) -> &FrameMatrices {
        self.matrices()
    }

    /// The derived matrices, composing them first if the cache is empty.
    pub fn matrices(&self) -> &FrameMatrices {
        self.cache.get_or_init(|| {
            let matrices = FrameMatrices::from_composite(self.combine());
            log::debug!(
                "Composed {} transformations into frame matrices",
                self.transformations.len()
            );
            if !matrices.is_finite() {
                log::warn!(
                    "Transformation chain of {} entries is degenerate; frame matrices are not finite",
                    self.transformations.len()
                );
            }
            matrices
        })
    }

    /// Body to reference matrix.
    pub fn m_rb(&self) -> DMat4 {
        self.matrices().m_rb
    }

    /// Reference to body matrix.
    pub fn m_br(&self) -> DMat4 {
        self.matrices().m_br
    }

    /// Normal transform from body to reference.
    pub fn n_rb(&self) -> DMat4 {
        self.matrices().n_rb
    }

    /// Map a reference-frame position into the body frame.
    pub fn to_local(&self, r: Position) -> Position {
        self.m_br().transform_position(r)
    }

    /// Map a body-frame position into the reference frame.
    pub fn to_world(&self, r: Position) -> Position {
        self.m_rb().transform_position(r)
    }

    /// Map a reference-frame ray into the body frame. Parameters are kept,
    /// so a `t` found on the local ray is valid on the original.
    pub fn ray_to_local(&self, ray: &Ray) -> Ray {
        ray.transform(&self.m_br())
    }

    /// Map a body-frame surface normal into the reference frame, unnormalized.
    pub fn normal_to_world(&self, n: Direction) -> Direction {
        self.n_rb().transform_direction(n)
    }
}

impl FromIterator<Transformation> for Transformable {
    fn from_iter<I: IntoIterator<Item = Transformation>>(iter: I) -> Self {
        let mut transformable = Transformable::new();
        transformable.extend(iter);
        transformable
    }
}

impl Extend<Transformation> for Transformable {
    fn extend<I: IntoIterator<Item = Transformation>>(&mut self, iter: I) {
        for t in iter {
            self.append(t);
        }
    }
}
