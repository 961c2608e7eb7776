//! Primitives: renderables with geometry of their own.

use std::fmt;

use lumen_math::{Direction, Position, Ray, Transformable};

use crate::renderable::links::Links;
use crate::{ColorField, Hit, NodeId, Renderable, Scene, Shape, TraceConfig};

/// A shape placed in the world.
///
/// The shape only deals with local coordinates. This type maps rays and
/// points into local space with `M_br`, and normals back out with `N_rb`.
pub struct Primitive {
    shape: Box<dyn Shape>,
    transformable: Transformable,
    pigment: Option<ColorField>,
    parent: Option<NodeId>,
    inside_out: bool,
}

impl Primitive {
    pub fn new(shape: impl Shape + 'static) -> Self {
        Self::from_boxed(Box::new(shape))
    }

    pub fn from_boxed(shape: Box<dyn Shape>) -> Self {
        Self {
            shape,
            transformable: Transformable::new(),
            pigment: None,
            parent: None,
            inside_out: false,
        }
    }

    pub fn with_pigment(mut self, pigment: ColorField) -> Self {
        self.set_pigment(Some(pigment));
        self
    }

    pub fn with_inside_out(mut self, inside_out: bool) -> Self {
        self.inside_out = inside_out;
        self
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// If set, `inside` is inverted and normals point the other way, so
    /// the primitive stands for its own complement.
    pub fn inside_out(&self) -> bool {
        self.inside_out
    }

    pub fn set_inside_out(&mut self, inside_out: bool) {
        self.inside_out = inside_out;
    }

    /// Intersect a world-space ray, returning only the ray parameter.
    pub fn intersect_ray(&self, ray: &Ray, config: &TraceConfig) -> Option<f64> {
        let local = self.transformable.ray_to_local(ray);
        self.shape.intersect_local(&local, config)
    }

    /// Unit surface normal at a world-space point on the surface.
    ///
    /// Normals are carried out with `N_rb = (M_rb⁻¹)ᵗ`, not `M_rb`, since
    /// non-uniform scaling and shear do not preserve angles. `N_rb` does not
    /// preserve length either, hence the normalization here.
    pub fn normal(&self, r: Position) -> Direction {
        let local = self.shape.normal_local(self.transformable.to_local(r));
        let n = self.transformable.normal_to_world(local).normalize();
        if self.inside_out {
            -n
        } else {
            n
        }
    }

    /// Whether a world-space point is inside, honouring `inside_out`.
    pub fn contains(&self, r: Position) -> bool {
        self.inside_out ^ self.shape.inside_local(self.transformable.to_local(r))
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primitive")
            .field("transformable", &self.transformable)
            .field("pigment", &self.pigment)
            .field("parent", &self.parent)
            .field("inside_out", &self.inside_out)
            .finish_non_exhaustive()
    }
}

impl Links for Primitive {
    fn transformable_mut(&mut self) -> &mut Transformable {
        &mut self.transformable
    }

    fn pigment_slot(&mut self) -> &mut Option<ColorField> {
        &mut self.pigment
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
}

impl Renderable for Primitive {
    fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    fn pigment(&self) -> Option<&ColorField> {
        self.pigment.as_ref()
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn intersect<'a>(&'a self, scene: &'a Scene, ray: &Ray) -> Option<Hit<'a>> {
        self.intersect_ray(ray, scene.config())
            .map(|t| Hit { primitive: self, t })
    }

    fn inside(&self, _scene: &Scene, r: Position) -> bool {
        self.contains(r)
    }

    fn as_primitive(&self) -> Option<&Primitive> {
        Some(self)
    }

    fn as_primitive_mut(&mut self) -> Option<&mut Primitive> {
        Some(self)
    }
}
