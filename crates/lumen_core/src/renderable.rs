//! The world-space intersection contract shared by primitives and composites.

use std::fmt;

use lumen_math::{Position, Ray, Transformable, Transformation};

use crate::{ColorField, ObjectColor, Primitive, Scene};

/// Index of a renderable inside a [`Scene`].
///
/// Parent links are stored as `NodeId`s rather than references, so a child
/// never keeps its parent alive and no reference cycles can form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a successful intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The primitive whose surface was hit. Always a primitive, however
    /// deep the composite tree above it.
    pub primitive: &'a Primitive,
    /// Ray parameter at the hit. Affine maps preserve ray parameters, so
    /// this is valid on the world-space ray.
    pub t: f64,
}

impl<'a> Hit<'a> {
    /// World-space hit point on `ray`.
    pub fn point(&self, ray: &Ray) -> Position {
        ray.at(self.t)
    }

    /// Keep whichever of two hits is nearer. Exact ties keep `self`.
    pub fn nearer(self, other: Hit<'a>) -> Hit<'a> {
        if other.t < self.t {
            other
        } else {
            self
        }
    }
}

pub(crate) mod links {
    use lumen_math::Transformable;

    use crate::{ColorField, NodeId};

    /// State only the [`Scene`](crate::Scene) may change once a renderable
    /// is built. The module is private, so code outside this crate can
    /// neither name nor call these methods, and every parent/child link goes
    /// through [`Scene::add_child`](crate::Scene::add_child).
    pub trait Links {
        fn transformable_mut(&mut self) -> &mut Transformable;

        fn pigment_slot(&mut self) -> &mut Option<ColorField>;

        /// Set the non-owning parent link.
        fn set_parent(&mut self, parent: Option<NodeId>);

        /// Register a child. Only composites accept children.
        fn push_child(&mut self, _child: NodeId) -> bool {
            false
        }
    }
}

/// Anything that can be placed in a scene and hit by a ray.
///
/// Implemented by [`Primitive`] and [`Composite`](crate::Composite) only. New
/// geometry plugs in through [`Shape`](crate::Shape).
///
/// Links between renderables can only be made with
/// [`Scene::add_child`], which rejects cycles:
///
/// ```compile_fail
/// use lumen_core::{Composite, Renderable, Scene};
///
/// let mut scene = Scene::new();
/// let id = scene.add_composite(Composite::new());
/// let mut group = Composite::new();
/// group.push_child(id);
/// ```
pub trait Renderable: links::Links + Send + Sync {
    fn transformable(&self) -> &Transformable;

    fn pigment(&self) -> Option<&ColorField>;

    fn parent(&self) -> Option<NodeId>;

    /// Intersect a world-space ray, returning the nearest hit primitive.
    fn intersect<'a>(&'a self, scene: &'a Scene, ray: &Ray) -> Option<Hit<'a>>;

    /// Whether a world-space point is inside.
    fn inside(&self, scene: &Scene, r: Position) -> bool;

    /// Direct children, empty for anything that is not a composite.
    fn children(&self) -> &[NodeId] {
        &[]
    }

    fn as_primitive(&self) -> Option<&Primitive> {
        None
    }

    fn as_primitive_mut(&mut self) -> Option<&mut Primitive> {
        None
    }

    /// Replace the pigment. `None` removes it, so lookups fall through to
    /// the parent.
    ///
    /// Everything already appended to this renderable is replayed onto the
    /// new pigment, so it lands in the same local space as the geometry.
    fn set_pigment(&mut self, pigment: Option<ColorField>) {
        let pigment = pigment.map(|mut pigment| {
            for transformation in self.transformable().transformations() {
                pigment.append(transformation.clone());
            }
            pigment
        });
        *self.pigment_slot() = pigment;
    }

    /// Move this renderable, and its pigment with it so the two stay in
    /// the same local space.
    fn append(&mut self, transformation: Transformation) {
        if let Some(pigment) = self.pigment_slot() {
            pigment.append(transformation.clone());
        }
        self.transformable_mut().append(transformation);
    }

    /// Compose the cached matrices of this renderable and its pigment.
    fn prepare_render(&self) {
        self.transformable().prepare_render();
        if let Some(pigment) = self.pigment() {
            pigment.prepare_render();
        }
    }

    /// Intrinsic color at a world-space point.
    ///
    /// Uses this renderable's pigment if it has one, otherwise the nearest
    /// ancestor's. `None` when nothing up the chain has a pigment.
    fn eval_pigment(&self, scene: &Scene, r: Position) -> Option<ObjectColor> {
        match self.pigment() {
            Some(pigment) => Some(pigment.eval(r)),
            None => self
                .parent()
                .and_then(|id| scene.get(id))
                .and_then(|parent| parent.eval_pigment(scene, r)),
        }
    }
}
