//! Composites: renderables made of other renderables.

use lumen_math::{Position, Ray, Transformable};

use crate::renderable::links::Links;
use crate::{ColorField, Hit, NodeId, Renderable, Scene};

/// A union of child renderables.
///
/// Children are owned by the [`Scene`]; the composite only lists their ids.
/// Transformations appended through [`Scene::append`] move every
/// descendant along with the composite, so intersection simply searches the
/// children with the world-space ray.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    children: Vec<NodeId>,
    transformable: Transformable,
    pigment: Option<ColorField>,
    parent: Option<NodeId>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default pigment for children that have none of their own.
    pub fn with_pigment(mut self, pigment: ColorField) -> Self {
        self.set_pigment(Some(pigment));
        self
    }
}

/// Nearest hit among `ids`, searching each subtree. Ties go to the earlier id.
pub(crate) fn nearest_hit<'a>(
    scene: &'a Scene,
    ids: impl IntoIterator<Item = NodeId>,
    ray: &Ray,
) -> Option<Hit<'a>> {
    ids.into_iter()
        .filter_map(|id| scene.get(id))
        .filter_map(|node| node.intersect(scene, ray))
        .fold(None, |best: Option<Hit<'a>>, hit| match best {
            Some(best) => Some(best.nearer(hit)),
            None => Some(hit),
        })
}

impl Links for Composite {
    fn transformable_mut(&mut self) -> &mut Transformable {
        &mut self.transformable
    }

    fn pigment_slot(&mut self) -> &mut Option<ColorField> {
        &mut self.pigment
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    fn push_child(&mut self, child: NodeId) -> bool {
        self.children.push(child);
        true
    }
}

impl Renderable for Composite {
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
        nearest_hit(scene, self.children.iter().copied(), ray)
    }

    fn inside(&self, scene: &Scene, r: Position) -> bool {
        self.children
            .iter()
            .filter_map(|&id| scene.get(id))
            .any(|child| child.inside(scene, r))
    }

    fn children(&self) -> &[NodeId] {
        &self.children
    }
}
