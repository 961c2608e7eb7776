//! Scene arena.
//!
//! A scene is built in two phases. During construction it is mutated
//! through `&mut Scene`: renderables are added, linked and transformed.
//! [`Scene::prepare_render`] then composes every cached matrix, after which
//! the scene is only read. Every renderable is `Send + Sync` and the caches
//! are thread-safe, so a `&Scene` can be shared by any number of render
//! threads; the borrow checker keeps mutation out while it is shared.

use lumen_math::{Direction, Position, Ray, Transformation};

use crate::composite::nearest_hit;
use crate::renderable::links::Links;
use crate::{
    ColorField, Composite, Hit, NodeId, ObjectColor, Primitive, Renderable, SceneError,
    SceneResult, TraceConfig,
};

/// Owns every renderable. Parent and child links are [`NodeId`]s into it.
pub struct Scene {
    nodes: Vec<Box<dyn Renderable>>,
    config: TraceConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(TraceConfig::default())
    }

    pub fn with_config(config: TraceConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Number of renderables, at any depth.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a renderable as a new top-level node.
    pub fn add(&mut self, renderable: Box<dyn Renderable>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(renderable);
        log::trace!("Added scene node {}", id);
        id
    }

    pub fn add_primitive(&mut self, primitive: Primitive) -> NodeId {
        self.add(Box::new(primitive))
    }

    pub fn add_composite(&mut self, composite: Composite) -> NodeId {
        self.add(Box::new(composite))
    }

    pub fn get(&self, id: NodeId) -> Option<&dyn Renderable> {
        self.nodes.get(id.0).map(|node| node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> SceneResult<&mut Box<dyn Renderable>> {
        self.nodes.get_mut(id.0).ok_or(SceneError::UnknownNode(id))
    }

    fn node(&self, id: NodeId) -> SceneResult<&dyn Renderable> {
        self.get(id).ok_or(SceneError::UnknownNode(id))
    }

    pub fn primitive(&self, id: NodeId) -> SceneResult<&Primitive> {
        self.node(id)?
            .as_primitive()
            .ok_or(SceneError::NotPrimitive(id))
    }

    /// Nodes with no parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent().is_none())
            .map(|(index, _)| NodeId(index))
    }

    /// Make `child` a child of the composite `parent`.
    ///
    /// Whatever the parent has already been moved by is replayed onto the
    /// child's subtree, so a child lands in the same place whether it was
    /// linked before or after the parent's transformations.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        let existing = self.node(child)?.parent();
        if let Some(existing) = existing {
            return Err(SceneError::AlreadyParented {
                child,
                parent: existing,
            });
        }

        // Walk up from the new parent; meeting the child means a loop
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(SceneError::Cycle { parent, child });
            }
            cursor = self.node(id)?.parent();
        }

        if !self.get_mut(parent)?.push_child(child) {
            return Err(SceneError::NotComposite(parent));
        }
        self.get_mut(child)?.set_parent(Some(parent));

        let inherited = self.node(parent)?.transformable().transformations().to_vec();
        let ids = self.subtree(child)?;
        log::trace!(
            "Linked scene node {} under {}, replaying {} transformations onto {} nodes",
            child,
            parent,
            inherited.len(),
            ids.len()
        );
        for id in ids {
            let node = self.get_mut(id)?;
            for transformation in &inherited {
                node.append(transformation.clone());
            }
        }
        Ok(())
    }

    /// `id` and all of its descendants, parents before children.
    pub fn subtree(&self, id: NodeId) -> SceneResult<Vec<NodeId>> {
        let mut ids = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let node = self.node(next)?;
            ids.push(next);
            stack.extend(node.children().iter().rev().copied());
        }
        Ok(ids)
    }

    /// Physically move a renderable. Its pigment and every descendant move
    /// with it.
    pub fn append(&mut self, id: NodeId, transformation: Transformation) -> SceneResult<()> {
        let ids = self.subtree(id)?;
        log::trace!(
            "Appending {:?} to {} ({} nodes)",
            transformation,
            id,
            ids.len()
        );
        for next in ids {
            self.get_mut(next)?.append(transformation.clone());
        }
        Ok(())
    }

    /// Replace a node's pigment, moved into the node's current local space.
    pub fn set_pigment(&mut self, id: NodeId, pigment: Option<ColorField>) -> SceneResult<()> {
        self.get_mut(id)?.set_pigment(pigment);
        Ok(())
    }

    pub fn set_inside_out(&mut self, id: NodeId, inside_out: bool) -> SceneResult<()> {
        self.get_mut(id)?
            .as_primitive_mut()
            .ok_or(SceneError::NotPrimitive(id))?
            .set_inside_out(inside_out);
        Ok(())
    }

    /// Compose the matrices of every renderable and pigment.
    ///
    /// Must run after the last `append` and before rendering starts. Reads
    /// without it still see correct matrices, composed lazily on first use.
    pub fn prepare_render(&self) {
        for node in &self.nodes {
            node.prepare_render();
        }
        log::info!("Prepared {} scene nodes for rendering", self.nodes.len());
    }

    /// Nearest primitive hit by a world-space ray, over the whole scene.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        nearest_hit(self, self.roots(), ray)
    }

    /// Whether a world-space point is inside any top-level renderable.
    pub fn inside(&self, r: Position) -> bool {
        self.roots()
            .filter_map(|id| self.get(id))
            .any(|node| node.inside(self, r))
    }

    /// World-space unit normal of a hit.
    pub fn normal(&self, hit: &Hit<'_>, ray: &Ray) -> Direction {
        hit.primitive.normal(hit.point(ray))
    }

    /// Intrinsic color of a hit, inherited from ancestors if needed.
    pub fn hit_color(&self, hit: &Hit<'_>, ray: &Ray) -> Option<ObjectColor> {
        hit.primitive.eval_pigment(self, hit.point(ray))
    }

    /// Intrinsic color of a node at a world-space point.
    pub fn eval_pigment(&self, id: NodeId, r: Position) -> SceneResult<Option<ObjectColor>> {
        Ok(self.node(id)?.eval_pigment(self, r))
    }
}
