//! Lumen core - renderables, the intersection contract and pigments.
//!
//! This crate provides:
//!
//! - **Shape plugin interface**: [`Shape`], the three local-space functions a primitive type supplies
//! - **Renderables**: [`Primitive`], [`Composite`] and the [`Renderable`] trait
//! - **Scene arena**: [`Scene`], owning renderables and their parent links
//! - **Pigments**: [`Field`], [`ColorField`]
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{rgb, ColorField, Primitive, Scene};
//! use lumen_math::{Direction, Position, Ray, Transformation};
//!
//! let mut scene = Scene::new();
//! let ball = scene.add_primitive(
//!     Primitive::new(MySphere).with_pigment(ColorField::constant(rgb(1.0, 0.0, 0.0))),
//! );
//! scene.append(ball, Transformation::translate(0.0, 0.0, -5.0))?;
//! scene.prepare_render();
//!
//! let ray = Ray::new(Position::ORIGIN, Direction::NEG_Z);
//! if let Some(hit) = scene.intersect(&ray) {
//!     let normal = scene.normal(&hit, &ray);
//!     let color = scene.hit_color(&hit, &ray);
//! }
//! ```

mod composite;
pub mod config;
pub mod error;
pub mod field;
mod primitive;
mod renderable;
pub mod scene;
mod shape;

// Re-export commonly used types
pub use composite::Composite;
pub use config::TraceConfig;
pub use error::{SceneError, SceneResult};
pub use field::{rgb, ColorField, Field, FieldKind, ObjectColor, COLOR_COMPONENTS};
pub use primitive::Primitive;
pub use renderable::{Hit, NodeId, Renderable};
pub use scene::Scene;
pub use shape::Shape;
