//! # Scene Management Module
//!
//! Headless scene graph holding the renderer-visible state of every object:
//! visibility, pose and material reference. It plays the part of the external
//! engine's scene so placement logic can run and be tested without a GPU.
//!
//! ## Key Components
//!
//! - [`Scene`] - Container owning objects and the material library
//! - [`Object`] - A renderable with a [`Shape`], pose, visibility and material
//! - [`ObjectHandle`] - Stable reference to an object in a scene
//!
//! ## Usage
//!
//! ```
//! use ar_placement::gfx::scene::{Scene, Shape};
//!
//! let mut scene = Scene::new();
//! let handle = scene.add_shape("box", Shape::cube(0.2));
//! assert_eq!(scene.get_object(handle).unwrap().name, "box");
//! ```

pub mod object;
pub mod scene;

// Re-export main types
pub use object::{Object, ObjectHandle, Shape};
pub use scene::{Scene, SceneStatistics};
