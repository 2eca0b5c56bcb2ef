//! # Graphics Module
//!
//! Renderer-facing state for AR placement: poses, the headless scene graph and
//! the material library.
//!
//! ## Architecture Overview
//!
//! - **Poses** ([`pose`]) - Scale/rotation/position split and matrix decomposition
//! - **Scene Management** ([`scene`]) - Objects, handles and cloning
//! - **Resource Management** ([`resources`]) - Materials shared by reference
//!
//! Nothing here draws. The scene records what an external renderer would pick
//! up on its next frame.

pub mod pose;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use pose::Pose;
pub use scene::{Object, ObjectHandle, Scene, Shape};
