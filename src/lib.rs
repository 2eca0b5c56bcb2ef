// src/lib.rs
//! AR Placement
//!
//! Hit-test driven model placement for augmented-reality scenes. A
//! [`PlacementController`] turns the per-frame hit-test feed and two user
//! commands into visibility, pose and material updates; a headless scene and
//! XR session stand in for the rendering engine so the logic runs anywhere.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod placement;
pub mod prelude;
pub mod ui;
pub mod xr;

// Re-export main types for convenience
pub use app::{AppEvent, ArApp};
pub use config::ArConfig;
pub use error::{ArError, Result};
pub use placement::PlacementController;

/// Creates an application with the default configuration, not yet started
pub fn default() -> ArApp {
    ArApp::new(ArConfig::default())
}
