// src/gfx/resources/mod.rs
//! Scene resources
//!
//! Materials shared between renderable objects.

pub mod material;

// Re-export main types
pub use material::{Material, MaterialId, MaterialManager};
