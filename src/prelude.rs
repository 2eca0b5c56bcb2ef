//! # AR Placement Prelude
//!
//! Commonly used types in one import:
//!
//! ```
//! use ar_placement::prelude::*;
//!
//! let mut app = ar_placement::default();
//! app.start()?;
//! app.push_event(AppEvent::EnterXr);
//! app.push_event(AppEvent::HitTest(vec![HitTestResult::at(Vector3::new(0.0, 0.0, -1.0))]));
//! app.push_event(AppEvent::PlaceClicked);
//! app.run_pending()?;
//! assert_eq!(app.controller().map(|c| c.placed_count()), Some(1));
//! # Ok::<(), ArError>(())
//! ```

// Re-export core application types
pub use crate::app::{AppEvent, ArApp, StartStatus};
pub use crate::config::ArConfig;
pub use crate::default;
pub use crate::error::{ArError, Result};

// Re-export scene types
pub use crate::gfx::pose::Pose;
pub use crate::gfx::resources::material::{Material, MaterialId};
pub use crate::gfx::scene::{Object, ObjectHandle, Scene, Shape};

// Re-export placement
pub use crate::placement::traits::{PoseSource, SceneTarget, SessionState};
pub use crate::placement::{PlaceOutcome, PlacedInstance, PlacementController};

// Re-export XR types
pub use crate::xr::{FeatureName, FeatureRequest, HeadlessSession, HitTestResult, SessionMode, XrState};

// Re-export common external dependencies
pub use cgmath::{Quaternion, Vector3};
