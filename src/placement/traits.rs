//! Capability traits the placement controller is written against
//!
//! The controller never looks engine objects up by name. Everything it needs
//! from the rendering/XR engine comes through these traits, so the headless
//! [`Scene`](crate::gfx::scene::Scene) and
//! [`HeadlessSession`](crate::xr::HeadlessSession) can be swapped for a real
//! engine binding or a test double.

use crate::error::Result;
use crate::gfx::{pose::Pose, resources::material::MaterialId, scene::ObjectHandle};
use crate::xr::XrState;

/// Read access to the XR session lifecycle
pub trait SessionState {
    /// Current lifecycle state reported by the runtime
    fn xr_state(&self) -> XrState;

    /// Whether an immersive session is currently running
    fn is_in_xr(&self) -> bool {
        self.xr_state() == XrState::InXr
    }
}

/// Something that may currently yield a pose
pub trait PoseSource {
    fn current_pose(&self) -> Option<Pose>;
}

/// Write access to renderable objects
///
/// Implementations apply changes to renderer-owned state that is picked up on
/// the next frame. Handles passed in must have been issued by the same target.
pub trait SceneTarget {
    /// Sets the visibility flag of an object
    fn set_visible(&mut self, handle: ObjectHandle, visible: bool) -> Result<()>;

    /// Writes scale, rotation and position of an object
    fn apply_pose(&mut self, handle: ObjectHandle, pose: &Pose) -> Result<()>;

    /// Points an object at a material
    fn set_material(&mut self, handle: ObjectHandle, material: &MaterialId) -> Result<()>;

    /// Duplicates an object
    ///
    /// The copy shares geometry and material with the source but has its own
    /// transform and visibility. It starts with the source's current values.
    fn clone_object(&mut self, handle: ObjectHandle, name: &str) -> Result<ObjectHandle>;
}
