//! # Placement Controller
//!
//! Turns the per-frame hit-test feed and two user commands ("place" and
//! "toggle color") into visibility, pose and material updates on a
//! [`SceneTarget`].
//!
//! ## State
//!
//! - the last hit-test sample (or none)
//! - the template model, which is only ever cloned and stays hidden
//! - the marker that follows the hit-test pose
//! - placed clones, in placement order
//! - the selected material, one of exactly two
//!
//! ## Usage
//!
//! ```
//! use ar_placement::gfx::resources::material::{Material, GREEN, RED};
//! use ar_placement::gfx::scene::{Scene, Shape};
//! use ar_placement::placement::PlacementController;
//! use ar_placement::xr::{HeadlessSession, HitTestResult, SessionMode};
//! use cgmath::Vector3;
//!
//! let mut scene = Scene::new();
//! let red = scene.add_material(Material::emissive("mat1", RED));
//! let green = scene.add_material(Material::emissive("mat2", GREEN));
//! let template = scene.add_shape("box", Shape::cube(0.2));
//! let marker = scene.add_shape("marker", Shape::Torus { diameter: 0.15, thickness: 0.05 });
//!
//! let mut controller = PlacementController::attach(&mut scene, template, marker, [red, green])?;
//!
//! let mut session = HeadlessSession::new();
//! pollster::block_on(session.create_experience(SessionMode::ImmersiveAr))?;
//! session.enter()?;
//!
//! controller.on_hit_test_update(&mut scene, &[HitTestResult::at(Vector3::new(0.0, 0.0, -1.0))])?;
//! assert!(controller.on_place_command(&mut scene, &session)?.is_placed());
//! assert_eq!(controller.placed_count(), 1);
//! # Ok::<(), ar_placement::ArError>(())
//! ```

pub mod traits;

use crate::error::Result;
use crate::gfx::{pose::Pose, resources::material::MaterialId, scene::ObjectHandle};
use crate::xr::HitTestResult;

use traits::{PoseSource, SceneTarget, SessionState};

/// Name given to clones of the template
pub const CLONE_NAME: &str = "clone";

/// Number of materials the toggle cycles through
pub const MATERIAL_COUNT: usize = 2;

/// A clone of the template placed at a hit-test pose
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedInstance {
    handle: ObjectHandle,
    pose: Pose,
    material: MaterialId,
}

impl PlacedInstance {
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    /// Pose at placement time. Never changes afterwards.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn material(&self) -> &MaterialId {
        &self.material
    }
}

/// Result of a place command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// A new instance was created
    Placed(ObjectHandle),
    /// Ignored: no hit-test sample is live
    NoHitTest,
    /// Ignored: the XR session is not running
    NotInXr,
}

impl PlaceOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlaceOutcome::Placed(_))
    }

    pub fn handle(&self) -> Option<ObjectHandle> {
        match self {
            PlaceOutcome::Placed(handle) => Some(*handle),
            _ => None,
        }
    }
}

/// Placement and recolouring state machine
#[derive(Debug)]
pub struct PlacementController {
    template: ObjectHandle,
    marker: ObjectHandle,
    materials: [MaterialId; MATERIAL_COUNT],
    selected_material_index: usize,
    template_material: MaterialId,
    current_hit_test: Option<HitTestResult>,
    placed: Vec<PlacedInstance>,
}

impl PlacementController {
    /// Takes ownership of `template` and `marker` in `scene`
    ///
    /// Assigns the first material to the template and hides both objects
    /// until hit-test results arrive.
    pub fn attach<S: SceneTarget + ?Sized>(
        scene: &mut S,
        template: ObjectHandle,
        marker: ObjectHandle,
        materials: [MaterialId; MATERIAL_COUNT],
    ) -> Result<Self> {
        let template_material = materials[0].clone();
        scene.set_material(template, &template_material)?;
        scene.set_visible(template, false)?;
        scene.set_visible(marker, false)?;

        log::debug!(
            "Placement controller attached: template {:?}, marker {:?}, materials {:?}",
            template,
            marker,
            materials
        );

        Ok(Self {
            template,
            marker,
            materials,
            selected_material_index: 0,
            template_material,
            current_hit_test: None,
            placed: Vec::new(),
        })
    }

    /// Handles one hit-test tick
    ///
    /// Only the first candidate is used. With a candidate, the template and
    /// marker both take its pose and the marker is shown; without one, the
    /// cached sample is cleared and the marker hidden. The template is hidden
    /// either way.
    pub fn on_hit_test_update<S: SceneTarget + ?Sized>(
        &mut self,
        scene: &mut S,
        samples: &[HitTestResult],
    ) -> Result<()> {
        self.current_hit_test = samples.first().copied();

        match samples.current_pose() {
            Some(pose) => {
                scene.apply_pose(self.template, &pose)?;
                scene.apply_pose(self.marker, &pose)?;
                scene.set_visible(self.template, false)?;
                scene.set_visible(self.marker, true)?;
                log::trace!(
                    "Hit-test: {} candidate(s), using {:?}",
                    samples.len(),
                    pose.position
                );
            }
            None => {
                scene.set_visible(self.template, false)?;
                scene.set_visible(self.marker, false)?;
                log::trace!("Hit-test: no candidates");
            }
        }

        Ok(())
    }

    /// Places a clone of the template at the cached hit-test pose
    ///
    /// Requires a live sample and a running session; otherwise nothing changes
    /// and the returned outcome says which guard stopped it. The sample used is
    /// the one cached by the last [`on_hit_test_update`] call, which may be a
    /// frame behind what the marker shows.
    ///
    /// [`on_hit_test_update`]: PlacementController::on_hit_test_update
    pub fn on_place_command<S, X>(&mut self, scene: &mut S, session: &X) -> Result<PlaceOutcome>
    where
        S: SceneTarget + ?Sized,
        X: SessionState + ?Sized,
    {
        let Some(pose) = self.current_hit_test.current_pose() else {
            log::trace!("Place ignored: no hit-test");
            return Ok(PlaceOutcome::NoHitTest);
        };
        if !session.is_in_xr() {
            log::trace!("Place ignored: session is {}", session.xr_state());
            return Ok(PlaceOutcome::NotInXr);
        }

        let handle = scene.clone_object(self.template, CLONE_NAME)?;
        scene.set_visible(handle, true)?;
        scene.apply_pose(handle, &pose)?;

        self.placed.push(PlacedInstance {
            handle,
            pose,
            material: self.template_material.clone(),
        });

        log::debug!(
            "Placed {:?} at {:?} ({} placed)",
            handle,
            pose.position,
            self.placed.len()
        );

        Ok(PlaceOutcome::Placed(handle))
    }

    /// Switches to the other material and repaints the template and every
    /// placed instance with it
    pub fn on_toggle_color_command<S: SceneTarget + ?Sized>(&mut self, scene: &mut S) -> Result<()> {
        self.selected_material_index = (self.selected_material_index + 1) % MATERIAL_COUNT;
        let material = self.materials[self.selected_material_index].clone();

        scene.set_material(self.template, &material)?;
        self.template_material = material.clone();

        for instance in &mut self.placed {
            scene.set_material(instance.handle, &material)?;
            instance.material = material.clone();
        }

        log::debug!(
            "Material -> '{}' on {} object(s)",
            material,
            self.placed.len() + 1
        );

        Ok(())
    }

    pub fn current_hit_test(&self) -> Option<&HitTestResult> {
        self.current_hit_test.as_ref()
    }

    pub fn selected_material_index(&self) -> usize {
        self.selected_material_index
    }

    pub fn selected_material(&self) -> &MaterialId {
        &self.materials[self.selected_material_index]
    }

    pub fn materials(&self) -> &[MaterialId; MATERIAL_COUNT] {
        &self.materials
    }

    /// Material currently assigned to the template
    pub fn template_material(&self) -> &MaterialId {
        &self.template_material
    }

    pub fn template(&self) -> ObjectHandle {
        self.template
    }

    pub fn marker(&self) -> ObjectHandle {
        self.marker
    }

    /// Placed clones in placement order, excluding the template
    pub fn placed_instances(&self) -> &[PlacedInstance] {
        &self.placed
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Every object the material toggle repaints: template first, then clones
    pub fn instances(&self) -> Vec<ObjectHandle> {
        std::iter::once(self.template)
            .chain(self.placed.iter().map(|p| p.handle))
            .collect()
    }
}

impl PoseSource for PlacementController {
    fn current_pose(&self) -> Option<Pose> {
        self.current_hit_test.current_pose()
    }
}
