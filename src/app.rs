use std::collections::VecDeque;

use cgmath::Vector3;

use crate::config::ArConfig;
use crate::error::Result;
use crate::gfx::{
    pose::Pose,
    scene::{Object, ObjectHandle, Scene, Shape},
};
use crate::placement::PlacementController;
use crate::ui::OverlayState;
use crate::xr::{FeaturesManager, HeadlessSession, HitTestResult};

/// Inputs delivered to the application, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Per-frame hit-test candidates, possibly empty
    HitTest(Vec<HitTestResult>),
    /// The place button was pressed
    PlaceClicked,
    /// The colour switch was clicked
    ToggleColorClicked,
    /// The user entered the immersive session
    EnterXr,
    /// The session ended
    ExitXr,
}

/// What [`ArApp::start`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartStatus {
    Started,
    AlreadyStarted,
}

/// Application shell owning the scene, session and placement controller
///
/// Construction is cheap and does nothing observable. [`ArApp::start`] runs
/// the one-time setup; events are queued with [`ArApp::push_event`] and
/// dispatched one at a time by [`ArApp::run_pending`].
pub struct ArApp {
    config: ArConfig,
    scene: Scene,
    session: HeadlessSession,
    features: FeaturesManager,
    overlay: OverlayState,
    controller: Option<PlacementController>,
    ground: Option<ObjectHandle>,
    pending: VecDeque<AppEvent>,
}

impl ArApp {
    /// Create an application with a default headless session
    pub fn new(config: ArConfig) -> Self {
        Self::with_session(config, HeadlessSession::new())
    }

    /// Create an application around an existing session
    pub fn with_session(config: ArConfig, session: HeadlessSession) -> Self {
        Self {
            config,
            scene: Scene::new(),
            session,
            features: FeaturesManager::new(),
            overlay: OverlayState::new(),
            controller: None,
            ground: None,
            pending: VecDeque::new(),
        }
    }

    /// Runs the one-time setup
    ///
    /// Creates the XR experience, builds the ground, template and marker,
    /// registers both materials, enables the configured features and attaches
    /// the placement controller. Calling it again after a successful start
    /// changes nothing.
    pub fn start(&mut self) -> Result<StartStatus> {
        if self.controller.is_some() {
            log::debug!("start() called on a running app; ignoring");
            return Ok(StartStatus::AlreadyStarted);
        }

        self.config.validate()?;

        log::info!("Creating XR experience ({})", self.config.session_mode);
        pollster::block_on(self.session.create_experience(self.config.session_mode))?;

        let (width, depth) = self.config.ground_size;
        let ground = self.scene.add_object(
            Object::new("ground", Shape::Ground { width, height: depth }).hidden(),
        );

        let template = self.scene.add_object(
            Object::new("box", Shape::cube(self.config.model_size)).with_pose(
                Pose::from_position(Vector3::new(0.0, self.config.model_lift, 0.0)),
            ),
        );

        let marker = self.scene.add_object(
            Object::new(
                "marker",
                Shape::Torus {
                    diameter: self.config.marker_diameter,
                    thickness: self.config.marker_thickness,
                },
            )
            .hidden(),
        );

        let [first, second] = self.config.materials.clone();
        let materials = [
            self.scene.add_material(first),
            self.scene.add_material(second),
        ];

        for request in &self.config.features {
            self.features.enable_feature(request.clone());
        }

        let controller = PlacementController::attach(&mut self.scene, template, marker, materials)?;

        self.ground = Some(ground);
        self.controller = Some(controller);

        let stats = self.scene.get_statistics();
        log::info!(
            "AR app started: {} objects, {} materials, features {:?}",
            stats.object_count,
            stats.material_count,
            self.features.enabled_features()
        );

        Ok(StartStatus::Started)
    }

    pub fn is_started(&self) -> bool {
        self.controller.is_some()
    }

    /// Queues an event for the next [`ArApp::run_pending`]
    pub fn push_event(&mut self, event: AppEvent) {
        self.pending.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Dispatches queued events in FIFO order
    ///
    /// Stops at the first error, leaving later events queued.
    ///
    /// # Returns
    /// Number of events dispatched
    pub fn run_pending(&mut self) -> Result<usize> {
        let mut dispatched = 0;
        while let Some(event) = self.pending.pop_front() {
            self.handle_event(event)?;
            dispatched += 1;
        }
        Ok(dispatched)
    }

    /// Dispatches a single event immediately
    ///
    /// Events arriving before [`ArApp::start`] are dropped.
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        let Some(controller) = self.controller.as_mut() else {
            log::warn!("Dropping {:?}: app not started", event);
            return Ok(());
        };

        match event {
            AppEvent::HitTest(samples) => {
                controller.on_hit_test_update(&mut self.scene, &samples)?;
            }
            AppEvent::PlaceClicked => {
                controller.on_place_command(&mut self.scene, &self.session)?;
            }
            AppEvent::ToggleColorClicked => {
                controller.on_toggle_color_command(&mut self.scene)?;
                self.overlay.toggle();
            }
            AppEvent::EnterXr => self.session.enter()?,
            AppEvent::ExitXr => self.session.exit()?,
        }

        Ok(())
    }

    pub fn config(&self) -> &ArConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn session(&self) -> &HeadlessSession {
        &self.session
    }

    pub fn features(&self) -> &FeaturesManager {
        &self.features
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    /// Placement controller, available once started
    pub fn controller(&self) -> Option<&PlacementController> {
        self.controller.as_ref()
    }

    /// Invisible ground plane, available once started
    pub fn ground(&self) -> Option<ObjectHandle> {
        self.ground
    }
}

impl Default for ArApp {
    fn default() -> Self {
        Self::new(ArConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArError;
    use crate::xr::{FeatureName, SessionMode, XrState};

    fn started() -> ArApp {
        let mut app = ArApp::default();
        assert_eq!(app.start().unwrap(), StartStatus::Started);
        app
    }

    fn hit_at(x: f32, z: f32) -> AppEvent {
        AppEvent::HitTest(vec![HitTestResult::at(Vector3::new(x, 0.0, z))])
    }

    #[test]
    fn test_start_builds_scene() {
        let app = started();
        let scene = app.scene();
        let controller = app.controller().unwrap();

        assert_eq!(scene.get_object_names(), vec!["ground", "box", "marker"]);
        assert!(!scene.get_object(app.ground().unwrap()).unwrap().visible);
        assert!(!scene.get_object(controller.template()).unwrap().visible);
        assert!(!scene.get_object(controller.marker()).unwrap().visible);
        assert_eq!(
            scene.get_object(controller.template()).unwrap().pose.position,
            Vector3::new(0.0, 0.1, 0.0)
        );
        assert_eq!(controller.template_material(), "mat1");
        assert_eq!(app.session().mode(), Some(SessionMode::ImmersiveAr));
        assert_eq!(app.session().state(), XrState::NotInXr);
    }

    #[test]
    fn test_start_enables_configured_features() {
        let app = started();
        for name in [
            FeatureName::HitTest,
            FeatureName::Anchors,
            FeatureName::BackgroundRemover,
            FeatureName::DomOverlay,
        ] {
            assert!(app.features().is_enabled(name), "{} not enabled", name);
        }
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut app = started();
        let objects = app.scene().get_object_count();

        assert_eq!(app.start().unwrap(), StartStatus::AlreadyStarted);
        assert_eq!(app.start().unwrap(), StartStatus::AlreadyStarted);
        assert_eq!(app.scene().get_object_count(), objects);
    }

    #[test]
    fn test_unsupported_mode_fails_start() {
        let config = ArConfig::default().with_session_mode(SessionMode::ImmersiveVr);
        let mut app = ArApp::new(config);

        let err = app.start().unwrap_err();
        assert_eq!(err, ArError::UnsupportedSessionMode(SessionMode::ImmersiveVr));
        assert!(!app.is_started());
        assert_eq!(app.scene().get_object_count(), 0);
    }

    #[test]
    fn test_invalid_config_fails_start() {
        let mut app = ArApp::new(ArConfig::default().with_model(-1.0, 0.0));
        assert!(matches!(app.start(), Err(ArError::InvalidConfig(_))));
        assert!(!app.is_started());
    }

    #[test]
    fn test_events_before_start_are_dropped() {
        let mut app = ArApp::default();
        app.push_event(hit_at(0.0, 0.0));
        app.push_event(AppEvent::PlaceClicked);

        assert_eq!(app.run_pending().unwrap(), 2);
        assert_eq!(app.pending_events(), 0);
        assert_eq!(app.scene().get_object_count(), 0);
    }

    #[test]
    fn test_place_requires_entered_session() {
        let mut app = started();
        app.push_event(hit_at(1.0, 1.0));
        app.push_event(AppEvent::PlaceClicked);
        app.run_pending().unwrap();
        assert_eq!(app.controller().unwrap().placed_count(), 0);

        app.push_event(AppEvent::EnterXr);
        app.push_event(AppEvent::PlaceClicked);
        app.run_pending().unwrap();
        assert_eq!(app.controller().unwrap().placed_count(), 1);

        app.push_event(AppEvent::ExitXr);
        app.push_event(AppEvent::PlaceClicked);
        app.run_pending().unwrap();
        assert_eq!(app.controller().unwrap().placed_count(), 1);
    }

    #[test]
    fn test_events_dispatch_in_order() {
        let mut app = started();
        app.handle_event(AppEvent::EnterXr).unwrap();

        // place lands before the hit-test that would enable it
        app.push_event(AppEvent::PlaceClicked);
        app.push_event(hit_at(0.0, -1.0));
        assert_eq!(app.run_pending().unwrap(), 2);
        assert_eq!(app.controller().unwrap().placed_count(), 0);

        app.push_event(AppEvent::PlaceClicked);
        app.run_pending().unwrap();
        assert_eq!(app.controller().unwrap().placed_count(), 1);
    }

    #[test]
    fn test_toggle_updates_overlay_and_materials() {
        let mut app = started();
        app.handle_event(AppEvent::EnterXr).unwrap();
        app.handle_event(hit_at(0.5, 0.5)).unwrap();
        app.handle_event(AppEvent::PlaceClicked).unwrap();

        assert_eq!(app.overlay().color_label(), "color green");
        app.handle_event(AppEvent::ToggleColorClicked).unwrap();
        assert_eq!(app.overlay().color_label(), "color red");

        let controller = app.controller().unwrap();
        for handle in controller.instances() {
            let object = app.scene().get_object(handle).unwrap();
            assert_eq!(object.get_material_id().unwrap(), "mat2");
        }
    }

    #[test]
    fn test_session_error_stops_queue() {
        let mut app = started();
        app.push_event(AppEvent::ExitXr);
        app.push_event(AppEvent::ToggleColorClicked);

        assert!(matches!(
            app.run_pending(),
            Err(ArError::InvalidSessionTransition { .. })
        ));
        assert_eq!(app.pending_events(), 1);
    }
}
