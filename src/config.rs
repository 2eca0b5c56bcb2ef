//! Application configuration
//!
//! [`ArConfig::default`] reproduces the stock demo: an `immersive-ar` session,
//! a hidden 10x10 ground, a 0.2 cube lifted by 0.1, a torus marker, a red and a
//! green emissive material, and the hit-test, anchor, background-remover and
//! DOM-overlay features.

use crate::error::{ArError, Result};
use crate::gfx::resources::material::{Material, GREEN, RED};
use crate::placement::MATERIAL_COUNT;
use crate::xr::{FeatureName, FeatureRequest, SessionMode};

/// Element id the DOM overlay is attached to by default
pub const DEFAULT_OVERLAY_ELEMENT: &str = "dom-overlay-container";

/// Settings for [`ArApp`](crate::app::ArApp)
#[derive(Debug, Clone)]
pub struct ArConfig {
    pub session_mode: SessionMode,
    /// Width and depth of the invisible ground plane
    pub ground_size: (f32, f32),
    /// Edge length of the template cube
    pub model_size: f32,
    /// Initial upward offset of the template
    pub model_lift: f32,
    pub marker_diameter: f32,
    pub marker_thickness: f32,
    /// The two materials the colour toggle alternates between
    pub materials: [Material; MATERIAL_COUNT],
    pub features: Vec<FeatureRequest>,
}

impl Default for ArConfig {
    fn default() -> Self {
        Self {
            session_mode: SessionMode::ImmersiveAr,
            ground_size: (10.0, 10.0),
            model_size: 0.2,
            model_lift: 0.1,
            marker_diameter: 0.15,
            marker_thickness: 0.05,
            materials: [
                Material::emissive("mat1", RED),
                Material::emissive("mat2", GREEN),
            ],
            features: vec![
                FeatureRequest::new(FeatureName::HitTest, "latest"),
                FeatureRequest::new(FeatureName::Anchors, "latest"),
                FeatureRequest::new(FeatureName::BackgroundRemover, "latest"),
                FeatureRequest::new(FeatureName::DomOverlay, "1")
                    .with_element(DEFAULT_OVERLAY_ELEMENT),
            ],
        }
    }
}

impl ArConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Set the requested session mode
    pub fn with_session_mode(mut self, mode: SessionMode) -> Self {
        self.session_mode = mode;
        self
    }

    /// Builder pattern: Set template cube size and lift
    pub fn with_model(mut self, size: f32, lift: f32) -> Self {
        self.model_size = size;
        self.model_lift = lift;
        self
    }

    /// Builder pattern: Set marker torus dimensions
    pub fn with_marker(mut self, diameter: f32, thickness: f32) -> Self {
        self.marker_diameter = diameter;
        self.marker_thickness = thickness;
        self
    }

    /// Builder pattern: Set the two toggle materials
    pub fn with_materials(mut self, first: Material, second: Material) -> Self {
        self.materials = [first, second];
        self
    }

    /// Builder pattern: Replace the feature list
    pub fn with_features(mut self, features: Vec<FeatureRequest>) -> Self {
        self.features = features;
        self
    }

    /// Checks dimensions are positive and material names are distinct
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("ground width", self.ground_size.0),
            ("ground depth", self.ground_size.1),
            ("model size", self.model_size),
            ("marker diameter", self.marker_diameter),
            ("marker thickness", self.marker_thickness),
        ];
        for (what, value) in dims {
            if !(value.is_finite() && value > 0.0) {
                return Err(ArError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    what, value
                )));
            }
        }

        if !self.model_lift.is_finite() {
            return Err(ArError::InvalidConfig("model lift must be finite".to_string()));
        }

        if self.materials[0].name == self.materials[1].name {
            return Err(ArError::InvalidConfig(format!(
                "toggle materials must have distinct names, both are '{}'",
                self.materials[0].name
            )));
        }

        if !self.features.iter().any(|f| f.name == FeatureName::HitTest) {
            log::warn!("Hit-test feature not requested; placement will never trigger");
        }

        Ok(())
    }
}
