//! Engine feature requests
//!
//! The XR engine exposes optional features (hit-testing, anchors, background
//! removal, DOM overlay) that an application switches on after the experience
//! is created. The feature implementations live in the engine; this manager
//! records which were requested and with which version.

use std::collections::BTreeMap;
use std::fmt;

/// Features an application can ask the engine to enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureName {
    HitTest,
    Anchors,
    BackgroundRemover,
    DomOverlay,
}

impl FeatureName {
    /// Engine identifier of the feature
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureName::HitTest => "xr-hit-test",
            FeatureName::Anchors => "xr-anchor-system",
            FeatureName::BackgroundRemover => "xr-background-remover",
            FeatureName::DomOverlay => "xr-dom-overlay",
        }
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature to enable, its version and optional target element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRequest {
    pub name: FeatureName,
    pub version: String,
    pub element: Option<String>,
}

impl FeatureRequest {
    pub fn new(name: FeatureName, version: impl Into<String>) -> Self {
        Self {
            name,
            version: version.into(),
            element: None,
        }
    }

    /// Builder pattern: attach the feature to a DOM element id
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

/// Records enabled features, one entry per feature name
#[derive(Debug, Default)]
pub struct FeaturesManager {
    enabled: BTreeMap<FeatureName, FeatureRequest>,
}

impl FeaturesManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables a feature, replacing an earlier request for the same name
    ///
    /// # Returns
    /// The request that was replaced, if any
    pub fn enable_feature(&mut self, request: FeatureRequest) -> Option<FeatureRequest> {
        log::info!("Enabling feature {} ({})", request.name, request.version);
        self.enabled.insert(request.name, request)
    }

    pub fn disable_feature(&mut self, name: FeatureName) -> Option<FeatureRequest> {
        self.enabled.remove(&name)
    }

    pub fn is_enabled(&self, name: FeatureName) -> bool {
        self.enabled.contains_key(&name)
    }

    pub fn get(&self, name: FeatureName) -> Option<&FeatureRequest> {
        self.enabled.get(&name)
    }

    /// Enabled feature names in a stable order
    pub fn enabled_features(&self) -> Vec<FeatureName> {
        self.enabled.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_and_query() {
        let mut manager = FeaturesManager::new();
        assert!(manager.enable_feature(FeatureRequest::new(FeatureName::HitTest, "latest")).is_none());

        assert!(manager.is_enabled(FeatureName::HitTest));
        assert!(!manager.is_enabled(FeatureName::Anchors));
        assert_eq!(manager.get(FeatureName::HitTest).unwrap().version, "latest");
    }

    #[test]
    fn test_re_enable_replaces_version() {
        let mut manager = FeaturesManager::new();
        manager.enable_feature(FeatureRequest::new(FeatureName::DomOverlay, "1"));
        let previous = manager
            .enable_feature(
                FeatureRequest::new(FeatureName::DomOverlay, "2").with_element("overlay"),
            )
            .unwrap();

        assert_eq!(previous.version, "1");
        let current = manager.get(FeatureName::DomOverlay).unwrap();
        assert_eq!(current.version, "2");
        assert_eq!(current.element.as_deref(), Some("overlay"));
        assert_eq!(manager.enabled_features(), vec![FeatureName::DomOverlay]);
    }

    #[test]
    fn test_disable() {
        let mut manager = FeaturesManager::new();
        manager.enable_feature(FeatureRequest::new(FeatureName::Anchors, "latest"));
        assert!(manager.disable_feature(FeatureName::Anchors).is_some());
        assert!(manager.enabled_features().is_empty());
    }

    #[test]
    fn test_engine_identifiers() {
        assert_eq!(FeatureName::HitTest.to_string(), "xr-hit-test");
        assert_eq!(FeatureName::BackgroundRemover.as_str(), "xr-background-remover");
    }
}
