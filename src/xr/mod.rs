//! # XR Module
//!
//! Session state, hit-test samples and feature requests: the parts of an XR
//! runtime the placement controller observes. Tracking, ray casting and session
//! negotiation stay with the platform.

pub mod features;
pub mod hit_test;
pub mod session;

pub use features::{FeatureName, FeatureRequest, FeaturesManager};
pub use hit_test::HitTestResult;
pub use session::{HeadlessSession, SessionMode, XrState};
