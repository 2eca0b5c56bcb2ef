//! # User Interface Module
//!
//! State behind the DOM overlay shown during the AR session: a "Place Model"
//! button and a colour switch with a text label. Rendering the overlay is the
//! host page's job; this module only holds what it displays.
//!
//! The switch's checked flag is tracked separately from the controller's
//! material index, so the label reads `color green` while the first (red)
//! material is active and flips with every toggle.

/// Caption of the place button
pub const PLACE_BUTTON_LABEL: &str = "Place Model";

/// Static text shown above the controls
pub const OVERLAY_HEADING: &str = "dom-overlay XR (part of \"immersive-ar\" experience)";

/// Overlay widget state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub color_checked: bool,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the colour switch
    pub fn toggle(&mut self) {
        self.color_checked = !self.color_checked;
    }

    /// Label next to the colour switch
    pub fn color_label(&self) -> &'static str {
        if self.color_checked {
            "color red"
        } else {
            "color green"
        }
    }
}
