//! Local UI chrome state (panel sizing).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and generation
//! state so layout controls can evolve independently of wire data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Smallest height the prompt panel can be dragged to.
pub const PANEL_MIN_HEIGHT: f64 = 150.0;
/// Largest height the prompt panel can be dragged to.
pub const PANEL_MAX_HEIGHT: f64 = 600.0;
/// Prompt panel height before the user resizes anything.
pub const PANEL_DEFAULT_HEIGHT: f64 = 250.0;

/// UI state for dashboard chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Current height of the bottom prompt panel in CSS pixels.
    pub prompt_panel_height: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self { prompt_panel_height: PANEL_DEFAULT_HEIGHT }
    }
}

/// Clamp a requested panel height into the allowed range.
pub fn clamp_panel_height(height: f64) -> f64 {
    height.clamp(PANEL_MIN_HEIGHT, PANEL_MAX_HEIGHT)
}

/// Height after dragging the handle from `start_y` to `current_y`.
///
/// The panel sits at the bottom of the page, so dragging upward grows it.
pub fn resolve_drag_height(start_height: f64, start_y: f64, current_y: f64) -> f64 {
    clamp_panel_height(start_height + (start_y - current_y))
}
