use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_panel_height() {
    let state = UiState::default();
    assert_eq!(state.prompt_panel_height, PANEL_DEFAULT_HEIGHT);
    assert_eq!(state.prompt_panel_height, 250.0);
}

#[test]
fn default_height_sits_inside_the_drag_range() {
    assert!(PANEL_MIN_HEIGHT < PANEL_DEFAULT_HEIGHT);
    assert!(PANEL_DEFAULT_HEIGHT < PANEL_MAX_HEIGHT);
}

// =============================================================
// Height clamping
// =============================================================

#[test]
fn clamp_passes_in_range_heights_through() {
    assert_eq!(clamp_panel_height(300.0), 300.0);
    assert_eq!(clamp_panel_height(150.0), 150.0);
    assert_eq!(clamp_panel_height(600.0), 600.0);
}

#[test]
fn clamp_pins_out_of_range_heights_to_the_bounds() {
    assert_eq!(clamp_panel_height(100.0), 150.0);
    assert_eq!(clamp_panel_height(700.0), 600.0);
}

// =============================================================
// Drag resolution
// =============================================================

#[test]
fn dragging_upward_grows_the_panel() {
    assert_eq!(resolve_drag_height(250.0, 500.0, 400.0), 350.0);
}

#[test]
fn dragging_downward_shrinks_the_panel() {
    assert_eq!(resolve_drag_height(250.0, 400.0, 450.0), 200.0);
}

#[test]
fn dragging_far_above_the_range_clamps_to_max() {
    // 250 + (500 - 50) would be 700.
    assert_eq!(resolve_drag_height(250.0, 500.0, 50.0), 600.0);
}

#[test]
fn dragging_far_below_the_range_clamps_to_min() {
    // 250 + (300 - 500) would be 50.
    assert_eq!(resolve_drag_height(250.0, 300.0, 500.0), 150.0);
}
