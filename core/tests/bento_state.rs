use bento_core::grid::{WEIGHT_MAX, WEIGHT_MIN};
use bento_core::{
    track_weight, BentoAction, BentoConfig, BentoState, FocusState, GridRect, GridVariant,
};

fn desktop_state() -> BentoState {
    BentoState::new(&BentoConfig::default(), 1280.0)
}

fn mobile_state() -> BentoState {
    BentoState::new(&BentoConfig::default(), 600.0)
}

fn move_to(state: &mut BentoState, x: f32, y: f32) -> bool {
    state.apply(&BentoAction::PointerMove {
        client_x: x,
        client_y: y,
        container: GridRect::new(0.0, 0.0, 1200.0, 900.0),
    })
}

#[test]
fn weight_stays_clamped_for_any_distance() {
    let mut distance = 0.0f32;
    while distance < 10_000.0 {
        let weight = track_weight(distance);
        assert!((WEIGHT_MIN..=WEIGHT_MAX).contains(&weight), "{distance} -> {weight}");
        distance += 7.5;
    }
    assert_eq!(track_weight(f32::MAX), WEIGHT_MIN);
    assert_eq!(track_weight(-50.0), WEIGHT_MAX);
}

#[test]
fn pointer_at_first_zone_center() {
    let mut state = desktop_state();
    assert!(move_to(&mut state, 150.0, 450.0));
    assert_eq!(state.weights.columns, vec![1.4, 0.9, 0.9, 0.9]);
    assert_eq!(state.weights.rows.len(), 6);
}

#[test]
fn resize_into_mobile_clears_desktop_state() {
    let mut state = BentoState::new(&BentoConfig::default(), 1024.0);
    state.apply(&BentoAction::PointerEnter { cell: 3, now_ms: 0.0 });
    move_to(&mut state, 150.0, 75.0);
    assert!(state.apply(&BentoAction::Resize { viewport_width: 600.0 }));
    assert!(state.is_mobile);
    assert!(!state.adaptive_enabled);
    assert_eq!(state.focus, FocusState::Idle);
    assert!(state.burst.is_none());
    assert!(state.weights.is_neutral());
}

#[test]
fn resize_within_mode_changes_nothing() {
    let mut state = desktop_state();
    assert!(!state.apply(&BentoAction::Resize { viewport_width: 900.0 }));
    assert!(!state.apply(&BentoAction::Resize { viewport_width: 768.0 }));
    assert!(state.apply(&BentoAction::Resize { viewport_width: 767.0 }));
}

#[test]
fn returning_to_desktop_keeps_adaptive_off_until_toggled() {
    let mut state = mobile_state();
    state.apply(&BentoAction::Tap { cell: 1, now_ms: 0.0 });
    assert!(state.apply(&BentoAction::Resize { viewport_width: 1200.0 }));
    assert!(!state.is_mobile);
    assert_eq!(state.focus, FocusState::Idle);
    assert!(!state.adaptive_enabled);
    assert!(!move_to(&mut state, 150.0, 75.0));
    assert!(state.apply(&BentoAction::ToggleAdaptive));
    assert!(move_to(&mut state, 150.0, 75.0));
}

#[test]
fn only_one_cell_focused_on_desktop() {
    let mut state = desktop_state();
    state.apply(&BentoAction::PointerEnter { cell: 0, now_ms: 0.0 });
    state.apply(&BentoAction::PointerEnter { cell: 4, now_ms: 5.0 });
    assert_eq!(state.focus, FocusState::Focused(4));
    assert_eq!(state.burst.map(|burst| burst.cell), Some(4));
    // stale leave from the previous cell
    assert!(!state.apply(&BentoAction::PointerLeave { cell: 0 }));
    assert_eq!(state.focus, FocusState::Focused(4));
}

#[test]
fn tap_toggles_zoom_on_mobile() {
    let mut state = mobile_state();
    assert!(state.apply(&BentoAction::Tap { cell: 2, now_ms: 0.0 }));
    assert_eq!(state.focus, FocusState::Zoomed(2));
    assert!(state.apply(&BentoAction::Tap { cell: 5, now_ms: 1.0 }));
    assert_eq!(state.focus, FocusState::Zoomed(5));
    assert!(state.apply(&BentoAction::Tap { cell: 5, now_ms: 2.0 }));
    assert_eq!(state.focus, FocusState::Idle);
    assert!(state.burst.is_none());
}

#[test]
fn events_for_the_other_mode_are_ignored() {
    let mut desktop = desktop_state();
    assert!(!desktop.apply(&BentoAction::Tap { cell: 0, now_ms: 0.0 }));
    let mut mobile = mobile_state();
    assert!(!mobile.apply(&BentoAction::PointerEnter { cell: 0, now_ms: 0.0 }));
    assert!(!move_to(&mut mobile, 150.0, 75.0));
    assert_eq!(mobile.focus, FocusState::Idle);
}

#[test]
fn unknown_cells_are_ignored() {
    let mut state = desktop_state();
    assert!(!state.apply(&BentoAction::PointerEnter { cell: 8, now_ms: 0.0 }));
    let mut mobile = mobile_state();
    assert!(!mobile.apply(&BentoAction::Tap { cell: 99, now_ms: 0.0 }));
}

#[test]
fn toggling_off_resets_weights() {
    let mut state = desktop_state();
    move_to(&mut state, 1050.0, 825.0);
    assert!(!state.weights.is_neutral());
    assert!(state.apply(&BentoAction::ToggleAdaptive));
    assert!(!state.adaptive_enabled);
    assert!(state.weights.is_neutral());
    assert!(!move_to(&mut state, 150.0, 75.0));
    assert!(state.weights.is_neutral());
}

#[test]
fn compact_variant_uses_three_by_three_zones() {
    let config = BentoConfig {
        variant: GridVariant::Compact,
        adaptive: true,
    };
    let mut state = BentoState::new(&config, 1280.0);
    assert!(state.apply(&BentoAction::PointerMove {
        client_x: 450.0,
        client_y: 150.0,
        container: GridRect::new(0.0, 0.0, 900.0, 900.0),
    }));
    assert_eq!(state.weights.columns, vec![0.9, 1.4, 0.9]);
    assert_eq!(state.weights.rows, vec![1.4, 0.9, 0.9]);
}

#[test]
fn adaptive_disabled_by_config() {
    let config = BentoConfig {
        variant: GridVariant::Wide,
        adaptive: false,
    };
    let mut state = BentoState::new(&config, 1280.0);
    assert!(!move_to(&mut state, 150.0, 75.0));
    assert!(state.apply(&BentoAction::SetAdaptive { enabled: true }));
    assert!(move_to(&mut state, 150.0, 75.0));
}
