use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use flexdom::animation::collect_view_ids;
use flexdom::{
    AnimatedProperty, AnimationState, Color, Easing, PropertyValue, TransitionConfig, View,
};

// ============================================================================
// Easing Function Tests
// ============================================================================

#[test]
fn test_easing_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{easing:?} not monotonic at t={t}");
            prev = val;
        }
    }
}

#[test]
fn test_easing_shapes() {
    // EaseIn starts slow, EaseOut starts fast.
    assert!(Easing::EaseIn.apply(0.25) < 0.25);
    assert!(Easing::EaseOut.apply(0.25) > 0.25);
}

// ============================================================================
// AnimationState Tests
// ============================================================================

const LONG: Duration = Duration::from_secs(60);

#[test]
fn test_state_starts_empty() {
    let state = AnimationState::new();
    assert!(!state.has_active_transitions());
    assert!(!state.is_animating("anything"));
    assert_eq!(state.offset("anything"), (0, 0));
}

#[test]
fn test_begin_activates_transition() {
    let mut state = AnimationState::new();
    state.begin(
        "body",
        AnimatedProperty::OffsetY,
        PropertyValue::Offset(20),
        PropertyValue::Offset(0),
        TransitionConfig::new(LONG, Easing::Linear),
    );

    assert!(state.has_active_transitions());
    assert!(state.is_animating("body"));
    assert!(!state.is_animating("other"));
}

#[test]
fn test_interpolated_value_stays_in_range() {
    let mut state = AnimationState::new();
    state.begin(
        "body",
        AnimatedProperty::OffsetY,
        PropertyValue::Offset(20),
        PropertyValue::Offset(0),
        TransitionConfig::new(LONG, Easing::Linear),
    );

    let Some(PropertyValue::Offset(v)) =
        state.get_interpolated("body", AnimatedProperty::OffsetY)
    else {
        panic!("expected an offset value");
    };
    assert!((0..=20).contains(&v), "interpolated value {v} out of range");
}

#[test]
fn test_constant_transition_holds_value() {
    // from == to pins the interpolated value regardless of elapsed time.
    let mut state = AnimationState::new();
    state.begin(
        "body",
        AnimatedProperty::OffsetY,
        PropertyValue::Offset(5),
        PropertyValue::Offset(5),
        TransitionConfig::new(LONG, Easing::Linear),
    );

    assert_eq!(state.offset("body"), (0, 5));
}

#[test]
fn test_update_prunes_finished_transitions() {
    let mut state = AnimationState::new();
    state.begin(
        "body",
        AnimatedProperty::OffsetY,
        PropertyValue::Offset(10),
        PropertyValue::Offset(0),
        TransitionConfig::new(Duration::from_millis(5), Easing::Linear),
    );
    assert!(state.is_animating("body"));

    sleep(Duration::from_millis(20));
    state.update();

    assert!(!state.is_animating("body"));
    assert_eq!(state.offset("body"), (0, 0));
}

#[test]
fn test_zero_duration_is_noop() {
    let mut state = AnimationState::new();
    state.begin(
        "body",
        AnimatedProperty::OffsetY,
        PropertyValue::Offset(10),
        PropertyValue::Offset(0),
        TransitionConfig::new(Duration::ZERO, Easing::Linear),
    );

    assert!(!state.has_active_transitions());
}

#[test]
fn test_reduced_motion_skips_transitions() {
    let mut state = AnimationState::new();
    state.set_reduced_motion(true);
    state.begin(
        "body",
        AnimatedProperty::OffsetY,
        PropertyValue::Offset(10),
        PropertyValue::Offset(0),
        TransitionConfig::new(LONG, Easing::Linear),
    );

    assert!(!state.has_active_transitions());
}

#[test]
fn test_color_transition_interpolates() {
    let mut state = AnimationState::new();
    let from = Color::oklcha(0.25, 0.0, 0.0, 0.0);
    let to = Color::oklcha(0.25, 0.0, 0.0, 1.0);
    state.begin(
        "backdrop",
        AnimatedProperty::Background,
        PropertyValue::Color(from),
        PropertyValue::Color(to),
        TransitionConfig::new(LONG, Easing::Linear),
    );

    let Some(PropertyValue::Color(c)) =
        state.get_interpolated("backdrop", AnimatedProperty::Background)
    else {
        panic!("expected a color value");
    };
    assert!((0.0..=1.0).contains(&c.alpha()));
}

#[test]
fn test_cleanup_drops_unknown_ids() {
    let mut state = AnimationState::new();
    state.begin(
        "gone",
        AnimatedProperty::OffsetY,
        PropertyValue::Offset(10),
        PropertyValue::Offset(0),
        TransitionConfig::new(LONG, Easing::Linear),
    );

    let keep: HashSet<String> = HashSet::new();
    state.cleanup(&keep);

    assert!(!state.has_active_transitions());
}

// ============================================================================
// collect_view_ids Tests
// ============================================================================

#[test]
fn test_collect_view_ids_nested() {
    let root = View::column()
        .id("parent")
        .child(View::label("a").id("child1"))
        .child(View::row().id("row").child(View::label("b").id("deep")));

    let ids = collect_view_ids(&root);

    for id in ["parent", "child1", "row", "deep"] {
        assert!(ids.contains(id), "missing {id}");
    }
    assert_eq!(ids.len(), 4);
}
