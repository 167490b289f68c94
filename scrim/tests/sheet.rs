use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scrim::{Container, Content, Operation, OpGroup, OverlayContext, OverlayKind, Sheet, State};

fn quiet_ctx() -> OverlayContext {
    // Reduced motion makes transitions settle on the next pump, so tests
    // never wait on wall-clock animation time.
    let mut ctx = OverlayContext::new();
    ctx.animation_mut().set_reduced_motion(true);
    ctx
}

fn two_item_content() -> Content {
    Content::system_with_others(
        vec![Operation::new("Save"), Operation::new("Duplicate")],
        vec![Operation::new("Cancel")],
    )
}

// ============================================================================
// Show
// ============================================================================

#[test]
fn test_show_binds_container() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |_| {});

    let bound = sheet.borrow().container().expect("container still alive");
    assert!(Rc::ptr_eq(&bound, &container));
    assert_eq!(sheet.borrow().state(), State::Shown);
    assert_eq!(ctx.active_count(OverlayKind::Sheet), 1);
    assert_eq!(container.borrow().overlay_count(), 1, "background attached");
}

#[test]
fn test_configure_runs_before_body_is_built() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |s| {
        s.refresh_content(two_item_content().default_appearance());
    });

    let sheet = sheet.borrow();
    let body_id = sheet.body_id().expect("body built").to_string();
    let body = sheet.background().find(&body_id).expect("body in background");
    assert_eq!(
        body.content.children().len(),
        3,
        "two items and one other rendered as rows"
    );
}

#[test]
fn test_refresh_content_after_show_leaves_body_untouched() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |s| {
        s.refresh_content(two_item_content());
    });

    sheet.borrow_mut().refresh_content(Content::delay());

    let sheet = sheet.borrow();
    assert_eq!(sheet.content().items().len(), 2, "late refresh ignored");
    let body_id = sheet.body_id().unwrap().to_string();
    let body = sheet.background().find(&body_id).unwrap();
    assert_eq!(body.content.children().len(), 3);
}

#[test]
fn test_body_pinned_above_container_bottom() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |s| {
        s.refresh_content(two_item_content());
    });

    let body_id = sheet.borrow().body_id().unwrap().to_string();
    let rect = container.borrow().rect_of(&body_id).expect("body laid out");
    assert_eq!(rect.bottom(), 23, "one-cell bottom margin");
    assert_eq!(rect.width, 74, "container width minus the body inset");
}

// ============================================================================
// Entrance animation
// ============================================================================

#[test]
fn test_first_show_animates_body() {
    let mut ctx = OverlayContext::new();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |s| {
        s.refresh_content(two_item_content());
    });

    let body_id = sheet.borrow().body_id().unwrap().to_string();
    assert!(
        ctx.animation().is_animating(&body_id),
        "first presentation slides the body"
    );
}

#[test]
fn test_second_show_does_not_animate() {
    let mut ctx = OverlayContext::new();
    let container = Container::shared(80, 24);

    let first = Sheet::show(&mut ctx, &container, |_| {});
    let first_body = first.borrow().body_id().unwrap().to_string();

    // Let the entrance run out so only new transitions would be active.
    std::thread::sleep(std::time::Duration::from_millis(10));
    ctx.animation_mut().cleanup(&std::collections::HashSet::new());
    assert!(!ctx.animation().is_animating(&first_body));

    let second = Sheet::show(&mut ctx, &container, |s| {
        s.refresh_content(two_item_content());
    });

    let body_id = second.borrow().body_id().unwrap().to_string();
    assert!(
        !ctx.animation().is_animating(&body_id),
        "stacked presentation attaches without a transition"
    );
    assert_eq!(ctx.animation().offset(&body_id), (0, 0));
}

// ============================================================================
// Hide
// ============================================================================

#[test]
fn test_hide_detaches_and_deregisters() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |_| {});
    let background_id = sheet.borrow().background().id.clone();
    assert!(container.borrow().is_attached(&background_id));

    sheet.borrow_mut().hide(ctx.animation_mut());
    ctx.pump();

    assert!(ctx.is_empty());
    assert!(!container.borrow().is_attached(&background_id));
    assert_eq!(container.borrow().overlay_count(), 0);
    assert_eq!(sheet.borrow().state(), State::Hidden);
}

#[test]
fn test_hide_then_reports_success() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);
    let outcome = Rc::new(Cell::new(None));

    let sheet = Sheet::show(&mut ctx, &container, |_| {});
    {
        let outcome = Rc::clone(&outcome);
        sheet
            .borrow_mut()
            .hide_then(ctx.animation_mut(), move |ok| outcome.set(Some(ok)));
    }
    assert_eq!(outcome.get(), None, "completion waits for the transition");

    ctx.pump();
    assert_eq!(outcome.get(), Some(true));
}

#[test]
fn test_hide_with_dead_container_is_silent() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);
    let outcome = Rc::new(Cell::new(None));

    let sheet = Sheet::show(&mut ctx, &container, |_| {});
    drop(container);
    assert!(sheet.borrow().container().is_none());

    {
        let outcome = Rc::clone(&outcome);
        sheet
            .borrow_mut()
            .hide_then(ctx.animation_mut(), move |ok| outcome.set(Some(ok)));
    }
    ctx.pump();

    assert!(ctx.is_empty(), "sheet deregistered without a container");
    assert_eq!(outcome.get(), Some(false));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_runs_action_and_dismisses() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);
    let picks = Rc::new(Cell::new(0u32));

    let sheet = {
        let picks = Rc::clone(&picks);
        Sheet::show(&mut ctx, &container, move |s| {
            s.refresh_content(Content::system(vec![Operation::new("Save")
                .on_select(move || picks.set(picks.get() + 1))]));
        })
    };

    sheet
        .borrow_mut()
        .select(ctx.animation_mut(), OpGroup::Items, 0);
    ctx.pump();

    assert_eq!(picks.get(), 1, "action ran");
    assert!(ctx.is_empty(), "default wiring dismissed the sheet");
}

#[test]
fn test_select_out_of_range_is_ignored() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |s| {
        s.refresh_content(Content::system(vec![Operation::new("Save")]));
    });

    sheet
        .borrow_mut()
        .select(ctx.animation_mut(), OpGroup::Others, 0);
    sheet
        .borrow_mut()
        .select(ctx.animation_mut(), OpGroup::Items, 5);
    ctx.pump();

    assert_eq!(ctx.active_count(OverlayKind::Sheet), 1, "still shown");
}

#[test]
fn test_delay_content_requires_explicit_hide() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |s| {
        s.refresh_content(Content::delay());
    });

    // Nothing selectable, nothing auto-dismisses.
    sheet
        .borrow_mut()
        .select(ctx.animation_mut(), OpGroup::Items, 0);
    ctx.pump();
    assert_eq!(ctx.active_count(OverlayKind::Sheet), 1);

    sheet.borrow_mut().hide(ctx.animation_mut());
    ctx.pump();
    assert!(ctx.is_empty());
}

// ============================================================================
// Shared containers
// ============================================================================

#[test]
fn test_stacked_sheets_each_attach_a_layer() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let first = Sheet::show(&mut ctx, &container, |_| {});
    let second = Sheet::show(&mut ctx, &container, |_| {});

    assert_eq!(container.borrow().overlay_count(), 2);

    second.borrow_mut().hide(ctx.animation_mut());
    ctx.pump();

    assert_eq!(container.borrow().overlay_count(), 1);
    assert_eq!(first.borrow().state(), State::Shown);
}

// RefCell is part of the public surface here; make sure handles stay usable
// across pump calls without aliasing panics.
#[test]
fn test_handles_stay_usable_after_pump() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let sheet = Sheet::show(&mut ctx, &container, |_| {});
    ctx.pump();
    ctx.pump();

    assert_eq!(sheet.borrow().state(), State::Shown);
    let _ = RefCell::borrow(&sheet);
}
