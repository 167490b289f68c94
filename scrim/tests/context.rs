use scrim::{Container, OverlayContext, OverlayKind, OverlayNode, Sheet};

fn quiet_ctx() -> OverlayContext {
    let mut ctx = OverlayContext::new();
    ctx.animation_mut().set_reduced_motion(true);
    ctx
}

// ============================================================================
// Registry bookkeeping
// ============================================================================

#[test]
fn test_empty_context() {
    let ctx = OverlayContext::new();
    assert!(ctx.is_empty());
    assert_eq!(ctx.active_count(OverlayKind::Sheet), 0);
    assert!(ctx.nodes_of(OverlayKind::Sheet).is_empty());
}

#[test]
fn test_nodes_are_ordered_by_show_time() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let first = Sheet::show(&mut ctx, &container, |_| {});
    let second = Sheet::show(&mut ctx, &container, |_| {});

    let nodes = ctx.nodes_of(OverlayKind::Sheet);
    assert_eq!(nodes.len(), 2);

    // Bottom-most first, most recently shown last.
    let first_body = first.borrow().body_id().unwrap().to_string();
    let second_body = second.borrow().body_id().unwrap().to_string();
    assert_ne!(first_body, second_body);
}

#[test]
fn test_kind_filtering() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    Sheet::show(&mut ctx, &container, |_| {});

    assert_eq!(ctx.active_count(OverlayKind::Sheet), 1);
    assert_eq!(ctx.active_count(OverlayKind::Alert), 0);
    assert!(ctx.nodes_of(OverlayKind::Alert).is_empty());
}

// ============================================================================
// hide_all
// ============================================================================

#[test]
fn test_hide_all_with_no_nodes_is_noop() {
    let mut ctx = quiet_ctx();

    ctx.hide_all(OverlayKind::Sheet);
    ctx.pump();

    assert!(ctx.is_empty());
}

#[test]
fn test_hide_all_other_kind_leaves_sheets_alone() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    Sheet::show(&mut ctx, &container, |_| {});
    ctx.hide_all(OverlayKind::Alert);
    ctx.pump();

    assert_eq!(ctx.active_count(OverlayKind::Sheet), 1);
    assert_eq!(container.borrow().overlay_count(), 1);
}

#[test]
fn test_hide_all_show_next_only_on_most_recent() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    for _ in 0..3 {
        Sheet::show(&mut ctx, &container, |_| {});
    }

    ctx.hide_all(OverlayKind::Sheet);

    let nodes = ctx.nodes_of(OverlayKind::Sheet);
    assert_eq!(nodes.len(), 3, "dismissal is in flight, nothing dropped yet");
    let flags: Vec<bool> = nodes.iter().map(|n| n.borrow().wants_show_next()).collect();
    assert_eq!(flags, vec![false, false, true]);
}

#[test]
fn test_hide_all_empties_context_and_container() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    for _ in 0..3 {
        Sheet::show(&mut ctx, &container, |_| {});
    }

    ctx.hide_all(OverlayKind::Sheet);
    ctx.pump();

    assert!(ctx.is_empty());
    assert_eq!(container.borrow().overlay_count(), 0);
}

#[test]
fn test_hide_all_twice_is_harmless() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    Sheet::show(&mut ctx, &container, |_| {});
    ctx.hide_all(OverlayKind::Sheet);
    ctx.hide_all(OverlayKind::Sheet);
    ctx.pump();
    ctx.hide_all(OverlayKind::Sheet);

    assert!(ctx.is_empty());
}

// ============================================================================
// show-next behavior
// ============================================================================

#[test]
fn test_show_next_represents_lower_sheet() {
    let mut ctx = quiet_ctx();
    let container = Container::shared(80, 24);

    let lower = Sheet::show(&mut ctx, &container, |_| {});
    let top = Sheet::show(&mut ctx, &container, |_| {});

    // Dismiss only the top node, asking for the next to be shown.
    {
        let nodes = ctx.nodes_of(OverlayKind::Sheet);
        let top_node = nodes.last().unwrap();
        top_node
            .borrow_mut()
            .make_hidden(ctx.animation_mut(), true);
    }
    ctx.pump();

    assert_eq!(ctx.active_count(OverlayKind::Sheet), 1);
    assert_eq!(top.borrow().state(), scrim::State::Hidden);
    assert_eq!(lower.borrow().state(), scrim::State::Shown);
    assert!(
        container.borrow().overlay_count() == 1,
        "lower sheet's layer is the one left attached"
    );
}
