use std::cell::RefCell;
use std::rc::Rc;

use flexdom::AnimationState;

/// Tag identifying what kind of overlay a registered node is.
///
/// Only sheets are produced by this crate today; the tag exists so lookup
/// and bulk dismissal can be scoped per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Sheet,
    Alert,
}

/// An active overlay tracked by an [`OverlayContext`].
///
/// The context drives registered nodes through their exit sequence: it
/// starts dismissals via [`OverlayNode::make_hidden`] and polls
/// [`OverlayNode::settle`] once per frame until the node reports it has
/// fully left its container.
pub trait OverlayNode {
    fn kind(&self) -> OverlayKind;

    /// Generic dismissal primitive: begin the node's exit sequence.
    /// `show_next` asks the context to re-present the next node of the
    /// same kind once this one has settled.
    fn make_hidden(&mut self, animation: &mut AnimationState, show_next: bool);

    /// Advance the exit. Returns true once the node is fully dismissed
    /// and should be deregistered.
    fn settle(&mut self, animation: &mut AnimationState) -> bool;

    /// Re-present this node after the node stacked above it went away.
    fn show_again(&mut self, animation: &mut AnimationState);

    /// Whether this settled node asked for the next one to be shown.
    fn wants_show_next(&self) -> bool;
}

struct OverlayEntry {
    kind: OverlayKind,
    node: Rc<RefCell<dyn OverlayNode>>,
}

/// Ordered collection of the active overlays of one view hierarchy, plus
/// the animation state that drives their transitions.
///
/// One context per container hierarchy; everything runs on the UI thread
/// that owns it. Entries are kept in show order — the last entry is the
/// most recently shown, top-most overlay.
#[derive(Default)]
pub struct OverlayContext {
    entries: Vec<OverlayEntry>,
    animation: AnimationState,
}

impl OverlayContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut AnimationState {
        &mut self.animation
    }

    /// Register a node as the new top-most overlay of its kind.
    pub fn register(&mut self, kind: OverlayKind, node: Rc<RefCell<dyn OverlayNode>>) {
        self.entries.push(OverlayEntry { kind, node });
    }

    /// Active nodes of one kind, bottom-most first.
    pub fn nodes_of(&self, kind: OverlayKind) -> Vec<Rc<RefCell<dyn OverlayNode>>> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| Rc::clone(&e.node))
            .collect()
    }

    pub fn active_count(&self, kind: OverlayKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dismiss every active node of `kind`. A no-op when none are active.
    ///
    /// All nodes except the most recently shown are dismissed without
    /// show-next behavior; the most recent one is dismissed with it, so a
    /// lower node of the same kind becomes visible again once the
    /// dismissal settles.
    pub fn hide_all(&mut self, kind: OverlayKind) {
        let nodes = self.nodes_of(kind);
        let Some((last, front)) = nodes.split_last() else {
            return;
        };

        for node in front {
            node.borrow_mut().make_hidden(&mut self.animation, false);
        }
        last.borrow_mut().make_hidden(&mut self.animation, true);
        log::debug!("hide_all({kind:?}) dismissing {} node(s)", nodes.len());
    }

    /// Advance transitions and settle finished dismissals. Call once per
    /// frame from the owning event loop.
    ///
    /// Settled nodes are deregistered; when one of them asked for
    /// show-next behavior and a node of the same kind remains, the
    /// top-most remaining node is re-presented.
    pub fn pump(&mut self) {
        self.animation.update();

        let mut show_next: Vec<OverlayKind> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            let done = self.entries[i]
                .node
                .borrow_mut()
                .settle(&mut self.animation);
            if done {
                let entry = self.entries.remove(i);
                if entry.node.borrow().wants_show_next() {
                    show_next.push(entry.kind);
                }
            } else {
                i += 1;
            }
        }

        for kind in show_next {
            if let Some(entry) = self.entries.iter().rev().find(|e| e.kind == kind) {
                entry.node.borrow_mut().show_again(&mut self.animation);
            }
        }
    }
}
