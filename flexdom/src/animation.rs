use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::transition::TransitionConfig;
use crate::types::Color;
use crate::view::{View, ViewContent};

/// Which property is being transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Horizontal render offset relative to the laid-out position.
    OffsetX,
    /// Vertical render offset relative to the laid-out position.
    OffsetY,
    Background,
    Foreground,
}

/// A property value that can be interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Offset(i16),
    Color(Color),
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    from: PropertyValue,
    to: PropertyValue,
    start: Instant,
    config: TransitionConfig,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> PropertyValue {
        let elapsed = now.duration_since(self.start);
        let progress = if self.config.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.config.easing.apply(progress);

        match (&self.from, &self.to) {
            (PropertyValue::Offset(from), PropertyValue::Offset(to)) => {
                PropertyValue::Offset(lerp_i16(*from, *to, eased))
            }
            (PropertyValue::Color(from), PropertyValue::Color(to)) => {
                PropertyValue::Color(Color::lerp(from, to, eased))
            }
            // Mismatched value kinds: jump to the target.
            _ => self.to,
        }
    }

    fn finished(&self, now: Instant) -> bool {
        now.duration_since(self.start) >= self.config.duration
    }
}

/// Tracks in-flight property transitions across frames.
///
/// Transitions are started imperatively with [`AnimationState::begin`] and
/// sampled at render time; [`AnimationState::update`] prunes the ones that
/// have run to completion. There is no cancellation: beginning a new
/// transition for the same `(view, property)` pair retargets from the
/// currently interpolated value.
#[derive(Debug, Default)]
pub struct AnimationState {
    active: HashMap<(String, AnimatedProperty), ActiveTransition>,
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, `begin` is a no-op and properties jump to their
    /// target immediately.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Start a transition for one property of one view.
    pub fn begin(
        &mut self,
        id: &str,
        property: AnimatedProperty,
        from: PropertyValue,
        to: PropertyValue,
        config: TransitionConfig,
    ) {
        if self.reduced_motion || config.duration.is_zero() {
            return;
        }

        let now = Instant::now();
        let key = (id.to_string(), property);

        // Retarget from the current interpolated value if one is in flight.
        let from = match self.active.get(&key) {
            Some(existing) => existing.value_at(now),
            None => from,
        };

        self.active.insert(
            key,
            ActiveTransition {
                from,
                to,
                start: now,
                config,
            },
        );
    }

    /// Prune transitions that have run to completion.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.active.retain(|_, t| !t.finished(now));
    }

    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    /// Whether any property of the given view is still transitioning.
    pub fn is_animating(&self, id: &str) -> bool {
        self.active.keys().any(|(view_id, _)| view_id == id)
    }

    /// Current interpolated value for a property, if transitioning.
    pub fn get_interpolated(&self, id: &str, property: AnimatedProperty) -> Option<PropertyValue> {
        let key = (id.to_string(), property);
        let transition = self.active.get(&key)?;
        Some(transition.value_at(Instant::now()))
    }

    /// Render offset for a view: `(dx, dy)`, zero when not transitioning.
    pub fn offset(&self, id: &str) -> (i16, i16) {
        let dx = match self.get_interpolated(id, AnimatedProperty::OffsetX) {
            Some(PropertyValue::Offset(v)) => v,
            _ => 0,
        };
        let dy = match self.get_interpolated(id, AnimatedProperty::OffsetY) {
            Some(PropertyValue::Offset(v)) => v,
            _ => 0,
        };
        (dx, dy)
    }

    /// Drop transitions for views no longer present in the tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.active.retain(|(id, _), _| current_ids.contains(id));
    }
}

fn lerp_i16(from: i16, to: i16, t: f32) -> i16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i16
}

/// Collect all view ids from a tree, for [`AnimationState::cleanup`].
pub fn collect_view_ids(root: &View) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids(root, &mut ids);
    ids
}

fn collect_ids(view: &View, ids: &mut HashSet<String>) {
    ids.insert(view.id.clone());
    if let ViewContent::Children(children) = &view.content {
        for child in children {
            collect_ids(child, ids);
        }
    }
}
