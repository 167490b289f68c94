use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use flexdom::{
    Align, AnimatedProperty, AnimationState, Color, Easing, Edges, Justify, Position,
    PropertyValue, Size, Style, TransitionConfig, View,
};

use crate::container::Container;
use crate::content::Content;
use crate::context::{OverlayContext, OverlayKind, OverlayNode};

/// Fixed duration of the entrance/exit slide and the backdrop fade.
pub const SLIDE_DURATION: Duration = Duration::from_secs(1);

/// Translucent gray laid over the container while a sheet is up.
const BACKDROP: Color = Color::Oklch {
    l: 0.25,
    c: 0.0,
    h: 0.0,
    a: 0.45,
};

/// Horizontal inset of the sheet body relative to its container.
const BODY_INSET: u16 = 6;

/// Sheet lifecycle marker. Every assignment re-computes the container
/// layout as a side effect, whether or not anything visibly changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Initial,
    Shown,
    Hidden,
}

/// Distinguishes a sheet's first-ever presentation (animated) from
/// subsequent re-shows (not animated).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwakeStyle {
    First,
    Again,
}

/// Backdrop treatment on first presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    /// Fade the backdrop in alongside the body slide.
    #[default]
    FadeIn,
    /// Attach the backdrop at full opacity immediately.
    None,
}

/// Which operation group a selection lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpGroup {
    Items,
    Others,
}

/// A modal action-sheet overlay.
///
/// Constructed and presented through [`Sheet::show`]; dismissed through
/// [`Sheet::hide`], operation selection, or
/// [`OverlayContext::hide_all`]. The background view is created exactly
/// once at construction and reused for the sheet's lifetime.
pub struct Sheet {
    state: State,
    pub animation: Animation,
    background: View,
    body_id: Option<String>,
    content: Content,
    container: Weak<RefCell<Container>>,
    prepared: bool,
    exiting: bool,
    defunct: bool,
    show_next: bool,
    completion: Option<Box<dyn FnOnce(bool)>>,
}

impl Sheet {
    /// Build a sheet bound to a container. The background spans the
    /// container, pins its content to the bottom edge, and centers it
    /// horizontally.
    pub fn new(container: &Rc<RefCell<Container>>) -> Self {
        let (width, height) = container.borrow().size();

        let background = View::column()
            .position(Position::Absolute)
            .width(Size::Fixed(width))
            .height(Size::Fixed(height))
            .justify(Justify::End)
            .align(Align::Center)
            .style(Style::new().background(BACKDROP));

        Self {
            state: State::Initial,
            animation: Animation::default(),
            background,
            body_id: None,
            content: Content::delay(),
            container: Rc::downgrade(container),
            prepared: false,
            exiting: false,
            defunct: false,
            show_next: false,
            completion: None,
        }
    }

    /// Present a new sheet on `container`.
    ///
    /// `configure` runs synchronously before the body is built, so content
    /// set there (via [`Sheet::refresh_content`]) is what gets rendered.
    /// The first sheet shown while no other sheet is active animates in;
    /// later ones attach without a transition.
    pub fn show(
        ctx: &mut OverlayContext,
        container: &Rc<RefCell<Container>>,
        configure: impl FnOnce(&mut Sheet),
    ) -> Rc<RefCell<Sheet>> {
        let mut sheet = Sheet::new(container);
        configure(&mut sheet);

        let awake = if ctx.active_count(OverlayKind::Sheet) == 0 {
            AwakeStyle::First
        } else {
            AwakeStyle::Again
        };

        sheet.config_body();
        sheet.turn_to_show(ctx.animation_mut(), awake);

        let sheet = Rc::new(RefCell::new(sheet));
        ctx.register(OverlayKind::Sheet, sheet.clone());
        log::debug!("sheet shown ({awake:?})");
        sheet
    }

    /// Begin this sheet's dismissal.
    pub fn hide(&mut self, animation: &mut AnimationState) {
        self.turn_to_hide(animation);
    }

    /// Begin dismissal and observe its completion. The callback receives
    /// `true` when the exit transition ran against a live container and
    /// `false` when the sheet was dropped on the silent no-op path.
    pub fn hide_then(
        &mut self,
        animation: &mut AnimationState,
        finished: impl FnOnce(bool) + 'static,
    ) {
        self.completion = Some(Box::new(finished));
        self.turn_to_hide(animation);
    }

    /// Replace the sheet's content.
    ///
    /// Only meaningful before the body is built, i.e. inside the
    /// `configure` callback of [`Sheet::show`]. Afterwards the rendered
    /// body is left untouched and the call is logged and ignored.
    pub fn refresh_content(&mut self, content: Content) -> &mut Self {
        if self.prepared {
            log::warn!(
                "refresh_content called after the sheet body was built; \
                 set content inside the show() configure callback"
            );
            return self;
        }
        self.content = content;
        self
    }

    /// Select an operation: run its action, then begin dismissal if the
    /// operation is wired for it. Out-of-range selections are ignored.
    pub fn select(&mut self, animation: &mut AnimationState, group: OpGroup, index: usize) {
        let dismiss = {
            let op = match (&mut self.content, group) {
                (Content::System { items, .. }, OpGroup::Items) => items.get_mut(index),
                (Content::System { others, .. }, OpGroup::Others) => {
                    others.as_mut().and_then(|o| o.get_mut(index))
                }
                (Content::Delay, _) => None,
            };
            let Some(op) = op else { return };
            op.run_action();
            op.dismisses()
        };

        if dismiss {
            self.turn_to_hide(animation);
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The container this sheet is bound to, while it is still alive.
    pub fn container(&self) -> Option<Rc<RefCell<Container>>> {
        self.container.upgrade()
    }

    pub fn background(&self) -> &View {
        &self.background
    }

    pub fn body_id(&self) -> Option<&str> {
        self.body_id.as_deref()
    }

    /// Build the body from the current content and hang it off the
    /// background. Structured content gets default dismiss wiring on every
    /// operation; deferred content gets none, leaving dismissal to the
    /// caller.
    fn config_body(&mut self) {
        let Some(container) = self.container.upgrade() else {
            self.defunct = true;
            return;
        };

        match &mut self.content {
            Content::System { items, others } => {
                for op in items.iter_mut() {
                    op.trigger_hide();
                }
                if let Some(others) = others {
                    for op in others.iter_mut() {
                        op.trigger_hide();
                    }
                }
            }
            Content::Delay => {}
        }

        let (width, _) = container.borrow().size();
        let body = self.build_body(width);
        self.body_id = Some(body.id.clone());
        let background = std::mem::take(&mut self.background);
        self.background = background.child(body);
        self.prepared = true;
    }

    fn build_body(&self, container_width: u16) -> View {
        let mut rows: Vec<View> = Vec::new();
        if let Content::System { items, others } = &self.content {
            rows.extend(items.iter().map(|op| op.view()));
            if let Some(others) = others {
                rows.extend(others.iter().map(|op| op.view()));
            }
        }

        View::column()
            .width(Size::Fixed(container_width.saturating_sub(BODY_INSET)))
            .margin(Edges::bottom(1))
            .justify(Justify::Center)
            .align(Align::Stretch)
            .children(rows)
    }

    /// Attach the background and present. `AwakeStyle::First` slides the
    /// body up from below the container edge and fades the backdrop in;
    /// any other style attaches without a transition.
    fn turn_to_show(&mut self, animation: &mut AnimationState, awake: AwakeStyle) {
        let Some(container) = self.container.upgrade() else {
            self.defunct = true;
            return;
        };

        container.borrow_mut().attach(self.background.clone());
        self.set_state(State::Shown);

        if awake != AwakeStyle::First {
            return;
        }

        let (body_rect, height) = {
            let container = container.borrow();
            let rect = self
                .body_id
                .as_deref()
                .and_then(|id| container.rect_of(id));
            (rect, container.size().1)
        };

        if let (Some(id), Some(rect)) = (self.body_id.as_deref(), body_rect) {
            let below = height.saturating_sub(rect.y) as i16;
            animation.begin(
                id,
                AnimatedProperty::OffsetY,
                PropertyValue::Offset(below),
                PropertyValue::Offset(0),
                TransitionConfig::new(SLIDE_DURATION, Easing::EaseOut),
            );
        }

        if self.animation == Animation::FadeIn {
            if let Some(backdrop) = self.background.style.background {
                animation.begin(
                    &self.background.id,
                    AnimatedProperty::Background,
                    PropertyValue::Color(backdrop.with_alpha(0.0)),
                    PropertyValue::Color(backdrop),
                    TransitionConfig::new(SLIDE_DURATION, Easing::EaseOut),
                );
            }
        }
    }

    /// Begin the exit slide. The pump detaches the background and fires
    /// the completion callback once the transition has run out.
    fn turn_to_hide(&mut self, animation: &mut AnimationState) {
        if self.exiting || self.defunct {
            return;
        }
        let Some(container) = self.container.upgrade() else {
            // Container already gone: nothing to animate or detach.
            self.defunct = true;
            return;
        };

        let (body_rect, height) = {
            let container = container.borrow();
            let rect = self
                .body_id
                .as_deref()
                .and_then(|id| container.rect_of(id));
            (rect, container.size().1)
        };

        if let (Some(id), Some(rect)) = (self.body_id.as_deref(), body_rect) {
            let below = height.saturating_sub(rect.y) as i16;
            animation.begin(
                id,
                AnimatedProperty::OffsetY,
                PropertyValue::Offset(0),
                PropertyValue::Offset(below),
                TransitionConfig::new(SLIDE_DURATION, Easing::EaseIn),
            );
        }

        self.exiting = true;
        log::debug!("sheet exiting");
    }

    fn set_state(&mut self, state: State) {
        self.state = state;
        // Unconditional re-layout on every transition; safe to repeat.
        if let Some(container) = self.container.upgrade() {
            container.borrow_mut().relayout();
        }
    }
}

impl OverlayNode for Sheet {
    fn kind(&self) -> OverlayKind {
        OverlayKind::Sheet
    }

    fn make_hidden(&mut self, animation: &mut AnimationState, show_next: bool) {
        self.show_next = show_next;
        self.turn_to_hide(animation);
    }

    fn settle(&mut self, animation: &mut AnimationState) -> bool {
        if self.defunct {
            if let Some(container) = self.container.upgrade() {
                container.borrow_mut().detach(&self.background.id);
            }
            if let Some(finished) = self.completion.take() {
                finished(false);
            }
            return true;
        }

        if !self.exiting {
            return false;
        }

        let body_animating = self
            .body_id
            .as_deref()
            .is_some_and(|id| animation.is_animating(id));
        if body_animating {
            return false;
        }

        match self.container.upgrade() {
            Some(container) => {
                container.borrow_mut().detach(&self.background.id);
            }
            None => {
                self.defunct = true;
                if let Some(finished) = self.completion.take() {
                    finished(false);
                }
                return true;
            }
        }

        self.set_state(State::Hidden);
        if let Some(finished) = self.completion.take() {
            finished(true);
        }
        log::debug!("sheet hidden");
        true
    }

    fn show_again(&mut self, animation: &mut AnimationState) {
        self.turn_to_show(animation, AwakeStyle::Again);
    }

    fn wants_show_next(&self) -> bool {
        self.show_next
    }
}
