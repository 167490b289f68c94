use std::cell::RefCell;
use std::rc::Rc;

use flexdom::{solve, LayoutResult, Rect, Size, View, ViewContent};

/// The retained view a sheet presents into.
///
/// A container owns its base view tree plus the overlay layers attached on
/// top of it, and caches the layout of the composed tree. Sheets hold a
/// `Weak` handle to their container and presence-check it at every use
/// site; the container always outlives the sheets it hosts, never the
/// other way around.
pub struct Container {
    id: String,
    width: u16,
    height: u16,
    root: View,
    overlays: Vec<View>,
    layout: LayoutResult,
}

impl Container {
    pub fn new(width: u16, height: u16) -> Self {
        let frame = View::container()
            .width(Size::Fixed(width))
            .height(Size::Fixed(height));
        let mut container = Self {
            id: frame.id.clone(),
            width,
            height,
            root: View::container().width(Size::Fill).height(Size::Fill),
            overlays: Vec::new(),
            layout: LayoutResult::new(),
        };
        container.relayout();
        container
    }

    /// Convenience constructor for the usual shared ownership shape.
    pub fn shared(width: u16, height: u16) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(width, height)))
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Replace the base view tree beneath any overlays.
    pub fn set_root(&mut self, root: View) {
        self.root = root;
        self.relayout();
    }

    /// Attach an overlay layer above the base tree and any earlier
    /// overlays. Re-attaching a layer with the same id replaces it in
    /// place rather than stacking a duplicate.
    pub fn attach(&mut self, overlay: View) {
        match self.overlays.iter_mut().find(|o| o.id == overlay.id) {
            Some(existing) => *existing = overlay,
            None => self.overlays.push(overlay),
        }
        self.relayout();
    }

    /// Remove an overlay layer by id. Returns whether it was attached.
    pub fn detach(&mut self, id: &str) -> bool {
        let before = self.overlays.len();
        self.overlays.retain(|o| o.id != id);
        let removed = self.overlays.len() != before;
        if removed {
            self.relayout();
        }
        removed
    }

    pub fn is_attached(&self, id: &str) -> bool {
        self.overlays.iter().any(|o| o.id == id)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// The composed tree: base view first, overlays in attach order above.
    pub fn compose(&self) -> View {
        let mut frame = View::container()
            .id(self.id.clone())
            .width(Size::Fixed(self.width))
            .height(Size::Fixed(self.height));
        frame.content = ViewContent::Children(
            std::iter::once(self.root.clone())
                .chain(self.overlays.iter().cloned())
                .collect(),
        );
        frame
    }

    /// Recompute the cached layout of the composed tree. Idempotent.
    pub fn relayout(&mut self) {
        self.layout = solve(&self.compose(), Rect::from_size(self.width, self.height));
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.layout.get(id).copied()
    }
}
