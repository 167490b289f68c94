use std::sync::atomic::{AtomicU64, Ordering};

use super::ViewContent;
use crate::types::{Align, Direction, Edges, Justify, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the view tree.
///
/// Views are plain values configured through chained builder methods and
/// laid out by [`crate::layout::solve`]. Identity is the `id` string;
/// auto-generated ids are unique per process.
#[derive(Debug, Clone)]
pub struct View {
    // Identity
    pub id: String,

    // Content
    pub content: ViewContent,

    // Box model
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub margin: Edges,

    // Positioning
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,

    // Flex container
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,

    // Flex item
    pub align_self: Option<Align>,

    // Visual
    pub style: Style,
}

impl Default for View {
    fn default() -> Self {
        Self {
            id: generate_id("view"),
            content: ViewContent::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            margin: Edges::default(),
            position: Position::Static,
            top: None,
            left: None,
            direction: Direction::Column,
            gap: 0,
            justify: Justify::Start,
            align: Align::Start,
            align_self: None,
            style: Style::default(),
        }
    }
}

impl View {
    pub fn container() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn column() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("label"),
            content: ViewContent::Label(text.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Box model
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    // Flex container
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    // Flex item
    pub fn align_self(mut self, align_self: Align) -> Self {
        self.align_self = Some(align_self);
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Children
    pub fn child(mut self, child: View) -> Self {
        match &mut self.content {
            ViewContent::Children(children) => children.push(child),
            ViewContent::None => self.content = ViewContent::Children(vec![child]),
            _ => self.content = ViewContent::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = View>) -> Self {
        match &mut self.content {
            ViewContent::Children(children) => children.extend(new_children),
            _ => self.content = ViewContent::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Find a descendant (or self) by id.
    pub fn find(&self, id: &str) -> Option<&View> {
        if self.id == id {
            return Some(self);
        }
        self.content.children().iter().find_map(|c| c.find(id))
    }
}
