use flexdom::{Border, Color, Edges};

use crate::operation::{Operation, OperationStyle};

/// Reduced-opacity light background for operation rows.
pub const ITEM_BACKGROUND: Color = Color::Oklch {
    l: 1.0,
    c: 0.0,
    h: 0.0,
    a: 0.6,
};

/// Default gray operation text.
pub const TEXT_GRAY: Color = Color::Oklch {
    l: 0.6,
    c: 0.0,
    h: 0.0,
    a: 1.0,
};

/// Text color for danger-tagged operations.
pub const TEXT_DANGER: Color = Color::Oklch {
    l: 0.55,
    c: 0.2,
    h: 25.0,
    a: 1.0,
};

/// What a sheet displays.
///
/// Either deferred content the caller fills in and dismisses explicitly,
/// or a structured action list: `items` are the primary operations and
/// `others` the secondary group (typically a cancel action) that carries
/// auto-dismiss wiring.
#[derive(Debug, Default)]
pub enum Content {
    #[default]
    Delay,
    System {
        items: Vec<Operation>,
        others: Option<Vec<Operation>>,
    },
}

impl Content {
    pub fn delay() -> Self {
        Self::Delay
    }

    pub fn system(items: Vec<Operation>) -> Self {
        Self::System {
            items,
            others: None,
        }
    }

    pub fn system_with_others(items: Vec<Operation>, others: Vec<Operation>) -> Self {
        Self::System {
            items,
            others: Some(others),
        }
    }

    pub fn is_delay(&self) -> bool {
        matches!(self, Self::Delay)
    }

    pub fn items(&self) -> &[Operation] {
        match self {
            Self::System { items, .. } => items,
            Self::Delay => &[],
        }
    }

    pub fn others(&self) -> &[Operation] {
        match self {
            Self::System {
                others: Some(others),
                ..
            } => others,
            _ => &[],
        }
    }

    /// Apply the default visual treatment to a structured action list.
    ///
    /// Items get a reduced-opacity light background and gray text. The
    /// `others` group additionally gets a top margin, rounded corners,
    /// auto-dismiss wiring, and a text color decided by each operation's
    /// style tag. `Delay` content is left untouched. Returns the content
    /// for chaining.
    pub fn default_appearance(mut self) -> Self {
        if let Self::System { items, others } = &mut self {
            for item in items.iter_mut() {
                item.background = Some(ITEM_BACKGROUND);
                item.text_color = Some(TEXT_GRAY);
            }

            if let Some(others) = others {
                for item in others.iter_mut() {
                    item.background = Some(ITEM_BACKGROUND);
                    item.margin = Edges::top(1);
                    item.corner = Border::Rounded;
                    item.trigger_hide();
                    item.text_color = Some(match item.style {
                        OperationStyle::Normal => TEXT_GRAY,
                        OperationStyle::Danger => TEXT_DANGER,
                    });
                }
            }
        }

        self
    }
}
