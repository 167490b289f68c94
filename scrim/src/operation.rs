use flexdom::{Align, Border, Color, Edges, Justify, Size, Style, View};

/// Visual tag for an operation, deciding its default text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationStyle {
    #[default]
    Normal,
    Danger,
}

/// A selectable, button-like item displayed by a sheet.
///
/// Operations carry their own style properties; a sheet's
/// [`Content::default_appearance`](crate::Content::default_appearance)
/// fills them in when the caller does not. Selecting an operation runs its
/// action and, when the operation is wired for dismissal, starts the
/// owning sheet's hide sequence.
pub struct Operation {
    pub label: String,
    pub style: OperationStyle,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub margin: Edges,
    pub corner: Border,
    dismisses: bool,
    action: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("dismisses", &self.dismisses)
            .finish_non_exhaustive()
    }
}

impl Operation {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: OperationStyle::Normal,
            background: None,
            text_color: None,
            margin: Edges::default(),
            corner: Border::None,
            dismisses: false,
            action: None,
        }
    }

    pub fn danger(label: impl Into<String>) -> Self {
        Self {
            style: OperationStyle::Danger,
            ..Self::new(label)
        }
    }

    pub fn style(mut self, style: OperationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn corner(mut self, corner: Border) -> Self {
        self.corner = corner;
        self
    }

    /// Run this closure when the operation is selected.
    pub fn on_select(mut self, action: impl FnMut() + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Wire selection of this operation to the owning sheet's dismissal.
    pub fn trigger_hide(&mut self) {
        self.dismisses = true;
    }

    pub fn dismisses(&self) -> bool {
        self.dismisses
    }

    pub(crate) fn run_action(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action();
        }
    }

    /// Build this operation's row in the sheet body.
    pub(crate) fn view(&self) -> View {
        let height = if self.corner == Border::None { 1 } else { 3 };
        let mut style = Style::new().border(self.corner);
        if let Some(background) = self.background {
            style = style.background(background);
        }

        let mut label_style = Style::new();
        if let Some(text_color) = self.text_color {
            label_style = label_style.foreground(text_color);
        }

        View::container()
            .width(Size::Fill)
            .height(Size::Fixed(height))
            .margin(self.margin)
            .justify(Justify::Center)
            .align(Align::Center)
            .style(style)
            .child(View::label(self.label.clone()).style(label_style))
    }
}
