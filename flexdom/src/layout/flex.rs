use std::collections::HashMap;

use super::Rect;
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Position, Size};
use crate::view::{View, ViewContent};

pub type LayoutResult = HashMap<String, Rect>;

/// Compute layout for a view tree within the available area.
pub fn solve(root: &View, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    place(root, available, &mut result);
    result
}

fn place(view: &View, available: Rect, result: &mut LayoutResult) {
    if view.position == Position::Absolute {
        let x = offset_coord(available.x, view.left);
        let y = offset_coord(available.y, view.top);
        let width = resolve_size(view, available.width, true);
        let height = resolve_size(view, available.height, false);
        let rect = Rect::new(x, y, width, height);
        result.insert(view.id.clone(), rect);
        place_children(view, rect, result);
        return;
    }

    let margin = &view.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve_size(view, after_margin.width, true);
    let height = resolve_size(view, after_margin.height, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.insert(view.id.clone(), rect);

    place_children(view, rect, result);
}

fn place_children(view: &View, rect: Rect, result: &mut LayoutResult) {
    let ViewContent::Children(children) = &view.content else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let flow: Vec<_> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();
    let absolute: Vec<_> = children
        .iter()
        .filter(|c| c.position == Position::Absolute)
        .collect();

    let border = border_inset(view);
    let inner = rect.shrink(
        view.padding.top + border,
        view.padding.right + border,
        view.padding.bottom + border,
        view.padding.left + border,
    );

    let is_row = view.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = view.gap * flow.len().saturating_sub(1) as u16;

    // First pass: fixed/auto sizes and the number of fill items.
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    for child in &flow {
        let margin_main = if is_row {
            child.margin.horizontal_total()
        } else {
            child.margin.vertical_total()
        };
        match main_axis_size(child, is_row) {
            Size::Fixed(n) => fixed_total += n + margin_main,
            Size::Auto => fixed_total += estimate(child, is_row) + margin_main,
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let fill_share = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Main-axis extents including margins.
    let mut extents: Vec<(u16, u16, u16)> = Vec::with_capacity(flow.len());
    let mut used = 0u16;
    for child in &flow {
        let (before, after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };
        let main = match main_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate(child, is_row),
            Size::Fill => fill_share,
        };
        extents.push((main, before, after));
        used += main + before + after;
    }

    let extra = main_size.saturating_sub(used + gap_total);
    let (start_offset, between_gap) = match view.justify {
        Justify::Start => (0, view.gap),
        Justify::Center => (extra / 2, view.gap),
        Justify::End => (extra, view.gap),
        Justify::SpaceBetween => {
            if flow.len() > 1 {
                (0, extra / (flow.len() - 1) as u16 + view.gap)
            } else {
                (0, view.gap)
            }
        }
        Justify::SpaceAround => {
            if flow.is_empty() {
                (0, view.gap)
            } else {
                let spacing = extra / flow.len() as u16;
                (spacing / 2, spacing + view.gap)
            }
        }
    };

    // Second pass: assign rects.
    let mut offset = start_offset;
    for (i, child) in flow.iter().enumerate() {
        let (main, before, after) = extents[i];

        let (cross_before, cross_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };
        let child_align = child.align_self.unwrap_or(view.align);
        let available_cross = cross_size.saturating_sub(cross_before + cross_after);

        let cross = match cross_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Fill => available_cross,
            Size::Auto => {
                if child_align == Align::Stretch {
                    available_cross
                } else {
                    estimate(child, !is_row).min(available_cross)
                }
            }
        };

        let clamped_main = main.min(main_size.saturating_sub(offset + before));
        let clamped_cross = cross.min(available_cross);

        let cross_offset = match child_align {
            Align::Start | Align::Stretch => cross_before,
            Align::Center => cross_before + available_cross.saturating_sub(clamped_cross) / 2,
            Align::End => cross_before + available_cross.saturating_sub(clamped_cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset + before,
                inner.y + cross_offset,
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset + before,
                clamped_cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        place_children(child, child_rect, result);

        offset += before + main + after + between_gap;
    }

    for child in absolute {
        place(child, rect, result);
    }
}

fn main_axis_size(view: &View, is_row: bool) -> Size {
    if is_row {
        view.width
    } else {
        view.height
    }
}

fn cross_axis_size(view: &View, is_row: bool) -> Size {
    if is_row {
        view.height
    } else {
        view.width
    }
}

fn resolve_size(view: &View, available: u16, is_width: bool) -> u16 {
    let size = if is_width { view.width } else { view.height };
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate(view, is_width).min(available),
    }
}

fn border_inset(view: &View) -> u16 {
    if view.style.border == Border::None {
        0
    } else {
        1
    }
}

/// Content-based size estimate for `Size::Auto`.
fn estimate(view: &View, is_width: bool) -> u16 {
    let border = border_inset(view) * 2;
    let padding = if is_width {
        view.padding.horizontal_total()
    } else {
        view.padding.vertical_total()
    };

    let content = match &view.content {
        ViewContent::Label(text) => {
            if is_width {
                text.lines()
                    .map(|line| display_width(line) as u16)
                    .max()
                    .unwrap_or(0)
            } else {
                text.lines().count().max(1) as u16
            }
        }
        ViewContent::Children(children) => {
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            let along_main = (view.direction == Direction::Row) == is_width;
            if along_main {
                let count = children
                    .iter()
                    .filter(|c| c.position != Position::Absolute)
                    .count();
                let gap_total = view.gap * count.saturating_sub(1) as u16;
                flow.map(|c| estimate_with_margin(c, is_width)).sum::<u16>() + gap_total
            } else {
                flow.map(|c| estimate_with_margin(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        ViewContent::None => 0,
    };

    content + padding + border
}

fn estimate_with_margin(view: &View, is_width: bool) -> u16 {
    let margin = if is_width {
        view.margin.horizontal_total()
    } else {
        view.margin.vertical_total()
    };
    let base = match if is_width { view.width } else { view.height } {
        Size::Fixed(n) => n,
        _ => estimate(view, is_width),
    };
    base + margin
}

fn offset_coord(base: u16, offset: Option<i16>) -> u16 {
    match offset {
        Some(v) if v >= 0 => base.saturating_add(v as u16),
        Some(v) => base.saturating_sub(v.unsigned_abs()),
        None => base,
    }
}
