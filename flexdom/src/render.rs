use crate::animation::{AnimatedProperty, AnimationState, PropertyValue};
use crate::buffer::{Buffer, Cell};
use crate::layout::{LayoutResult, Rect};
use crate::text::char_width;
use crate::types::{Border, Color, Rgb};
use crate::view::{View, ViewContent};

/// Render a laid-out view tree into a buffer, applying any in-flight
/// animation offsets and color transitions.
pub fn render_to_buffer(
    root: &View,
    layout: &LayoutResult,
    animation: &AnimationState,
    buf: &mut Buffer,
) {
    render_view(root, layout, animation, (0, 0), buf);
}

fn render_view(
    view: &View,
    layout: &LayoutResult,
    animation: &AnimationState,
    parent_offset: (i32, i32),
    buf: &mut Buffer,
) {
    let Some(rect) = layout.get(&view.id) else {
        return;
    };

    // Children inherit their parent's animation offset.
    let (dx, dy) = animation.offset(&view.id);
    let offset = (parent_offset.0 + dx as i32, parent_offset.1 + dy as i32);

    let background = match animation.get_interpolated(&view.id, AnimatedProperty::Background) {
        Some(PropertyValue::Color(c)) => Some(c),
        _ => view.style.background,
    };
    if let Some(color) = &background {
        fill_rect(buf, *rect, offset, color);
    }

    render_border(view, *rect, offset, animation, buf);

    match &view.content {
        ViewContent::None => {}
        ViewContent::Label(text) => {
            render_label(text, view, *rect, offset, animation, buf);
        }
        ViewContent::Children(children) => {
            for child in children {
                render_view(child, layout, animation, offset, buf);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, offset: (i32, i32), color: &Color) {
    let rgb = color.to_rgb();
    let alpha = color.alpha();

    for y in 0..rect.height {
        for x in 0..rect.width {
            let Some((bx, by)) = shifted(rect.x + x, rect.y + y, offset, buf) else {
                continue;
            };
            if let Some(cell) = buf.get_mut(bx, by) {
                cell.bg = if alpha >= 1.0 {
                    rgb
                } else {
                    rgb.over(cell.bg, alpha)
                };
            }
        }
    }
}

fn render_label(
    text: &str,
    view: &View,
    rect: Rect,
    offset: (i32, i32),
    animation: &AnimationState,
    buf: &mut Buffer,
) {
    let fg = match animation.get_interpolated(&view.id, AnimatedProperty::Foreground) {
        Some(PropertyValue::Color(c)) => c.to_rgb(),
        _ => view
            .style
            .foreground
            .as_ref()
            .map(|c| c.to_rgb())
            .unwrap_or(Rgb::new(255, 255, 255)),
    };

    let border = if view.style.border == Border::None { 0 } else { 1 };
    let inner = rect.shrink(
        view.padding.top + border,
        view.padding.right + border,
        view.padding.bottom + border,
        view.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    for (line_idx, line) in text.lines().enumerate() {
        let y = inner.y + line_idx as u16;
        if y >= inner.bottom() {
            break;
        }
        let mut x = inner.x;
        for ch in line.chars() {
            let w = char_width(ch).max(1) as u16;
            if x + w > inner.right() {
                break;
            }
            if let Some((bx, by)) = shifted(x, y, offset, buf) {
                // Keep whatever background is already in the cell.
                let bg = buf.get(bx, by).map(|c| c.bg).unwrap_or_default();
                buf.set(
                    bx,
                    by,
                    Cell::new(ch)
                        .with_fg(fg)
                        .with_bg(bg)
                        .with_attrs(view.style.attrs),
                );
                if w > 1 {
                    if let Some((tx, ty)) = shifted(x + 1, y, offset, buf) {
                        let mut tail = Cell::new(' ').with_bg(bg);
                        tail.wide_tail = true;
                        buf.set(tx, ty, tail);
                    }
                }
            }
            x += w;
        }
    }
}

fn render_border(
    view: &View,
    rect: Rect,
    offset: (i32, i32),
    animation: &AnimationState,
    buf: &mut Buffer,
) {
    let (tl, tr, bl, br, h, v) = match view.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = match animation.get_interpolated(&view.id, AnimatedProperty::Foreground) {
        Some(PropertyValue::Color(c)) => c.to_rgb(),
        _ => view
            .style
            .foreground
            .as_ref()
            .map(|c| c.to_rgb())
            .unwrap_or(Rgb::new(255, 255, 255)),
    };

    let mut put = |x: u16, y: u16, ch: char, buf: &mut Buffer| {
        if let Some((bx, by)) = shifted(x, y, offset, buf) {
            let bg = buf.get(bx, by).map(|c| c.bg).unwrap_or_default();
            buf.set(bx, by, Cell::new(ch).with_fg(fg).with_bg(bg));
        }
    };

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    put(rect.x, rect.y, tl, buf);
    put(right, rect.y, tr, buf);
    put(rect.x, bottom, bl, buf);
    put(right, bottom, br, buf);
    for x in rect.x + 1..right {
        put(x, rect.y, h, buf);
        put(x, bottom, h, buf);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v, buf);
        put(right, y, v, buf);
    }
}

/// Apply an animation offset to a cell position, clipping to the buffer.
fn shifted(x: u16, y: u16, offset: (i32, i32), buf: &Buffer) -> Option<(u16, u16)> {
    let bx = x as i32 + offset.0;
    let by = y as i32 + offset.1;
    if bx < 0 || by < 0 || bx >= buf.width() as i32 || by >= buf.height() as i32 {
        None
    } else {
        Some((bx as u16, by as u16))
    }
}
