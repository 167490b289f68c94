use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::animation::AnimationState;
use crate::buffer::Buffer;
use crate::layout::{solve, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextAttrs};
use crate::view::View;

/// Raw-mode alternate-screen terminal with double-buffered diff output.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Poll for pending input events, draining everything available.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Lay out and render one frame, writing only changed cells.
    pub fn render(&mut self, root: &View, animation: &AnimationState) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            log::debug!("terminal resized to {width}x{height}");
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
        }

        self.current.clear();
        self.last_layout = solve(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, animation, &mut self.current);

        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);

        Ok(&self.last_layout)
    }

    /// Layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_attrs = TextAttrs::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_tail {
                continue;
            }

            if y != last_y || x != last_x + last_char_width {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            if cell.attrs.bold != last_attrs.bold {
                if cell.attrs.bold {
                    execute!(self.stdout, SetAttribute(Attribute::Bold))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            if cell.attrs.dim != last_attrs.dim {
                if cell.attrs.dim {
                    execute!(self.stdout, SetAttribute(Attribute::Dim))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            last_attrs = cell.attrs;

            write!(self.stdout, "{}", cell.ch)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.ch).max(1) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
