use std::fs::File;

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind};
use flexdom::{Align, AnimationState, Color, Edges, Justify, Size, Style, Terminal, View};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("boxes.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let animation = AnimationState::new();

    loop {
        let root = ui();
        term.render(&root, &animation)?;

        let raw_events = term.poll(None)?;
        for event in &raw_events {
            if let CtEvent::Key(key_event) = event {
                if key_event.kind == KeyEventKind::Press {
                    match key_event.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Three boxes on a light canvas: one centered with a bottom margin, one
/// pushed to the trailing edge, one to the leading edge.
fn ui() -> View {
    View::column()
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.97, 0.0, 0.0)))
        .align(Align::Center)
        .justify(Justify::Center)
        .child(
            colored_box("blue", 20, 3, Color::oklch(0.5, 0.18, 260.0))
                .margin(Edges::bottom(2)),
        )
        .child(colored_box("green", 24, 8, Color::oklch(0.6, 0.18, 145.0)).align_self(Align::End))
        .child(colored_box("yellow", 12, 4, Color::oklch(0.85, 0.15, 95.0)).align_self(Align::Start))
}

fn colored_box(label: &str, width: u16, height: u16, color: Color) -> View {
    View::column()
        .width(Size::Fixed(width))
        .height(Size::Fixed(height))
        .style(
            Style::new()
                .background(color)
                .foreground(Color::oklch(0.98, 0.01, 0.0)),
        )
        .justify(Justify::Center)
        .align(Align::Center)
        .child(View::label(label))
}
