use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind};
use flexdom::{Align, Color, Edges, Justify, Size, Style, Terminal, View};
use scrim::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const FRAME: Duration = Duration::from_millis(33);

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("actionsheet.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let (width, height) = term.size();

    let container = Container::shared(width, height);
    container.borrow_mut().set_root(background_content());

    let mut ctx = OverlayContext::new();
    let mut active: Option<Rc<RefCell<Sheet>>> = None;

    loop {
        ctx.pump();
        let root = container.borrow().compose();
        term.render(&root, ctx.animation())?;

        let raw_events = term.poll(Some(FRAME))?;
        for event in &raw_events {
            let CtEvent::Key(key_event) = event else { continue };
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('s') => {
                    let sheet = Sheet::show(&mut ctx, &container, |sheet| {
                        sheet.refresh_content(
                            Content::system_with_others(
                                vec![
                                    Operation::new("Save").on_select(|| log::info!("save")),
                                    Operation::new("Duplicate")
                                        .on_select(|| log::info!("duplicate")),
                                    Operation::danger("Delete")
                                        .on_select(|| log::info!("delete")),
                                ],
                                vec![Operation::new("Cancel")],
                            )
                            .default_appearance(),
                        );
                    });
                    active = Some(sheet);
                }
                KeyCode::Char('h') => {
                    ctx.hide_all(OverlayKind::Sheet);
                    active = None;
                }
                KeyCode::Char(c @ '1'..='3') => {
                    if let Some(sheet) = &active {
                        let index = c as usize - '1' as usize;
                        sheet
                            .borrow_mut()
                            .select(ctx.animation_mut(), OpGroup::Items, index);
                    }
                }
                KeyCode::Char('c') => {
                    if let Some(sheet) = &active {
                        sheet
                            .borrow_mut()
                            .select(ctx.animation_mut(), OpGroup::Others, 0);
                    }
                }
                _ => {}
            }
        }
    }
}

fn background_content() -> View {
    View::column()
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.25, 0.05, 250.0)))
        .padding(Edges::all(2))
        .gap(1)
        .child(
            View::label("Action Sheet Demo").style(
                Style::new()
                    .bold()
                    .foreground(Color::oklch(0.9, 0.05, 250.0)),
            ),
        )
        .child(View::label("s = show sheet   h = hide all   q = quit"))
        .child(View::label("1-3 = pick an operation   c = cancel"))
        .child(
            View::row()
                .gap(2)
                .align(Align::Start)
                .justify(Justify::Start)
                .child(swatch(25.0))
                .child(swatch(145.0))
                .child(swatch(260.0)),
        )
}

fn swatch(hue: f32) -> View {
    View::column()
        .width(Size::Fixed(10))
        .height(Size::Fixed(4))
        .style(Style::new().background(Color::oklch(0.5, 0.15, hue)))
}
