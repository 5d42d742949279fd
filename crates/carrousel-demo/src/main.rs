#![forbid(unsafe_code)]

//! Terminal carousel demo.
//!
//! Three slides, one visible at a time. Navigate with the Left/Right arrow
//! keys or by clicking the `‹`/`›` controls; `q` or Escape quits. Set
//! `RUST_LOG=debug` to see cursor switches on stderr.

use carrousel_core::event::{Event, KeyCode, MouseButton, MouseEventKind};
use carrousel_render::frame::{Frame, HitId, HitRegion};
use carrousel_render::style::{Color, Style};
use carrousel_runtime::{Cmd, Input, Model, Program, ProgramConfig};
use carrousel_widgets::{
    Carousel, CarouselState, NEXT_CONTROL, PREV_CONTROL, Slide, StatefulWidget, draw_text_span,
};
use std::io;
use tracing_subscriber::EnvFilter;

const CAROUSEL_HIT: HitId = HitId::new(1);

struct DemoApp {
    carousel: Carousel<'static>,
    state: CarouselState,
}

impl DemoApp {
    fn new() -> Self {
        let slides = vec![
            Slide::new("Alpine Pass")
                .caption("alps.png")
                .style(Style::new().fg(Color::rgb(120, 170, 255))),
            Slide::new("Harbor at Dusk")
                .caption("harbor.png")
                .style(Style::new().fg(Color::rgb(255, 170, 120))),
            Slide::new("Dune Ridge")
                .caption("dunes.png")
                .style(Style::new().fg(Color::rgb(230, 210, 140))),
        ];
        let carousel = Carousel::new(slides)
            .active_style(Style::new().bold())
            .hit_id(CAROUSEL_HIT);
        Self {
            carousel,
            state: CarouselState::default(),
        }
    }
}

enum Msg {
    Next,
    Prev,
    Quit,
    Noop,
}

impl From<Input> for Msg {
    fn from(input: Input) -> Self {
        match input.event {
            Event::Key(k) if k.is_char('q') || k.code == KeyCode::Escape => Msg::Quit,
            Event::Key(k) if k.code == KeyCode::Right => Msg::Next,
            Event::Key(k) if k.code == KeyCode::Left => Msg::Prev,
            Event::Mouse(m) if m.kind == MouseEventKind::Down(MouseButton::Left) => {
                match input.hit {
                    Some((CAROUSEL_HIT, HitRegion::Button, NEXT_CONTROL)) => Msg::Next,
                    Some((CAROUSEL_HIT, HitRegion::Button, PREV_CONTROL)) => Msg::Prev,
                    _ => Msg::Noop,
                }
            }
            _ => Msg::Noop,
        }
    }
}

impl Model for DemoApp {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Next => {
                self.carousel.advance(&mut self.state);
                Cmd::none()
            }
            Msg::Prev => {
                self.carousel.retreat(&mut self.state);
                Cmd::none()
            }
            Msg::Quit => Cmd::quit(),
            Msg::Noop => Cmd::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let bounds = frame.bounds();
        if bounds.height == 0 {
            return;
        }

        // Carousel fills everything above the help line.
        let mut carousel_area = bounds;
        if bounds.height > 1 {
            carousel_area.height = bounds.height - 1;
        }
        let mut state = self.state.clone();
        StatefulWidget::render(&self.carousel, carousel_area, frame, &mut state);

        if bounds.height > 1 {
            let help = "\u{2190}/\u{2192} or click \u{2039} \u{203a} to navigate \u{b7} q to quit";
            let dim = Style::new().fg(Color::Ansi(8));
            draw_text_span(frame, 1, bounds.bottom() - 1, help, dim, bounds.right());
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let program = Program::with_terminal(DemoApp::new(), ProgramConfig::default())?;
    let app = program.run()?;
    tracing::info!(final_slide = app.state.cursor, "carousel closed");
    Ok(())
}
