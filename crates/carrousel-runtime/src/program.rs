#![forbid(unsafe_code)]

//! Elm-style program loop.
//!
//! The runtime separates state (Model) from rendering (view) and drives both
//! from a single serialized event loop: every input runs to completion
//! (update, then re-render) before the next one is read, so models never need
//! locking.
//!
//! # Example
//!
//! ```
//! use carrousel_core::event::Event;
//! use carrousel_render::frame::Frame;
//! use carrousel_runtime::program::{Cmd, Input, Model};
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Quit,
//!     Noop,
//! }
//!
//! impl From<Input> for Msg {
//!     fn from(input: Input) -> Self {
//!         match input.event {
//!             Event::Key(k) if k.is_char('+') => Msg::Increment,
//!             Event::Key(k) if k.is_char('q') => Msg::Quit,
//!             _ => Msg::Noop,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Increment => {
//!                 self.count += 1;
//!                 Cmd::none()
//!             }
//!             Msg::Quit => Cmd::quit(),
//!             Msg::Noop => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self, _frame: &mut Frame) {}
//! }
//! ```

use crate::event_source::{CrosstermEvents, EventSource, Polled};
use crate::presenter;
use carrousel_core::event::Event;
use carrousel_render::frame::{Frame, HitData, HitId, HitRegion};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// An input event paired with the hit-test result against the last frame.
///
/// Mouse coordinates only mean something relative to what was on screen when
/// the click happened; resolving the hit here keeps message conversion pure
/// while still letting models route clicks to widget-registered regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// The canonical event.
    pub event: Event,
    /// Hit-test result for mouse events; `None` for everything else.
    pub hit: Option<(HitId, HitRegion, HitData)>,
}

impl Input {
    /// Wrap an event with no hit information.
    #[must_use]
    pub fn from_event(event: Event) -> Self {
        Self { event, hit: None }
    }
}

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages represent actions that update the model state. Must be
    /// convertible from resolved inputs.
    type Message: From<Input>;

    /// Initialize the model with startup commands.
    ///
    /// Called once when the program starts, before the first render.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);
}

/// Commands represent side effects to be executed by the runtime.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Quit the application.
    Quit,
    /// Send a message to the model.
    Msg(M),
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a batch of commands, flattening trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        if cmds.is_empty() {
            Self::None
        } else if cmds.len() == 1 {
            cmds.into_iter().next().unwrap_or(Self::None)
        } else {
            Self::Batch(cmds)
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// Configuration for the program runtime.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Input poll timeout.
    pub poll_timeout: Duration,
    /// Enable mouse capture.
    pub mouse: bool,
    /// Use the alternate screen.
    pub alt_screen: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
            mouse: true,
            alt_screen: true,
        }
    }
}

impl ProgramConfig {
    /// Set the input poll timeout.
    #[must_use]
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    /// Enable or disable mouse capture.
    #[must_use]
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }
}

/// The program runtime that manages the update/view loop.
pub struct Program<M: Model, S: EventSource = CrosstermEvents, W: Write = Stdout> {
    model: M,
    events: S,
    out: W,
    config: ProgramConfig,
    frame: Frame,
    quitting: bool,
}

impl<M: Model> Program<M, CrosstermEvents, Stdout> {
    /// Create a program attached to the current terminal.
    pub fn with_terminal(model: M, config: ProgramConfig) -> io::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::with_parts(
            model,
            CrosstermEvents::new(),
            io::stdout(),
            config,
            width,
            height,
        ))
    }

    /// Run the program on the terminal until the model quits.
    ///
    /// The terminal is restored before returning, on the error path too.
    pub fn run(mut self) -> io::Result<M> {
        self.setup_terminal()?;
        let loop_result = self.run_loop();
        let restore_result = self.restore_terminal();
        loop_result?;
        restore_result?;
        Ok(self.model)
    }

    fn setup_terminal(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        if self.config.alt_screen {
            execute!(self.out, EnterAlternateScreen)?;
        }
        if self.config.mouse {
            execute!(self.out, EnableMouseCapture)?;
        }
        execute!(self.out, Hide)
    }

    fn restore_terminal(&mut self) -> io::Result<()> {
        // Attempt every step even if an earlier one fails.
        let show = execute!(self.out, Show);
        let mouse = if self.config.mouse {
            execute!(self.out, DisableMouseCapture)
        } else {
            Ok(())
        };
        let screen = if self.config.alt_screen {
            execute!(self.out, LeaveAlternateScreen)
        } else {
            Ok(())
        };
        let raw = disable_raw_mode();
        show.and(mouse).and(screen).and(raw)
    }
}

impl<M: Model, S: EventSource, W: Write> Program<M, S, W> {
    /// Create a program from explicit parts, with an explicit frame size.
    ///
    /// Used by tests and headless hosts; `with_terminal` is the usual entry.
    pub fn with_parts(
        model: M,
        events: S,
        out: W,
        config: ProgramConfig,
        width: u16,
        height: u16,
    ) -> Self {
        Self {
            model,
            events,
            out,
            config,
            frame: Frame::with_hit_grid(width, height),
            quitting: false,
        }
    }

    /// Borrow the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the program and return the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Run the update/view loop without touching terminal modes.
    ///
    /// Returns when the model quits or the event source closes.
    pub fn run_headless(&mut self) -> io::Result<()> {
        self.run_loop()
    }

    fn run_loop(&mut self) -> io::Result<()> {
        tracing::debug!(
            message = "program.start",
            width = self.frame.width(),
            height = self.frame.height()
        );
        let cmd = self.model.init();
        self.process(cmd);
        if self.quitting {
            return Ok(());
        }
        self.draw()?;

        while !self.quitting {
            match self.events.next_event(self.config.poll_timeout)? {
                Polled::Idle => continue,
                Polled::Closed => break,
                Polled::Ready(event) => {
                    let input = self.resolve(event);
                    let cmd = self.model.update(M::Message::from(input));
                    self.process(cmd);
                    if self.quitting {
                        break;
                    }
                    self.draw()?;
                }
            }
        }
        tracing::debug!(message = "program.quit");
        Ok(())
    }

    /// Attach hit-test data to mouse events and track resizes.
    fn resolve(&mut self, event: Event) -> Input {
        if let Event::Resize { width, height } = event {
            self.frame = Frame::with_hit_grid(width, height);
        }
        let hit = match &event {
            Event::Mouse(mouse) => self.frame.hit_test(mouse.x, mouse.y),
            _ => None,
        };
        Input { event, hit }
    }

    fn process(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.quitting = true,
            Cmd::Msg(msg) => {
                let next = self.model.update(msg);
                self.process(next);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process(cmd);
                    if self.quitting {
                        break;
                    }
                }
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        self.frame.clear();
        self.model.view(&mut self.frame);
        presenter::present_full(&self.frame, &mut self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_source::ScriptedEvents;
    use carrousel_core::event::{KeyCode, KeyEvent};
    use carrousel_render::cell::Cell;

    struct Counter {
        count: i32,
        init_quits: bool,
    }

    enum Msg {
        Increment,
        Decrement,
        Quit,
        Noop,
    }

    impl From<Input> for Msg {
        fn from(input: Input) -> Self {
            match input.event {
                Event::Key(k) if k.is_char('+') => Msg::Increment,
                Event::Key(k) if k.is_char('-') => Msg::Decrement,
                Event::Key(k) if k.is_char('q') => Msg::Quit,
                _ => Msg::Noop,
            }
        }
    }

    impl Model for Counter {
        type Message = Msg;

        fn init(&mut self) -> Cmd<Msg> {
            if self.init_quits { Cmd::quit() } else { Cmd::none() }
        }

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Increment => {
                    self.count += 1;
                    Cmd::none()
                }
                Msg::Decrement => {
                    self.count -= 1;
                    Cmd::none()
                }
                Msg::Quit => Cmd::quit(),
                Msg::Noop => Cmd::none(),
            }
        }

        fn view(&self, frame: &mut Frame) {
            for (i, ch) in self.count.to_string().chars().enumerate() {
                frame.buffer.set(i as u16, 0, Cell::from_char(ch));
            }
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c)))
    }

    fn run_counter(events: Vec<Event>) -> (Counter, Vec<u8>) {
        let source = ScriptedEvents::new(events);
        let mut program = Program::with_parts(
            Counter {
                count: 0,
                init_quits: false,
            },
            source,
            Vec::new(),
            ProgramConfig::default(),
            10,
            2,
        );
        program.run_headless().unwrap();
        let Program { model, out, .. } = program;
        (model, out)
    }

    #[test]
    fn loop_applies_updates_until_quit() {
        let (model, out) = run_counter(vec![key('+'), key('+'), key('-'), key('q')]);
        assert_eq!(model.count, 1);
        assert!(!out.is_empty());
    }

    #[test]
    fn loop_stops_when_source_closes() {
        let (model, _) = run_counter(vec![key('+')]);
        assert_eq!(model.count, 1);
    }

    #[test]
    fn quit_during_init_skips_rendering() {
        let source = ScriptedEvents::new([key('+')]);
        let mut program = Program::with_parts(
            Counter {
                count: 0,
                init_quits: true,
            },
            source,
            Vec::new(),
            ProgramConfig::default(),
            10,
            2,
        );
        program.run_headless().unwrap();
        assert!(program.out.is_empty());
        assert_eq!(program.model().count, 0);
    }

    #[test]
    fn resize_recreates_frame() {
        let events = vec![
            Event::Resize {
                width: 30,
                height: 5,
            },
            key('q'),
        ];
        let source = ScriptedEvents::new(events);
        let mut program = Program::with_parts(
            Counter {
                count: 0,
                init_quits: false,
            },
            source,
            Vec::new(),
            ProgramConfig::default(),
            10,
            2,
        );
        program.run_headless().unwrap();
        assert_eq!(program.frame.width(), 30);
        assert_eq!(program.frame.height(), 5);
    }

    #[test]
    fn cmd_batch_flattens() {
        assert!(matches!(Cmd::<Msg>::batch(vec![]), Cmd::None));
        assert!(matches!(
            Cmd::batch(vec![Cmd::msg(Msg::Increment)]),
            Cmd::Msg(Msg::Increment)
        ));
        assert!(matches!(
            Cmd::batch(vec![Cmd::msg(Msg::Increment), Cmd::quit()]),
            Cmd::Batch(_)
        ));
    }

    #[test]
    fn cmd_msg_cascades_through_update() {
        struct Cascade {
            hops: u32,
        }
        enum CascadeMsg {
            Hop,
            Stop,
        }
        impl From<Input> for CascadeMsg {
            fn from(_: Input) -> Self {
                CascadeMsg::Stop
            }
        }
        impl Model for Cascade {
            type Message = CascadeMsg;

            fn init(&mut self) -> Cmd<CascadeMsg> {
                Cmd::msg(CascadeMsg::Hop)
            }

            fn update(&mut self, msg: CascadeMsg) -> Cmd<CascadeMsg> {
                match msg {
                    CascadeMsg::Hop => {
                        self.hops += 1;
                        if self.hops < 3 {
                            Cmd::msg(CascadeMsg::Hop)
                        } else {
                            Cmd::quit()
                        }
                    }
                    CascadeMsg::Stop => Cmd::quit(),
                }
            }

            fn view(&self, _frame: &mut Frame) {}
        }

        let source = ScriptedEvents::new([]);
        let mut program = Program::with_parts(
            Cascade { hops: 0 },
            source,
            Vec::new(),
            ProgramConfig::default(),
            4,
            1,
        );
        program.run_headless().unwrap();
        assert_eq!(program.model().hops, 3);
    }
}
