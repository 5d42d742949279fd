#![forbid(unsafe_code)]

//! Elm-style runtime for Carrousel applications.
//!
//! The runtime manages the update/view loop: it reads events from an
//! [`EventSource`], converts them to model messages, applies updates, and
//! presents the resulting frame. The model never talks to the terminal; it
//! only sees canonical events (with hit-test results attached) and draws
//! into a [`carrousel_render::Frame`].

pub mod event_source;
pub mod presenter;
pub mod program;

pub use event_source::{CrosstermEvents, EventSource, Polled, ScriptedEvents};
pub use program::{Cmd, Input, Model, Program, ProgramConfig};
