#![forbid(unsafe_code)]

//! Core types for Carrousel: canonical input events and geometry.
//!
//! This crate is dependency-light on purpose. The render, widget, and runtime
//! layers all speak these types; none of them needs to agree on a terminal
//! backend to do so.

pub mod event;
pub mod geometry;

pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::Rect;
