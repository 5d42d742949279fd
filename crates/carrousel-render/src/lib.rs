#![forbid(unsafe_code)]

//! Render surface for Carrousel: cells, buffers, styles, and hit testing.
//!
//! Widgets draw into a [`Frame`], which bundles the cell grid ([`Buffer`])
//! with an optional [`HitGrid`] for mouse interaction. Presentation to a real
//! terminal lives in the runtime crate; this layer stays backend-agnostic.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod style;

pub use buffer::Buffer;
pub use cell::Cell;
pub use frame::{Frame, HitData, HitGrid, HitId, HitRegion};
pub use style::{Color, Style, StyleFlags};
