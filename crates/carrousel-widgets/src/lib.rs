#![forbid(unsafe_code)]

//! Carousel widget for Carrousel.
//!
//! The widget layer renders into a [`Frame`] and never touches the terminal
//! directly, so the cyclic-cursor logic is testable without any backend.

pub mod carousel;
pub mod mouse;

pub use carousel::{Carousel, CarouselState, NEXT_CONTROL, PREV_CONTROL, Slide};
pub use mouse::MouseResult;

use carrousel_core::geometry::Rect;
use carrousel_render::cell::Cell;
use carrousel_render::frame::Frame;
use carrousel_render::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;
    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Display width of a string in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Draw a text span left-to-right starting at (x, y), clipped at `max_x`.
///
/// Returns the x position after the last cell written. Wide graphemes occupy
/// their full width; zero-width graphemes are skipped.
pub fn draw_text_span(
    frame: &mut Frame,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    let mut cursor = x;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width() as u16;
        if w == 0 {
            continue;
        }
        if cursor >= max_x || cursor.saturating_add(w) > max_x {
            break;
        }
        let ch = grapheme.chars().next().unwrap_or(' ');
        frame.buffer.set(cursor, y, Cell::styled(ch, style));
        for pad in 1..w {
            frame
                .buffer
                .set(cursor.saturating_add(pad), y, Cell::styled(' ', style));
        }
        cursor = cursor.saturating_add(w);
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_text_span_writes_and_advances() {
        let mut frame = Frame::new(10, 1);
        let end = draw_text_span(&mut frame, 2, 0, "hi", Style::new(), 10);
        assert_eq!(end, 4);
        assert_eq!(frame.buffer.row_text(0), "  hi      ");
    }

    #[test]
    fn draw_text_span_clips_at_max_x() {
        let mut frame = Frame::new(10, 1);
        let end = draw_text_span(&mut frame, 0, 0, "abcdef", Style::new(), 3);
        assert_eq!(end, 3);
        assert_eq!(frame.buffer.row_text(0), "abc       ");
    }

    #[test]
    fn draw_text_span_handles_wide_graphemes() {
        let mut frame = Frame::new(6, 1);
        let end = draw_text_span(&mut frame, 0, 0, "日本", Style::new(), 6);
        assert_eq!(end, 4);
        assert_eq!(frame.buffer.get(0, 0).unwrap().ch, '日');
        assert_eq!(frame.buffer.get(2, 0).unwrap().ch, '本');
    }

    #[test]
    fn display_width_counts_cells() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }
}
