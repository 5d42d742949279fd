#![forbid(unsafe_code)]

//! The cell grid widgets draw into.

use crate::cell::Cell;
use crate::style::Style;
use carrousel_core::geometry::Rect;

/// A row-major grid of [`Cell`]s.
///
/// All access is bounds-checked; writes outside the grid are ignored rather
/// than panicking, so widgets can draw against a clipped area safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with empty cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The bounding rectangle of the buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell at (x, y); out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Merge a style over every cell in `area`, clipped to the buffer.
    pub fn set_style_area(&mut self, area: Rect, style: Style) {
        let clipped = self.bounds().intersection(&area);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.style = cell.style.merge(&style);
                }
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// The text content of row `y`, one char per cell.
    ///
    /// Intended for tests and snapshots.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map_or(' ', |cell| cell.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, StyleFlags};

    #[test]
    fn new_buffer_is_empty() {
        let buf = Buffer::new(4, 2);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.row_text(0), "    ");
        assert!(buf.get(0, 0).unwrap().is_empty());
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut buf = Buffer::new(3, 3);
        buf.set(1, 2, Cell::from_char('x'));
        assert_eq!(buf.get(1, 2).unwrap().ch, 'x');
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut buf = Buffer::new(2, 2);
        buf.set(5, 5, Cell::from_char('x'));
        assert!(buf.get(5, 5).is_none());
        assert_eq!(buf.row_text(0), "  ");
    }

    #[test]
    fn set_style_area_clips_and_merges() {
        let mut buf = Buffer::new(4, 2);
        buf.set(0, 0, Cell::styled('a', Style::new().fg(Color::Ansi(1))));
        buf.set_style_area(Rect::new(0, 0, 10, 1), Style::new().attrs(StyleFlags::BOLD));
        let cell = buf.get(0, 0).unwrap();
        assert_eq!(cell.style.fg, Some(Color::Ansi(1)));
        assert!(cell.style.attrs.unwrap().contains(StyleFlags::BOLD));
        // Row 1 untouched.
        assert!(buf.get(0, 1).unwrap().is_empty());
    }

    #[test]
    fn clear_resets_cells() {
        let mut buf = Buffer::new(2, 1);
        buf.set(0, 0, Cell::from_char('z'));
        buf.clear();
        assert!(buf.get(0, 0).unwrap().is_empty());
    }
}
