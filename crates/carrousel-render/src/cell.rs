#![forbid(unsafe_code)]

//! A single screen cell.

use crate::style::Style;

/// One cell of the terminal grid: a character plus its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character displayed in this cell.
    pub ch: char,
    /// The resolved style for this cell.
    pub style: Style,
}

impl Cell {
    /// An empty (space, unstyled) cell.
    pub const EMPTY: Cell = Cell {
        ch: ' ',
        style: Style::new(),
    };

    /// Create a cell from a character with the default style.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            style: Style::new(),
        }
    }

    /// Create a styled cell.
    #[must_use]
    pub const fn styled(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// Check whether this cell is visually empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ch == ' ' && self.style == Style::new()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn default_cell_is_empty() {
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn styled_cell_is_not_empty() {
        let cell = Cell::styled(' ', Style::new().fg(Color::Ansi(1)));
        assert!(!cell.is_empty());
        assert!(!Cell::from_char('x').is_empty());
    }
}
