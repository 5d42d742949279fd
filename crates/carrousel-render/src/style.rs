#![forbid(unsafe_code)]

//! Style and color primitives.
//!
//! [`Style`] uses cascade semantics: unset fields inherit from whatever the
//! style is merged over, so widgets can layer a base style, a per-slide
//! style, and an active-state style without clobbering each other.

use bitflags::bitflags;

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 basic ANSI colors (0-15).
    Ansi(u8),
    /// A 24-bit RGB color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Create an RGB color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

/// A text style with cascade semantics.
///
/// `None` fields are "unset" and defer to the style underneath when merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Color>,
    /// Background color, if set.
    pub bg: Option<Color>,
    /// Attribute flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// The empty style: everything unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Convenience: bold text.
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attr(StyleFlags::BOLD)
    }

    /// Convenience: reverse video.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_attr(StyleFlags::REVERSE)
    }

    fn add_attr(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | flag);
        self
    }

    /// Merge `other` over `self`: set fields in `other` win.
    #[must_use]
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: match (self.attrs, other.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => b.or(a),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_set_fields_win() {
        let base = Style::new().fg(Color::Ansi(7)).bg(Color::Ansi(0));
        let over = Style::new().fg(Color::rgb(255, 0, 0));
        let merged = base.merge(&over);
        assert_eq!(merged.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(merged.bg, Some(Color::Ansi(0)));
    }

    #[test]
    fn merge_unions_attrs() {
        let base = Style::new().bold();
        let over = Style::new().reverse();
        let merged = base.merge(&over);
        let attrs = merged.attrs.unwrap();
        assert!(attrs.contains(StyleFlags::BOLD));
        assert!(attrs.contains(StyleFlags::REVERSE));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let style = Style::new().fg(Color::Ansi(4)).bold();
        assert_eq!(style.merge(&Style::new()), style);
        assert_eq!(Style::new().merge(&style), style);
    }
}
