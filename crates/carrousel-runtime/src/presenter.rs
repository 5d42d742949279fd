#![forbid(unsafe_code)]

//! Full-frame ANSI presentation.
//!
//! Translates a rendered [`Frame`] into crossterm commands on any writer.
//! The carousel redraws a handful of cells per interaction, so a full-frame
//! present is cheap; there is no diffing layer.

use carrousel_render::frame::Frame;
use carrousel_render::style::{Color, Style, StyleFlags};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor};
use std::io::{self, Write};

/// Present the whole frame to `out`, row by row, and flush.
///
/// Leaves the terminal with colors and attributes reset.
pub fn present_full<W: Write>(frame: &Frame, out: &mut W) -> io::Result<()> {
    let mut last_style: Option<Style> = None;
    for y in 0..frame.height() {
        queue!(out, MoveTo(0, y))?;
        for x in 0..frame.width() {
            let Some(cell) = frame.buffer.get(x, y) else {
                continue;
            };
            if last_style != Some(cell.style) {
                apply_style(out, cell.style)?;
                last_style = Some(cell.style);
            }
            queue!(out, Print(cell.ch))?;
        }
    }
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    out.flush()
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(convert_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(convert_color(bg)))?;
    }
    if let Some(attrs) = style.attrs {
        if attrs.contains(StyleFlags::BOLD) {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if attrs.contains(StyleFlags::DIM) {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        if attrs.contains(StyleFlags::ITALIC) {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        if attrs.contains(StyleFlags::UNDERLINE) {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        if attrs.contains(StyleFlags::REVERSE) {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
    }
    Ok(())
}

fn convert_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Ansi(n) => crossterm::style::Color::AnsiValue(n),
        Color::Rgb(r, g, b) => crossterm::style::Color::Rgb { r, g, b },
    }
}
