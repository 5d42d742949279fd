#![forbid(unsafe_code)]

//! Carousel widget.
//!
//! A fixed, ordered set of slides with exactly one visible at a time. The
//! cursor advances or retreats one slide per input, wrapping at both ends.
//! The slide set is established at construction and never resized or
//! reordered afterwards.

use crate::mouse::MouseResult;
use crate::{StatefulWidget, Widget, display_width, draw_text_span};
use carrousel_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use carrousel_core::geometry::Rect;
use carrousel_render::frame::{Frame, HitData, HitId, HitRegion};
use carrousel_render::style::Style;
#[cfg(feature = "tracing")]
use web_time::Instant;

/// Hit data for the "previous" control.
pub const PREV_CONTROL: HitData = 0;
/// Hit data for the "next" control.
pub const NEXT_CONTROL: HitData = 1;

/// A single slide entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    title: String,
    caption: String,
    style: Style,
}

impl Slide {
    /// Create a new slide with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: String::new(),
            style: Style::default(),
        }
    }

    /// Set the caption shown under the title.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Set style for this slide.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Get the slide title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the slide caption.
    #[must_use]
    pub fn caption_text(&self) -> &str {
        &self.caption
    }
}

/// State for a [`Carousel`] widget: the cursor identifying the active slide.
///
/// The cursor is only ever mutated by [`advance`](Self::advance) and
/// [`retreat`](Self::retreat); after either, the active slide is always in
/// `[0, slide_count - 1]` when the set is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselState {
    /// Active slide index.
    pub cursor: usize,
}

impl CarouselState {
    /// Move the cursor forward by one, wrapping past the last slide.
    ///
    /// Returns whether the cursor moved. With an empty slide set this is a
    /// no-op; with a single slide the cursor wraps onto itself.
    pub fn advance(&mut self, slide_count: usize) -> bool {
        if slide_count == 0 {
            return false;
        }
        let from = self.cursor.min(slide_count - 1);
        let to = (from + 1) % slide_count;
        self.set_cursor(from, to, "advance")
    }

    /// Move the cursor backward by one, wrapping before the first slide.
    ///
    /// Same guarantees as [`advance`](Self::advance).
    pub fn retreat(&mut self, slide_count: usize) -> bool {
        if slide_count == 0 {
            return false;
        }
        let from = self.cursor.min(slide_count - 1);
        let to = (from + slide_count - 1) % slide_count;
        self.set_cursor(from, to, "retreat")
    }

    fn set_cursor(&mut self, from: usize, to: usize, _reason: &str) -> bool {
        self.cursor = to;
        if from == to {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "carousel.switch", reason = _reason, from, to);
        true
    }

    /// The active slide index, or `None` when the set is empty.
    #[must_use]
    pub fn active(&self, slide_count: usize) -> Option<usize> {
        if slide_count == 0 {
            None
        } else {
            Some(self.cursor.min(slide_count - 1))
        }
    }

    /// Whether the slide at `index` is the active one.
    ///
    /// Exactly one index in `[0, slide_count - 1]` answers `true` for a
    /// non-empty set; every index answers `false` for an empty one.
    #[must_use]
    pub fn is_active(&self, index: usize, slide_count: usize) -> bool {
        self.active(slide_count) == Some(index)
    }

    /// Handle keyboard navigation.
    ///
    /// Supported: `Left` (retreat) and `Right` (advance).
    pub fn handle_key(&mut self, key: &KeyEvent, slide_count: usize) -> bool {
        match key.code {
            KeyCode::Left => self.retreat(slide_count),
            KeyCode::Right => self.advance(slide_count),
            _ => false,
        }
    }

    /// Handle mouse selection on the carousel controls.
    ///
    /// Hit data convention: the previous control registers
    /// `data = PREV_CONTROL`, the next control `data = NEXT_CONTROL`.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
        slide_count: usize,
    ) -> MouseResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((id, HitRegion::Button, data)) = hit
                    && id == expected_id
                {
                    let moved = match data {
                        PREV_CONTROL => self.retreat(slide_count),
                        NEXT_CONTROL => self.advance(slide_count),
                        _ => false,
                    };
                    if moved {
                        return MouseResult::Moved(self.cursor);
                    }
                }
                MouseResult::Ignored
            }
            _ => MouseResult::Ignored,
        }
    }
}

/// Carousel widget.
#[derive(Debug, Clone, Default)]
pub struct Carousel<'a> {
    slides: Vec<Slide>,
    style: Style,
    active_style: Style,
    prev_marker: &'a str,
    next_marker: &'a str,
    hit_id: Option<HitId>,
}

impl<'a> Carousel<'a> {
    /// Create a carousel from an iterator of slides.
    #[must_use]
    pub fn new(slides: impl IntoIterator<Item = Slide>) -> Self {
        Self {
            slides: slides.into_iter().collect(),
            style: Style::default(),
            active_style: Style::default(),
            prev_marker: "\u{2039}",
            next_marker: "\u{203a}",
            hit_id: None,
        }
    }

    /// Set base style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set style merged over the active slide's title.
    #[must_use]
    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    /// Set the marker drawn for the previous control.
    #[must_use]
    pub fn prev_marker(mut self, marker: &'a str) -> Self {
        self.prev_marker = marker;
        self
    }

    /// Set the marker drawn for the next control.
    #[must_use]
    pub fn next_marker(mut self, marker: &'a str) -> Self {
        self.next_marker = marker;
        self
    }

    /// Set hit id for mouse interactions.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Immutable slide slice.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the slide set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Advance the cursor over this carousel's slides.
    pub fn advance(&self, state: &mut CarouselState) -> bool {
        state.advance(self.slides.len())
    }

    /// Retreat the cursor over this carousel's slides.
    pub fn retreat(&self, state: &mut CarouselState) -> bool {
        state.retreat(self.slides.len())
    }

    /// Route a key event to this carousel.
    pub fn handle_key(&self, state: &mut CarouselState, key: &KeyEvent) -> bool {
        state.handle_key(key, self.slides.len())
    }

    /// Route a mouse event to this carousel.
    ///
    /// Without a configured hit id the widget has no controls to match, so
    /// every event is ignored.
    pub fn handle_mouse(
        &self,
        state: &mut CarouselState,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> MouseResult {
        match self.hit_id {
            Some(id) => state.handle_mouse(event, hit, id, self.slides.len()),
            None => MouseResult::Ignored,
        }
    }

    fn draw_centered(&self, frame: &mut Frame, area: Rect, y: u16, text: &str, style: Style) {
        let width = display_width(text) as u16;
        let x = if width >= area.width {
            area.x
        } else {
            area.x + (area.width - width) / 2
        };
        draw_text_span(frame, x, y, text, style, area.right());
    }

    fn indicator_line(&self, active: usize) -> String {
        let mut out = String::new();
        for idx in 0..self.slides.len() {
            if idx > 0 {
                out.push(' ');
            }
            out.push(if idx == active { '\u{25cf}' } else { '\u{25cb}' });
        }
        out
    }
}

impl StatefulWidget for Carousel<'_> {
    type State = CarouselState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();

        if area.is_empty() || self.slides.is_empty() {
            return;
        }

        // Defensive clamp; the slide set is fixed, but the state is host-owned.
        let active = state.cursor.min(self.slides.len() - 1);
        state.cursor = active;

        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "carousel.render",
            slide_count = self.slides.len(),
            active_slide = active,
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        frame.buffer.set_style_area(area, self.style);

        let prev_w = display_width(self.prev_marker) as u16;
        let next_w = display_width(self.next_marker) as u16;
        let marker_y = area.y + (area.height - 1) / 2;

        draw_text_span(
            frame,
            area.x,
            marker_y,
            self.prev_marker,
            self.style,
            area.right(),
        );
        let next_x = area.right().saturating_sub(next_w);
        draw_text_span(
            frame,
            next_x,
            marker_y,
            self.next_marker,
            self.style,
            area.right(),
        );

        if let Some(id) = self.hit_id {
            frame.register_hit(
                Rect::new(area.x, area.y, prev_w.max(1), area.height),
                id,
                HitRegion::Button,
                PREV_CONTROL,
            );
            frame.register_hit(
                Rect::new(next_x, area.y, next_w.max(1), area.height),
                id,
                HitRegion::Button,
                NEXT_CONTROL,
            );
        }

        // Interior between the two controls, one cell of breathing room each side.
        let pad = 1u16;
        let inner_x = area.x.saturating_add(prev_w + pad);
        let inner_w = area
            .width
            .saturating_sub(prev_w + next_w)
            .saturating_sub(pad * 2);
        if inner_w == 0 {
            return;
        }
        let inner = Rect::new(inner_x, area.y, inner_w, area.height);

        let slide = &self.slides[active];
        let title_style = self
            .style
            .merge(&slide.style)
            .merge(&self.active_style);
        self.draw_centered(frame, inner, inner.y, slide.title(), title_style);

        if area.height >= 3 && !slide.caption_text().is_empty() {
            let caption_style = self.style.merge(&slide.style);
            self.draw_centered(frame, inner, inner.y + 1, slide.caption_text(), caption_style);
        }

        if area.height >= 2 {
            let dots = self.indicator_line(active);
            self.draw_centered(frame, inner, area.bottom() - 1, &dots, self.style);
        }

        #[cfg(feature = "tracing")]
        {
            let elapsed_us = render_start.elapsed().as_micros() as u64;
            render_span.record("render_duration_us", elapsed_us);
        }
    }
}

impl Widget for Carousel<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let mut state = CarouselState::default();
        StatefulWidget::render(self, area, frame, &mut state);
    }
}
