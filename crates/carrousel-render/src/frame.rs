#![forbid(unsafe_code)]

//! Frame = Buffer + hit-test metadata for a render pass.
//!
//! The `Frame` is the render target that `Model::view()` methods write to.
//! It bundles the cell grid ([`Buffer`]) with an optional [`HitGrid`] so
//! widgets can register clickable regions while drawing.

use crate::buffer::Buffer;
use carrousel_core::geometry::Rect;

/// Identifier for a clickable region in the hit grid.
///
/// Widgets register hit regions with unique IDs to enable mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Opaque user data for hit callbacks.
pub type HitData = u64;

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// Main content area.
    Content,
    /// Clickable button.
    Button,
}

/// A single hit cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct HitCell {
    widget_id: Option<HitId>,
    region: HitRegion,
    data: HitData,
}

/// Hit testing grid for mouse interaction.
///
/// Maps screen positions to widget IDs, enabling widgets to receive mouse
/// events for their regions. Overlapping registrations are last-writer-wins.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![HitCell::default(); size],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Register a clickable region with the given hit metadata.
    ///
    /// All cells within the rectangle map to this hit cell; the rectangle is
    /// clipped to the grid.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize) as u16;
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize) as u16;

        let hit_cell = HitCell {
            widget_id: Some(widget_id),
            region,
            data,
        };
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = hit_cell;
                }
            }
        }
    }

    /// Hit test at the given position.
    ///
    /// Returns the hit tuple if a region is registered at (x, y).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.index(x, y).and_then(|i| {
            let cell = &self.cells[i];
            cell.widget_id.map(|id| (id, cell.region, cell.data))
        })
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Frame = Buffer + metadata for a render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this render pass.
    pub buffer: Buffer,

    /// Optional hit grid for mouse hit testing.
    ///
    /// When `Some`, widgets can register clickable regions.
    pub hit_grid: Option<HitGrid>,
}

impl Frame {
    /// Create a new frame with given dimensions and no hit grid.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
        }
    }

    /// Create a frame with hit testing enabled.
    #[must_use]
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: Some(HitGrid::new(width, height)),
        }
    }

    /// Frame width in cells.
    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in cells.
    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Get the bounding rectangle of the frame.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Clear frame for the next render pass.
    ///
    /// Resets both the buffer and hit grid (if present).
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(ref mut grid) = self.hit_grid {
            grid.clear();
        }
    }

    /// Register a hit region (if hit testing is enabled).
    ///
    /// Returns `true` if the region was registered, `false` if no hit grid.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, region: HitRegion, data: HitData) -> bool {
        if let Some(ref mut grid) = self.hit_grid {
            grid.register(rect, id, region, data);
            true
        } else {
            false
        }
    }

    /// Hit test at the given position (if hit testing is enabled).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref().and_then(|grid| grid.hit_test(x, y))
    }
}

impl Default for Frame {
    /// Create a 1x1 frame (minimum size).
    fn default() -> Self {
        Self::new(1, 1)
    }
}
