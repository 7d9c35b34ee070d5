//! Scroll geometry for the sidebar container.
//!
//! Tracks content height, viewport height, and the current scroll offset in
//! pixel units while providing clamped movement and centering on a target
//! row.

/// Clamped vertical scroll state for the sidebar container.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollArea {
    offset: u32,
    content_height: u32,
    viewport_height: u32,
}

impl ScrollArea {
    /// Returns current vertical scroll offset.
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns measured content height.
    pub const fn content_height(&self) -> u32 {
        self.content_height
    }

    /// Returns measured viewport height.
    pub const fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Returns the maximum valid scroll offset.
    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Updates viewport height and clamps current offset.
    pub fn update_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    /// Updates content height and clamps current offset.
    pub fn update_content_height(&mut self, content_height: u32) {
        self.content_height = content_height;
        self.clamp_offset();
    }

    /// Moves to an absolute offset, clamped to the valid range.
    pub fn set_offset(&mut self, offset: u32) {
        self.offset = offset.min(self.max_offset());
    }

    /// Centers the row starting at `row_top` in the viewport.
    pub fn center_on(&mut self, row_top: u32, row_height: u32) {
        let midpoint = row_top.saturating_add(row_height / 2);
        self.set_offset(midpoint.saturating_sub(self.viewport_height / 2));
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
