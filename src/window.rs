//! Thumbnail window policy for the scrolling thumbnail strip.

/// Decision produced by [`ThumbnailWindow::decide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowMove {
    /// Scroll the strip so the thumbnail at this offset is leftmost
    Scroll(usize),
    /// Leave the strip where it is
    Hold,
}

/// The visible portion of the thumbnail strip.
///
/// The strip shows `size` thumbnails at a time. Scrolling by the raw slide
/// index near the end of the set would reveal empty space past the last
/// thumbnail, so the final indices hold the window and the second-to-last
/// index snaps it to the rightmost position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThumbnailWindow {
    /// Number of thumbnails visible at once
    pub size: usize,
}

impl Default for ThumbnailWindow {
    fn default() -> Self {
        Self { size: 4 }
    }
}

impl ThumbnailWindow {
    /// Create a window showing `size` thumbnails (at least one).
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    /// Decide how the strip moves when `index` becomes current in a set of
    /// `slide_count` slides.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use chart_carousel::{ThumbnailWindow, WindowMove};
    ///
    /// let window = ThumbnailWindow::default();
    /// assert_eq!(window.decide(3, 10), WindowMove::Scroll(3));
    /// assert_eq!(window.decide(8, 10), WindowMove::Scroll(6));
    /// assert_eq!(window.decide(9, 10), WindowMove::Hold);
    /// ```
    pub fn decide(&self, index: usize, slide_count: usize) -> WindowMove {
        if slide_count.checked_sub(2) == Some(index) {
            return WindowMove::Scroll(self.last_offset(slide_count));
        }
        if index >= self.last_offset(slide_count) {
            return WindowMove::Hold;
        }
        WindowMove::Scroll(index)
    }

    /// Offset at which the final `size` thumbnails fill the window.
    #[inline]
    pub fn last_offset(&self, slide_count: usize) -> usize {
        slide_count.saturating_sub(self.size)
    }

    /// Horizontal strip position in pixels for a window offset.
    ///
    /// `thumbnail_width` must include the thumbnail's horizontal margins.
    #[inline]
    pub fn pixel_offset(offset: usize, thumbnail_width: f64) -> f64 {
        -(offset as f64) * thumbnail_width
    }
}
