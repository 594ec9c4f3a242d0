//! View capability driven by the carousel controller.

/// Rendering surface for a carousel.
///
/// Implement this trait to connect the controller to your platform
/// (a DOM document, a terminal UI, a test recorder, etc.). The controller
/// only ever passes indices in `0..slide_count()`.
///
/// Methods take `&mut self` so implementations can record or buffer
/// commands. Transitions are fire-and-forget: the controller never waits
/// for a reveal or scroll animation to finish.
pub trait SlideView {
    /// Number of navigable slides. Queried once at construction.
    fn slide_count(&self) -> usize;

    /// Hide every slide and reveal the slide at `index`.
    fn show_slide(&mut self, index: usize);

    /// Mark the thumbnail at `index` as active.
    fn set_thumbnail_active(&mut self, index: usize);

    /// Remove the active marker from every thumbnail.
    fn clear_all_thumbnail_active(&mut self);

    /// Move the thumbnail strip so the thumbnail at `offset` is leftmost.
    fn scroll_thumbnails_to(&mut self, offset: usize);

    /// Update the "current slide" text with a 1-based number.
    fn render_current_index(&mut self, one_based_index: usize);

    /// Update the "total slides" text. Called once at construction.
    fn render_total_slides(&mut self, count: usize);
}
