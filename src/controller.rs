//! Carousel controller for slide navigation.

use crate::view::SlideView;
use crate::window::{ThumbnailWindow, WindowMove};

/// Navigation direction for the previous/next controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Move to the following slide, wrapping from last to first
    Next,
    /// Move to the preceding slide, wrapping from first to last
    Previous,
}

impl Direction {
    /// Resolve a control's direction attribute.
    ///
    /// Only a value equal to `previous_value` means [`Direction::Previous`];
    /// any other value, or no attribute at all, means [`Direction::Next`].
    pub fn from_attribute(value: Option<&str>, previous_value: &str) -> Self {
        match value {
            Some(v) if v == previous_value => Direction::Previous,
            _ => Direction::Next,
        }
    }
}

/// Navigation state machine for a carousel of slides with a thumbnail strip.
///
/// The controller owns the current index and the thumbnail window offset,
/// and drives a [`SlideView`] after every transition. A view with no slides
/// yields an inert controller that ignores all input.
///
/// ## Example
///
/// ```rust
/// use chart_carousel::{CarouselController, Direction, SlideView};
///
/// struct Panels(usize);
///
/// impl SlideView for Panels {
///     fn slide_count(&self) -> usize { self.0 }
///     fn show_slide(&mut self, _index: usize) {}
///     fn set_thumbnail_active(&mut self, _index: usize) {}
///     fn clear_all_thumbnail_active(&mut self) {}
///     fn scroll_thumbnails_to(&mut self, _offset: usize) {}
///     fn render_current_index(&mut self, _one_based_index: usize) {}
///     fn render_total_slides(&mut self, _count: usize) {}
/// }
///
/// let mut carousel = CarouselController::new(Panels(5));
/// assert!(carousel.is_enabled());
///
/// carousel.advance(Direction::Previous);
/// assert_eq!(carousel.current_index(), 4);
///
/// carousel.advance(Direction::Next);
/// assert_eq!(carousel.current_index(), 0);
/// ```
#[derive(Debug)]
pub struct CarouselController<V: SlideView> {
    view: V,
    /// Number of slides, fixed at construction
    slide_count: usize,
    /// Index of the displayed slide
    current_index: usize,
    /// Leftmost thumbnail in the visible window
    window_offset: usize,
    window: ThumbnailWindow,
    enabled: bool,
}

impl<V: SlideView> CarouselController<V> {
    /// Create a controller with the default four-thumbnail window.
    pub fn new(view: V) -> Self {
        Self::with_window(view, ThumbnailWindow::default())
    }

    /// Create a controller with a custom thumbnail window.
    ///
    /// Marks the first thumbnail active, renders the slide total and the
    /// current index, then enables navigation.
    pub fn with_window(view: V, window: ThumbnailWindow) -> Self {
        let slide_count = view.slide_count();
        let mut controller = Self {
            view,
            slide_count,
            current_index: 0,
            window_offset: 0,
            window,
            enabled: false,
        };
        controller.layout();
        controller.enable();
        controller
    }

    fn layout(&mut self) {
        if self.slide_count == 0 {
            tracing::warn!("carousel has no slides; navigation stays disabled");
            return;
        }
        self.view.set_thumbnail_active(0);
        self.view.render_total_slides(self.slide_count);
        self.view.render_current_index(self.current_index + 1);
    }

    /// Enable navigation.
    ///
    /// Returns `true` only when this call enabled the controller. Enabling
    /// twice is a no-op, and a controller without slides refuses to enable.
    pub fn enable(&mut self) -> bool {
        if self.enabled || self.slide_count == 0 {
            return false;
        }
        self.enabled = true;
        tracing::debug!(slides = self.slide_count, "carousel enabled");
        true
    }

    /// Check if navigation is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the number of slides.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Get the index of the displayed slide.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Get the offset of the leftmost visible thumbnail.
    #[inline]
    pub fn window_offset(&self) -> usize {
        self.window_offset
    }

    /// Get the thumbnail window policy.
    #[inline]
    pub fn window(&self) -> ThumbnailWindow {
        self.window
    }

    /// Borrow the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutably borrow the view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consume the controller and return the view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Jump to the slide for a clicked thumbnail.
    ///
    /// Clicking the thumbnail that is already active does nothing.
    pub fn select_thumbnail(&mut self, index: usize) {
        if !self.enabled {
            tracing::trace!(index, "thumbnail ignored: carousel disabled");
            return;
        }
        if index == self.current_index {
            tracing::trace!(index, "thumbnail already active");
            return;
        }
        debug_assert!(
            index < self.slide_count,
            "thumbnail {} out of range for {} slides",
            index,
            self.slide_count
        );
        if index >= self.slide_count {
            return;
        }

        tracing::debug!(from = self.current_index, to = index, "select thumbnail");
        self.current_index = index;
        self.update_display();
    }

    /// Step one slide in `direction`, wrapping at either end.
    pub fn advance(&mut self, direction: Direction) {
        if !self.enabled {
            tracing::trace!(?direction, "advance ignored: carousel disabled");
            return;
        }

        let n = self.slide_count;
        let next = match direction {
            Direction::Next => (self.current_index + 1) % n,
            Direction::Previous => (self.current_index + n - 1) % n,
        };
        debug_assert!(next < n, "computed index {} out of range for {} slides", next, n);
        if next >= n {
            return;
        }

        tracing::debug!(from = self.current_index, to = next, ?direction, "advance");
        self.current_index = next;
        self.update_display();
    }

    /// Handle the "next" control.
    pub fn on_next(&mut self) {
        self.advance(Direction::Next);
    }

    /// Handle the "previous" control.
    pub fn on_previous(&mut self) {
        self.advance(Direction::Previous);
    }

    /// Handle a click on the thumbnail at `index`.
    pub fn on_thumbnail_clicked(&mut self, index: usize) {
        self.select_thumbnail(index);
    }

    /// Bring the view in line with `current_index`.
    fn update_display(&mut self) {
        let index = self.current_index;

        self.view.clear_all_thumbnail_active();
        self.view.set_thumbnail_active(index);
        self.view.show_slide(index);

        match self.window.decide(index, self.slide_count) {
            WindowMove::Scroll(offset) => {
                tracing::debug!(offset, "scroll thumbnails");
                self.window_offset = offset;
                self.view.scroll_thumbnails_to(offset);
            }
            WindowMove::Hold => {
                tracing::trace!(offset = self.window_offset, "thumbnail window held");
            }
        }

        self.view.render_current_index(index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum ViewCall {
        Show(usize),
        Active(usize),
        ClearActive,
        Scroll(usize),
        Current(usize),
        Total(usize),
    }

    #[derive(Debug, Default)]
    struct RecordingView {
        slides: usize,
        calls: Vec<ViewCall>,
    }

    impl RecordingView {
        fn new(slides: usize) -> Self {
            Self {
                slides,
                calls: Vec::new(),
            }
        }
    }

    impl SlideView for RecordingView {
        fn slide_count(&self) -> usize {
            self.slides
        }
        fn show_slide(&mut self, index: usize) {
            self.calls.push(ViewCall::Show(index));
        }
        fn set_thumbnail_active(&mut self, index: usize) {
            self.calls.push(ViewCall::Active(index));
        }
        fn clear_all_thumbnail_active(&mut self) {
            self.calls.push(ViewCall::ClearActive);
        }
        fn scroll_thumbnails_to(&mut self, offset: usize) {
            self.calls.push(ViewCall::Scroll(offset));
        }
        fn render_current_index(&mut self, one_based_index: usize) {
            self.calls.push(ViewCall::Current(one_based_index));
        }
        fn render_total_slides(&mut self, count: usize) {
            self.calls.push(ViewCall::Total(count));
        }
    }

    fn controller(slides: usize) -> CarouselController<RecordingView> {
        let mut ctrl = CarouselController::new(RecordingView::new(slides));
        ctrl.view_mut().calls.clear();
        ctrl
    }

    #[test]
    fn test_construction_layout() {
        let ctrl = CarouselController::new(RecordingView::new(5));
        assert!(ctrl.is_enabled());
        assert_eq!(ctrl.current_index(), 0);
        assert_eq!(ctrl.slide_count(), 5);
        assert_eq!(ctrl.window_offset(), 0);
        assert_eq!(
            ctrl.view().calls,
            vec![ViewCall::Active(0), ViewCall::Total(5), ViewCall::Current(1)]
        );
    }

    #[test]
    fn test_enable_is_idempotent() {
        let mut ctrl = controller(3);
        assert!(!ctrl.enable());
        assert!(ctrl.is_enabled());
        assert!(ctrl.view().calls.is_empty());
    }

    #[test]
    fn test_empty_view_is_inert() {
        let mut ctrl = CarouselController::new(RecordingView::new(0));
        assert!(!ctrl.is_enabled());
        assert!(!ctrl.enable());

        ctrl.advance(Direction::Next);
        ctrl.advance(Direction::Previous);
        ctrl.select_thumbnail(0);

        assert_eq!(ctrl.current_index(), 0);
        assert!(ctrl.view().calls.is_empty());
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut ctrl = controller(5);
        ctrl.advance(Direction::Previous);

        assert_eq!(ctrl.current_index(), 4);
        let calls = &ctrl.view().calls;
        assert!(calls.contains(&ViewCall::Show(4)));
        assert_eq!(calls.last(), Some(&ViewCall::Current(5)));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut ctrl = controller(5);
        ctrl.select_thumbnail(4);
        ctrl.view_mut().calls.clear();

        ctrl.advance(Direction::Next);

        assert_eq!(ctrl.current_index(), 0);
        let calls = &ctrl.view().calls;
        assert!(calls.contains(&ViewCall::Show(0)));
        assert_eq!(calls.last(), Some(&ViewCall::Current(1)));
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut ctrl = controller(1);
        ctrl.advance(Direction::Next);
        assert_eq!(ctrl.current_index(), 0);
        ctrl.advance(Direction::Previous);
        assert_eq!(ctrl.current_index(), 0);
    }

    #[test]
    fn test_index_stays_in_range() {
        for n in 1..12 {
            let mut ctrl = controller(n);
            // Deterministic mixed sequence of steps
            for step in 0..(n * 7) {
                let direction = if step % 3 == 0 {
                    Direction::Previous
                } else {
                    Direction::Next
                };
                ctrl.advance(direction);
                assert!(ctrl.current_index() < n);
                assert!(ctrl.window_offset() < n);
            }
        }
    }

    #[test]
    fn test_next_cycles_back_after_n_steps() {
        for n in 1..10 {
            for start in 0..n {
                let mut ctrl = controller(n);
                if start != 0 {
                    ctrl.select_thumbnail(start);
                }
                for _ in 0..n {
                    ctrl.advance(Direction::Next);
                }
                assert_eq!(ctrl.current_index(), start);
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        let mut ctrl = controller(7);
        for start in 0..7 {
            ctrl.select_thumbnail(start);
            ctrl.advance(Direction::Next);
            ctrl.advance(Direction::Previous);
            assert_eq!(ctrl.current_index(), start);
        }
    }

    #[test]
    fn test_select_current_thumbnail_is_noop() {
        let mut ctrl = controller(6);
        ctrl.select_thumbnail(0);
        assert!(ctrl.view().calls.is_empty());

        ctrl.select_thumbnail(2);
        ctrl.view_mut().calls.clear();
        ctrl.on_thumbnail_clicked(2);
        assert!(ctrl.view().calls.is_empty());
        assert_eq!(ctrl.current_index(), 2);
    }

    #[test]
    fn test_display_update_sequence() {
        let mut ctrl = controller(10);
        ctrl.select_thumbnail(3);
        assert_eq!(
            ctrl.view().calls,
            vec![
                ViewCall::ClearActive,
                ViewCall::Active(3),
                ViewCall::Show(3),
                ViewCall::Scroll(3),
                ViewCall::Current(4),
            ]
        );
        assert_eq!(ctrl.window_offset(), 3);
    }

    #[test]
    fn test_second_to_last_snaps_window() {
        let mut ctrl = controller(10);
        ctrl.select_thumbnail(8);
        assert_eq!(ctrl.window_offset(), 6);
        assert!(ctrl.view().calls.contains(&ViewCall::Scroll(6)));
        assert_eq!(ctrl.view().calls.last(), Some(&ViewCall::Current(9)));
    }

    #[test]
    fn test_last_slide_holds_window() {
        let mut ctrl = controller(10);
        ctrl.select_thumbnail(8);
        ctrl.view_mut().calls.clear();

        ctrl.on_next();

        assert_eq!(ctrl.current_index(), 9);
        assert_eq!(ctrl.window_offset(), 6);
        assert_eq!(
            ctrl.view().calls,
            vec![
                ViewCall::ClearActive,
                ViewCall::Active(9),
                ViewCall::Show(9),
                ViewCall::Current(10),
            ]
        );
    }

    #[test]
    fn test_wrap_from_first_holds_window() {
        let mut ctrl = controller(10);
        ctrl.on_previous();
        assert_eq!(ctrl.current_index(), 9);
        assert_eq!(ctrl.window_offset(), 0);
        assert!(!ctrl
            .view()
            .calls
            .iter()
            .any(|c| matches!(c, ViewCall::Scroll(_))));
    }

    #[test]
    fn test_custom_window_size() {
        let mut ctrl = CarouselController::with_window(RecordingView::new(8), ThumbnailWindow::new(3));
        ctrl.select_thumbnail(6);
        assert_eq!(ctrl.window_offset(), 5);
        assert_eq!(ctrl.window().size, 3);
    }

    #[test]
    fn test_direction_from_attribute() {
        assert_eq!(
            Direction::from_attribute(Some("previous"), "previous"),
            Direction::Previous
        );
        assert_eq!(Direction::from_attribute(Some("next"), "previous"), Direction::Next);
        assert_eq!(Direction::from_attribute(None, "previous"), Direction::Next);
    }
}
