//! Pluggable look-and-feel for [`MultiSlider`](super::MultiSlider).

use multislider_core::{Canvas, Point, Rect, Size};

use super::arena::ThumbIndex;
use super::geometry::TrackLayout;
use super::scroll::ScrollDirection;
use super::state::SliderState;
use super::{ThumbChanged, ThumbReleased};

/// Pointer input forwarded to a delegate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Primary button went down
    Pressed(Point),
    /// Pointer moved
    Dragged(Point),
    /// Primary button went up
    Released(Point),
}

/// Slider property that changed after the delegate was installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyChange {
    /// Horizontal or vertical
    Orientation,
    /// Inversion flag
    Inverted,
    /// Minimum or maximum
    Range,
    /// Major or minor tick spacing, or snapping
    Ticks,
    /// Track, tick or label painting
    PaintFlags,
    /// Visual style
    Style,
    /// Bounded flag
    Bounded,
    /// Enabled flag
    Enabled,
    /// Widget bounds
    Bounds,
}

/// Message a delegate reports back from pointer handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderMessage {
    /// A thumb's value changed
    Changed(ThumbChanged),
    /// The gesture ended
    Released(ThumbReleased),
}

/// Geometry, hit testing, gesture handling and painting for a multi-slider.
///
/// A delegate is installed on exactly one slider at a time. The slider owns
/// the value models; a delegate only keeps derived state such as thumb
/// rectangles and must be able to rebuild it from [`SliderState`].
pub trait SliderDelegate: Send + Sync {
    /// Attach to a slider: allocate per-thumb state and subscribe to models.
    fn install(&mut self, state: &mut SliderState);

    /// Detach: drop subscriptions and per-thumb state.
    fn uninstall(&mut self, state: &mut SliderState);

    /// Recompute every rectangle from the bounds, then every thumb position.
    fn calculate_geometry(&mut self, state: &mut SliderState);

    /// React to a property change on the slider.
    fn property_changed(&mut self, state: &mut SliderState, change: PropertyChange) {
        log::trace!("slider property changed: {change:?}");
        self.calculate_geometry(state);
    }

    /// Bring thumb positions up to date if any value model changed.
    fn sync(&mut self, state: &mut SliderState);

    /// Size the slider would like to have.
    fn preferred_size(&self, state: &SliderState) -> Size {
        TrackLayout::preferred_size(state)
    }

    /// Paint the slider.
    fn paint(&self, state: &SliderState, canvas: &mut dyn Canvas);

    /// Handle a pointer press, move or release.
    fn handle_pointer(
        &mut self,
        state: &mut SliderState,
        input: PointerInput,
    ) -> Option<SliderMessage>;

    /// Advance timers to `now_ms`.
    fn tick(&mut self, state: &mut SliderState, now_ms: u64) -> Option<ThumbChanged>;

    /// Move the current thumb by one value unit.
    fn scroll_by_unit(
        &mut self,
        state: &mut SliderState,
        direction: ScrollDirection,
    ) -> Option<ThumbChanged>;

    /// Move the current thumb by one block (a tenth of the maximum).
    fn scroll_by_block(
        &mut self,
        state: &mut SliderState,
        direction: ScrollDirection,
    ) -> Option<ThumbChanged>;

    /// Thumb that keyboard and track input act on.
    fn current_index(&self) -> ThumbIndex;

    /// Rectangle of a thumb, if installed.
    fn thumb_rect(&self, index: ThumbIndex) -> Option<Rect>;

    /// Rectangle thumbs travel in.
    fn track_rect(&self) -> Rect {
        Rect::default()
    }
}
