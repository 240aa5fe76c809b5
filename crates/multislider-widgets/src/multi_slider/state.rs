//! Slider-side state consumed by delegates.

use multislider_core::{Color, ListenerId, RangeChange, RangeModel, Rect, Size};
use serde::{Deserialize, Serialize};

use super::arena::{ThumbArena, ThumbIndex};

/// Slider orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Values grow left to right
    #[default]
    Horizontal,
    /// Values grow bottom to top
    Vertical,
}

/// Visual parameters of a multi-slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Thumb size for a horizontal slider; swapped when vertical
    pub thumb_size: Size,
    /// Thickness of the painted track groove
    pub track_thickness: f32,
    /// Length of a major tick
    pub tick_length: f32,
    /// Space reserved for labels across the main axis
    pub label_extent: f32,
    /// Padding between the bounds and the content rectangle
    pub focus_inset: f32,
    /// Track groove color
    pub track_color: Color,
    /// Tick color
    pub tick_color: Color,
    /// Thumb color
    pub thumb_color: Color,
    /// Color of the current thumb while focused
    pub current_thumb_color: Color,
    /// Thumb color when disabled
    pub disabled_color: Color,
    /// Focus ring color
    pub focus_color: Color,
    /// Label text color
    pub label_color: Color,
    /// Label font size
    pub label_size: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            thumb_size: Size::new(12.0, 20.0),
            track_thickness: 4.0,
            tick_length: 8.0,
            label_extent: 16.0,
            focus_inset: 2.0,
            track_color: Color::from_hex("#cccccc").unwrap_or(Color::BLACK),
            tick_color: Color::from_hex("#666666").unwrap_or(Color::BLACK),
            thumb_color: Color::WHITE,
            current_thumb_color: Color::from_hex("#3399ff").unwrap_or(Color::BLACK),
            disabled_color: Color::from_hex("#999999").unwrap_or(Color::BLACK),
            focus_color: Color::from_hex("#3399ff99").unwrap_or(Color::BLACK),
            label_color: Color::BLACK,
            label_size: 11.0,
        }
    }
}

impl SliderStyle {
    /// Thumb size for the given orientation.
    #[must_use]
    pub const fn thumb_size_for(&self, orientation: Orientation) -> Size {
        match orientation {
            Orientation::Horizontal => self.thumb_size,
            Orientation::Vertical => Size::new(self.thumb_size.height, self.thumb_size.width),
        }
    }
}

/// Everything a delegate may read or change on the slider it is installed on.
///
/// All thumbs share the slider's `[minimum, maximum]` range.
#[derive(Debug)]
pub struct SliderState {
    models: ThumbArena<RangeModel>,
    min: i32,
    max: i32,
    pub(crate) orientation: Orientation,
    pub(crate) inverted: bool,
    pub(crate) bounded: bool,
    pub(crate) snap_to_ticks: bool,
    pub(crate) major_tick_spacing: i32,
    pub(crate) minor_tick_spacing: i32,
    pub(crate) paint_track: bool,
    pub(crate) paint_ticks: bool,
    pub(crate) paint_labels: bool,
    pub(crate) enabled: bool,
    pub(crate) focused: bool,
    pub(crate) style: SliderStyle,
    value_before_change: i32,
    bounds: Rect,
    clock_ms: u64,
}

impl SliderState {
    /// Create state for `values.len()` thumbs on `[min, max]`.
    ///
    /// The caller guarantees at least one value and `min <= max`.
    pub(crate) fn new(values: &[i32], min: i32, max: i32) -> Self {
        Self {
            models: ThumbArena::from_fn(values.len(), |i| {
                RangeModel::new(values[i.get()], min, max)
            }),
            min,
            max,
            orientation: Orientation::Horizontal,
            inverted: false,
            bounded: false,
            snap_to_ticks: false,
            major_tick_spacing: 0,
            minor_tick_spacing: 0,
            paint_track: true,
            paint_ticks: false,
            paint_labels: false,
            enabled: true,
            focused: false,
            style: SliderStyle::default(),
            value_before_change: values.first().copied().unwrap_or(min),
            bounds: Rect::default(),
            clock_ms: 0,
        }
    }

    /// Number of thumbs.
    #[must_use]
    pub fn thumb_count(&self) -> usize {
        self.models.len()
    }

    /// Validate a raw thumb index.
    #[must_use]
    pub fn index(&self, raw: usize) -> Option<ThumbIndex> {
        self.models.index(raw)
    }

    /// All thumb indices, ascending.
    pub fn indices(&self) -> impl DoubleEndedIterator<Item = ThumbIndex> {
        self.models.indices()
    }

    /// Value model of a thumb, `None` for an index from another slider.
    #[must_use]
    pub fn model_at(&self, index: ThumbIndex) -> Option<&RangeModel> {
        self.models.get(index)
    }

    /// Value of a thumb, `None` for an index from another slider.
    #[must_use]
    pub fn value_at(&self, index: ThumbIndex) -> Option<i32> {
        self.models.get(index).map(RangeModel::value)
    }

    /// Set the value of a thumb. Returns `true` if the model changed.
    pub fn set_value_at(&mut self, index: ThumbIndex, value: i32) -> bool {
        self.models
            .get_mut(index)
            .is_some_and(|model| model.set_value(value))
    }

    /// Whether a gesture is adjusting this thumb.
    #[must_use]
    pub fn value_is_adjusting_at(&self, index: ThumbIndex) -> bool {
        self.models.get(index).is_some_and(RangeModel::is_adjusting)
    }

    /// Set or clear the adjusting flag of a thumb.
    pub fn set_value_is_adjusting_at(&mut self, index: ThumbIndex, adjusting: bool) -> bool {
        self.models
            .get_mut(index)
            .is_some_and(|model| model.set_adjusting(adjusting))
    }

    /// Subscribe to one thumb's value model.
    pub fn subscribe_at<F>(&mut self, index: ThumbIndex, listener: F) -> Option<ListenerId>
    where
        F: Fn(&RangeChange) + Send + Sync + 'static,
    {
        self.models
            .get_mut(index)
            .map(|model| model.subscribe(listener))
    }

    /// Drop a subscription made with [`Self::subscribe_at`].
    pub fn unsubscribe_at(&mut self, index: ThumbIndex, id: ListenerId) -> bool {
        self.models
            .get_mut(index)
            .is_some_and(|model| model.unsubscribe(id))
    }

    /// Values a bounded thumb may take: between its neighbours' values, or the
    /// range ends where it has none.
    #[must_use]
    pub fn neighbour_values(&self, index: ThumbIndex) -> (i32, i32) {
        let low = index
            .prev()
            .and_then(|prev| self.value_at(prev))
            .unwrap_or(self.min);
        let high = index
            .next(self.thumb_count())
            .and_then(|next| self.value_at(next))
            .unwrap_or(self.max);
        (low, high)
    }

    /// Current values in index order.
    #[must_use]
    pub fn values(&self) -> Vec<i32> {
        self.models.iter().map(|(_, m)| m.value()).collect()
    }

    /// Shared lower bound.
    #[must_use]
    pub const fn minimum(&self) -> i32 {
        self.min
    }

    /// Shared upper bound.
    #[must_use]
    pub const fn maximum(&self) -> i32 {
        self.max
    }

    /// Replace the shared range; every model is re-clamped.
    pub(crate) fn set_range(&mut self, min: i32, max: i32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min = min;
        self.max = max;
        for (_, model) in self.models.iter_mut() {
            model.set_range(min, max);
        }
    }

    /// Slider orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether values grow against the natural axis direction.
    #[must_use]
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Whether thumbs may not pass their neighbours.
    #[must_use]
    pub const fn bounded(&self) -> bool {
        self.bounded
    }

    /// Whether values snap to the nearest tick.
    #[must_use]
    pub const fn snap_to_ticks(&self) -> bool {
        self.snap_to_ticks
    }

    /// Value distance between major ticks (0 = none).
    #[must_use]
    pub const fn major_tick_spacing(&self) -> i32 {
        self.major_tick_spacing
    }

    /// Value distance between minor ticks (0 = none).
    #[must_use]
    pub const fn minor_tick_spacing(&self) -> i32 {
        self.minor_tick_spacing
    }

    /// Tick spacing used for snapping: minor if set, else major.
    #[must_use]
    pub const fn snap_spacing(&self) -> i32 {
        if self.minor_tick_spacing > 0 {
            self.minor_tick_spacing
        } else {
            self.major_tick_spacing
        }
    }

    /// Whether the track groove is painted.
    #[must_use]
    pub const fn paint_track(&self) -> bool {
        self.paint_track
    }

    /// Whether ticks are painted.
    #[must_use]
    pub const fn paint_ticks(&self) -> bool {
        self.paint_ticks
    }

    /// Whether labels are painted.
    #[must_use]
    pub const fn paint_labels(&self) -> bool {
        self.paint_labels
    }

    /// Whether the slider reacts to input.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the slider has keyboard focus.
    #[must_use]
    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// Ask for keyboard focus.
    pub fn request_focus(&mut self) {
        self.focused = true;
    }

    /// Visual style.
    #[must_use]
    pub const fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Thumb size for the current orientation.
    #[must_use]
    pub const fn thumb_size(&self) -> Size {
        self.style.thumb_size_for(self.orientation)
    }

    /// Value of the dragged thumb just before the latest drag step.
    #[must_use]
    pub const fn value_before_change(&self) -> i32 {
        self.value_before_change
    }

    /// Record the value a drag step starts from.
    pub fn set_value_before_change(&mut self, value: i32) {
        self.value_before_change = value;
    }

    /// Widget bounds from the last layout.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Host clock from the latest tick.
    #[must_use]
    pub const fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub(crate) fn advance_clock(&mut self, now_ms: u64) {
        self.clock_ms = self.clock_ms.max(now_ms);
    }
}
