//! Slider with several thumbs sharing one track.
//!
//! [`MultiSlider`] owns one [`RangeModel`] per thumb and delegates geometry,
//! hit testing, gestures and painting to a [`SliderDelegate`]
//! ([`MultiSliderUi`] by default). The delegate can be swapped at runtime
//! without touching the values.

mod arena;
mod delegate;
mod drag;
mod geometry;
mod scroll;
mod state;
mod ui;

pub use arena::{ThumbArena, ThumbIndex};
pub use delegate::{PointerInput, PropertyChange, SliderDelegate, SliderMessage};
pub use drag::{ClampRange, DragPhase, DragSession};
pub use geometry::{round_half_up, snap_to_tick, TrackAxis, TrackLayout};
pub use hit_test::{direct_hit, nearest_thumb, ThumbHit};
pub use scroll::{ScrollCommand, ScrollDirection, ScrollIntent};
pub use state::{Orientation, SliderState, SliderStyle};
pub use ui::MultiSliderUi;

use multislider_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, ClassificationEvent, Constraints, Event, ListenerId, MouseButton, RangeChange,
    RangeModel, Rect, Size, TypeId, Widget, WidgetId,
};
use std::any::Any;

use crate::config::MultiSliderConfig;
use crate::error::SliderError;

/// Message emitted when a thumb's value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbChanged {
    /// Thumb that moved
    pub index: ThumbIndex,
    /// New value
    pub value: i32,
    /// Value before the change
    pub previous: i32,
}

impl ThumbChanged {
    /// A change message, or `None` if the value did not move.
    #[must_use]
    pub fn between(index: ThumbIndex, previous: i32, value: i32) -> Option<Self> {
        (previous != value).then_some(Self {
            index,
            value,
            previous,
        })
    }
}

/// Message emitted when a pointer gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbReleased {
    /// Thumb that was current when the button went up
    pub index: ThumbIndex,
    /// Its final value
    pub value: i32,
}

/// Slider with a fixed number of thumbs on one shared range.
pub struct MultiSlider {
    state: SliderState,
    ui: Option<Box<dyn SliderDelegate>>,
    widget_id: Option<WidgetId>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
}

impl std::fmt::Debug for MultiSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSlider")
            .field("state", &self.state)
            .field("has_ui", &self.ui.is_some())
            .field("test_id", &self.test_id_value)
            .finish_non_exhaustive()
    }
}

impl Default for MultiSlider {
    fn default() -> Self {
        Self::new(2)
    }
}

impl MultiSlider {
    /// Create a slider with `thumb_count` thumbs (at least one) spread evenly
    /// over `[0, 100]`, with the default delegate installed.
    #[must_use]
    pub fn new(thumb_count: usize) -> Self {
        let count = thumb_count.max(1);
        let values = spread(count, 0, 100);
        Self::with_state(SliderState::new(&values, 0, 100))
    }

    /// Build a slider from a validated configuration.
    pub fn from_config(config: &MultiSliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        let values = if config.values.is_empty() {
            spread(config.thumbs, config.minimum, config.maximum)
        } else {
            config.values.clone()
        };
        let mut state = SliderState::new(&values, config.minimum, config.maximum);
        state.orientation = config.orientation;
        state.inverted = config.inverted;
        state.bounded = config.bounded;
        state.snap_to_ticks = config.snap_to_ticks;
        state.major_tick_spacing = config.major_tick_spacing;
        state.minor_tick_spacing = config.minor_tick_spacing;
        state.paint_track = config.paint_track;
        state.paint_ticks = config.paint_ticks;
        state.paint_labels = config.paint_labels;
        state.enabled = config.enabled;
        state.style = config.style.clone();
        log::debug!(
            "multi-slider from config: {} thumbs on [{}, {}]",
            values.len(),
            config.minimum,
            config.maximum
        );
        Ok(Self::with_state(state))
    }

    fn with_state(state: SliderState) -> Self {
        let mut slider = Self {
            state,
            ui: None,
            widget_id: None,
            test_id_value: None,
            accessible_name_value: None,
        };
        slider.set_ui(Box::new(MultiSliderUi::new()));
        slider
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    /// Set the shared range; values are re-clamped.
    #[must_use]
    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.set_range(min, max);
        self
    }

    /// Set thumb values in index order. Extra values are ignored.
    #[must_use]
    pub fn values(mut self, values: &[i32]) -> Self {
        for (raw, value) in values.iter().enumerate() {
            if let Some(index) = self.index(raw) {
                self.state.set_value_at(index, *value);
            }
        }
        self.sync();
        self
    }

    /// Set the orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    /// Set whether values grow against the natural axis direction.
    #[must_use]
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.set_inverted(inverted);
        self
    }

    /// Set whether thumbs are kept in index order while dragging.
    #[must_use]
    pub fn bounded(mut self, bounded: bool) -> Self {
        self.set_bounded(bounded);
        self
    }

    /// Set whether values snap to ticks.
    #[must_use]
    pub fn snap_to_ticks(mut self, snap: bool) -> Self {
        self.set_snap_to_ticks(snap);
        self
    }

    /// Set the major tick spacing (0 = none).
    #[must_use]
    pub fn major_tick_spacing(mut self, spacing: i32) -> Self {
        self.set_major_tick_spacing(spacing);
        self
    }

    /// Set the minor tick spacing (0 = none).
    #[must_use]
    pub fn minor_tick_spacing(mut self, spacing: i32) -> Self {
        self.set_minor_tick_spacing(spacing);
        self
    }

    /// Set whether the track is painted.
    #[must_use]
    pub fn paint_track(mut self, paint: bool) -> Self {
        self.set_paint_track(paint);
        self
    }

    /// Set whether ticks are painted.
    #[must_use]
    pub fn paint_ticks(mut self, paint: bool) -> Self {
        self.set_paint_ticks(paint);
        self
    }

    /// Set whether labels are painted.
    #[must_use]
    pub fn paint_labels(mut self, paint: bool) -> Self {
        self.set_paint_labels(paint);
        self
    }

    /// Set disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_enabled(!disabled);
        self
    }

    /// Set the visual style.
    #[must_use]
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Replace the delegate.
    #[must_use]
    pub fn with_ui(mut self, ui: Box<dyn SliderDelegate>) -> Self {
        self.set_ui(ui);
        self
    }

    /// Set the id reported as the source of classification events.
    #[must_use]
    pub const fn with_widget_id(mut self, id: WidgetId) -> Self {
        self.widget_id = Some(id);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    // ------------------------------------------------------------------
    // Values
    // ------------------------------------------------------------------

    /// Number of thumbs.
    #[must_use]
    pub fn thumb_count(&self) -> usize {
        self.state.thumb_count()
    }

    /// Validate a raw thumb index.
    #[must_use]
    pub fn index(&self, raw: usize) -> Option<ThumbIndex> {
        self.state.index(raw)
    }

    /// Validate a raw thumb index, reporting the thumb count on failure.
    pub fn try_index(&self, raw: usize) -> Result<ThumbIndex, SliderError> {
        self.index(raw).ok_or(SliderError::InvalidThumbIndex {
            index: raw,
            count: self.thumb_count(),
        })
    }

    /// Value of a thumb, `None` for an index from another slider.
    #[must_use]
    pub fn value_at(&self, index: ThumbIndex) -> Option<i32> {
        self.state.value_at(index)
    }

    /// All values in index order.
    #[must_use]
    pub fn get_values(&self) -> Vec<i32> {
        self.state.values()
    }

    /// Set a thumb's value, clamped into range. Returns `true` if it changed.
    pub fn set_value_at(&mut self, index: ThumbIndex, value: i32) -> bool {
        let changed = self.state.set_value_at(index, value);
        self.sync();
        changed
    }

    /// Whether a gesture is adjusting a thumb.
    #[must_use]
    pub fn value_is_adjusting_at(&self, index: ThumbIndex) -> bool {
        self.state.value_is_adjusting_at(index)
    }

    /// Set or clear a thumb's adjusting flag.
    pub fn set_value_is_adjusting_at(&mut self, index: ThumbIndex, adjusting: bool) -> bool {
        self.state.set_value_is_adjusting_at(index, adjusting)
    }

    /// Value model of a thumb.
    #[must_use]
    pub fn model_at(&self, index: ThumbIndex) -> Option<&RangeModel> {
        self.state.model_at(index)
    }

    /// Listen to one thumb's value changes.
    pub fn on_change<F>(
        &mut self,
        index: ThumbIndex,
        listener: F,
    ) -> Result<ListenerId, SliderError>
    where
        F: Fn(&RangeChange) + Send + Sync + 'static,
    {
        self.state
            .subscribe_at(index, listener)
            .ok_or(SliderError::InvalidThumbIndex {
                index: index.get(),
                count: self.thumb_count(),
            })
    }

    /// Remove a listener added with [`Self::on_change`].
    pub fn remove_change_listener(&mut self, index: ThumbIndex, id: ListenerId) -> bool {
        self.state.unsubscribe_at(index, id)
    }

    /// Value of the dragged thumb just before the latest drag step.
    #[must_use]
    pub const fn value_before_change(&self) -> i32 {
        self.state.value_before_change()
    }

    /// Current values as class breaks.
    #[must_use]
    pub fn classification_event(&self) -> ClassificationEvent {
        ClassificationEvent::new(
            self.widget_id,
            self.state.values().into_iter().map(f64::from).collect(),
        )
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    /// Shared lower bound.
    #[must_use]
    pub const fn minimum(&self) -> i32 {
        self.state.minimum()
    }

    /// Shared upper bound.
    #[must_use]
    pub const fn maximum(&self) -> i32 {
        self.state.maximum()
    }

    /// Replace the shared range.
    pub fn set_range(&mut self, min: i32, max: i32) {
        self.state.set_range(min, max);
        self.property_changed(PropertyChange::Range);
    }

    /// Orientation.
    #[must_use]
    pub const fn get_orientation(&self) -> Orientation {
        self.state.orientation()
    }

    /// Change the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.state.orientation != orientation {
            self.state.orientation = orientation;
            self.property_changed(PropertyChange::Orientation);
        }
    }

    /// Whether the slider is inverted.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.state.inverted()
    }

    /// Change inversion.
    pub fn set_inverted(&mut self, inverted: bool) {
        if self.state.inverted != inverted {
            self.state.inverted = inverted;
            self.property_changed(PropertyChange::Inverted);
        }
    }

    /// Whether thumbs are kept in index order while dragging.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.state.bounded()
    }

    /// Change the bounded flag.
    pub fn set_bounded(&mut self, bounded: bool) {
        if self.state.bounded != bounded {
            self.state.bounded = bounded;
            self.property_changed(PropertyChange::Bounded);
        }
    }

    /// Whether values snap to ticks.
    #[must_use]
    pub const fn get_snap_to_ticks(&self) -> bool {
        self.state.snap_to_ticks()
    }

    /// Change snapping.
    pub fn set_snap_to_ticks(&mut self, snap: bool) {
        self.state.snap_to_ticks = snap;
        self.property_changed(PropertyChange::Ticks);
    }

    /// Major tick spacing.
    #[must_use]
    pub const fn get_major_tick_spacing(&self) -> i32 {
        self.state.major_tick_spacing()
    }

    /// Change the major tick spacing; negative spacing means none.
    pub fn set_major_tick_spacing(&mut self, spacing: i32) {
        self.state.major_tick_spacing = spacing.max(0);
        self.property_changed(PropertyChange::Ticks);
    }

    /// Minor tick spacing.
    #[must_use]
    pub const fn get_minor_tick_spacing(&self) -> i32 {
        self.state.minor_tick_spacing()
    }

    /// Change the minor tick spacing; negative spacing means none.
    pub fn set_minor_tick_spacing(&mut self, spacing: i32) {
        self.state.minor_tick_spacing = spacing.max(0);
        self.property_changed(PropertyChange::Ticks);
    }

    /// Whether the track is painted.
    #[must_use]
    pub const fn get_paint_track(&self) -> bool {
        self.state.paint_track()
    }

    /// Change track painting.
    pub fn set_paint_track(&mut self, paint: bool) {
        self.state.paint_track = paint;
        self.property_changed(PropertyChange::PaintFlags);
    }

    /// Whether ticks are painted.
    #[must_use]
    pub const fn get_paint_ticks(&self) -> bool {
        self.state.paint_ticks()
    }

    /// Change tick painting.
    pub fn set_paint_ticks(&mut self, paint: bool) {
        self.state.paint_ticks = paint;
        self.property_changed(PropertyChange::PaintFlags);
    }

    /// Whether labels are painted.
    #[must_use]
    pub const fn get_paint_labels(&self) -> bool {
        self.state.paint_labels()
    }

    /// Change label painting.
    pub fn set_paint_labels(&mut self, paint: bool) {
        self.state.paint_labels = paint;
        self.property_changed(PropertyChange::PaintFlags);
    }

    /// Whether the slider reacts to input.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.state.enabled()
    }

    /// Enable or disable input.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.state.enabled != enabled {
            self.state.enabled = enabled;
            self.property_changed(PropertyChange::Enabled);
        }
    }

    /// Whether the slider has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.state.focused()
    }

    /// Visual style.
    #[must_use]
    pub const fn get_style(&self) -> &SliderStyle {
        self.state.style()
    }

    /// Replace the visual style.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.state.style = style;
        self.property_changed(PropertyChange::Style);
    }

    /// State shared with the delegate.
    #[must_use]
    pub const fn state(&self) -> &SliderState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Delegate
    // ------------------------------------------------------------------

    /// Install `ui`, returning the previous delegate (already uninstalled).
    pub fn set_ui(&mut self, mut ui: Box<dyn SliderDelegate>) -> Option<Box<dyn SliderDelegate>> {
        let previous = self.take_ui();
        ui.install(&mut self.state);
        self.ui = Some(ui);
        previous
    }

    /// Uninstall and return the delegate. Without one the slider neither
    /// paints nor reacts to input, but its values stay usable.
    pub fn take_ui(&mut self) -> Option<Box<dyn SliderDelegate>> {
        let mut ui = self.ui.take()?;
        ui.uninstall(&mut self.state);
        Some(ui)
    }

    /// Installed delegate.
    #[must_use]
    pub fn ui(&self) -> Option<&dyn SliderDelegate> {
        self.ui.as_deref()
    }

    /// Thumb that keyboard and track input act on.
    #[must_use]
    pub fn current_index(&self) -> ThumbIndex {
        self.ui
            .as_ref()
            .map_or(ThumbIndex::FIRST, |ui| ui.current_index())
    }

    /// Rectangle of a thumb from the last geometry pass.
    #[must_use]
    pub fn thumb_rect(&self, index: ThumbIndex) -> Option<Rect> {
        self.ui.as_ref().and_then(|ui| ui.thumb_rect(index))
    }

    /// Rectangle thumbs travel in.
    #[must_use]
    pub fn track_rect(&self) -> Rect {
        self.ui.as_ref().map_or_else(Rect::default, |ui| ui.track_rect())
    }

    fn sync(&mut self) {
        if let Some(ui) = self.ui.as_mut() {
            ui.sync(&mut self.state);
        }
    }

    fn property_changed(&mut self, change: PropertyChange) {
        if let Some(ui) = self.ui.as_mut() {
            ui.property_changed(&mut self.state, change);
        }
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    /// Move the current thumb by one unit.
    pub fn scroll_by_unit(&mut self, direction: ScrollDirection) -> Option<ThumbChanged> {
        self.ui
            .as_mut()
            .and_then(|ui| ui.scroll_by_unit(&mut self.state, direction))
    }

    /// Move the current thumb by one block.
    pub fn scroll_by_block(&mut self, direction: ScrollDirection) -> Option<ThumbChanged> {
        self.ui
            .as_mut()
            .and_then(|ui| ui.scroll_by_block(&mut self.state, direction))
    }

    /// Set the current thumb's value.
    pub fn set_current_value(&mut self, value: i32) -> Option<ThumbChanged> {
        let index = self.current_index();
        let previous = self.value_at(index)?;
        self.set_value_at(index, value);
        ThumbChanged::between(index, previous, self.value_at(index)?)
    }

    /// Run a scroll intent against the current thumb.
    pub fn scroll(&mut self, intent: ScrollIntent) -> Option<ThumbChanged> {
        ScrollCommand::new(self, intent).execute()
    }

    fn pointer(&mut self, input: PointerInput) -> Option<Box<dyn Any + Send>> {
        let ui = self.ui.as_mut()?;
        match ui.handle_pointer(&mut self.state, input)? {
            SliderMessage::Changed(changed) => Some(Box::new(changed)),
            SliderMessage::Released(released) => Some(Box::new(released)),
        }
    }
}

/// `count` values evenly spaced strictly inside `[min, max]`.
fn spread(count: usize, min: i32, max: i32) -> Vec<i32> {
    let span = i64::from(max) - i64::from(min);
    let slots = count as i64 + 1;
    (1..=count as i64)
        .map(|i| (i64::from(min) + span * i / slots) as i32)
        .collect()
}

impl Widget for MultiSlider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let preferred = self.ui.as_ref().map_or_else(
            || TrackLayout::preferred_size(&self.state),
            |ui| ui.preferred_size(&self.state),
        );
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.state.set_bounds(bounds);
        self.property_changed(PropertyChange::Bounds);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(ui) = self.ui.as_ref() {
            ui.paint(&self.state, canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.state.bounds().contains_point(position) {
                    self.pointer(PointerInput::Pressed(*position))
                } else {
                    None
                }
            }
            Event::MouseMove { position } => self.pointer(PointerInput::Dragged(*position)),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.pointer(PointerInput::Released(*position)),
            Event::KeyDown { key } => {
                if !self.state.focused() || !self.state.enabled() {
                    return None;
                }
                let intent = ScrollIntent::for_key(*key)?;
                self.scroll(intent)
                    .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
            }
            Event::FocusIn => {
                self.state.focused = true;
                None
            }
            Event::FocusOut => {
                self.state.focused = false;
                None
            }
            Event::Resize { width, height } => {
                let bounds = self.state.bounds();
                self.layout(Rect::new(bounds.x, bounds.y, *width, *height));
                None
            }
            Event::Tick { now_ms } => {
                self.state.advance_clock(*now_ms);
                let ui = self.ui.as_mut()?;
                ui.tick(&mut self.state, *now_ms)
                    .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        self.state.enabled()
    }

    fn is_focusable(&self) -> bool {
        self.state.enabled()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.state.bounds()
    }
}
