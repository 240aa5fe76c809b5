//! Default delegate: flat track, rectangular thumbs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use multislider_core::widget::TextStyle;
use multislider_core::{
    Canvas, ListenerId, Point, Rect, RepeatTimer, DEFAULT_REPEAT_MS,
};

use super::arena::{ThumbArena, ThumbIndex};
use super::delegate::{PointerInput, PropertyChange, SliderDelegate, SliderMessage};
use super::drag::{ClampRange, DragPhase, DragSession};
use super::geometry::{snap_to_tick, TrackAxis, TrackLayout};
use super::hit_test::{direct_hit, nearest_thumb};
use super::scroll::ScrollDirection;
use super::state::{Orientation, SliderState};
use super::{ThumbChanged, ThumbReleased};

/// Default [`SliderDelegate`].
///
/// Keeps one rectangle per thumb, recomputed from the value models whenever
/// one of them changes. Clicking the track pages the nearest thumb toward
/// the pointer and keeps paging while the button is held.
#[derive(Debug)]
pub struct MultiSliderUi {
    layout: TrackLayout,
    thumb_rects: Option<ThumbArena<Rect>>,
    current: ThumbIndex,
    session: DragSession,
    scroll_timer: RepeatTimer,
    subscriptions: Vec<(ThumbIndex, ListenerId)>,
    models_dirty: Arc<AtomicBool>,
}

impl Default for MultiSliderUi {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiSliderUi {
    /// Create an uninstalled delegate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_repeat_interval(DEFAULT_REPEAT_MS)
    }

    /// Create a delegate whose track auto-scroll fires every `interval_ms`.
    #[must_use]
    pub fn with_repeat_interval(interval_ms: u64) -> Self {
        Self {
            layout: TrackLayout::default(),
            thumb_rects: None,
            current: ThumbIndex::FIRST,
            session: DragSession::default(),
            scroll_timer: RepeatTimer::new(interval_ms),
            subscriptions: Vec::new(),
            models_dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the delegate is attached to a slider.
    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.thumb_rects.is_some()
    }

    /// Rectangles from the last geometry pass.
    #[must_use]
    pub const fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Gesture in progress.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Whether the track auto-scroll timer is running.
    #[must_use]
    pub const fn is_auto_scrolling(&self) -> bool {
        self.scroll_timer.is_running()
    }

    fn axis(&self, state: &SliderState) -> TrackAxis {
        TrackAxis::for_state(self.layout.track, state)
    }

    /// Snap every value if requested, then centre each thumb on its value.
    fn recompute_all_thumb_positions(&mut self, state: &mut SliderState) {
        let axis = self.axis(state);
        let Some(rects) = self.thumb_rects.as_mut() else {
            return;
        };
        let size = state.thumb_size();
        let spacing = state.snap_spacing();
        let indices: Vec<ThumbIndex> = state.indices().collect();

        for index in indices {
            let Some(value) = state.value_at(index) else {
                continue;
            };
            if state.snap_to_ticks() && spacing > 0 {
                state.set_value_at(index, snap_to_tick(value, state.minimum(), spacing));
            }
            if let (Some(value), Some(rect)) = (state.value_at(index), rects.get_mut(index)) {
                *rect = axis.place(size, axis.position_for_value(value));
            }
        }
        self.models_dirty.store(false, Ordering::Release);
        log::trace!("recomputed {} thumb positions", rects.len());
    }

    /// Give every thumb `size`, keeping its centre.
    fn size_all_thumbs(&mut self, state: &SliderState) {
        let axis = self.axis(state);
        let size = state.thumb_size();
        if let Some(rects) = self.thumb_rects.as_mut() {
            for (_, rect) in rects.iter_mut() {
                *rect = axis.place(size, axis.centre_of(rect));
            }
        }
    }

    fn press(&mut self, state: &mut SliderState, pointer: Point) -> Option<SliderMessage> {
        let axis = self.axis(state);
        let rects = self.thumb_rects.as_ref()?;
        state.request_focus();

        if let Some(hit) = direct_hit(rects, pointer) {
            let rect = rects[hit.lo];
            let clamp = ClampRange::for_thumb(&axis, rects, hit.lo, state.bounded());
            self.current = hit.lo;
            self.session
                .grab(hit, pointer, axis.along(pointer) - axis.start_of(&rect), clamp);
            state.set_value_is_adjusting_at(hit.lo, true);
            log::debug!("pressed thumbs {}..={} at {pointer:?}", hit.lo, hit.hi);
            return None;
        }

        let current = nearest_thumb(&axis, rects, pointer);
        let thumb = rects[current];
        self.current = current;
        state.set_value_is_adjusting_at(current, true);

        let direction = self.direction_toward(state, thumb, pointer);
        self.session.scroll_track(pointer, direction);
        let changed = self.scroll_by_block(state, direction);

        let reached = self
            .thumb_rect(current)
            .is_some_and(|rect| rect.contains_point(&pointer));
        if !reached && self.should_scroll(state, direction) {
            self.scroll_timer.start(state.clock_ms());
        }
        log::debug!(
            "track press at {pointer:?}: thumb {current} pages {direction:?}, auto-scroll {}",
            self.scroll_timer.is_running()
        );
        changed.map(SliderMessage::Changed)
    }

    fn drag(&mut self, state: &mut SliderState, pointer: Point) -> Option<SliderMessage> {
        self.session.track_pointer(pointer);
        if !self.session.holds_thumb() {
            return None;
        }
        let axis = self.axis(state);
        let rects = self.thumb_rects.as_ref()?;

        if state.bounded() {
            if let Some(chosen) = self.session.choose_moving(&axis) {
                if chosen != self.current {
                    state.set_value_is_adjusting_at(self.current, false);
                    self.current = chosen;
                }
                state.set_value_is_adjusting_at(chosen, true);
                self.session
                    .set_clamp(ClampRange::for_thumb(&axis, rects, chosen, true));
            }
        }

        let index = self.current;
        let previous = state.value_at(index)?;
        state.set_value_before_change(previous);

        let rect = *rects.get(index)?;
        let start = self
            .session
            .clamp()
            .clamp_start(axis.along(pointer) - self.session.offset(), axis.length_of(&rect));
        let moved = axis.move_start(rect, start);
        if let Some(slot) = self.thumb_rects.as_mut().and_then(|rects| rects.get_mut(index)) {
            *slot = moved;
        }

        let mut value = axis.value_for_position(axis.centre_of(&moved));
        if state.bounded() {
            // Pixel rounding can land past a neighbour on dense ranges.
            let (low, high) = state.neighbour_values(index);
            value = value.max(low).min(high);
        }
        state.set_value_at(index, value);
        self.sync(state);
        log::trace!("drag thumb {index} to {value}");
        ThumbChanged::between(index, previous, state.value_at(index)?).map(SliderMessage::Changed)
    }

    fn release(&mut self, state: &mut SliderState) -> Option<SliderMessage> {
        let phase = self.session.phase();
        self.session.release();
        self.scroll_timer.stop();
        state.set_value_is_adjusting_at(self.current, false);
        if phase == DragPhase::Idle {
            return None;
        }
        let index = self.current;
        let value = state.value_at(index)?;
        log::debug!("released thumb {index} at {value}");
        Some(SliderMessage::Released(ThumbReleased { index, value }))
    }

    /// Direction that moves `thumb` toward `pointer`.
    fn direction_toward(
        &self,
        state: &SliderState,
        thumb: Rect,
        pointer: Point,
    ) -> ScrollDirection {
        let bounds = state.bounds();
        let direction = match state.orientation() {
            Orientation::Horizontal => {
                let reference = if thumb.is_empty() {
                    bounds.center().x
                } else {
                    thumb.x
                };
                if pointer.x < reference {
                    ScrollDirection::Negative
                } else {
                    ScrollDirection::Positive
                }
            }
            Orientation::Vertical => {
                let reference = if thumb.is_empty() {
                    bounds.center().y
                } else {
                    thumb.y
                };
                if pointer.y < reference {
                    ScrollDirection::Positive
                } else {
                    ScrollDirection::Negative
                }
            }
        };
        if state.inverted() {
            direction.reversed()
        } else {
            direction
        }
    }

    /// Whether paging further in `direction` still moves toward the pointer.
    fn should_scroll(&self, state: &SliderState, direction: ScrollDirection) -> bool {
        let Some(rect) = self.thumb_rect(self.current) else {
            return false;
        };
        let pointer = self.session.pointer();
        let forward = if state.inverted() {
            direction == ScrollDirection::Negative
        } else {
            direction == ScrollDirection::Positive
        };
        let passed = match state.orientation() {
            Orientation::Horizontal => {
                if forward {
                    rect.right() >= pointer.x
                } else {
                    rect.x <= pointer.x
                }
            }
            Orientation::Vertical => {
                if forward {
                    rect.y <= pointer.y
                } else {
                    rect.bottom() >= pointer.y
                }
            }
        };
        if passed {
            return false;
        }
        let Some(value) = state.value_at(self.current) else {
            return false;
        };
        match direction {
            ScrollDirection::Positive => value < state.maximum(),
            ScrollDirection::Negative => value > state.minimum(),
        }
    }

    fn step(
        &mut self,
        state: &mut SliderState,
        direction: ScrollDirection,
        amount: i32,
    ) -> Option<ThumbChanged> {
        let index = self.current;
        let previous = state.value_at(index)?;
        state.set_value_at(
            index,
            previous.saturating_add(amount.saturating_mul(direction.sign())),
        );
        self.sync(state);
        ThumbChanged::between(index, previous, state.value_at(index)?)
    }

    fn paint_track(&self, state: &SliderState, canvas: &mut dyn Canvas) {
        let track = self.layout.track;
        let thickness = state.style().track_thickness;
        let groove = match state.orientation() {
            Orientation::Horizontal => Rect::new(
                track.x,
                track.y + (track.height - thickness) / 2.0,
                track.width,
                thickness,
            ),
            Orientation::Vertical => Rect::new(
                track.x + (track.width - thickness) / 2.0,
                track.y,
                thickness,
                track.height,
            ),
        };
        canvas.fill_rect(groove, state.style().track_color);
    }

    fn paint_ticks(&self, state: &SliderState, canvas: &mut dyn Canvas) {
        let axis = self.axis(state);
        let ticks = self.layout.ticks;
        let style = state.style();
        let mut tick = |value: i32, length: f32| {
            let at = axis.position_for_value(value);
            let (from, to) = match state.orientation() {
                Orientation::Horizontal => {
                    (Point::new(at, ticks.y), Point::new(at, ticks.y + length))
                }
                Orientation::Vertical => {
                    (Point::new(ticks.x, at), Point::new(ticks.x + length, at))
                }
            };
            canvas.draw_line(from, to, style.tick_color, 1.0);
        };

        let (min, max) = (state.minimum(), state.maximum());
        if state.minor_tick_spacing() > 0 {
            for value in (min..=max).step_by(state.minor_tick_spacing() as usize) {
                tick(value, style.tick_length / 2.0);
            }
        }
        if state.major_tick_spacing() > 0 {
            for value in (min..=max).step_by(state.major_tick_spacing() as usize) {
                tick(value, style.tick_length);
            }
        }
    }

    fn paint_labels(&self, state: &SliderState, canvas: &mut dyn Canvas) {
        let axis = self.axis(state);
        let labels = self.layout.labels;
        let style = TextStyle {
            size: state.style().label_size,
            color: state.style().label_color,
        };
        let (min, max) = (state.minimum(), state.maximum());
        let values: Vec<i32> = if state.major_tick_spacing() > 0 {
            (min..=max)
                .step_by(state.major_tick_spacing() as usize)
                .collect()
        } else {
            vec![min, max]
        };
        for value in values {
            let at = axis.position_for_value(value);
            let position = match state.orientation() {
                Orientation::Horizontal => Point::new(at, labels.y),
                Orientation::Vertical => Point::new(labels.x, at),
            };
            canvas.draw_text(&value.to_string(), position, &style);
        }
    }

    fn paint_thumb(
        &self,
        state: &SliderState,
        rect: Rect,
        current: bool,
        canvas: &mut dyn Canvas,
    ) {
        let style = state.style();
        let color = if !state.enabled() {
            style.disabled_color
        } else if current && state.focused() {
            style.current_thumb_color
        } else {
            style.thumb_color
        };
        canvas.fill_rect(rect, color);
    }
}

impl SliderDelegate for MultiSliderUi {
    fn install(&mut self, state: &mut SliderState) {
        self.thumb_rects = Some(ThumbArena::from_fn(state.thumb_count(), |_| {
            Rect::default()
        }));
        self.current = ThumbIndex::FIRST;
        self.session.release();
        self.scroll_timer.stop();

        let indices: Vec<ThumbIndex> = state.indices().collect();
        for index in indices {
            let dirty = Arc::clone(&self.models_dirty);
            let id = state.subscribe_at(index, move |_| dirty.store(true, Ordering::Release));
            if let Some(id) = id {
                self.subscriptions.push((index, id));
            }
        }
        self.calculate_geometry(state);
        log::debug!("installed multi-slider delegate for {} thumbs", state.thumb_count());
    }

    fn uninstall(&mut self, state: &mut SliderState) {
        for (index, id) in self.subscriptions.drain(..) {
            state.unsubscribe_at(index, id);
        }
        self.thumb_rects = None;
        self.session.release();
        self.scroll_timer.stop();
        self.models_dirty.store(false, Ordering::Release);
        log::debug!("uninstalled multi-slider delegate");
    }

    fn calculate_geometry(&mut self, state: &mut SliderState) {
        self.layout = TrackLayout::compute(state);
        self.size_all_thumbs(state);
        self.recompute_all_thumb_positions(state);
    }

    fn property_changed(&mut self, state: &mut SliderState, change: PropertyChange) {
        if change == PropertyChange::Enabled && !state.enabled() {
            self.release(state);
        }
        log::trace!("slider property changed: {change:?}");
        self.calculate_geometry(state);
    }

    fn sync(&mut self, state: &mut SliderState) {
        if self.models_dirty.swap(false, Ordering::AcqRel) {
            self.recompute_all_thumb_positions(state);
        }
    }

    fn paint(&self, state: &SliderState, canvas: &mut dyn Canvas) {
        let clip = canvas.clip_bounds().unwrap_or_else(|| state.bounds());

        if state.paint_track() && clip.intersects(&self.layout.track) {
            self.paint_track(state, canvas);
        }
        if state.paint_ticks() && clip.intersects(&self.layout.ticks) {
            self.paint_ticks(state, canvas);
        }
        if state.paint_labels() && clip.intersects(&self.layout.labels) {
            self.paint_labels(state, canvas);
        }
        if state.focused() && clip.intersects(&self.layout.focus) {
            canvas.stroke_rect(self.layout.focus, state.style().focus_color, 1.0);
        }

        let Some(rects) = self.thumb_rects.as_ref() else {
            return;
        };
        for (index, rect) in rects.iter() {
            if index != self.current && clip.intersects(rect) {
                self.paint_thumb(state, *rect, false, canvas);
            }
        }
        if let Some(current) = rects.get(self.current).filter(|rect| clip.intersects(rect)) {
            self.paint_thumb(state, *current, true, canvas);
        }
    }

    fn handle_pointer(
        &mut self,
        state: &mut SliderState,
        input: PointerInput,
    ) -> Option<SliderMessage> {
        if !state.enabled() {
            return None;
        }
        match input {
            PointerInput::Pressed(pointer) => self.press(state, pointer),
            PointerInput::Dragged(pointer) => self.drag(state, pointer),
            PointerInput::Released(_) => self.release(state),
        }
    }

    fn tick(&mut self, state: &mut SliderState, now_ms: u64) -> Option<ThumbChanged> {
        if !self.scroll_timer.poll(now_ms) {
            return None;
        }
        let Some(direction) = self.session.scroll_direction() else {
            self.scroll_timer.stop();
            return None;
        };
        if !state.enabled() {
            self.scroll_timer.stop();
            return None;
        }
        let changed = self.scroll_by_block(state, direction);
        if !self.should_scroll(state, direction) {
            self.scroll_timer.stop();
            log::debug!("auto-scroll of thumb {} stopped", self.current);
        }
        changed
    }

    fn scroll_by_unit(
        &mut self,
        state: &mut SliderState,
        direction: ScrollDirection,
    ) -> Option<ThumbChanged> {
        self.step(state, direction, 1)
    }

    fn scroll_by_block(
        &mut self,
        state: &mut SliderState,
        direction: ScrollDirection,
    ) -> Option<ThumbChanged> {
        self.step(state, direction, state.maximum() / 10)
    }

    fn current_index(&self) -> ThumbIndex {
        self.current
    }

    fn thumb_rect(&self, index: ThumbIndex) -> Option<Rect> {
        self.thumb_rects
            .as_ref()
            .and_then(|rects| rects.get(index).copied())
    }

    fn track_rect(&self) -> Rect {
        self.layout.track
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multislider_core::{DrawCommand, RecordingCanvas};

    /// Three thumbs on [0, 100] with a 200 px track starting at x = 8.
    fn installed(values: &[i32], bounded: bool) -> (MultiSliderUi, SliderState) {
        let mut state = SliderState::new(values, 0, 100);
        state.bounded = bounded;
        state.set_bounds(Rect::new(0.0, 0.0, 216.0, 40.0));
        let mut ui = MultiSliderUi::new();
        ui.install(&mut state);
        (ui, state)
    }

    fn centre(ui: &MultiSliderUi, state: &SliderState, raw: usize) -> Point {
        ui.thumb_rect(state.index(raw).unwrap()).unwrap().center()
    }

    #[test]
    fn test_install_places_thumbs() {
        let (ui, state) = installed(&[10, 50, 90], false);
        assert!(ui.is_installed());
        assert_eq!(ui.track_rect().width, 200.0);
        assert_eq!(centre(&ui, &state, 0).x, 28.0);
        assert_eq!(centre(&ui, &state, 1).x, 108.0);
        assert_eq!(centre(&ui, &state, 2).x, 188.0);
        assert_eq!(ui.current_index(), ThumbIndex::FIRST);
    }

    #[test]
    fn test_install_subscribes_and_uninstall_detaches() {
        let (mut ui, mut state) = installed(&[10, 50], false);
        for index in state.indices().collect::<Vec<_>>() {
            assert_eq!(state.model_at(index).unwrap().listener_count(), 1);
        }
        ui.uninstall(&mut state);
        assert!(!ui.is_installed());
        for index in state.indices().collect::<Vec<_>>() {
            assert_eq!(state.model_at(index).unwrap().listener_count(), 0);
        }
        assert!(ui.thumb_rect(ThumbIndex::FIRST).is_none());
    }

    #[test]
    fn test_sync_follows_model_changes() {
        let (mut ui, mut state) = installed(&[10, 50], false);
        state.set_value_at(ThumbIndex::FIRST, 30);
        ui.sync(&mut state);
        assert_eq!(centre(&ui, &state, 0).x, 68.0);
    }

    #[test]
    fn test_snap_to_ticks_writes_back() {
        let mut state = SliderState::new(&[14, 15], 0, 100);
        state.snap_to_ticks = true;
        state.major_tick_spacing = 10;
        state.set_bounds(Rect::new(0.0, 0.0, 216.0, 40.0));
        let mut ui = MultiSliderUi::new();
        ui.install(&mut state);
        assert_eq!(state.values(), vec![10, 20]);
    }

    #[test]
    fn test_press_on_thumb_grabs_it() {
        let (mut ui, mut state) = installed(&[10, 50, 90], true);
        let p = centre(&ui, &state, 1);
        let msg = ui.handle_pointer(&mut state, PointerInput::Pressed(p));
        assert!(msg.is_none());
        assert_eq!(ui.current_index().get(), 1);
        assert_eq!(ui.session().phase(), DragPhase::Pressed);
        assert_eq!(ui.session().offset(), 6.0);
        assert!(state.value_is_adjusting_at(state.index(1).unwrap()));
        assert!(state.focused());
    }

    #[test]
    fn test_bounded_drag_stops_at_neighbour() {
        let (mut ui, mut state) = installed(&[10, 50, 90], true);
        let p = centre(&ui, &state, 1);
        ui.handle_pointer(&mut state, PointerInput::Pressed(p));
        let msg = ui.handle_pointer(
            &mut state,
            PointerInput::Dragged(Point::new(1_000.0, p.y)),
        );
        let Some(SliderMessage::Changed(changed)) = msg else {
            panic!("expected a change, got {msg:?}");
        };
        assert_eq!(changed.index.get(), 1);
        assert_eq!(changed.previous, 50);
        assert_eq!(changed.value, 90);
        assert_eq!(state.value_before_change(), 50);
    }

    #[test]
    fn test_bounded_drag_on_dense_range_stops_at_neighbour_value() {
        // 1000 values on a 200 px track: 503 and 505 share a pixel.
        let mut state = SliderState::new(&[100, 500, 503], 0, 1000);
        state.bounded = true;
        state.set_bounds(Rect::new(0.0, 0.0, 216.0, 40.0));
        let mut ui = MultiSliderUi::new();
        ui.install(&mut state);

        // Thumbs 1 and 2 overlap; grab thumb 1 by its uncovered left edge.
        let p = Point::new(102.5, 20.0);
        ui.handle_pointer(&mut state, PointerInput::Pressed(p));
        assert_eq!(ui.session().phase(), DragPhase::Pressed);
        ui.handle_pointer(&mut state, PointerInput::Dragged(Point::new(p.x + 50.0, p.y)));
        assert_eq!(ui.current_index().get(), 1);
        assert_eq!(state.values(), vec![100, 503, 503]);

        ui.handle_pointer(&mut state, PointerInput::Dragged(Point::new(0.0, p.y)));
        assert_eq!(state.values(), vec![100, 100, 503]);
    }

    #[test]
    fn test_foreign_index_has_no_rect() {
        let (ui, _) = installed(&[10, 50], false);
        let (_, large) = installed(&[10, 20, 30, 40, 50], false);
        assert!(ui.thumb_rect(large.index(4).unwrap()).is_none());
    }

    #[test]
    fn test_unbounded_drag_passes_neighbour() {
        let (mut ui, mut state) = installed(&[10, 50, 90], false);
        let p = centre(&ui, &state, 1);
        ui.handle_pointer(&mut state, PointerInput::Pressed(p));
        ui.handle_pointer(&mut state, PointerInput::Dragged(Point::new(1_000.0, p.y)));
        assert_eq!(state.values(), vec![10, 100, 90]);
    }

    #[test]
    fn test_drag_picks_thumb_from_stack() {
        let (mut ui, mut state) = installed(&[50, 50], true);
        let p = centre(&ui, &state, 0);
        ui.handle_pointer(&mut state, PointerInput::Pressed(p));
        assert_eq!(ui.current_index().get(), 0);
        ui.handle_pointer(&mut state, PointerInput::Dragged(Point::new(p.x + 20.0, p.y)));
        assert_eq!(ui.current_index().get(), 1);
        assert_eq!(state.values(), vec![50, 60]);
        assert!(!state.value_is_adjusting_at(ThumbIndex::FIRST));
        assert!(state.value_is_adjusting_at(state.index(1).unwrap()));
    }

    #[test]
    fn test_release_clears_session() {
        let (mut ui, mut state) = installed(&[10, 50], false);
        let p = centre(&ui, &state, 0);
        ui.handle_pointer(&mut state, PointerInput::Pressed(p));
        let msg = ui.handle_pointer(&mut state, PointerInput::Released(p));
        assert_eq!(
            msg,
            Some(SliderMessage::Released(ThumbReleased {
                index: ThumbIndex::FIRST,
                value: 10
            }))
        );
        assert_eq!(ui.session().phase(), DragPhase::Idle);
        assert_eq!(ui.session().offset(), 0.0);
        assert!(!state.value_is_adjusting_at(ThumbIndex::FIRST));
    }

    #[test]
    fn test_track_press_pages_and_auto_scrolls() {
        let (mut ui, mut state) = installed(&[10, 50], false);
        let msg = ui.handle_pointer(&mut state, PointerInput::Pressed(Point::new(200.0, 20.0)));
        let Some(SliderMessage::Changed(changed)) = msg else {
            panic!("expected a page step, got {msg:?}");
        };
        assert_eq!(changed.index.get(), 1);
        assert_eq!(changed.value, 60);
        assert!(ui.is_auto_scrolling());
        assert_eq!(ui.session().phase(), DragPhase::TrackScrolling);

        assert!(ui.tick(&mut state, 50).is_none());
        assert_eq!(ui.tick(&mut state, 100).map(|c| c.value), Some(70));
        assert_eq!(ui.tick(&mut state, 200).map(|c| c.value), Some(80));

        ui.handle_pointer(&mut state, PointerInput::Released(Point::new(200.0, 20.0)));
        assert!(!ui.is_auto_scrolling());
        assert!(ui.tick(&mut state, 300).is_none());
        assert_eq!(state.values(), vec![10, 80]);
    }

    #[test]
    fn test_auto_scroll_stops_at_pointer() {
        let (mut ui, mut state) = installed(&[10, 50], false);
        // Pointer over the spot for 70; one timer step reaches it.
        ui.handle_pointer(&mut state, PointerInput::Pressed(Point::new(152.0, 20.0)));
        assert_eq!(state.values(), vec![10, 60]);
        assert_eq!(ui.tick(&mut state, 100).map(|c| c.value), Some(70));
        assert!(!ui.is_auto_scrolling());
    }

    #[test]
    fn test_track_press_before_thumb_pages_down() {
        let (mut ui, mut state) = installed(&[50], false);
        ui.handle_pointer(&mut state, PointerInput::Pressed(Point::new(10.0, 20.0)));
        assert_eq!(state.values(), vec![40]);
    }

    #[test]
    fn test_vertical_track_press_above_pages_up() {
        let mut state = SliderState::new(&[50], 0, 100);
        state.orientation = Orientation::Vertical;
        state.set_bounds(Rect::new(0.0, 0.0, 40.0, 216.0));
        let mut ui = MultiSliderUi::new();
        ui.install(&mut state);
        ui.handle_pointer(&mut state, PointerInput::Pressed(Point::new(20.0, 12.0)));
        assert_eq!(state.values(), vec![60]);
    }

    #[test]
    fn test_disabled_ignores_pointer() {
        let (mut ui, mut state) = installed(&[10], false);
        state.enabled = false;
        let p = centre(&ui, &state, 0);
        assert!(ui.handle_pointer(&mut state, PointerInput::Pressed(p)).is_none());
        assert_eq!(ui.session().phase(), DragPhase::Idle);
    }

    #[test]
    fn test_block_scroll_changes_only_current() {
        let (mut ui, mut state) = installed(&[10, 50, 90], false);
        let changed = ui.scroll_by_block(&mut state, ScrollDirection::Positive).unwrap();
        assert_eq!(changed.value, 20);
        assert_eq!(state.values(), vec![20, 50, 90]);
        ui.scroll_by_unit(&mut state, ScrollDirection::Negative);
        assert_eq!(state.values(), vec![19, 50, 90]);
    }

    #[test]
    fn test_paint_order_current_last() {
        let (mut ui, mut state) = installed(&[10, 50, 90], false);
        let p = centre(&ui, &state, 1);
        ui.handle_pointer(&mut state, PointerInput::Pressed(p));
        ui.handle_pointer(&mut state, PointerInput::Released(p));

        let mut canvas = RecordingCanvas::new();
        ui.paint(&state, &mut canvas);
        let rects: Vec<Rect> = canvas
            .commands()
            .iter()
            .filter(|c| c.fill_color().is_some())
            .filter_map(DrawCommand::rect_bounds)
            .collect();
        // Groove, then thumbs 0 and 2, then the current thumb.
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[3], ui.thumb_rect(state.index(1).unwrap()).unwrap());
        assert_eq!(rects[1], ui.thumb_rect(ThumbIndex::FIRST).unwrap());
    }

    #[test]
    fn test_paint_respects_clip() {
        let (ui, state) = installed(&[10, 90], false);
        let left = ui.thumb_rect(ThumbIndex::FIRST).unwrap();
        let mut canvas = RecordingCanvas::with_clip(left);
        ui.paint(&state, &mut canvas);
        let fills: Vec<Rect> = canvas
            .commands()
            .iter()
            .filter_map(DrawCommand::rect_bounds)
            .collect();
        // Groove intersects the clip; the right thumb does not.
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[1], left);
    }

    #[test]
    fn test_paint_ticks_and_labels() {
        let mut state = SliderState::new(&[50], 0, 100);
        state.paint_ticks = true;
        state.paint_labels = true;
        state.major_tick_spacing = 50;
        state.minor_tick_spacing = 25;
        state.set_bounds(Rect::new(0.0, 0.0, 216.0, 60.0));
        let mut ui = MultiSliderUi::new();
        ui.install(&mut state);

        let mut canvas = RecordingCanvas::new();
        ui.paint(&state, &mut canvas);
        let lines = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Path { .. }))
            .count();
        let labels: Vec<&str> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(lines, 5 + 3);
        assert_eq!(labels, vec!["0", "50", "100"]);
    }

    #[test]
    fn test_focus_ring_painted_when_focused() {
        let (ui, mut state) = installed(&[10], false);
        state.request_focus();
        let mut canvas = RecordingCanvas::new();
        ui.paint(&state, &mut canvas);
        assert!(canvas.commands().iter().any(|c| matches!(
            c,
            DrawCommand::Rect { bounds, style, .. }
                if *bounds == state.bounds() && style.stroke.is_some()
        )));
    }
}
