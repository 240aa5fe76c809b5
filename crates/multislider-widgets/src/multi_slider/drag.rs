//! Pointer gesture state between press and release.

use multislider_core::{Point, Rect};

use super::arena::{ThumbArena, ThumbIndex};
use super::geometry::TrackAxis;
use super::hit_test::ThumbHit;
use super::scroll::ScrollDirection;

/// Phase of the pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No button held
    #[default]
    Idle,
    /// Pressed on a thumb, not moved yet
    Pressed,
    /// Moving a thumb
    Dragging,
    /// Pressed on the track; the current thumb pages toward the pointer
    TrackScrolling,
}

/// Main-axis interval a dragged thumb's centre must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClampRange {
    /// Smallest allowed centre
    pub low: f32,
    /// Largest allowed centre
    pub high: f32,
}

impl ClampRange {
    /// Range between two pixels given in either order.
    #[must_use]
    pub fn between(a: f32, b: f32) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Range the thumb at `index` may move in.
    ///
    /// Bounded thumbs stay between the rendered centres of their neighbours,
    /// with the track ends standing in for missing neighbours. Unbounded
    /// thumbs may use the whole track.
    #[must_use]
    pub fn for_thumb(
        axis: &TrackAxis,
        rects: &ThumbArena<Rect>,
        index: ThumbIndex,
        bounded: bool,
    ) -> Self {
        if !bounded {
            return Self::between(axis.first_pixel(), axis.last_pixel());
        }
        let lower = index
            .prev()
            .map_or_else(|| axis.min_end(), |prev| axis.centre_of(&rects[prev]));
        let upper = index
            .next(rects.len())
            .map_or_else(|| axis.max_end(), |next| axis.centre_of(&rects[next]));
        Self::between(lower, upper)
    }

    /// Clamp a thumb start so the centre of a thumb of `length` stays inside.
    #[must_use]
    pub fn clamp_start(&self, start: f32, length: f32) -> f32 {
        let half = length / 2.0;
        start.max(self.low - half).min(self.high - half)
    }
}

/// Bookkeeping for one pointer gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    phase: DragPhase,
    press_origin: Point,
    pointer: Point,
    offset: f32,
    candidates: Option<ThumbHit>,
    clamp: ClampRange,
    scroll_direction: Option<ScrollDirection>,
}

impl DragSession {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a thumb is held (pressed or being dragged).
    #[must_use]
    pub const fn holds_thumb(&self) -> bool {
        matches!(self.phase, DragPhase::Pressed | DragPhase::Dragging)
    }

    /// Latest pointer position seen during the gesture.
    #[must_use]
    pub const fn pointer(&self) -> Point {
        self.pointer
    }

    /// Distance from the held thumb's start to the pointer at press time.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Thumbs that were under the pointer at press time.
    #[must_use]
    pub const fn candidates(&self) -> Option<ThumbHit> {
        self.candidates
    }

    /// Interval the held thumb's centre is kept in.
    #[must_use]
    pub const fn clamp(&self) -> ClampRange {
        self.clamp
    }

    /// Direction of the track auto-scroll, if one is active.
    #[must_use]
    pub const fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Start holding the thumbs in `hit`.
    pub fn grab(&mut self, hit: ThumbHit, pointer: Point, offset: f32, clamp: ClampRange) {
        *self = Self {
            phase: DragPhase::Pressed,
            press_origin: pointer,
            pointer,
            offset,
            candidates: Some(hit),
            clamp,
            scroll_direction: None,
        };
    }

    /// Start paging the current thumb toward `pointer`.
    pub fn scroll_track(&mut self, pointer: Point, direction: ScrollDirection) {
        *self = Self {
            phase: DragPhase::TrackScrolling,
            press_origin: pointer,
            pointer,
            scroll_direction: Some(direction),
            ..Self::default()
        };
    }

    /// Remember the latest pointer position.
    pub fn track_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
        if self.phase == DragPhase::Pressed {
            self.phase = DragPhase::Dragging;
        }
    }

    /// Pick which of the held thumbs moves, based on the displacement since
    /// the press, and collapse the candidates to it.
    ///
    /// Moving toward larger values picks the highest held index, anything
    /// else the lowest.
    pub fn choose_moving(&mut self, axis: &TrackAxis) -> Option<ThumbIndex> {
        let hit = self.candidates?;
        let displacement = axis.along(self.pointer) - axis.along(self.press_origin);
        let chosen = if axis.raises_value(displacement) {
            hit.hi
        } else {
            hit.lo
        };
        self.candidates = Some(ThumbHit {
            lo: chosen,
            hi: chosen,
        });
        Some(chosen)
    }

    /// Replace the clamp interval.
    pub fn set_clamp(&mut self, clamp: ClampRange) {
        self.clamp = clamp;
    }

    /// End the gesture.
    pub fn release(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multi_slider::state::Orientation;
    use multislider_core::Size;

    fn axis(inverted: bool) -> TrackAxis {
        TrackAxis::new(
            Rect::new(0.0, 0.0, 200.0, 20.0),
            Orientation::Horizontal,
            inverted,
            0,
            100,
        )
    }

    fn rects_at(axis: &TrackAxis, values: &[i32]) -> ThumbArena<Rect> {
        ThumbArena::from_fn(values.len(), |i| {
            axis.place(Size::new(10.0, 20.0), axis.position_for_value(values[i.get()]))
        })
    }

    fn hit(lo: usize, hi: usize) -> ThumbHit {
        ThumbHit {
            lo: ThumbIndex::new(lo, 4).unwrap(),
            hi: ThumbIndex::new(hi, 4).unwrap(),
        }
    }

    #[test]
    fn test_clamp_between_neighbours() {
        let a = axis(false);
        let rects = rects_at(&a, &[10, 50, 90]);
        let mid = rects.index(1).unwrap();
        let clamp = ClampRange::for_thumb(&a, &rects, mid, true);
        assert_eq!(clamp, ClampRange::between(20.0, 180.0));
    }

    #[test]
    fn test_clamp_at_track_ends() {
        let a = axis(false);
        let rects = rects_at(&a, &[10, 50, 90]);
        let first = ClampRange::for_thumb(&a, &rects, ThumbIndex::FIRST, true);
        assert_eq!(first, ClampRange::between(0.0, 100.0));
        let last = ClampRange::for_thumb(&a, &rects, rects.index(2).unwrap(), true);
        assert_eq!(last, ClampRange::between(100.0, 199.0));
    }

    #[test]
    fn test_clamp_inverted_orders_edges() {
        let a = axis(true);
        let rects = rects_at(&a, &[10, 50]);
        let first = ClampRange::for_thumb(&a, &rects, ThumbIndex::FIRST, true);
        assert!(first.low < first.high);
        assert_eq!(first.high, 199.0);
    }

    #[test]
    fn test_unbounded_clamp_is_whole_track() {
        let a = axis(false);
        let rects = rects_at(&a, &[10, 50, 90]);
        let clamp = ClampRange::for_thumb(&a, &rects, rects.index(1).unwrap(), false);
        assert_eq!(clamp, ClampRange::between(0.0, 199.0));
    }

    #[test]
    fn test_clamp_start_keeps_centre_inside() {
        let clamp = ClampRange::between(20.0, 180.0);
        assert_eq!(clamp.clamp_start(500.0, 10.0), 175.0);
        assert_eq!(clamp.clamp_start(-500.0, 10.0), 15.0);
        assert_eq!(clamp.clamp_start(50.0, 10.0), 50.0);
    }

    #[test]
    fn test_grab_then_move_starts_dragging() {
        let mut s = DragSession::default();
        s.grab(hit(1, 1), Point::new(50.0, 5.0), 3.0, ClampRange::default());
        assert_eq!(s.phase(), DragPhase::Pressed);
        assert!(s.holds_thumb());
        s.track_pointer(Point::new(60.0, 5.0));
        assert_eq!(s.phase(), DragPhase::Dragging);
        assert_eq!(s.offset(), 3.0);
    }

    #[test]
    fn test_choose_moving_by_displacement() {
        let a = axis(false);
        let mut right = DragSession::default();
        right.grab(hit(1, 3), Point::new(50.0, 5.0), 0.0, ClampRange::default());
        right.track_pointer(Point::new(55.0, 5.0));
        assert_eq!(right.choose_moving(&a).map(ThumbIndex::get), Some(3));
        assert_eq!(right.candidates(), Some(hit(3, 3)));

        let mut still = DragSession::default();
        still.grab(hit(1, 3), Point::new(50.0, 5.0), 0.0, ClampRange::default());
        still.track_pointer(Point::new(50.0, 9.0));
        assert_eq!(still.choose_moving(&a).map(ThumbIndex::get), Some(1));
    }

    #[test]
    fn test_choose_moving_inverted() {
        let a = axis(true);
        let mut s = DragSession::default();
        s.grab(hit(0, 2), Point::new(50.0, 5.0), 0.0, ClampRange::default());
        s.track_pointer(Point::new(40.0, 5.0));
        assert_eq!(s.choose_moving(&a).map(ThumbIndex::get), Some(2));
    }

    #[test]
    fn test_scroll_track_and_release() {
        let mut s = DragSession::default();
        s.scroll_track(Point::new(180.0, 5.0), ScrollDirection::Positive);
        assert_eq!(s.phase(), DragPhase::TrackScrolling);
        assert!(!s.holds_thumb());
        assert_eq!(s.scroll_direction(), Some(ScrollDirection::Positive));
        s.track_pointer(Point::new(150.0, 5.0));
        assert_eq!(s.phase(), DragPhase::TrackScrolling);

        s.release();
        assert_eq!(s, DragSession::default());
    }
}
