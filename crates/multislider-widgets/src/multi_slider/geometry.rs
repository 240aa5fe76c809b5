//! Track layout and the mapping between values and pixels.

use multislider_core::{Point, Rect, Size};

use super::state::{Orientation, SliderState};

/// Width (or height, when vertical) a slider asks for along its main axis.
pub const PREFERRED_TRACK_LENGTH: f32 = 200.0;

/// Round to the nearest integer, halves toward positive infinity.
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Snap `value` to the nearest multiple of `spacing` counted from `min`.
///
/// A spacing of zero or less leaves the value unchanged.
#[must_use]
pub fn snap_to_tick(value: i32, min: i32, spacing: i32) -> i32 {
    if spacing <= 0 {
        return value;
    }
    let steps = round_half_up((f64::from(value) - f64::from(min)) / f64::from(spacing));
    (f64::from(min) + steps * f64::from(spacing)) as i32
}

/// Rectangles derived from the widget bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackLayout {
    /// Area the focus ring is drawn around
    pub focus: Rect,
    /// Bounds minus the focus inset
    pub content: Rect,
    /// Area thumbs travel in
    pub track: Rect,
    /// Area ticks are drawn in (empty when ticks are off)
    pub ticks: Rect,
    /// Area labels are drawn in (empty when labels are off)
    pub labels: Rect,
    /// Main-axis inset of the track inside the content area
    pub track_buffer: f32,
}

impl TrackLayout {
    /// Lay out the slider inside `state.bounds()`.
    #[must_use]
    pub fn compute(state: &SliderState) -> Self {
        let style = state.style();
        let focus = state.bounds();
        let content = focus.inset(style.focus_inset);
        let thumb = state.thumb_size();
        let tick_len = if state.paint_ticks() {
            style.tick_length
        } else {
            0.0
        };
        let label_len = if state.paint_labels() {
            style.label_extent
        } else {
            0.0
        };

        match state.orientation() {
            Orientation::Horizontal => {
                let track_buffer = thumb.width / 2.0;
                let spread = thumb.height + tick_len + label_len;
                let y = content.y + ((content.height - spread) / 2.0).max(0.0);
                let track = Rect::new(
                    content.x + track_buffer,
                    y,
                    2.0f32.mul_add(-track_buffer, content.width).max(0.0),
                    thumb.height,
                );
                let ticks = Rect::new(track.x, track.bottom(), track.width, tick_len);
                let labels = Rect::new(content.x, ticks.bottom(), content.width, label_len);
                Self {
                    focus,
                    content,
                    track,
                    ticks,
                    labels,
                    track_buffer,
                }
            }
            Orientation::Vertical => {
                let track_buffer = thumb.height / 2.0;
                let spread = thumb.width + tick_len + label_len;
                let x = content.x + ((content.width - spread) / 2.0).max(0.0);
                let track = Rect::new(
                    x,
                    content.y + track_buffer,
                    thumb.width,
                    2.0f32.mul_add(-track_buffer, content.height).max(0.0),
                );
                let ticks = Rect::new(track.right(), track.y, tick_len, track.height);
                let labels = Rect::new(ticks.right(), content.y, label_len, content.height);
                Self {
                    focus,
                    content,
                    track,
                    ticks,
                    labels,
                    track_buffer,
                }
            }
        }
    }

    /// Size a slider with this state would like to have.
    #[must_use]
    pub fn preferred_size(state: &SliderState) -> Size {
        let style = state.style();
        let thumb = state.thumb_size();
        let inset = style.focus_inset * 2.0;
        let extras = if state.paint_ticks() {
            style.tick_length
        } else {
            0.0
        } + if state.paint_labels() {
            style.label_extent
        } else {
            0.0
        };
        match state.orientation() {
            Orientation::Horizontal => Size::new(
                PREFERRED_TRACK_LENGTH + thumb.width + inset,
                thumb.height + extras + inset,
            ),
            Orientation::Vertical => Size::new(
                thumb.width + extras + inset,
                PREFERRED_TRACK_LENGTH + thumb.height + inset,
            ),
        }
    }
}

/// One-dimensional view of the track along the slider's main axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackAxis {
    orientation: Orientation,
    inverted: bool,
    track: Rect,
    min: i32,
    max: i32,
}

impl TrackAxis {
    /// Axis over `track` for the given slider settings.
    #[must_use]
    pub const fn new(
        track: Rect,
        orientation: Orientation,
        inverted: bool,
        min: i32,
        max: i32,
    ) -> Self {
        Self {
            orientation,
            inverted,
            track,
            min,
            max,
        }
    }

    /// Axis over `track` using the slider's orientation, inversion and range.
    #[must_use]
    pub const fn for_state(track: Rect, state: &SliderState) -> Self {
        Self::new(
            track,
            state.orientation(),
            state.inverted(),
            state.minimum(),
            state.maximum(),
        )
    }

    /// Main-axis coordinate of a point.
    #[must_use]
    pub const fn along(&self, point: Point) -> f32 {
        match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Main-axis start of a rectangle.
    #[must_use]
    pub const fn start_of(&self, rect: &Rect) -> f32 {
        match self.orientation {
            Orientation::Horizontal => rect.x,
            Orientation::Vertical => rect.y,
        }
    }

    /// Main-axis length of a rectangle.
    #[must_use]
    pub const fn length_of(&self, rect: &Rect) -> f32 {
        match self.orientation {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }

    /// Main-axis centre of a rectangle.
    #[must_use]
    pub fn centre_of(&self, rect: &Rect) -> f32 {
        self.start_of(rect) + self.length_of(rect) / 2.0
    }

    /// First pixel of the track.
    #[must_use]
    pub const fn first_pixel(&self) -> f32 {
        self.start_of(&self.track)
    }

    /// Last pixel of the track.
    #[must_use]
    pub fn last_pixel(&self) -> f32 {
        self.first_pixel() + (self.length_of(&self.track) - 1.0).max(0.0)
    }

    /// Whether moving by `delta` pixels along the axis raises the value.
    #[must_use]
    pub fn raises_value(&self, delta: f32) -> bool {
        let forward = matches!(
            (self.orientation, self.inverted),
            (Orientation::Horizontal, false) | (Orientation::Vertical, true)
        );
        if forward {
            delta > 0.0
        } else {
            delta < 0.0
        }
    }

    fn span(&self) -> f64 {
        f64::from(self.max) - f64::from(self.min)
    }

    /// Pixel position of `value` along the track, clamped to the track.
    #[must_use]
    pub fn position_for_value(&self, value: i32) -> f32 {
        let first = f64::from(self.first_pixel());
        let last = f64::from(self.last_pixel());
        let span = self.span();
        if span <= 0.0 {
            return self.first_pixel();
        }
        let per_value = f64::from(self.length_of(&self.track)) / span;
        let from_min = round_half_up(per_value * (f64::from(value) - f64::from(self.min)));

        let position = match (self.orientation, self.inverted) {
            (Orientation::Horizontal, false) | (Orientation::Vertical, true) => first + from_min,
            (Orientation::Horizontal, true) => last - from_min,
            (Orientation::Vertical, false) => {
                first + round_half_up(per_value * (f64::from(self.max) - f64::from(value)))
            }
        };
        position.clamp(first, last) as f32
    }

    /// Value at pixel `position`; positions beyond the track map to the ends.
    #[must_use]
    pub fn value_for_position(&self, position: f32) -> i32 {
        let span = self.span();
        let length = self.length_of(&self.track);
        if span <= 0.0 || length <= 0.0 {
            return self.min;
        }
        let (low_end, high_end) = match (self.orientation, self.inverted) {
            (Orientation::Horizontal, false) | (Orientation::Vertical, true) => {
                (self.min, self.max)
            }
            (Orientation::Horizontal, true) | (Orientation::Vertical, false) => {
                (self.max, self.min)
            }
        };
        if position <= self.first_pixel() {
            return low_end;
        }
        if position >= self.last_pixel() {
            return high_end;
        }

        let per_pixel = span / f64::from(length);
        let steps =
            round_half_up(f64::from(position - self.first_pixel()) * per_pixel) as i32;
        if low_end == self.min {
            self.min + steps
        } else {
            self.max - steps
        }
    }

    /// Pixel where the minimum value sits.
    #[must_use]
    pub fn min_end(&self) -> f32 {
        self.position_for_value(self.min)
    }

    /// Pixel where the maximum value sits.
    #[must_use]
    pub fn max_end(&self) -> f32 {
        self.position_for_value(self.max)
    }

    /// Thumb rectangle of `size` centred on `centre`, cross axis on the track.
    #[must_use]
    pub fn place(&self, size: Size, centre: f32) -> Rect {
        match self.orientation {
            Orientation::Horizontal => {
                Rect::new(centre - size.width / 2.0, self.track.y, size.width, size.height)
            }
            Orientation::Vertical => {
                Rect::new(self.track.x, centre - size.height / 2.0, size.width, size.height)
            }
        }
    }

    /// `rect` moved so its main-axis start is `start`.
    #[must_use]
    pub const fn move_start(&self, rect: Rect, start: f32) -> Rect {
        match self.orientation {
            Orientation::Horizontal => rect.with_origin(start, rect.y),
            Orientation::Vertical => rect.with_origin(rect.x, start),
        }
    }
}
