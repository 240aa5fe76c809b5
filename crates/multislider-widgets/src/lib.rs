//! Multi-thumb slider widget.
//!
//! [`MultiSlider`] keeps several integer thumbs on one shared range, as used
//! for choosing class breaks on a choropleth legend. Geometry, gestures and
//! painting live behind the [`SliderDelegate`] trait so a host can replace
//! the look-and-feel; [`MultiSliderUi`] is the default.
//!
//! ```
//! use multislider_widgets::MultiSlider;
//!
//! let slider = MultiSlider::new(3).values(&[10, 50, 90]).bounded(true);
//! assert_eq!(slider.get_values(), vec![10, 50, 90]);
//! ```

mod config;
mod error;
pub mod multi_slider;

pub use config::MultiSliderConfig;
pub use error::SliderError;
pub use multi_slider::{
    direct_hit, nearest_thumb, round_half_up, snap_to_tick, ClampRange, DragPhase, DragSession,
    MultiSlider, MultiSliderUi, Orientation, PointerInput, PropertyChange, ScrollCommand,
    ScrollDirection, ScrollIntent, SliderDelegate, SliderMessage, SliderState, SliderStyle,
    ThumbArena, ThumbChanged, ThumbHit, ThumbIndex, ThumbReleased, TrackAxis, TrackLayout,
};
