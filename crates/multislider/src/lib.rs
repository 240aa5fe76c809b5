//! Multislider: a headless multi-thumb range slider.
//!
//! Re-exports the core types at the crate root and the widget crate as
//! [`widgets`]. Hosts drive the slider through [`Widget`] events, paint it
//! onto any [`Canvas`], and forward its values to a
//! [`ClassificationBroadcaster`].
//!
//! ```
//! use multislider::prelude::*;
//!
//! let mut slider = MultiSlider::new(3).values(&[10, 50, 90]).bounded(true);
//! slider.layout(Rect::new(0.0, 0.0, 216.0, 40.0));
//!
//! let mut breaks = ClassificationBroadcaster::new();
//! breaks.add_listener(|event: &ClassificationEvent| {
//!     assert_eq!(event.class_count(), 4);
//! });
//! breaks.fire_classification_changed(&slider.classification_event());
//! ```

pub use multislider_core::*;
pub use multislider_widgets as widgets;

/// Everything a host needs to embed a slider.
pub mod prelude {
    pub use multislider_core::{
        Canvas, ClassificationBroadcaster, ClassificationEvent, ClassificationListener, Event,
        Key, MouseButton, Point, RecordingCanvas, Rect, Size, Widget, WidgetId,
    };
    pub use multislider_widgets::{
        MultiSlider, MultiSliderConfig, MultiSliderUi, Orientation, ScrollDirection,
        ScrollIntent, SliderDelegate, SliderError, SliderStyle, ThumbChanged, ThumbIndex,
        ThumbReleased,
    };
}
