//! Core types and traits for the multislider widget toolkit.
//!
//! This crate provides foundational types used by the widgets:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Events: [`Event`], [`Key`], [`MouseButton`]
//! - Rendering: [`Widget`], [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Value state: [`RangeModel`] with change subscriptions
//! - Timers driven by host ticks: [`RepeatTimer`]
//! - Classification notifications: [`ClassificationListener`]

mod canvas;
mod classification;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod range_model;
mod timer;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use classification::{
    ClassificationBroadcaster, ClassificationEvent, ClassificationListener,
    ClassificationListenerId,
};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use range_model::{ListenerId, RangeChange, RangeModel};
pub use timer::{RepeatTimer, DEFAULT_REPEAT_MS};
pub use widget::{
    AccessibleRole, Canvas, LayoutResult, TextStyle, TypeId, Widget, WidgetId,
};
