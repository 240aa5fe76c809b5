//! The [`Widget`] and [`Canvas`] traits hosts drive widgets through.
//!
//! A host measures a widget against [`Constraints`], lays it out in a
//! rectangle, paints it onto a [`Canvas`] and feeds it [`Event`]s. Events may
//! produce a type-erased message for the host to downcast.
//!
//! ```
//! use multislider_core::{TypeId, WidgetId};
//!
//! assert_eq!(WidgetId::new(42).0, 42);
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Host-assigned identity of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Identity of a widget type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Outcome of [`Widget::layout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    pub size: Size,
}

/// A headless, host-driven UI element.
pub trait Widget: Send + Sync {
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept `bounds` and recompute internal geometry.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle one input event, optionally returning a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    fn is_interactive(&self) -> bool {
        false
    }

    fn is_focusable(&self) -> bool {
        false
    }

    /// Name announced by assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Stable id for UI tests.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Paint target.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);

    /// Region that needs repainting, if the backend tracks one.
    ///
    /// Widgets may skip anything entirely outside it.
    fn clip_bounds(&self) -> Option<Rect> {
        None
    }
}

/// Font parameters for [`Canvas::draw_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Size in pixels
    pub size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
        }
    }
}

/// Role reported to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    #[default]
    Generic,
    Slider,
}
