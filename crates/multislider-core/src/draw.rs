//! Draw commands recorded while painting.
//!
//! A backend replays these; tests inspect them.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Line color and width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    /// Width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Fill and outline of a rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// One recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Open or closed polyline
    Path {
        points: Vec<Point>,
        closed: bool,
        style: StrokeStyle,
    },
    /// Filled and/or outlined rectangle
    Rect { bounds: Rect, style: BoxStyle },
    /// Single line of text anchored at `position`
    Text {
        content: String,
        position: Point,
        style: TextStyle,
    },
}

impl DrawCommand {
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(color),
        }
    }

    /// Two-point open path.
    #[must_use]
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Path {
            points: vec![from, to],
            closed: false,
            style,
        }
    }

    /// Bounds of a rectangle command.
    #[must_use]
    pub const fn rect_bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    /// Fill of a rectangle command; outlines have none.
    #[must_use]
    pub const fn fill_color(&self) -> Option<Color> {
        match self {
            Self::Rect { style, .. } => style.fill,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_and_outlined_rects() {
        let thumb = Rect::new(22.0, 10.0, 12.0, 20.0);
        let filled = DrawCommand::filled_rect(thumb, Color::WHITE);
        assert_eq!(filled.rect_bounds(), Some(thumb));
        assert_eq!(filled.fill_color(), Some(Color::WHITE));

        let ring = DrawCommand::Rect {
            bounds: thumb,
            style: BoxStyle::stroke(StrokeStyle::default()),
        };
        assert_eq!(ring.fill_color(), None);
    }

    #[test]
    fn test_line_is_open_two_point_path() {
        let tick = DrawCommand::line(
            Point::new(8.0, 30.0),
            Point::new(8.0, 38.0),
            StrokeStyle::default(),
        );
        assert!(matches!(
            &tick,
            DrawCommand::Path { points, closed: false, .. } if points.len() == 2
        ));
        assert_eq!(tick.rect_bounds(), None);
        assert_eq!(tick.fill_color(), None);
    }
}
