//! Input delivered to widgets by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Host input, in the widget's coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    MouseMove {
        position: Point,
    },
    MouseDown {
        position: Point,
        button: MouseButton,
    },
    MouseUp {
        position: Point,
        button: MouseButton,
    },
    KeyDown {
        key: Key,
    },
    KeyUp {
        key: Key,
    },
    FocusIn,
    FocusOut,
    /// The widget's box changed size; its origin is unchanged
    Resize {
        width: f32,
        height: f32,
    },
    /// Host clock, used to drive repeat timers
    Tick {
        /// Monotonic milliseconds
        now_ms: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    Tab,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_serde_shape() {
        let json = serde_json::to_string(&Event::Tick { now_ms: 1234 }).unwrap();
        assert_eq!(json, r#"{"Tick":{"now_ms":1234}}"#);
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Event::Tick { now_ms: 1234 });
    }

    #[test]
    fn test_mouse_down_round_trip() {
        let down = Event::MouseDown {
            position: Point::new(108.0, 20.0),
            button: MouseButton::Left,
        };
        let json = serde_json::to_string(&down).unwrap();
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), down);
    }
}
