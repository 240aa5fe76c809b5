//! Keyboard and programmatic scrolling of the current thumb.

use multislider_core::Key;
use serde::{Deserialize, Serialize};

use super::{MultiSlider, ThumbChanged};

/// Direction of a value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollDirection {
    /// Toward the minimum
    Negative,
    /// Toward the maximum
    Positive,
}

impl ScrollDirection {
    /// `-1` or `+1`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Positive => 1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}

/// What a scroll action should do to the current thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollIntent {
    /// Decrease by a unit or a block
    Negative {
        /// Block instead of unit
        block: bool,
    },
    /// Increase by a unit or a block
    Positive {
        /// Block instead of unit
        block: bool,
    },
    /// Jump to the minimum
    Min,
    /// Jump to the maximum
    Max,
}

impl ScrollIntent {
    /// Intent bound to `key`, if any.
    #[must_use]
    pub const fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Right | Key::Up => Some(Self::Positive { block: false }),
            Key::Left | Key::Down => Some(Self::Negative { block: false }),
            Key::PageUp => Some(Self::Positive { block: true }),
            Key::PageDown => Some(Self::Negative { block: true }),
            Key::Home => Some(Self::Min),
            Key::End => Some(Self::Max),
            _ => None,
        }
    }

    /// The intent as applied to a slider with the given inversion.
    #[must_use]
    pub const fn resolved(self, inverted: bool) -> Self {
        if !inverted {
            return self;
        }
        match self {
            Self::Negative { block } => Self::Positive { block },
            Self::Positive { block } => Self::Negative { block },
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }
}

/// A scroll intent bound to one slider.
///
/// The command acts on whichever thumb is current when it executes.
#[derive(Debug)]
pub struct ScrollCommand<'a> {
    slider: &'a mut MultiSlider,
    intent: ScrollIntent,
}

impl<'a> ScrollCommand<'a> {
    /// Bind `intent` to `slider`.
    pub fn new(slider: &'a mut MultiSlider, intent: ScrollIntent) -> Self {
        Self { slider, intent }
    }

    /// Intent as given, before inversion is applied.
    #[must_use]
    pub const fn intent(&self) -> ScrollIntent {
        self.intent
    }

    /// Apply the intent.
    pub fn execute(self) -> Option<ThumbChanged> {
        let slider = self.slider;
        match self.intent.resolved(slider.is_inverted()) {
            ScrollIntent::Negative { block: false } => {
                slider.scroll_by_unit(ScrollDirection::Negative)
            }
            ScrollIntent::Positive { block: false } => {
                slider.scroll_by_unit(ScrollDirection::Positive)
            }
            ScrollIntent::Negative { block: true } => {
                slider.scroll_by_block(ScrollDirection::Negative)
            }
            ScrollIntent::Positive { block: true } => {
                slider.scroll_by_block(ScrollDirection::Positive)
            }
            ScrollIntent::Min => {
                let min = slider.minimum();
                slider.set_current_value(min)
            }
            ScrollIntent::Max => {
                let max = slider.maximum();
                slider.set_current_value(max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign_and_reverse() {
        assert_eq!(ScrollDirection::Negative.sign(), -1);
        assert_eq!(ScrollDirection::Positive.sign(), 1);
        assert_eq!(
            ScrollDirection::Positive.reversed(),
            ScrollDirection::Negative
        );
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            ScrollIntent::for_key(Key::Right),
            Some(ScrollIntent::Positive { block: false })
        );
        assert_eq!(
            ScrollIntent::for_key(Key::Down),
            Some(ScrollIntent::Negative { block: false })
        );
        assert_eq!(
            ScrollIntent::for_key(Key::PageUp),
            Some(ScrollIntent::Positive { block: true })
        );
        assert_eq!(
            ScrollIntent::for_key(Key::PageDown),
            Some(ScrollIntent::Negative { block: true })
        );
        assert_eq!(ScrollIntent::for_key(Key::Home), Some(ScrollIntent::Min));
        assert_eq!(ScrollIntent::for_key(Key::End), Some(ScrollIntent::Max));
        assert_eq!(ScrollIntent::for_key(Key::Enter), None);
    }

    #[test]
    fn test_inversion_swaps_intents() {
        assert_eq!(
            ScrollIntent::Positive { block: true }.resolved(true),
            ScrollIntent::Negative { block: true }
        );
        assert_eq!(ScrollIntent::Min.resolved(true), ScrollIntent::Max);
        assert_eq!(ScrollIntent::Max.resolved(false), ScrollIntent::Max);
    }

    #[test]
    fn test_command_moves_only_current_thumb() {
        let mut slider = MultiSlider::new(3).values(&[10, 50, 90]);
        let changed = ScrollCommand::new(&mut slider, ScrollIntent::Positive { block: false })
            .execute()
            .unwrap();
        assert_eq!(changed.index.get(), 0);
        assert_eq!(changed.previous, 10);
        assert_eq!(changed.value, 11);
        assert_eq!(slider.get_values(), vec![11, 50, 90]);
    }

    #[test]
    fn test_command_block_and_extremes() {
        let mut slider = MultiSlider::new(2).values(&[40, 60]);
        ScrollCommand::new(&mut slider, ScrollIntent::Negative { block: true }).execute();
        assert_eq!(slider.get_values(), vec![30, 60]);

        ScrollCommand::new(&mut slider, ScrollIntent::Max).execute();
        assert_eq!(slider.get_values(), vec![100, 60]);

        assert!(ScrollCommand::new(&mut slider, ScrollIntent::Max)
            .execute()
            .is_none());
    }

    #[test]
    fn test_command_respects_inversion() {
        let mut slider = MultiSlider::new(1).values(&[50]).inverted(true);
        ScrollCommand::new(&mut slider, ScrollIntent::Positive { block: false }).execute();
        assert_eq!(slider.get_values(), vec![49]);
        ScrollCommand::new(&mut slider, ScrollIntent::Min).execute();
        assert_eq!(slider.get_values(), vec![100]);
    }
}
