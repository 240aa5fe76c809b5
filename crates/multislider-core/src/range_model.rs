//! Bounded-range value model with change subscriptions.
//!
//! A [`RangeModel`] holds an integer value constrained to `[min, max]`
//! plus an "adjusting" flag that is set while the user is in the middle of a
//! gesture. Every effective change is broadcast to subscribers as a
//! [`RangeChange`].

/// Handle returned by [`RangeModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Snapshot passed to change listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeChange {
    /// Value after the change
    pub value: i32,
    /// Value before the change
    pub previous: i32,
    /// Adjusting flag after the change
    pub adjusting: bool,
}

type Listener = Box<dyn Fn(&RangeChange) + Send + Sync>;

/// Integer value bounded by a minimum and maximum.
pub struct RangeModel {
    min: i32,
    max: i32,
    value: i32,
    adjusting: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl std::fmt::Debug for RangeModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeModel")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("adjusting", &self.adjusting)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for RangeModel {
    fn default() -> Self {
        Self::new(0, 0, 100)
    }
}

impl RangeModel {
    /// Create a model. `min` and `max` are swapped if given in the wrong order,
    /// and the value is clamped into range.
    #[must_use]
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            value: value.clamp(min, max),
            adjusting: false,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub const fn minimum(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn maximum(&self) -> i32 {
        self.max
    }

    /// Whether a gesture is currently adjusting the value.
    #[must_use]
    pub const fn is_adjusting(&self) -> bool {
        self.adjusting
    }

    /// Set the value, clamped into range. Returns `true` if it changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value {
            return false;
        }
        let previous = self.value;
        self.value = clamped;
        self.notify(previous);
        true
    }

    /// Set the adjusting flag. Returns `true` if it changed.
    pub fn set_adjusting(&mut self, adjusting: bool) -> bool {
        if adjusting == self.adjusting {
            return false;
        }
        self.adjusting = adjusting;
        self.notify(self.value);
        true
    }

    /// Replace the bounds, re-clamping the value.
    pub fn set_range(&mut self, min: i32, max: i32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let previous = self.value;
        self.min = min;
        self.max = max;
        self.value = self.value.clamp(min, max);
        self.notify(previous);
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&RangeChange) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a change listener. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&self, previous: i32) {
        let change = RangeChange {
            value: self.value,
            previous,
            adjusting: self.adjusting,
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }
    }
}
