//! Classification-change notifications.
//!
//! Choropleth tools partition a numeric attribute into classes; whenever the
//! class breaks change, every registered [`ClassificationListener`] is told
//! about it through a [`ClassificationEvent`]. Registration is in-process only.

use crate::widget::WidgetId;
use serde::{Deserialize, Serialize};

/// A change to a classification scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationEvent {
    /// Widget or component that produced the change
    pub source: Option<WidgetId>,
    /// Upper bound of every class except the last, in ascending order
    pub breaks: Vec<f64>,
}

impl ClassificationEvent {
    /// Create an event; breaks are sorted ascending.
    #[must_use]
    pub fn new(source: Option<WidgetId>, mut breaks: Vec<f64>) -> Self {
        breaks.sort_by(f64::total_cmp);
        Self { source, breaks }
    }

    /// Number of classes the breaks describe.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.breaks.len() + 1
    }

    /// Class index that `value` falls into.
    ///
    /// A value equal to a break belongs to the lower class.
    #[must_use]
    pub fn classify(&self, value: f64) -> usize {
        self.breaks.partition_point(|b| *b < value)
    }
}

/// Observer of classification changes.
pub trait ClassificationListener: Send {
    /// Called once per broadcast.
    fn classification_changed(&mut self, event: &ClassificationEvent);
}

impl<F> ClassificationListener for F
where
    F: FnMut(&ClassificationEvent) + Send,
{
    fn classification_changed(&mut self, event: &ClassificationEvent) {
        self(event);
    }
}

/// Handle returned by [`ClassificationBroadcaster::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassificationListenerId(u64);

/// Fan-out of classification events to registered listeners.
#[derive(Default)]
pub struct ClassificationBroadcaster {
    listeners: Vec<(ClassificationListenerId, Box<dyn ClassificationListener>)>,
    next_id: u64,
}

impl std::fmt::Debug for ClassificationBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationBroadcaster")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ClassificationBroadcaster {
    /// Create a broadcaster with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn add_listener<L>(&mut self, listener: L) -> ClassificationListenerId
    where
        L: ClassificationListener + 'static,
    {
        let id = ClassificationListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was unknown.
    pub fn remove_listener(&mut self, id: ClassificationListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to every listener in registration order.
    pub fn fire_classification_changed(&mut self, event: &ClassificationEvent) {
        log::debug!(
            "classification changed: {} classes, {} listener(s)",
            event.class_count(),
            self.listeners.len()
        );
        for (_, listener) in &mut self.listeners {
            listener.classification_changed(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        seen: Arc<Mutex<Vec<usize>>>,
    }

    impl ClassificationListener for Recorder {
        fn classification_changed(&mut self, event: &ClassificationEvent) {
            self.seen
                .lock()
                .expect("recorder lock")
                .push(event.class_count());
        }
    }

    #[test]
    fn test_event_sorts_breaks() {
        let e = ClassificationEvent::new(None, vec![30.0, 10.0, 20.0]);
        assert_eq!(e.breaks, vec![10.0, 20.0, 30.0]);
        assert_eq!(e.class_count(), 4);
    }

    #[test]
    fn test_classify() {
        let e = ClassificationEvent::new(None, vec![10.0, 20.0]);
        assert_eq!(e.classify(5.0), 0);
        assert_eq!(e.classify(10.0), 0);
        assert_eq!(e.classify(10.5), 1);
        assert_eq!(e.classify(99.0), 2);
    }

    #[test]
    fn test_every_listener_notified_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut b = ClassificationBroadcaster::new();
        b.add_listener(Recorder {
            seen: Arc::clone(&seen),
        });
        b.add_listener(Recorder {
            seen: Arc::clone(&seen),
        });

        b.fire_classification_changed(&ClassificationEvent::new(None, vec![1.0]));
        assert_eq!(*seen.lock().unwrap(), vec![2, 2]);
    }

    #[test]
    fn test_closure_listener_and_removal() {
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let mut b = ClassificationBroadcaster::new();
        let id = b.add_listener(move |_: &ClassificationEvent| {
            *sink.lock().expect("count lock") += 1;
        });

        let event = ClassificationEvent::new(Some(WidgetId::new(7)), vec![]);
        b.fire_classification_changed(&event);
        assert!(b.remove_listener(id));
        assert!(!b.remove_listener(id));
        b.fire_classification_changed(&event);

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(b.listener_count(), 0);
    }
}
