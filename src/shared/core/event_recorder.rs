// Ordered buffer of domain events recorded by an aggregate and not yet published.
//
// Aggregates embed one of these and expose a drain. Nothing inside the aggregate ever drains it;
// the orchestration layer does, after the aggregate was persisted.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecorder<E> {
    pending: Vec<E>,
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<E> EventRecorder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: E) {
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[E] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Read and clear, preserving recorded order.
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod event_recorder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_drain_in_recorded_order_and_clear() {
        let mut recorder = EventRecorder::new();
        recorder.record("first");
        recorder.record("second");
        assert_eq!(recorder.pending(), &["first", "second"]);

        assert_eq!(recorder.drain(), vec!["first", "second"]);
        assert!(recorder.is_empty());
        assert!(recorder.drain().is_empty());
    }
}
