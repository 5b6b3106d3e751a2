//! Helpers shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Counts events and ignores everything else.
struct EventCounter {
    events: Arc<AtomicUsize>,
}

impl Subscriber for EventCounter {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, _: &Event<'_>) {
        self.events.fetch_add(1, Ordering::SeqCst);
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

/// Runs `f` on this thread with a counting subscriber and returns how many
/// events it emitted.
pub(crate) fn count_events(f: impl FnOnce()) -> usize {
    let events = Arc::new(AtomicUsize::new(0));
    let subscriber = EventCounter {
        events: Arc::clone(&events),
    };
    tracing::subscriber::with_default(subscriber, f);
    events.load(Ordering::SeqCst)
}
