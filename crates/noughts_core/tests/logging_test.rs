//! Tests for the log levels the library uses on rejected input.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use noughts_core::{Session, SessionScorer};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts events at WARN or ERROR.
struct WarningCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level == Level::WARN || level == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn test_rejected_input_does_not_warn() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarningCounter(warnings.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let mut session = Session::default();
        session.play(0).expect("valid move");
        assert!(session.play(0).is_err());
        assert!(session.play(9).is_err());
        for idx in [4, 1, 5, 2] {
            session.play(idx).expect("valid move");
        }
        assert!(session.play(8).is_err());

        let mut scorer = SessionScorer::new();
        assert!(scorer.record_win_symbol("Z").is_err());
    });

    assert_eq!(warnings.load(Ordering::SeqCst), 0);
}
