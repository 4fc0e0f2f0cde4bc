//! In-memory log capture for tests
//!
//! Records every event with its `op`, `event` and `command_id` so tests can
//! follow one command from start to end.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::core_types::schema;

/// A captured log event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub command_id: Option<String>,
    pub fields: HashMap<String, String>,
}

struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Test capture layer for collecting log events
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor {
            fields: HashMap::new(),
        };
        event.record(&mut visitor);

        let field = |key: &str| visitor.fields.get(key).cloned();
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: field(schema::FIELD_COMPONENT),
            op: field(schema::FIELD_OP),
            event: field(schema::FIELD_EVENT),
            command_id: field(schema::FIELD_COMMAND_ID),
            fields: visitor.fields.clone(),
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events logged for one command, in order
    pub fn events_for_command(&self, command_id: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.command_id.as_deref() == Some(command_id))
            .collect()
    }

    /// Panics unless some command logged `event` for `op`
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let found = self.count_events(|e| {
            e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event)
        });
        assert!(found > 0, "no `{}` event captured for op `{}`", event, op);
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Returns a shared global capture instance. Tests running in parallel share
/// it, so filter by op or command id rather than counting everything.
///
/// # Example
///
/// ```
/// use mgw_core::logging_facility::test_capture::init_test_capture;
/// use mgw_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("listitem");
/// capture.assert_event_exists("listitem", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            // Another subscriber may already own the global slot
            tracing_subscriber::registry().with(layer).try_init().ok();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_groups_events_by_command() {
        let (layer, capture) = TestCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            crate::log_op_start!("listitem", command_id = "c1");
            crate::log_op_start!("listorder", command_id = "c2");
            crate::log_op_end!("listitem", duration_ms = 0u64, command_id = "c1");
        });

        let c1: Vec<_> = capture
            .events_for_command("c1")
            .into_iter()
            .filter_map(|e| e.event)
            .collect();
        assert_eq!(c1, vec![schema::EVENT_START, schema::EVENT_END]);
        assert_eq!(capture.events_for_command("c2").len(), 1);
        capture.assert_event_exists("listorder", schema::EVENT_START);
    }
}
