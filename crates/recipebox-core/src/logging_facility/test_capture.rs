//! In-memory event capture for logging assertions in tests

use recipebox_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event: its level and every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    /// `start`, `end` or `end_error` for lifecycle events
    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    /// Module path of the emitting code
    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }
}

#[derive(Default)]
struct FieldRecorder(HashMap<String, String>);

impl Visit for FieldRecorder {
    // Strings are kept unquoted; numbers and `?`/`%` values go through Debug
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer(Buffer);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields: recorder.0,
        };
        if let Ok(mut events) = self.0.lock() {
            events.push(captured);
        }
    }
}

/// Shared handle onto the captured events
#[derive(Clone)]
pub struct TestCapture(Buffer);

impl TestCapture {
    /// Events logged under `op`, oldest first
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .map(|events| events.iter().filter(|e| e.op() == Some(op)).cloned().collect())
            .unwrap_or_default()
    }

    /// First `event` (e.g. `EVENT_END`) logged under `op`
    pub fn find(&self, op: &str, event: &str) -> Option<CapturedEvent> {
        self.events_for_op(op)
            .into_iter()
            .find(|e| e.event() == Some(event))
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (once per test binary)
///
/// Every test in the binary shares one buffer, so use op names unique to
/// the test.
///
/// ```
/// use recipebox_core::logging_facility::test_capture::init_test_capture;
/// use recipebox_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// assert!(capture.find("doc_capture_op", "start").is_some());
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let buffer = Buffer::default();
            tracing_subscriber::registry()
                .with(CaptureLayer(Arc::clone(&buffer)))
                .init();
            TestCapture(buffer)
        })
        .clone()
}
