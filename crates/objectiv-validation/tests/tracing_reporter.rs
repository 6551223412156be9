use objectiv_schema::{Context, Event, GlobalContextName, TrackerPlatform};
use objectiv_validation::{Reporter, RuleSet, Style, TracingReporter, UniqueContextRule};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_warnings(f: impl FnOnce()) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || CaptureWriter(sink.clone()))
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.lock().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_tracing_reporter_emits_structured_warning() {
    let set = RuleSet::new().with(UniqueContextRule::new(TrackerPlatform::Core));
    let event = Event::new("PressEvent")
        .with_global_context(Context::new(GlobalContextName::PathContext, "test"))
        .with_global_context(Context::new(GlobalContextName::PathContext, "test"));

    let output = capture_warnings(|| {
        assert_eq!(set.validate_and_report(&event, &TracingReporter), 1);
    });

    assert_eq!(output.lines().count(), 1, "output: {}", output);
    assert!(output.contains("WARN"));
    assert!(output.contains(
        "｢objectiv｣ Error: Only one PathContext(id: test) should be present in Global Contexts of PressEvent."
    ));
    assert!(output.contains("rule=UniqueGlobalContext"));
    assert!(output.contains("context=PathContext"));
    assert!(output.contains("event_type=PressEvent"));
    assert!(output.contains(
        "docs=https://objectiv.io/docs/taxonomy/reference/global-contexts/PathContext"
    ));
    // the documentation travels as a field, not as a second line
    assert!(!output.contains("Taxonomy documentation:"));
}

#[test]
fn test_tracing_reporter_group_collapsed_keeps_message_and_style() {
    let output = capture_warnings(|| {
        TracingReporter.group_collapsed("｢objectiv｣ Error: custom", Style::Error);
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("｢objectiv｣ Error: custom"));
    assert!(output.contains("color:red"));
}

#[test]
fn test_tracing_reporter_is_silent_for_clean_events() {
    let set = RuleSet::new().with(UniqueContextRule::new(TrackerPlatform::Core));

    let output = capture_warnings(|| {
        assert_eq!(set.validate_and_report(&Event::new("PressEvent"), &TracingReporter), 0);
    });

    assert!(output.is_empty());
}
