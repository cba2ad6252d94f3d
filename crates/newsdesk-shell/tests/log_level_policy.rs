#![forbid(unsafe_code)]

//! Log level policy for the layout stack.
//!
//! - Every newsdesk event carries structured fields besides the message.
//! - Drag lifecycle and command dispatch log at DEBUG.
//! - Recovered anomalies (capture loss, stale drags) log at WARN.
//! - Nothing logs at ERROR during normal operation.
//!
//! Run:
//!   cargo test -p newsdesk-shell --test log_level_policy

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use newsdesk_core::event::{Event, PointerEvent};
use newsdesk_layout::LayoutMode;
use newsdesk_shell::{Shell, ShellCommand, ShellConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    target: String,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn message(&self) -> &str {
        self.fields.get("message").map_or("", String::as_str)
    }

    fn has_structured_fields(&self) -> bool {
        self.fields.keys().any(|k| k != "message")
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: Arc::clone(&events),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

fn find<'a>(events: &'a [CapturedEvent], target: &str, message: &str) -> Option<&'a CapturedEvent> {
    events
        .iter()
        .find(|e| e.target == target && e.message() == message)
}

fn research_shell() -> Shell {
    let mut shell = Shell::new(ShellConfig {
        initial_mode: LayoutMode::Research,
        ..ShellConfig::default()
    })
    .unwrap();
    shell.handle_event(&Event::Resize {
        width: 1000.0,
        height: 800.0,
    });
    shell
}

fn drag_session(shell: &mut Shell) {
    let rect = shell.frame().handles[0].rect;
    let (x, y) = (rect.center_x(), rect.y + 10.0);
    shell.handle_event(&Event::Pointer(PointerEvent::down(x, y)));
    shell.handle_event(&Event::Pointer(PointerEvent::moved(x + 400.0, y)));
    shell.handle_event(&Event::Pointer(PointerEvent::up(x + 400.0, y)));
}

#[test]
fn drag_lifecycle_logs_at_debug() {
    let mut shell = research_shell();
    let events = capture(|| drag_session(&mut shell));

    let started = find(&events, "newsdesk.resize", "drag started").expect("drag started");
    assert_eq!(started.level, tracing::Level::DEBUG);
    assert_eq!(started.fields["handle_index"], "0");

    let clamped = find(&events, "newsdesk.resize", "drag clamped at minimum").expect("clamp");
    assert_eq!(clamped.level, tracing::Level::TRACE);
    assert!(clamped.fields["side"].contains("Right"));

    let ended = find(&events, "newsdesk.resize", "drag ended").expect("drag ended");
    assert_eq!(ended.level, tracing::Level::DEBUG);
    assert!(ended.fields.contains_key("sizes"));
}

#[test]
fn dispatch_logs_transition() {
    let mut shell = research_shell();
    let events = capture(|| {
        shell.dispatch(ShellCommand::ToggleCanvas);
    });

    let dispatched = find(&events, "newsdesk.shell", "command dispatched").expect("dispatch");
    assert_eq!(dispatched.level, tracing::Level::DEBUG);
    assert_eq!(dispatched.fields["from"], "research");
    assert_eq!(dispatched.fields["to"], "research-canvas");
    assert_eq!(dispatched.fields["show_canvas"], "true");

    let switched = find(&events, "newsdesk.layout", "layout mode switched").expect("switch");
    assert_eq!(switched.fields["panels"], "3");
}

#[test]
fn capture_loss_logs_warning() {
    let mut shell = research_shell();
    let rect = shell.frame().handles[0].rect;
    shell.handle_event(&Event::Pointer(PointerEvent::down(rect.center_x(), rect.y + 1.0)));
    let events = capture(|| {
        shell.handle_event(&Event::PointerCaptureLost);
    });

    let warned = find(&events, "newsdesk.layout", "drag force-ended after capture loss")
        .expect("capture loss warning");
    assert_eq!(warned.level, tracing::Level::WARN);
    assert_eq!(warned.fields["mode"], "research");
}

#[test]
fn all_events_are_structured_and_not_errors() {
    let mut shell = research_shell();
    let events = capture(|| {
        drag_session(&mut shell);
        shell.dispatch(ShellCommand::BackToHome);
        shell.dispatch(ShellCommand::SendMessage { deep_research: true });
        shell.dispatch(ShellCommand::DeepResearchCompleted);
        shell.handle_event(&Event::Focus(false));
        shell.handle_event(&Event::Resize {
            width: 0.0,
            height: 0.0,
        });
    });

    let ours: Vec<_> = events
        .iter()
        .filter(|e| e.target.starts_with("newsdesk."))
        .collect();
    assert!(!ours.is_empty());
    for event in ours {
        assert!(
            event.has_structured_fields() || event.level == tracing::Level::TRACE,
            "unstructured event: {event:?}"
        );
        assert!(event.level != tracing::Level::ERROR, "error logged: {event:?}");
    }
}
