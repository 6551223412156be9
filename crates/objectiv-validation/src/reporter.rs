use crate::diagnostic::Diagnostic;
use parking_lot::Mutex;
use std::io::Write;

/// Rendering hint passed along with each diagnostic group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Error styling (red).
    Error,
}

impl Style {
    /// CSS form used by browser consoles.
    pub fn css(&self) -> &'static str {
        match self {
            Style::Error => "color:red",
        }
    }

    fn ansi(&self) -> &'static str {
        match self {
            Style::Error => "\x1b[31m",
        }
    }
}

/// Sink for formatted diagnostics.
///
/// Called once per violation with the two-line message. Implementations that
/// are shared across threads handle their own synchronization.
pub trait Reporter {
    /// Opens a diagnostic group with the given message and styling hint.
    fn group_collapsed(&self, message: &str, style: Style);

    /// Reports a diagnostic in its canonical two-line form.
    fn report(&self, diagnostic: &Diagnostic) {
        self.group_collapsed(&diagnostic.to_string(), Style::Error);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn group_collapsed(&self, message: &str, style: Style) {
        (**self).group_collapsed(message, style)
    }

    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Writes diagnostics to stderr, colouring the header line when enabled.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    /// Creates a console reporter.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renders a message as written to stderr: the header line styled when
    /// colour is on, the remaining lines unchanged.
    pub fn render(&self, message: &str, style: Style) -> String {
        if !self.color {
            return format!("{}\n", message);
        }
        match message.split_once('\n') {
            Some((header, rest)) => format!("{}{}\x1b[0m\n{}\n", style.ansi(), header, rest),
            None => format!("{}{}\x1b[0m\n", style.ansi(), message),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn group_collapsed(&self, message: &str, style: Style) {
        let rendered = self.render(message, style);
        // stderr going away is not something a reporter can act on
        let _ = std::io::stderr().lock().write_all(rendered.as_bytes());
    }
}

/// Emits each diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn group_collapsed(&self, message: &str, style: Style) {
        tracing::warn!(style = style.css(), "{}", message);
    }

    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            rule = ?diagnostic.rule,
            context = %diagnostic.context_name,
            event_type = %diagnostic.event_type,
            docs = %diagnostic.docs_url,
            "{} Error: {}",
            diagnostic.tag(),
            diagnostic.message
        );
    }
}

/// Keeps every call in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    calls: Mutex<Vec<(String, Style)>>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded `(message, style)` calls.
    pub fn calls(&self) -> Vec<(String, Style)> {
        self.calls.lock().clone()
    }

    /// Returns the recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(m, _)| m.clone()).collect()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Drops all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl Reporter for RecordingReporter {
    fn group_collapsed(&self, message: &str, style: Style) {
        self.calls.lock().push((message.to_string(), style));
    }
}
