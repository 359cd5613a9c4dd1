//! Tracing setup for the generator binaries.
//!
//! The TUI cannot print to stderr while it owns the terminal, so it installs
//! [`UiTracingLayer`], which captures events into a [`LogBuffer`] that the
//! render loop drains into its log pane once per frame. The buffer has its own
//! mutex and is the only state shared between the layer and the UI.
//!
//! The CLI uses a plain `fmt` subscriber via [`init_cli`].

use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::registry::LookupSpan;

/// Maximum log lines kept in memory.
pub const MAX_LOG_LINES: usize = 500;
/// Trim to this many when the cap is exceeded.
pub const LOG_TRIM_TO: usize = 300;

/// A single captured log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub time: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log severity level (mirrors tracing levels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Short fixed-width label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
        }
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::Trace,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            tracing::Level::ERROR => Self::Error,
        }
    }
}

fn trim(lines: &mut Vec<LogLine>) {
    if lines.len() > MAX_LOG_LINES {
        let drain = lines.len() - LOG_TRIM_TO;
        lines.drain(..drain);
    }
}

/// Shared buffer of pending log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<LogLine>>>);

impl LogBuffer {
    /// Drain all pending lines.
    pub fn drain(&self) -> Vec<LogLine> {
        let mut buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *buf)
    }

    /// Move pending lines into `logs`, keeping `logs` under the cap.
    pub fn flush_into(&self, logs: &mut Vec<LogLine>) {
        let lines = self.drain();
        if lines.is_empty() {
            return;
        }
        logs.extend(lines);
        trim(logs);
    }

    fn push(&self, line: LogLine) {
        if let Ok(mut buf) = self.0.lock() {
            buf.push(line);
            trim(&mut buf);
        }
    }
}

/// A [`tracing_subscriber::Layer`] that captures events into a [`LogBuffer`].
pub struct UiTracingLayer {
    buffer: LogBuffer,
}

impl UiTracingLayer {
    /// Create the layer and the buffer the frontend should drain.
    pub fn new() -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        (
            Self {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for UiTracingLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut message = visitor.message;
        if !visitor.fields.is_empty() {
            let extras: Vec<String> = visitor
                .fields
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            if message.is_empty() {
                message = extras.join(" ");
            } else {
                message = format!("{message} {{{}}}", extras.join(", "));
            }
        }

        self.buffer.push(LogLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            level: (*event.metadata().level()).into(),
            message,
        });
    }
}

/// Extracts the message and extra fields from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let raw = format!("{value:?}");
        if field.name() == "message" {
            self.message = raw;
        } else {
            self.fields.push((field.name().to_string(), raw));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }
}

/// Install a stderr `fmt` subscriber for the CLI.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `verbose`.
pub fn init_cli(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    #[test]
    fn layer_captures_message_and_fields() {
        let (layer, buffer) = UiTracingLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(persisted = true, "pro access unlocked");
            tracing::warn!("clipboard unavailable");
        });

        let lines = buffer.drain();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].level, LogLevel::Info);
        assert_eq!(lines[0].message, "pro access unlocked {persisted=true}");
        assert_eq!(lines[1].level, LogLevel::Warn);
        assert_eq!(lines[1].message, "clipboard unavailable");
        assert!(buffer.drain().is_empty());
    }

    #[test]
    fn flush_into_trims_to_cap() {
        let buffer = LogBuffer::default();
        let mut logs = Vec::new();
        for i in 0..(MAX_LOG_LINES + 1) {
            buffer.push(LogLine {
                time: "00:00:00".into(),
                level: LogLevel::Info,
                message: i.to_string(),
            });
        }
        buffer.flush_into(&mut logs);
        assert!(logs.len() <= MAX_LOG_LINES);
        assert_eq!(logs.last().map(|l| l.message.as_str()), Some("500"));
    }

    #[test]
    fn labels_are_fixed_width() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(level.label().len(), 5);
        }
    }
}
