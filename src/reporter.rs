// src/reporter.rs
// Failure sinks: panicking, logging, coloured console and recording reporters

use chrono::{DateTime, Local};
use colored::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ColorChoice;

/// Receives one formatted message per failed chain.
pub trait Reporter {
    fn report(&self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for Rc<R> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

/// Fails the surrounding test by panicking, like `assert!` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn report(&self, message: &str) {
        panic!("{}", message);
    }
}

/// Forwards failures to the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, message: &str) {
        log::error!("{}", message);
    }
}

#[derive(Debug, Clone, Copy)]
enum Badge {
    Fail,
}

impl Badge {
    fn render(self, colored: bool) -> String {
        match (self, colored) {
            (Badge::Fail, true) => " FAIL ".on_red().bold().white().to_string(),
            (Badge::Fail, false) => "[FAIL]".to_string(),
        }
    }
}

/// Prints failures to stderr with a coloured badge and an optional
/// timestamp.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    pub enable_timestamps: bool,
    pub color: ColorChoice,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            enable_timestamps: true,
            color: ColorChoice::Auto,
        }
    }

    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.enable_timestamps = enable;
        self
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => atty::is(atty::Stream::Stderr),
        }
    }

    fn format_timestamp(&self, colored: bool) -> String {
        if !self.enable_timestamps {
            return String::new();
        }
        let now: DateTime<Local> = Local::now();
        let stamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
        if colored {
            format!("{} ", stamp.dimmed())
        } else {
            format!("{} ", stamp)
        }
    }

    pub(crate) fn format(&self, message: &str) -> String {
        let colored = self.use_color();
        let mut lines = message.lines();
        let first = lines.next().unwrap_or("");
        let mut out = format!(
            "{}{} {}",
            self.format_timestamp(colored),
            Badge::Fail.render(colored),
            first
        );
        for line in lines {
            out.push_str("\n       ");
            out.push_str(line);
        }
        out
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", self.format(message));
    }
}

/// Keeps every reported message. Clones share the same list, so a test can
/// hand one clone to a response and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_shares_messages_between_clones() {
        let reporter = RecordingReporter::new();
        let handle = reporter.clone();

        reporter.report("first");
        reporter.report("second");

        assert_eq!(handle.count(), 2);
        assert_eq!(handle.last().as_deref(), Some("second"));

        handle.clear();
        assert_eq!(reporter.count(), 0);
    }

    #[test]
    #[should_panic(expected = "expected status")]
    fn test_panic_reporter_panics_with_message() {
        PanicReporter.report("expected status equal to 200");
    }

    #[test]
    fn test_console_reporter_plain_format() {
        let reporter = ConsoleReporter::new()
            .with_timestamps(false)
            .with_color(ColorChoice::Never);

        let formatted = reporter.format("first line\nsecond line");
        assert_eq!(formatted, "[FAIL] first line\n       second line");
    }

    #[test]
    fn test_console_reporter_timestamp_formatting() {
        let reporter = ConsoleReporter::new()
            .with_timestamps(true)
            .with_color(ColorChoice::Never);
        assert!(!reporter.format_timestamp(false).is_empty());

        let reporter = reporter.with_timestamps(false);
        assert!(reporter.format_timestamp(false).is_empty());
    }

    #[test]
    fn test_rc_reporter_forwards() {
        let recording = RecordingReporter::new();
        let shared: Rc<dyn Reporter> = Rc::new(recording.clone());
        shared.report("boom");
        assert_eq!(recording.messages(), vec!["boom".to_string()]);
    }
}
