//! Output abstraction layer
//!
//! This module provides a backend-agnostic interface for user-facing
//! messages, with one implementation for the command line (colored stdout)
//! and one for the TUI status bar (buffered, expiring messages).

use colored::Colorize;
use std::cell::RefCell;
use std::time::{Duration, Instant};

/// Trait for output operations
///
/// # Examples
///
/// ```
/// use bookr::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.success("Catalog loaded");
/// output.info("40 books");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode, info and success messages are suppressed; normal output,
/// warnings and errors are always shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a stdout writer that suppresses informational output
    #[must_use]
    pub const fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Buffered writer for the TUI status bar
///
/// Messages expire after a TTL so the status bar falls back to its idle
/// content on its own.
///
/// # Examples
///
/// ```
/// use bookr::ui::output::{MessageLevel, OutputWriter, StatusBarWriter};
///
/// let writer = StatusBarWriter::new();
/// writer.success("Theme set to Night");
///
/// let (level, text) = writer.latest_message().unwrap();
/// assert_eq!(level, MessageLevel::Success);
/// assert_eq!(text, "Theme set to Night");
/// ```
#[derive(Debug)]
pub struct StatusBarWriter {
    messages: RefCell<Vec<(MessageLevel, String, Instant)>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Create a new status bar writer with default TTL (5 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    /// Create a new status bar writer with custom TTL
    #[must_use]
    pub const fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
            ttl,
        }
    }

    /// The most recent unexpired message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        let now = Instant::now();
        self.messages
            .borrow()
            .iter()
            .rev()
            .find(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
    }

    /// Count of unexpired messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        let now = Instant::now();
        self.messages
            .borrow()
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .count()
    }

    fn add_message(&self, level: MessageLevel, message: String) {
        let mut messages = self.messages.borrow_mut();
        messages.push((level, message, Instant::now()));

        // Keep only last 100 messages
        if messages.len() > 100 {
            messages.drain(0..50);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message.to_string());
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message.to_string());
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message.to_string());
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message.to_string());
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message.to_string());
    }
}
