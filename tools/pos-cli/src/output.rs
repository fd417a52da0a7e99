//! Terminal output for the register.
//!
//! Alerts go to stderr and screen content to stdout. In JSON mode only
//! [`Output::json`] and errors are written.

use std::time::Duration;

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TICK: Duration = Duration::from_millis(100);

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn emit(&self, stream: Stream, line: impl std::fmt::Display) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }

    fn marked(&self, stream: Stream, mark: StyledObject<&str>, msg: &str) {
        self.emit(stream, format_args!("{} {}", mark, msg));
    }

    pub fn info(&self, msg: &str) {
        self.marked(Stream::Stdout, style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.marked(Stream::Stdout, style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.marked(Stream::Stderr, style("⚠").yellow(), msg);
    }

    /// Print an error; in JSON mode as `{"error": ...}` on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Detail shown only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.emit(Stream::Stderr, style(format!("→ {}", msg)).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        self.emit(Stream::Stdout, format_args!("\n{}", style(msg).bold().underlined()));
    }

    /// Print a value as pretty JSON on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// A labelled panel field, e.g. `Name: Green Tea`.
    pub fn kv(&self, key: &str, value: &str) {
        self.emit(Stream::Stdout, format_args!("  {}: {}", style(key).dim(), value));
    }

    /// A labelled total, in bold.
    pub fn total(&self, key: &str, value: &str) {
        self.emit(
            Stream::Stdout,
            format_args!("  {}: {}", style(key).bold(), style(value).bold()),
        );
    }

    pub fn list_item(&self, item: &str) {
        self.emit(Stream::Stdout, format_args!("  {} {}", style("•").dim(), item));
    }

    /// Dimmed text standing in for empty content.
    pub fn placeholder(&self, msg: &str) {
        self.emit(Stream::Stdout, format_args!("  {}", style(msg).dim()));
    }

    /// Spinner shown while a backend call is in flight; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(SPINNER_TICK);
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}
