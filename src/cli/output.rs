/// Output formatting: the verdict line on stdout, diagnostics and errors on stderr.
use std::io::Write;

use crate::check::Outcome;
use crate::types::{ErrorOutput, OutcomeReport};

/// Environment variable that turns on stderr diagnostics.
pub const DEBUG_ENV: &str = "PANCHECK_DEBUG";

/// Output context passed to the command and the formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    /// When true, print timing spans and an outcome report to stderr.
    pub debug: bool,
}

impl OutputCtx {
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Build from [`DEBUG_ENV`]. Unset, empty, or `0` means off.
    #[must_use]
    pub fn from_env() -> Self {
        let debug = std::env::var_os(DEBUG_ENV).is_some_and(|v| debug_enabled(&v));
        Self::new(debug)
    }

    /// Start a named debug timer. Prints elapsed on drop only when debug is on.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

fn debug_enabled(value: &std::ffi::OsStr) -> bool {
    !value.is_empty() && value != "0"
}

// --- Verdict ---

/// Write the single verdict line (`OK` or `NOPE`) and flush.
///
/// # Errors
///
/// Returns the underlying I/O error if the write or flush fails.
pub fn write_outcome<W: Write>(out: &mut W, outcome: Outcome) -> std::io::Result<()> {
    writeln!(out, "{}", outcome.message())?;
    out.flush()
}

// --- Diagnostics ---

/// Write an [`OutcomeReport`] as one compact JSON line.
pub fn write_report<W: Write>(out: &mut W, report: &OutcomeReport) {
    match serde_json::to_string(report) {
        Ok(s) => {
            let _ = writeln!(out, "[debug] {s}");
        }
        Err(e) => {
            let _ = writeln!(
                out,
                "[debug] outcome={} status={} ({e})",
                report.outcome.code(),
                report.status
            );
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
///
/// Plain `Error: ...` by default; the pretty JSON envelope when debug is on,
/// falling back to the plain form if the envelope cannot be serialized.
pub fn write_error(err: &ErrorOutput, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    render_error(&mut out, err, ctx);
}

fn render_error<W: Write>(out: &mut W, err: &ErrorOutput, ctx: &OutputCtx) {
    let envelope = if ctx.debug {
        serde_json::to_string_pretty(err).ok()
    } else {
        None
    };
    let _ = writeln!(out, "{}", error_text(err, envelope));
}

fn error_text(err: &ErrorOutput, envelope: Option<String>) -> String {
    envelope.unwrap_or_else(|| format!("Error: {}", err.error.message))
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.3}ms", self.label);
        }
    }
}
