//! Advisory findings raised while decoding.
//!
//! Decoding never fails on a suspicious code; it reports through a
//! [`DiagnosticSink`] instead. The sink is write-only: nothing it receives can
//! influence the returned gloss. Without a sink ([`NoSink`]) diagnostics are
//! dropped.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("Warning"),
            Severity::Error => f.write_str("Error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub pos: String,
    pub sub_pos: String,
    /// As given by the caller (after sign stripping, for numeric codes).
    pub flexcode: String,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// POS \t SubPOS \t Flexcode \t Severity: message
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}: {}",
            self.pos, self.sub_pos, self.flexcode, self.severity, self.message
        )
    }
}

pub trait DiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSink;

impl DiagnosticSink for NoSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Adapts a callback into a sink.
pub struct FnSink<F>(pub F);

impl<F> DiagnosticSink for FnSink<F>
where
    F: Fn(&Diagnostic),
{
    fn emit(&self, diagnostic: &Diagnostic) {
        (self.0)(diagnostic)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic)
    }
}

/// Appends one line per diagnostic to any writer (a log file, stderr).
/// Write failures are ignored, the sink must never disturb decoding.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut w) = self.writer.lock() {
            let _ = writeln!(w, "{}", diagnostic);
        }
    }
}

/// Forwards diagnostics as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, d: &Diagnostic) {
        match d.severity {
            Severity::Warning => {
                warn!(pos = %d.pos, sub_pos = %d.sub_pos, flexcode = %d.flexcode, "{}", d.message)
            }
            Severity::Error => {
                error!(pos = %d.pos, sub_pos = %d.sub_pos, flexcode = %d.flexcode, "{}", d.message)
            }
        }
    }
}

/// Keeps diagnostics in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    collected: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.collected.lock().map(|c| c.clone()).unwrap_or_default()
    }
    pub fn take(&self) -> Vec<Diagnostic> {
        self.collected.lock().map(|mut c| std::mem::take(&mut *c)).unwrap_or_default()
    }
    pub fn len(&self) -> usize {
        self.collected.lock().map(|c| c.len()).unwrap_or(0)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut c) = self.collected.lock() {
            c.push(diagnostic.clone());
        }
    }
}

/// Hands every diagnostic to each of its sinks in turn.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn DiagnosticSink + Send + Sync>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn push(&mut self, sink: impl DiagnosticSink + Send + Sync + 'static) {
        self.sinks.push(Box::new(sink));
    }
    pub fn len(&self) -> usize {
        self.sinks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl DiagnosticSink for FanoutSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        for sink in &self.sinks {
            sink.emit(diagnostic);
        }
    }
}
