//! Process-backed host services.
//!
//! A working default for embedders that run the engine in-process: call
//! frames tracked on a mutex-guarded stack, diagnostics routed through the
//! `log` facade, output written to any `io::Write`.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::args::ArgPack;
use crate::host::{CallSite, CallStack, ErrorSink, HostContext, OutputSink};
use ember_diagnostics::{Severity, SinkError};

/// Scope separator the engine uses for method call sites.
pub const SCOPE_SEPARATOR: &str = "::";

/// Stack of call sites, pushed and popped as execution enters and leaves
/// extension functions.
#[derive(Default)]
pub struct FrameStack {
    frames: Mutex<Vec<CallSite>>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a frame; it is popped again when the returned guard drops.
    pub fn enter(&self, site: CallSite) -> FrameGuard<'_> {
        self.frames.lock().unwrap().push(site);
        FrameGuard { stack: self }
    }

    pub fn depth(&self) -> usize {
        self.frames.lock().unwrap().len()
    }
}

impl CallStack for FrameStack {
    fn current(&self) -> CallSite {
        self.frames.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

/// Pops its frame when dropped.
pub struct FrameGuard<'a> {
    stack: &'a FrameStack,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.stack.frames.lock().unwrap().pop();
    }
}

/// Error sink that delivers diagnostics through the `log` facade at the
/// severity's level, rendering the argument pack at the last moment.
pub struct LogSink;

impl ErrorSink for LogSink {
    fn raise(
        &self,
        severity: Severity,
        site_prefix: &str,
        message: ArgPack<'_>,
    ) -> Result<(), SinkError> {
        log::log!(severity.log_level(), "{}{}", site_prefix, message);
        Ok(())
    }
}

/// Output sink over any `io::Write`.
pub struct WriteSink<W> {
    inner: Mutex<W>,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap()
    }
}

impl WriteSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriteSink<W> {
    fn write_bytes(&self, buf: &[u8]) -> Result<(), SinkError> {
        let mut inner = self.inner.lock().unwrap();
        inner.write_all(buf).map_err(|err| SinkError::Write {
            len: buf.len(),
            reason: err.to_string(),
        })
    }
}

/// Default host wiring: frame stack, log-backed error sink, stdout output.
pub struct ProcessHost {
    frames: FrameStack,
    errors: LogSink,
    output: WriteSink<io::Stdout>,
}

impl ProcessHost {
    pub fn new() -> Self {
        Self {
            frames: FrameStack::new(),
            errors: LogSink,
            output: WriteSink::stdout(),
        }
    }

    /// The frame stack the embedder maintains around extension calls.
    pub fn frames(&self) -> &FrameStack {
        &self.frames
    }

    pub fn context(&self) -> HostContext<'_> {
        HostContext {
            frames: &self.frames,
            errors: &self.errors,
            output: &self.output,
        }
    }
}

impl Default for ProcessHost {
    fn default() -> Self {
        Self::new()
    }
}
