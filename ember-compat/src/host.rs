//! Host service contracts the shim is built against.
//!
//! The classic engine reached these services through process-global runtime
//! state. Here every operation takes an explicit [`HostContext`], so the
//! shim can be driven against fake hosts in tests and against whatever the
//! embedder wires up in production.

use crate::args::ArgPack;
use ember_diagnostics::{Severity, SinkError};

/// The call site the host VM is currently executing.
///
/// All three fields come from the host's call-stack introspection, never
/// from the caller. When no class is active, `class` and `separator` are
/// both empty; when nothing is executing at all, so is `function`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite {
    pub class: String,
    pub separator: String,
    pub function: String,
}

impl CallSite {
    /// Call site for a free function.
    pub fn function(name: &str) -> Self {
        Self {
            class: String::new(),
            separator: String::new(),
            function: name.to_string(),
        }
    }

    /// Call site for a method, with the host's scope separator.
    pub fn method(class: &str, separator: &str, function: &str) -> Self {
        Self {
            class: class.to_string(),
            separator: separator.to_string(),
            function: function.to_string(),
        }
    }

    /// Diagnostic prefix in the classic shape: `<class><separator><function>(): `.
    pub fn prefix(&self) -> String {
        format!("{}{}{}(): ", self.class, self.separator, self.function)
    }
}

/// Read-only view of the host's live call stack.
pub trait CallStack {
    /// Returns the active call site; all fields empty when nothing is
    /// executing. Missing context is the normal degraded case, not an error.
    fn current(&self) -> CallSite;
}

/// The host's error-reporting facility.
pub trait ErrorSink {
    /// Delivers one diagnostic: the call-site prefix built by the shim and
    /// the still-unrendered argument pack. Substituting the pack into the
    /// final message is the sink's job; the shim pre-renders nothing but the
    /// prefix.
    fn raise(&self, severity: Severity, site_prefix: &str, message: ArgPack<'_>)
        -> Result<(), SinkError>;
}

/// The host's output stream.
pub trait OutputSink {
    /// Accepts the whole buffer or fails as a whole; never reports a partial
    /// write.
    fn write_bytes(&self, buf: &[u8]) -> Result<(), SinkError>;
}

/// Borrowed bundle of the host services one shim call needs.
#[derive(Clone, Copy)]
pub struct HostContext<'a> {
    pub frames: &'a dyn CallStack,
    pub errors: &'a dyn ErrorSink,
    pub output: &'a dyn OutputSink,
}
