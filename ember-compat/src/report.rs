//! Context-qualified error reporting for the classic API.

use crate::args::ArgPack;
use crate::codes::severity_for;
use crate::host::HostContext;
use ember_diagnostics::SinkError;

/// Reports a diagnostic raised through the classic API.
///
/// Reads the active call site from the host's call-stack introspection,
/// builds the `<class><separator><function>(): ` prefix, maps `code` onto
/// the host severity model, and forwards prefix plus the untouched argument
/// pack to the host error sink. Sink failures propagate unchanged.
///
/// An empty argument pack produces a prefix-only diagnostic; an idle call
/// stack produces an empty prefix. Neither is an error. An unmapped `code`
/// is a contract violation and panics before the sink is reached.
pub fn report(host: &HostContext<'_>, code: i32, message: ArgPack<'_>) -> Result<(), SinkError> {
    let severity = severity_for(code);
    let site = host.frames.current();
    host.errors.raise(severity, &site.prefix(), message)
}
