//! Ember Compat - classic extension API shim over the host VM
//!
//! Extensions built against the classic C-era extension API expect three
//! services from the engine:
//! - call-site qualified error reporting with the classic severity codes
//! - raw byte writes into the engine's output stream
//! - printf-style buffered printing
//!
//! The host VM implements its own error and output subsystems; this crate
//! translates the classic calling convention into the host's contracts
//! without changing either side. The shim owns no state - everything it
//! touches is borrowed from the host for the duration of one call.

pub mod args;
pub mod codes;
pub mod host;
pub mod output;
pub mod process;
pub mod report;

pub use args::ArgPack;
pub use codes::severity_for;
pub use host::{CallSite, CallStack, ErrorSink, HostContext, OutputSink};
pub use output::{print_formatted, write};
pub use process::{FrameStack, LogSink, ProcessHost, WriteSink};
pub use report::report;

pub use ember_diagnostics::{Severity, SinkError};

/// Raises a diagnostic the way the classic variadic API did, qualified with
/// the call site the host is currently executing.
///
/// The argument list is captured exactly once and forwarded to the host
/// error sink still unrendered.
///
/// ```
/// # use ember_compat::{codes, raise, ProcessHost};
/// # let host = ProcessHost::new();
/// raise!(&host.context(), codes::WARNING, "unexpected argument {}", 2)?;
/// # Ok::<(), ember_compat::SinkError>(())
/// ```
#[macro_export]
macro_rules! raise {
    ($host:expr, $code:expr, $($fmt:tt)*) => {
        $crate::report($host, $code, $crate::ArgPack::new(::core::format_args!($($fmt)*)))
    };
}

/// Classic printf-style output: renders once into an exact-size buffer and
/// pushes the bytes through the host output sink. Returns the byte count.
///
/// ```
/// # use ember_compat::{emit, ProcessHost};
/// # let host = ProcessHost::new();
/// let written = emit!(&host.context(), "{} items\n", 5)?;
/// assert_eq!(written, 8);
/// # Ok::<(), ember_compat::SinkError>(())
/// ```
#[macro_export]
macro_rules! emit {
    ($host:expr, $($fmt:tt)*) => {
        $crate::print_formatted($host, $crate::ArgPack::new(::core::format_args!($($fmt)*)))
    };
}
