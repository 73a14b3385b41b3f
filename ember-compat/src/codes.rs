//! Severity constants of the classic extension API.
//!
//! The classic API encodes severities as bit flags so extensions can build
//! masks out of them; the values are frozen for source compatibility. The
//! host model is [`Severity`], reached only through [`severity_for`] - the
//! shim never relies on the two encodings being numerically compatible.

use ember_diagnostics::Severity;

pub const FATAL: i32 = 1 << 0;
pub const WARNING: i32 = 1 << 1;
pub const NOTICE: i32 = 1 << 3;
pub const USER_FATAL: i32 = 1 << 8;
pub const USER_WARNING: i32 = 1 << 9;
pub const USER_NOTICE: i32 = 1 << 10;
pub const RECOVERABLE: i32 = 1 << 12;
pub const DEPRECATED: i32 = 1 << 13;
pub const USER_DEPRECATED: i32 = 1 << 14;

/// Every code an extension may raise, in ascending numeric order.
pub const ALL: [i32; 9] = [
    FATAL,
    WARNING,
    NOTICE,
    USER_FATAL,
    USER_WARNING,
    USER_NOTICE,
    RECOVERABLE,
    DEPRECATED,
    USER_DEPRECATED,
];

/// Maps a classic severity code onto the host model.
///
/// Total over the classic set. An unknown code is a bug in the calling
/// extension binding, not a runtime condition, and aborts the operation
/// before anything reaches a sink.
pub fn severity_for(code: i32) -> Severity {
    match code {
        FATAL | USER_FATAL => Severity::Fatal,
        WARNING | USER_WARNING => Severity::Warning,
        NOTICE | USER_NOTICE => Severity::Notice,
        RECOVERABLE => Severity::Recoverable,
        DEPRECATED | USER_DEPRECATED => Severity::Deprecated,
        other => panic!("severity code {other:#x} is not part of the classic extension API"),
    }
}
