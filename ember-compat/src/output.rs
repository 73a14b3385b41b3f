//! Sink-backed writing and printf-style printing for the classic API.

use crate::args::ArgPack;
use crate::host::HostContext;
use ember_diagnostics::SinkError;

// The classic write contract returns the byte count as a signed 32-bit
// integer, so anything at or above 2^31 bytes is unrepresentable.
const MAX_WRITE_BYTES: usize = 1 << 31;

/// Forwards `buf` verbatim to the host output sink and returns the byte
/// count in the classic signed shape.
///
/// A buffer too large for the signed 32-bit return is a bug in the caller
/// (the classic API is never fed untrusted sizes) and trips a fatal
/// assertion before anything is forwarded. No retry, no chunking: the sink
/// accepts the whole buffer or fails through its own error path.
pub fn write(host: &HostContext<'_>, buf: &[u8]) -> Result<i32, SinkError> {
    let len = checked_len(buf.len());
    host.output.write_bytes(buf)?;
    Ok(len)
}

/// Renders the captured arguments into an exact-size buffer and pushes the
/// bytes through [`write`].
///
/// The buffer lives exactly as long as this call and is dropped on every
/// path out, including when the sink fails.
pub fn print_formatted(host: &HostContext<'_>, args: ArgPack<'_>) -> Result<i32, SinkError> {
    let buffer = args.render();
    write(host, &buffer)
}

fn checked_len(len: usize) -> i32 {
    assert!(
        len < MAX_WRITE_BYTES,
        "write of {len} bytes exceeds the classic API's signed 32-bit length contract"
    );
    len as i32
}
