//! Opaque capture of one classic variadic argument list.

use std::fmt;

/// One captured variadic argument list, bound to its format string.
///
/// The classic API passes arguments through the platform's variadic ABI and
/// re-reads them wherever the list ends up. Here the list is captured exactly
/// once with [`format_args!`] and handed around as a value; it stays
/// unrendered until a sink forwards it or [`ArgPack::render`] materializes
/// it. The pack is only valid for the call frame that captured it.
#[derive(Clone, Copy)]
pub struct ArgPack<'a> {
    inner: fmt::Arguments<'a>,
}

impl<'a> ArgPack<'a> {
    pub fn new(inner: fmt::Arguments<'a>) -> Self {
        Self { inner }
    }

    /// Forwards the pack into `out` without an intermediate allocation.
    pub fn forward_to(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_fmt(self.inner)
    }

    /// Renders the pack into a freshly allocated buffer sized exactly to the
    /// output. Ownership of the buffer transfers to the caller.
    pub fn render(&self) -> Vec<u8> {
        fmt::format(self.inner).into_bytes()
    }
}

impl fmt::Display for ArgPack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_fmt(self.inner)
    }
}

impl fmt::Debug for ArgPack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ArgPack").field(&self.inner).finish()
    }
}
