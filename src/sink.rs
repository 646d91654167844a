//! Byte sink abstraction for format engine output.

/// Trait for abstracting byte-oriented output.
///
/// Implement this for your output hardware (UART transmit register, log
/// buffer, ...). Writes may block internally (e.g. busy-wait on a TX-full
/// flag); that is entirely the sink's concern.
pub trait ByteSink {
    /// Error type raised by failed writes. Use
    /// [`core::convert::Infallible`] for sinks that cannot fail.
    type Error;

    /// Writes a single byte, blocking until it is accepted.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Sink over a caller-owned byte slice.
///
/// Bytes past the end of the slice are discarded; [`crate::format_into`]
/// never produces them because it caps emission at the slice length.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    /// Creates a sink writing from the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Returns the total capacity of the underlying slice.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl ByteSink for SliceSink<'_> {
    type Error = core::convert::Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.len < self.buf.len() {
            self.buf[self.len] = byte;
            self.len += 1;
        }
        Ok(())
    }
}
