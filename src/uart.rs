//! UART helpers: byte echo and formatted writes.
//!
//! The transmit side is just a [`ByteSink`]; [`SerialPort`] adds a
//! non-blocking receive for the echo loop. Receive-FIFO acknowledgement is
//! the implementation's concern.

use crate::args::FormatArg;
use crate::engine::{FormatError, FormatSummary, format_to};
use crate::sink::ByteSink;

/// Per-call output cap for [`write_formatted`].
///
/// Keeps one diagnostic line from monopolizing the port.
pub const WRITE_CAPACITY: usize = 127;

/// Trait for abstracting a byte-oriented serial port.
pub trait SerialPort: ByteSink {
    /// Returns the next received byte, or `None` when the FIFO is empty.
    fn poll_byte(&mut self) -> Option<u8>;
}

/// Drains the receive FIFO, mirroring every byte back to the sender.
///
/// A trailing newline is written after the mirrored bytes. Returns `false`
/// without writing anything when no bytes were pending. Sink errors abort
/// the drain and propagate.
pub fn echo<P: SerialPort>(port: &mut P) -> Result<bool, P::Error> {
    let Some(first) = port.poll_byte() else {
        return Ok(false);
    };

    port.write_byte(first)?;
    while let Some(byte) = port.poll_byte() {
        port.write_byte(byte)?;
    }

    port.write_byte(b'\n')?;
    Ok(true)
}

/// Streams a formatted line straight to the port.
///
/// Capped at [`WRITE_CAPACITY`] bytes per call; the summary reports whether
/// the cap truncated the output.
pub fn write_formatted<S: ByteSink>(
    port: &mut S,
    fmt: &str,
    args: &[FormatArg<'_>],
) -> Result<FormatSummary, FormatError<S::Error>> {
    format_to(port, WRITE_CAPACITY, fmt, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockPort {
        rx: VecDeque<u8>,
        tx: Vec<u8>,
    }

    impl MockPort {
        fn with_pending(bytes: &[u8]) -> Self {
            Self {
                rx: bytes.iter().copied().collect(),
                tx: Vec::new(),
            }
        }
    }

    impl ByteSink for MockPort {
        type Error = core::convert::Infallible;

        fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
            self.tx.push(byte);
            Ok(())
        }
    }

    impl SerialPort for MockPort {
        fn poll_byte(&mut self) -> Option<u8> {
            self.rx.pop_front()
        }
    }

    #[test]
    fn echo_with_empty_fifo_writes_nothing() {
        let mut port = MockPort::default();

        assert_eq!(echo(&mut port), Ok(false));
        assert!(port.tx.is_empty());
    }

    #[test]
    fn echo_mirrors_pending_bytes_and_appends_newline() {
        let mut port = MockPort::with_pending(b"hi!");

        assert_eq!(echo(&mut port), Ok(true));
        assert_eq!(port.tx, b"hi!\n");
        assert!(port.rx.is_empty());
    }

    #[test]
    fn write_formatted_streams_to_the_port() {
        let mut port = MockPort::default();
        let summary =
            write_formatted(&mut port, "LED: %s\n", &[FormatArg::Str("Red")]).unwrap();

        assert_eq!(port.tx, b"LED: Red\n");
        assert_eq!(summary.written, 9);
        assert!(!summary.truncated);
    }

    #[test]
    fn write_formatted_caps_output_per_call() {
        let mut port = MockPort::default();
        let long = "x".repeat(200);
        let summary = write_formatted(&mut port, "%s", &[FormatArg::Str(&long)]).unwrap();

        assert_eq!(summary.written, WRITE_CAPACITY);
        assert!(summary.truncated);
        assert_eq!(port.tx.len(), WRITE_CAPACITY);
    }
}
