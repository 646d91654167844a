//! Bounded `printf`-style format engine.
//!
//! Provides [`format_to`] (streaming) and [`format_into`] (buffer) which
//! parse a format string, consume a typed argument sequence in lockstep,
//! and emit a capacity-checked byte stream. See the crate docs for the
//! specifier grammar.
//!
//! The scan is a single left-to-right pass with no backtracking and no
//! state held across calls. Once capacity is exhausted, remaining bytes
//! are dropped (arguments keep being consumed so the scan stays in sync)
//! and the summary reports truncation.

use crate::args::{ArgError, ArgReader, FormatArg};
use crate::num;
use crate::sink::{ByteSink, SliceSink};

/// Padding marker: `%*d` consumes the next argument as a field width.
const PADDING_MARKER: u8 = b'*';

/// Outcome of a completed format call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormatSummary {
    /// Number of bytes actually written to the sink.
    pub written: usize,

    /// True if at least one byte was dropped for lack of capacity.
    pub truncated: bool,
}

/// Errors that can occur during a format call.
///
/// Malformed specifiers are *not* errors; they degrade to literal
/// pass-through to keep the engine small and predictable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError<E> {
    /// The argument sequence ran out before the format string did.
    MissingArgument {
        /// Specifier that demanded the argument (`'*'` for a width).
        specifier: char,
    },

    /// The next argument was not the variant the specifier demands.
    ArgumentType {
        /// Specifier that demanded the argument (`'*'` for a width).
        specifier: char,
        /// Variant the specifier requires.
        expected: &'static str,
        /// Variant actually found.
        found: &'static str,
    },

    /// The sink failed. The scan is aborted; bytes written before the
    /// failure remain valid and are counted in `written`.
    Sink {
        /// The sink's error, propagated unchanged.
        source: E,
        /// Number of bytes written before the failure.
        written: usize,
    },
}

impl<E: core::fmt::Display> core::fmt::Display for FormatError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::MissingArgument { specifier } => {
                write!(f, "argument sequence exhausted at specifier '%{}'", specifier)
            }
            FormatError::ArgumentType {
                specifier,
                expected,
                found,
            } => {
                write!(
                    f,
                    "specifier '%{}' expects {} argument, found {}",
                    specifier, expected, found
                )
            }
            FormatError::Sink { source, written } => {
                write!(f, "sink error after {} bytes: {}", written, source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Display + core::fmt::Debug> std::error::Error for FormatError<E> {}

/// Capacity-checked writer wrapping the caller's sink for one format call.
struct Emitter<'s, S: ByteSink> {
    sink: &'s mut S,
    capacity: usize,
    written: usize,
    truncated: bool,
}

impl<S: ByteSink> Emitter<'_, S> {
    fn emit(&mut self, byte: u8) -> Result<(), FormatError<S::Error>> {
        if self.written >= self.capacity {
            self.truncated = true;
            return Ok(());
        }

        self.sink.write_byte(byte).map_err(|source| FormatError::Sink {
            source,
            written: self.written,
        })?;
        self.written += 1;
        Ok(())
    }

    fn emit_all(&mut self, bytes: &[u8]) -> Result<(), FormatError<S::Error>> {
        for byte in bytes {
            self.emit(*byte)?;
        }
        Ok(())
    }

    /// Left-pads with spaces up to `width` when it exceeds the content's
    /// natural length. Width is a minimum, never a maximum.
    fn pad(&mut self, width: i32, natural_len: usize) -> Result<(), FormatError<S::Error>> {
        if width <= 0 {
            return Ok(());
        }

        let mut shortfall = (width as usize).saturating_sub(natural_len);
        while shortfall > 0 {
            self.emit(b' ')?;
            shortfall -= 1;
        }
        Ok(())
    }

    fn finish(self) -> FormatSummary {
        FormatSummary {
            written: self.written,
            truncated: self.truncated,
        }
    }
}

fn arg_error<E>(error: ArgError, specifier: char) -> FormatError<E> {
    match error {
        ArgError::Exhausted => FormatError::MissingArgument { specifier },
        ArgError::Mismatch { expected, found } => FormatError::ArgumentType {
            specifier,
            expected,
            found,
        },
    }
}

/// Formats into a caller-owned buffer; capacity is the buffer length.
///
/// Returns the number of bytes actually written plus a truncation flag.
/// The slice sink cannot fail, so the only error conditions are argument
/// sequence mismatches.
pub fn format_into(
    buf: &mut [u8],
    fmt: &str,
    args: &[FormatArg<'_>],
) -> Result<FormatSummary, FormatError<core::convert::Infallible>> {
    let capacity = buf.len();
    let mut sink = SliceSink::new(buf);
    format_to(&mut sink, capacity, fmt, args)
}

/// Formats directly to a byte sink, emitting at most `capacity` bytes.
///
/// Single pass over `fmt`: non-`%` bytes copy verbatim; `%` introduces a
/// specifier, optionally prefixed by the `*` padding marker which consumes
/// the next argument as a field width (width ≤ 0 pads nothing). Unknown
/// specifiers are emitted literally. A trailing `%` emits nothing.
///
/// A sink failure aborts the scan early; everything written before the
/// failure is still in the sink and counted in the error.
pub fn format_to<S: ByteSink>(
    sink: &mut S,
    capacity: usize,
    fmt: &str,
    args: &[FormatArg<'_>],
) -> Result<FormatSummary, FormatError<S::Error>> {
    let mut reader = ArgReader::new(args);
    let mut out = Emitter {
        sink,
        capacity,
        written: 0,
        truncated: false,
    };

    let bytes = fmt.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.emit(bytes[i])?;
            i += 1;
            continue;
        }

        // Skip the '%'.
        i += 1;

        // Optional padding marker; the width comes from the argument
        // sequence, not the format string, and applies only to the
        // specifier immediately following.
        let mut width: i32 = 0;
        if i < bytes.len() && bytes[i] == PADDING_MARKER {
            width = reader.next_int().map_err(|e| arg_error(e, '*'))?;
            i += 1;
        }

        // Trailing '%' (or '%*' plus width) emits nothing.
        let Some(&specifier) = bytes.get(i) else {
            break;
        };
        i += 1;

        match specifier {
            b'%' => {
                out.pad(width, 1)?;
                out.emit(b'%')?;
            }
            b'c' => {
                let c = reader.next_char().map_err(|e| arg_error(e, 'c'))?;
                let mut encoded = [0u8; 4];
                let text = c.encode_utf8(&mut encoded);
                out.pad(width, text.len())?;
                out.emit_all(text.as_bytes())?;
            }
            b's' => {
                let s = reader.next_str().map_err(|e| arg_error(e, 's'))?;
                out.pad(width, s.len())?;
                out.emit_all(s.as_bytes())?;
            }
            b'd' => {
                let value = reader.next_int().map_err(|e| arg_error(e, 'd'))?;
                let mut scratch = [0u8; num::SCRATCH_LEN];
                let text = num::decimal(value, &mut scratch);
                out.pad(width, text.len())?;
                out.emit_all(text)?;
            }
            b'x' => {
                let value = reader.next_int().map_err(|e| arg_error(e, 'x'))?;
                let mut scratch = [0u8; num::SCRATCH_LEN];
                // Negative values convert by bit pattern, as unsigned.
                let text = num::hex(value as u32, &mut scratch);
                out.pad(width, text.len())?;
                out.emit_all(text)?;
            }
            // Unknown specifier: pass through literally. A pending width
            // argument has already been consumed and is discarded.
            other => {
                out.emit(other)?;
            }
        }
    }

    Ok(out.finish())
}
