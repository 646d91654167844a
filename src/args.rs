//! Typed argument sequences for the format engine.
//!
//! The engine consumes arguments in lockstep with the specifiers it parses.
//! [`FormatArg`] is the closed set of argument variants, [`ArgList`] is a
//! fixed-capacity builder for assembling a sequence without allocation, and
//! [`ArgReader`] is the cursor the engine pulls arguments through.

use heapless::Vec;

/// A single typed argument for the format engine.
///
/// `Int` is `i32`, the native integer width of the target. `%x` reinterprets
/// its bit pattern as `u32` before converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg<'a> {
    /// Argument for `%c`.
    Char(char),

    /// Argument for `%s`.
    Str(&'a str),

    /// Argument for `%d`, `%x`, and the `*` width marker.
    Int(i32),
}

impl FormatArg<'_> {
    /// Returns a short name for this argument's variant.
    pub fn kind(&self) -> &'static str {
        match self {
            FormatArg::Char(_) => "char",
            FormatArg::Str(_) => "string",
            FormatArg::Int(_) => "integer",
        }
    }
}

/// Errors raised when pulling the next argument from a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgError {
    /// The sequence ran out before the format string did.
    Exhausted,

    /// The next argument was not the variant the specifier demands.
    Mismatch {
        /// Variant the specifier requires.
        expected: &'static str,
        /// Variant actually found.
        found: &'static str,
    },
}

impl core::fmt::Display for ArgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArgError::Exhausted => {
                write!(f, "argument sequence exhausted")
            }
            ArgError::Mismatch { expected, found } => {
                write!(f, "expected {} argument, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArgError {}

/// Cursor over an argument sequence, consuming one argument per specifier.
#[derive(Debug)]
pub struct ArgReader<'s, 'a> {
    args: &'s [FormatArg<'a>],
    next: usize,
}

impl<'s, 'a> ArgReader<'s, 'a> {
    /// Creates a reader positioned at the first argument.
    pub fn new(args: &'s [FormatArg<'a>]) -> Self {
        Self { args, next: 0 }
    }

    /// Returns the number of arguments not yet consumed.
    pub fn remaining(&self) -> usize {
        self.args.len() - self.next
    }

    fn next_arg(&mut self) -> Result<FormatArg<'a>, ArgError> {
        let arg = self.args.get(self.next).copied().ok_or(ArgError::Exhausted)?;
        self.next += 1;
        Ok(arg)
    }

    /// Consumes the next argument as an integer.
    pub fn next_int(&mut self) -> Result<i32, ArgError> {
        match self.next_arg()? {
            FormatArg::Int(value) => Ok(value),
            other => Err(ArgError::Mismatch {
                expected: "integer",
                found: other.kind(),
            }),
        }
    }

    /// Consumes the next argument as a character.
    pub fn next_char(&mut self) -> Result<char, ArgError> {
        match self.next_arg()? {
            FormatArg::Char(value) => Ok(value),
            other => Err(ArgError::Mismatch {
                expected: "char",
                found: other.kind(),
            }),
        }
    }

    /// Consumes the next argument as a string reference.
    pub fn next_str(&mut self) -> Result<&'a str, ArgError> {
        match self.next_arg()? {
            FormatArg::Str(value) => Ok(value),
            other => Err(ArgError::Mismatch {
                expected: "string",
                found: other.kind(),
            }),
        }
    }
}

/// Fixed-capacity builder for argument sequences.
///
/// Convenience over writing `[FormatArg; N]` literals by hand, useful when a
/// sequence is assembled across several call sites.
///
/// # Type Parameters
/// * `N` - Maximum number of arguments the list can hold
#[derive(Debug, Clone)]
pub struct ArgList<'a, const N: usize> {
    items: Vec<FormatArg<'a>, N>,
}

impl<'a, const N: usize> ArgList<'a, N> {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an integer argument.
    ///
    /// # Panics
    /// Panics if the list capacity is exceeded.
    pub fn int(mut self, value: i32) -> Self {
        self.push(FormatArg::Int(value));
        self
    }

    /// Appends a character argument.
    ///
    /// # Panics
    /// Panics if the list capacity is exceeded.
    pub fn chr(mut self, value: char) -> Self {
        self.push(FormatArg::Char(value));
        self
    }

    /// Appends a string argument.
    ///
    /// # Panics
    /// Panics if the list capacity is exceeded.
    pub fn str(mut self, value: &'a str) -> Self {
        self.push(FormatArg::Str(value));
        self
    }

    fn push(&mut self, arg: FormatArg<'a>) {
        if self.items.push(arg).is_err() {
            panic!("argument list capacity exceeded");
        }
    }

    /// Returns the arguments as a slice for the engine.
    pub fn as_slice(&self) -> &[FormatArg<'a>] {
        &self.items
    }

    /// Returns the number of arguments in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no arguments.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, const N: usize> Default for ArgList<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_consumes_arguments_in_order() {
        let args = [
            FormatArg::Int(7),
            FormatArg::Str("hi"),
            FormatArg::Char('x'),
        ];
        let mut reader = ArgReader::new(&args);

        assert_eq!(reader.remaining(), 3);
        assert_eq!(reader.next_int(), Ok(7));
        assert_eq!(reader.next_str(), Ok("hi"));
        assert_eq!(reader.next_char(), Ok('x'));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn reader_reports_exhaustion() {
        let mut reader = ArgReader::new(&[]);
        assert_eq!(reader.next_int(), Err(ArgError::Exhausted));
    }

    #[test]
    fn reader_reports_variant_mismatch() {
        let args = [FormatArg::Str("oops")];
        let mut reader = ArgReader::new(&args);

        assert_eq!(
            reader.next_int(),
            Err(ArgError::Mismatch {
                expected: "integer",
                found: "string",
            })
        );
    }

    #[test]
    fn mismatch_consumes_the_offending_argument() {
        let args = [FormatArg::Str("oops"), FormatArg::Int(1)];
        let mut reader = ArgReader::new(&args);

        assert!(reader.next_int().is_err());
        assert_eq!(reader.next_int(), Ok(1));
    }

    #[test]
    fn list_builder_collects_arguments() {
        let args = ArgList::<4>::new().int(5).str("ab").chr('!');

        assert_eq!(args.len(), 3);
        assert_eq!(
            args.as_slice(),
            &[
                FormatArg::Int(5),
                FormatArg::Str("ab"),
                FormatArg::Char('!'),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "argument list capacity exceeded")]
    fn list_builder_panics_past_capacity() {
        let _ = ArgList::<1>::new().int(1).int(2);
    }
}
