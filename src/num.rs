//! Stack-only integer to text conversion.
//!
//! Both functions fill the caller's scratch buffer from the end and return
//! the formatted subslice. No heap, no `core::fmt` machinery.

/// Scratch buffer length for one conversion.
///
/// Sized for the widest `i32` rendering, `-2147483648` (11 bytes), with one
/// byte of slack.
pub const SCRATCH_LEN: usize = 12;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Formats a signed integer as decimal text.
///
/// Negative values are prefixed with `'-'`. `i32::MIN` is handled without
/// overflow via `unsigned_abs`.
pub fn decimal(value: i32, buf: &mut [u8; SCRATCH_LEN]) -> &[u8] {
    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();

    let mut pos = SCRATCH_LEN;
    loop {
        pos -= 1;
        buf[pos] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    if negative {
        pos -= 1;
        buf[pos] = b'-';
    }

    &buf[pos..]
}

/// Formats an unsigned integer as lowercase hexadecimal text.
///
/// No `0x` prefix; zero formats as `"0"`.
pub fn hex(value: u32, buf: &mut [u8; SCRATCH_LEN]) -> &[u8] {
    let mut remainder = value;

    let mut pos = SCRATCH_LEN;
    loop {
        pos -= 1;
        buf[pos] = HEX_DIGITS[(remainder & 0xf) as usize];
        remainder >>= 4;
        if remainder == 0 {
            break;
        }
    }

    &buf[pos..]
}
