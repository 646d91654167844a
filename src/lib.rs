#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`format_into` / `format_to`**: Bounded formatting into a buffer or straight to a sink
//! - **`FormatArg`**: Typed argument variants consumed in lockstep with the specifiers
//! - **`ArgList`**: Fixed-capacity builder for argument sequences
//! - **`FormatSummary`**: Actually-written byte count plus an explicit truncation flag
//! - **`ByteSink`**: Trait to implement for your byte output hardware
//! - **`Timer` / `TimerHw`**: Polling driver for a down-counting hardware timer
//! - **`StatusLeds` / `LedRegister`**: Red/green status LED pair behind one register
//! - **`SerialPort`**: `ByteSink` plus non-blocking receive, used by the echo loop
//! - **`Heartbeat`**: Timed LED toggle that reports through the format engine
//!
//! The engine holds no state across calls: the same format string and
//! arguments always produce the same bytes and the same summary.

pub mod args;
pub mod engine;
pub mod heartbeat;
pub mod led;
pub mod num;
pub mod sink;
pub mod time;
pub mod uart;

pub use args::{ArgError, ArgList, ArgReader, FormatArg};
pub use engine::{FormatError, FormatSummary, format_into, format_to};
pub use heartbeat::{DEFAULT_PERIOD_MS, Heartbeat};
pub use led::{LedRegister, StatusLeds};
pub use sink::{ByteSink, SliceSink};
pub use time::{Ticks, Timer, TimerHw};
pub use uart::{SerialPort, WRITE_CAPACITY, echo, write_formatted};
