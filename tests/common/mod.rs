//! Shared test infrastructure for microfmt integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use std::collections::VecDeque;
use std::vec::Vec;

use microfmt::{ByteSink, LedRegister, SerialPort, Ticks, TimerHw};

// ============================================================================
// Mock Timer Hardware
// ============================================================================

/// Register state for the mock timer, shared with the test body.
///
/// Enabling the counter latches it from `load`, or from `reload` when `load`
/// is zero. Tests drive the countdown by setting `value` directly.
#[derive(Default)]
pub struct TimerState {
    pub enabled: Cell<bool>,
    pub load: Cell<Ticks>,
    pub reload: Cell<Ticks>,
    pub value: Cell<Ticks>,
}

impl TimerState {
    /// Simulates the counter reaching zero.
    pub fn expire(&self) {
        self.value.set(0);
    }
}

/// Register-level mock handle passed into the driver.
pub struct MockTimerHw<'a>(pub &'a TimerState);

impl TimerHw for MockTimerHw<'_> {
    fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.0.enabled.get() {
            let initial = if self.0.load.get() != 0 {
                self.0.load.get()
            } else {
                self.0.reload.get()
            };
            self.0.value.set(initial);
        }
        self.0.enabled.set(enabled);
    }

    fn write_load(&mut self, ticks: Ticks) {
        self.0.load.set(ticks);
    }

    fn read_load(&self) -> Ticks {
        self.0.load.get()
    }

    fn write_reload(&mut self, ticks: Ticks) {
        self.0.reload.set(ticks);
    }

    fn read_reload(&self) -> Ticks {
        self.0.reload.get()
    }

    fn read_value(&mut self) -> Ticks {
        self.0.value.get()
    }
}

// ============================================================================
// Mock LED Register
// ============================================================================

/// LED register mock that ignores writes (state is queried via the driver).
pub struct NullLedRegister;

impl LedRegister for NullLedRegister {
    fn write(&mut self, _red: bool, _green: bool) {}
}

// ============================================================================
// Mock Serial Port
// ============================================================================

/// Serial port mock with a scripted receive FIFO and a recorded transcript.
#[derive(Default)]
pub struct MockPort {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
}

impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues bytes as if they had arrived on the wire.
    pub fn receive(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
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

// ============================================================================
// Constants
// ============================================================================

/// Clock frequency used by all integration tests (1 MHz -> 1000 ticks/ms).
pub const CLOCK_HZ: u32 = 1_000_000;
