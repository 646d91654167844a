//! Timed LED toggle with a formatted status report.
//!
//! Implements the firmware main loop's LED half: poll the timer, toggle the
//! status pair when it expires, report which LED is now lit through the
//! format engine, and re-arm the timer for the next period.

use crate::args::FormatArg;
use crate::engine::{FormatError, FormatSummary};
use crate::led::{LedRegister, StatusLeds};
use crate::sink::ByteSink;
use crate::time::{Timer, TimerHw};
use crate::uart::write_formatted;

/// Default toggle period.
pub const DEFAULT_PERIOD_MS: u32 = 250;

/// Periodic LED toggle service.
///
/// Owns the timer and the LED pair; the report sink is passed per call so
/// the same UART can interleave other traffic (e.g. the echo loop).
pub struct Heartbeat<H: TimerHw, R: LedRegister> {
    timer: Timer<H>,
    leds: StatusLeds<R>,
    period_ms: u32,
}

impl<H: TimerHw, R: LedRegister> Heartbeat<H, R> {
    /// Creates the service with the default period.
    ///
    /// The timer is initialized but left un-armed, so the first
    /// [`service`](Self::service) call fires immediately.
    pub fn new(timer: Timer<H>, leds: StatusLeds<R>) -> Self {
        Self::with_period(timer, leds, DEFAULT_PERIOD_MS)
    }

    /// Creates the service with a custom toggle period.
    pub fn with_period(mut timer: Timer<H>, leds: StatusLeds<R>, period_ms: u32) -> Self {
        timer.init();
        Self {
            timer,
            leds,
            period_ms,
        }
    }

    /// Polls the timer and toggles the LEDs when the period has elapsed.
    ///
    /// On expiry: toggles the pair, writes `"LED: Red\n"` or `"LED: Green\n"`
    /// to the sink, and re-arms the timer one-shot for the next period.
    /// Returns `Ok(None)` when the timer has not expired yet.
    pub fn service<S: ByteSink>(
        &mut self,
        sink: &mut S,
    ) -> Result<Option<FormatSummary>, FormatError<S::Error>> {
        if !self.timer.is_expired() {
            return Ok(None);
        }

        self.leds.toggle();
        let lit = if self.leds.is_red_on() { "Red" } else { "Green" };
        let summary = write_formatted(sink, "LED: %s\n", &[FormatArg::Str(lit)])?;

        self.timer.start_one_shot_ms(self.period_ms);
        Ok(Some(summary))
    }

    /// Returns the configured toggle period in milliseconds.
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Returns the LED pair for state queries.
    pub fn leds(&self) -> &StatusLeds<R> {
        &self.leds
    }
}
