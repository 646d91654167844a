//! Polling driver for a down-counting hardware timer.
//!
//! Models a LiteX-style timer block: a counter loaded from `load` (one-shot)
//! or re-armed from `reload` (periodic) that counts down to zero while
//! enabled. [`TimerHw`] is the register seam to implement for your platform;
//! [`Timer`] provides arming, expiry polling, busy-wait delays and
//! wraparound-safe elapsed-time math on top of it.

/// Raw timer counter value.
pub type Ticks = u32;

/// Trait for abstracting the timer register block.
pub trait TimerHw {
    /// Enables or disables the counter.
    fn set_enabled(&mut self, enabled: bool);

    /// Writes the one-shot load register.
    fn write_load(&mut self, ticks: Ticks);

    /// Reads the one-shot load register.
    fn read_load(&self) -> Ticks;

    /// Writes the periodic reload register.
    fn write_reload(&mut self, ticks: Ticks);

    /// Reads the periodic reload register.
    fn read_reload(&self) -> Ticks;

    /// Latches the running counter and returns its current value.
    fn read_value(&mut self) -> Ticks;
}

/// Down-counting timer driver with millisecond conversion.
pub struct Timer<H: TimerHw> {
    hw: H,
    ticks_per_ms: Ticks,
}

impl<H: TimerHw> Timer<H> {
    /// Creates a driver for a timer clocked at `clock_hz`.
    pub fn new(hw: H, clock_hz: u32) -> Self {
        Self {
            hw,
            ticks_per_ms: clock_hz / 1000,
        }
    }

    /// Disables the counter and zeroes both duration registers.
    pub fn init(&mut self) {
        self.hw.set_enabled(false);
        self.hw.write_reload(0);
        self.hw.write_load(0);
    }

    /// Converts a millisecond duration to ticks.
    pub fn ms_to_ticks(&self, duration_ms: u32) -> Ticks {
        self.ticks_per_ms * duration_ms
    }

    /// Converts a tick duration to milliseconds.
    pub fn ticks_to_ms(&self, duration_ticks: Ticks) -> u32 {
        duration_ticks / self.ticks_per_ms
    }

    /// Returns the current counter value.
    pub fn now(&mut self) -> Ticks {
        self.hw.read_value()
    }

    /// Arms the timer to count down once from `duration_ticks`.
    pub fn start_one_shot_ticks(&mut self, duration_ticks: Ticks) {
        self.hw.set_enabled(false);
        self.hw.write_load(duration_ticks);
        self.hw.write_reload(0);
        self.hw.set_enabled(true);
    }

    /// Arms the timer to count down once from a millisecond duration.
    pub fn start_one_shot_ms(&mut self, duration_ms: u32) {
        self.start_one_shot_ticks(self.ms_to_ticks(duration_ms));
    }

    /// Arms the timer to count down repeatedly from `duration_ticks`.
    pub fn start_periodic_ticks(&mut self, duration_ticks: Ticks) {
        self.hw.set_enabled(false);
        self.hw.write_load(0);
        self.hw.write_reload(duration_ticks);
        self.hw.set_enabled(true);
    }

    /// Arms the timer to count down repeatedly from a millisecond duration.
    pub fn start_periodic_ms(&mut self, duration_ms: u32) {
        self.start_periodic_ticks(self.ms_to_ticks(duration_ms));
    }

    /// Returns true when the armed duration has elapsed.
    ///
    /// A timer that was never armed (both duration registers zero) reads as
    /// expired, so a poll loop fires immediately on its first pass.
    pub fn is_expired(&mut self) -> bool {
        if self.hw.read_reload() == 0 && self.hw.read_load() == 0 {
            return true;
        }
        self.hw.read_value() == 0
    }

    /// Busy-waits until the armed duration elapses.
    pub fn wait_until_expired(&mut self) {
        while !self.is_expired() {}
    }

    /// Arms a one-shot and busy-waits for it.
    pub fn delay_ticks(&mut self, duration_ticks: Ticks) {
        self.start_one_shot_ticks(duration_ticks);
        self.wait_until_expired();
    }

    /// Arms a one-shot and busy-waits for a millisecond duration.
    pub fn delay_ms(&mut self, duration_ms: u32) {
        self.start_one_shot_ms(duration_ms);
        self.wait_until_expired();
    }

    /// Ticks consumed since the timer was last armed.
    pub fn ticks_since_arm(&mut self) -> Ticks {
        let mut armed = self.hw.read_reload();
        if armed == 0 {
            armed = self.hw.read_load();
        }
        armed - self.hw.read_value()
    }

    /// Wraparound-safe tick count between two counter samples.
    ///
    /// When the counter wrapped between the samples, the reload period is
    /// used to account for the missing span.
    pub fn elapsed_ticks(&self, start: Ticks, end: Ticks) -> Ticks {
        if end >= start {
            end - start
        } else {
            (self.hw.read_reload() - start) + end
        }
    }

    /// Wraparound-safe millisecond count between two counter samples.
    pub fn elapsed_ms(&self, start: Ticks, end: Ticks) -> u32 {
        self.ticks_to_ms(self.elapsed_ticks(start, end))
    }
}
