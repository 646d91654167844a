//! Driver for a red/green status LED pair behind a single output register.
//!
//! The driver shadows the on/off state of both channels and mirrors every
//! change to the hardware through the [`LedRegister`] seam, so reads never
//! touch the register block.

/// Trait for abstracting the LED output register.
///
/// One call sets both channels; implementations pack the booleans into
/// their platform's register layout. Handle any hardware errors internally,
/// this method cannot fail.
pub trait LedRegister {
    /// Drives both LED channels.
    fn write(&mut self, red: bool, green: bool);
}

/// Shadowed state and control for the status LED pair.
pub struct StatusLeds<R: LedRegister> {
    hw: R,
    red_is_on: bool,
    green_is_on: bool,
}

impl<R: LedRegister> StatusLeds<R> {
    /// Creates the driver with both LEDs turned off.
    pub fn new(hw: R) -> Self {
        let mut leds = Self {
            hw,
            red_is_on: false,
            green_is_on: false,
        };
        leds.apply();
        leds
    }

    fn apply(&mut self) {
        self.hw.write(self.red_is_on, self.green_is_on);
    }

    /// Turns the red LED on.
    pub fn red_on(&mut self) {
        self.red_is_on = true;
        self.apply();
    }

    /// Turns the red LED off.
    pub fn red_off(&mut self) {
        self.red_is_on = false;
        self.apply();
    }

    /// Returns true if the red LED is on.
    pub fn is_red_on(&self) -> bool {
        self.red_is_on
    }

    /// Turns the green LED on.
    pub fn green_on(&mut self) {
        self.green_is_on = true;
        self.apply();
    }

    /// Turns the green LED off.
    pub fn green_off(&mut self) {
        self.green_is_on = false;
        self.apply();
    }

    /// Returns true if the green LED is on.
    pub fn is_green_on(&self) -> bool {
        self.green_is_on
    }

    /// Flips the pair, keeping the two LEDs complementary.
    ///
    /// Red toggles; green becomes red's inverse, so exactly one LED is lit
    /// after every toggle regardless of the starting state.
    pub fn toggle(&mut self) {
        self.red_is_on = !self.red_is_on;
        self.green_is_on = !self.red_is_on;
        self.apply();
    }
}
