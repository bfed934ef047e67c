//! GPIO-backed LED sink
//!
//! The pin array is the wiring table: LED `i` is driven by `pins[i]`. It is
//! built once at startup and never changes.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::LedSink;

/// Pin level that lights a LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// LED lights when the pin is high
    #[default]
    ActiveHigh,
    /// LED lights when the pin is low
    ActiveLow,
}

/// One output pin per LED
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
    polarity: Polarity,
}

impl<P, const N: usize> PinBank<P, N>
where
    P: OutputPin<Error = Infallible>,
{
    pub const fn new(pins: [P; N], polarity: Polarity) -> Self {
        Self { pins, polarity }
    }

    /// Release the pins
    pub fn free(self) -> [P; N] {
        self.pins
    }

    fn drive(&mut self, led: usize, lit: bool) {
        let Some(pin) = self.pins.get_mut(led) else {
            return;
        };
        let high = match self.polarity {
            Polarity::ActiveHigh => lit,
            Polarity::ActiveLow => !lit,
        };
        let Ok(()) = pin.set_state(high.into());
    }
}

impl<P, const N: usize> LedSink for PinBank<P, N>
where
    P: OutputPin<Error = Infallible>,
{
    fn init(&mut self) {
        for led in 0..N {
            self.drive(led, false);
        }
    }

    #[inline]
    fn energize(&mut self, led: usize) {
        self.drive(led, true);
    }

    #[inline]
    fn deenergize(&mut self, led: usize) {
        self.drive(led, false);
    }
}
