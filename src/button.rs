//! Button that requests the running effect to exit
//!
//! Edge detection stays with the platform: its pin-change interrupt calls
//! [`Button::on_pin_change`], which samples the pin and raises the signal on a
//! press.

use embedded_hal::digital::InputPin;

use crate::signal::ExitSignal;

/// How the button is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressedTo {
    /// Pin is pulled up and reads low while pressed
    #[default]
    Ground,
    /// Pin is pulled down and reads high while pressed
    Voltage,
}

/// Pin-change handler feeding an [`ExitSignal`]
pub struct Button<'a, P: InputPin> {
    pin: P,
    pressed_to: PressedTo,
    signal: &'a ExitSignal,
}

impl<'a, P: InputPin> Button<'a, P> {
    pub const fn new(pin: P, pressed_to: PressedTo, signal: &'a ExitSignal) -> Self {
        Self {
            pin,
            pressed_to,
            signal,
        }
    }

    /// Handle a pin-change notification
    ///
    /// Raises the signal when the pin reads as pressed, ignores release edges.
    /// Returns whether the edge was a press.
    pub fn on_pin_change(&mut self) -> Result<bool, P::Error> {
        let pressed = self.is_pressed()?;
        if pressed {
            self.signal.raise();
        }
        Ok(pressed)
    }

    /// Current pin state, interpreted through the wiring
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        match self.pressed_to {
            PressedTo::Ground => self.pin.is_low(),
            PressedTo::Voltage => self.pin.is_high(),
        }
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}
