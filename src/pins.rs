//! GPIO output adapter built on `embedded-hal` output pins.

use crate::handler::LedOutput;
use embedded_hal::digital::{OutputPin, PinState};

/// Drives one GPIO pin per LED, bit i of the frame mapped to `pins[i]`.
///
/// With `inverted` set a lit LED drives its pin low, for LEDs wired between
/// the supply and the pin.
pub struct IndividualPins<P: OutputPin, const N: usize> {
    pins: [P; N],
    inverted: bool,
}

impl<P: OutputPin, const N: usize> IndividualPins<P, N> {
    const FITS_FRAME: () = assert!(N >= 1 && N <= 8, "a frame drives between 1 and 8 pins");

    /// Takes ownership of the pins and turns every LED off.
    pub fn new(pins: [P; N], inverted: bool) -> Self {
        let () = Self::FITS_FRAME;
        let mut output = Self { pins, inverted };
        output.write_leds(0);
        output
    }

    /// Returns true if a lit LED drives its pin low.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Returns the pins, in bit order.
    pub fn pins(&self) -> &[P; N] {
        &self.pins
    }

    /// Releases the pins.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> LedOutput for IndividualPins<P, N> {
    fn write_leds(&mut self, leds: u8) {
        for (index, pin) in self.pins.iter_mut().enumerate() {
            let lit = leds & (1 << index) != 0;
            // GPIO writes are best effort, there is nothing to report a failure to
            let _ = pin.set_state(PinState::from(lit != self.inverted));
        }
    }
}
