//! RGB status LED driver.
//!
//! A single APA102 ("DotStar") pixel clocked by two GPIOs. Frame:
//!
//! ```text
//! 0x00 ×4 │ 0xFF  B  G  R │ 0xFF ×4
//! start   │ pixel (BGR)   │ end
//! ```
//!
//! The pixel's 5-bit global current field is left at full scale and
//! brightness is applied by scaling the colour bytes, so a brightness
//! change never alters the hue.

use embedded_hal::digital::OutputPin;

use crate::app::indicator::Rgb;

const START_FRAME: [u8; 4] = [0x00; 4];
const END_FRAME: [u8; 4] = [0xFF; 4];
const PIXEL_HEADER: u8 = 0xE0 | 0x1F;

/// Scale one channel by `brightness` (0-255, 255 = unchanged).
pub fn scale(channel: u8, brightness: u8) -> u8 {
    ((u16::from(channel) * (u16::from(brightness) + 1)) >> 8) as u8
}

pub struct DotStar<P> {
    data: P,
    clock: P,
    current: (Rgb, u8),
}

impl<P: OutputPin> DotStar<P> {
    pub fn new(data: P, clock: P) -> Self {
        Self {
            data,
            clock,
            current: ((0, 0, 0), 0),
        }
    }

    /// Latch `colour` at `brightness` into the pixel.
    pub fn set_colour(&mut self, colour: Rgb, brightness: u8) -> Result<(), P::Error> {
        let (r, g, b) = colour;
        let pixel = [
            PIXEL_HEADER,
            scale(b, brightness),
            scale(g, brightness),
            scale(r, brightness),
        ];
        for byte in START_FRAME.iter().chain(&pixel).chain(&END_FRAME) {
            self.shift_out(*byte)?;
        }
        self.current = (colour, brightness);
        Ok(())
    }

    pub fn current(&self) -> (Rgb, u8) {
        self.current
    }

    /// SPI mode 0, MSB first.
    fn shift_out(&mut self, byte: u8) -> Result<(), P::Error> {
        for i in (0..8).rev() {
            if byte & (1 << i) != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            self.clock.set_high()?;
            self.clock.set_low()?;
        }
        Ok(())
    }
}
