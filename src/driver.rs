//! One-wire pixel bus driven through an SPI peripheral
//!
//! Every data bit of a pixel is sent as one full SPI byte: the pixel
//! hardware only sees the pulse width, so a long-high byte reads as `1` and
//! a short-high byte reads as `0`. Channels go out green, red, blue, each
//! most significant bit first.
//!
//! The bus has no framing besides line inactivity. A gap longer than one bit
//! window latches whatever has been shifted in so far, so the byte loop of a
//! frame runs inside a critical section.

use embedded_hal::{delay::DelayNs, spi::SpiBus};
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::{BLACK, Rgb},
};

/// SPI byte encoding a logical `1`
pub const BIT_ONE: u8 = 0b1111_1100;
/// SPI byte encoding a logical `0`
pub const BIT_ZERO: u8 = 0b1110_0000;

/// SPI bytes needed for one pixel (3 channels x 8 bits)
pub const BYTES_PER_PIXEL: usize = 24;

/// Idle time before blanking the ring
pub const RESET_GAP_US: u32 = 20;
/// Idle time after blanking the ring
pub const LATCH_GAP_US: u32 = 50;
/// Idle time after a frame so the ring shows it
pub const SHOW_GAP_US: u32 = 10;

/// Encode a single channel byte, MSB first
pub const fn encode_byte(value: u8) -> [u8; 8] {
    let mut out = [BIT_ZERO; 8];
    let mut i = 0;
    while i < 8 {
        if value & (0x80 >> i) != 0 {
            out[i] = BIT_ONE;
        }
        i += 1;
    }
    out
}

/// Encode a pixel into its wire pattern (G, R, B)
pub fn encode_pixel(pixel: Rgb) -> [u8; BYTES_PER_PIXEL] {
    let mut out = [0; BYTES_PER_PIXEL];
    for (chunk, channel) in out.chunks_exact_mut(8).zip([pixel.g, pixel.r, pixel.b]) {
        chunk.copy_from_slice(&encode_byte(channel));
    }
    out
}

/// Write encoded pixels to the bus and wait until the last byte is out
fn write_pixels<S, I>(spi: &mut S, pixels: I) -> Result<(), S::Error>
where
    S: SpiBus<u8>,
    I: IntoIterator<Item = Rgb>,
{
    for pixel in pixels {
        spi.write(&encode_pixel(pixel))?;
    }
    spi.flush()
}

/// Pixel ring driver
///
/// The SPI bus must already be configured by the platform (master mode,
/// clocked so that one byte spans one pixel bit window).
pub struct PixelBitstreamDriver<S, D> {
    spi: S,
    delay: D,
    count: usize,
}

impl<S: SpiBus<u8>, D: DelayNs> PixelBitstreamDriver<S, D> {
    pub const fn new(spi: S, delay: D) -> Self {
        Self {
            spi,
            delay,
            count: 0,
        }
    }

    /// Remember the ring length and switch every pixel off
    pub fn initialize(&mut self, count: usize) -> Result<(), S::Error> {
        self.count = count;
        self.blank()?;
        #[cfg(feature = "esp32-log")]
        println!("[PixelBitstreamDriver.initialize] blanked {} pixels", count);
        Ok(())
    }

    /// Send black to every pixel of the ring
    pub fn blank(&mut self) -> Result<(), S::Error> {
        let spi = &mut self.spi;
        let count = self.count;

        self.delay.delay_us(RESET_GAP_US);
        critical_section::with(|_| {
            write_pixels(spi, core::iter::repeat_n(BLACK, count))
        })?;
        self.delay.delay_us(LATCH_GAP_US);
        Ok(())
    }

    /// Send a frame and latch it
    ///
    /// Interrupts stay masked until the last byte has left the bus and are
    /// restored before the show delay, also when the bus reports an error.
    pub fn transmit(&mut self, frame: &[Rgb]) -> Result<(), S::Error> {
        self.transmit_iter(frame.iter().copied())
    }

    fn transmit_iter<I>(&mut self, pixels: I) -> Result<(), S::Error>
    where
        I: IntoIterator<Item = Rgb>,
    {
        let spi = &mut self.spi;
        critical_section::with(|_| write_pixels(spi, pixels))?;
        self.delay.delay_us(SHOW_GAP_US);
        Ok(())
    }

    /// Ring length given to [`Self::initialize`]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Give back the bus and the delay provider
    pub fn release(self) -> (S, D) {
        (self.spi, self.delay)
    }
}

impl<S: SpiBus<u8>, D: DelayNs> OutputDriver for PixelBitstreamDriver<S, D> {
    type Error = S::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.transmit(colors)
    }
}

impl<S: SpiBus<u8>, D: DelayNs> SmartLedsWrite for PixelBitstreamDriver<S, D> {
    type Error = S::Error;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.transmit_iter(iterator.into_iter().map(Into::into))
    }
}
