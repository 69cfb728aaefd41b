//! HSV representation with a 16-bit hue circle
//!
//! The hue circle is split into six sectors of 256 steps each, so the whole
//! circle is `HUE_MAX` steps wide. Conversion to RGB is piecewise linear
//! within each sector.

use crate::{color::Rgb, math8::scale8};

/// Width of one hue sector (red->yellow, yellow->green, ...)
pub const HUE_SECTOR: u16 = 256;

/// Number of hue steps in the full circle. Valid hues are `0..HUE_MAX`.
pub const HUE_MAX: u16 = 6 * HUE_SECTOR;

/// Pixel color in HSV space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelHsv {
    /// Hue (`0..HUE_MAX`)
    pub hue: u16,
    /// Saturation (0-255)
    pub sat: u8,
    /// Value (0-255)
    pub val: u8,
}

impl PixelHsv {
    pub const fn new(hue: u16, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    /// Returns the same color with another value
    #[must_use]
    pub const fn with_val(self, val: u8) -> Self {
        Self { val, ..self }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv2rgb(self)
    }
}

impl From<PixelHsv> for Rgb {
    fn from(hsv: PixelHsv) -> Self {
        hsv2rgb(hsv)
    }
}

/// Convert HSV to RGB
///
/// Hues outside `0..HUE_MAX` wrap around the circle.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv2rgb(hsv: PixelHsv) -> Rgb {
    let PixelHsv { hue, sat, val } = hsv;
    if sat == 0 {
        return Rgb::new(val, val, val);
    }

    let hue = hue % HUE_MAX;
    let sector = hue / HUE_SECTOR;
    let frac = (hue % HUE_SECTOR) as u8;

    let low = scale8(val, 255 - sat);
    let falling = scale8(val, 255 - scale8(sat, frac));
    let rising = scale8(val, 255 - scale8(sat, 255 - frac));

    match sector {
        0 => Rgb::new(val, rising, low),
        1 => Rgb::new(falling, val, low),
        2 => Rgb::new(low, val, rising),
        3 => Rgb::new(low, falling, val),
        4 => Rgb::new(rising, low, val),
        _ => Rgb::new(val, low, falling),
    }
}

/// Hue of the `index`-th of `count` points spread evenly around the circle
#[allow(clippy::cast_possible_truncation)]
pub const fn hue_at(index: usize, count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    ((index % count) as u32 * HUE_MAX as u32 / count as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_boundaries_hit_primaries() {
        assert_eq!(hsv2rgb(PixelHsv::new(0, 255, 255)), Rgb::new(255, 0, 0));
        assert_eq!(hsv2rgb(PixelHsv::new(256, 255, 255)), Rgb::new(255, 255, 0));
        assert_eq!(hsv2rgb(PixelHsv::new(512, 255, 255)), Rgb::new(0, 255, 0));
        assert_eq!(hsv2rgb(PixelHsv::new(768, 255, 255)), Rgb::new(0, 255, 255));
        assert_eq!(hsv2rgb(PixelHsv::new(1024, 255, 255)), Rgb::new(0, 0, 255));
        assert_eq!(hsv2rgb(PixelHsv::new(1280, 255, 255)), Rgb::new(255, 0, 255));
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(
            hsv2rgb(PixelHsv::new(HUE_MAX, 255, 255)),
            hsv2rgb(PixelHsv::new(0, 255, 255))
        );
    }

    #[test]
    fn hue_at_spreads_evenly() {
        assert_eq!(hue_at(0, 24), 0);
        assert_eq!(hue_at(12, 24), HUE_MAX / 2);
        assert_eq!(hue_at(24, 24), 0);
        assert_eq!(hue_at(3, 0), 0);
    }
}
