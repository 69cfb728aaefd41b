//! Decorative palette
//!
//! Each pixel gets its own hue, evenly spread around the color wheel.
//! Not interactive: the highlight is ignored.

use super::Effect;
use crate::color::{PixelHsv, Rgb, hue_at};

#[derive(Debug, Clone)]
pub struct PaletteEffect {
    saturation: u8,
    value: u8,
}

impl PaletteEffect {
    pub const fn new(saturation: u8, value: u8) -> Self {
        Self { saturation, value }
    }
}

impl Effect for PaletteEffect {
    fn render(&mut self, _pixels: &mut [PixelHsv], _highlighted: usize, out: &mut [Rgb]) {
        let count = out.len();
        for (index, led) in out.iter_mut().enumerate() {
            *led = PixelHsv::new(hue_at(index, count), self.saturation, self.value).to_rgb();
        }
    }
}
