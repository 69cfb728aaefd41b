//! Highlight with a fading trail
//!
//! Every tick all pixels above the floor value lose `decay` steps of value,
//! then the highlighted pixel is set back to full value. Moving the
//! highlight leaves an afterglow that dies out over the following ticks.
//! Hue and saturation of the pixels are never touched.

use super::Effect;
use crate::{
    color::{PixelHsv, Rgb},
    math8::sub_floor8,
};

#[derive(Debug, Clone)]
pub struct FadingHighlightEffect {
    /// Value the trail fades down to
    floor: u8,
    /// Value of the highlighted pixel
    bright: u8,
    /// Value lost per tick
    decay: u8,
}

impl FadingHighlightEffect {
    pub const fn new(floor: u8, bright: u8, decay: u8) -> Self {
        Self {
            floor,
            bright,
            decay,
        }
    }

    /// Advance the fade by one tick
    pub fn fade(&self, pixels: &mut [PixelHsv], highlighted: usize) {
        for pixel in pixels.iter_mut() {
            pixel.val = sub_floor8(pixel.val, self.decay, self.floor);
        }
        if let Some(pixel) = pixels.get_mut(highlighted) {
            pixel.val = self.bright;
        }
    }
}

impl Effect for FadingHighlightEffect {
    const ANIMATED: bool = true;

    fn render(&mut self, pixels: &mut [PixelHsv], highlighted: usize, out: &mut [Rgb]) {
        self.fade(pixels, highlighted);
        for (led, pixel) in out.iter_mut().zip(pixels.iter()) {
            *led = pixel.to_rgb();
        }
    }
}
