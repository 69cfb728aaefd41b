//! Spotlight on the selected pixel
//!
//! Paints the whole ring with the hue and saturation of the highlighted
//! pixel at full value.

use super::Effect;
use crate::color::{PixelHsv, Rgb};

#[derive(Debug, Clone)]
pub struct SelectedHighlightEffect {
    bright: u8,
}

impl SelectedHighlightEffect {
    pub const fn new(bright: u8) -> Self {
        Self { bright }
    }
}

impl Effect for SelectedHighlightEffect {
    fn render(&mut self, pixels: &mut [PixelHsv], highlighted: usize, out: &mut [Rgb]) {
        let Some(selected) = pixels.get(highlighted) else {
            return;
        };
        out.fill(selected.with_val(self.bright).to_rgb());
    }
}
