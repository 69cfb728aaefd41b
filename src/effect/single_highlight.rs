//! Single highlighted pixel
//!
//! Lights the highlighted pixel in the theme's foreground color and every
//! other pixel in its background color.

use super::Effect;
use crate::color::{PixelHsv, Rgb};

/// Background and foreground colors of [`SingleHighlightEffect`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Theme {
    pub const fn new(background: Rgb, foreground: Rgb) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// Blue, red and green tinted rings with a bright marker
pub const DEFAULT_THEMES: [Theme; 3] = [
    Theme::new(Rgb { r: 0, g: 0, b: 1 }, Rgb { r: 16, g: 0, b: 92 }),
    Theme::new(Rgb { r: 1, g: 0, b: 0 }, Rgb { r: 92, g: 0, b: 16 }),
    Theme::new(Rgb { r: 0, g: 1, b: 0 }, Rgb { r: 92, g: 0, b: 16 }),
];

#[derive(Debug, Clone)]
pub struct SingleHighlightEffect {
    theme: Theme,
}

impl SingleHighlightEffect {
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }
}

impl Effect for SingleHighlightEffect {
    fn render(&mut self, _pixels: &mut [PixelHsv], highlighted: usize, out: &mut [Rgb]) {
        for (index, led) in out.iter_mut().enumerate() {
            *led = if index == highlighted {
                self.theme.foreground
            } else {
                self.theme.background
            };
        }
    }
}
