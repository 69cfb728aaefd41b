//! Rendering modes with compile-time known variants
//!
//! All modes are stored in an enum to avoid heap allocations.
//! Each mode implements the `Effect` trait.

mod fading;
mod palette;
mod selected;
mod single_highlight;

pub use fading::FadingHighlightEffect;
pub use palette::PaletteEffect;
pub use selected::SelectedHighlightEffect;
pub use single_highlight::{DEFAULT_THEMES, SingleHighlightEffect, Theme};

use crate::color::{PixelHsv, Rgb};

const MODE_NAME_SINGLE_HIGHLIGHT: &str = "single_highlight";
const MODE_NAME_PALETTE_FRAME: &str = "palette_frame";
const MODE_NAME_FADING_HIGHLIGHT: &str = "fading_highlight";
const MODE_NAME_SELECTED_HIGHLIGHT_ONLY: &str = "selected_highlight_only";

pub trait Effect {
    /// Sets if the output changes from tick to tick without any input
    ///
    /// Static effects are only rendered again when their inputs change.
    const ANIMATED: bool = false;

    /// Render a single frame
    ///
    /// `pixels` is the engine's HSV state, `highlighted` is always a valid
    /// index into it and `out` has the same length.
    fn render(&mut self, pixels: &mut [PixelHsv], highlighted: usize, out: &mut [Rgb]);
}

/// Known rendering modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeId {
    SingleHighlight,
    PaletteFrame,
    FadingHighlight,
    SelectedHighlightOnly,
}

impl ModeId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleHighlight => MODE_NAME_SINGLE_HIGHLIGHT,
            Self::PaletteFrame => MODE_NAME_PALETTE_FRAME,
            Self::FadingHighlight => MODE_NAME_FADING_HIGHLIGHT,
            Self::SelectedHighlightOnly => MODE_NAME_SELECTED_HIGHLIGHT_ONLY,
        }
    }
}

/// Active rendering mode - enum containing all possible modes
#[derive(Debug, Clone)]
pub enum EffectMode {
    /// One highlighted pixel over a background tint
    SingleHighlight(SingleHighlightEffect),
    /// Fixed color per pixel, ignores the highlight
    PaletteFrame(PaletteEffect),
    /// Highlight leaving a fading trail behind
    FadingHighlight(FadingHighlightEffect),
    /// Whole ring in the highlighted pixel's color
    SelectedHighlightOnly(SelectedHighlightEffect),
}

impl EffectMode {
    /// Returns if the mode changes its output on every tick
    pub const fn is_animated(&self) -> bool {
        match self {
            Self::SingleHighlight(_) => SingleHighlightEffect::ANIMATED,
            Self::PaletteFrame(_) => PaletteEffect::ANIMATED,
            Self::FadingHighlight(_) => FadingHighlightEffect::ANIMATED,
            Self::SelectedHighlightOnly(_) => SelectedHighlightEffect::ANIMATED,
        }
    }

    /// Render the current mode
    pub fn render(&mut self, pixels: &mut [PixelHsv], highlighted: usize, out: &mut [Rgb]) {
        match self {
            Self::SingleHighlight(effect) => effect.render(pixels, highlighted, out),
            Self::PaletteFrame(effect) => effect.render(pixels, highlighted, out),
            Self::FadingHighlight(effect) => effect.render(pixels, highlighted, out),
            Self::SelectedHighlightOnly(effect) => effect.render(pixels, highlighted, out),
        }
    }

    /// Get the mode ID for external observation
    pub const fn id(&self) -> ModeId {
        match self {
            Self::SingleHighlight(_) => ModeId::SingleHighlight,
            Self::PaletteFrame(_) => ModeId::PaletteFrame,
            Self::FadingHighlight(_) => ModeId::FadingHighlight,
            Self::SelectedHighlightOnly(_) => ModeId::SelectedHighlightOnly,
        }
    }
}
