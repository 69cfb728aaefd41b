//! Effect engine
//!
//! Owns the per-pixel HSV state, the highlighted index and the active
//! rendering mode, and turns them into RGB frames.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{PixelHsv, Rgb, hue_at};
use crate::effect::{
    DEFAULT_THEMES, EffectMode, FadingHighlightEffect, ModeId, PaletteEffect,
    SelectedHighlightEffect, SingleHighlightEffect, Theme,
};
use crate::encoder::Direction;

/// What a button press changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Hold to light the whole ring in the selected color, release to go
    /// back to the fading trail
    Spotlight,
    /// Every press switches the single highlight to the next theme
    CycleTheme,
}

/// Configuration for the effect engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Mode active after startup
    pub mode: ModeId,
    /// Saturation shared by all pixels
    pub saturation: u8,
    /// Value the fading trail settles at
    pub floor_value: u8,
    /// Value of the highlighted pixel
    pub bright_value: u8,
    /// Value lost per tick by fading pixels
    pub decay_step: u8,
    /// Value of the decorative palette
    pub palette_value: u8,
    /// Themes for the single highlight mode
    pub themes: &'static [Theme],
    pub button_action: ButtonAction,
}

impl EngineConfig {
    pub const DEFAULT: Self = Self {
        mode: ModeId::FadingHighlight,
        saturation: 255,
        floor_value: 8,
        bright_value: 255,
        decay_step: 8,
        palette_value: 64,
        themes: &DEFAULT_THEMES,
        button_action: ButtonAction::Spotlight,
    };
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// State rendered by the engine
#[derive(Debug, Clone)]
pub struct EngineState<const N: usize> {
    /// HSV color of every pixel, in ring order
    pub frame_hsv: [PixelHsv; N],
    /// Always in `0..N`
    pub highlighted: usize,
    pub mode: EffectMode,
}

/// Effect engine for a ring of `N` pixels
pub struct EffectEngine<const N: usize> {
    config: EngineConfig,
    state: EngineState<N>,
    frame_buffer: [Rgb; N],
    theme: usize,
    /// Set when a static mode has to be rendered again
    dirty: bool,
}

impl<const N: usize> EffectEngine<N> {
    /// Create the engine with hues spread once around the ring
    pub fn new(config: EngineConfig) -> Self {
        const { assert!(N > 0, "ring must have at least one pixel") };

        let mut frame_hsv = [PixelHsv::default(); N];
        for (index, pixel) in frame_hsv.iter_mut().enumerate() {
            *pixel = PixelHsv::new(hue_at(index, N), config.saturation, config.floor_value);
        }
        frame_hsv[0].val = config.bright_value;

        Self {
            state: EngineState {
                frame_hsv,
                highlighted: 0,
                mode: build_mode(&config, 0, config.mode),
            },
            frame_buffer: [Rgb::default(); N],
            theme: 0,
            dirty: true,
            config,
        }
    }

    pub const fn state(&self) -> &EngineState<N> {
        &self.state
    }

    pub const fn highlighted(&self) -> usize {
        self.state.highlighted
    }

    pub const fn mode(&self) -> ModeId {
        self.state.mode.id()
    }

    /// Index of the active single highlight theme
    pub const fn theme(&self) -> usize {
        self.theme
    }

    /// Move the highlight one pixel, wrapping around the ring
    pub fn move_highlight(&mut self, direction: Direction) {
        let next = match direction {
            Direction::Up => (self.state.highlighted + 1) % N,
            Direction::Down => (self.state.highlighted + N - 1) % N,
        };
        self.set_highlighted(next);
    }

    /// Highlight the pixel at `index` modulo the ring length
    pub fn set_highlighted(&mut self, index: usize) {
        let index = index % N;
        if index != self.state.highlighted {
            self.state.highlighted = index;
            self.dirty = true;
        }
    }

    /// Switch to another rendering mode
    pub fn set_mode(&mut self, id: ModeId) {
        if id == self.mode() {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[EffectEngine.set_mode] {} -> {}", self.mode().as_str(), id.as_str());
        self.state.mode = build_mode(&self.config, self.theme, id);
        self.dirty = true;
    }

    /// Switch single highlight to the next theme
    pub fn next_theme(&mut self) {
        let count = self.config.themes.len();
        if count == 0 {
            return;
        }
        self.theme = (self.theme + 1) % count;
        #[cfg(feature = "esp32-log")]
        println!("[EffectEngine.next_theme] theme {}", self.theme);
        if let EffectMode::SingleHighlight(_) = self.state.mode {
            self.state.mode = build_mode(&self.config, self.theme, ModeId::SingleHighlight);
        }
        self.dirty = true;
    }

    /// Handle the button going down
    pub fn confirm(&mut self) {
        match self.config.button_action {
            ButtonAction::Spotlight => self.set_mode(ModeId::SelectedHighlightOnly),
            ButtonAction::CycleTheme => {
                self.next_theme();
                self.set_mode(ModeId::SingleHighlight);
            }
        }
    }

    /// Handle the button going up
    pub fn release(&mut self) {
        match self.config.button_action {
            ButtonAction::Spotlight => self.set_mode(ModeId::FadingHighlight),
            ButtonAction::CycleTheme => {}
        }
    }

    /// Force the next [`Self::render`] to produce a frame
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Render one frame
    ///
    /// Returns `None` when the active mode is static and nothing it depends
    /// on changed since the previous frame.
    pub fn render(&mut self) -> Option<&[Rgb; N]> {
        if !self.dirty && !self.state.mode.is_animated() {
            return None;
        }
        self.dirty = false;

        let EngineState {
            frame_hsv,
            highlighted,
            mode,
        } = &mut self.state;
        mode.render(frame_hsv, *highlighted, &mut self.frame_buffer);

        Some(&self.frame_buffer)
    }
}

fn build_mode(config: &EngineConfig, theme: usize, id: ModeId) -> EffectMode {
    match id {
        ModeId::SingleHighlight => {
            let theme = config.themes.get(theme).copied().unwrap_or_default();
            EffectMode::SingleHighlight(SingleHighlightEffect::new(theme))
        }
        ModeId::PaletteFrame => EffectMode::PaletteFrame(PaletteEffect::new(
            config.saturation,
            config.palette_value,
        )),
        ModeId::FadingHighlight => EffectMode::FadingHighlight(FadingHighlightEffect::new(
            config.floor_value,
            config.bright_value,
            config.decay_step,
        )),
        ModeId::SelectedHighlightOnly => EffectMode::SelectedHighlightOnly(
            SelectedHighlightEffect::new(config.bright_value),
        ),
    }
}

impl<const N: usize> Default for EffectEngine<N> {
    fn default() -> Self {
        Self::new(EngineConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_mode_skips_unchanged_frames() {
        let mut engine = EffectEngine::<4>::new(EngineConfig {
            mode: ModeId::SingleHighlight,
            ..EngineConfig::DEFAULT
        });
        assert!(engine.render().is_some());
        assert!(engine.render().is_none());

        engine.set_highlighted(4);
        assert!(engine.render().is_none());

        engine.move_highlight(Direction::Up);
        assert!(engine.render().is_some());
    }

    #[test]
    fn fading_mode_renders_every_tick() {
        let mut engine = EffectEngine::<4>::default();
        assert!(engine.render().is_some());
        assert!(engine.render().is_some());
    }
}
