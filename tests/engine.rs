mod tests {
    use ledring_encoder::{
        ButtonAction, Direction, EffectEngine, EffectMode, EngineConfig, ModeId, Rgb,
        color::{PixelHsv, hue_at},
        effect::DEFAULT_THEMES,
    };

    const N: usize = 8;

    fn engine_with(mode: ModeId) -> EffectEngine<N> {
        EffectEngine::new(EngineConfig {
            mode,
            ..EngineConfig::DEFAULT
        })
    }

    #[test]
    fn test_initial_state() {
        let engine = EffectEngine::<N>::default();
        let state = engine.state();
        let config = EngineConfig::DEFAULT;

        assert_eq!(state.highlighted, 0);
        assert_eq!(engine.mode(), ModeId::FadingHighlight);
        for (index, pixel) in state.frame_hsv.iter().enumerate() {
            assert_eq!(pixel.hue, hue_at(index, N));
            assert_eq!(pixel.sat, config.saturation);
        }
        assert_eq!(state.frame_hsv[0].val, config.bright_value);
        assert_eq!(state.frame_hsv[1].val, config.floor_value);
    }

    #[test]
    fn test_highlight_wraps_both_ways() {
        let mut engine = EffectEngine::<N>::default();
        engine.move_highlight(Direction::Down);
        assert_eq!(engine.highlighted(), N - 1);
        engine.move_highlight(Direction::Up);
        assert_eq!(engine.highlighted(), 0);

        for _ in 0..(3 * N + 5) {
            engine.move_highlight(Direction::Up);
            assert!(engine.highlighted() < N);
        }
        assert_eq!(engine.highlighted(), 5);

        engine.set_highlighted(N * 2 + 3);
        assert_eq!(engine.highlighted(), 3);
    }

    #[test]
    fn test_single_highlight_frame() {
        let mut engine = engine_with(ModeId::SingleHighlight);
        engine.set_highlighted(2);
        let theme = DEFAULT_THEMES[0];

        let frame = *engine.render().unwrap();
        for (index, led) in frame.iter().enumerate() {
            if index == 2 {
                assert_eq!(*led, theme.foreground);
            } else {
                assert_eq!(*led, theme.background);
            }
        }
    }

    #[test]
    fn test_palette_frame_ignores_highlight() {
        let mut engine = engine_with(ModeId::PaletteFrame);
        let first = *engine.render().unwrap();
        engine.move_highlight(Direction::Up);
        let second = *engine.render().unwrap();
        assert_eq!(first, second);

        for (i, a) in first.iter().enumerate() {
            for b in &first[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_fading_converges_to_floor() {
        let config = EngineConfig::DEFAULT;
        let mut engine = EffectEngine::<N>::default();
        engine.render();
        engine.move_highlight(Direction::Up);

        let mut previous = engine.state().frame_hsv[0].val;
        for _ in 0..64 {
            engine.render();
            let state = engine.state();
            let val = state.frame_hsv[0].val;
            assert!(val <= previous);
            assert!(val >= config.floor_value);
            assert_eq!(state.frame_hsv[1].val, config.bright_value);
            previous = val;
        }
        assert_eq!(previous, config.floor_value);
    }

    #[test]
    fn test_fading_keeps_hue_and_saturation() {
        let mut engine = EffectEngine::<N>::default();
        let before: Vec<(u16, u8)> = engine
            .state()
            .frame_hsv
            .iter()
            .map(|p| (p.hue, p.sat))
            .collect();
        for _ in 0..10 {
            engine.move_highlight(Direction::Down);
            engine.render();
        }
        let after: Vec<(u16, u8)> = engine
            .state()
            .frame_hsv
            .iter()
            .map(|p| (p.hue, p.sat))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_fading_output_matches_hsv_state() {
        let mut engine = EffectEngine::<N>::default();
        let frame = *engine.render().unwrap();
        for (led, pixel) in frame.iter().zip(engine.state().frame_hsv.iter()) {
            assert_eq!(*led, Rgb::from(*pixel));
        }
    }

    #[test]
    fn test_selected_fills_ring_with_highlight_color() {
        let config = EngineConfig::DEFAULT;
        let mut engine = engine_with(ModeId::SelectedHighlightOnly);
        engine.set_highlighted(3);

        let expected = PixelHsv::new(hue_at(3, N), config.saturation, config.bright_value).to_rgb();
        let frame = *engine.render().unwrap();
        assert!(frame.iter().all(|led| *led == expected));
        assert!(engine.render().is_none());
    }

    #[test]
    fn test_spotlight_button() {
        let mut engine = EffectEngine::<N>::default();
        engine.confirm();
        assert_eq!(engine.mode(), ModeId::SelectedHighlightOnly);
        engine.release();
        assert_eq!(engine.mode(), ModeId::FadingHighlight);
    }

    #[test]
    fn test_cycle_theme_button() {
        let mut engine = EffectEngine::<N>::new(EngineConfig {
            mode: ModeId::SingleHighlight,
            button_action: ButtonAction::CycleTheme,
            ..EngineConfig::DEFAULT
        });
        assert_eq!(engine.theme(), 0);
        engine.render();

        engine.confirm();
        assert_eq!(engine.theme(), 1);
        assert_eq!(engine.mode(), ModeId::SingleHighlight);
        let frame = *engine.render().unwrap();
        assert_eq!(frame[0], DEFAULT_THEMES[1].foreground);
        assert_eq!(frame[1], DEFAULT_THEMES[1].background);

        let EffectMode::SingleHighlight(effect) = &engine.state().mode else {
            panic!("single highlight expected");
        };
        assert_eq!(effect.theme(), DEFAULT_THEMES[1]);

        engine.release();
        assert_eq!(engine.theme(), 1);
        assert!(engine.render().is_none());

        engine.confirm();
        engine.confirm();
        assert_eq!(engine.theme(), 0);
    }

    #[test]
    fn test_empty_theme_list_renders_black() {
        let mut engine = EffectEngine::<N>::new(EngineConfig {
            mode: ModeId::SingleHighlight,
            themes: &[],
            ..EngineConfig::DEFAULT
        });
        engine.next_theme();
        assert_eq!(engine.theme(), 0);
        let frame = *engine.render().unwrap();
        assert!(frame.iter().all(|led| *led == Rgb::default()));
    }
}
