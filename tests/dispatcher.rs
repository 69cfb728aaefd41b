mod tests {
    use ledring_encoder::{
        ButtonEdge, Direction, EffectEngine, InputDispatcher, InputEvent, ModeId,
    };

    #[test]
    fn test_rotation_moves_highlight() {
        let mut engine = EffectEngine::<24>::default();
        InputDispatcher::dispatch(&mut engine, InputEvent::Rotate(Direction::Up));
        assert_eq!(engine.highlighted(), 1);
        InputDispatcher::dispatch(&mut engine, InputEvent::Rotate(Direction::Down));
        InputDispatcher::dispatch(&mut engine, InputEvent::Rotate(Direction::Down));
        assert_eq!(engine.highlighted(), 23);
    }

    #[test]
    fn test_button_switches_mode() {
        let mut engine = EffectEngine::<24>::default();
        InputDispatcher::dispatch(&mut engine, InputEvent::Button(ButtonEdge::Pressed));
        assert_eq!(engine.mode(), ModeId::SelectedHighlightOnly);
        InputDispatcher::dispatch(&mut engine, InputEvent::Button(ButtonEdge::Released));
        assert_eq!(engine.mode(), ModeId::FadingHighlight);
    }

    #[test]
    fn test_dispatch_all_in_order() {
        let mut engine = EffectEngine::<24>::default();
        InputDispatcher::dispatch_all(
            &mut engine,
            [
                InputEvent::Rotate(Direction::Up),
                InputEvent::Button(ButtonEdge::Pressed),
                InputEvent::Rotate(Direction::Up),
            ],
        );
        assert_eq!(engine.highlighted(), 2);
        assert_eq!(engine.mode(), ModeId::SelectedHighlightOnly);
    }
}
