//! Input dispatching
//!
//! Routes decoder events to engine state changes. Holds no state.

use crate::encoder::{ButtonEdge, InputEvent};
use crate::engine::EffectEngine;

/// Routes [`InputEvent`]s to an [`EffectEngine`]
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDispatcher;

impl InputDispatcher {
    /// Apply a single event
    pub fn dispatch<const N: usize>(engine: &mut EffectEngine<N>, event: InputEvent) {
        match event {
            InputEvent::Rotate(direction) => engine.move_highlight(direction),
            InputEvent::Button(ButtonEdge::Pressed) => engine.confirm(),
            InputEvent::Button(ButtonEdge::Released) => engine.release(),
        }
    }

    /// Apply events in the order they were produced
    pub fn dispatch_all<const N: usize, I>(engine: &mut EffectEngine<N>, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            Self::dispatch(engine, event);
        }
    }
}
