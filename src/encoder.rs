//! Rotary encoder decoding
//!
//! Two quadrature lines are sampled as a 2-bit gray code value every tick.
//! Only transitions into and out of the rest position (`3`) carry a
//! direction; all other changes are ignored. The encoder reports two such
//! transitions per mechanical detent, so a rotation event is emitted once
//! two steps in the same direction have accumulated.
//!
//! The push-button is edge detected against the last observed level. There
//! is no debounce besides the polling cadence.

use embedded_hal::digital::InputPin;
use heapless::Vec;

/// Raw steps per emitted rotation event
///
/// The step count goes back to zero after each event, so opposite steps
/// cancel out instead of completing a detent.
pub const STEPS_PER_DETENT: i8 = 2;

/// Maximum events produced by one sample (one rotation, one button edge)
pub const MAX_EVENTS_PER_SAMPLE: usize = 2;

/// Events produced by one call to [`QuadratureDecoder::sample`]
pub type Events = Vec<InputEvent, MAX_EVENTS_PER_SAMPLE>;

/// Two quadrature lines packed as `0bBA`, logical high = electrically low
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderSample(u8);

impl EncoderSample {
    /// Rest position of the encoder between detents
    pub const REST: Self = Self(0b11);

    /// Create a sample from a raw value, bits above the lowest two are dropped
    pub const fn new(raw: u8) -> Self {
        Self(raw & 0b11)
    }

    /// Create a sample from the two logical line levels
    #[allow(clippy::cast_lossless)]
    pub const fn from_lines(a: bool, b: bool) -> Self {
        Self((a as u8) | ((b as u8) << 1))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Levels read from the encoder in one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub rotation: EncoderSample,
    /// `true` while the button is held
    pub button: bool,
}

impl RawInputs {
    pub const fn new(rotation: EncoderSample, button: bool) -> Self {
        Self { rotation, button }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Clockwise, towards higher pixel indices
    Up,
    /// Counter-clockwise, towards lower pixel indices
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

/// Event produced by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Rotate(Direction),
    Button(ButtonEdge),
}

/// Signed step for a change between two samples
///
/// Pairs outside the transition table (including unreachable ones) give `0`.
pub const fn transition_step(was: EncoderSample, is: EncoderSample) -> i8 {
    match (was.0, is.0) {
        (3, 2) | (1, 3) => -1,
        (3, 1) | (2, 3) => 1,
        _ => 0,
    }
}

/// Decoder state, mutated only by [`QuadratureDecoder::sample`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderState {
    pub was: EncoderSample,
    pub is: EncoderSample,
    /// Steps accumulated towards the next rotation event
    pub rotation: i8,
    pub button_now: bool,
    pub button_last: bool,
}

/// Quadrature and button decoder
#[derive(Debug, Clone, Default)]
pub struct QuadratureDecoder {
    state: EncoderState,
}

impl QuadratureDecoder {
    /// Create a decoder settled on the current input levels
    ///
    /// Starting from the real levels keeps the first sample from producing a
    /// spurious step or button edge.
    pub const fn new(initial: RawInputs) -> Self {
        Self {
            state: EncoderState {
                was: initial.rotation,
                is: initial.rotation,
                rotation: 0,
                button_now: initial.button,
                button_last: initial.button,
            },
        }
    }

    pub const fn state(&self) -> &EncoderState {
        &self.state
    }

    /// Feed one sample and collect the resulting events
    pub fn sample(&mut self, inputs: RawInputs) -> Events {
        let mut events = Events::new();

        if let Some(direction) = self.update_rotation(inputs.rotation) {
            // Capacity covers one event of each kind.
            events.push(InputEvent::Rotate(direction)).ok();
        }
        if let Some(edge) = self.update_button(inputs.button) {
            events.push(InputEvent::Button(edge)).ok();
        }

        events
    }

    fn update_rotation(&mut self, sample: EncoderSample) -> Option<Direction> {
        let state = &mut self.state;
        state.is = sample;
        if state.is == state.was {
            return None;
        }

        let step = transition_step(state.was, state.is);
        state.was = state.is;
        if step == 0 {
            return None;
        }

        state.rotation += step;
        if state.rotation >= STEPS_PER_DETENT {
            state.rotation = 0;
            Some(Direction::Up)
        } else if state.rotation <= -STEPS_PER_DETENT {
            state.rotation = 0;
            Some(Direction::Down)
        } else {
            None
        }
    }

    fn update_button(&mut self, pressed: bool) -> Option<ButtonEdge> {
        let state = &mut self.state;
        state.button_now = pressed;
        if state.button_now == state.button_last {
            return None;
        }

        state.button_last = state.button_now;
        Some(if pressed {
            ButtonEdge::Pressed
        } else {
            ButtonEdge::Released
        })
    }
}

/// Source of encoder levels, sampled once per tick
pub trait EncoderInputs {
    type Error;

    fn read(&mut self) -> Result<RawInputs, Self::Error>;
}

/// Encoder wired to three GPIO inputs with pull-ups
///
/// All lines are active low: a line pulled to ground reads as logical `1`.
pub struct EncoderPins<P> {
    a: P,
    b: P,
    button: P,
}

impl<P: InputPin> EncoderPins<P> {
    pub const fn new(a: P, b: P, button: P) -> Self {
        Self { a, b, button }
    }

    pub fn release(self) -> (P, P, P) {
        (self.a, self.b, self.button)
    }
}

impl<P: InputPin> EncoderInputs for EncoderPins<P> {
    type Error = P::Error;

    fn read(&mut self) -> Result<RawInputs, Self::Error> {
        let a = self.a.is_low()?;
        let b = self.b.is_low()?;
        let button = self.button.is_low()?;
        Ok(RawInputs::new(EncoderSample::from_lines(a, b), button))
    }
}
