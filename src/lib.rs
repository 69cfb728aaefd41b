#![no_std]

pub mod color;
pub mod controller;
pub mod dispatcher;
pub mod driver;
pub mod effect;
pub mod encoder;
pub mod engine;
pub mod math8;

pub use controller::{Controller, TICK_DELAY, TickError, TickResult};
pub use dispatcher::InputDispatcher;
pub use driver::PixelBitstreamDriver;
pub use effect::{EffectMode, ModeId, Theme};
pub use encoder::{
    ButtonEdge, Direction, EncoderInputs, EncoderPins, EncoderSample, InputEvent,
    QuadratureDecoder, RawInputs,
};
pub use engine::{ButtonAction, EffectEngine, EngineConfig, EngineState};

pub use color::{PixelHsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Number of pixels on the ring
pub const RING_SIZE: usize = 24;

/// Abstract frame output trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    type Error;

    /// Write colors to the ring, first pixel first
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
