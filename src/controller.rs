//! Tick sequencing and timing.
//!
//! One tick samples the encoder, dispatches its events, renders the engine
//! and writes the frame out. Pacing is portable: the caller sleeps for the
//! returned duration between ticks. The tick period doubles as the debounce
//! window of the encoder and button.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::dispatcher::InputDispatcher;
use crate::encoder::{EncoderInputs, QuadratureDecoder};
use crate::engine::{EffectEngine, EngineConfig};

/// Default tick period.
pub const TICK_DELAY: Duration = Duration::from_millis(2);

/// Error raised while running a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickError<I, O> {
    /// Reading the encoder failed
    Input(I),
    /// Writing the frame failed
    Output(O),
}

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether a frame was sent this tick.
    pub transmitted: bool,
}

/// Owns the whole input-to-output pipeline of the ring.
///
/// The output driver is expected to be initialized (ring blanked) already.
///
/// # Usage
///
/// ```ignore
/// driver.initialize(RING_SIZE)?;
/// let mut controller = Controller::<_, _, RING_SIZE>::new(pins, driver, EngineConfig::DEFAULT)?;
///
/// loop {
///     let result = controller.tick(Instant::now())?;
///     delay.delay_ms(result.sleep_duration.as_millis() as u32);
/// }
/// ```
pub struct Controller<E: EncoderInputs, O: OutputDriver, const N: usize> {
    inputs: E,
    output: O,
    decoder: QuadratureDecoder,
    engine: EffectEngine<N>,
    next_tick: Instant,
    tick_duration: Duration,
}

impl<E: EncoderInputs, O: OutputDriver, const N: usize> Controller<E, O, N> {
    /// Create a new controller.
    ///
    /// Reads the encoder once so the decoder starts from the current levels.
    /// Uses `TICK_DELAY` for tick timing.
    pub fn new(inputs: E, output: O, config: EngineConfig) -> Result<Self, E::Error> {
        Self::with_tick_duration(inputs, output, config, TICK_DELAY)
    }

    /// Create a new controller with custom tick duration.
    pub fn with_tick_duration(
        mut inputs: E,
        output: O,
        config: EngineConfig,
        tick_duration: Duration,
    ) -> Result<Self, E::Error> {
        let initial = inputs.read()?;
        Ok(Self {
            inputs,
            output,
            decoder: QuadratureDecoder::new(initial),
            engine: EffectEngine::new(config),
            next_tick: Instant::from_millis(0),
            tick_duration,
        })
    }

    /// Run one tick and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<TickResult, TickError<E::Error, O::Error>> {
        // Skip the backlog after a long stall instead of bursting ticks
        let max_drift = self.tick_duration.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift {
            self.next_tick = now;
        }

        let inputs = self.inputs.read().map_err(TickError::Input)?;
        let events = self.decoder.sample(inputs);
        InputDispatcher::dispatch_all(&mut self.engine, events);

        let written = self.engine.render().map(|frame| self.output.write(frame));
        let transmitted = match written {
            Some(Ok(())) => true,
            Some(Err(err)) => {
                // The ring may hold a partial frame, send it again next tick
                self.engine.invalidate();
                return Err(TickError::Output(err));
            }
            None => false,
        };

        self.next_tick += self.tick_duration;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            transmitted,
        })
    }

    pub fn decoder(&self) -> &QuadratureDecoder {
        &self.decoder
    }

    pub fn engine(&self) -> &EffectEngine<N> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EffectEngine<N> {
        &mut self.engine
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
