//! Kernel lifecycle state machine.
//!
//! The kernel moves through three states, and never backwards:
//!
//! ```text
//! Uninitialized --[init]--> Ready --[shutdown]--> Released
//!       |                                            ^
//!       +-----------------[shutdown]-----------------+
//! ```
//!
//! The engine and the router scratch only exist in `Ready`, so the type system
//! rules out touching a released engine. A failed `init` leaves the state in
//! `Uninitialized`.

use crate::config::{ImpulseResource, KernelConfig};
use crate::engine::ConvolutionEngine;
use crate::error::{KernelError, KernelResult};
use crate::router::RouterScratch;

/// Lifecycle states, held behind the kernel's guard.
pub(crate) enum KernelState<E: ConvolutionEngine> {
    /// Constructed, no engine yet.
    Uninitialized,

    /// Engine built and render scratch allocated.
    Ready {
        engine: E,
        config: KernelConfig,
        scratch: RouterScratch,
    },

    /// Engine released by teardown. Terminal.
    Released,
}

impl<E: ConvolutionEngine> KernelState<E> {
    /// Check if in ready state.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Check if the engine has been released.
    pub fn is_released(&self) -> bool {
        matches!(self, Self::Released)
    }

    /// Get the configuration (only when ready).
    pub fn config(&self) -> Option<KernelConfig> {
        match self {
            Self::Ready { config, .. } => Some(*config),
            _ => None,
        }
    }

    /// Get mutable reference to the engine (only when ready).
    pub fn engine_mut(&mut self) -> Option<&mut E> {
        match self {
            Self::Ready { engine, .. } => Some(engine),
            _ => None,
        }
    }

    /// Transition from Uninitialized to Ready.
    ///
    /// Builds the engine with the clamped input channel count and allocates the
    /// router scratch. Channel counts are clamped, never rejected.
    pub fn init(&mut self, impulse: &ImpulseResource, config: KernelConfig) -> KernelResult<()> {
        match self {
            Self::Uninitialized => {}
            Self::Ready { .. } => {
                return Err(KernelError::InvalidState(
                    "engine already initialized".to_string(),
                ))
            }
            Self::Released => {
                return Err(KernelError::InvalidState(
                    "kernel has been shut down".to_string(),
                ))
            }
        }

        config.validate()?;

        let engine_inputs = config.engine_input_channels();
        if engine_inputs < config.input_channels {
            log::debug!(
                "Clamping {} host input channels to {} engine inputs",
                config.input_channels,
                engine_inputs
            );
        }

        let engine = E::load(impulse, config.sample_rate, engine_inputs)?;
        let scratch = RouterScratch::allocate(&config);

        log::debug!(
            "Kernel ready: {} in / {} out at {} Hz, impulse {}, max {} frames",
            config.input_channels,
            config.output_channels,
            config.sample_rate,
            impulse,
            config.max_frames
        );

        *self = Self::Ready {
            engine,
            config,
            scratch,
        };
        Ok(())
    }

    /// Transition to Released, dropping the engine.
    ///
    /// Returns true if an engine was released by this call.
    pub fn release(&mut self) -> bool {
        let was_ready = self.is_ready();
        // Dropping the old state drops the engine.
        *self = Self::Released;
        was_ready
    }
}
