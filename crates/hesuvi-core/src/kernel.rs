//! The DSP kernel: one processing entry point over the router, the bypass path
//! and the lifecycle guard.
//!
//! # Threading
//!
//! [`DspKernel`] is `Send + Sync` and every method takes `&self`, so one
//! instance is shared (typically through an `Arc`) between:
//!
//! - the **render thread**, which calls [`process`](DspKernel::process) at a
//!   fixed cadence and never concurrently with itself, and
//! - a **control thread**, which calls `init`, `reset`, the bypass and
//!   parameter accessors, and finally tears the kernel down.
//!
//! # Lifecycle Guard
//!
//! A single mutex holds the kernel state (engine, config, scratch). `process`
//! holds it for the whole render; teardown holds it while the engine is
//! released. The render thread only ever calls `try_lock`: in steady state the
//! guard is uncontended, and contention means a control operation (teardown,
//! `init`, `reset`) owns it. The render does not block on it: while the kernel
//! is still accepting renders it writes silence over the output window, during
//! teardown it is skipped.
//!
//! # Two-phase teardown
//!
//! ```text
//! host: stop rendering ──▶ drain()  ──▶ shutdown() / drop
//!                          │             │
//!                          │             └─ take guard, release engine
//!                          └─ refuse new renders, wait out the in-flight one
//! ```
//!
//! `drain` makes the quiesce step explicit so the host can run it off the
//! real-time path. `shutdown` drains first, so calling it alone is also safe;
//! `Drop` calls `shutdown`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use crate::buffer::BufferSet;
use crate::bypass;
use crate::config::{ImpulseResource, KernelConfig, DEFAULT_IMPULSE};
use crate::engine::ConvolutionEngine;
use crate::error::{KernelError, KernelResult};
use crate::lifecycle::KernelState;
use crate::router;
use crate::types::{ParameterAddress, ParameterValue};
use crate::vector;

/// What a render call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// Full path: engine output written to the host outputs.
    Processed,
    /// Bypass path: input copied to output.
    Bypassed,
    /// A control operation held the guard; the output window was zeroed.
    Silenced,
    /// Nothing written. The kernel was not ready, was being torn down, or the
    /// buffers did not cover the requested window.
    Skipped,
}

/// Headphone-virtualization render kernel.
///
/// # Example
///
/// ```ignore
/// let kernel = Arc::new(DspKernel::<MyEngine>::default());
/// kernel.init(KernelConfig::new(6, 2, 48_000.0))?;
///
/// // render thread
/// kernel.process(frames, 0, &inputs, &outputs);
///
/// // control thread, after the host stopped rendering
/// kernel.drain();
/// kernel.shutdown();
/// ```
pub struct DspKernel<E: ConvolutionEngine> {
    /// Impulse resource bound at construction.
    impulse: ImpulseResource,
    /// Lifecycle guard around engine, config and scratch.
    state: Mutex<KernelState<E>>,
    bypassed: AtomicBool,
    /// Cleared once by `drain`; renders are refused afterwards.
    accepting: AtomicBool,
    /// One-shot latch for the skipped-render warning.
    skip_logged: AtomicBool,
}

impl<E: ConvolutionEngine> DspKernel<E> {
    /// Create an uninitialized kernel bound to an impulse resource.
    pub fn new(impulse: ImpulseResource) -> Self {
        Self {
            impulse,
            state: Mutex::new(KernelState::Uninitialized),
            bypassed: AtomicBool::new(false),
            accepting: AtomicBool::new(true),
            skip_logged: AtomicBool::new(false),
        }
    }

    /// Impulse resource the engine is (or will be) loaded from.
    pub fn impulse(&self) -> ImpulseResource {
        self.impulse
    }

    // =========================================================================
    // Control path
    // =========================================================================

    /// Build the engine for the given layout.
    ///
    /// Called once, when the host allocates render resources. The input channel
    /// count handed to the engine is clamped to 8.
    ///
    /// # Errors
    ///
    /// - [`KernelError::InvalidConfiguration`] for a non-positive sample rate
    ///   or zero `max_frames`
    /// - [`KernelError::ResourceLoad`] if the engine cannot load the impulse
    /// - [`KernelError::InvalidState`] if already initialized or torn down
    pub fn init(&self, config: KernelConfig) -> KernelResult<()> {
        if !self.accepting.load(Ordering::Acquire) {
            return Err(KernelError::InvalidState(
                "kernel is shutting down".to_string(),
            ));
        }
        let mut state = self.lock_state();
        let result = state.init(&self.impulse, config);
        if let Err(e) = &result {
            log::error!("Kernel init failed: {}", e);
        }
        result
    }

    /// Returns true once `init` has succeeded and until teardown.
    pub fn is_initialized(&self) -> bool {
        self.lock_state().is_ready()
    }

    /// Configuration the kernel was initialized with.
    pub fn config(&self) -> Option<KernelConfig> {
        self.lock_state().config()
    }

    /// Clear the engine's filter history.
    ///
    /// No kernel-local state needs clearing. Does nothing before `init` or
    /// after teardown.
    pub fn reset(&self) {
        match self.lock_state().engine_mut() {
            Some(engine) => engine.reset(),
            None => log::debug!("reset ignored: engine not available"),
        }
    }

    /// Run a closure against the engine from the control thread.
    ///
    /// Holds the guard for the duration of the closure, so a render arriving
    /// meanwhile is skipped. Returns `None` if there is no engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut E) -> R) -> Option<R> {
        self.lock_state().engine_mut().map(f)
    }

    /// Returns true if the bypass path is active.
    #[inline]
    pub fn is_bypassed(&self) -> bool {
        self.bypassed.load(Ordering::Relaxed)
    }

    /// Enable or disable bypass. Takes effect on the next render.
    #[inline]
    pub fn set_bypass(&self, bypassed: bool) {
        self.bypassed.store(bypassed, Ordering::Relaxed);
    }

    /// Processing latency in seconds.
    ///
    /// Always zero: the engine's group delay is not reported at this layer.
    #[inline]
    pub fn latency(&self) -> f64 {
        0.0
    }

    /// The kernel exposes no parameters; always zero.
    #[inline]
    pub fn parameter(&self, _address: ParameterAddress) -> ParameterValue {
        0.0
    }

    /// The kernel exposes no parameters; ignored.
    #[inline]
    pub fn set_parameter(&self, _address: ParameterAddress, _value: ParameterValue) {}

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Stop accepting renders and wait for the in-flight one, if any.
    ///
    /// On return no render is running and none will start. One-way: a drained
    /// kernel cannot be resumed. Blocks, so call it off the real-time thread.
    pub fn drain(&self) {
        if self.accepting.swap(false, Ordering::AcqRel) {
            log::debug!("Draining kernel");
        }
        // Taking the guard once orders us after any render that already holds it.
        drop(self.lock_state());
    }

    /// Drain, then release the engine.
    ///
    /// Idempotent. After this returns the engine has been dropped and no render
    /// will observe it.
    pub fn shutdown(&self) {
        self.drain();
        if self.lock_state().release() {
            log::debug!("Convolution engine released");
        }
    }

    /// Returns true once `shutdown` has released the engine.
    pub fn is_shut_down(&self) -> bool {
        self.lock_state().is_released()
    }

    /// Blocking guard acquisition for the control path.
    ///
    /// A render that panicked while holding the guard poisons it; the state is
    /// still structurally valid, so teardown recovers it rather than leak the
    /// engine.
    fn lock_state(&self) -> MutexGuard<'_, KernelState<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Render path
    // =========================================================================

    /// Render one block.
    ///
    /// Processes `frame_count` frames starting at `buffer_offset` in every
    /// channel buffer. Takes the bypass path when bypass is enabled, the full
    /// path otherwise.
    ///
    /// Real-time safe: no allocation, no blocking. Never returns an error.
    ///
    /// A render that finds the guard held by `reset`, `init` or `with_engine`
    /// zeroes every output channel that covers the window and reports
    /// [`RenderStatus::Silenced`].
    ///
    /// A render that cannot run otherwise leaves the buffers untouched and
    /// reports [`RenderStatus::Skipped`]. That covers:
    ///
    /// - `frame_count == 0`
    /// - a kernel that is not initialized, draining or shut down
    /// - a guard poisoned by an earlier panic
    /// - buffer sets missing a required channel or too short for the window
    pub fn process(
        &self,
        frame_count: usize,
        buffer_offset: usize,
        input: &BufferSet<'_>,
        output: &BufferSet<'_>,
    ) -> RenderStatus {
        if frame_count == 0 {
            return RenderStatus::Skipped;
        }
        if !self.accepting.load(Ordering::Acquire) {
            self.log_skip("kernel is draining");
            return RenderStatus::Skipped;
        }

        let mut state = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                // Teardown holds the guard only after accepting is cleared.
                if !self.accepting.load(Ordering::Acquire) {
                    self.log_skip("kernel is draining");
                    return RenderStatus::Skipped;
                }
                silence(frame_count, buffer_offset, output);
                return RenderStatus::Silenced;
            }
            Err(TryLockError::Poisoned(_)) => {
                self.log_skip("guard poisoned by an earlier panic");
                return RenderStatus::Skipped;
            }
        };

        // Re-check under the guard: a drain that started after the check above
        // has either finished (and we must not run) or is waiting on us.
        if !self.accepting.load(Ordering::Acquire) {
            self.log_skip("kernel is draining");
            return RenderStatus::Skipped;
        }

        let KernelState::Ready {
            engine,
            config,
            scratch,
        } = &mut *state
        else {
            self.log_skip("kernel is not initialized");
            return RenderStatus::Skipped;
        };

        if self.bypassed.load(Ordering::Relaxed) {
            if !bypass::buffers_cover(config, frame_count, buffer_offset, input, output) {
                self.log_skip("buffers do not cover the bypass window");
                return RenderStatus::Skipped;
            }
            bypass::render(config, frame_count, buffer_offset, input, output);
            return RenderStatus::Bypassed;
        }

        if !router::buffers_cover(config, frame_count, buffer_offset, input, output) {
            self.log_skip("buffers do not cover the render window");
            return RenderStatus::Skipped;
        }
        router::render(
            engine,
            scratch,
            config,
            frame_count,
            buffer_offset,
            input,
            output,
        );
        RenderStatus::Processed
    }

    /// Warn about a skipped render, once per kernel.
    #[inline]
    fn log_skip(&self, reason: &str) {
        if !self.skip_logged.swap(true, Ordering::Relaxed) {
            log::warn!(
                "Render skipped: {}. This warning will only appear once per kernel.",
                reason
            );
        }
    }
}

/// Zero `[buffer_offset, buffer_offset + frame_count)` in every output
/// channel long enough to hold it.
fn silence(frame_count: usize, buffer_offset: usize, output: &BufferSet<'_>) {
    for channel in output.iter() {
        if channel.covers(buffer_offset, frame_count) {
            // SAFETY: covered; no input view is alive and this is the only
            // view of the channel.
            vector::clear(unsafe { channel.window_mut(buffer_offset, frame_count) });
        }
    }
}

impl<E: ConvolutionEngine> Default for DspKernel<E> {
    /// Kernel bound to the bundled impulse response.
    fn default() -> Self {
        Self::new(DEFAULT_IMPULSE)
    }
}

impl<E: ConvolutionEngine> Drop for DspKernel<E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
