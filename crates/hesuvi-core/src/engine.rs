//! Convolution engine boundary.
//!
//! The engine loads an impulse response and performs the binaural filtering.
//! The kernel only depends on this small capability surface: build once,
//! process interleaved blocks, reset. Implementations live outside this crate.

use crate::config::ImpulseResource;
use crate::error::EngineError;

/// Interleaved multichannel-in, stereo-out convolution engine.
///
/// # Contract
///
/// - `load` is called once per kernel, from `init`, with at most
///   [`MAX_ENGINE_INPUT_CHANNELS`](crate::MAX_ENGINE_INPUT_CHANNELS) input channels.
/// - `process` is never called concurrently and never after the engine has been
///   dropped. It runs on the real-time thread and must not allocate or block.
/// - For a call with `frame_count` frames, `input.len()` is
///   `frame_count * input_channels` (channel index fastest) and `output.len()`
///   is `frame_count * 2`. The engine writes every output sample.
/// - An engine built with zero input channels still receives `process` calls
///   (with an empty input) and should render silence.
///
/// # Example
///
/// ```
/// use hesuvi_core::{ConvolutionEngine, EngineError, ImpulseResource};
///
/// /// Folds every input channel into both ears.
/// struct Downmix {
///     channels: usize,
/// }
///
/// impl ConvolutionEngine for Downmix {
///     fn load(_: &ImpulseResource, _: f64, channels: usize) -> Result<Self, EngineError> {
///         Ok(Self { channels })
///     }
///
///     fn process(&mut self, input: &[f32], frame_count: usize, output: &mut [f32]) {
///         for f in 0..frame_count {
///             let frame = &input[f * self.channels..(f + 1) * self.channels];
///             let sum: f32 = frame.iter().sum();
///             output[f * 2] = sum;
///             output[f * 2 + 1] = sum;
///         }
///     }
///
///     fn reset(&mut self) {}
/// }
/// ```
pub trait ConvolutionEngine: Send + Sized + 'static {
    /// Build the engine for an impulse resource, sample rate and input
    /// channel count.
    fn load(
        impulse: &ImpulseResource,
        sample_rate: f64,
        input_channels: usize,
    ) -> Result<Self, EngineError>;

    /// Render `frame_count` frames of interleaved input into interleaved stereo.
    fn process(&mut self, input: &[f32], frame_count: usize, output: &mut [f32]);

    /// Clear filter history (tails, overlap buffers).
    fn reset(&mut self);
}
