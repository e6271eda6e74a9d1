//! # hesuvi-core
//!
//! Real-time DSP kernel for the HeSuVi headphone virtualizer.
//!
//! The kernel sits between a host's per-channel audio buffers and a
//! multichannel-to-binaural convolution engine. Each render it either copies
//! input to output (bypass) or interleaves up to eight input channels, runs the
//! engine, and spreads its stereo result back over the host outputs.
//!
//! This crate is host-agnostic: it knows nothing about Audio Units or any other
//! plugin format. `hesuvi-au` adapts it to the AU render callback.
//!
//! ## Main Types
//!
//! - [`DspKernel`] - Render kernel with lifecycle guard and two-phase teardown
//! - [`ConvolutionEngine`] - Trait implemented by the convolution backend
//! - [`KernelConfig`] - Channel layout, sample rate and render block size
//! - [`ImpulseResource`] - The impulse response the engine loads
//! - [`BufferSet`] / [`ChannelBuffer`] - Borrowed view of host channel buffers
//! - [`KernelError`] / [`EngineError`] - Error types

pub mod buffer;
pub mod config;
pub mod engine;
pub mod error;
pub mod kernel;
pub mod types;
pub mod vector;

mod bypass;
mod lifecycle;
mod router;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use buffer::{BufferSet, ChannelBuffer};
pub use config::{
    ImpulseResource, KernelConfig, DEFAULT_IMPULSE, DEFAULT_MAX_FRAMES, DEFAULT_SAMPLE_RATE,
};
pub use engine::ConvolutionEngine;
pub use error::{EngineError, KernelError, KernelResult};
pub use kernel::{DspKernel, RenderStatus};
pub use types::{
    ParameterAddress, ParameterValue, ENGINE_OUTPUT_CHANNELS, MAX_ENGINE_INPUT_CHANNELS,
};
