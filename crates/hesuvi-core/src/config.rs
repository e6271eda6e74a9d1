//! Kernel configuration.
//!
//! [`KernelConfig`] is the tuple the host hands to `init` when it allocates
//! render resources. It is immutable once the engine has been built.
//! [`ImpulseResource`] names the impulse-response asset the engine loads; it is
//! bound when the kernel is constructed, not when it is initialized.
//!
//! # Example
//!
//! ```
//! use hesuvi_core::KernelConfig;
//!
//! let config = KernelConfig::new(6, 2, 48_000.0).with_max_frames(512);
//! assert_eq!(config.engine_input_channels(), 6);
//! ```

use std::path::{Path, PathBuf};

use crate::error::{KernelError, KernelResult};
use crate::types::{engine_input_channels, engine_sourced_outputs};

/// Default sample rate when the host has not supplied one.
pub const DEFAULT_SAMPLE_RATE: f64 = 48_000.0;

/// Default maximum frames per render (the host's `maximumFramesToRender`).
pub const DEFAULT_MAX_FRAMES: u32 = 1024;

/// Impulse response bundled with the effect.
pub const DEFAULT_IMPULSE: ImpulseResource = ImpulseResource::new("gsx", "wv");

/// Identifier of an impulse-response asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpulseResource {
    /// Resource name without extension.
    pub name: &'static str,
    /// File extension without the leading dot.
    pub extension: &'static str,
}

impl ImpulseResource {
    /// Create a resource identifier.
    pub const fn new(name: &'static str, extension: &'static str) -> Self {
        Self { name, extension }
    }

    /// File name of the asset (`name.extension`).
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.to_string()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }

    /// Path of the asset inside a resource directory.
    pub fn resolve(&self, resource_dir: impl AsRef<Path>) -> PathBuf {
        resource_dir.as_ref().join(self.file_name())
    }
}

impl Default for ImpulseResource {
    fn default() -> Self {
        DEFAULT_IMPULSE
    }
}

impl std::fmt::Display for ImpulseResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Channel layout and timing the kernel is initialized with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Host input channel count (may exceed what the engine accepts).
    pub input_channels: usize,
    /// Host output channel count.
    pub output_channels: usize,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Largest render the host will request. Sizes the scratch buffers;
    /// larger renders are processed in chunks.
    pub max_frames: u32,
}

impl KernelConfig {
    /// Create a configuration with the default `max_frames`.
    pub const fn new(input_channels: usize, output_channels: usize, sample_rate: f64) -> Self {
        Self {
            input_channels,
            output_channels,
            sample_rate,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }

    /// Set the maximum frames per render.
    pub const fn with_max_frames(mut self, max_frames: u32) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Input channel count handed to the engine, `min(input_channels, 8)`.
    #[inline]
    pub const fn engine_input_channels(&self) -> usize {
        engine_input_channels(self.input_channels)
    }

    /// Output channels that carry engine output, `min(output_channels, 2)`.
    #[inline]
    pub const fn engine_sourced_outputs(&self) -> usize {
        engine_sourced_outputs(self.output_channels)
    }

    /// Channels copied by the bypass path, `min(input_channels, output_channels)`.
    #[inline]
    pub fn passthrough_channels(&self) -> usize {
        self.input_channels.min(self.output_channels)
    }

    /// Check the values the kernel cannot clamp.
    ///
    /// Channel counts are never rejected; sample rate and `max_frames` are.
    pub fn validate(&self) -> KernelResult<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(KernelError::InvalidConfiguration(format!(
                "sample rate must be positive and finite, got {}",
                self.sample_rate
            )));
        }
        if self.max_frames == 0 {
            return Err(KernelError::InvalidConfiguration(
                "max_frames must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KernelConfig {
    /// Stereo in, stereo out at the default sample rate.
    fn default() -> Self {
        Self::new(2, 2, DEFAULT_SAMPLE_RATE)
    }
}
