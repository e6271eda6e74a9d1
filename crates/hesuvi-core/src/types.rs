//! Common types used throughout the HeSuVi kernel.

// =============================================================================
// Convolution Engine Limits
// =============================================================================
//
// The engine's filter set is built for up to 7.1 input (8 channels) and always
// renders a binaural stereo pair. Host layouts wider than this are clamped, not
// rejected.
// =============================================================================

/// Maximum number of input channels the convolution engine accepts.
///
/// Host input channels beyond this index are never read.
pub const MAX_ENGINE_INPUT_CHANNELS: usize = 8;

/// Number of channels the convolution engine renders (left, right).
pub const ENGINE_OUTPUT_CHANNELS: usize = 2;

/// Host parameter address (mirrors `AUParameterAddress`).
pub type ParameterAddress = u64;

/// Host parameter value (mirrors `AUValue`).
pub type ParameterValue = f32;

/// Clamp a host input channel count to what the engine accepts.
#[inline]
pub const fn engine_input_channels(input_channels: usize) -> usize {
    if input_channels > MAX_ENGINE_INPUT_CHANNELS {
        MAX_ENGINE_INPUT_CHANNELS
    } else {
        input_channels
    }
}

/// Number of host output channels that receive engine output.
#[inline]
pub const fn engine_sourced_outputs(output_channels: usize) -> usize {
    if output_channels > ENGINE_OUTPUT_CHANNELS {
        ENGINE_OUTPUT_CHANNELS
    } else {
        output_channels
    }
}
