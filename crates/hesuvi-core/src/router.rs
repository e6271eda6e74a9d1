//! Channel router: the full (non-bypassed) render path.
//!
//! Maps the host's per-channel layout onto the engine's interleaved layout and
//! back:
//!
//! ```text
//! host inputs 0..m   ──interleave──▶  [c0 c1 .. cm-1][c0 c1 ..]...   (m = min(in, 8))
//!                                              │
//!                                        engine.process
//!                                              ▼
//! host outputs 0..k  ◀─deinterleave──  [L R][L R]...                 (k = min(out, 2))
//! host outputs 2..out ◀─ silence
//! ```
//!
//! Scratch buffers are sized once from [`KernelConfig::max_frames`]; renders
//! longer than that are split into consecutive chunks.

use crate::buffer::BufferSet;
use crate::config::KernelConfig;
use crate::engine::ConvolutionEngine;
use crate::types::ENGINE_OUTPUT_CHANNELS;
use crate::vector;

/// Pre-allocated interleaved buffers for the engine round trip.
pub(crate) struct RouterScratch {
    /// Interleaved engine input, `max_frames * engine_inputs` samples.
    input: Vec<f32>,
    /// Interleaved engine output, `max_frames * 2` samples.
    output: Vec<f32>,
    engine_inputs: usize,
    max_frames: usize,
}

impl RouterScratch {
    /// Allocate scratch for a configuration. Not real-time safe.
    pub(crate) fn allocate(config: &KernelConfig) -> Self {
        let engine_inputs = config.engine_input_channels();
        let max_frames = config.max_frames as usize;
        Self {
            input: vec![0.0; max_frames * engine_inputs],
            output: vec![0.0; max_frames * ENGINE_OUTPUT_CHANNELS],
            engine_inputs,
            max_frames,
        }
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> (usize, usize) {
        (self.input.len(), self.output.len())
    }
}

/// Returns true if the buffer sets expose every channel window the full path
/// touches.
pub(crate) fn buffers_cover(
    config: &KernelConfig,
    frame_count: usize,
    buffer_offset: usize,
    input: &BufferSet<'_>,
    output: &BufferSet<'_>,
) -> bool {
    input.covers(config.engine_input_channels(), buffer_offset, frame_count)
        && output.covers(config.output_channels, buffer_offset, frame_count)
}

/// Run the full path over `[buffer_offset, buffer_offset + frame_count)`.
///
/// Callers must have checked [`buffers_cover`].
pub(crate) fn render<E: ConvolutionEngine>(
    engine: &mut E,
    scratch: &mut RouterScratch,
    config: &KernelConfig,
    frame_count: usize,
    buffer_offset: usize,
    input: &BufferSet<'_>,
    output: &BufferSet<'_>,
) {
    debug_assert!(buffers_cover(config, frame_count, buffer_offset, input, output));

    let RouterScratch {
        input: interleaved_in,
        output: interleaved_out,
        engine_inputs,
        max_frames,
    } = scratch;
    let m = *engine_inputs;
    let chunk_frames = (*max_frames).max(1);

    let mut done = 0;
    while done < frame_count {
        let frames = chunk_frames.min(frame_count - done);
        let offset = buffer_offset + done;

        let engine_in = &mut interleaved_in[..frames * m];
        let engine_out = &mut interleaved_out[..frames * ENGINE_OUTPUT_CHANNELS];

        for ch in 0..m {
            if let Some(channel) = input.channel(ch) {
                // SAFETY: covered (checked by the caller); no output view is alive yet.
                let src = unsafe { channel.window(offset, frames) };
                vector::interleave_channel(src, engine_in, ch, m);
            }
        }

        vector::clear(engine_out);
        engine.process(engine_in, frames, engine_out);

        // Every input read for this chunk has finished, so in-place outputs
        // can be written now.
        for ch in 0..config.engine_sourced_outputs() {
            if let Some(channel) = output.channel(ch) {
                // SAFETY: covered; this is the only live view of the channel.
                let dst = unsafe { channel.window_mut(offset, frames) };
                vector::deinterleave_channel(engine_out, dst, ch, ENGINE_OUTPUT_CHANNELS);
            }
        }
        for ch in ENGINE_OUTPUT_CHANNELS..config.output_channels {
            if let Some(channel) = output.channel(ch) {
                // SAFETY: as above.
                vector::clear(unsafe { channel.window_mut(offset, frames) });
            }
        }

        done += frames;
    }
}
