//! Engine and factory registration shared by the unit tests.

use std::sync::Once;

use hesuvi_core::{ConvolutionEngine, EngineError, ImpulseResource};

/// Writes half the sum of each input frame to both output channels.
pub(crate) struct GainEngine {
    input_channels: usize,
}

impl ConvolutionEngine for GainEngine {
    fn load(_: &ImpulseResource, _: f64, input_channels: usize) -> Result<Self, EngineError> {
        Ok(Self { input_channels })
    }

    fn process(&mut self, input: &[f32], _frame_count: usize, output: &mut [f32]) {
        if self.input_channels == 0 {
            output.fill(0.0);
            return;
        }
        for (frame, out) in input
            .chunks_exact(self.input_channels)
            .zip(output.chunks_exact_mut(2))
        {
            out.fill(frame.iter().sum::<f32>() * 0.5);
        }
    }

    fn reset(&mut self) {}
}

crate::export_kernel!(GainEngine);

static REGISTER: Once = Once::new();

/// Register the `GainEngine` factory for this test binary.
pub(crate) fn register() {
    REGISTER.call_once(__hesuvi_kernel_manual_init);
}
