//! Type-erased kernel instance trait.
//!
//! The C-ABI bridge hands the Objective-C wrapper one opaque handle type for
//! every engine. [`KernelInstance`] captures the kernel operations the bridge
//! needs so the handle can store a `Box<dyn KernelInstance>` regardless of the
//! engine the kernel was built with.

use hesuvi_core::{
    BufferSet, ConvolutionEngine, DspKernel, ImpulseResource, KernelConfig, KernelResult,
    ParameterAddress, ParameterValue, RenderStatus,
};

/// Type-erased interface for kernel instances.
///
/// Implemented by [`DspKernel<E>`] for every engine `E`. Engine authors don't
/// implement this directly.
pub trait KernelInstance: Send + Sync + 'static {
    /// Build the engine for a channel layout. Called when the host allocates
    /// render resources.
    fn init(&self, config: KernelConfig) -> KernelResult<()>;

    /// Configuration passed to a successful `init`.
    fn config(&self) -> Option<KernelConfig>;

    /// Render one block. Real-time safe.
    fn process(
        &self,
        frame_count: usize,
        buffer_offset: usize,
        input: &BufferSet<'_>,
        output: &BufferSet<'_>,
    ) -> RenderStatus;

    fn reset(&self);

    fn is_bypassed(&self) -> bool;

    fn set_bypass(&self, bypassed: bool);

    /// Processing latency in seconds.
    fn latency(&self) -> f64;

    fn parameter(&self, address: ParameterAddress) -> ParameterValue;

    fn set_parameter(&self, address: ParameterAddress, value: ParameterValue);

    /// Refuse further renders and wait out the in-flight one.
    fn drain(&self);

    /// Drain, then release the engine.
    fn shutdown(&self);
}

impl<E: ConvolutionEngine> KernelInstance for DspKernel<E> {
    fn init(&self, config: KernelConfig) -> KernelResult<()> {
        DspKernel::init(self, config)
    }

    fn config(&self) -> Option<KernelConfig> {
        DspKernel::config(self)
    }

    #[inline]
    fn process(
        &self,
        frame_count: usize,
        buffer_offset: usize,
        input: &BufferSet<'_>,
        output: &BufferSet<'_>,
    ) -> RenderStatus {
        DspKernel::process(self, frame_count, buffer_offset, input, output)
    }

    fn reset(&self) {
        DspKernel::reset(self)
    }

    fn is_bypassed(&self) -> bool {
        DspKernel::is_bypassed(self)
    }

    fn set_bypass(&self, bypassed: bool) {
        DspKernel::set_bypass(self, bypassed)
    }

    fn latency(&self) -> f64 {
        DspKernel::latency(self)
    }

    fn parameter(&self, address: ParameterAddress) -> ParameterValue {
        DspKernel::parameter(self, address)
    }

    fn set_parameter(&self, address: ParameterAddress, value: ParameterValue) {
        DspKernel::set_parameter(self, address, value)
    }

    fn drain(&self) {
        DspKernel::drain(self)
    }

    fn shutdown(&self) {
        DspKernel::shutdown(self)
    }
}

/// Create a boxed kernel for engine `E` bound to `impulse`.
pub fn boxed_kernel<E: ConvolutionEngine>(impulse: ImpulseResource) -> Box<dyn KernelInstance> {
    Box::new(DspKernel::<E>::new(impulse))
}
