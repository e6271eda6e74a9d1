//! Pre-allocated channel handle storage for real-time safe rendering.
//!
//! # Pattern
//!
//! 1. Allocate storage once during `init` (non-real-time), sized from the
//!    kernel's channel layout
//! 2. Clear it at the start of each render (O(1), no deallocation)
//! 3. Push one handle per `AudioBuffer` (never exceeds capacity)
//! 4. Hand the kernel a [`BufferSet`] borrowed from the storage
//!
//! Buffers beyond the configured channel count are ignored; the kernel never
//! addresses them.

use hesuvi_core::{BufferSet, ChannelBuffer, KernelConfig};

use crate::buffers::{channel_from_audio_buffer, AudioBufferList};

/// Channel handles collected from the host's buffer lists.
///
/// The handles carry a `'static` lifetime because the storage outlives any one
/// render, but they are only valid for the render they were collected for.
/// [`ChannelStorage::collect`] replaces them every render, and
/// [`ChannelStorage::clear`] drops them once the render returns.
pub struct ChannelStorage {
    inputs: Vec<ChannelBuffer<'static>>,
    outputs: Vec<ChannelBuffer<'static>>,
}

impl ChannelStorage {
    /// Storage with no capacity. Collecting into it yields empty sets.
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Allocate storage for a kernel configuration. Not real-time safe.
    pub fn allocate(config: &KernelConfig) -> Self {
        Self {
            inputs: Vec::with_capacity(config.input_channels),
            outputs: Vec::with_capacity(config.output_channels),
        }
    }

    /// Capacity as `(inputs, outputs)`.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> (usize, usize) {
        (self.inputs.capacity(), self.outputs.capacity())
    }

    /// Drop all collected handles, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inputs.clear();
        self.outputs.clear();
    }

    /// Replace the collected handles with the contents of two buffer lists.
    ///
    /// Null lists collect nothing. Never allocates.
    ///
    /// # Safety
    ///
    /// - non-null lists must point to valid `AudioBufferList`s
    /// - every buffer's data must stay valid until the next `clear` or
    ///   `collect`
    #[inline]
    pub unsafe fn collect(
        &mut self,
        input: *const AudioBufferList,
        output: *const AudioBufferList,
    ) {
        collect_into(&mut self.inputs, input);
        collect_into(&mut self.outputs, output);
    }

    /// Collected input channels.
    #[inline]
    pub fn inputs(&self) -> BufferSet<'_> {
        BufferSet::new(&self.inputs)
    }

    /// Collected output channels.
    #[inline]
    pub fn outputs(&self) -> BufferSet<'_> {
        BufferSet::new(&self.outputs)
    }
}

impl Default for ChannelStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear `dst` and fill it from `list` up to its capacity.
#[inline]
unsafe fn collect_into(dst: &mut Vec<ChannelBuffer<'static>>, list: *const AudioBufferList) {
    dst.clear();
    if list.is_null() {
        return;
    }
    let list = &*list;
    let count = (list.number_buffers as usize).min(dst.capacity());
    for i in 0..count {
        dst.push(channel_from_audio_buffer(list.buffer_at(i as u32)));
    }
}
