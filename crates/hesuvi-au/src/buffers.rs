//! Core Audio buffer list layout and conversion to kernel channel handles.
//!
//! `AudioBufferList` is a C struct with a flexible array member: the buffer
//! count lives in `number_buffers` and buffers past the first are reached by
//! pointer arithmetic. [`AudioBufferList::buffer_at`] wraps that access.
//!
//! # Supported Audio Formats
//!
//! The kernel expects non-interleaved `f32` audio, one `AudioBuffer` per
//! channel. A buffer that is interleaved (`number_channels != 1`), null,
//! misaligned or not a whole number of samples becomes an empty channel handle
//! so later channels keep their index. The kernel treats an empty channel as
//! too short for any window and skips the render.

use std::ffi::c_void;
use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};

use hesuvi_core::ChannelBuffer;

// Static flag to ensure interleaved audio warning only logs once per session
static INTERLEAVED_WARNING_LOGGED: AtomicBool = AtomicBool::new(false);

// Same for null, misaligned and truncated buffers
static INVALID_BUFFER_WARNING_LOGGED: AtomicBool = AtomicBool::new(false);

/// Core Audio AudioBuffer structure.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct AudioBuffer {
    /// Number of interleaved channels in the buffer.
    /// For non-interleaved audio, this is 1.
    pub number_channels: u32,
    /// Size of the buffer in bytes.
    pub data_byte_size: u32,
    /// Pointer to the audio data.
    pub data: *mut c_void,
}

/// Core Audio AudioBufferList structure.
///
/// The actual size depends on `number_buffers`.
#[repr(C)]
pub struct AudioBufferList {
    /// Number of buffers in the list.
    pub number_buffers: u32,
    /// First buffer (actual array continues beyond this).
    pub buffers: [AudioBuffer; 1],
}

impl AudioBufferList {
    /// Get a reference to the buffer at the given index.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < number_buffers`.
    #[inline]
    pub unsafe fn buffer_at(&self, index: u32) -> &AudioBuffer {
        let buffers_ptr = self.buffers.as_ptr();
        &*buffers_ptr.add(index as usize)
    }
}

/// Returns true if the buffer can be read as `f32` samples.
#[inline]
fn is_valid_f32_buffer(buffer: &AudioBuffer) -> bool {
    if buffer.data.is_null() {
        return false;
    }
    if (buffer.data as usize) % mem::align_of::<f32>() != 0 {
        return false;
    }
    (buffer.data_byte_size as usize) % mem::size_of::<f32>() == 0
}

/// Convert one `AudioBuffer` into a channel handle.
///
/// Unsupported buffers yield an empty handle, with a warning logged once per
/// session for each kind of problem.
///
/// # Safety
///
/// If the buffer passes validation, its `data` must be valid for reads and
/// writes of `data_byte_size` bytes for `'a`.
#[inline]
pub unsafe fn channel_from_audio_buffer<'a>(buffer: &AudioBuffer) -> ChannelBuffer<'a> {
    if buffer.number_channels != 1 {
        if !INTERLEAVED_WARNING_LOGGED.swap(true, Ordering::Relaxed) {
            log::warn!(
                "Interleaved audio buffer with {} channels - not supported, skipping. \
                 This warning will only appear once per session.",
                buffer.number_channels
            );
        }
        return ChannelBuffer::empty();
    }

    if !is_valid_f32_buffer(buffer) {
        if !INVALID_BUFFER_WARNING_LOGGED.swap(true, Ordering::Relaxed) {
            log::warn!(
                "Audio buffer at {:p} ({} bytes) is null, misaligned or truncated - skipping. \
                 This warning will only appear once per session.",
                buffer.data,
                buffer.data_byte_size
            );
        }
        return ChannelBuffer::empty();
    }

    let samples = buffer.data_byte_size as usize / mem::size_of::<f32>();
    ChannelBuffer::from_raw_parts(buffer.data.cast::<f32>(), samples)
}
