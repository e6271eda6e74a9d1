//! Borrowed per-channel buffer views.
//!
//! The host hands the kernel one buffer per channel, for input and for output,
//! valid only for the duration of a render call. [`ChannelBuffer`] is a
//! non-owning handle to one such buffer and [`BufferSet`] is an ordered list of
//! them. Neither type owns or retains audio data.
//!
//! # Aliasing
//!
//! Hosts commonly render in place: input channel `i` and output channel `i`
//! point at the same storage. A `ChannelBuffer` is `Copy`, like the Core Audio
//! `AudioBuffer` it stands in for, so the same handle can appear in both the
//! input and the output set:
//!
//! ```
//! use hesuvi_core::{BufferSet, ChannelBuffer};
//!
//! let mut left = [0.0f32; 64];
//! let mut right = [0.0f32; 64];
//! let channels = [ChannelBuffer::new(&mut left), ChannelBuffer::new(&mut right)];
//!
//! let input = BufferSet::new(&channels);
//! let output = BufferSet::new(&channels);
//! assert!(input.channel(0).unwrap().same_storage(&output.channel(0).unwrap()));
//! ```
//!
//! The kernel never holds a shared and a mutable view of the same storage at
//! the same time. Reads happen through short-lived slices that end before any
//! write to the output set begins, and the bypass copy uses an overlap-safe
//! copy.

use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice;

// =============================================================================
// ChannelBuffer
// =============================================================================

/// Non-owning handle to one channel of `f32` samples.
#[derive(Clone, Copy)]
pub struct ChannelBuffer<'a> {
    data: NonNull<f32>,
    len: usize,
    _marker: PhantomData<&'a mut [f32]>,
}

impl<'a> ChannelBuffer<'a> {
    /// Create a handle over a mutable slice.
    ///
    /// The slice stays borrowed for `'a`; all access to it goes through this
    /// handle and its copies.
    #[inline]
    pub fn new(data: &'a mut [f32]) -> Self {
        let len = data.len();
        Self {
            data: NonNull::from(data).cast(),
            len,
            _marker: PhantomData,
        }
    }

    /// Create a handle from a raw pointer and sample count.
    ///
    /// A null `data` pointer yields an empty handle.
    ///
    /// # Safety
    ///
    /// - `data` must be valid for reads and writes of `len` `f32` samples for `'a`
    /// - `data` must be aligned for `f32`
    /// - no other code may access the storage during `'a` except through
    ///   handles derived from this one
    #[inline]
    pub unsafe fn from_raw_parts(data: *mut f32, len: usize) -> Self {
        match NonNull::new(data) {
            Some(data) => Self {
                data,
                len,
                _marker: PhantomData,
            },
            None => Self::empty(),
        }
    }

    /// A handle with no samples.
    #[inline]
    pub fn empty() -> Self {
        Self {
            data: NonNull::dangling(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of samples in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first sample.
    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    /// Returns true if both handles refer to the same storage.
    ///
    /// This is the host's notion of in-place rendering: the data pointers are
    /// equal. Empty handles never share storage.
    #[inline]
    pub fn same_storage(&self, other: &ChannelBuffer<'_>) -> bool {
        !self.is_empty() && !other.is_empty() && self.data == other.data
    }

    /// Returns true if `[offset, offset + frames)` lies inside the buffer.
    #[inline]
    pub fn covers(&self, offset: usize, frames: usize) -> bool {
        offset
            .checked_add(frames)
            .is_some_and(|end| end <= self.len)
    }

    /// Shared view of a window of the buffer.
    ///
    /// # Safety
    ///
    /// - `covers(offset, frames)` must hold
    /// - no mutable view of the same storage may be alive while the returned
    ///   slice is
    #[inline]
    pub(crate) unsafe fn window(&self, offset: usize, frames: usize) -> &[f32] {
        debug_assert!(self.covers(offset, frames));
        slice::from_raw_parts(self.data.as_ptr().add(offset), frames)
    }

    /// Mutable view of a window of the buffer.
    ///
    /// # Safety
    ///
    /// - `covers(offset, frames)` must hold
    /// - no other view of the same storage may be alive while the returned
    ///   slice is
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn window_mut(&self, offset: usize, frames: usize) -> &mut [f32] {
        debug_assert!(self.covers(offset, frames));
        slice::from_raw_parts_mut(self.data.as_ptr().add(offset), frames)
    }

    /// Copy a window from `src` into the same window of this buffer.
    ///
    /// Overlapping storage is handled like `memmove`.
    ///
    /// # Safety
    ///
    /// `covers(offset, frames)` must hold for both buffers.
    #[inline]
    pub(crate) unsafe fn copy_window_from(&self, src: &ChannelBuffer<'_>, offset: usize, frames: usize) {
        debug_assert!(self.covers(offset, frames) && src.covers(offset, frames));
        std::ptr::copy(
            src.data.as_ptr().add(offset),
            self.data.as_ptr().add(offset),
            frames,
        );
    }
}

impl std::fmt::Debug for ChannelBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelBuffer")
            .field("data", &self.data)
            .field("len", &self.len)
            .finish()
    }
}

impl Default for ChannelBuffer<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// BufferSet
// =============================================================================

/// Ordered list of channel buffers for one side (input or output) of a render.
#[derive(Clone, Copy, Debug, Default)]
pub struct BufferSet<'a> {
    channels: &'a [ChannelBuffer<'a>],
}

impl<'a> BufferSet<'a> {
    /// Create a set over the given channel handles.
    #[inline]
    pub fn new(channels: &'a [ChannelBuffer<'a>]) -> Self {
        Self { channels }
    }

    /// A set with no channels.
    #[inline]
    pub fn empty() -> Self {
        Self { channels: &[] }
    }

    /// Number of channel slots.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Get a channel handle by index.
    #[inline]
    pub fn channel(&self, index: usize) -> Option<ChannelBuffer<'a>> {
        self.channels.get(index).copied()
    }

    /// Iterate over the channel handles.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ChannelBuffer<'a>> + '_ {
        self.channels.iter()
    }

    /// Returns true if the first `channels` slots exist and each covers
    /// `[offset, offset + frames)`.
    pub fn covers(&self, channels: usize, offset: usize, frames: usize) -> bool {
        channels <= self.channels.len()
            && self.channels[..channels]
                .iter()
                .all(|ch| ch.covers(offset, frames))
    }
}
