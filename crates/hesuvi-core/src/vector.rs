//! Strided copy and clear primitives.
//!
//! Stand-ins for the BLAS/vDSP calls a Core Audio kernel would use
//! (`cblas_scopy` with a stride, `vDSP_vclr`). No allocation, no locking;
//! safe to call from the render thread.

/// Write `src` into one channel slot of an interleaved buffer.
///
/// Sample `f` of `src` lands at `interleaved[f * stride + channel]`. Frames
/// beyond the shorter of the two buffers are not touched.
///
/// # Panics
///
/// Panics if `stride` is zero or `channel >= stride`.
#[inline]
pub fn interleave_channel(src: &[f32], interleaved: &mut [f32], channel: usize, stride: usize) {
    assert!(channel < stride, "channel {} out of stride {}", channel, stride);
    for (sample, frame) in src.iter().zip(interleaved.chunks_exact_mut(stride)) {
        frame[channel] = *sample;
    }
}

/// Read one channel slot of an interleaved buffer into `dst`.
///
/// `dst[f]` receives `interleaved[f * stride + channel]`.
///
/// # Panics
///
/// Panics if `stride` is zero or `channel >= stride`.
#[inline]
pub fn deinterleave_channel(interleaved: &[f32], dst: &mut [f32], channel: usize, stride: usize) {
    assert!(channel < stride, "channel {} out of stride {}", channel, stride);
    for (sample, frame) in dst.iter_mut().zip(interleaved.chunks_exact(stride)) {
        *sample = frame[channel];
    }
}

/// Fill a buffer with silence.
#[inline]
pub fn clear(dst: &mut [f32]) {
    dst.fill(0.0);
}
