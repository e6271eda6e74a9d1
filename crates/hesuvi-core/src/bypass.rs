//! Bypass path.
//!
//! When the effect is disabled the kernel copies input to output channel by
//! channel and never touches the engine or the router scratch. Channels the
//! host renders in place (input and output share storage) are skipped since
//! the data is already where it needs to be.
//!
//! Only `min(input_channels, output_channels)` channels are copied. Extra
//! output channels are left as they are; bypass does not guarantee silence on
//! them.

use crate::buffer::BufferSet;
use crate::config::KernelConfig;

/// Returns true if the buffer sets expose every channel window bypass touches.
pub(crate) fn buffers_cover(
    config: &KernelConfig,
    frame_count: usize,
    buffer_offset: usize,
    input: &BufferSet<'_>,
    output: &BufferSet<'_>,
) -> bool {
    let channels = config.passthrough_channels();
    input.covers(channels, buffer_offset, frame_count)
        && output.covers(channels, buffer_offset, frame_count)
}

/// Copy input to output over `[buffer_offset, buffer_offset + frame_count)`.
///
/// Returns the number of channels actually copied (in-place channels are not
/// counted). Callers must have checked [`buffers_cover`].
pub(crate) fn render(
    config: &KernelConfig,
    frame_count: usize,
    buffer_offset: usize,
    input: &BufferSet<'_>,
    output: &BufferSet<'_>,
) -> usize {
    debug_assert!(buffers_cover(config, frame_count, buffer_offset, input, output));

    let mut copied = 0;
    for (src, dst) in input
        .iter()
        .zip(output.iter())
        .take(config.passthrough_channels())
    {
        if src.same_storage(dst) {
            continue;
        }
        // SAFETY: both windows are covered (checked by the caller).
        unsafe { dst.copy_window_from(src, buffer_offset, frame_count) };
        copied += 1;
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ChannelBuffer;

    #[test]
    fn test_copy_distinct_buffers() {
        let config = KernelConfig::new(2, 2, 48_000.0);
        let mut in_l = [1.0f32, 2.0, 3.0, 4.0];
        let mut in_r = [5.0f32, 6.0, 7.0, 8.0];
        let mut out_l = [0.0f32; 4];
        let mut out_r = [0.0f32; 4];
        let inputs = [ChannelBuffer::new(&mut in_l), ChannelBuffer::new(&mut in_r)];
        let outputs = [ChannelBuffer::new(&mut out_l), ChannelBuffer::new(&mut out_r)];

        let copied = render(&config, 4, 0, &BufferSet::new(&inputs), &BufferSet::new(&outputs));

        assert_eq!(copied, 2);
        assert_eq!(out_l, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(out_r, [5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_in_place_is_skipped() {
        let config = KernelConfig::new(2, 2, 48_000.0);
        let mut left = [1.0f32, 2.0];
        let mut right = [3.0f32, 4.0];
        let channels = [ChannelBuffer::new(&mut left), ChannelBuffer::new(&mut right)];
        let set = BufferSet::new(&channels);

        assert_eq!(render(&config, 2, 0, &set, &set), 0);
        assert_eq!(left, [1.0, 2.0]);
        assert_eq!(right, [3.0, 4.0]);
    }

    #[test]
    fn test_mixed_aliasing() {
        let config = KernelConfig::new(2, 2, 48_000.0);
        let mut shared = [1.0f32, 2.0];
        let mut in_r = [3.0f32, 4.0];
        let mut out_r = [0.0f32; 2];
        let shared_ch = ChannelBuffer::new(&mut shared);
        let inputs = [shared_ch, ChannelBuffer::new(&mut in_r)];
        let outputs = [shared_ch, ChannelBuffer::new(&mut out_r)];

        let copied = render(&config, 2, 0, &BufferSet::new(&inputs), &BufferSet::new(&outputs));

        assert_eq!(copied, 1);
        assert_eq!(shared, [1.0, 2.0]);
        assert_eq!(out_r, [3.0, 4.0]);
    }

    #[test]
    fn test_extra_outputs_untouched() {
        let config = KernelConfig::new(1, 3, 48_000.0);
        let mut input = [0.5f32; 4];
        let mut out = [[9.0f32; 4], [9.0f32; 4], [9.0f32; 4]];
        let [o0, o1, o2] = &mut out;
        let inputs = [ChannelBuffer::new(&mut input)];
        let outputs = [
            ChannelBuffer::new(o0),
            ChannelBuffer::new(o1),
            ChannelBuffer::new(o2),
        ];

        render(&config, 2, 1, &BufferSet::new(&inputs), &BufferSet::new(&outputs));

        assert_eq!(out[0], [9.0, 0.5, 0.5, 9.0]);
        assert_eq!(out[1], [9.0; 4]);
        assert_eq!(out[2], [9.0; 4]);
    }

    #[test]
    fn test_buffers_cover_uses_passthrough_count() {
        let config = KernelConfig::new(4, 1, 48_000.0);
        let mut a = [0.0f32; 4];
        let mut b = [0.0f32; 4];
        let inputs = [ChannelBuffer::new(&mut a)];
        let outputs = [ChannelBuffer::new(&mut b)];

        assert!(buffers_cover(&config, 4, 0, &BufferSet::new(&inputs), &BufferSet::new(&outputs)));
        assert!(!buffers_cover(&config, 5, 0, &BufferSet::new(&inputs), &BufferSet::new(&outputs)));
    }
}
