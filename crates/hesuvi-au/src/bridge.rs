//! C-ABI bridge between the Objective-C `AUAudioUnit` subclass and the kernel.
//!
//! ```text
//! AU Host (Logic Pro, etc.)
//!        ↓
//! Objective-C AUAudioUnit subclass (render block, parameter tree)
//!        ↓ (C-ABI calls)
//! bridge.rs (this module)
//!        ↓
//! Box<dyn KernelInstance> → DspKernel<E>
//! ```
//!
//! The wrapper's render block calls `hesuvi_kernel_set_buffers` with the
//! pulled input list and the host's output list, then `hesuvi_kernel_process`.
//! At teardown it stops rendering, calls `hesuvi_kernel_drain`, then
//! `hesuvi_kernel_destroy`.
//!
//! # Safety
//!
//! All functions use `std::panic::catch_unwind` to prevent panics from crossing
//! the FFI boundary. Handles are null-checked before dereferencing. Functions
//! that can fail return OSStatus codes.

// These are C-ABI entry points called from Objective-C. The ObjC side is responsible
// for passing valid pointers. Marking them `unsafe` would be unusual for C FFI.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use hesuvi_core::{KernelConfig, ParameterAddress, ParameterValue, RenderStatus};

use crate::buffer_storage::ChannelStorage;
use crate::buffers::AudioBufferList;
use crate::error::{os_status, ToOsStatus};
use crate::factory;
use crate::instance::KernelInstance;

// =============================================================================
// Instance Handle
// =============================================================================

/// Buffer lists registered by `set_buffers` and the storage they are
/// collected into.
struct RenderBinding {
    storage: ChannelStorage,
    input: *const AudioBufferList,
    output: *const AudioBufferList,
    /// Zero until `init` succeeds.
    max_frames: u32,
}

// SAFETY: the list pointers and collected channel handles are only
// dereferenced inside `hesuvi_kernel_process` while the binding mutex is held,
// and the host keeps the lists valid between `set_buffers` and `process`.
unsafe impl Send for RenderBinding {}

/// Opaque handle to a kernel instance.
///
/// # Thread Safety
///
/// The kernel is internally synchronized. The render binding sits behind its
/// own mutex; the render path only uses `try_lock()` on it.
pub struct KernelHandle {
    kernel: Box<dyn KernelInstance>,
    render: Mutex<RenderBinding>,
}

impl KernelHandle {
    fn new(kernel: Box<dyn KernelInstance>) -> Self {
        Self {
            kernel,
            render: Mutex::new(RenderBinding {
                storage: ChannelStorage::new(),
                input: ptr::null(),
                output: ptr::null(),
                max_frames: 0,
            }),
        }
    }

    fn lock_render(&self) -> MutexGuard<'_, RenderBinding> {
        self.render.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Type alias for the opaque handle pointer.
pub type KernelHandlePtr = *mut KernelHandle;

// =============================================================================
// Factory and Instance Lifecycle
// =============================================================================

/// Returns true if `export_kernel!` has registered a factory.
#[no_mangle]
pub extern "C" fn hesuvi_kernel_ensure_factory_registered() -> bool {
    factory::is_registered()
}

/// Create a kernel instance.
///
/// The returned handle must be destroyed with `hesuvi_kernel_destroy`.
///
/// # Returns
///
/// A pointer to the instance handle, or null if no factory is registered or
/// creation failed.
#[no_mangle]
pub extern "C" fn hesuvi_kernel_create() -> KernelHandlePtr {
    let result = catch_unwind(|| {
        let kernel = factory::create_instance()?;
        Some(Box::into_raw(Box::new(KernelHandle::new(kernel))))
    });

    match result {
        Ok(Some(handle)) => handle,
        Ok(None) => {
            log::error!("hesuvi_kernel_create called before a kernel factory was registered");
            ptr::null_mut()
        }
        Err(_) => ptr::null_mut(),
    }
}

/// Destroy a kernel instance.
///
/// Drains the kernel and releases the engine. Blocks until an in-flight
/// `hesuvi_kernel_process` call has returned, not just its kernel render.
/// The host must not issue new calls on the handle once this has started.
///
/// # Safety
///
/// - `handle` must be a pointer returned by `hesuvi_kernel_create`, or null
///   (in which case this function does nothing)
/// - `handle` must not have been previously destroyed and must not be used
///   afterwards
#[no_mangle]
pub extern "C" fn hesuvi_kernel_destroy(handle: KernelHandlePtr) {
    if handle.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| unsafe {
        let handle = Box::from_raw(handle);
        handle.kernel.shutdown();
        // A render that already finished in the kernel may still be clearing
        // storage; the binding lock is held until it is out of the bridge.
        drop(handle.lock_render());
    }));
}

// =============================================================================
// Render Resources
// =============================================================================

/// Maximum supported sample rate (384 kHz - highest professional audio standard).
const MAX_SAMPLE_RATE: f64 = 384_000.0;

/// Maximum supported frames per render call.
const MAX_FRAMES_PER_RENDER: u32 = 8192;

/// Build the engine and allocate render storage.
///
/// Called from `allocateRenderResourcesAndReturnError:` with the bus formats'
/// channel counts.
///
/// # Returns
///
/// - `NO_ERR` on success
/// - `K_AUDIO_UNIT_ERR_INVALID_PARAMETER` for a null handle
/// - `K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE` for an out-of-range sample
///   rate or frame count
/// - the kernel error's status otherwise (see [`ToOsStatus`])
#[no_mangle]
pub extern "C" fn hesuvi_kernel_init(
    handle: KernelHandlePtr,
    input_channels: u32,
    output_channels: u32,
    sample_rate: f64,
    max_frames: u32,
) -> i32 {
    if handle.is_null() {
        return os_status::K_AUDIO_UNIT_ERR_INVALID_PARAMETER;
    }

    // Validate sample_rate before any unsafe operations
    if sample_rate <= 0.0 || sample_rate > MAX_SAMPLE_RATE || !sample_rate.is_finite() {
        log::error!(
            "Invalid sample rate: {} (must be > 0 and <= {})",
            sample_rate,
            MAX_SAMPLE_RATE
        );
        return os_status::K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE;
    }

    if max_frames == 0 || max_frames > MAX_FRAMES_PER_RENDER {
        log::error!(
            "Invalid max_frames: {} (must be > 0 and <= {})",
            max_frames,
            MAX_FRAMES_PER_RENDER
        );
        return os_status::K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let handle = &*handle;
        let config = KernelConfig::new(
            input_channels as usize,
            output_channels as usize,
            sample_rate,
        )
        .with_max_frames(max_frames);

        if let Err(e) = handle.kernel.init(config) {
            return e.to_os_status();
        }

        let mut binding = handle.lock_render();
        binding.storage = ChannelStorage::allocate(&config);
        binding.max_frames = max_frames;
        os_status::NO_ERR
    }));

    result.unwrap_or(os_status::K_AUDIO_UNIT_ERR_UNINITIALIZED)
}

// =============================================================================
// Audio Rendering
// =============================================================================

/// Register the buffer lists the next `hesuvi_kernel_process` renders from
/// and into.
///
/// The lists are read, not copied: they must stay valid until that render
/// returns. Either may be null; a null list has no channels.
///
/// Called from the render thread; never blocks.
#[no_mangle]
pub extern "C" fn hesuvi_kernel_set_buffers(
    handle: KernelHandlePtr,
    input: *const AudioBufferList,
    output: *mut AudioBufferList,
) -> i32 {
    if handle.is_null() {
        return os_status::K_AUDIO_UNIT_ERR_INVALID_PARAMETER;
    }

    let result = catch_unwind(AssertUnwindSafe(|| {
        let handle = unsafe { &*handle };
        let mut binding = match handle.render.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) | Err(TryLockError::Poisoned(_)) => {
                return os_status::K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT;
            }
        };
        binding.input = input;
        binding.output = output.cast_const();
        os_status::NO_ERR
    }));

    result.unwrap_or(os_status::K_AUDIO_UNIT_ERR_RENDER)
}

/// Render `frame_count` frames starting at `buffer_offset` through the
/// registered buffer lists.
///
/// Called from the render thread. Never blocks and never allocates.
///
/// # Returns
///
/// - `NO_ERR` when the block was processed, bypassed, or silenced because a
///   control call held the kernel
/// - `K_AUDIO_UNIT_ERR_UNINITIALIZED` before a successful `init`
/// - `K_AUDIO_UNIT_ERR_TOO_MANY_FRAMES_TO_PROCESS` above the `max_frames`
///   given to `init`
/// - `K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT` when the kernel skipped
///   the render (draining, contended, or buffers too small)
///
/// # Safety
///
/// The lists registered with `set_buffers` must be valid and their buffers
/// must not be accessed by anything else until this call returns.
#[no_mangle]
pub extern "C" fn hesuvi_kernel_process(
    handle: KernelHandlePtr,
    frame_count: u32,
    buffer_offset: u32,
) -> i32 {
    if handle.is_null() {
        return os_status::K_AUDIO_UNIT_ERR_INVALID_PARAMETER;
    }

    let result = catch_unwind(AssertUnwindSafe(|| {
        let handle = unsafe { &*handle };

        // try_lock() keeps the audio thread from blocking on init
        let mut binding = match handle.render.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) | Err(TryLockError::Poisoned(_)) => {
                return os_status::K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT;
            }
        };

        if binding.max_frames == 0 {
            return os_status::K_AUDIO_UNIT_ERR_UNINITIALIZED;
        }
        if frame_count > binding.max_frames {
            return os_status::K_AUDIO_UNIT_ERR_TOO_MANY_FRAMES_TO_PROCESS;
        }

        let RenderBinding {
            storage,
            input,
            output,
            ..
        } = &mut *binding;

        // SAFETY: the host keeps the registered lists valid for this render.
        unsafe { storage.collect(*input, *output) };
        let status = handle.kernel.process(
            frame_count as usize,
            buffer_offset as usize,
            &storage.inputs(),
            &storage.outputs(),
        );
        storage.clear();

        match status {
            RenderStatus::Processed | RenderStatus::Bypassed | RenderStatus::Silenced => {
                os_status::NO_ERR
            }
            RenderStatus::Skipped => os_status::K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT,
        }
    }));

    result.unwrap_or(os_status::K_AUDIO_UNIT_ERR_RENDER)
}

/// Clear the engine's filter history.
#[no_mangle]
pub extern "C" fn hesuvi_kernel_reset(handle: KernelHandlePtr) {
    if handle.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| unsafe {
        (*handle).kernel.reset();
    }));
}

/// Stop accepting renders and wait for the in-flight one.
///
/// Call after the host stopped issuing renders and before
/// `hesuvi_kernel_destroy`. Blocks; not for the render thread.
#[no_mangle]
pub extern "C" fn hesuvi_kernel_drain(handle: KernelHandlePtr) {
    if handle.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| unsafe {
        (*handle).kernel.drain();
    }));
}

// =============================================================================
// Bypass, Latency, Parameters
// =============================================================================

#[no_mangle]
pub extern "C" fn hesuvi_kernel_set_bypass(handle: KernelHandlePtr, bypassed: bool) {
    if handle.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| unsafe {
        (*handle).kernel.set_bypass(bypassed);
    }));
}

#[no_mangle]
pub extern "C" fn hesuvi_kernel_is_bypassed(handle: KernelHandlePtr) -> bool {
    if handle.is_null() {
        return false;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe { (*handle).kernel.is_bypassed() }));
    result.unwrap_or(false)
}

/// Processing latency in seconds.
#[no_mangle]
pub extern "C" fn hesuvi_kernel_latency(handle: KernelHandlePtr) -> f64 {
    if handle.is_null() {
        return 0.0;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe { (*handle).kernel.latency() }));
    result.unwrap_or(0.0)
}

#[no_mangle]
pub extern "C" fn hesuvi_kernel_set_parameter(
    handle: KernelHandlePtr,
    address: ParameterAddress,
    value: ParameterValue,
) {
    if handle.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| unsafe {
        (*handle).kernel.set_parameter(address, value);
    }));
}

#[no_mangle]
pub extern "C" fn hesuvi_kernel_parameter(
    handle: KernelHandlePtr,
    address: ParameterAddress,
) -> ParameterValue {
    if handle.is_null() {
        return 0.0;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        (*handle).kernel.parameter(address)
    }));
    result.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffers::AudioBuffer;
    use crate::test_support;
    use hesuvi_core::{BufferSet, DEFAULT_IMPULSE};
    use std::mem;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{mpsc, Arc};
    use std::thread;
    use std::time::Duration;

    #[repr(C)]
    struct FixedList<const N: usize> {
        number_buffers: u32,
        buffers: [AudioBuffer; N],
    }

    impl<const N: usize> FixedList<N> {
        fn new(channels: &mut [Vec<f32>; N]) -> Self {
            Self {
                number_buffers: N as u32,
                buffers: channels.each_mut().map(|data| AudioBuffer {
                    number_channels: 1,
                    data_byte_size: (data.len() * mem::size_of::<f32>()) as u32,
                    data: data.as_mut_ptr().cast(),
                }),
            }
        }

        fn as_mut_list(&mut self) -> *mut AudioBufferList {
            (self as *mut Self).cast()
        }
    }

    /// Kernel whose `process` lingers after the inner render returns.
    struct LingeringKernel {
        inner: Box<dyn KernelInstance>,
        entered: Arc<AtomicBool>,
        finished: Arc<AtomicBool>,
    }

    impl KernelInstance for LingeringKernel {
        fn init(&self, config: KernelConfig) -> hesuvi_core::KernelResult<()> {
            self.inner.init(config)
        }

        fn config(&self) -> Option<KernelConfig> {
            self.inner.config()
        }

        fn process(
            &self,
            frame_count: usize,
            buffer_offset: usize,
            input: &BufferSet<'_>,
            output: &BufferSet<'_>,
        ) -> RenderStatus {
            let status = self.inner.process(frame_count, buffer_offset, input, output);
            self.entered.store(true, Ordering::Release);
            thread::sleep(Duration::from_millis(200));
            self.finished.store(true, Ordering::Release);
            status
        }

        fn reset(&self) {
            self.inner.reset()
        }

        fn is_bypassed(&self) -> bool {
            self.inner.is_bypassed()
        }

        fn set_bypass(&self, bypassed: bool) {
            self.inner.set_bypass(bypassed)
        }

        fn latency(&self) -> f64 {
            self.inner.latency()
        }

        fn parameter(&self, address: ParameterAddress) -> ParameterValue {
            self.inner.parameter(address)
        }

        fn set_parameter(&self, address: ParameterAddress, value: ParameterValue) {
            self.inner.set_parameter(address, value)
        }

        fn drain(&self) {
            self.inner.drain()
        }

        fn shutdown(&self) {
            self.inner.shutdown()
        }
    }

    fn create() -> KernelHandlePtr {
        test_support::register();
        let handle = hesuvi_kernel_create();
        assert!(!handle.is_null());
        handle
    }

    #[test]
    fn test_null_handle_is_harmless() {
        let null = ptr::null_mut();
        assert_eq!(
            hesuvi_kernel_init(null, 2, 2, 48_000.0, 512),
            os_status::K_AUDIO_UNIT_ERR_INVALID_PARAMETER
        );
        assert_eq!(
            hesuvi_kernel_process(null, 64, 0),
            os_status::K_AUDIO_UNIT_ERR_INVALID_PARAMETER
        );
        assert_eq!(
            hesuvi_kernel_set_buffers(null, ptr::null(), ptr::null_mut()),
            os_status::K_AUDIO_UNIT_ERR_INVALID_PARAMETER
        );
        hesuvi_kernel_reset(null);
        hesuvi_kernel_set_bypass(null, true);
        assert!(!hesuvi_kernel_is_bypassed(null));
        assert_eq!(hesuvi_kernel_latency(null), 0.0);
        hesuvi_kernel_set_parameter(null, 0, 1.0);
        assert_eq!(hesuvi_kernel_parameter(null, 0), 0.0);
        hesuvi_kernel_drain(null);
        hesuvi_kernel_destroy(null);
    }

    #[test]
    fn test_init_validation() {
        let handle = create();
        assert_eq!(
            hesuvi_kernel_init(handle, 2, 2, 0.0, 512),
            os_status::K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE
        );
        assert_eq!(
            hesuvi_kernel_init(handle, 2, 2, 768_000.0, 512),
            os_status::K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE
        );
        assert_eq!(
            hesuvi_kernel_init(handle, 2, 2, f64::NAN, 512),
            os_status::K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE
        );
        assert_eq!(
            hesuvi_kernel_init(handle, 2, 2, 48_000.0, 0),
            os_status::K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE
        );
        assert_eq!(
            hesuvi_kernel_init(handle, 2, 2, 48_000.0, 16_384),
            os_status::K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE
        );

        assert_eq!(hesuvi_kernel_init(handle, 2, 2, 48_000.0, 512), os_status::NO_ERR);
        assert_eq!(
            hesuvi_kernel_init(handle, 2, 2, 48_000.0, 512),
            os_status::K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT
        );
        hesuvi_kernel_destroy(handle);
    }

    #[test]
    fn test_process_before_init() {
        let handle = create();
        assert_eq!(
            hesuvi_kernel_process(handle, 64, 0),
            os_status::K_AUDIO_UNIT_ERR_UNINITIALIZED
        );
        hesuvi_kernel_destroy(handle);
    }

    #[test]
    fn test_render_round_trip() {
        let handle = create();
        assert_eq!(hesuvi_kernel_init(handle, 2, 2, 48_000.0, 512), os_status::NO_ERR);

        let mut ins = [vec![1.0f32, 2.0, 3.0, 4.0], vec![5.0f32, 6.0, 7.0, 8.0]];
        let mut outs = [vec![0.0f32; 4], vec![0.0f32; 4]];
        let mut in_list = FixedList::new(&mut ins);
        let mut out_list = FixedList::new(&mut outs);

        assert_eq!(
            hesuvi_kernel_set_buffers(handle, in_list.as_mut_list(), out_list.as_mut_list()),
            os_status::NO_ERR
        );
        assert_eq!(hesuvi_kernel_process(handle, 4, 0), os_status::NO_ERR);

        // GainEngine: both outputs carry half the channel sum.
        let expected = vec![3.0f32, 4.0, 5.0, 6.0];
        assert_eq!(outs[0], expected);
        assert_eq!(outs[1], expected);

        hesuvi_kernel_set_bypass(handle, true);
        assert!(hesuvi_kernel_is_bypassed(handle));
        assert_eq!(hesuvi_kernel_process(handle, 4, 0), os_status::NO_ERR);
        assert_eq!(outs, ins);

        hesuvi_kernel_destroy(handle);
    }

    #[test]
    fn test_process_rejects_oversized_render() {
        let handle = create();
        assert_eq!(hesuvi_kernel_init(handle, 0, 0, 48_000.0, 64), os_status::NO_ERR);
        assert_eq!(
            hesuvi_kernel_process(handle, 65, 0),
            os_status::K_AUDIO_UNIT_ERR_TOO_MANY_FRAMES_TO_PROCESS
        );
        assert_eq!(hesuvi_kernel_process(handle, 64, 0), os_status::NO_ERR);
        hesuvi_kernel_destroy(handle);
    }

    #[test]
    fn test_short_buffers_skip() {
        let handle = create();
        assert_eq!(hesuvi_kernel_init(handle, 1, 1, 48_000.0, 512), os_status::NO_ERR);

        let mut ins = [vec![1.0f32; 8]];
        let mut outs = [vec![9.0f32; 8]];
        let mut in_list = FixedList::new(&mut ins);
        let mut out_list = FixedList::new(&mut outs);
        hesuvi_kernel_set_buffers(handle, in_list.as_mut_list(), out_list.as_mut_list());

        assert_eq!(
            hesuvi_kernel_process(handle, 8, 4),
            os_status::K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT
        );
        assert_eq!(outs[0], vec![9.0f32; 8]);
        hesuvi_kernel_destroy(handle);
    }

    #[test]
    fn test_drain_then_destroy() {
        let handle = create();
        assert_eq!(hesuvi_kernel_init(handle, 0, 0, 48_000.0, 64), os_status::NO_ERR);
        hesuvi_kernel_drain(handle);
        assert_eq!(
            hesuvi_kernel_process(handle, 16, 0),
            os_status::K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT
        );
        hesuvi_kernel_destroy(handle);
    }

    #[test]
    fn test_stubs_through_bridge() {
        let handle = create();
        assert_eq!(hesuvi_kernel_latency(handle), 0.0);
        hesuvi_kernel_set_parameter(handle, 1, 0.5);
        assert_eq!(hesuvi_kernel_parameter(handle, 1), 0.0);
        hesuvi_kernel_reset(handle);
        hesuvi_kernel_destroy(handle);
    }

    #[test]
    fn test_handle_usable_from_render_thread() {
        let handle = create();
        assert_eq!(hesuvi_kernel_init(handle, 0, 0, 48_000.0, 64), os_status::NO_ERR);

        // Raw pointers aren't Send; pass the address.
        let address = handle as usize;
        let (tx, rx) = mpsc::channel();
        let render = thread::spawn(move || {
            let handle = address as KernelHandlePtr;
            tx.send(hesuvi_kernel_process(handle, 32, 0)).unwrap();
        });
        render.join().unwrap();
        assert_eq!(rx.recv().unwrap(), os_status::NO_ERR);

        hesuvi_kernel_destroy(handle);
    }

    #[test]
    fn test_destroy_waits_for_in_flight_render() {
        let entered = Arc::new(AtomicBool::new(false));
        let finished = Arc::new(AtomicBool::new(false));
        let kernel = LingeringKernel {
            inner: crate::instance::boxed_kernel::<test_support::GainEngine>(DEFAULT_IMPULSE),
            entered: Arc::clone(&entered),
            finished: Arc::clone(&finished),
        };
        let handle = Box::into_raw(Box::new(KernelHandle::new(Box::new(kernel))));
        assert_eq!(hesuvi_kernel_init(handle, 0, 0, 48_000.0, 64), os_status::NO_ERR);

        let address = handle as usize;
        let render = thread::spawn(move || {
            hesuvi_kernel_process(address as KernelHandlePtr, 32, 0)
        });
        while !entered.load(Ordering::Acquire) {
            thread::yield_now();
        }

        hesuvi_kernel_destroy(handle);
        assert!(finished.load(Ordering::Acquire));
        assert_eq!(render.join().unwrap(), os_status::NO_ERR);
    }
}
