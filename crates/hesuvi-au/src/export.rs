//! Export macro for the kernel's Audio Unit entry points.
//!
//! The Objective-C `AUAudioUnit` subclass owns the host integration and calls
//! into Rust through the `hesuvi_kernel_*` functions in [`bridge`](crate::bridge).
//! Those functions build instances through the factory this macro registers.

/// Register the kernel factory for a convolution engine.
///
/// # Arguments
///
/// * `$engine` - The engine type implementing [`hesuvi_core::ConvolutionEngine`]
/// * `$impulse` - Optional constant [`hesuvi_core::ImpulseResource`]; defaults
///   to [`hesuvi_core::DEFAULT_IMPULSE`]
///
/// # Example
///
/// ```rust,ignore
/// use hesuvi_au::export_kernel;
/// use hesuvi_core::ImpulseResource;
///
/// export_kernel!(MyEngine);
///
/// // or with a different impulse response
/// export_kernel!(MyEngine, ImpulseResource::new("dh", "wav"));
/// ```
///
/// # Generated Symbols
///
/// ## `__HESUVI_KERNEL_INIT` (static)
///
/// A function pointer placed in the `__DATA,__mod_init_func` section on macOS,
/// so `dyld` registers the factory when the bundle is loaded, before the host
/// can call `hesuvi_kernel_create`.
///
/// ## `__hesuvi_kernel_manual_init()` (public function)
///
/// Performs the same registration. Test binaries don't go through `dyld`'s
/// initializer pass on every platform, so tests call this explicitly.
///
/// Only one kernel per binary is supported; later registrations are ignored.
#[macro_export]
macro_rules! export_kernel {
    ($engine:ty) => {
        $crate::export_kernel!($engine, $crate::hesuvi_core::DEFAULT_IMPULSE);
    };
    ($engine:ty, $impulse:expr) => {
        #[used]
        #[cfg_attr(target_os = "macos", link_section = "__DATA,__mod_init_func")]
        static __HESUVI_KERNEL_INIT: extern "C" fn() = {
            extern "C" fn __hesuvi_kernel_register() {
                $crate::factory::register_factory(|| {
                    $crate::instance::boxed_kernel::<$engine>($impulse)
                });
            }
            __hesuvi_kernel_register
        };

        #[doc(hidden)]
        pub fn __hesuvi_kernel_manual_init() {
            $crate::factory::register_factory(|| {
                $crate::instance::boxed_kernel::<$engine>($impulse)
            });
        }
    };
}
