//! Kernel factory registration.
//!
//! The factory is registered at module initialization time via the
//! `export_kernel!` macro and used by `hesuvi_kernel_create` to build
//! instances.

use std::sync::OnceLock;

use crate::instance::KernelInstance;

/// Factory function type for creating kernel instances.
pub type KernelFactory = fn() -> Box<dyn KernelInstance>;

/// Global factory storage (set by export_kernel! macro).
static KERNEL_FACTORY: OnceLock<KernelFactory> = OnceLock::new();

/// Register the kernel factory.
///
/// Only one kernel per binary is supported. Later registrations are ignored
/// with a warning and the first factory stays in place. Returns true if this
/// call registered the factory.
pub fn register_factory(factory: KernelFactory) -> bool {
    if KERNEL_FACTORY.set(factory).is_err() {
        log::warn!("Kernel factory already registered - only one kernel per binary is supported");
        return false;
    }
    log::debug!("Kernel factory registered");
    true
}

/// Create a new kernel instance using the registered factory.
///
/// Returns `None` if no factory has been registered.
pub fn create_instance() -> Option<Box<dyn KernelInstance>> {
    KERNEL_FACTORY.get().map(|factory| factory())
}

/// Check if a factory has been registered.
pub fn is_registered() -> bool {
    KERNEL_FACTORY.get().is_some()
}
