//! OSStatus mapping for kernel errors.

use hesuvi_core::KernelError;

// OSStatus error codes returned across the C-ABI bridge
pub mod os_status {
    /// No error.
    pub const NO_ERR: i32 = 0;

    /// Invalid property value.
    pub const K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE: i32 = -10851;

    /// Invalid parameter.
    pub const K_AUDIO_UNIT_ERR_INVALID_PARAMETER: i32 = -10878;

    /// Uninitialized.
    pub const K_AUDIO_UNIT_ERR_UNINITIALIZED: i32 = -10867;

    /// Cannot do in current context.
    pub const K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT: i32 = -10863;

    /// Render operation failed.
    pub const K_AUDIO_UNIT_ERR_RENDER: i32 = -10877;

    /// Too many frames to process.
    pub const K_AUDIO_UNIT_ERR_TOO_MANY_FRAMES_TO_PROCESS: i32 = -10874;

    /// Invalid file.
    pub const K_AUDIO_UNIT_ERR_INVALID_FILE: i32 = -10871;
}

/// Conversion of kernel errors to the status codes the AU host understands.
pub trait ToOsStatus {
    fn to_os_status(&self) -> i32;
}

impl ToOsStatus for KernelError {
    fn to_os_status(&self) -> i32 {
        match self {
            KernelError::InvalidConfiguration(_) => {
                os_status::K_AUDIO_UNIT_ERR_INVALID_PROPERTY_VALUE
            }
            KernelError::ResourceLoad(_) => os_status::K_AUDIO_UNIT_ERR_INVALID_FILE,
            KernelError::InvalidState(_) => {
                os_status::K_AUDIO_UNIT_ERR_CANNOT_DO_IN_CURRENT_CONTEXT
            }
        }
    }
}
