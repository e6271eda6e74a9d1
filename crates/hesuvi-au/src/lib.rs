//! # hesuvi-au
//!
//! Audio Unit render bridge for the HeSuVi DSP kernel.
//!
//! A thin Objective-C `AUAudioUnit` subclass handles macOS integration and
//! forwards its render block and lifecycle calls to the C-ABI functions in
//! [`bridge`]. This crate converts Core Audio buffer lists into the kernel's
//! borrowed buffer view and maps kernel errors to OSStatus codes.
//!
//! ```text
//! ConvolutionEngine impl
//!        ↓
//! DspKernel<E> (hesuvi-core)
//!        ↓
//! Box<dyn KernelInstance> (type erasure)
//!        ↓
//! C-ABI bridge (hesuvi_kernel_*)
//!        ↓
//! Objective-C AUAudioUnit subclass
//!        ↓
//! AU host (Logic Pro, GarageBand, etc.)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hesuvi_au::export_kernel;
//!
//! export_kernel!(MyConvolutionEngine);
//! ```
//!
//! ## Real-Time Safety
//!
//! - **Zero allocation**: channel handles are collected into storage sized at
//!   `hesuvi_kernel_init`
//! - **try_lock()**: the render path never blocks on the control path

pub mod bridge;
pub mod buffer_storage;
pub mod buffers;
pub mod error;
pub mod export;
pub mod factory;
pub mod instance;

#[cfg(test)]
mod test_support;

// Re-exported for export_kernel!
pub use hesuvi_core;

pub use bridge::{KernelHandle, KernelHandlePtr};
pub use buffers::{AudioBuffer, AudioBufferList};
pub use error::{os_status, ToOsStatus};
pub use instance::{boxed_kernel, KernelInstance};
