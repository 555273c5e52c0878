//! # cuProj error handling
//!
//! Failure reporting shared by every cuProj component.
//!
//! ## Features
//!
//! - Two failure kinds: [`LogicError`] for violated preconditions and
//!   [`CudaError`] for non-success CUDA runtime statuses, both wrapped by
//!   [`CuprojError`]
//! - Messages carry the call site's file and line, captured with
//!   `#[track_caller]`
//! - [`try_call`] and [`check_cuda`] translate runtime statuses and clear the
//!   runtime's last-error slot
//! - [`cuproj_host_device_expects!`] compiles to a returned error on the host
//!   and to a print-and-trap assertion on `nvptx64`
//!
//! The `cuda` feature links libcudart and provides [`Cudart`]. Without it,
//! [`SimulatedRuntime`] stands in for the runtime.
//!
//! ```
//! use cuproj_error::{check_cuda, try_call, CudaStatus, CudaStream, SimulatedRuntime};
//!
//! let rt = SimulatedRuntime::new();
//! try_call(&rt, rt.call(CudaStatus::SUCCESS)).unwrap();
//!
//! rt.set_pending(CudaStatus::LAUNCH_FAILURE);
//! let err = check_cuda(&rt, CudaStream::DEFAULT).unwrap_err();
//! assert_eq!(err.name(), "cudaErrorLaunchFailure");
//! ```

#![cfg_attr(target_arch = "nvptx64", no_std)]
#![cfg_attr(target_arch = "nvptx64", feature(stdarch_nvptx))]

#[cfg(not(target_arch = "nvptx64"))]
mod check;
#[cfg(all(feature = "cuda", not(target_arch = "nvptx64")))]
mod cudart;
#[cfg(target_arch = "nvptx64")]
pub mod device;
// Host builds keep the vprintf argument layout so tests can check it.
#[cfg(not(target_arch = "nvptx64"))]
#[allow(dead_code)]
mod device;
#[cfg(not(target_arch = "nvptx64"))]
mod error;
#[cfg(not(target_arch = "nvptx64"))]
mod expects;
#[cfg(all(feature = "cuda", not(target_arch = "nvptx64")))]
mod ffi;
#[cfg(not(target_arch = "nvptx64"))]
pub mod format;
#[cfg(not(target_arch = "nvptx64"))]
mod runtime;
#[cfg(not(target_arch = "nvptx64"))]
mod sim;
#[cfg(not(target_arch = "nvptx64"))]
mod status;

#[cfg(not(target_arch = "nvptx64"))]
pub use check::{check_cuda, check_cuda_with, try_call, CheckConfig, CheckMode};
#[cfg(all(feature = "cuda", not(target_arch = "nvptx64")))]
pub use cudart::Cudart;
#[cfg(not(target_arch = "nvptx64"))]
pub use error::{CudaError, CuprojError, ErrorKind, LogicError, Result};
#[cfg(not(target_arch = "nvptx64"))]
pub use expects::{expects, fail, host_device_expects};
#[cfg(not(target_arch = "nvptx64"))]
pub use runtime::{CudaRuntime, CudaStream};
#[cfg(not(target_arch = "nvptx64"))]
pub use sim::SimulatedRuntime;
#[cfg(not(target_arch = "nvptx64"))]
pub use status::{CudaStatus, UNRECOGNIZED};
