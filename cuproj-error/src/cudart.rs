//! [`CudaRuntime`] backed by libcudart.

use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::c_char;

use crate::ffi;
use crate::runtime::{CudaRuntime, CudaStream};
use crate::status::{self, CudaStatus};

/// The CUDA runtime of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cudart;

impl CudaRuntime for Cudart {
    fn get_last_error(&self) -> CudaStatus {
        CudaStatus::new(unsafe { ffi::cudaGetLastError() })
    }

    fn peek_at_last_error(&self) -> CudaStatus {
        CudaStatus::new(unsafe { ffi::cudaPeekAtLastError() })
    }

    fn error_name(&self, status: CudaStatus) -> Cow<'static, str> {
        unsafe { static_str(ffi::cudaGetErrorName(status.code())) }
    }

    fn error_string(&self, status: CudaStatus) -> Cow<'static, str> {
        unsafe { static_str(ffi::cudaGetErrorString(status.code())) }
    }

    fn stream_synchronize(&self, stream: CudaStream) -> CudaStatus {
        CudaStatus::new(unsafe { ffi::cudaStreamSynchronize(stream.as_raw()) })
    }
}

/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that lives for the
/// rest of the process. cudart's error strings are static.
unsafe fn static_str(ptr: *const c_char) -> Cow<'static, str> {
    if ptr.is_null() {
        Cow::Borrowed(status::UNRECOGNIZED)
    } else {
        CStr::from_ptr(ptr).to_string_lossy()
    }
}
