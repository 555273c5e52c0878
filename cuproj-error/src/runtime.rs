//! The slice of the CUDA runtime API that error checking relies on.

use std::borrow::Cow;
use std::os::raw::c_void;
use std::ptr;

use crate::status::CudaStatus;

/// A `cudaStream_t` handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CudaStream(*mut c_void);

impl CudaStream {
    /// The legacy default stream.
    pub const DEFAULT: Self = Self(ptr::null_mut());

    /// # Safety
    ///
    /// `raw` must be null or a stream handle that stays valid for as long as
    /// this value is passed to a runtime.
    pub const unsafe fn from_raw(raw: *mut c_void) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> *mut c_void {
        self.0
    }
}

impl Default for CudaStream {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Safety: a stream handle is an opaque token; the CUDA runtime is responsible
// for synchronizing access to the stream it names.
unsafe impl Send for CudaStream {}
unsafe impl Sync for CudaStream {}

/// Runtime calls used by [`try_call`](crate::try_call) and
/// [`check_cuda`](crate::check_cuda).
///
/// The last-error slot behind `get_last_error` / `peek_at_last_error` is
/// global to the process and device. Implementations do not lock around it;
/// callers sharing a device across host threads must serialize checks.
pub trait CudaRuntime {
    /// Return the pending error and reset the slot to success.
    fn get_last_error(&self) -> CudaStatus;

    /// Return the pending error without resetting it.
    fn peek_at_last_error(&self) -> CudaStatus;

    fn error_name(&self, status: CudaStatus) -> Cow<'static, str>;

    fn error_string(&self, status: CudaStatus) -> Cow<'static, str>;

    /// Block until all work queued on `stream` has completed.
    fn stream_synchronize(&self, stream: CudaStream) -> CudaStatus;
}

impl<R: CudaRuntime + ?Sized> CudaRuntime for &R {
    fn get_last_error(&self) -> CudaStatus {
        (**self).get_last_error()
    }

    fn peek_at_last_error(&self) -> CudaStatus {
        (**self).peek_at_last_error()
    }

    fn error_name(&self, status: CudaStatus) -> Cow<'static, str> {
        (**self).error_name(status)
    }

    fn error_string(&self, status: CudaStatus) -> Cow<'static, str> {
        (**self).error_string(status)
    }

    fn stream_synchronize(&self, stream: CudaStream) -> CudaStatus {
        (**self).stream_synchronize(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stream_is_null() {
        assert!(CudaStream::DEFAULT.as_raw().is_null());
        assert_eq!(CudaStream::default(), CudaStream::DEFAULT);
    }
}
