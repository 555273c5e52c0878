//! In-process stand-in for the CUDA runtime.
//!
//! Models the last-error slot so error paths can be exercised on machines
//! without a GPU. Errors are never sticky: `get_last_error` always clears.

use std::borrow::Cow;
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::runtime::{CudaRuntime, CudaStream};
use crate::status::CudaStatus;

#[derive(Debug)]
pub struct SimulatedRuntime {
    pending: Mutex<CudaStatus>,
    syncs: AtomicUsize,
}

impl SimulatedRuntime {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(CudaStatus::SUCCESS),
            syncs: AtomicUsize::new(0),
        }
    }

    /// Simulate a runtime call that returns `status`.
    ///
    /// Like the real runtime, a failing call also records its status in the
    /// last-error slot.
    pub fn call(&self, status: CudaStatus) -> CudaStatus {
        if !status.is_success() {
            self.set_pending(status);
        }
        status
    }

    /// Simulate a failure from earlier asynchronous work (a kernel launch or
    /// async copy) that has not been observed yet.
    pub fn set_pending(&self, status: CudaStatus) {
        *self.slot() = status;
    }

    /// Number of `stream_synchronize` calls so far.
    pub fn sync_count(&self) -> usize {
        self.syncs.load(Ordering::Relaxed)
    }

    fn slot(&self) -> MutexGuard<'_, CudaStatus> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SimulatedRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl CudaRuntime for SimulatedRuntime {
    fn get_last_error(&self) -> CudaStatus {
        mem::replace(&mut *self.slot(), CudaStatus::SUCCESS)
    }

    fn peek_at_last_error(&self) -> CudaStatus {
        *self.slot()
    }

    fn error_name(&self, status: CudaStatus) -> Cow<'static, str> {
        Cow::Borrowed(status.known_name())
    }

    fn error_string(&self, status: CudaStatus) -> Cow<'static, str> {
        Cow::Borrowed(status.known_description())
    }

    fn stream_synchronize(&self, _stream: CudaStream) -> CudaStatus {
        self.syncs.fetch_add(1, Ordering::Relaxed);
        // Pending asynchronous failures surface at the synchronization point.
        *self.slot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clean() {
        let rt = SimulatedRuntime::new();
        assert_eq!(rt.peek_at_last_error(), CudaStatus::SUCCESS);
        assert_eq!(rt.sync_count(), 0);
    }

    #[test]
    fn test_failed_call_sets_slot() {
        let rt = SimulatedRuntime::new();
        assert_eq!(rt.call(CudaStatus::INVALID_VALUE), CudaStatus::INVALID_VALUE);
        assert_eq!(rt.peek_at_last_error(), CudaStatus::INVALID_VALUE);
    }

    #[test]
    fn test_successful_call_keeps_slot() {
        let rt = SimulatedRuntime::new();
        rt.set_pending(CudaStatus::LAUNCH_FAILURE);
        rt.call(CudaStatus::SUCCESS);
        assert_eq!(rt.peek_at_last_error(), CudaStatus::LAUNCH_FAILURE);
    }

    #[test]
    fn test_get_clears_peek_does_not() {
        let rt = SimulatedRuntime::new();
        rt.set_pending(CudaStatus::ILLEGAL_ADDRESS);
        assert_eq!(rt.peek_at_last_error(), CudaStatus::ILLEGAL_ADDRESS);
        assert_eq!(rt.peek_at_last_error(), CudaStatus::ILLEGAL_ADDRESS);
        assert_eq!(rt.get_last_error(), CudaStatus::ILLEGAL_ADDRESS);
        assert_eq!(rt.get_last_error(), CudaStatus::SUCCESS);
    }

    #[test]
    fn test_synchronize_reports_pending() {
        let rt = SimulatedRuntime::new();
        assert!(rt.stream_synchronize(CudaStream::DEFAULT).is_success());
        rt.set_pending(CudaStatus::ASSERT);
        assert_eq!(rt.stream_synchronize(CudaStream::DEFAULT), CudaStatus::ASSERT);
        assert_eq!(rt.sync_count(), 2);
    }

    #[test]
    fn test_names_come_from_status_table() {
        let rt = SimulatedRuntime::new();
        assert_eq!(rt.error_name(CudaStatus::MEMORY_ALLOCATION), "cudaErrorMemoryAllocation");
        assert_eq!(rt.error_string(CudaStatus::MEMORY_ALLOCATION), "out of memory");
    }
}
