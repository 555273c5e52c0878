//! Device backend of the dual-mode precondition check.
//!
//! Kernels cannot unwind, so a failed check prints through the device
//! `vprintf` and traps. The launch then fails and the host only sees it at
//! its next status check or stream synchronization.
//!
//! The argument buffer is built on every target so its layout is checked by
//! host tests; only the print-and-trap path is `nvptx64`-specific.

use core::panic::Location;

/// `cuProj assertion failed at: <file>:<line>: <condition>: <reason>`
pub(crate) const FORMAT: &[u8] = b"cuProj assertion failed at: %.*s:%u: %.*s: %.*s\n\0";

// vprintf reads its arguments from a buffer laid out like a C struct, each
// argument aligned to its own size. Field order follows FORMAT.
#[repr(C)]
pub(crate) struct AssertArgs {
    file_len: i32,
    file: *const u8,
    line: u32,
    condition_len: i32,
    condition: *const u8,
    reason_len: i32,
    reason: *const u8,
}

impl AssertArgs {
    pub(crate) fn new(location: &Location<'_>, condition: &str, reason: &str) -> Self {
        let file = location.file();
        Self {
            file_len: clamp_len(file.len()),
            file: file.as_ptr(),
            line: location.line(),
            condition_len: clamp_len(condition.len()),
            condition: condition.as_ptr(),
            reason_len: clamp_len(reason.len()),
            reason: reason.as_ptr(),
        }
    }
}

fn clamp_len(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

/// Print and abort the calling kernel if `condition` is false.
///
/// `condition_text` is the source of the checked expression, as passed by
/// [`cuproj_host_device_expects!`](crate::cuproj_host_device_expects).
#[cfg(target_arch = "nvptx64")]
#[track_caller]
#[inline]
pub fn assert(condition: bool, condition_text: &str, reason: &str) {
    if !condition {
        assert_failed(Location::caller(), condition_text, reason)
    }
}

#[cfg(target_arch = "nvptx64")]
#[cold]
#[inline(never)]
fn assert_failed(location: &Location<'_>, condition_text: &str, reason: &str) -> ! {
    use core::arch::nvptx;
    use core::ffi::c_void;

    let args = AssertArgs::new(location, condition_text, reason);
    unsafe {
        nvptx::vprintf(FORMAT.as_ptr(), &args as *const AssertArgs as *const c_void);
        nvptx::trap()
    }
}

/// Dual-mode precondition check, device backend.
#[cfg(target_arch = "nvptx64")]
#[macro_export]
macro_rules! cuproj_host_device_expects {
    ($cond:expr, $reason:expr $(,)?) => {
        $crate::device::assert($cond, ::core::stringify!($cond), $reason)
    };
}
