//! Host-side precondition checks.
//!
//! The functions return the failure; the `cuproj_*!` macros return it from
//! the enclosing function, converting into that function's error type.
//!
//! ```
//! use cuproj_error::{cuproj_expects, cuproj_fail, CuprojError, ErrorKind};
//!
//! fn scale(factor: f64) -> Result<f64, CuprojError> {
//!     cuproj_expects!(factor.is_finite(), "scale factor must be finite");
//!     if factor == 0.0 {
//!         cuproj_fail!("zero scale reached projection kernel");
//!     }
//!     Ok(1.0 / factor)
//! }
//!
//! assert_eq!(scale(2.0).unwrap(), 0.5);
//! assert_eq!(scale(f64::NAN).unwrap_err().kind(), ErrorKind::Logic);
//! assert!(scale(0.0).unwrap_err().message().ends_with("zero scale reached projection kernel"));
//! ```

use crate::error::LogicError;

/// Check a precondition, failing with the caller's file and line.
#[track_caller]
#[inline]
pub fn expects(condition: bool, reason: &str) -> Result<(), LogicError> {
    if condition {
        Ok(())
    } else {
        Err(LogicError::new(reason))
    }
}

/// Always fails. Marks a code path that should be unreachable.
///
/// Host only: there is no device counterpart.
#[track_caller]
#[cold]
pub fn fail<T>(reason: &str) -> Result<T, LogicError> {
    Err(LogicError::new(reason))
}

/// Host backend of the dual-mode check; identical to [`expects`].
///
/// Code shared with kernels should use
/// [`cuproj_host_device_expects!`](crate::cuproj_host_device_expects), which
/// switches to the device assertion when compiled for `nvptx64`.
#[track_caller]
#[inline]
pub fn host_device_expects(condition: bool, reason: &str) -> Result<(), LogicError> {
    expects(condition, reason)
}

/// Return a [`LogicError`] from the enclosing function if `cond` is false.
///
/// The error is converted with `From`, so the enclosing function may return
/// `Result<_, LogicError>`, `Result<_, CuprojError>` or anything else that
/// converts from `LogicError`.
#[macro_export]
macro_rules! cuproj_expects {
    ($cond:expr, $reason:expr $(,)?) => {
        if let ::core::result::Result::Err(err) = $crate::expects($cond, $reason) {
            return ::core::result::Result::Err(::core::convert::From::from(err));
        }
    };
}

/// Return a [`LogicError`] from the enclosing function unconditionally.
#[macro_export]
macro_rules! cuproj_fail {
    ($reason:expr $(,)?) => {
        return ::core::result::Result::Err(::core::convert::From::from(
            $crate::LogicError::new($reason),
        ))
    };
}

/// Dual-mode precondition check.
///
/// On the host this is [`cuproj_expects!`]. When compiled for a device
/// target a failed check prints the reason and aborts the kernel instead.
#[cfg(not(target_arch = "nvptx64"))]
#[macro_export]
macro_rules! cuproj_host_device_expects {
    ($cond:expr, $reason:expr $(,)?) => {
        $crate::cuproj_expects!($cond, $reason)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CuprojError, ErrorKind};

    #[test]
    fn test_true_condition_passes() {
        assert!(expects(2 + 2 == 4, "math is broken").is_ok());
        assert!(host_device_expects(true, "unused").is_ok());
    }

    #[test]
    fn test_false_condition_reports_location() {
        let (result, line) = (expects(2 + 2 == 5, "math is broken"), line!());
        let err = result.unwrap_err();
        assert!(err.message().contains("math is broken"));
        assert!(err.message().contains(&format!("{}:{}:", file!(), line)));
    }

    #[test]
    fn test_fail_always_errors() {
        let result: Result<u32, _> = fail("X");
        assert!(result.unwrap_err().message().ends_with(": X"));
    }

    #[test]
    fn test_same_site_is_deterministic() {
        let messages: Vec<String> = (0..2)
            .map(|_| expects(false, "reason-X").unwrap_err().message().to_owned())
            .collect();
        assert_eq!(messages[0], messages[1]);
    }

    #[test]
    fn test_macros_return_early() {
        fn guarded(ok: bool, reached: &mut bool) -> Result<(), CuprojError> {
            cuproj_expects!(ok, "guard");
            *reached = true;
            Ok(())
        }

        let mut reached = false;
        let err = guarded(false, &mut reached).unwrap_err();
        assert!(!reached);
        assert_eq!(err.kind(), ErrorKind::Logic);

        assert!(guarded(true, &mut reached).is_ok());
        assert!(reached);
    }

    #[test]
    fn test_fail_macro_location() {
        fn unreachable_variant() -> Result<(), LogicError> {
            cuproj_fail!("Non-arithmetic operation is not supported");
        }

        let err = unreachable_variant().unwrap_err();
        assert!(err.message().starts_with("cuProj failure at: "));
        assert!(err.message().contains(file!()));
    }
}
