//! CUDA runtime status codes.

use std::fmt;

/// Name and description the runtime reports for codes it does not know.
pub const UNRECOGNIZED: &str = "unrecognized error code";

/// A `cudaError_t` value as returned by a CUDA runtime call.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CudaStatus(i32);

impl CudaStatus {
    pub const SUCCESS: Self = Self(0);
    pub const INVALID_VALUE: Self = Self(1);
    pub const MEMORY_ALLOCATION: Self = Self(2);
    pub const INITIALIZATION_ERROR: Self = Self(3);
    pub const CUDART_UNLOADING: Self = Self(4);
    pub const INVALID_CONFIGURATION: Self = Self(9);
    pub const INSUFFICIENT_DRIVER: Self = Self(35);
    pub const NO_DEVICE: Self = Self(100);
    pub const INVALID_RESOURCE_HANDLE: Self = Self(400);
    pub const NOT_READY: Self = Self(600);
    pub const ILLEGAL_ADDRESS: Self = Self(700);
    pub const LAUNCH_OUT_OF_RESOURCES: Self = Self(701);
    pub const ASSERT: Self = Self(710);
    pub const LAUNCH_FAILURE: Self = Self(719);
    pub const UNKNOWN: Self = Self(999);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Symbolic name (`cudaErrorMemoryAllocation`, ...) for well-known codes.
    pub fn known_name(self) -> &'static str {
        lookup(self).map_or(UNRECOGNIZED, |&(_, name, _)| name)
    }

    /// Human-readable description (`out of memory`, ...) for well-known codes.
    pub fn known_description(self) -> &'static str {
        lookup(self).map_or(UNRECOGNIZED, |&(_, _, description)| description)
    }
}

impl From<i32> for CudaStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for CudaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Strings match cudaGetErrorName / cudaGetErrorString.
const KNOWN: &[(CudaStatus, &str, &str)] = &[
    (CudaStatus::SUCCESS, "cudaSuccess", "no error"),
    (CudaStatus::INVALID_VALUE, "cudaErrorInvalidValue", "invalid argument"),
    (CudaStatus::MEMORY_ALLOCATION, "cudaErrorMemoryAllocation", "out of memory"),
    (CudaStatus::INITIALIZATION_ERROR, "cudaErrorInitializationError", "initialization error"),
    (CudaStatus::CUDART_UNLOADING, "cudaErrorCudartUnloading", "driver shutting down"),
    (
        CudaStatus::INVALID_CONFIGURATION,
        "cudaErrorInvalidConfiguration",
        "invalid configuration argument",
    ),
    (
        CudaStatus::INSUFFICIENT_DRIVER,
        "cudaErrorInsufficientDriver",
        "CUDA driver version is insufficient for CUDA runtime version",
    ),
    (CudaStatus::NO_DEVICE, "cudaErrorNoDevice", "no CUDA-capable device is detected"),
    (
        CudaStatus::INVALID_RESOURCE_HANDLE,
        "cudaErrorInvalidResourceHandle",
        "invalid resource handle",
    ),
    (CudaStatus::NOT_READY, "cudaErrorNotReady", "device not ready"),
    (
        CudaStatus::ILLEGAL_ADDRESS,
        "cudaErrorIllegalAddress",
        "an illegal memory access was encountered",
    ),
    (
        CudaStatus::LAUNCH_OUT_OF_RESOURCES,
        "cudaErrorLaunchOutOfResources",
        "too many resources requested for launch",
    ),
    (CudaStatus::ASSERT, "cudaErrorAssert", "device-side assert triggered"),
    (CudaStatus::LAUNCH_FAILURE, "cudaErrorLaunchFailure", "unspecified launch failure"),
    (CudaStatus::UNKNOWN, "cudaErrorUnknown", "unknown error"),
];

fn lookup(status: CudaStatus) -> Option<&'static (CudaStatus, &'static str, &'static str)> {
    KNOWN.iter().find(|(known, _, _)| *known == status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        assert!(CudaStatus::SUCCESS.is_success());
        assert!(!CudaStatus::MEMORY_ALLOCATION.is_success());
        assert_eq!(CudaStatus::from(0), CudaStatus::SUCCESS);
    }

    #[test]
    fn test_out_of_memory_strings() {
        let status = CudaStatus::new(2);
        assert_eq!(status.known_name(), "cudaErrorMemoryAllocation");
        assert_eq!(status.known_description(), "out of memory");
        assert_eq!(status.to_string(), "2");
    }

    #[test]
    fn test_unknown_code_is_unrecognized() {
        let status = CudaStatus::new(12345);
        assert_eq!(status.known_name(), UNRECOGNIZED);
        assert_eq!(status.known_description(), UNRECOGNIZED);
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        for (i, (a, _, _)) in KNOWN.iter().enumerate() {
            assert!(KNOWN[i + 1..].iter().all(|(b, _, _)| a != b), "duplicate code {a}");
        }
    }
}
