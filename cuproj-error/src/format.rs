//! Location-tagged failure messages.
//!
//! Both builders are pure: the same inputs always give the same string.

use crate::status::CudaStatus;

pub const LOGIC_FAILURE_PREFIX: &str = "cuProj failure at: ";
pub const CUDA_FAILURE_PREFIX: &str = "CUDA error encountered at: ";

/// `cuProj failure at: <file>:<line>: <reason>`
pub fn logic_failure(file: &str, line: u32, reason: &str) -> String {
    format!("{LOGIC_FAILURE_PREFIX}{file}:{line}: {reason}")
}

/// `CUDA error encountered at: <file>:<line>: <code> <name> <description>`
pub fn cuda_failure(
    file: &str,
    line: u32,
    status: CudaStatus,
    name: &str,
    description: &str,
) -> String {
    format!("{CUDA_FAILURE_PREFIX}{file}:{line}: {status} {name} {description}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_failure_layout() {
        assert_eq!(
            logic_failure("src/project.rs", 42, "Column type mismatch"),
            "cuProj failure at: src/project.rs:42: Column type mismatch"
        );
    }

    #[test]
    fn test_cuda_failure_layout() {
        assert_eq!(
            cuda_failure(
                "src/alloc.rs",
                7,
                CudaStatus::MEMORY_ALLOCATION,
                "cudaErrorMemoryAllocation",
                "out of memory"
            ),
            "CUDA error encountered at: src/alloc.rs:7: 2 cudaErrorMemoryAllocation out of memory"
        );
    }

    #[test]
    fn test_empty_reason() {
        assert_eq!(logic_failure("a.rs", 1, ""), "cuProj failure at: a.rs:1: ");
    }
}
