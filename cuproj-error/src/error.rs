use std::fmt;
use std::panic::Location;

use thiserror::Error;

use crate::format;
use crate::status::CudaStatus;

/// A violated precondition detected in host code.
///
/// Usually produced by [`expects`](crate::expects) or
/// [`cuproj_fail!`](crate::cuproj_fail) rather than built directly.
#[derive(Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LogicError {
    message: String,
}

impl LogicError {
    /// Failure at the caller's source location.
    #[track_caller]
    pub fn new(reason: impl AsRef<str>) -> Self {
        Self::at(Location::caller(), reason)
    }

    pub fn at(location: &Location<'_>, reason: impl AsRef<str>) -> Self {
        Self {
            message: format::logic_failure(location.file(), location.line(), reason.as_ref()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A non-success status returned by the CUDA runtime.
#[derive(Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CudaError {
    message: String,
    status: CudaStatus,
    name: String,
    description: String,
}

impl CudaError {
    pub fn new(
        location: &Location<'_>,
        status: CudaStatus,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let description = description.into();
        Self {
            message: format::cuda_failure(
                location.file(),
                location.line(),
                status,
                &name,
                &description,
            ),
            status,
            name,
            description,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> CudaStatus {
        self.status
    }

    pub fn code(&self) -> i32 {
        self.status.code()
    }

    /// Symbolic name, e.g. `cudaErrorMemoryAllocation`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runtime description, e.g. `out of memory`.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Which kind of failure a [`CuprojError`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller or programmer error.
    Logic,
    /// The CUDA runtime reported an error.
    Cuda,
}

/// Any failure raised by cuProj.
#[derive(Error, Clone, PartialEq, Eq)]
pub enum CuprojError {
    #[error(transparent)]
    Logic(#[from] LogicError),

    #[error(transparent)]
    Cuda(#[from] CudaError),
}

impl CuprojError {
    /// The fully formatted message, including file and line.
    pub fn message(&self) -> &str {
        match self {
            CuprojError::Logic(err) => err.message(),
            CuprojError::Cuda(err) => err.message(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CuprojError::Logic(_) => ErrorKind::Logic,
            CuprojError::Cuda(_) => ErrorKind::Cuda,
        }
    }
}

pub type Result<T> = std::result::Result<T, CuprojError>;

// `Debug` prints the formatted message as-is, so a failure returned from
// `main` reaches stderr exactly as built.
impl fmt::Debug for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Debug for CudaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Debug for CuprojError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_error_records_caller() {
        let (err, line) = (LogicError::new("bad input"), line!());
        assert!(err.message().contains(file!()));
        assert!(err.message().contains(&format!(":{line}: bad input")));
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn test_cuda_error_fields() {
        let err = CudaError::new(
            Location::caller(),
            CudaStatus::MEMORY_ALLOCATION,
            "cudaErrorMemoryAllocation",
            "out of memory",
        );
        assert_eq!(err.code(), 2);
        assert_eq!(err.status(), CudaStatus::MEMORY_ALLOCATION);
        assert_eq!(err.name(), "cudaErrorMemoryAllocation");
        assert_eq!(err.description(), "out of memory");
        assert!(err.message().ends_with(": 2 cudaErrorMemoryAllocation out of memory"));
    }

    #[test]
    fn test_common_type_exposes_message_and_kind() {
        let logic: CuprojError = LogicError::new("unreachable").into();
        assert_eq!(logic.kind(), ErrorKind::Logic);
        assert!(logic.message().ends_with("unreachable"));
        assert_eq!(logic.to_string(), logic.message());

        let cuda: CuprojError = CudaError::new(
            Location::caller(),
            CudaStatus::NO_DEVICE,
            "cudaErrorNoDevice",
            "no CUDA-capable device is detected",
        )
        .into();
        assert_eq!(cuda.kind(), ErrorKind::Cuda);
        assert_eq!(cuda.to_string(), cuda.message());
    }

    #[test]
    fn test_debug_prints_message_verbatim() {
        let logic = LogicError::new(r#"reason "quoted" \ path"#);
        assert_eq!(format!("{:?}", logic), logic.message());
        assert!(format!("{:?}", logic).ends_with(r#"reason "quoted" \ path"#));

        let cuda = CudaError::new(
            Location::caller(),
            CudaStatus::MEMORY_ALLOCATION,
            "cudaErrorMemoryAllocation",
            "out of memory",
        );
        assert_eq!(format!("{:?}", cuda), cuda.message());

        let wrapped: CuprojError = logic.clone().into();
        assert_eq!(format!("{:?}", wrapped), logic.message());
        let wrapped: CuprojError = cuda.clone().into();
        assert_eq!(format!("{:?}", wrapped), cuda.message());
    }
}
