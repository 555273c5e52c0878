//! CUDA status checking.

use std::env;
use std::panic::Location;

use crate::error::CudaError;
use crate::runtime::{CudaRuntime, CudaStream};
use crate::status::CudaStatus;

/// Turn the status of a runtime call into a `Result`.
///
/// On failure the runtime's last-error slot is cleared first, so the same
/// error is not reported again by a later, unrelated check. The returned
/// error carries the caller's file and line.
///
/// ```
/// use cuproj_error::{try_call, CudaStatus, SimulatedRuntime};
///
/// let rt = SimulatedRuntime::new();
/// let err = try_call(&rt, rt.call(CudaStatus::MEMORY_ALLOCATION)).unwrap_err();
/// assert_eq!(err.code(), 2);
/// assert!(err.message().contains("out of memory"));
/// ```
#[track_caller]
pub fn try_call<R>(runtime: &R, status: CudaStatus) -> Result<(), CudaError>
where
    R: CudaRuntime + ?Sized,
{
    if status.is_success() {
        return Ok(());
    }

    let stale = runtime.get_last_error();
    if !stale.is_success() && stale != status {
        log::debug!("Discarded pending CUDA error {} while handling {}", stale, status);
    }

    let err = CudaError::new(
        Location::caller(),
        status,
        runtime.error_name(status),
        runtime.error_string(status),
    );
    log::error!("{}", err);
    Err(err)
}

/// How [`check_cuda_with`] looks for failures from asynchronous work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckMode {
    /// Block on the stream, then check. Failures are attributed to the
    /// operation that caused them, at the cost of serializing the stream.
    Synchronize,
    /// Only peek at the pending error. Never blocks, but a failure from
    /// asynchronous work may surface at a later, unrelated check.
    PeekOnly,
}

impl Default for CheckMode {
    /// `Synchronize` in debug builds, `PeekOnly` in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            CheckMode::Synchronize
        } else {
            CheckMode::PeekOnly
        }
    }
}

/// Check for failures from asynchronous work on `stream` using the build's
/// default [`CheckMode`].
///
/// Call after kernel launches and async copies.
#[track_caller]
pub fn check_cuda<R>(runtime: &R, stream: CudaStream) -> Result<(), CudaError>
where
    R: CudaRuntime + ?Sized,
{
    check_cuda_with(runtime, stream, CheckMode::default())
}

#[track_caller]
pub fn check_cuda_with<R>(
    runtime: &R,
    stream: CudaStream,
    mode: CheckMode,
) -> Result<(), CudaError>
where
    R: CudaRuntime + ?Sized,
{
    if mode == CheckMode::Synchronize {
        log::debug!("Synchronizing stream {:?} before error check", stream.as_raw());
        try_call(runtime, runtime.stream_synchronize(stream))?;
    }
    try_call(runtime, runtime.peek_at_last_error())
}

/// Runtime-selectable check behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckConfig {
    pub mode: CheckMode,
}

impl CheckConfig {
    /// Overrides the build default when set: `1`/`true`/`on` synchronize,
    /// `0`/`false`/`off` only peek.
    pub const ENV_VAR: &'static str = "CUPROJ_SYNC_CHECK";

    /// Build default, overridden by [`Self::ENV_VAR`].
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(Self::ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let mode = match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("1" | "true" | "on") => CheckMode::Synchronize,
            Some("0" | "false" | "off") => CheckMode::PeekOnly,
            Some(other) => {
                log::warn!("Ignoring unrecognized {}={:?}", Self::ENV_VAR, other);
                CheckMode::default()
            }
            None => CheckMode::default(),
        };
        Self { mode }
    }

    #[track_caller]
    pub fn check<R>(&self, runtime: &R, stream: CudaStream) -> Result<(), CudaError>
    where
        R: CudaRuntime + ?Sized,
    {
        check_cuda_with(runtime, stream, self.mode)
    }
}
