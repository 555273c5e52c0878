/**
 * Walk through both failure kinds on the simulated runtime.
 *
 * The last step lets a failure reach `main`, which prints the message to
 * stderr and exits non-zero.
 */

use std::process;

use cuproj_error::{
    check_cuda_with, cuproj_expects, try_call, CheckConfig, CheckMode, CudaRuntime, CudaStatus,
    CudaStream, CuprojError, SimulatedRuntime,
};

fn transform(
    rt: &SimulatedRuntime,
    points: &[f64],
    alloc: CudaStatus,
) -> Result<usize, CuprojError> {
    cuproj_expects!(!points.is_empty(), "input must contain at least one point");
    try_call(rt, rt.call(alloc))?;
    Ok(points.len())
}

fn run() -> Result<(), CuprojError> {
    let rt = SimulatedRuntime::new();
    let config = CheckConfig::from_env();
    println!("=== cuProj error paths (check mode: {:?}) ===\n", config.mode);

    println!("1. Valid input, successful allocation");
    println!("  Result: {:?}\n", transform(&rt, &[1.0, 2.0], CudaStatus::SUCCESS));

    println!("2. Empty input");
    if let Err(err) = transform(&rt, &[], CudaStatus::SUCCESS) {
        println!("  {:?}: {}\n", err.kind(), err);
    }

    println!("3. Allocation failure");
    if let Err(err) = transform(&rt, &[1.0], CudaStatus::MEMORY_ALLOCATION) {
        println!("  {:?}: {}", err.kind(), err);
        println!("  pending after failure: {}\n", rt.peek_at_last_error());
    }

    println!("4. Asynchronous failure, peek-only check");
    rt.set_pending(CudaStatus::LAUNCH_FAILURE);
    if let Err(err) = check_cuda_with(&rt, CudaStream::DEFAULT, CheckMode::PeekOnly) {
        println!("  {}\n", err);
    }

    println!("5. Uncaught failure");
    rt.set_pending(CudaStatus::ILLEGAL_ADDRESS);
    config.check(&rt, CudaStream::DEFAULT)?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}
