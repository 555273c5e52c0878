/**
 * Check the default stream of the first CUDA device.
 *
 * Run with: cargo run --example device_check --features cuda
 */

use cuproj_error::{check_cuda, CheckConfig, CudaStream, Cudart};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = Cudart;

    println!("Checking default stream (build default mode)");
    check_cuda(&runtime, CudaStream::DEFAULT)?;
    println!("  ✓ no pending CUDA errors");

    let config = CheckConfig::from_env();
    println!("Checking default stream ({:?})", config.mode);
    config.check(&runtime, CudaStream::DEFAULT)?;
    println!("  ✓ no pending CUDA errors");

    Ok(())
}
