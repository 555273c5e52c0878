#[cfg(feature = "cuda")]
use std::env;
#[cfg(feature = "cuda")]
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CUDA_PATH");

    // Without the `cuda` feature only the simulated runtime is built and
    // nothing needs linking.
    #[cfg(feature = "cuda")]
    link_cuda_runtime();
}

#[cfg(feature = "cuda")]
fn link_cuda_runtime() {
    let cuda_root = find_cuda_root().unwrap_or_else(|| {
        panic!(
            "CUDA toolkit not found. Set CUDA_PATH or put nvcc in PATH.\n\
             Download from: https://developer.nvidia.com/cuda-downloads"
        )
    });

    println!("cargo:warning=Linking CUDA runtime from: {}", cuda_root.display());

    for lib_dir in ["lib64", "lib", "targets/x86_64-linux/lib"] {
        let path = cuda_root.join(lib_dir);
        if path.exists() {
            println!("cargo:rustc-link-search=native={}", path.display());
        }
    }

    println!("cargo:rustc-link-lib=cudart");
}

/// Toolkit root: `CUDA_PATH` if set, otherwise two levels above `nvcc`.
#[cfg(feature = "cuda")]
fn find_cuda_root() -> Option<PathBuf> {
    if let Ok(cuda_path) = env::var("CUDA_PATH") {
        return Some(PathBuf::from(cuda_path));
    }

    if let Ok(nvcc) = which::which("nvcc") {
        // <root>/bin/nvcc
        if let Some(root) = nvcc.parent().and_then(|bin| bin.parent()) {
            return Some(root.to_path_buf());
        }
    }

    ["/usr/local/cuda", "/opt/cuda"]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}
