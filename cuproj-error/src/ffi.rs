use std::os::raw::{c_char, c_int, c_void};

// CUDA runtime API (libcudart). cudaError_t is a C enum, passed as int.
#[allow(non_snake_case)]
extern "C" {
    pub fn cudaGetLastError() -> c_int;
    pub fn cudaPeekAtLastError() -> c_int;

    pub fn cudaGetErrorName(error: c_int) -> *const c_char;
    pub fn cudaGetErrorString(error: c_int) -> *const c_char;

    pub fn cudaStreamSynchronize(stream: *mut c_void) -> c_int;
}
