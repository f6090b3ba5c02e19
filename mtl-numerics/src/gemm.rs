//! Matrix multiplication wrapper (Faer backend)
//!
//! Thin wrapper around the pure-Rust Faer matrix product so the rest of the
//! crate never talks to the backend directly.

use mdarray::DTensor;
use mdarray_linalg::matmul::{MatMul, MatMulBuilder};
use mdarray_linalg_faer::Faer;

/// Parallel matrix multiplication: C = A * B
///
/// # Panics
/// Panics if matrix dimensions are incompatible (A.cols != B.rows)
pub fn matmul_par(a: &DTensor<f64, 2>, b: &DTensor<f64, 2>) -> DTensor<f64, 2> {
    let (_, k) = *a.shape();
    let (k2, _) = *b.shape();
    assert_eq!(
        k, k2,
        "Matrix dimension mismatch: A.cols ({}) != B.rows ({})",
        k, k2
    );

    Faer.matmul(a, b).parallelize().eval()
}
