//! Vector and matrix norm computations

use mdarray::DTensor;

/// Compute the 2-norm (Euclidean norm) of a coefficient vector
pub fn norm_2(vec: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &val in vec {
        sum += val * val;
    }
    sum.sqrt()
}

/// Compute the Frobenius norm of a matrix
pub fn frobenius_norm(mat: &DTensor<f64, 2>) -> f64 {
    let (m, n) = *mat.shape();
    let mut sum = 0.0;
    for i in 0..m {
        for j in 0..n {
            let val = mat[[i, j]];
            sum += val * val;
        }
    }
    sum.sqrt()
}
