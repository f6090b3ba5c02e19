//! Economy SVD through the Faer backend
//!
//! The rest of the crate treats the singular value decomposition as an
//! external primitive; this module is the single place that calls into
//! mdarray-linalg.

use mdarray::DTensor;

use crate::error::NumericsError;

/// Economy-mode SVD of a real matrix: A = U * diag(s) * V^T
#[derive(Debug, Clone)]
pub struct RealSvd {
    /// Left singular vectors (m, min_dim)
    pub u: DTensor<f64, 2>,
    /// Singular values (min_dim,), non-negative and descending
    pub s: Vec<f64>,
    /// Right singular vectors, transposed (min_dim, n)
    pub vt: DTensor<f64, 2>,
}

/// Compute the economy SVD of a real matrix
///
/// Backend failures are surfaced as [`NumericsError::Backend`] instead of a
/// panic so that iterative callers can report where the decomposition broke.
pub fn compute_svd(matrix: &DTensor<f64, 2>) -> Result<RealSvd, NumericsError> {
    use mdarray_linalg::prelude::SVD;
    use mdarray_linalg::svd::SVDDecomp;
    use mdarray_linalg_faer::Faer;

    let (m, n) = *matrix.shape();
    if m == 0 || n == 0 {
        return Err(NumericsError::EmptyMatrix);
    }

    let mut a = matrix.clone();
    let SVDDecomp { u, s, vt } = Faer
        .svd(&mut *a)
        .map_err(|e| NumericsError::Backend(format!("{:?}", e)))?;

    // Singular values live in the first row of the returned tensor
    let min_dim = s.shape().0.min(s.shape().1);
    let s_vec: Vec<f64> = (0..min_dim).map(|i| s[[0, i]]).collect();

    Ok(RealSvd { u, s: s_vec, vt })
}

/// Compute only the singular values of a real matrix
pub fn singular_values(matrix: &DTensor<f64, 2>) -> Result<Vec<f64>, NumericsError> {
    Ok(compute_svd(matrix)?.s)
}

/// Count singular values above `rtol * max(s)`
///
/// A zero spectrum has rank 0 regardless of tolerance.
pub fn rank_from_singular_values(s: &[f64], rtol: f64) -> usize {
    let max_sv = s.first().copied().unwrap_or(0.0);
    if max_sv == 0.0 {
        return 0;
    }

    let threshold = max_sv * rtol;
    let mut rank = 0;
    for &sv in s {
        if sv > threshold {
            rank += 1;
        } else {
            break;
        }
    }
    rank
}

/// Effective rank of a matrix at relative tolerance `rtol`
pub fn effective_rank(matrix: &DTensor<f64, 2>, rtol: f64) -> Result<usize, NumericsError> {
    let s = singular_values(matrix)?;
    Ok(rank_from_singular_values(&s, rtol))
}
