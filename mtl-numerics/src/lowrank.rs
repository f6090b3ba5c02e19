//! Truncated-SVD rank-r approximation

use mdarray::DTensor;

use crate::error::NumericsError;
use crate::gemm::matmul_par;
use crate::svd::{compute_svd, RealSvd};

/// Best rank-r approximation of a matrix in Frobenius norm (Eckart-Young)
///
/// Computes the economy SVD of `x` and sums its first `r` rank-1 terms,
/// ordered by descending singular value. `r` must satisfy `1 <= r <= min(m, n)`.
///
/// If `x` is rank-deficient and some of the retained singular values are zero,
/// those terms contribute nothing and the result has effective rank below `r`;
/// this is not an error.
pub fn low_rank_approx(x: &DTensor<f64, 2>, r: usize) -> Result<DTensor<f64, 2>, NumericsError> {
    let (m, n) = *x.shape();
    let max_rank = m.min(n);
    if r < 1 || r > max_rank {
        return Err(NumericsError::InvalidRank { r, max: max_rank });
    }

    let svd = compute_svd(x)?;
    Ok(reconstruct_truncated(&svd, r))
}

/// Sum of the first `r` rank-1 terms of a precomputed decomposition
///
/// Caller guarantees `r <= svd.s.len()`.
pub(crate) fn reconstruct_truncated(svd: &RealSvd, r: usize) -> DTensor<f64, 2> {
    let (m, _) = *svd.u.shape();
    let (_, n) = *svd.vt.shape();

    // U_r * diag(s_r) folded into one pass, then a single product with Vt_r
    let u_scaled = DTensor::<f64, 2>::from_fn([m, r], |idx| svd.u[idx] * svd.s[idx[1]]);
    let vt_top = DTensor::<f64, 2>::from_fn([r, n], |idx| svd.vt[idx]);

    matmul_par(&u_scaled, &vt_top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::norms::frobenius_norm;
    use crate::svd::effective_rank;
    use approx::assert_abs_diff_eq;
    use mdarray::tensor;

    #[test]
    fn test_rank_bound_validation() {
        let x: DTensor<f64, 2> = tensor![[1.0, 2.0], [3.0, 4.0]];

        assert!(matches!(
            low_rank_approx(&x, 0),
            Err(NumericsError::InvalidRank { r: 0, max: 2 })
        ));
        assert!(matches!(
            low_rank_approx(&x, 3),
            Err(NumericsError::InvalidRank { r: 3, max: 2 })
        ));
    }

    #[test]
    fn test_full_rank_reproduces_input() {
        let x: DTensor<f64, 2> = tensor![[1.0, 2.0], [3.0, 4.0]];
        let z = low_rank_approx(&x, 2).unwrap();

        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(z[[i, j]], x[[i, j]], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_identity_rank_two() {
        // 4x4 identity truncated to rank 2: two unit directions survive,
        // Frobenius norm sqrt(2)
        let x = DTensor::<f64, 2>::from_fn([4, 4], |idx| if idx[0] == idx[1] { 1.0 } else { 0.0 });
        let z = low_rank_approx(&x, 2).unwrap();

        assert_eq!(effective_rank(&z, 1e-12).unwrap(), 2);
        assert_abs_diff_eq!(frobenius_norm(&z), 2.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_rank_deficient_input() {
        // Rank-1 input approximated at r=2 stays rank 1 and reproduces the input
        let x = DTensor::<f64, 2>::from_fn([3, 3], |idx| (idx[0] + 1) as f64 * (idx[1] + 1) as f64);
        let z = low_rank_approx(&x, 2).unwrap();

        assert_eq!(effective_rank(&z, 1e-12).unwrap(), 1);
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(z[[i, j]], x[[i, j]], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_non_square_input() {
        let x: DTensor<f64, 2> = tensor![[1.0, 0.0, 2.0], [0.0, 3.0, 0.0]];
        let z = low_rank_approx(&x, 1).unwrap();

        assert_eq!(*z.shape(), (2, 3));
        assert!(effective_rank(&z, 1e-12).unwrap() <= 1);
    }
}
