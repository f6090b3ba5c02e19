//! Vectorization and half-vectorization transforms
//!
//! Bidirectional mappings between matrices and compact 1-D coefficient
//! sequences, used to store symmetric covariance parameters. The `vech` pair
//! optionally rescales strictly-off-diagonal entries by sqrt(2) so that the
//! Euclidean norm of the coefficient vector matches the Frobenius norm of the
//! symmetric source matrix.
//!
//! `unvech` always mirrors the extracted triangle into a symmetric matrix;
//! for an asymmetric input to `vech`, the round trip reconstructs the matrix
//! implied by the upper triangle alone. That information loss is intentional.

use std::f64::consts::SQRT_2;

use mdarray::DTensor;

use crate::error::NumericsError;

/// Upper-triangle index pairs (row, col) of a `d x d` matrix, diagonal included
///
/// Traversal order is stable: ascending column-major when `cols_stacked`,
/// ascending row-major otherwise. The round-trip laws depend on this order.
fn triangular_indices(d: usize, cols_stacked: bool) -> Vec<(usize, usize)> {
    let mut idx = Vec::with_capacity(d * (d + 1) / 2);
    if cols_stacked {
        for c in 0..d {
            for r in 0..=c {
                idx.push((r, c));
            }
        }
    } else {
        for r in 0..d {
            for c in r..d {
                idx.push((r, c));
            }
        }
    }
    idx
}

/// Flatten a matrix into a coefficient vector
///
/// Stacks columns (Fortran order) when `stack_cols`, rows otherwise.
pub fn vec(x: &DTensor<f64, 2>, stack_cols: bool) -> Vec<f64> {
    let (m, n) = *x.shape();
    let mut v = Vec::with_capacity(m * n);
    if stack_cols {
        for c in 0..n {
            for r in 0..m {
                v.push(x[[r, c]]);
            }
        }
    } else {
        for r in 0..m {
            for c in 0..n {
                v.push(x[[r, c]]);
            }
        }
    }
    v
}

/// Reshape a coefficient vector back into a `d x d` matrix
///
/// The length must be a perfect square; `cols_stacked` must match the
/// stacking order used by [`vec`].
pub fn unvec(v: &[f64], cols_stacked: bool) -> Result<DTensor<f64, 2>, NumericsError> {
    let len = v.len();
    let d = (len as f64).sqrt().round() as usize;
    if d * d != len {
        return Err(NumericsError::InvalidLength {
            len,
            reason: "not a perfect square",
        });
    }

    Ok(DTensor::<f64, 2>::from_fn([d, d], |idx| {
        if cols_stacked {
            v[idx[1] * d + idx[0]]
        } else {
            v[idx[0] * d + idx[1]]
        }
    }))
}

/// Half-vectorize a square matrix: extract the upper triangle, diagonal included
///
/// Produces `d(d+1)/2` coefficients in the traversal order selected by
/// `stack_cols`. With `conserve_norm`, strictly-off-diagonal entries are
/// pre-scaled by sqrt(2), so that for symmetric input the 2-norm of the
/// result equals the Frobenius norm of the matrix.
pub fn vech(
    x: &DTensor<f64, 2>,
    stack_cols: bool,
    conserve_norm: bool,
) -> Result<Vec<f64>, NumericsError> {
    let (rows, cols) = *x.shape();
    if rows != cols {
        return Err(NumericsError::NotSquare { rows, cols });
    }

    let v = triangular_indices(rows, stack_cols)
        .into_iter()
        .map(|(r, c)| {
            let val = x[[r, c]];
            if conserve_norm && r != c {
                SQRT_2 * val
            } else {
                val
            }
        })
        .collect();
    Ok(v)
}

/// Rebuild a symmetric matrix from its half-vectorized form
///
/// The length must be a triangular number `d(d+1)/2`. The upper triangle is
/// restored in the traversal order selected by `cols_stacked` and mirrored
/// into the lower triangle; with `norm_conserved`, off-diagonal entries of
/// both triangles are divided by sqrt(2) to undo the forward scaling.
pub fn unvech(
    v: &[f64],
    cols_stacked: bool,
    norm_conserved: bool,
) -> Result<DTensor<f64, 2>, NumericsError> {
    let len = v.len();
    let d = ((((8 * len + 1) as f64).sqrt() - 1.0) / 2.0).round() as usize;
    if d * (d + 1) / 2 != len {
        return Err(NumericsError::InvalidLength {
            len,
            reason: "not a triangular number",
        });
    }

    let mut buf = vec![0.0; d * d];
    for (k, (r, c)) in triangular_indices(d, cols_stacked).into_iter().enumerate() {
        buf[r * d + c] = v[k];
        buf[c * d + r] = v[k];
    }
    if norm_conserved {
        for r in 0..d {
            for c in 0..d {
                if r != c {
                    buf[r * d + c] /= SQRT_2;
                }
            }
        }
    }

    Ok(DTensor::<f64, 2>::from_fn([d, d], |idx| buf[idx[0] * d + idx[1]]))
}
