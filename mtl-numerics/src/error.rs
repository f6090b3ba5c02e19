//! Error types shared by the numeric routines

/// Errors reported by the matrix-algebra routines
#[derive(Debug, thiserror::Error)]
pub enum NumericsError {
    #[error("Matrix is empty")]
    EmptyMatrix,
    #[error("Rank bound {r} outside valid range 1..={max}")]
    InvalidRank { r: usize, max: usize },
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("Invalid coefficient length {len}: {reason}")]
    InvalidLength { len: usize, reason: &'static str },
    #[error("Initial estimate shape ({z_rows}, {z_cols}) does not match input shape ({rows}, {cols})")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        z_rows: usize,
        z_cols: usize,
    },
    #[error("Input contains non-finite values")]
    NonFiniteInput,
    #[error("Loss became non-finite at iteration {iter}")]
    NonFiniteLoss { iter: usize },
    #[error("SVD backend failure: {0}")]
    Backend(String),
}
