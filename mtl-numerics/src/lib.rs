//! # mtl-numerics: matrix-algebra core for multi-task Bayesian learning
//!
//! Numerical primitives shared by the Bayesian prior and regression layers of
//! a multi-task learning library: robust low-rank matrix completion by
//! reweighted singular-value shrinkage, reversible (half-)vectorization
//! transforms for symmetric covariance matrices, and the truncated-SVD
//! approximation the completion routine seeds itself with.

pub mod completion; // Reweighted spectral shrinkage (EM-style completion loop)
pub mod error;
pub mod gemm; // Matrix multiplication wrapper (Faer backend)
pub mod lowrank;
pub mod norms;
pub mod progress; // Injectable per-iteration progress reporting
pub mod svd;
pub mod vectorize; // vec/unvec and vech/unvech transforms

// Re-export commonly used types and functions
pub use completion::{complete_matrix, complete_matrix_default, CompletionConfig};
pub use error::NumericsError;
pub use lowrank::low_rank_approx;
pub use norms::{frobenius_norm, norm_2};
pub use progress::{LogProgress, ProgressSink, SilentProgress};
pub use svd::{compute_svd, effective_rank, rank_from_singular_values, singular_values, RealSvd};
pub use vectorize::{unvec, unvech, vec, vech};

// Re-export external dependencies for convenience
pub use mdarray::DTensor;

/// Crate-wide matrix type
pub type Matrix = DTensor<f64, 2>;
