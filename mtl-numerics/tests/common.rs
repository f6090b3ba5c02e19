//! Common test utilities

use mdarray::DTensor;

/// Simple deterministic pseudo-random number generator (LCG)
///
/// Linear Congruential Generator for reproducible random numbers in tests.
/// Uses the common parameters: a = 1664525, c = 1013904223 (from Numerical Recipes)
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next f64 in range [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Map to [0, 1) using upper 48 bits
        ((self.state >> 16) as f64) / ((1u64 << 48) as f64)
    }

    /// Generate next f64 in range [-1, 1)
    pub fn next_signed(&mut self) -> f64 {
        2.0 * self.next_f64() - 1.0
    }
}

/// Random m x n matrix with entries in [-1, 1)
pub fn random_matrix(rng: &mut SimpleRng, m: usize, n: usize) -> DTensor<f64, 2> {
    let data: Vec<f64> = (0..m * n).map(|_| rng.next_signed()).collect();
    DTensor::<f64, 2>::from_fn([m, n], |idx| data[idx[0] * n + idx[1]])
}

/// Random symmetric d x d matrix with entries in [-1, 1)
pub fn random_symmetric(rng: &mut SimpleRng, d: usize) -> DTensor<f64, 2> {
    let a = random_matrix(rng, d, d);
    DTensor::<f64, 2>::from_fn([d, d], |idx| 0.5 * (a[[idx[0], idx[1]]] + a[[idx[1], idx[0]]]))
}

/// Maximum absolute entrywise difference between two matrices
pub fn max_abs_diff(a: &DTensor<f64, 2>, b: &DTensor<f64, 2>) -> f64 {
    let (m, n) = *a.shape();
    assert_eq!(*a.shape(), *b.shape());
    let mut max = 0.0_f64;
    for i in 0..m {
        for j in 0..n {
            max = max.max((a[[i, j]] - b[[i, j]]).abs());
        }
    }
    max
}
