//! Injectable progress reporting for the iterative routines
//!
//! The completion loop emits structured per-iteration diagnostics through a
//! caller-supplied sink instead of any process-global verbosity state.

/// Receiver for structured progress lines from [`crate::completion::complete_matrix`]
///
/// All callbacks default to no-ops, so implementors only override the events
/// they care about.
pub trait ProgressSink {
    /// Effective rank at a named stage ("original", "seed", "final")
    fn rank_report(&mut self, _stage: &str, _rank: usize) {}

    /// Loss of the seed estimate, before the first iteration
    fn initial_loss(&mut self, _loss: f64) {}

    /// Loss and relative convergence ratio after iteration `iter`
    fn iteration(&mut self, _iter: usize, _loss: f64, _conv: f64) {}
}

/// Sink that discards all progress output
pub struct SilentProgress;

impl ProgressSink for SilentProgress {}

/// Sink that forwards progress lines to the `log` facade at debug level
///
/// Embedders get per-iteration diagnostics through whatever logger they
/// installed, without this crate holding any global verbosity state.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn rank_report(&mut self, stage: &str, rank: usize) {
        log::debug!("{} rank: {}", stage, rank);
    }

    fn initial_loss(&mut self, loss: f64) {
        log::debug!("initial loss: {}", loss);
    }

    fn iteration(&mut self, iter: usize, loss: f64, conv: f64) {
        log::debug!("iteration {}: loss {} / convergence {}", iter, loss, conv);
    }
}
