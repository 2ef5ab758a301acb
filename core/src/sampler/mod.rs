use crate::*;
pub use random::*;

mod random;

/// Produces the next board snapshot for a sampling tick.
pub trait BoardSampler {
    /// `progress` is the elapsed fraction of the round, in `[0, 1]`.
    fn sample(&mut self, config: &RoundConfig, progress: f64) -> Board;
}
