use thiserror::Error;

/// Configuration problems are caught while the wheel is being built.
/// A wheel that constructs successfully can never fail mid-spin.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a wheel needs at least one slice")]
    EmptySliceSet,
    #[error("the tick interval must be at least 1 ms or the animation never advances")]
    ZeroTickInterval,
}
