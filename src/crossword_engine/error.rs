use thiserror::Error;

/// A request that cannot produce a puzzle at all.
///
/// Under-filled grids, rejected candidates and ignored keypad input are not
/// errors; only a configuration that rules out even the seed equation is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size {size} cannot hold an equation of {min} cells")]
    GridTooSmall { size: usize, min: usize },

    #[error("fixed ratio {0} is outside [0, 1]")]
    FixedRatioOutOfRange(f64),

    #[error("target equation count must be at least 1")]
    ZeroTargetCount,
}
