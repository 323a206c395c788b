//! Error type for the convenience layer.

use kyusei_base::KyuseiError;
use kyusei_config::ConfigError;
use kyusei_time::TimeError;

/// Any failure surfaced by `kyusei_rs`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum KyuseiRsError {
    /// Bad date input.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// The day-star walk hit a broken kirikae cycle.
    #[error(transparent)]
    Kyusei(#[from] KyuseiError),
    /// A fortune configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
