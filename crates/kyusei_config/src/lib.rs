//! Configuration for Nine-Star-Ki direction fortunes.
//!
//! `FortuneConfig` switches individual direction labels on or off. It is
//! read from TOML and applied to evaluated fortunes.

pub mod error;
pub mod fortune_config;

pub use error::ConfigError;
pub use fortune_config::FortuneConfig;
