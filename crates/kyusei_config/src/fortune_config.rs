//! Per-label enable switches for direction fortunes.
//!
//! Labels are always evaluated in full; switching one off only removes it
//! from the result afterwards, so rules that look at other labels on the
//! same direction still see them.
//!
//! Two TOML layouts are accepted and may be combined:
//!
//! ```toml
//! disabled = ["goou", "teii_teki"]
//!
//! [labels]
//! enable_tendo = false
//! enable_goou = true
//! ```
//!
//! A `[labels]` entry wins over the `disabled` list.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use kyusei_base::{ALL_DIRECTION_LABELS, DirectionFortunes, DirectionLabel, DirectionLabels};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    disabled: Vec<String>,
    #[serde(default)]
    labels: BTreeMap<String, bool>,
}

/// Which direction labels appear in results. Everything is on by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FortuneConfig {
    disabled: BTreeSet<DirectionLabel>,
}

impl FortuneConfig {
    /// All labels enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        let mut config = Self::new();
        for id in &raw.disabled {
            let label = DirectionLabel::from_id(id)
                .ok_or_else(|| ConfigError::UnknownLabel { id: id.clone() })?;
            config.set_enabled(label, false);
        }
        for (key, &on) in &raw.labels {
            let label = key
                .strip_prefix("enable_")
                .and_then(DirectionLabel::from_id)
                .ok_or_else(|| ConfigError::UnknownLabel { id: key.clone() })?;
            config.set_enabled(label, on);
        }
        debug!(disabled = ?config.disabled_ids(), "fortune config parsed");
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), disabled = config.disabled.len(), "loaded fortune config");
        Ok(config)
    }

    pub fn is_enabled(&self, label: DirectionLabel) -> bool {
        !self.disabled.contains(&label)
    }

    pub fn set_enabled(&mut self, label: DirectionLabel, on: bool) {
        if on {
            self.disabled.remove(&label);
        } else {
            self.disabled.insert(label);
        }
    }

    /// Builder-style switch-off.
    pub fn disable(mut self, label: DirectionLabel) -> Self {
        self.set_enabled(label, false);
        self
    }

    /// Enabled labels in canonical order.
    pub fn enabled_labels(&self) -> Vec<DirectionLabel> {
        ALL_DIRECTION_LABELS
            .iter()
            .copied()
            .filter(|l| self.is_enabled(*l))
            .collect()
    }

    /// Ids of the disabled labels.
    pub fn disabled_ids(&self) -> Vec<&'static str> {
        self.disabled.iter().map(|l| l.id()).collect()
    }

    /// Copy of `fortunes` without the disabled labels, order preserved.
    pub fn apply(&self, fortunes: &DirectionFortunes) -> DirectionFortunes {
        DirectionFortunes {
            year: self.filter_board(&fortunes.year),
            month: self.filter_board(&fortunes.month),
            day: self.filter_board(&fortunes.day),
        }
    }

    fn filter_board(&self, board: &DirectionLabels) -> DirectionLabels {
        board.clone().map(|labels| {
            labels
                .into_iter()
                .filter(|l| self.is_enabled(*l))
                .collect()
        })
    }
}
