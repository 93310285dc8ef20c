//! Roster payload embedded in the host page.
//!
//! The page ships positions, assignments and optional field settings as a
//! JSON `<script type="application/json" id="depth-chart-data">` block. A
//! missing or empty catalog falls back to the default one.

#[cfg(test)]
#[path = "roster_data_test.rs"]
mod roster_data_test;

use field::config::{ConfigError, FieldConfig};
use field::position::{PositionDef, default_catalog};
use field::roster::Assignment;
use serde::Deserialize;

use crate::state::depth_chart::{ClickPolicy, DepthChartState};

/// DOM id of the embedded JSON block.
pub const DATA_ELEMENT_ID: &str = "depth-chart-data";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterData {
    pub positions: Vec<PositionDef>,
    pub assigned_players: Vec<Assignment>,
    pub click_policy: ClickPolicy,
    pub config: Option<FieldConfig>,
}

impl RosterData {
    /// Parse the embedded JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed payloads.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// The configured catalog, or the default one when none is given.
    #[must_use]
    pub fn catalog(&self) -> Vec<PositionDef> {
        if self.positions.is_empty() { default_catalog() } else { self.positions.clone() }
    }

    /// Validated field settings; defaults when none are given.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for out-of-range values or bad colors.
    pub fn field_config(&self) -> Result<FieldConfig, ConfigError> {
        match &self.config {
            None => Ok(FieldConfig::default()),
            Some(config) => {
                config.validate()?;
                Ok(config.clone())
            }
        }
    }

    #[must_use]
    pub fn into_state(self) -> DepthChartState {
        let positions = self.catalog();
        DepthChartState::new(positions, self.assigned_players, self.click_policy)
    }
}

/// Read the roster block from the current document.
///
/// Falls back to an empty roster (default catalog) when the block is absent
/// or malformed.
#[cfg(feature = "csr")]
pub fn read_embedded() -> RosterData {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(DATA_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    match RosterData::parse(&raw) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("depth chart: ignoring malformed roster data: {err}");
            RosterData::default()
        }
    }
}
