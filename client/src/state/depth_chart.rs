//! Caller-side selection state for the depth chart.
//!
//! DESIGN
//! ======
//! The field engine only reports clicks. Which position is highlighted, and
//! what a second click on the same position means, is decided here and fed
//! back to the field as `selected_position`.

#[cfg(test)]
#[path = "depth_chart_test.rs"]
mod depth_chart_test;

use field::position::PositionDef;
use field::roster::Assignment;
use field::scene::FieldProps;
use serde::{Deserialize, Serialize};

/// What a click on the already selected position does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickPolicy {
    /// Clear the selection.
    #[default]
    Toggle,
    /// Keep it selected.
    Reselect,
}

/// `Idle` until a position is clicked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(String),
}

impl Selection {
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Selected(code) => Some(code),
        }
    }

    /// Next state after `code` is clicked under `policy`.
    #[must_use]
    pub fn after_click(&self, code: &str, policy: ClickPolicy) -> Self {
        match (self, policy) {
            (Self::Selected(current), ClickPolicy::Toggle) if current == code => Self::Idle,
            _ => Self::Selected(code.to_owned()),
        }
    }
}

/// Roster and selection for one depth chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepthChartState {
    pub positions: Vec<PositionDef>,
    pub assigned_players: Vec<Assignment>,
    pub selection: Selection,
    pub policy: ClickPolicy,
}

impl DepthChartState {
    #[must_use]
    pub fn new(positions: Vec<PositionDef>, assigned_players: Vec<Assignment>, policy: ClickPolicy) -> Self {
        Self { positions, assigned_players, selection: Selection::Idle, policy }
    }

    /// Apply a click reported by the field, a card or a section.
    pub fn click(&mut self, code: &str) {
        self.selection = self.selection.after_click(code, self.policy);
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::Idle;
    }

    #[must_use]
    pub fn selected_code(&self) -> Option<String> {
        self.selection.code().map(str::to_owned)
    }

    /// Everything the field and panels need for one render.
    #[must_use]
    pub fn field_props(&self) -> FieldProps {
        FieldProps {
            positions: self.positions.clone(),
            assigned_players: self.assigned_players.clone(),
            selected_position: self.selected_code(),
        }
    }
}
