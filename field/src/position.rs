//! Position catalog: the fixed set of on-field positions and the caller's
//! configured position definitions.
//!
//! The split between spatial positions and sections lives here and only
//! here. Anything that is not a [`FieldPosition`] code is a section (bench,
//! injured list, and so on) and is never placed on the diamond.

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::resolve_color;

/// Color for section codes with no caller override.
pub const SECTION_COLOR: &str = "#607d8b";

/// One of the ten positions drawn on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPosition {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
    DesignatedHitter,
}

impl FieldPosition {
    /// All field positions in display order.
    pub const ALL: [Self; 10] = [
        Self::Pitcher,
        Self::Catcher,
        Self::FirstBase,
        Self::SecondBase,
        Self::ThirdBase,
        Self::Shortstop,
        Self::LeftField,
        Self::CenterField,
        Self::RightField,
        Self::DesignatedHitter,
    ];

    /// Parse a position code. Matching is exact (codes are uppercase).
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Pitcher => "P",
            Self::Catcher => "C",
            Self::FirstBase => "1B",
            Self::SecondBase => "2B",
            Self::ThirdBase => "3B",
            Self::Shortstop => "SS",
            Self::LeftField => "LF",
            Self::CenterField => "CF",
            Self::RightField => "RF",
            Self::DesignatedHitter => "DH",
        }
    }

    /// Built-in human label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pitcher => "Pitcher",
            Self::Catcher => "Catcher",
            Self::FirstBase => "First Base",
            Self::SecondBase => "Second Base",
            Self::ThirdBase => "Third Base",
            Self::Shortstop => "Shortstop",
            Self::LeftField => "Left Field",
            Self::CenterField => "Center Field",
            Self::RightField => "Right Field",
            Self::DesignatedHitter => "Designated Hitter",
        }
    }

    /// Built-in palette color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Pitcher => "#e53935",
            Self::Catcher => "#8e24aa",
            Self::FirstBase => "#1e88e5",
            Self::SecondBase => "#00897b",
            Self::ThirdBase => "#f4511e",
            Self::Shortstop => "#3949ab",
            Self::LeftField => "#43a047",
            Self::CenterField => "#fdd835",
            Self::RightField => "#fb8c00",
            Self::DesignatedHitter => "#6d4c41",
        }
    }

    /// Whether the bubble sits above a base marker rather than in open field.
    #[must_use]
    pub fn is_infield(self) -> bool {
        matches!(self, Self::FirstBase | Self::SecondBase | Self::ThirdBase | Self::Shortstop)
    }
}

/// Where a configured position is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKind {
    Field(FieldPosition),
    Section,
}

/// Classify a position code as a field position or a section.
#[must_use]
pub fn classify(code: &str) -> PositionKind {
    match FieldPosition::parse(code) {
        Some(p) => PositionKind::Field(p),
        None => PositionKind::Section,
    }
}

/// A configured position as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDef {
    pub position_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PositionDef {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { position_code: code.into(), position_name: None, color: None }
    }

    #[must_use]
    pub fn kind(&self) -> PositionKind {
        classify(&self.position_code)
    }

    /// Caller label, else the built-in label, else the bare code.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.position_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                return name.to_string();
            }
        }
        match self.kind() {
            PositionKind::Field(p) => p.label().to_string(),
            PositionKind::Section => self.position_code.clone(),
        }
    }

    /// Caller color when it parses, else the built-in palette.
    #[must_use]
    pub fn display_color(&self) -> String {
        let fallback = match self.kind() {
            PositionKind::Field(p) => p.color(),
            PositionKind::Section => SECTION_COLOR,
        };
        resolve_color(self.color.as_deref(), fallback)
    }
}

/// Configured positions split into spatial and non-spatial groups.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    /// Field positions in display order.
    pub field: BTreeMap<FieldPosition, &'a PositionDef>,
    /// Sections in configured order.
    pub sections: Vec<&'a PositionDef>,
}

impl<'a> Partition<'a> {
    /// Split `positions` by [`classify`]. Codes should be unique; when one
    /// repeats, the first definition wins.
    #[must_use]
    pub fn of(positions: &'a [PositionDef]) -> Self {
        let mut out = Self::default();
        for def in positions {
            match def.kind() {
                PositionKind::Field(p) => {
                    out.field.entry(p).or_insert(def);
                }
                PositionKind::Section => {
                    if !out.sections.iter().any(|s| s.position_code == def.position_code) {
                        out.sections.push(def);
                    }
                }
            }
        }
        out
    }

    /// Whether `code` names a configured position of either kind.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        match classify(code) {
            PositionKind::Field(p) => self.field.contains_key(&p),
            PositionKind::Section => self.sections.iter().any(|s| s.position_code == code),
        }
    }

    /// Every configured code, field positions first.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.field
            .values()
            .chain(self.sections.iter())
            .map(|def| def.position_code.as_str())
    }
}

/// The ten field positions plus bench and injured-list sections.
#[must_use]
pub fn default_catalog() -> Vec<PositionDef> {
    let mut out: Vec<PositionDef> = FieldPosition::ALL.iter().map(|p| PositionDef::new(p.code())).collect();
    out.push(PositionDef {
        position_code: "BENCH".into(),
        position_name: Some("Bench".into()),
        color: None,
    });
    out.push(PositionDef {
        position_code: "IL".into(),
        position_name: Some("Injured List".into()),
        color: None,
    });
    out
}
