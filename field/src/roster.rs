//! Roster data read by the field: assignment records and the per-position
//! ordering derived from them.
//!
//! Player data is owned by the caller. This module only reads display
//! fields and never mutates a record.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown in place of a player name that resolves empty.
pub const NAME_PLACEHOLDER: &str = "—";

/// Identifier of an assignment record. Depth-chart APIs hand these out as
/// integers or as strings (often UUIDs).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssignmentId {
    Number(i64),
    Text(String),
}

impl From<i64> for AssignmentId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<Uuid> for AssignmentId {
    fn from(id: Uuid) -> Self {
        Self::Text(id.to_string())
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Jersey numbers arrive as either JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JerseyNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s.trim()),
        }
    }
}

/// Display fields of a rostered player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<JerseyNumber>,
}

impl Player {
    /// `first last`, trimmed, or the placeholder when both are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        let joined = format!("{first} {last}");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// `#12`, or `None` when the jersey is unknown or blank.
    #[must_use]
    pub fn jersey_label(&self) -> Option<String> {
        let raw = self.jersey_number.as_ref()?.to_string();
        if raw.is_empty() { None } else { Some(format!("#{raw}")) }
    }

    /// Display name followed by the jersey label when known.
    #[must_use]
    pub fn name_with_jersey(&self) -> String {
        match self.jersey_label() {
            Some(jersey) => format!("{} {jersey}", self.display_name()),
            None => self.display_name(),
        }
    }
}

/// One player placed at one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub position_code: String,
    /// Rank within the position; lower is more senior. Missing ranks sort as 0.
    #[serde(default)]
    pub depth_order: Option<i64>,
    #[serde(rename = "Player", default)]
    pub player: Player,
}

impl Assignment {
    #[must_use]
    pub fn depth_rank(&self) -> i64 {
        self.depth_order.unwrap_or(0)
    }
}

/// Assignments grouped by position code, each group in depth order.
///
/// Built fresh for every render pass from the caller's flat list.
pub struct AssignmentBook<'a> {
    by_code: HashMap<&'a str, Vec<&'a Assignment>>,
}

impl<'a> AssignmentBook<'a> {
    /// Group `assignments` by code and stable-sort each group by depth rank,
    /// so equal ranks keep their input order.
    #[must_use]
    pub fn new(assignments: &'a [Assignment]) -> Self {
        let mut by_code: HashMap<&'a str, Vec<&'a Assignment>> = HashMap::new();
        for a in assignments {
            by_code.entry(a.position_code.as_str()).or_default().push(a);
        }
        for group in by_code.values_mut() {
            group.sort_by_key(|a| a.depth_rank());
        }
        Self { by_code }
    }

    /// Assignments at `code` in depth order; empty when none.
    #[must_use]
    pub fn at(&self, code: &str) -> &[&'a Assignment] {
        match self.by_code.get(code) {
            Some(group) => group.as_slice(),
            None => &[],
        }
    }

    /// The most senior assignment at `code`.
    #[must_use]
    pub fn primary(&self, code: &str) -> Option<&'a Assignment> {
        self.at(code).first().copied()
    }

    #[must_use]
    pub fn count(&self, code: &str) -> usize {
        self.at(code).len()
    }

    /// Codes that have assignments but are not in `known`, sorted.
    #[must_use]
    pub fn unmatched_codes<'k>(&self, known: impl IntoIterator<Item = &'k str>) -> Vec<&'a str> {
        let known: Vec<&str> = known.into_iter().collect();
        let mut out: Vec<&'a str> = self
            .by_code
            .keys()
            .copied()
            .filter(|code| !known.contains(code))
            .collect();
        out.sort_unstable();
        out
    }

    /// Total number of assignments across all codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// Cut `name` to at most `max_chars` characters, ending in `…` when cut.
#[must_use]
pub fn fit_name(name: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let mut out: String = name.chars().take(max_chars - 1).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}
