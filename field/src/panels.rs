//! View models for the card grid under the field and the sections list.
//!
//! Both views read the same partition and assignment book as the field, so
//! a position is either on the field and in the card grid, or in the
//! sections list, never both.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use crate::position::{FieldPosition, Partition, PositionDef};
use crate::roster::{AssignmentBook, AssignmentId};
use crate::scene::FieldProps;

/// Card body for a field position with nobody assigned.
pub const OPEN_POSITION_TEXT: &str = "Open position";

/// Section body when nobody is assigned.
pub const EMPTY_SECTION_TEXT: &str = "No players assigned.";

/// One card in the grid under the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionCard {
    pub code: String,
    pub position: FieldPosition,
    pub label: String,
    pub color: String,
    pub count: usize,
    /// Primary player's `name #jersey`, if any.
    pub primary: Option<String>,
    pub selected: bool,
}

impl PositionCard {
    /// Badge text, shown only when someone is assigned.
    #[must_use]
    pub fn count_badge(&self) -> Option<String> {
        (self.count > 0).then(|| self.count.to_string())
    }

    #[must_use]
    pub fn body(&self) -> &str {
        self.primary.as_deref().unwrap_or(OPEN_POSITION_TEXT)
    }
}

/// One player row inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPlayer {
    pub assignment_id: AssignmentId,
    pub name: String,
    pub jersey: Option<String>,
    pub depth_order: Option<i64>,
}

/// One non-spatial group in the sections list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub code: String,
    pub label: String,
    pub color: String,
    /// Every assigned player in depth order.
    pub players: Vec<SectionPlayer>,
    pub selected: bool,
}

impl SectionEntry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Cards for the configured field positions, in field display order.
#[must_use]
pub fn position_cards(props: &FieldProps) -> Vec<PositionCard> {
    let partition = Partition::of(&props.positions);
    let book = AssignmentBook::new(&props.assigned_players);
    let selected = props.selected_position.as_deref();

    partition
        .field
        .iter()
        .map(|(position, def)| {
            let code = def.position_code.clone();
            PositionCard {
                position: *position,
                label: def.display_name(),
                color: def.display_color(),
                count: book.count(&code),
                primary: book.primary(&code).map(|a| a.player.name_with_jersey()),
                selected: selected == Some(code.as_str()),
                code,
            }
        })
        .collect()
}

/// Entries for configured positions that are not on the field, in
/// configured order.
#[must_use]
pub fn section_entries(props: &FieldProps) -> Vec<SectionEntry> {
    let partition = Partition::of(&props.positions);
    let book = AssignmentBook::new(&props.assigned_players);
    let selected = props.selected_position.as_deref();

    partition
        .sections
        .iter()
        .map(|def| section_entry(def, &book, selected))
        .collect()
}

fn section_entry(def: &PositionDef, book: &AssignmentBook<'_>, selected: Option<&str>) -> SectionEntry {
    let code = def.position_code.as_str();
    let players = book
        .at(code)
        .iter()
        .map(|a| SectionPlayer {
            assignment_id: a.id.clone(),
            name: a.player.display_name(),
            jersey: a.player.jersey_label(),
            depth_order: a.depth_order,
        })
        .collect();
    SectionEntry {
        code: code.to_string(),
        label: def.display_name(),
        color: def.display_color(),
        players,
        selected: selected == Some(code),
    }
}
