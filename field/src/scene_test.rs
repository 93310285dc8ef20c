#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::geometry::field_layout;
use crate::position::default_catalog;
use crate::roster::{NAME_PLACEHOLDER, Player};

// =============================================================
// Helpers
// =============================================================

const NINE: [&str; 9] = ["P", "C", "1B", "2B", "3B", "SS", "LF", "CF", "RF"];

fn layout() -> FieldLayout {
    field_layout(Viewport::new(1000.0, 800.0))
}

fn defs(codes: &[&str]) -> Vec<PositionDef> {
    codes.iter().map(|c| PositionDef::new(*c)).collect()
}

fn assign(code: &str, depth: Option<i64>, first: &str, last: &str) -> Assignment {
    Assignment {
        id: Uuid::new_v4().into(),
        position_code: code.into(),
        depth_order: depth,
        player: Player {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            jersey_number: None,
        },
    }
}

fn scene(props: &FieldProps) -> Scene {
    build_scene(&layout(), props, &FieldConfig::default())
}

fn ring_count(g: &PositionGroup) -> usize {
    g.shapes
        .iter()
        .filter(|s| matches!(s, Shape::Circle { fill: None, stroke: Some(_), .. }))
        .count()
}

fn texts(g: &PositionGroup) -> Vec<&str> {
    g.shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn empty_roster_renders_all_open() {
    let props = FieldProps { positions: defs(&NINE), ..Default::default() };
    let s = scene(&props);
    assert_eq!(s.group_count(), 9);
    for g in &s.groups {
        assert_eq!(g.state, BubbleState::Open, "{}", g.code);
        assert_eq!(texts(g), vec![g.code.as_str(), OPEN_LABEL]);
    }
}

#[test]
fn open_bubble_is_dashed() {
    let props = FieldProps { positions: defs(&["C"]), ..Default::default() };
    let s = scene(&props);
    let Some(g) = s.group("C") else {
        panic!("missing C");
    };
    assert!(matches!(
        &g.shapes[0],
        Shape::Circle { stroke: Some(Stroke { dash: Some(_), .. }), .. }
    ));
}

#[test]
fn overflow_badge_shows_total_and_primary_name() {
    let props = FieldProps {
        positions: defs(&NINE),
        assigned_players: vec![
            assign("SS", Some(3), "Third", "Guy"),
            assign("SS", Some(1), "Derek", "Jeter"),
            assign("SS", Some(2), "Second", "Guy"),
        ],
        selected_position: None,
    };
    let s = scene(&props);
    let Some(g) = s.group("SS") else {
        panic!("missing SS");
    };
    assert_eq!(g.state, BubbleState::Occupied { name: "Derek Jeter".into(), count: 3 });
    assert_eq!(texts(g), vec!["Derek Jeter", "3"]);
    assert!(g.badge().is_some());
}

#[test]
fn single_assignment_has_no_badge() {
    let props = FieldProps {
        positions: defs(&["P"]),
        assigned_players: vec![assign("P", Some(1), "Cy", "Young")],
        selected_position: None,
    };
    let s = scene(&props);
    let Some(g) = s.group("P") else {
        panic!("missing P");
    };
    assert_eq!(texts(g), vec!["Cy Young"]);
    assert!(g.badge().is_none());
}

#[test]
fn primary_with_missing_name_renders_placeholder() {
    let mut a = assign("C", None, "", "");
    a.player = Player::default();
    let props = FieldProps { positions: defs(&["C"]), assigned_players: vec![a], selected_position: None };
    let s = scene(&props);
    let Some(g) = s.group("C") else {
        panic!("missing C");
    };
    assert_eq!(texts(g), vec![NAME_PLACEHOLDER]);
}

#[test]
fn long_names_fit_the_bubble() {
    let props = FieldProps {
        positions: defs(&["CF"]),
        assigned_players: vec![assign("CF", None, "Bartholomew", "Featherstonehaugh")],
        selected_position: None,
    };
    let s = scene(&props);
    let Some(g) = s.group("CF") else {
        panic!("missing CF");
    };
    let shown = texts(g)[0];
    assert_eq!(shown.chars().count(), FieldConfig::default().bubble_name_max_chars);
    assert!(shown.ends_with('…'));
    // The full name is kept on the state for other views.
    assert_eq!(
        g.state,
        BubbleState::Occupied { name: "Bartholomew Featherstonehaugh".into(), count: 1 }
    );
}

#[test]
fn selection_ring_only_on_selected() {
    let props = FieldProps {
        positions: defs(&NINE),
        selected_position: Some("CF".into()),
        ..Default::default()
    };
    let s = scene(&props);
    for g in &s.groups {
        if g.code == "CF" {
            assert!(g.selected);
            assert_eq!(ring_count(g), 1);
        } else {
            assert!(!g.selected, "{}", g.code);
            assert_eq!(ring_count(g), 0, "{}", g.code);
        }
    }
}

#[test]
fn selection_ring_is_larger_than_bubble() {
    let props = FieldProps {
        positions: defs(&["LF"]),
        selected_position: Some("LF".into()),
        ..Default::default()
    };
    let s = scene(&props);
    let Some(g) = s.group("LF") else {
        panic!("missing LF");
    };
    let Some(Shape::Circle { radius, .. }) = g.shapes.last() else {
        panic!("ring should be drawn last");
    };
    assert!(*radius > g.radius);
}

#[test]
fn selecting_a_section_rings_nothing_on_field() {
    let props = FieldProps {
        positions: default_catalog(),
        selected_position: Some("BENCH".into()),
        ..Default::default()
    };
    let s = scene(&props);
    assert!(s.groups.iter().all(|g| !g.selected));
}

#[test]
fn unmatched_assignment_is_not_drawn() {
    let props = FieldProps {
        positions: defs(&NINE),
        assigned_players: vec![assign("ZZZ", None, "Ghost", "Runner")],
        selected_position: None,
    };
    let s = scene(&props);
    assert_eq!(s.group_count(), 9);
    assert!(s.group("ZZZ").is_none());
    assert!(s.groups.iter().all(|g| g.state == BubbleState::Open));
}

// =============================================================
// Structure
// =============================================================

#[test]
fn only_configured_field_positions_get_groups() {
    let props = FieldProps { positions: defs(&["BENCH", "SS", "IL", "DH"]), ..Default::default() };
    let s = scene(&props);
    let codes: Vec<_> = s.groups.iter().map(|g| g.code.as_str()).collect();
    assert_eq!(codes, vec!["SS", "DH"]);
}

#[test]
fn no_positions_means_no_groups_but_a_field() {
    let s = scene(&FieldProps::default());
    assert_eq!(s.group_count(), 0);
    assert!(!s.background.is_empty());
}

#[test]
fn groups_sit_at_layout_spots() {
    let l = layout();
    let props = FieldProps { positions: default_catalog(), ..Default::default() };
    let s = build_scene(&l, &props, &FieldConfig::default());
    assert_eq!(s.group_count(), 10);
    for g in &s.groups {
        let Some(spot) = l.spot_for_code(&g.code) else {
            panic!("no spot for {}", g.code);
        };
        assert_eq!(g.center, spot.point());
    }
}

#[test]
fn caller_color_overrides_palette() {
    let positions = vec![PositionDef { position_code: "1B".into(), position_name: None, color: Some("#010203".into()) }];
    let props = FieldProps {
        positions,
        assigned_players: vec![assign("1B", None, "Lou", "Gehrig")],
        selected_position: None,
    };
    let s = scene(&props);
    let Some(g) = s.group("1B") else {
        panic!("missing 1B");
    };
    assert!(matches!(&g.shapes[0], Shape::Circle { fill: Some(f), .. } if f == "#010203"));
}

#[test]
fn rebuilding_is_idempotent() {
    let props = FieldProps {
        positions: default_catalog(),
        assigned_players: vec![assign("SS", None, "A", "B"), assign("SS", None, "C", "D")],
        selected_position: Some("SS".into()),
    };
    let first = scene(&props);
    let second = scene(&props);
    assert_eq!(first, second);
    assert_eq!(first.group_count(), second.group_count());
}

#[test]
fn degenerate_layout_still_builds() {
    let l = field_layout(Viewport::new(0.0, 0.0));
    let props = FieldProps { positions: default_catalog(), ..Default::default() };
    let s = build_scene(&l, &props, &FieldConfig::default());
    assert_eq!(s.group_count(), 10);
}

#[test]
fn props_deserialize_from_camel_case() {
    let raw = serde_json::json!({
        "positions": [{ "position_code": "P" }],
        "assignedPlayers": [{
            "id": Uuid::new_v4(),
            "position_code": "P",
            "Player": { "first_name": "Satchel", "last_name": "Paige" }
        }],
        "selectedPosition": "P"
    });
    let props: FieldProps = serde_json::from_value(raw).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(props.positions.len(), 1);
    assert_eq!(props.assigned_players.len(), 1);
    assert_eq!(props.selected_position.as_deref(), Some("P"));
}
