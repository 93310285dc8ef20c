use super::*;
use crate::config::FieldConfig;
use crate::geometry::field_layout;
use crate::position::{PositionDef, default_catalog};
use crate::scene::{FieldProps, build_scene};

/// Records every call so tests can inspect the draw sequence.
#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
    /// Shapes currently visible; reset by `clear`.
    visible: usize,
    open_groups: usize,
    fail_after: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear { width: f64, height: f64, dpr: f64 },
    Begin(String),
    End,
    Draw,
}

impl Recorder {
    fn groups_begun(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Begin(code) => Some(code.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    type Error = String;

    fn clear(&mut self, viewport: Viewport, dpr: f64) -> Result<(), String> {
        self.ops.push(Op::Clear { width: viewport.width, height: viewport.height, dpr });
        self.visible = 0;
        Ok(())
    }

    fn begin_group(&mut self, code: &str) -> Result<(), String> {
        self.ops.push(Op::Begin(code.to_string()));
        self.open_groups += 1;
        Ok(())
    }

    fn end_group(&mut self) {
        self.ops.push(Op::End);
        self.open_groups -= 1;
    }

    fn draw(&mut self, _shape: &Shape) -> Result<(), String> {
        if self.fail_after == Some(self.visible) {
            return Err("boom".into());
        }
        self.ops.push(Op::Draw);
        self.visible += 1;
        Ok(())
    }
}

fn scene(positions: Vec<PositionDef>) -> Scene {
    let props = FieldProps { positions, ..Default::default() };
    build_scene(&field_layout(Viewport::new(900.0, 720.0)), &props, &FieldConfig::default())
}

#[test]
fn clear_comes_first() {
    let mut rec = Recorder::default();
    let s = scene(default_catalog());
    assert!(draw_scene(&mut rec, &s, 2.0).is_ok());
    assert_eq!(rec.ops[0], Op::Clear { width: 900.0, height: 720.0, dpr: 2.0 });
    assert_eq!(rec.ops.iter().filter(|op| matches!(op, Op::Clear { .. })).count(), 1);
}

#[test]
fn one_group_per_configured_field_position() {
    let mut rec = Recorder::default();
    let s = scene(default_catalog());
    assert!(draw_scene(&mut rec, &s, 1.0).is_ok());
    assert_eq!(rec.groups_begun().len(), 10);
    assert!(!rec.groups_begun().contains(&"BENCH"));
    assert_eq!(rec.open_groups, 0);
}

#[test]
fn repeated_render_leaves_same_visible_count() {
    let s = scene(default_catalog());
    let mut rec = Recorder::default();
    assert!(draw_scene(&mut rec, &s, 1.0).is_ok());
    let first = rec.visible;
    assert!(draw_scene(&mut rec, &s, 1.0).is_ok());
    assert_eq!(rec.visible, first);
    assert_eq!(rec.groups_begun().len(), 20);
}

#[test]
fn fewer_positions_after_rerender_draws_fewer_groups() {
    let mut rec = Recorder::default();
    assert!(draw_scene(&mut rec, &scene(default_catalog()), 1.0).is_ok());
    let full = rec.visible;

    let mut rec = Recorder::default();
    assert!(draw_scene(&mut rec, &scene(vec![PositionDef::new("P")]), 1.0).is_ok());
    assert!(rec.visible < full);
    assert_eq!(rec.groups_begun(), vec!["P"]);
}

#[test]
fn background_drawn_without_positions() {
    let mut rec = Recorder::default();
    let s = scene(vec![]);
    assert!(draw_scene(&mut rec, &s, 1.0).is_ok());
    assert_eq!(rec.visible, s.background.len());
    assert!(rec.groups_begun().is_empty());
}

#[test]
fn error_closes_open_group() {
    let s = scene(vec![PositionDef::new("CF")]);
    let mut rec = Recorder { fail_after: Some(s.background.len() + 1), ..Default::default() };
    assert_eq!(draw_scene(&mut rec, &s, 1.0), Err("boom".to_string()));
    assert_eq!(rec.open_groups, 0);
}
