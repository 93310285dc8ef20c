//! Scene building: props + layout in, a fresh drawable tree out.
//!
//! A [`Scene`] is rebuilt from scratch on every change to props or viewport
//! and handed to the renderer, which clears the surface before drawing it.
//! Nothing is patched in place, so a pass can never leave a stale group from
//! an earlier pass behind.
//!
//! The tree has two layers: the procedurally drawn diamond (`background`)
//! and one [`PositionGroup`] per configured field position, keyed by code.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::color::with_alpha;
use crate::config::{FieldConfig, FieldTheme};
use crate::consts::{BADGE_RADIUS_PX, BASE_MARKER_HALF_PX, DASH_PX, SELECTION_RING_GAP_PX};
use crate::geometry::{FieldLayout, PositionSpot};
use crate::position::{FieldPosition, Partition, PositionDef};
use crate::roster::{Assignment, AssignmentBook, fit_name};
use crate::viewport::{Point, Viewport};

/// Sub-label drawn under the code of an empty position.
pub const OPEN_LABEL: &str = "OPEN";

/// Everything the caller hands the field for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldProps {
    #[serde(default)]
    pub positions: Vec<PositionDef>,
    #[serde(default)]
    pub assigned_players: Vec<Assignment>,
    #[serde(default)]
    pub selected_position: Option<String>,
}

/// Stroke style for outlines and lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    /// Dash segment length; `None` draws a solid line.
    pub dash: Option<f64>,
}

impl Stroke {
    #[must_use]
    pub fn solid(color: &str, width: f64) -> Self {
        Self { color: color.to_string(), width, dash: None }
    }

    #[must_use]
    pub fn dashed(color: &str, width: f64) -> Self {
        Self { color: color.to_string(), width, dash: Some(DASH_PX) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// A drawing primitive in viewport pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Circular sector from `start_deg` to `end_deg` (screen angles).
    Wedge { center: Point, radius: f64, start_deg: f64, end_deg: f64, fill: String },
    Polygon { points: Vec<Point>, fill: Option<String>, stroke: Option<Stroke> },
    Line { from: Point, to: Point, stroke: Stroke },
    Circle { center: Point, radius: f64, fill: Option<String>, stroke: Option<Stroke> },
    /// Text centered on `at`.
    Text { at: Point, text: String, size_px: f64, color: String, weight: FontWeight },
}

/// What a position bubble shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BubbleState {
    /// At least one player assigned; `name` is the primary player's.
    Occupied { name: String, count: usize },
    Open,
}

/// The visual group for one field position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGroup {
    pub code: String,
    pub position: FieldPosition,
    pub center: Point,
    pub radius: f64,
    pub state: BubbleState,
    pub selected: bool,
    /// Bubble, labels, badge and ring in paint order.
    pub shapes: Vec<Shape>,
}

impl PositionGroup {
    /// Center and radius of the overflow badge, when one is drawn.
    #[must_use]
    pub fn badge(&self) -> Option<(Point, f64)> {
        match self.state {
            BubbleState::Occupied { count, .. } if count > 1 => Some((badge_center(self.center, self.radius), BADGE_RADIUS_PX)),
            _ => None,
        }
    }
}

/// One complete render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub background: Vec<Shape>,
    pub groups: Vec<PositionGroup>,
}

impl Scene {
    #[must_use]
    pub fn group(&self, code: &str) -> Option<&PositionGroup> {
        self.groups.iter().find(|g| g.code == code)
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

/// Build the scene for `props` laid out in `layout`.
///
/// Only configured field positions get a group; section codes and
/// assignments to unknown codes are never drawn here.
#[must_use]
pub fn build_scene(layout: &FieldLayout, props: &FieldProps, config: &FieldConfig) -> Scene {
    let partition = Partition::of(&props.positions);
    let book = AssignmentBook::new(&props.assigned_players);
    let selected = props.selected_position.as_deref();

    let groups = partition
        .field
        .iter()
        .filter_map(|(position, def)| {
            let spot = layout.spot(*position)?;
            Some(position_group(spot, def, &book, selected, config))
        })
        .collect();

    Scene {
        viewport: layout.viewport,
        background: diamond_shapes(layout, &config.theme),
        groups,
    }
}

fn position_group(
    spot: &PositionSpot,
    def: &PositionDef,
    book: &AssignmentBook<'_>,
    selected: Option<&str>,
    config: &FieldConfig,
) -> PositionGroup {
    let code = def.position_code.clone();
    let center = spot.point();
    let radius = config.bubble_radius;
    let color = def.display_color();
    let theme = &config.theme;
    let is_selected = selected == Some(code.as_str());

    let state = match book.primary(&code) {
        Some(primary) => BubbleState::Occupied {
            name: primary.player.display_name(),
            count: book.count(&code),
        },
        None => BubbleState::Open,
    };

    let mut shapes = Vec::new();
    match &state {
        BubbleState::Occupied { name, count } => {
            shapes.push(Shape::Circle {
                center,
                radius,
                fill: Some(color),
                stroke: Some(Stroke::solid(&theme.chalk, 2.0)),
            });
            shapes.push(Shape::Text {
                at: center,
                text: fit_name(name, config.bubble_name_max_chars),
                size_px: radius * 0.42,
                color: theme.text.clone(),
                weight: FontWeight::Bold,
            });
            if *count > 1 {
                shapes.push(Shape::Circle {
                    center: badge_center(center, radius),
                    radius: BADGE_RADIUS_PX,
                    fill: Some(theme.badge.clone()),
                    stroke: Some(Stroke::solid(&theme.chalk, 1.5)),
                });
                shapes.push(Shape::Text {
                    at: badge_center(center, radius),
                    text: count.to_string(),
                    size_px: BADGE_RADIUS_PX * 1.2,
                    color: theme.text.clone(),
                    weight: FontWeight::Bold,
                });
            }
        }
        BubbleState::Open => {
            shapes.push(Shape::Circle {
                center,
                radius,
                fill: Some(with_alpha(&color, 0.25)),
                stroke: Some(Stroke::dashed(&theme.open_stroke, 2.0)),
            });
            shapes.push(Shape::Text {
                at: center.offset(0.0, -radius * 0.18),
                text: code.clone(),
                size_px: radius * 0.5,
                color: theme.text.clone(),
                weight: FontWeight::Bold,
            });
            shapes.push(Shape::Text {
                at: center.offset(0.0, radius * 0.35),
                text: OPEN_LABEL.to_string(),
                size_px: radius * 0.3,
                color: theme.open_stroke.clone(),
                weight: FontWeight::Normal,
            });
        }
    }

    if is_selected {
        shapes.push(Shape::Circle {
            center,
            radius: radius + SELECTION_RING_GAP_PX,
            fill: None,
            stroke: Some(Stroke::dashed(&theme.selection, 3.0)),
        });
    }

    PositionGroup {
        code,
        position: spot.position,
        center,
        radius,
        state,
        selected: is_selected,
        shapes,
    }
}

fn badge_center(center: Point, radius: f64) -> Point {
    center.offset(radius * 0.75, -radius * 0.75)
}

/// The procedurally drawn field: grass fan, infield dirt, foul lines,
/// base paths, mound, bases and home plate.
fn diamond_shapes(layout: &FieldLayout, theme: &FieldTheme) -> Vec<Shape> {
    let d = &layout.diamond;
    let home = d.home;
    let (left_deg, right_deg) = FieldLayout::foul_line_angles();
    let (left_pole, right_pole) = layout.foul_poles();

    let mut shapes = vec![
        Shape::Wedge {
            center: home,
            radius: layout.radius,
            start_deg: left_deg,
            end_deg: right_deg,
            fill: theme.grass.clone(),
        },
        Shape::Polygon {
            points: vec![
                home.offset(0.0, BASE_MARKER_HALF_PX * 2.0),
                home.lerp(d.first, 1.25),
                home.lerp(d.second, 1.2),
                home.lerp(d.third, 1.25),
            ],
            fill: Some(theme.infield_dirt.clone()),
            stroke: None,
        },
        Shape::Line { from: home, to: left_pole, stroke: Stroke::solid(&theme.chalk, 2.0) },
        Shape::Line { from: home, to: right_pole, stroke: Stroke::solid(&theme.chalk, 2.0) },
        Shape::Polygon {
            points: vec![home, d.first, d.second, d.third],
            fill: None,
            stroke: Some(Stroke::solid(&theme.chalk, 1.5)),
        },
        Shape::Circle {
            center: d.mound,
            radius: d.mound_radius,
            fill: Some(theme.mound.clone()),
            stroke: None,
        },
    ];

    for base in [d.first, d.second, d.third] {
        shapes.push(Shape::Polygon {
            points: base_marker(base),
            fill: Some(theme.base.clone()),
            stroke: None,
        });
    }
    shapes.push(Shape::Polygon {
        points: home_plate(home),
        fill: Some(theme.base.clone()),
        stroke: None,
    });
    shapes
}

/// A square rotated 45° around `at`.
fn base_marker(at: Point) -> Vec<Point> {
    let h = BASE_MARKER_HALF_PX;
    vec![at.offset(0.0, -h), at.offset(h, 0.0), at.offset(0.0, h), at.offset(-h, 0.0)]
}

/// Pentagon with its point toward the catcher.
fn home_plate(at: Point) -> Vec<Point> {
    let h = BASE_MARKER_HALF_PX;
    vec![
        at.offset(-h, -h),
        at.offset(h, -h),
        at.offset(h, 0.0),
        at.offset(0.0, h),
        at.offset(-h, 0.0),
    ]
}
