//! Field geometry: viewport size in, pixel coordinates for every field
//! position out.
//!
//! The field is a 90° fan of radius `R` anchored at home plate and bisected by
//! the line through second base, which points straight up the page. Outfield
//! spots are placed by angle on that fan. The infield is a square diamond
//! rotated 45° whose legs are a fixed fraction of `R`; shortstop is
//! interpolated between third and second rather than given an angle.
//!
//! Every distance is a fraction of `R = 0.82 * min(width, height)` except the
//! tuned pixel nudges in [`crate::consts`]. The layout is a pure function of
//! the viewport and is rebuilt on every resize.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::collections::BTreeMap;

use crate::consts::{
    BASE_DISTANCE_FRACTION, BISECTOR_DEG, CATCHER_OFFSET_PX, DH_OUTWARD_NUDGE_PX, DH_RADIUS_FRACTION,
    FIELD_MARGIN_PX, FIELD_RADIUS_FRACTION, FOUL_LINE_SPLIT_DEG, HOME_PLATE_LIFT_PX, INFIELD_BUBBLE_LIFT_PX,
    MOUND_RADIUS_FRACTION, OUTFIELD_INWARD_NUDGE_PX, OUTFIELD_RADIUS_FRACTION, OUTFIELD_SPLIT_DEG,
    PITCHER_RADIUS_FRACTION, SECOND_BASE_DIAGONAL, SHORTSTOP_FRACTION,
};
use crate::position::FieldPosition;
use crate::viewport::{Point, Viewport, sanitize};

/// Where one field position is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSpot {
    pub position: FieldPosition,
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
    pub color: &'static str,
}

impl PositionSpot {
    fn at(position: FieldPosition, pt: Point) -> Self {
        Self {
            position,
            x: pt.x,
            y: pt.y,
            label: position.label(),
            color: position.color(),
        }
    }

    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Base markers and the mound, all derived from home plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diamond {
    pub home: Point,
    pub first: Point,
    pub second: Point,
    pub third: Point,
    pub mound: Point,
    pub mound_radius: f64,
}

/// Full layout for one viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    pub viewport: Viewport,
    /// Field radius `R`, never negative.
    pub radius: f64,
    pub diamond: Diamond,
    /// One spot per field position, keyed in display order.
    pub spots: BTreeMap<FieldPosition, PositionSpot>,
}

impl FieldLayout {
    #[must_use]
    pub fn home(&self) -> Point {
        self.diamond.home
    }

    #[must_use]
    pub fn spot(&self, position: FieldPosition) -> Option<&PositionSpot> {
        self.spots.get(&position)
    }

    /// Look up a spot by raw position code. Section codes have no spot.
    #[must_use]
    pub fn spot_for_code(&self, code: &str) -> Option<&PositionSpot> {
        FieldPosition::parse(code).and_then(|p| self.spot(p))
    }

    /// Angles (degrees) of the left and right foul lines.
    #[must_use]
    pub fn foul_line_angles() -> (f64, f64) {
        (BISECTOR_DEG - FOUL_LINE_SPLIT_DEG, BISECTOR_DEG + FOUL_LINE_SPLIT_DEG)
    }

    /// Where the left and right foul lines meet the outfield arc.
    #[must_use]
    pub fn foul_poles(&self) -> (Point, Point) {
        let (left, right) = Self::foul_line_angles();
        (self.home().polar(left, self.radius), self.home().polar(right, self.radius))
    }
}

/// Derive the layout for a `width` × `height` viewport.
///
/// Non-finite and negative sizes are treated as zero; the result then
/// collapses toward home plate but every coordinate stays finite.
#[must_use]
pub fn field_layout(viewport: Viewport) -> FieldLayout {
    let width = sanitize(viewport.width);
    let height = sanitize(viewport.height);
    let radius = (FIELD_RADIUS_FRACTION * width.min(height)).max(0.0);

    let home = Point::new(width / 2.0, height - FIELD_MARGIN_PX - HOME_PLATE_LIFT_PX);
    let diamond = diamond(home, radius);

    let outfield_r = radius * OUTFIELD_RADIUS_FRACTION;
    let lift = -INFIELD_BUBBLE_LIFT_PX;
    let shortstop = diamond.third.lerp(diamond.second, SHORTSTOP_FRACTION);
    let (_, right_foul) = FieldLayout::foul_line_angles();

    let placed = [
        (FieldPosition::Pitcher, diamond.mound),
        (FieldPosition::Catcher, home.offset(0.0, CATCHER_OFFSET_PX)),
        (FieldPosition::FirstBase, diamond.first.offset(0.0, lift)),
        (FieldPosition::SecondBase, diamond.second.offset(0.0, lift)),
        (FieldPosition::ThirdBase, diamond.third.offset(0.0, lift)),
        (FieldPosition::Shortstop, shortstop.offset(0.0, lift)),
        (
            FieldPosition::LeftField,
            home.polar(BISECTOR_DEG - OUTFIELD_SPLIT_DEG, outfield_r)
                .offset(OUTFIELD_INWARD_NUDGE_PX, 0.0),
        ),
        (FieldPosition::CenterField, home.polar(BISECTOR_DEG, outfield_r)),
        (
            FieldPosition::RightField,
            home.polar(BISECTOR_DEG + OUTFIELD_SPLIT_DEG, outfield_r)
                .offset(-OUTFIELD_INWARD_NUDGE_PX, 0.0),
        ),
        (
            FieldPosition::DesignatedHitter,
            home.polar(right_foul, radius * DH_RADIUS_FRACTION)
                .offset(DH_OUTWARD_NUDGE_PX, 0.0),
        ),
    ];

    let spots = placed
        .into_iter()
        .map(|(position, pt)| (position, PositionSpot::at(position, pt)))
        .collect();

    FieldLayout { viewport: Viewport::new(width, height), radius, diamond, spots }
}

fn diamond(home: Point, radius: f64) -> Diamond {
    let leg = radius * BASE_DISTANCE_FRACTION;
    let (left_foul, right_foul) = FieldLayout::foul_line_angles();
    Diamond {
        home,
        first: home.polar(right_foul, leg),
        second: home.polar(BISECTOR_DEG, leg * SECOND_BASE_DIAGONAL),
        third: home.polar(left_foul, leg),
        mound: home.polar(BISECTOR_DEG, radius * PITCHER_RADIUS_FRACTION),
        mound_radius: radius * MOUND_RADIUS_FRACTION,
    }
}
