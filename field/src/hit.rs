#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::scene::{PositionGroup, Scene};
use crate::viewport::Point;

/// Which part of a position group was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Bubble,
    Badge,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    pub code: &'a str,
    pub part: HitPart,
}

/// Find the position group under `pt`.
///
/// Groups drawn later sit on top, so they are tested first. The selection
/// ring is decoration and is never a hit target.
#[must_use]
pub fn hit_test(pt: Point, scene: &Scene) -> Option<Hit<'_>> {
    scene.groups.iter().rev().find_map(|g| hit_group(pt, g))
}

fn hit_group(pt: Point, group: &PositionGroup) -> Option<Hit<'_>> {
    if let Some((center, radius)) = group.badge() {
        if pt.distance(center) <= radius {
            return Some(Hit { code: &group.code, part: HitPart::Badge });
        }
    }
    if pt.distance(group.center) <= group.radius {
        return Some(Hit { code: &group.code, part: HitPart::Bubble });
    }
    None
}
