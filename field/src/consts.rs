//! Shared numeric constants for the field crate.
//!
//! The pixel offsets are tuned by eye against the rendered diamond. Keep the
//! literal values; the layout is judged by how it looks, not by a derivation.

// ── Anchor ──────────────────────────────────────────────────────

/// Gap between the viewport edge and the field, in pixels.
pub const FIELD_MARGIN_PX: f64 = 40.0;

/// Extra lift of home plate above the bottom margin, in pixels.
pub const HOME_PLATE_LIFT_PX: f64 = 10.0;

/// Field radius as a fraction of `min(width, height)`.
pub const FIELD_RADIUS_FRACTION: f64 = 0.82;

// ── Angles ──────────────────────────────────────────────────────

/// Direction from home plate through second base (straight up the page).
pub const BISECTOR_DEG: f64 = -90.0;

/// Half of the 90° fan between the foul lines.
pub const FOUL_LINE_SPLIT_DEG: f64 = 45.0;

/// Angular split between center field and the corner outfielders.
pub const OUTFIELD_SPLIT_DEG: f64 = 30.0;

// ── Radial fractions of R ───────────────────────────────────────

pub const PITCHER_RADIUS_FRACTION: f64 = 0.26;
pub const OUTFIELD_RADIUS_FRACTION: f64 = 0.78;
pub const DH_RADIUS_FRACTION: f64 = 0.82;

/// Home-to-first (and home-to-third) distance as a fraction of R.
pub const BASE_DISTANCE_FRACTION: f64 = 0.35;

/// Home-to-second distance as a multiple of the home-to-first leg.
pub const SECOND_BASE_DIAGONAL: f64 = 1.4;

/// Shortstop position along the third-to-second segment.
pub const SHORTSTOP_FRACTION: f64 = 0.59;

// ── Pixel nudges ────────────────────────────────────────────────

/// Catcher sits this far below home plate.
pub const CATCHER_OFFSET_PX: f64 = 30.0;

/// Corner outfielders move this far toward center.
pub const OUTFIELD_INWARD_NUDGE_PX: f64 = 12.0;

/// Designated hitter moves this far right of the foul line.
pub const DH_OUTWARD_NUDGE_PX: f64 = 36.0;

/// Infield bubbles sit this far above their base marker.
pub const INFIELD_BUBBLE_LIFT_PX: f64 = 22.0;

// ── Drawing ─────────────────────────────────────────────────────

/// Selection ring radius beyond the bubble radius.
pub const SELECTION_RING_GAP_PX: f64 = 6.0;

/// Dash segment length for open bubbles and the selection ring.
pub const DASH_PX: f64 = 4.0;

/// Half-width of a base marker square.
pub const BASE_MARKER_HALF_PX: f64 = 7.0;

/// Pitcher's mound radius as a fraction of R.
pub const MOUND_RADIUS_FRACTION: f64 = 0.035;

/// Overflow badge radius.
pub const BADGE_RADIUS_PX: f64 = 9.0;
