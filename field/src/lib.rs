//! Depth-chart field engine.
//!
//! Lays out a baseball field for a viewport, places a bubble for every
//! configured field position, and shows the assigned players by depth order.
//! Positions that are not on the field (bench, injured list, ...) are
//! surfaced as sections instead. The crate compiles natively for tests and
//! to WebAssembly for the browser, where [`engine::Engine`] draws onto a
//! canvas and reports clicks back to the host as [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`geometry`] | Field radius, diamond and position anchors for a viewport |
//! | [`viewport`] | Points, viewport sizing and clamping |
//! | [`position`] | Position codes, catalog entries and the field/section split |
//! | [`roster`] | Players, assignments and depth ordering |
//! | [`scene`] | Scene building from props and layout |
//! | [`hit`] | Hit-testing against position groups |
//! | [`panels`] | Card grid and section view models |
//! | [`render`] | Scene rendering onto a `Canvas2D` surface |
//! | [`resize`] | Scoped window resize listener |
//! | [`config`] | Tunables, theme colors and config errors |
//! | [`color`] | Hex color parsing helpers |
//! | [`consts`] | Shared numeric constants (angles, fractions, pixel offsets) |

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod panels;
pub mod position;
pub mod render;
pub mod resize;
pub mod roster;
pub mod scene;
pub mod viewport;
