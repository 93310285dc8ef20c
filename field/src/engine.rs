use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::FieldConfig;
use crate::geometry::{FieldLayout, field_layout};
use crate::hit::hit_test;
use crate::panels::{PositionCard, SectionEntry, position_cards, section_entries};
use crate::position::{Partition, PositionDef};
use crate::render::draw_scene;
use crate::roster::{Assignment, AssignmentBook};
use crate::scene::{FieldProps, Scene, build_scene};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

pub const CURSOR_POINTER: &str = "pointer";
pub const CURSOR_DEFAULT: &str = "default";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A position group was clicked; carries its code.
    PositionClicked(String),
    SetCursor(String),
}

/// Mouse button for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Core engine state: everything that doesn't need the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    props: FieldProps,
    config: FieldConfig,
    viewport: Viewport,
    /// Last container width from the host, before clamping to the config.
    container_width: Option<f64>,
    dpr: f64,
    layout: FieldLayout,
    scene: Scene,
    cursor: &'static str,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(FieldConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: FieldConfig) -> Self {
        let viewport = Viewport::default();
        let layout = field_layout(viewport);
        let props = FieldProps::default();
        let scene = build_scene(&layout, &props, &config);
        Self { props, config, viewport, container_width: None, dpr: 1.0, layout, scene, cursor: CURSOR_DEFAULT }
    }

    // --- Data inputs ---

    /// Replace everything the caller controls at once.
    pub fn set_props(&mut self, props: FieldProps) {
        self.props = props;
        self.rebuild();
    }

    pub fn set_positions(&mut self, positions: Vec<PositionDef>) {
        self.props.positions = positions;
        self.rebuild();
    }

    pub fn set_assignments(&mut self, assignments: Vec<Assignment>) {
        self.props.assigned_players = assignments;
        self.rebuild();
    }

    /// Set the highlighted position. Purely visual; clicks are still
    /// reported through [`Action::PositionClicked`].
    pub fn set_selected(&mut self, code: Option<String>) {
        self.props.selected_position = code;
        self.rebuild();
    }

    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
        let width = self.container_width.unwrap_or(self.viewport.width);
        self.viewport = Viewport::fit(width, &self.config);
        self.relayout();
    }

    // --- Viewport ---

    /// Size the field for a container `container_width` CSS pixels wide.
    pub fn set_container_width(&mut self, container_width: f64, dpr: f64) {
        self.container_width = Some(container_width);
        let viewport = Viewport::fit(container_width, &self.config);
        self.set_viewport(viewport, dpr);
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, viewport: Viewport, dpr: f64) {
        self.viewport = viewport;
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = field_layout(self.viewport);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.scene = build_scene(&self.layout, &self.props, &self.config);
        log::debug!(
            "field scene: {} groups, viewport {:.0}x{:.0}",
            self.scene.group_count(),
            self.viewport.width,
            self.viewport.height
        );

        let partition = Partition::of(&self.props.positions);
        let book = AssignmentBook::new(&self.props.assigned_players);
        let unmatched = book.unmatched_codes(partition.codes());
        if !unmatched.is_empty() {
            log::debug!("field: assignments with unconfigured codes ignored: {unmatched:?}");
        }
    }

    // --- Input events ---

    /// Primary press on a position group reports its code.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        match hit_test(screen_pt, &self.scene) {
            Some(hit) => vec![Action::PositionClicked(hit.code.to_string())],
            None => Vec::new(),
        }
    }

    /// Switch the cursor when entering or leaving a position group.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let cursor = if hit_test(screen_pt, &self.scene).is_some() { CURSOR_POINTER } else { CURSOR_DEFAULT };
        self.update_cursor(cursor)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.update_cursor(CURSOR_DEFAULT)
    }

    fn update_cursor(&mut self, cursor: &'static str) -> Vec<Action> {
        if self.cursor == cursor {
            return Vec::new();
        }
        self.cursor = cursor;
        vec![Action::SetCursor(cursor.to_string())]
    }

    // --- Queries ---

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    #[must_use]
    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.cursor
    }

    #[must_use]
    pub fn cards(&self) -> Vec<PositionCard> {
        position_cards(&self.props)
    }

    #[must_use]
    pub fn sections(&self) -> Vec<SectionEntry> {
        section_entries(&self.props)
    }
}

/// The full field engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: FieldConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Delegated data inputs ---

    pub fn set_props(&mut self, props: FieldProps) {
        self.core.set_props(props);
    }

    pub fn set_selected(&mut self, code: Option<String>) {
        self.core.set_selected(code);
    }

    // --- Viewport ---

    /// Fit the field to `container_width` and resize the canvas to match.
    ///
    /// # Errors
    ///
    /// Returns the `JsValue` raised while setting the canvas CSS size.
    pub fn resize(&mut self, container_width: f64, dpr: f64) -> Result<(), JsValue> {
        self.core.set_container_width(container_width, dpr);
        let viewport = self.core.viewport();
        let dpr = self.core.dpr();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((viewport.width * dpr).round() as u32);
            self.canvas.set_height((viewport.height * dpr).round() as u32);
        }
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;
        Ok(())
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Clear the canvas and draw the current scene.
    ///
    /// # Errors
    ///
    /// Returns the `JsValue` raised by the 2D context.
    pub fn render(&self) -> Result<(), JsValue> {
        let mut ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        draw_scene(&mut ctx, self.core.scene(), self.core.dpr())
    }
}
