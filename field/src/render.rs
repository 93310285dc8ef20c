//! Rendering: draws a [`Scene`] onto a drawing surface.
//!
//! [`draw_scene`] is the single writer. Every pass clears the whole surface
//! first and then paints the background and each position group, so a pass
//! never depends on what the previous one left behind.
//!
//! The browser surface is [`web_sys::CanvasRenderingContext2d`]. All
//! fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`; the
//! host logs the result of [`crate::engine::Engine::render`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::scene::{FontWeight, Scene, Shape, Stroke};
use crate::viewport::Viewport;

/// Something a scene can be drawn onto.
pub trait Surface {
    type Error;

    /// Reset transforms, scale for `dpr`, and erase everything drawn so far.
    ///
    /// # Errors
    ///
    /// Surface-specific failure to reset state.
    fn clear(&mut self, viewport: Viewport, dpr: f64) -> Result<(), Self::Error>;

    /// Start the group for one position code.
    ///
    /// # Errors
    ///
    /// Surface-specific failure.
    fn begin_group(&mut self, code: &str) -> Result<(), Self::Error>;

    fn end_group(&mut self);

    /// Paint one primitive.
    ///
    /// # Errors
    ///
    /// Surface-specific failure.
    fn draw(&mut self, shape: &Shape) -> Result<(), Self::Error>;
}

/// Clear `surface` and draw `scene` onto it.
///
/// # Errors
///
/// Returns the first error raised by the surface.
pub fn draw_scene<S: Surface>(surface: &mut S, scene: &Scene, dpr: f64) -> Result<(), S::Error> {
    surface.clear(scene.viewport, dpr)?;

    for shape in &scene.background {
        surface.draw(shape)?;
    }

    for group in &scene.groups {
        surface.begin_group(&group.code)?;
        for shape in &group.shapes {
            if let Err(err) = surface.draw(shape) {
                surface.end_group();
                return Err(err);
            }
        }
        surface.end_group();
    }
    Ok(())
}

// =============================================================
// Canvas2D
// =============================================================

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, viewport: Viewport, dpr: f64) -> Result<(), JsValue> {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        self.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        Ok(())
    }

    fn begin_group(&mut self, _code: &str) -> Result<(), JsValue> {
        self.save();
        Ok(())
    }

    fn end_group(&mut self) {
        self.restore();
    }

    fn draw(&mut self, shape: &Shape) -> Result<(), JsValue> {
        match shape {
            Shape::Wedge { center, radius, start_deg, end_deg, fill } => {
                if *radius <= 0.0 {
                    return Ok(());
                }
                self.begin_path();
                self.move_to(center.x, center.y);
                self.arc(center.x, center.y, *radius, start_deg.to_radians(), end_deg.to_radians())?;
                self.close_path();
                self.set_fill_style_str(fill);
                self.fill();
                Ok(())
            }
            Shape::Polygon { points, fill, stroke } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                self.begin_path();
                self.move_to(first.x, first.y);
                for pt in rest {
                    self.line_to(pt.x, pt.y);
                }
                self.close_path();
                fill_and_stroke(self, fill.as_deref(), stroke.as_ref())
            }
            Shape::Line { from, to, stroke } => {
                self.begin_path();
                self.move_to(from.x, from.y);
                self.line_to(to.x, to.y);
                fill_and_stroke(self, None, Some(stroke))
            }
            Shape::Circle { center, radius, fill, stroke } => {
                if *radius <= 0.0 {
                    return Ok(());
                }
                self.begin_path();
                self.arc(center.x, center.y, *radius, 0.0, 2.0 * PI)?;
                fill_and_stroke(self, fill.as_deref(), stroke.as_ref())
            }
            Shape::Text { at, text, size_px, color, weight } => {
                let weight = match weight {
                    FontWeight::Normal => "",
                    FontWeight::Bold => "bold ",
                };
                self.set_font(&format!("{weight}{:.0}px sans-serif", size_px.max(1.0)));
                self.set_text_align("center");
                self.set_text_baseline("middle");
                self.set_fill_style_str(color);
                self.fill_text(text, at.x, at.y)
            }
        }
    }
}

fn fill_and_stroke(ctx: &CanvasRenderingContext2d, fill: Option<&str>, stroke: Option<&Stroke>) -> Result<(), JsValue> {
    if let Some(fill) = fill {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
    if let Some(stroke) = stroke {
        ctx.set_stroke_style_str(&stroke.color);
        ctx.set_line_width(stroke.width);
        let dash = js_sys::Array::new();
        if let Some(len) = stroke.dash {
            dash.push(&len.into());
            dash.push(&len.into());
        }
        ctx.set_line_dash(&dash)?;
        ctx.stroke();
        ctx.set_line_dash(&js_sys::Array::new())?;
    }
    Ok(())
}
