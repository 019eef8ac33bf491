//! Drawing surface abstraction and its HTML canvas implementation.
//!
//! The field only needs a handful of operations from its surface, collected in
//! [`Surface`]. [`CanvasSurface`] provides them over a `<canvas>` 2D context.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Operations the field performs against its drawable surface.
///
/// Coordinates passed to the drawing methods are logical pixels once
/// [`Surface::set_scale`] has been applied.
pub trait Surface {
	/// Resize the backing store, in device pixels.
	fn set_backing_size(&self, width: u32, height: u32);
	/// Set the on-page size, in logical pixels.
	fn set_display_size(&self, width: f64, height: f64);
	/// Replace the current transform with a uniform scale.
	fn set_scale(&self, ratio: f64);
	/// Backing store size in device pixels.
	fn backing_size(&self) -> (f64, f64);
	/// Erase a rectangle to transparent.
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
	/// Fill a circle with a CSS color.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str);
	/// Stroke a straight segment with a CSS color.
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64);
}

/// A canvas element together with its 2D rendering context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2D context, or `None` when the host cannot provide one.
	pub fn acquire(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn set_backing_size(&self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn set_display_size(&self, width: f64, height: f64) {
		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", width));
		let _ = style.set_property("height", &format!("{}px", height));
	}

	fn set_scale(&self, ratio: f64) {
		let _ = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
	}

	fn backing_size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(fill);
		self.ctx.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64) {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.set_stroke_style_str(stroke);
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}
}
