//! Drawing seam between the simulation and the HTML canvas.

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// The handful of 2D operations the backdrop needs.
pub trait DrawSurface {
	/// Clears the rectangle from the origin to `(width, height)`.
	fn clear(&mut self, width: f64, height: f64);
	/// Starts a new, empty path.
	fn begin_path(&mut self);
	/// Moves the pen without drawing.
	fn move_to(&mut self, x: f64, y: f64);
	/// Extends the current path with a straight segment.
	fn line_to(&mut self, x: f64, y: f64);
	/// Strokes the current path.
	fn stroke(&mut self, color: Color, line_width: f64);
	/// Fills `text` with its baseline starting at `(x, y)`.
	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color);
}

/// [`DrawSurface`] backed by a browser canvas context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wraps a 2D context obtained from the backdrop canvas.
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl DrawSurface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ctx.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ctx.line_to(x, y);
	}

	fn stroke(&mut self, color: Color, line_width: f64) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(line_width);
		self.ctx.stroke();
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color) {
		self.ctx.set_font(font);
		self.ctx.set_fill_style_str(&color.to_css());
		let _ = self.ctx.fill_text(text, x, y);
	}
}

/// One recorded call on a [`RecordingSurface`].
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear { width: f64, height: f64 },
	BeginPath,
	MoveTo(f64, f64),
	LineTo(f64, f64),
	Stroke { color: Color, line_width: f64 },
	Text { text: String, x: f64, y: f64, font: String, color: Color },
}

/// Surface that records calls instead of drawing.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl RecordingSurface {
	pub fn texts(&self) -> impl Iterator<Item = (&str, f64, f64, Color)> {
		self.ops.iter().filter_map(|op| match op {
			DrawOp::Text { text, x, y, color, .. } => Some((text.as_str(), *x, *y, *color)),
			_ => None,
		})
	}

	pub fn strokes(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Stroke { .. }))
			.count()
	}
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(DrawOp::Clear { width, height });
	}

	fn begin_path(&mut self) {
		self.ops.push(DrawOp::BeginPath);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ops.push(DrawOp::MoveTo(x, y));
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ops.push(DrawOp::LineTo(x, y));
	}

	fn stroke(&mut self, color: Color, line_width: f64) {
		self.ops.push(DrawOp::Stroke { color, line_width });
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Color) {
		self.ops.push(DrawOp::Text {
			text: text.to_string(),
			x,
			y,
			font: font.to_string(),
			color,
		});
	}
}
