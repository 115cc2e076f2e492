//! Drawable area dimensions.

use web_sys::Window;

use crate::error::{BackdropError, Result};

/// Current pixel size of the drawable area. No history is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
	/// Width in CSS pixels.
	pub width: u32,
	/// Height in CSS pixels.
	pub height: u32,
}

impl Viewport {
	/// Viewport of the given size.
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// Reads `innerWidth`/`innerHeight` from the window.
	pub fn from_window(window: &Window) -> Result<Self> {
		let width = window
			.inner_width()
			.map_err(BackdropError::js("innerWidth"))?
			.as_f64()
			.unwrap_or_default();
		let height = window
			.inner_height()
			.map_err(BackdropError::js("innerHeight"))?
			.as_f64()
			.unwrap_or_default();
		Ok(Self::new(width.max(0.0) as u32, height.max(0.0) as u32))
	}

	/// Width as a float, for drawing math.
	pub fn width_f64(&self) -> f64 {
		f64::from(self.width)
	}

	/// Height as a float, for drawing math.
	pub fn height_f64(&self) -> f64 {
		f64::from(self.height)
	}
}
