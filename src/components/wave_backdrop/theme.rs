//! Light/dark styling for the backdrop.
//!
//! The palette is chosen per frame from the host's color-scheme preference, so
//! switching the OS theme recolors the animation without a reload.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always the functional `rgba()` form, since glyph alpha varies per particle.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Host color-scheme preference, sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
	/// Light page background.
	#[default]
	Light,
	/// Dark page background.
	Dark,
}

impl ColorScheme {
	/// Maps the result of the `prefers-color-scheme: dark` query.
	pub fn from_dark(is_dark: bool) -> Self {
		if is_dark { Self::Dark } else { Self::Light }
	}
}

/// Colors used under one color scheme.
#[derive(Clone, Debug)]
pub struct Palette {
	/// Stroke color for every wave.
	pub wave: Color,
	/// Glyph color; the alpha is replaced by each particle's opacity.
	pub glyph: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Palette under the light scheme.
	pub light: Palette,
	/// Palette under the dark scheme.
	pub dark: Palette,
	/// Wave stroke width in pixels.
	pub wave_line_width: f64,
	/// CSS font shorthand for the glyphs.
	pub glyph_font: String,
}

impl Theme {
	/// Palette to use for `scheme`.
	pub fn palette(&self, scheme: ColorScheme) -> &Palette {
		match scheme {
			ColorScheme::Light => &self.light,
			ColorScheme::Dark => &self.dark,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			light: Palette {
				wave: Color::rgba(0, 174, 239, 0.2),
				glyph: Color::rgb(30, 30, 30),
			},
			dark: Palette {
				wave: Color::rgba(0, 174, 239, 0.3),
				glyph: Color::rgb(255, 255, 255),
			},
			wave_line_width: 1.5,
			glyph_font: r#"12px "Space Mono", monospace"#.to_string(),
		}
	}
}
