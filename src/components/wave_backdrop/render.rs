//! Drawing for waves and glyphs.
//!
//! Frame order: clear, waves, then each particle's glyph on top.

use super::particles::Particle;
use super::surface::DrawSurface;
use super::theme::Palette;
use super::viewport::Viewport;
use super::waves::WaveField;

/// Strokes every wave as one polyline sampled at each integer x.
pub fn draw_waves<S: DrawSurface>(
	surface: &mut S,
	waves: &WaveField,
	viewport: Viewport,
	tick: u64,
	palette: &Palette,
	line_width: f64,
) {
	if viewport.width == 0 {
		return;
	}
	let (time, height) = (tick as f64, viewport.height_f64());

	for wave in waves.waves() {
		surface.begin_path();
		surface.move_to(0.0, wave.height_at(0.0, time, height));
		for x in 1..viewport.width {
			let x = f64::from(x);
			surface.line_to(x, wave.height_at(x, time, height));
		}
		surface.stroke(palette.wave, line_width);
	}
}

/// Draws one particle's label on its wave, offset by its jitter.
pub fn draw_glyph<S: DrawSurface>(
	surface: &mut S,
	particle: &Particle,
	waves: &WaveField,
	viewport: Viewport,
	tick: u64,
	palette: &Palette,
	font: &str,
) {
	let y = waves.height_at(
		particle.wave_index,
		particle.x,
		tick as f64,
		viewport.height_f64(),
	) + particle.vertical_jitter;
	surface.fill_text(
		&particle.label,
		particle.x,
		y,
		font,
		palette.glyph.with_alpha(particle.opacity),
	);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::wave_backdrop::surface::{DrawOp, RecordingSurface};
	use crate::components::wave_backdrop::theme::{ColorScheme, Theme};

	#[test]
	fn each_wave_is_one_polyline_across_the_width() {
		let mut surface = RecordingSurface::default();
		let theme = Theme::default();
		let waves = WaveField::default();
		draw_waves(
			&mut surface,
			&waves,
			Viewport::new(200, 100),
			5,
			theme.palette(ColorScheme::Dark),
			theme.wave_line_width,
		);

		assert_eq!(surface.strokes(), waves.wave_count());
		let moves = surface.ops.iter().filter(|op| matches!(op, DrawOp::MoveTo(..))).count();
		let lines = surface.ops.iter().filter(|op| matches!(op, DrawOp::LineTo(..))).count();
		assert_eq!(moves, 3);
		assert_eq!(lines, 3 * 199);
		assert!(surface.ops.contains(&DrawOp::Stroke {
			color: theme.dark.wave,
			line_width: 1.5
		}));
	}

	#[test]
	fn zero_width_draws_nothing() {
		let mut surface = RecordingSurface::default();
		let theme = Theme::default();
		draw_waves(
			&mut surface,
			&WaveField::default(),
			Viewport::new(0, 100),
			1,
			&theme.light,
			1.5,
		);
		assert!(surface.ops.is_empty());
	}

	#[test]
	fn glyph_sits_on_its_wave_with_particle_opacity() {
		let mut surface = RecordingSurface::default();
		let theme = Theme::default();
		let waves = WaveField::default();
		let particle = Particle {
			x: 120.0,
			label: ".PSD".into(),
			wave_index: 1,
			vertical_jitter: -7.5,
			speed: 0.45,
			opacity: 0.3,
		};
		let viewport = Viewport::new(800, 600);
		draw_glyph(&mut surface, &particle, &waves, viewport, 10, &theme.light, &theme.glyph_font);

		let expected_y = waves.height_at(1, 120.0, 10.0, 600.0) - 7.5;
		match surface.ops.as_slice() {
			[DrawOp::Text { text, x, y, font, color }] => {
				assert_eq!(text, ".PSD");
				assert_eq!(*x, 120.0);
				assert_eq!(*y, expected_y);
				assert_eq!(font, &theme.glyph_font);
				assert_eq!(*color, theme.light.glyph.with_alpha(0.3));
			}
			other => panic!("unexpected ops: {other:?}"),
		}
	}
}
