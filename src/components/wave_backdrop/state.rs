//! Simulation context owned by the render loop.
//!
//! Bundles everything a frame touches (viewport, waves, particles, theme and
//! the tick clock) so the browser glue only has to feed it frames and resizes.

use fastrand::Rng;

use super::config::{BackdropConfig, PopulationPolicy};
use super::particles::ParticleField;
use super::render;
use super::surface::DrawSurface;
use super::theme::{ColorScheme, Theme};
use super::viewport::Viewport;
use super::waves::WaveField;
use crate::error::Result;

/// Viewport, waves, particles and clock for one backdrop instance.
pub struct BackdropState {
	viewport: Viewport,
	waves: WaveField,
	particles: ParticleField,
	population: PopulationPolicy,
	labels: Vec<String>,
	theme: Theme,
	tick: u64,
}

impl BackdropState {
	/// Validates `config` and seeds the population for `viewport`.
	pub fn new(
		config: &BackdropConfig,
		theme: Theme,
		viewport: Viewport,
		seed: u64,
	) -> Result<Self> {
		config.validate()?;
		let waves = WaveField::new(config.waves.clone())?;
		let particles = ParticleField::new(
			viewport,
			&config.population,
			&config.labels,
			config.drift.clone(),
			waves.wave_count(),
			Rng::with_seed(seed),
		);

		Ok(Self {
			viewport,
			waves,
			particles,
			population: config.population.clone(),
			labels: config.labels.clone(),
			theme,
			tick: 0,
		})
	}

	/// Adopts the new viewport and redistributes the population across it.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.particles.reseed(
			viewport,
			&self.population,
			&self.labels,
			self.waves.wave_count(),
		);
	}

	/// Renders one frame: clear, advance the clock, waves, then particles.
	pub fn frame<S: DrawSurface>(&mut self, surface: &mut S, scheme: ColorScheme) {
		let viewport = self.viewport;
		surface.clear(viewport.width_f64(), viewport.height_f64());
		self.tick = self.tick.wrapping_add(1);

		let palette = self.theme.palette(scheme);
		render::draw_waves(
			surface,
			&self.waves,
			viewport,
			self.tick,
			palette,
			self.theme.wave_line_width,
		);
		self.particles.tick(
			surface,
			viewport,
			self.tick,
			&self.waves,
			palette,
			&self.theme.glyph_font,
		);
	}

	/// Frames rendered so far.
	pub fn tick(&self) -> u64 {
		self.tick
	}

	/// Viewport of the last mount or resize.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// The immutable wave set.
	pub fn waves(&self) -> &WaveField {
		&self.waves
	}

	/// The particle population.
	pub fn particles(&self) -> &ParticleField {
		&self.particles
	}
}
