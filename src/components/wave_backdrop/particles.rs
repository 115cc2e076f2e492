//! Text glyphs drifting along the waves.
//!
//! Particles are never destroyed while a population lives: when one leaves the
//! right edge it wraps to the left and re-rolls its motion, so the render loop
//! runs allocation-free in steady state.

use fastrand::Rng;
use log::{debug, warn};

use super::config::{DriftStyle, PopulationPolicy};
use super::render;
use super::surface::DrawSurface;
use super::theme::Palette;
use super::viewport::Viewport;
use super::waves::WaveField;

/// One drifting label.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position in pixels; kept within the wrap margins.
	pub x: f64,
	/// Glyph text, fixed for the particle's lifetime.
	pub label: String,
	/// Always a valid index into the [`WaveField`] the particle was rolled against.
	pub wave_index: usize,
	/// Offset from the wave in pixels.
	pub vertical_jitter: f64,
	/// Pixels per tick.
	pub speed: f64,
	/// Glyph alpha.
	pub opacity: f64,
}

impl Particle {
	/// Places a labelled particle at `x` with freshly rolled motion.
	pub fn new(
		x: f64,
		label: String,
		style: &DriftStyle,
		wave_count: usize,
		rng: &mut Rng,
	) -> Self {
		let mut particle = Self {
			x,
			label,
			wave_index: 0,
			vertical_jitter: 0.0,
			speed: style.base_speed,
			opacity: style.opacity_min,
		};
		particle.respawn(style, wave_count, rng);
		particle
	}

	/// Re-rolls wave, jitter, speed and opacity. The label is kept so that
	/// on-screen labels stay unique.
	pub fn respawn(&mut self, style: &DriftStyle, wave_count: usize, rng: &mut Rng) {
		self.wave_index = rng.usize(..wave_count);
		self.vertical_jitter = (rng.f64() * 2.0 - 1.0) * style.jitter_range;
		self.speed = style.base_speed + rng.f64() * style.speed_jitter;
		self.opacity = style.opacity_min + rng.f64() * (style.opacity_max - style.opacity_min);
	}

	/// Moves right by `speed`, wrapping to `-margin` once past `width + margin`.
	pub fn advance(
		&mut self,
		viewport_width: f64,
		style: &DriftStyle,
		wave_count: usize,
		rng: &mut Rng,
	) {
		self.x += self.speed;
		if self.x > viewport_width + style.margin {
			self.x = -style.margin;
			self.respawn(style, wave_count, rng);
		}
	}
}

/// The particle population plus the randomness that drives it.
pub struct ParticleField {
	particles: Vec<Particle>,
	style: DriftStyle,
	rng: Rng,
}

impl ParticleField {
	/// Seeds a population for `viewport`. `wave_count` must be at least 1.
	pub fn new(
		viewport: Viewport,
		policy: &PopulationPolicy,
		labels: &[String],
		style: DriftStyle,
		wave_count: usize,
		rng: Rng,
	) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			style,
			rng,
		};
		field.reseed(viewport, policy, labels, wave_count);
		field
	}

	/// Rebuilds the population for `viewport`: evenly spaced, one catalog label per slot.
	pub fn reseed(
		&mut self,
		viewport: Viewport,
		policy: &PopulationPolicy,
		labels: &[String],
		wave_count: usize,
	) {
		self.particles.clear();
		if labels.is_empty() {
			warn!("wave-backdrop: empty label catalog, no particles seeded");
			return;
		}

		let count = policy.count_for(viewport.width);
		if count > labels.len() {
			warn!(
				"wave-backdrop: {} particles but only {} labels, some will repeat",
				count,
				labels.len()
			);
		}

		let spacing = viewport.width_f64() / count.max(1) as f64;
		self.particles.reserve(count);
		for i in 0..count {
			let label = labels[i % labels.len()].clone();
			self.particles.push(Particle::new(
				spacing * i as f64,
				label,
				&self.style,
				wave_count,
				&mut self.rng,
			));
		}
		debug!(
			"wave-backdrop: seeded {} particles for {}x{}",
			count, viewport.width, viewport.height
		);
	}

	/// Advances then draws every particle, in stored order.
	pub fn tick<S: DrawSurface>(
		&mut self,
		surface: &mut S,
		viewport: Viewport,
		tick: u64,
		waves: &WaveField,
		palette: &Palette,
		font: &str,
	) {
		let width = viewport.width_f64();
		for p in &mut self.particles {
			p.advance(width, &self.style, waves.wave_count(), &mut self.rng);
			render::draw_glyph(surface, p, waves, viewport, tick, palette, font);
		}
	}

	/// Current population, in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Motion ranges used for every respawn.
	pub fn style(&self) -> &DriftStyle {
		&self.style
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rstest::rstest;

	use super::*;
	use crate::components::wave_backdrop::config::DEFAULT_LABELS;

	fn labels() -> Vec<String> {
		DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
	}

	fn field(width: u32, policy: &PopulationPolicy, seed: u64) -> ParticleField {
		ParticleField::new(
			Viewport::new(width, 900),
			policy,
			&labels(),
			DriftStyle::default(),
			3,
			Rng::with_seed(seed),
		)
	}

	#[test]
	fn respawn_stays_within_bounds() {
		let style = DriftStyle::default();
		let mut rng = Rng::with_seed(42);
		let mut p = Particle::new(0.0, ".WAV".into(), &style, 3, &mut rng);
		for _ in 0..10_000 {
			p.respawn(&style, 3, &mut rng);
			assert!(p.wave_index < 3);
			assert!((style.opacity_min..style.opacity_max).contains(&p.opacity));
			assert!(p.vertical_jitter.abs() <= style.jitter_range);
			assert!(p.speed >= style.base_speed && p.speed < style.base_speed + style.speed_jitter);
		}
		assert_eq!(p.label, ".WAV");
	}

	#[rstest]
	#[case(320)]
	#[case(1280)]
	fn positions_stay_inside_margins(#[case] width: u32) {
		let mut field = field(width, &PopulationPolicy::default(), 9);
		let margin = field.style().margin;
		let style = field.style().clone();
		for _ in 0..20_000 {
			for p in &mut field.particles {
				p.advance(f64::from(width), &style, 3, &mut field.rng);
				assert!(p.x >= -margin && p.x <= f64::from(width) + margin, "x = {}", p.x);
				assert!(p.wave_index < 3);
			}
		}
	}

	#[test]
	fn wrap_rerolls_motion() {
		let style = DriftStyle::default();
		let width = 1000.0;
		let mut rng = Rng::with_seed(3);
		let mut p = Particle::new(width + 51.0, ".JS".into(), &style, 3, &mut rng);
		// Out-of-range values a respawn cannot produce.
		p.speed = 5.0;
		p.opacity = 0.9;
		p.vertical_jitter = 100.0;
		p.wave_index = 2;

		p.advance(width, &style, 1, &mut rng);

		assert_eq!(p.x, -50.0);
		assert!(p.speed < 5.0);
		assert!(p.opacity < 0.9);
		assert!(p.vertical_jitter.abs() <= 25.0);
		assert_eq!(p.wave_index, 0);
		assert_eq!(p.label, ".JS");
	}

	#[test]
	fn advance_without_wrap_keeps_motion() {
		let style = DriftStyle::default();
		let mut rng = Rng::with_seed(5);
		let mut p = Particle::new(10.0, ".AI".into(), &style, 3, &mut rng);
		let before = p.clone();
		p.advance(1000.0, &style, 3, &mut rng);
		assert_eq!(p.x, before.x + before.speed);
		assert_eq!(p.opacity, before.opacity);
		assert_eq!(p.wave_index, before.wave_index);
	}

	#[test]
	fn twelve_particles_are_evenly_spaced_and_unique() {
		let width = 1200;
		let field = field(width, &PopulationPolicy::fixed(12), 1);
		let particles = field.particles();
		assert_eq!(particles.len(), 12);

		let unique: HashSet<_> = particles.iter().map(|p| p.label.as_str()).collect();
		assert_eq!(unique.len(), 12);

		for (i, p) in particles.iter().enumerate() {
			assert_eq!(p.x, f64::from(width) / 12.0 * i as f64);
		}
		assert!(particles.windows(2).all(|w| w[0].x < w[1].x));
	}

	#[test]
	fn labels_stay_unique_across_wraps() {
		let mut field = field(400, &PopulationPolicy::fixed(14), 11);
		let style = field.style().clone();
		for _ in 0..5_000 {
			for p in &mut field.particles {
				p.advance(400.0, &style, 3, &mut field.rng);
			}
		}
		let unique: HashSet<_> = field.particles().iter().map(|p| p.label.as_str()).collect();
		assert_eq!(unique.len(), 14);
	}

	#[test]
	fn reseed_follows_breakpoint() {
		let policy = PopulationPolicy::default();
		let mut field = field(1440, &policy, 2);
		assert_eq!(field.particles().len(), 12);
		field.reseed(Viewport::new(500, 900), &policy, &labels(), 3);
		assert_eq!(field.particles().len(), 6);
		assert!(field.particles().iter().all(|p| p.x < 500.0));
	}

	#[test]
	fn oversized_population_cycles_catalog() {
		let field = field(2000, &PopulationPolicy::fixed(16), 4);
		let particles = field.particles();
		assert_eq!(particles[14].label, particles[0].label);
		assert_eq!(particles[15].label, particles[1].label);
	}

	#[test]
	fn empty_catalog_seeds_nothing() {
		let field = ParticleField::new(
			Viewport::new(1280, 720),
			&PopulationPolicy::default(),
			&[],
			DriftStyle::default(),
			3,
			Rng::with_seed(0),
		);
		assert!(field.particles().is_empty());
	}

	#[test]
	fn same_seed_same_population() {
		let a = field(1024, &PopulationPolicy::default(), 77);
		let b = field(1024, &PopulationPolicy::default(), 77);
		for (pa, pb) in a.particles().iter().zip(b.particles()) {
			assert_eq!(pa.speed, pb.speed);
			assert_eq!(pa.wave_index, pb.wave_index);
			assert_eq!(pa.vertical_jitter, pb.vertical_jitter);
		}
	}
}
