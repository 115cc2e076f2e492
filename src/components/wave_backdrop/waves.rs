//! Sinusoidal "signal" curves the glyphs ride on.

use serde::Deserialize;

use crate::error::{BackdropError, Result};

/// Shape and motion of one sine curve. Never mutated after startup.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WaveDescriptor {
	/// Resting height as a fraction of the viewport height (0.0 = top, 1.0 = bottom).
	pub baseline_fraction: f64,
	/// Peak displacement from the baseline, in pixels.
	pub amplitude: f64,
	/// Radians per horizontal pixel.
	pub spatial_frequency: f64,
	/// Radians per tick.
	pub temporal_speed: f64,
	/// Phase offset in radians.
	pub phase: f64,
}

impl WaveDescriptor {
	/// Builds a descriptor from its five parameters, in field order.
	pub const fn new(
		baseline_fraction: f64,
		amplitude: f64,
		spatial_frequency: f64,
		temporal_speed: f64,
		phase: f64,
	) -> Self {
		Self {
			baseline_fraction,
			amplitude,
			spatial_frequency,
			temporal_speed,
			phase,
		}
	}

	/// Vertical position of the curve at `x` and `time` (in ticks).
	pub fn height_at(&self, x: f64, time: f64, viewport_height: f64) -> f64 {
		self.baseline_fraction * viewport_height
			+ self.amplitude
				* (x * self.spatial_frequency + time * self.temporal_speed + self.phase).sin()
	}
}

/// The three overlapping curves of the landing page.
pub fn default_waves() -> Vec<WaveDescriptor> {
	vec![
		WaveDescriptor::new(0.5, 50.0, 0.005, 0.02, 0.0),
		WaveDescriptor::new(0.5, 30.0, 0.01, 0.015, 2.0),
		WaveDescriptor::new(0.5, 70.0, 0.003, 0.01, 4.0),
	]
}

/// Non-empty, immutable set of waves.
#[derive(Clone, Debug)]
pub struct WaveField {
	waves: Vec<WaveDescriptor>,
}

impl WaveField {
	/// Fails with [`BackdropError::EmptyWaveField`] when `waves` is empty.
	pub fn new(waves: Vec<WaveDescriptor>) -> Result<Self> {
		if waves.is_empty() {
			return Err(BackdropError::EmptyWaveField);
		}
		Ok(Self { waves })
	}

	/// Always at least 1.
	pub fn wave_count(&self) -> usize {
		self.waves.len()
	}

	/// All descriptors, in draw order.
	pub fn waves(&self) -> &[WaveDescriptor] {
		&self.waves
	}

	/// Height of wave `index` at `x`. `index` must be below [`Self::wave_count`].
	pub fn height_at(&self, index: usize, x: f64, time: f64, viewport_height: f64) -> f64 {
		self.waves[index].height_at(x, time, viewport_height)
	}
}

impl Default for WaveField {
	fn default() -> Self {
		Self {
			waves: default_waves(),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::TAU;

	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(0.0)]
	#[case(137.0)]
	#[case(1920.0)]
	fn height_is_periodic_in_time(#[case] x: f64) {
		for wave in default_waves() {
			let period = TAU / wave.temporal_speed;
			for tick in [0.0, 1.0, 250.0, 12_345.0] {
				let a = wave.height_at(x, tick, 900.0);
				let b = wave.height_at(x, tick + period, 900.0);
				assert!((a - b).abs() < 1e-6, "x={x} tick={tick}: {a} vs {b}");
			}
		}
	}

	#[rstest]
	#[case(600)]
	#[case(1080)]
	fn baseline_at_origin_with_zero_phase(#[case] height: u32) {
		let wave = WaveDescriptor::new(0.5, 50.0, 0.005, 0.02, 0.0);
		assert_eq!(wave.height_at(0.0, 0.0, f64::from(height)), 0.5 * f64::from(height));
	}

	#[test]
	fn amplitude_bounds_displacement() {
		let field = WaveField::default();
		for (i, wave) in field.waves().iter().enumerate() {
			for x in (0..2000).step_by(7) {
				let y = field.height_at(i, f64::from(x), 42.0, 800.0);
				assert!((y - 400.0).abs() <= wave.amplitude + 1e-9);
			}
		}
	}

	#[test]
	fn empty_field_is_rejected() {
		assert!(matches!(
			WaveField::new(Vec::new()),
			Err(BackdropError::EmptyWaveField)
		));
	}
}
