//! Tunable parameters, deserializable from the page's JSON config block.
//!
//! Every field is optional in JSON; anything missing takes the landing page's
//! values.

use serde::Deserialize;

use super::waves::{WaveDescriptor, default_waves};
use crate::error::{BackdropError, Result};

/// File extensions carried by the waves.
pub const DEFAULT_LABELS: [&str; 14] = [
	".WAV", ".MP3", ".AI", ".PSD", ".AE", ".SVG", ".PNG", ".JPG", ".PDF", ".MP4", ".MOV",
	".HTML", ".CSS", ".JS",
];

/// Per-particle motion ranges rolled at every respawn.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriftStyle {
	/// Minimum rightward speed (pixels per tick).
	pub base_speed: f64,
	/// Random speed added on top of `base_speed`, in `[0, speed_jitter)`.
	pub speed_jitter: f64,
	/// Half-width of the vertical offset range around the wave.
	pub jitter_range: f64,
	/// Lowest glyph opacity, inclusive.
	pub opacity_min: f64,
	/// Highest glyph opacity, exclusive. At most 1.0.
	pub opacity_max: f64,
	/// How far past either edge a glyph travels before wrapping.
	pub margin: f64,
}

impl DriftStyle {
	/// Rejects ranges that would let a glyph escape the margins or leave `0..=1` opacity.
	/// NaN fails every check.
	#[allow(
		clippy::neg_cmp_op_on_partial_ord,
		reason = "negated comparisons also reject NaN"
	)]
	pub fn validate(&self) -> Result<()> {
		if !(self.base_speed > 0.0) {
			return Err(BackdropError::InvalidDrift("base_speed must be positive"));
		}
		if !(self.speed_jitter >= 0.0) {
			return Err(BackdropError::InvalidDrift("speed_jitter must not be negative"));
		}
		if !(self.jitter_range >= 0.0) {
			return Err(BackdropError::InvalidDrift("jitter_range must not be negative"));
		}
		if !(self.margin >= 0.0) {
			return Err(BackdropError::InvalidDrift("margin must not be negative"));
		}
		if !(0.0 <= self.opacity_min
			&& self.opacity_min <= self.opacity_max
			&& self.opacity_max <= 1.0)
		{
			return Err(BackdropError::InvalidDrift(
				"opacity bounds must satisfy 0 <= opacity_min <= opacity_max <= 1",
			));
		}
		Ok(())
	}
}

impl Default for DriftStyle {
	fn default() -> Self {
		Self {
			base_speed: 0.4,
			speed_jitter: 0.1,
			jitter_range: 25.0,
			opacity_min: 0.2,
			opacity_max: 0.5,
			margin: 50.0,
		}
	}
}

/// Two-tier population size keyed on viewport width.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PopulationPolicy {
	/// Widths strictly below this are "narrow".
	pub breakpoint: u32,
	/// Population below the breakpoint.
	pub narrow_count: usize,
	/// Population at or above the breakpoint.
	pub wide_count: usize,
}

impl PopulationPolicy {
	/// A single population size regardless of width.
	pub const fn fixed(count: usize) -> Self {
		Self {
			breakpoint: 0,
			narrow_count: count,
			wide_count: count,
		}
	}

	/// Particle count for a viewport `width` pixels wide.
	pub fn count_for(&self, width: u32) -> usize {
		if width < self.breakpoint {
			self.narrow_count
		} else {
			self.wide_count
		}
	}
}

impl Default for PopulationPolicy {
	fn default() -> Self {
		Self {
			breakpoint: 768,
			narrow_count: 6,
			wide_count: 12,
		}
	}
}

/// Complete backdrop configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	/// Curves the glyphs ride on. Must not be empty.
	pub waves: Vec<WaveDescriptor>,
	/// Label catalog, assigned to particle slots in order.
	pub labels: Vec<String>,
	/// Motion ranges for every particle.
	pub drift: DriftStyle,
	/// How many particles to seed for a given width.
	pub population: PopulationPolicy,
	/// Fixed RNG seed; a random one is drawn at mount when absent.
	pub seed: Option<u64>,
}

impl BackdropConfig {
	/// Parses and validates a JSON document; missing fields take their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks the invariants the simulation relies on.
	pub fn validate(&self) -> Result<()> {
		if self.waves.is_empty() {
			return Err(BackdropError::EmptyWaveField);
		}
		if self.labels.is_empty() {
			return Err(BackdropError::EmptyCatalog);
		}
		self.drift.validate()
	}
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			waves: default_waves(),
			labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
			drift: DriftStyle::default(),
			population: PopulationPolicy::default(),
			seed: None,
		}
	}
}
