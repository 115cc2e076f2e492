//! Error type shared by configuration, simulation setup and browser glue.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while building or mounting the backdrop.
#[derive(Debug, Error)]
pub enum BackdropError {
	/// No global `window` (e.g. running outside a browser main thread).
	#[error("no global window available")]
	NoWindow,
	/// The canvas refused to hand out a 2D rendering context.
	#[error("canvas has no 2d rendering context")]
	NoContext,
	/// A browser API call threw.
	#[error("{op} failed: {message}")]
	Js {
		/// Name of the browser API that was called.
		op: &'static str,
		/// Stringified JS exception.
		message: String,
	},
	/// At least one wave is needed for particles to ride on.
	#[error("wave field must contain at least one wave")]
	EmptyWaveField,
	/// At least one label is needed to draw particles.
	#[error("label catalog must contain at least one label")]
	EmptyCatalog,
	/// A drift parameter is outside the range that keeps particles on screen.
	#[error("invalid drift style: {0}")]
	InvalidDrift(&'static str),
	/// The configuration document is not valid JSON for [`BackdropConfig`](crate::BackdropConfig).
	#[error("invalid backdrop config: {0}")]
	Config(#[from] serde_json::Error),
}

impl BackdropError {
	/// Wraps a thrown JS value, tagging it with the operation that threw.
	pub fn js(op: &'static str) -> impl FnOnce(JsValue) -> Self {
		move |value| Self::Js {
			op,
			message: value
				.as_string()
				.unwrap_or_else(|| format!("{value:?}")),
		}
	}
}

/// Convenience alias used across the crate.
pub type Result<T, E = BackdropError> = std::result::Result<T, E>;
