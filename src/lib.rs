//! wave-backdrop: animated "audio signal" background for the UU Design landing page.
//!
//! This crate provides a WASM canvas component that draws slow sine waves with
//! file-extension glyphs drifting along them, redrawn every animation frame.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;

pub use components::wave_backdrop::{BackdropConfig, WaveBackdrop};
pub use error::BackdropError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("wave-backdrop: logging initialized");
}

/// Load the backdrop configuration from a script element with id="backdrop-config".
/// Falls back to the built-in defaults when the element is missing or invalid.
fn load_backdrop_config() -> BackdropConfig {
	let Some(json_text) = config_script_text() else {
		return BackdropConfig::default();
	};

	match BackdropConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"wave-backdrop: loaded config with {} waves, {} labels",
				config.waves.len(),
				config.labels.len()
			);
			config
		}
		Err(e) => {
			warn!("wave-backdrop: {}, using defaults", e);
			BackdropConfig::default()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Loads the backdrop configuration from the DOM and mounts the animated canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_backdrop_config();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Meta name="color-scheme" content="light dark" />
		<WaveBackdrop config=config_signal />
	}
}
