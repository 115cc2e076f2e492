//! Leptos component mounting the backdrop canvas.
//!
//! The component sizes a canvas to the window, builds a [`BackdropState`] and
//! spawns the frame loop: one `requestAnimationFrame` await per iteration, then
//! a frame rendered with the color scheme sampled at that moment. A window
//! `resize` listener resizes the backing store and reseeds the particles.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::BackdropConfig;
use super::state::BackdropState;
use super::surface::CanvasSurface;
use super::theme::{ColorScheme, Theme};
use super::viewport::Viewport;
use crate::error::{BackdropError, Result};

/// Fullscreen animated background canvas.
///
/// Reads `config` once at mount. The canvas is sized to the window and tracks
/// window resizes for the rest of the page's life.
#[component]
pub fn WaveBackdrop(
	/// Backdrop parameters, read untracked at mount.
	#[prop(into)]
	config: Signal<BackdropConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let mounted = Rc::new(Cell::new(false));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// The listener and frame loop live for the page; a rerun must not replace them.
		if !claim_mount(&mounted) {
			return;
		}
		if let Err(e) = mount(canvas.into(), &config.get_untracked(), &resize_cb) {
			error!("wave-backdrop: failed to start: {}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="network-canvas"
			class="wave-backdrop-canvas"
			style="display: block; position: fixed; inset: 0; pointer-events: none; z-index: -1;"
		/>
	}
}

/// True only for the first caller; later calls see the slot already taken.
fn claim_mount(mounted: &Cell<bool>) -> bool {
	!mounted.replace(true)
}

fn mount(
	canvas: HtmlCanvasElement,
	config: &BackdropConfig,
	resize_cb: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
) -> Result<()> {
	let window = web_sys::window().ok_or(BackdropError::NoWindow)?;
	let viewport = Viewport::from_window(&window)?;
	fit_canvas(&canvas, viewport);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(BackdropError::js("getContext"))?
		.ok_or(BackdropError::NoContext)?
		.dyn_into()
		.map_err(|_| BackdropError::NoContext)?;

	let seed = config
		.seed
		.unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
	let state = Rc::new(RefCell::new(BackdropState::new(
		config,
		Theme::default(),
		viewport,
		seed,
	)?));
	info!(
		"wave-backdrop: mounted at {}x{} with {} particles",
		viewport.width,
		viewport.height,
		state.borrow().particles().particles().len()
	);

	let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		match Viewport::from_window(&win) {
			Ok(viewport) => {
				fit_canvas(&canvas_resize, viewport);
				state_resize.borrow_mut().resize(viewport);
			}
			Err(e) => error!("wave-backdrop: resize failed: {}", e),
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window
			.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
			.map_err(BackdropError::js("addEventListener"))?;
	}

	spawn_local(run_frames(window, state, CanvasSurface::new(ctx)));
	Ok(())
}

/// The render loop. Runs until scheduling a frame fails.
async fn run_frames(
	window: Window,
	state: Rc<RefCell<BackdropState>>,
	mut surface: CanvasSurface,
) {
	loop {
		if let Err(e) = next_animation_frame(&window).await {
			error!("wave-backdrop: render loop stopped: {}", e);
			return;
		}
		let scheme = color_scheme(&window);
		state.borrow_mut().frame(&mut surface, scheme);
	}
}

/// Resolves on the next `requestAnimationFrame` callback.
async fn next_animation_frame(window: &Window) -> Result<()> {
	let mut scheduled = Ok(0);
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		scheduled = window.request_animation_frame(&resolve);
	});
	scheduled.map_err(BackdropError::js("requestAnimationFrame"))?;
	JsFuture::from(promise)
		.await
		.map_err(BackdropError::js("requestAnimationFrame"))?;
	Ok(())
}

/// Light unless the media query says dark; sampled fresh every frame.
fn color_scheme(window: &Window) -> ColorScheme {
	let is_dark = window
		.match_media("(prefers-color-scheme: dark)")
		.ok()
		.flatten()
		.is_some_and(|query| query.matches());
	ColorScheme::from_dark(is_dark)
}

fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
	canvas.set_width(viewport.width);
	canvas.set_height(viewport.height);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mount_is_claimed_once() {
		let mounted = Cell::new(false);
		assert!(claim_mount(&mounted));
		assert!(!claim_mount(&mounted));
		assert!(!claim_mount(&mounted));
	}
}
