//! Animated wave background.
//!
//! Draws a few slow sine "signals" across a fullscreen canvas with file-extension
//! glyphs drifting along them:
//! - Deterministic, seedable particle simulation recycled at the right edge
//! - Per-frame light/dark palette from `prefers-color-scheme`
//! - Population redistributed on every window resize
//!
//! # Example
//!
//! ```ignore
//! use wave_backdrop::{BackdropConfig, WaveBackdrop};
//!
//! let config = BackdropConfig { seed: Some(7), ..Default::default() };
//! view! { <WaveBackdrop config=config /> }
//! ```

mod component;
pub mod config;
mod particles;
mod render;
mod state;
mod surface;
pub mod theme;
mod viewport;
pub mod waves;

pub use component::WaveBackdrop;
pub use config::{BackdropConfig, DriftStyle, PopulationPolicy};
pub use particles::{Particle, ParticleField};
pub use state::BackdropState;
pub use surface::{CanvasSurface, DrawSurface};
pub use theme::{Color, ColorScheme, Palette, Theme};
pub use viewport::Viewport;
pub use waves::{WaveDescriptor, WaveField};
