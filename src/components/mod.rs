//! UI components.

pub mod wave_backdrop;
