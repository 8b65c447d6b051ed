//! Desktop shell for the fractal renderer.
//!
//! Uses winit for the window and keyboard, pixels for the framebuffer and egui
//! for the debug overlay.

mod app;
pub mod config;
pub mod keys;

pub use app::run_gui;
