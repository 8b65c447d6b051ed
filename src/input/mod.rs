//! Input adapters that turn host events into view commands.

#[cfg(feature = "gui")]
pub mod gui;
