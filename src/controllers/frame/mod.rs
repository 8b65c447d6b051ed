//! Tick-driven controller for the frame pipeline.
//!
//! The host shell queues [`ViewCommand`](crate::core::data::view_command::ViewCommand)s
//! as input arrives and calls [`FrameController::tick`] once per frame.

mod controller;
pub mod data;

pub use controller::FrameController;
pub use data::frame_data::FrameData;
