use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;
use std::time::Duration;

/// A finished frame, borrowed from the controller until the next tick.
#[derive(Debug)]
pub struct FrameData<'a> {
    pub tick: u64,
    pub view: ViewState,
    pub pixel_buffer: &'a PixelBuffer,
    pub render_duration: Duration,
}
