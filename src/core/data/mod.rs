pub mod colour;
pub mod complex;
pub mod frame_size;
pub mod grid;
pub mod pixel_buffer;
pub mod point;
pub mod view_command;
pub mod view_state;
