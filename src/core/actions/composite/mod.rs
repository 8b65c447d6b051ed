pub mod compositor;
pub mod ports;
