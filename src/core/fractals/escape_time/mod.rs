pub mod algorithm;
pub mod errors;
pub mod escape_time_config;
pub mod palettes;
