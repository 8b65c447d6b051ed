pub mod banded;
pub mod factory;
pub mod kinds;
pub mod map;
pub mod monochrome;
