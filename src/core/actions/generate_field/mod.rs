pub mod field_generator;
pub mod generate_field;
pub mod ports;
