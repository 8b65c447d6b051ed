pub mod composite;
pub mod generate_field;
pub mod render_frame;
