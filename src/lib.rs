pub mod animation;
pub mod color;
pub mod config;
pub mod errors;
pub mod image;
pub mod prelude;
pub mod render;
pub mod sprite;
pub mod types;
