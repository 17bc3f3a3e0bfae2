pub mod opengl;
pub use opengl::Renderer;

pub mod math;

pub mod geometry;

pub mod animation;
pub use animation::Animation;

pub mod config;
pub use config::Config;

pub mod logging;
