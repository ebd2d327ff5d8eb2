pub mod animator;
pub mod bands;
pub mod camera;
pub mod config;
pub mod constants;
pub mod controls;
pub mod ease;
pub mod geometry;
pub mod scene;
pub mod sync;
pub mod viewport;

pub use animator::*;
pub use bands::*;
pub use camera::Camera;
pub use config::*;
pub use controls::*;
pub use ease::*;
pub use scene::*;
pub use sync::*;

// Shaders bundled as string constants
pub static TUNNEL_WGSL: &str = include_str!("../../shaders/tunnel.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
