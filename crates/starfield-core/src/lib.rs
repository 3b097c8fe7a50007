pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod look;
pub mod permission;
pub mod render;
pub mod simulation;
pub mod speed;
pub mod viewport;
pub mod visual;

pub use camera::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use look::*;
pub use permission::*;
pub use render::*;
pub use simulation::*;
pub use speed::*;
pub use viewport::*;
pub use visual::*;
