// External interface module

pub mod video;

pub use video::{Key, VideoSurface, WindowSurface};
