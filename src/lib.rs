// 2D grid rendering library: integer cell states drawn as colored
// rectangles or bitmap tiles in a window, one update call per frame.

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod grid;
pub mod interface;
pub mod registry;
pub mod render;
pub mod tile;
pub mod utils;

pub use crate::app::{init, App};
pub use crate::config::RenderConfig;
pub use crate::display::FrameBuffer;
pub use crate::error::{Error, Result};
pub use crate::grid::Grid;
pub use crate::interface::video::{Key, VideoSurface, WindowSurface};
pub use crate::registry::{Rgba, Visual, VisualRegistry, BLACK, WHITE};
pub use crate::render::{update, FrameStatus};
pub use crate::tile::Tile;
