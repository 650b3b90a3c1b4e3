use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Render window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Logical grid width in cells
    pub width: usize,
    /// Logical grid height in cells
    pub height: usize,
    /// Window title
    pub title: String,
    /// Physical pixels per cell edge
    pub zoom: usize,
    /// Frame-rate cap applied by the window surface
    pub target_fps: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Grid Window".to_string(),
            zoom: 1,
            target_fps: 60,
        }
    }
}

impl RenderConfig {
    /// Configuration for a grid of the given logical size, other fields defaulted
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_zoom(mut self, zoom: usize) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_target_fps(mut self, target_fps: usize) -> Self {
        self.target_fps = target_fps;
        self
    }

    /// Check that the configuration can actually drive a window
    pub fn validate(&self) -> Result<()> {
        if self.zoom == 0 {
            return Err(Error::Config("zoom must be at least 1".to_string()));
        }
        if self.target_fps == 0 {
            return Err(Error::Config("target_fps must be at least 1".to_string()));
        }
        Ok(())
    }
}
