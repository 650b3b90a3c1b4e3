use std::fmt::{self, Debug};

use minifb::{Window, WindowOptions};

pub use minifb::Key;

use crate::error::{Error, Result};

/// Abstraction over the window backend that receives finished frames.
///
/// The render loop only needs to push a framebuffer, observe close requests
/// and cap the frame rate; anything backend-specific stays behind this trait
/// so headless tests can substitute their own surface.
pub trait VideoSurface: Debug {
    /// Present a finished frame. Implementations are expected to drain the
    /// window's input-event queue as part of presentation.
    fn present(&mut self, framebuffer: &[u32], width: usize, height: usize) -> Result<()>;

    /// Whether a window-close request has been observed
    fn exit_requested(&self) -> bool;

    /// Cap the presentation rate
    fn set_target_fps(&mut self, fps: usize);

    /// Key state passthrough for demo programs
    fn is_key_down(&self, key: Key) -> bool;
}

/// minifb-backed window surface
pub struct WindowSurface {
    window: Window,
}

impl WindowSurface {
    /// Open a window of the given physical pixel size
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::Window(e.to_string()))?;
        Ok(Self { window })
    }
}

impl Debug for WindowSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowSurface")
            .field("window", &"Window { ... }")
            .finish()
    }
}

impl VideoSurface for WindowSurface {
    fn present(&mut self, framebuffer: &[u32], width: usize, height: usize) -> Result<()> {
        // update_with_buffer also pumps the event queue
        self.window
            .update_with_buffer(framebuffer, width, height)
            .map_err(|e| Error::Presentation(e.to_string()))
    }

    fn exit_requested(&self) -> bool {
        !self.window.is_open()
    }

    fn set_target_fps(&mut self, fps: usize) {
        self.window
            .limit_update_rate(Some(std::time::Duration::from_secs_f64(1.0 / fps as f64)));
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.window.is_key_down(key)
    }
}
