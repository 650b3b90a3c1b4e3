use std::time::Instant;

use log::debug;

use crate::config::RenderConfig;
use crate::display::FrameBuffer;
use crate::error::Result;
use crate::interface::video::{Key, VideoSurface, WindowSurface};

/// Frame deltas reported to callers never exceed this (a 4 FPS floor), so a
/// stalled frame cannot produce a runaway time step.
const MAX_FRAME_DELTA: f32 = 0.25;

/// Window context and frame clock for the render loop.
///
/// Owns the window surface and the framebuffer cells are rasterized into.
/// The logical grid dimensions are derived once from the physical surface
/// size and zoom at construction and stay fixed for the context's lifetime.
/// Dropping the `App` releases the window.
#[derive(Debug)]
pub struct App {
    surface: Box<dyn VideoSurface>,
    frame: FrameBuffer,
    width: usize,
    height: usize,
    zoom: usize,
    target_fps: usize,
    delta: f32,
    last_frame: Instant,
}

/// Initialize the windowing backend and create the render context.
///
/// Opens a window of `width * zoom` by `height * zoom` physical pixels with
/// the configured title and frame-rate cap.
pub fn init(config: &RenderConfig) -> Result<App> {
    config.validate()?;
    let surface = WindowSurface::new(
        &config.title,
        config.width * config.zoom,
        config.height * config.zoom,
    )?;
    App::from_surface(config, Box::new(surface))
}

impl App {
    /// Build a context on top of an existing surface. This is how alternate
    /// backends and headless tests plug in; [`init`] uses it with the minifb
    /// window surface.
    pub fn from_surface(config: &RenderConfig, mut surface: Box<dyn VideoSurface>) -> Result<Self> {
        config.validate()?;
        surface.set_target_fps(config.target_fps);

        let physical_width = config.width * config.zoom;
        let physical_height = config.height * config.zoom;
        debug!(
            "render context: {}x{} cells at zoom {} ({}x{} px), {} fps cap",
            config.width, config.height, config.zoom, physical_width, physical_height, config.target_fps
        );

        Ok(Self {
            surface,
            frame: FrameBuffer::new(physical_width, physical_height),
            width: physical_width / config.zoom,
            height: physical_height / config.zoom,
            zoom: config.zoom,
            target_fps: config.target_fps,
            delta: 1.0 / config.target_fps as f32,
            last_frame: Instant::now(),
        })
    }

    /// Logical grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Logical grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Physical pixels per cell edge
    pub const fn zoom(&self) -> usize {
        self.zoom
    }

    pub const fn target_fps(&self) -> usize {
        self.target_fps
    }

    /// Seconds since the previous presented frame, clamped so the reported
    /// rate never drops below 4 FPS
    pub fn dt(&self) -> f32 {
        self.delta.min(MAX_FRAME_DELTA)
    }

    /// Key state passthrough for demo loops
    pub fn key_down(&self, key: Key) -> bool {
        self.surface.is_key_down(key)
    }

    pub(crate) fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    pub(crate) fn exit_requested(&self) -> bool {
        self.surface.exit_requested()
    }

    pub(crate) fn present(&mut self) -> Result<()> {
        self.surface
            .present(self.frame.as_slice(), self.frame.width(), self.frame.height())
    }

    /// Advance the frame clock, recording a fresh delta. The raw measurement
    /// is stored; the clamp is applied on read in [`App::dt`].
    pub(crate) fn tick(&mut self) {
        self.delta = self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();
    }
}
