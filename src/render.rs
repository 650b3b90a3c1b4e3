//! Per-frame update step

use log::{debug, trace, warn};

use crate::app::App;
use crate::error::Result;
use crate::grid::Grid;
use crate::registry::{Visual, VisualRegistry, BLACK};

/// Outcome of one successful frame update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Frame presented; keep looping
    Running,
    /// A window-close request was observed; the caller should leave its loop
    ExitRequested,
}

/// Draw the grid and present one frame.
///
/// Clears the framebuffer to black, draws every cell at `(x * zoom, y * zoom)`
/// through the registry, then presents and advances the frame clock. A close
/// request short-circuits to `Ok(FrameStatus::ExitRequested)` without
/// presenting; presentation failures come back as
/// [`Error::Presentation`](crate::error::Error::Presentation) and the caller
/// decides whether its loop continues. No failure is ever retried here.
pub fn update(app: &mut App, grid: &Grid, registry: &VisualRegistry) -> Result<FrameStatus> {
    let zoom = app.zoom();

    let frame = app.frame_mut();
    frame.clear(BLACK.to_0rgb());
    for (x, y, value) in grid.iter() {
        match registry.resolve(value) {
            Visual::Color(color) => {
                frame.fill_rect(x * zoom, y * zoom, zoom, zoom, color.to_0rgb())
            }
            Visual::Tile(tile) => frame.blit_tile(x * zoom, y * zoom, tile),
        }
    }

    if app.exit_requested() {
        debug!("window close requested, leaving render loop");
        return Ok(FrameStatus::ExitRequested);
    }

    if let Err(e) = app.present() {
        warn!("frame presentation failed: {}", e);
        return Err(e);
    }
    app.tick();
    trace!("frame presented, dt {:.4}s", app.dt());

    Ok(FrameStatus::Running)
}
