// Conway's Game of Life demo driving the grid renderer.

use log::{error, info, LevelFilter};

use gridframe::{
    init, update,
    utils::{init_logger, FileLogger},
    FrameStatus, Grid, Key, RenderConfig, Result, Rgba, Visual, VisualRegistry,
};

const ALIVE: i32 = 1;
/// Seconds between automaton generations
const GENERATION_STEP: f32 = 0.1;

fn main() -> Result<()> {
    if let Err(e) = init_logger(FileLogger::with_file(LevelFilter::Info)) {
        eprintln!("logger setup failed: {}", e);
    }

    let config = RenderConfig::new(64, 48)
        .with_title("Game of Life")
        .with_zoom(12)
        .with_target_fps(60);

    let mut app = match init(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("failed to open window: {}", e);
            return Err(e);
        }
    };

    let mut registry = VisualRegistry::new();
    registry.register(0, Visual::solid(Rgba::new(0x10, 0x10, 0x10, 0xFF)));
    registry.register(ALIVE, Visual::solid(Rgba::new(0x00, 0xFF, 0x96, 0xFF)));

    let mut grid = Grid::new(app.width(), app.height());
    seed(&mut grid)?;

    info!(
        "starting render loop: {}x{} cells at zoom {}",
        app.width(),
        app.height(),
        app.zoom()
    );

    let mut accumulator = 0.0f32;
    loop {
        match update(&mut app, &grid, &registry) {
            Ok(FrameStatus::Running) => {}
            Ok(FrameStatus::ExitRequested) => break,
            Err(e) => {
                error!("frame failed: {}", e);
                return Err(e);
            }
        }
        if app.key_down(Key::Escape) {
            break;
        }

        accumulator += app.dt();
        while accumulator >= GENERATION_STEP {
            grid = next_generation(&grid)?;
            accumulator -= GENERATION_STEP;
        }
    }

    info!("render loop finished");
    Ok(())
}

/// Drop a glider and a blinker onto the grid
fn seed(grid: &mut Grid) -> Result<()> {
    for (x, y) in [(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)] {
        grid.set_cell(x, y, ALIVE)?;
    }
    for (x, y) in [(20, 10), (21, 10), (22, 10)] {
        grid.set_cell(x, y, ALIVE)?;
    }
    Ok(())
}

fn next_generation(grid: &Grid) -> Result<Grid> {
    let (width, height) = grid.dimensions();
    let mut next = Grid::new(width, height);
    for (x, y, value) in grid.iter() {
        let neighbors = live_neighbors(grid, x, y);
        let alive = value == ALIVE;
        if matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3)) {
            next.set_cell(x, y, ALIVE)?;
        }
    }
    Ok(next)
}

/// Count live neighbors with toroidal wrapping
fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let w = grid.width() as i32;
    let h = grid.height() as i32;
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = ((x as i32 + dx) % w + w) % w;
            let ny = ((y as i32 + dy) % h + h) % h;
            if grid.get_cell(nx as usize, ny as usize) == Some(ALIVE) {
                count += 1;
            }
        }
    }
    count
}
