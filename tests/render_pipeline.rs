// End-to-end frame tests against a recording surface standing in for the
// window backend. Pixels are inspected exactly as presented.

use std::cell::RefCell;
use std::rc::Rc;

use gridframe::{
    update, App, Error, FrameStatus, Grid, Key, RenderConfig, Result, Rgba, Tile, VideoSurface,
    Visual, VisualRegistry,
};

#[derive(Debug, Default)]
struct SurfaceState {
    frames: Vec<(Vec<u32>, usize, usize)>,
    closed: bool,
    fail_present: bool,
}

/// Window stand-in recording every presented frame
#[derive(Debug)]
struct RecordingSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl VideoSurface for RecordingSurface {
    fn present(&mut self, framebuffer: &[u32], width: usize, height: usize) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_present {
            return Err(Error::Presentation("display lost".to_string()));
        }
        state.frames.push((framebuffer.to_vec(), width, height));
        Ok(())
    }

    fn exit_requested(&self) -> bool {
        self.state.borrow().closed
    }

    fn set_target_fps(&mut self, _fps: usize) {}

    fn is_key_down(&self, _key: Key) -> bool {
        false
    }
}

fn headless_app(config: &RenderConfig) -> (App, Rc<RefCell<SurfaceState>>) {
    let state = Rc::new(RefCell::new(SurfaceState::default()));
    let surface = RecordingSurface {
        state: Rc::clone(&state),
    };
    let app = App::from_surface(config, Box::new(surface)).unwrap();
    (app, state)
}

fn pixel(state: &Rc<RefCell<SurfaceState>>, x: usize, y: usize) -> u32 {
    let state = state.borrow();
    let (frame, width, _) = state.frames.last().expect("no frame presented");
    frame[y * width + x]
}

#[test]
fn red_cell_at_origin_renders_zoomed_square() {
    let config = RenderConfig::new(30, 30).with_zoom(20);
    let (mut app, state) = headless_app(&config);

    let mut registry = VisualRegistry::new();
    registry.register(1, Visual::solid(Rgba::new(0xFF, 0x00, 0x00, 0xFF)));
    registry.register(0, Visual::solid(Rgba::new(0x00, 0x00, 0x00, 0xFF)));

    let mut grid = Grid::new(app.width(), app.height());
    grid.set_cell(0, 0, 1).unwrap();

    assert_eq!(update(&mut app, &grid, &registry).unwrap(), FrameStatus::Running);

    // 20x20 red square at the pixel origin, background black elsewhere
    for (x, y) in [(0, 0), (19, 19), (0, 19), (19, 0)] {
        assert_eq!(pixel(&state, x, y), 0x00FF_0000);
    }
    for (x, y) in [(20, 0), (0, 20), (20, 20), (599, 599)] {
        assert_eq!(pixel(&state, x, y), 0x0000_0000);
    }
}

#[test]
fn each_update_presents_one_frame() {
    let config = RenderConfig::new(8, 8).with_zoom(2);
    let (mut app, state) = headless_app(&config);
    let grid = Grid::new(8, 8);
    let registry = VisualRegistry::new();

    for _ in 0..3 {
        update(&mut app, &grid, &registry).unwrap();
    }
    assert_eq!(state.borrow().frames.len(), 3);
}

#[test]
fn grid_mutation_shows_up_in_the_next_frame() {
    let config = RenderConfig::new(4, 4).with_zoom(1);
    let (mut app, state) = headless_app(&config);
    let mut registry = VisualRegistry::new();
    registry.register(2, Visual::solid(Rgba::new(0x00, 0x00, 0xFF, 0xFF)));

    let mut grid = Grid::new(4, 4);
    update(&mut app, &grid, &registry).unwrap();
    assert_eq!(pixel(&state, 3, 3), 0x00FF_FFFF); // default white

    grid.set_cell(3, 3, 2).unwrap();
    update(&mut app, &grid, &registry).unwrap();
    assert_eq!(pixel(&state, 3, 3), 0x0000_00FF);
}

#[test]
fn tile_registered_through_app_is_blitted_pre_scaled() {
    let config = RenderConfig::new(3, 3).with_zoom(4);
    let (mut app, state) = headless_app(&config);

    // 2x2 source image: opaque yellow with a transparent right column
    let rgba = [
        0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, //
        0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00,
    ];
    let tile = Tile::from_rgba(&app, 2, 2, &rgba).unwrap();
    assert_eq!(tile.size(), 4);

    let mut registry = VisualRegistry::new();
    registry.register(0, Visual::solid(Rgba::new(0x00, 0x00, 0x00, 0xFF)));
    registry.register(5, Visual::Tile(tile));

    let mut grid = Grid::new(3, 3);
    grid.set_cell(1, 1, 5).unwrap();
    update(&mut app, &grid, &registry).unwrap();

    // left half of the cell footprint is yellow, right half stayed background
    assert_eq!(pixel(&state, 4, 4), 0x00FF_FF00);
    assert_eq!(pixel(&state, 5, 7), 0x00FF_FF00);
    assert_eq!(pixel(&state, 6, 4), 0x0000_0000);
    assert_eq!(pixel(&state, 7, 7), 0x0000_0000);
}

#[test]
fn close_request_ends_the_loop_without_a_frame() {
    let config = RenderConfig::new(4, 4);
    let (mut app, state) = headless_app(&config);
    state.borrow_mut().closed = true;

    let grid = Grid::new(4, 4);
    let status = update(&mut app, &grid, &VisualRegistry::new()).unwrap();
    assert_eq!(status, FrameStatus::ExitRequested);
    assert!(state.borrow().frames.is_empty());
}

#[test]
fn presentation_failure_surfaces_as_recoverable_error() {
    let config = RenderConfig::new(4, 4);
    let (mut app, state) = headless_app(&config);
    state.borrow_mut().fail_present = true;

    let grid = Grid::new(4, 4);
    let err = update(&mut app, &grid, &VisualRegistry::new()).unwrap_err();
    assert!(matches!(err, Error::Presentation(_)));

    // the caller may decide to carry on: the next update succeeds
    state.borrow_mut().fail_present = false;
    let status = update(&mut app, &grid, &VisualRegistry::new()).unwrap();
    assert_eq!(status, FrameStatus::Running);
    assert_eq!(state.borrow().frames.len(), 1);
}

#[test]
fn reported_delta_never_implies_less_than_4_fps() {
    let config = RenderConfig::new(4, 4).with_target_fps(60);
    let (mut app, _state) = headless_app(&config);
    let grid = Grid::new(4, 4);
    let registry = VisualRegistry::new();

    // simulate a stalled frame between updates
    update(&mut app, &grid, &registry).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));
    update(&mut app, &grid, &registry).unwrap();

    assert!(app.dt() <= 0.25);
    assert!(app.dt() > 0.0);
}
