use thiserror::Error;

/// Error type for the grid renderer
#[derive(Error, Debug)]
pub enum Error {
    /// Window or surface creation failed
    #[error("window error: {0}")]
    Window(String),

    /// Frame presentation failed
    #[error("presentation error: {0}")]
    Presentation(String),

    /// Cell coordinates outside the grid
    #[error("cell ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Bulk replacement with mismatched dimensions
    #[error("area shape mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    ShapeMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// Malformed pixel source buffer for a tile
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Invalid render configuration
    #[error("config error: {0}")]
    Config(String),
}

/// Renderer result type
pub type Result<T> = std::result::Result<T, Error>;
