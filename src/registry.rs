use std::collections::HashMap;

use log::debug;

use crate::tile::Tile;

/// Four-channel color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into the surface's native 0RGB format. The window carries no
    /// alpha plane, so the alpha channel is dropped here.
    pub(crate) const fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Built-in visual for cell state 0
pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF, 0xFF);
/// Background and fallback color for unregistered states
pub const BLACK: Rgba = Rgba::new(0x00, 0x00, 0x00, 0xFF);

/// Drawable visual for one cell state
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    /// Solid fill over the whole cell
    Color(Rgba),
    /// Bitmap pre-scaled to the cell's pixel footprint
    Tile(Tile),
}

impl Visual {
    pub const fn solid(color: Rgba) -> Self {
        Visual::Color(color)
    }
}

static FALLBACK: Visual = Visual::Color(BLACK);

/// Maps integer cell states to visuals.
///
/// State 0 starts out mapped to white; any state can be re-registered and the
/// latest registration wins. Lookups never fail: unregistered states resolve
/// to the black fallback.
#[derive(Debug, Clone)]
pub struct VisualRegistry {
    visuals: HashMap<i32, Visual>,
}

impl VisualRegistry {
    pub fn new() -> Self {
        let mut visuals = HashMap::new();
        visuals.insert(0, Visual::Color(WHITE));
        Self { visuals }
    }

    /// Insert or overwrite the visual for a cell state
    pub fn register(&mut self, key: i32, visual: Visual) {
        debug!("registering visual for state {}", key);
        self.visuals.insert(key, visual);
    }

    /// Look up the visual for a cell state
    pub fn resolve(&self, key: i32) -> &Visual {
        self.visuals.get(&key).unwrap_or(&FALLBACK)
    }
}

impl Default for VisualRegistry {
    fn default() -> Self {
        Self::new()
    }
}
