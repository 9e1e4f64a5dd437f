//! Tile partitioning of the output image.
//!
//! Divides the image into rectangular tiles that can be rendered
//! independently. Tiles are generated in row-major raster order and
//! together cover the image exactly once.

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Index of this tile in the creation order
    pub index: usize,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default tile size in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Generate the tile grid for an image, in row-major order.
///
/// Tiles are `block x block` pixels, clipped at the right and bottom
/// image edges so the last row/column may be smaller.
pub fn generate_tiles(width: u32, height: u32, block: u32) -> Vec<Tile> {
    let mut tiles = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let tw = block.min(width - x);
            let th = block.min(height - y);
            tiles.push(Tile::new(x, y, tw, th, index));
            index += 1;
            x += block;
        }
        y += block;
    }

    tiles
}
