//! Render context: image buffer, tile queue, camera, and the tile executor.
//!
//! A context owns everything for one render. Creation partitions the image
//! into tiles and fills the work queue; the caller then drives the loop:
//!
//! ```text
//! while ctx.has_next() {
//!     let tile = ctx.take_next();
//!     ctx.execute(tile, &scene, &shader, None);
//! }
//! ```
//!
//! Tiles write disjoint regions of the buffer, so they may be executed in
//! any order. Dropping the context releases the buffer; a context created
//! afterwards starts from a freshly zeroed image.

use crate::error::RenderError;
use crate::queue::TileQueue;
use crate::scene::{Background, HitRecord, SceneQuery, Shader};
use crate::tile::{generate_tiles, Tile};
use ochre_math::{Interval, Mat4, Ray, Vec3};

/// Vertical field of view used for ray generation, in degrees.
///
/// Fixed by the kernel; callers wanting a different fov apply it through
/// the camera transform they install.
pub const VERTICAL_FOV_DEGREES: f32 = 45.0;

/// Owns the image buffer, tile queue, and camera for one render.
///
/// The context is a plain owned value: moving it is the only way to hand a
/// render off, so there is never more than one owner of the buffer.
pub struct RenderContext {
    width: u32,
    height: u32,
    /// Camera-to-world transform applied to every generated ray
    camera: Mat4,
    tiles: Vec<Tile>,
    queue: TileQueue,
    /// RGBA float pixels, row-major, 4 channels per pixel
    data: Vec<f32>,
}

impl RenderContext {
    /// Create a context for a `width x height` image partitioned into
    /// `block x block` tiles.
    ///
    /// The image buffer starts zeroed and every tile index is enqueued in
    /// row-major order. The camera defaults to the identity transform.
    pub fn new(width: u32, height: u32, block: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::ZeroDimension { width, height });
        }
        if block == 0 {
            return Err(RenderError::ZeroBlockSize);
        }

        let tiles = generate_tiles(width, height, block);
        let queue = TileQueue::new(tiles.len());

        log::info!(
            "created render context: {}x{} image, {} tiles of up to {}x{}",
            width,
            height,
            tiles.len(),
            block,
            block
        );

        Ok(Self {
            width,
            height,
            camera: Mat4::IDENTITY,
            tiles,
            queue,
            data: vec![0.0; (width * height * 4) as usize],
        })
    }

    /// Install the camera-to-world transform.
    pub fn set_camera(&mut self, view: Mat4) {
        self.camera = view;
    }

    /// Get the installed camera-to-world transform.
    pub fn camera(&self) -> Mat4 {
        self.camera
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of tiles the image was partitioned into.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// True iff unrendered tiles remain in the queue.
    pub fn has_next(&self) -> bool {
        self.queue.has_next()
    }

    /// Remove and return the next tile to render.
    ///
    /// Tiles come out in row-major creation order unless `put_back`
    /// reordered them.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Callers must check `has_next` first.
    pub fn take_next(&mut self) -> Tile {
        let index = self.queue.take_next();
        self.tiles[index]
    }

    /// Return a tile to the front of the queue, ahead of untouched work.
    pub fn put_back(&mut self, tile: Tile) {
        self.queue.put_back(tile.index);
    }

    /// Render one tile: cast a camera ray per pixel, resolve it against
    /// `scene`, and write the shaded RGBA into the image buffer.
    ///
    /// Pixels whose rays hit nothing keep their opaque-black initial value;
    /// `background`, when supplied, is invoked once per missed ray.
    pub fn execute(
        &mut self,
        tile: Tile,
        scene: &dyn SceneQuery,
        shader: &dyn Shader,
        background: Option<&dyn Background>,
    ) {
        let inv_w = 1.0 / self.width as f32;
        let inv_h = 1.0 / self.height as f32;
        let aspect = self.width as f32 / self.height as f32;
        let angle = (std::f32::consts::PI * 0.5 * VERTICAL_FOV_DEGREES / 180.0).tan();

        // Every ray starts at the camera position
        let ray_origin = self.camera.transform_point3(Vec3::ZERO);
        let t_bounds = Interval::new(0.0, f32::INFINITY);

        for local_y in 0..tile.height {
            for local_x in 0..tile.width {
                let image_x = tile.x + local_x;
                let image_y = tile.y + local_y;

                // Map the pixel center into the view plane
                let fx = image_x as f32;
                let fy = image_y as f32;
                let u = (2.0 * ((fx + 0.5) * inv_w) - 1.0) * angle * aspect;
                let v = (1.0 - 2.0 * ((fy + 0.5) * inv_h)) * angle;

                let dir = Vec3::new(u, v, -1.0).normalize();
                let ray = Ray::new(ray_origin, self.camera.transform_vector3(dir));

                let mut rgba = [0.0, 0.0, 0.0, 1.0];
                let mut rec = HitRecord::default();

                if scene.intersect(&ray, t_bounds, &mut rec) {
                    rgba = shader.shade(&rec);
                } else if let Some(background) = background {
                    background.on_miss();
                }

                if rgba.iter().any(|c| !c.is_finite()) {
                    log::warn!("non-finite color at pixel ({image_x}, {image_y}): {rgba:?}");
                }

                let start = ((image_y * self.width + image_x) * 4) as usize;
                self.data[start..start + 4].copy_from_slice(&rgba);
            }
        }
    }

    /// Read the RGBA floats stored at pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let start = ((y * self.width + x) * 4) as usize;
        [
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
            self.data[start + 3],
        ]
    }

    /// The whole image as raw RGBA floats, row-major, for encoders.
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}
