//! Ochre - tile-based CPU ray tracing kernel.
//!
//! The kernel partitions an image into tiles, hands them out through a
//! work queue, and for each tile casts one camera ray per pixel, resolving
//! it against a caller-supplied [`SceneQuery`] and coloring it with a
//! caller-supplied [`Shader`]. [`SphereScene`] is the reference scene
//! implementation.
//!
//! Image encoding, CLI handling, and scene file loading live outside the
//! kernel; see the `ochre_viewer` binary for a complete example.

mod context;
mod error;
mod queue;
mod scene;
mod tile;

pub use context::{RenderContext, VERTICAL_FOV_DEGREES};
pub use error::RenderError;
pub use queue::TileQueue;
pub use scene::{Background, HitRecord, NormalShader, SceneQuery, Shader, Sphere, SphereScene};
pub use tile::{generate_tiles, Tile, DEFAULT_TILE_SIZE};

/// Re-export common math types from ochre_math
pub use ochre_math::{Interval, Mat4, Ray, Vec3};
