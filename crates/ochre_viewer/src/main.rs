//! Demo driver for the ochre render kernel.
//!
//! Renders a three-sphere scene with the normal-visualizing shader and
//! writes the result to `ochre.png`.

use anyhow::{Context, Result};
use ochre_math::{Mat4, Vec3};
use ochre_render::{NormalShader, RenderContext, SphereScene};
use std::time::Instant;

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;
const BLOCK: u32 = 32;

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = SphereScene::new();
    scene.push(Vec3::new(-2.0, 0.5, -10.0), 1.5)?;
    scene.push(Vec3::new(2.0, 1.0, -5.0), 1.0)?;
    scene.push(Vec3::new(1.0, -1.0, -10.0), 2.0)?;
    log::info!("scene: {} spheres", scene.len());

    let mut ctx = RenderContext::new(WIDTH, HEIGHT, BLOCK)?;
    ctx.set_camera(Mat4::IDENTITY);

    log::info!(
        "rendering {}x{} in {} tiles...",
        ctx.width(),
        ctx.height(),
        ctx.tile_count()
    );

    let start = Instant::now();
    while ctx.has_next() {
        let tile = ctx.take_next();
        ctx.execute(tile, &scene, &NormalShader, None);
    }
    log::info!("rendered in {:?}", start.elapsed());

    let filename = "ochre.png";
    save_png(&ctx, filename).with_context(|| format!("failed to write {filename}"))?;
    log::info!("saved {filename}");

    Ok(())
}

/// Convert the float image to 8-bit RGBA and write it as a PNG.
fn save_png(ctx: &RenderContext, filename: &str) -> Result<()> {
    let mut bytes = Vec::with_capacity((ctx.width() * ctx.height() * 4) as usize);
    for channel in ctx.data() {
        bytes.push((channel.clamp(0.0, 1.0) * 255.0) as u8);
    }

    let image = image::RgbaImage::from_raw(ctx.width(), ctx.height(), bytes)
        .context("image buffer has the wrong length")?;
    image.save(filename)?;
    Ok(())
}
