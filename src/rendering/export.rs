// src/rendering/export.rs

use super::painter::{self, DrawOptions};
use super::scene::Scene;
use anyhow::{bail, Context};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// GIF frame delay for a playback rate, in milliseconds.
pub fn frame_delay_ms(fps: u32) -> anyhow::Result<u32> {
    if fps == 0 {
        bail!("frame rate must be positive");
    }
    Ok(((1000.0 / fps as f64).round() as u32).max(1))
}

/// Animated GIF written one frame per call, so a caller can spread the work
/// over idle ticks. The file is finalised when the writer is dropped.
pub struct GifWriter {
    root: DrawingArea<BitMapBackend<'static>, Shift>,
    path: PathBuf,
    next: usize,
    total: usize,
}

impl GifWriter {
    pub fn create(scene: &Scene, path: &Path, size: (u32, u32), fps: u32) -> anyhow::Result<Self> {
        let delay = frame_delay_ms(fps)?;
        let root = BitMapBackend::gif(path, size, delay)
            .with_context(|| format!("could not create {:?}", path))?
            .into_drawing_area();

        Ok(Self {
            root,
            path: path.to_path_buf(),
            next: 0,
            total: scene.total_frames(),
        })
    }

    /// Draws and appends the next frame. Returns `false` once every frame
    /// has been written.
    pub fn write_next(&mut self, scene: &Scene, opts: &DrawOptions) -> anyhow::Result<bool> {
        if self.is_done() {
            return Ok(false);
        }
        let index = self.next;
        let frame = scene.frame(index);
        painter::draw_frame(&self.root, scene, &frame, opts)
            .with_context(|| format!("drawing frame {} failed", index))?;
        self.root
            .present()
            .with_context(|| format!("writing frame {} to {:?} failed", index, self.path))?;
        self.next += 1;
        Ok(!self.is_done())
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.total
    }

    /// Frames written so far and the frame count.
    pub fn progress(&self) -> (usize, usize) {
        (self.next, self.total)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes every frame of the animation, in order, to an animated GIF.
pub fn export_gif(
    scene: &Scene,
    path: &Path,
    size: (u32, u32),
    fps: u32,
    opts: &DrawOptions,
) -> anyhow::Result<()> {
    let mut writer = GifWriter::create(scene, path, size, fps)?;
    while writer.write_next(scene, opts)? {}

    let (written, _) = writer.progress();
    log::info!("Exported {} frames at {} fps to {:?}", written, fps, path);
    Ok(())
}

/// Renders one frame into a packed RGB buffer of `width * height * 3` bytes.
pub fn render_frame_rgb(
    scene: &Scene,
    frame_index: usize,
    size: (u32, u32),
    opts: &DrawOptions,
) -> anyhow::Result<Vec<u8>> {
    let (w, h) = size;
    let mut buf = vec![0u8; w as usize * h as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, size).into_drawing_area();
        let frame = scene.frame(frame_index);
        painter::draw_frame(&root, scene, &frame, opts)?;
        root.present()?;
    }
    Ok(buf)
}

// --- Still images through cairo surfaces ---

#[cfg(feature = "gui")]
pub use still::export_frame;

#[cfg(feature = "gui")]
mod still {
    use super::*;
    use anyhow::{anyhow, bail};
    use plotters_cairo::CairoBackend;
    use std::fs::File;

    /// Writes frame `frame_index` as PNG, PDF or SVG, chosen by extension.
    pub fn export_frame(
        scene: &Scene,
        frame_index: usize,
        path: &Path,
        size: (u32, u32),
        opts: &DrawOptions,
    ) -> anyhow::Result<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let (w, h) = size;

        match ext.as_str() {
            "png" => {
                let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w as i32, h as i32)?;
                {
                    let cr = cairo::Context::new(&surface)?;
                    draw_on(&cr, scene, frame_index, size, opts)?;
                }
                let mut file =
                    File::create(path).with_context(|| format!("could not create {:?}", path))?;
                surface
                    .write_to_png(&mut file)
                    .map_err(|e| anyhow!("could not encode PNG: {}", e))?;
            }
            "pdf" => {
                let surface = cairo::PdfSurface::new(w as f64, h as f64, path)?;
                {
                    let cr = cairo::Context::new(&surface)?;
                    draw_on(&cr, scene, frame_index, size, opts)?;
                }
                surface.finish();
            }
            "svg" => {
                let surface = cairo::SvgSurface::new(w as f64, h as f64, Some(path))?;
                {
                    let cr = cairo::Context::new(&surface)?;
                    draw_on(&cr, scene, frame_index, size, opts)?;
                }
                surface.finish();
            }
            other => bail!("unsupported image format {:?} (use png, pdf or svg)", other),
        }

        log::info!("Exported frame {} to {:?}", frame_index, path);
        Ok(())
    }

    fn draw_on(
        cr: &cairo::Context,
        scene: &Scene,
        frame_index: usize,
        size: (u32, u32),
        opts: &DrawOptions,
    ) -> anyhow::Result<()> {
        let backend =
            CairoBackend::new(cr, size).map_err(|e| anyhow!("cairo backend: {:?}", e))?;
        let root = backend.into_drawing_area();
        let frame = scene.frame(frame_index);
        painter::draw_frame(&root, scene, &frame, opts)
            .map_err(|e| anyhow!("drawing frame {} failed: {}", frame_index, e))?;
        root.present().map_err(|e| anyhow!("cairo flush failed: {}", e))?;
        Ok(())
    }
}
