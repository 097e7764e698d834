// src/rendering/layer_cache.rs
//
// Keeps the static part of the figure (background, canvas, nucleus, title)
// as a cairo image so a frame tick only repaints the moving artists and the
// legend above them.

use super::painter::{self, DrawOptions};
use super::scene::Scene;
use anyhow::anyhow;
use gtk4::cairo::{self, Format, ImageSurface};
use plotters::prelude::*;
use plotters_cairo::CairoBackend;

#[derive(Default)]
pub struct LayerCache {
    size: Option<(i32, i32)>,
    surface: Option<ImageSurface>,
    rebuilds: usize,
}

impl LayerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the layer has been drawn.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// The static layer for a `width` x `height` widget, drawn on first use
    /// and whenever the size changes.
    pub fn static_layer(
        &mut self,
        width: i32,
        height: i32,
        scene: &Scene,
        opts: &DrawOptions,
    ) -> anyhow::Result<&ImageSurface> {
        let size = (width.max(1), height.max(1));

        if self.size != Some(size) || self.surface.is_none() {
            let surface = render_layer(size, scene, opts)?;
            log::debug!("Static layer rebuilt at {}x{}", size.0, size.1);
            self.surface = Some(surface);
            self.size = Some(size);
            self.rebuilds += 1;
        }

        self.surface
            .as_ref()
            .ok_or_else(|| anyhow!("static layer missing after rebuild"))
    }
}

fn render_layer(
    (w, h): (i32, i32),
    scene: &Scene,
    opts: &DrawOptions,
) -> anyhow::Result<ImageSurface> {
    let surface = ImageSurface::create(Format::ARgb32, w, h)?;
    {
        let cr = cairo::Context::new(&surface)?;
        let backend = CairoBackend::new(&cr, (w as u32, h as u32))
            .map_err(|e| anyhow!("cairo backend: {:?}", e))?;
        let root = backend.into_drawing_area();
        let vp = painter::viewport_for(&root, scene);
        painter::draw_static_layer(&root, scene, &vp, opts)
            .map_err(|e| anyhow!("static layer: {}", e))?;
        root.present().map_err(|e| anyhow!("static layer: {}", e))?;
    }
    surface.flush();
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const NO_TEXT: DrawOptions = DrawOptions { annotations: false };

    #[test]
    fn layer_is_reused_until_the_size_changes() {
        let scene = Scene::new(&Config::default());
        let mut cache = LayerCache::new();

        cache.static_layer(200, 240, &scene, &NO_TEXT).unwrap();
        cache.static_layer(200, 240, &scene, &NO_TEXT).unwrap();
        assert_eq!(cache.rebuilds(), 1);

        let layer = cache.static_layer(300, 340, &scene, &NO_TEXT).unwrap();
        assert_eq!((layer.width(), layer.height()), (300, 340));
        assert_eq!(cache.rebuilds(), 2);

        cache.static_layer(200, 240, &scene, &NO_TEXT).unwrap();
        assert_eq!(cache.rebuilds(), 3);
    }
}
