// src/rendering/screen.rs

use super::layer_cache::LayerCache;
use super::painter;
use crate::state::AppState;
use anyhow::anyhow;
use gtk4::prelude::*;
use gtk4::{cairo, DrawingArea};
use plotters::prelude::*;
use plotters_cairo::CairoBackend;
use std::cell::RefCell;
use std::rc::Rc;

// --- Screen Rendering Entry Point ---
pub fn setup_drawing(drawing_area: &DrawingArea, state: Rc<RefCell<AppState>>) {
    let cache = RefCell::new(LayerCache::new());

    drawing_area.set_draw_func(move |_, cr, width, height| {
        let st = state.borrow();
        let mut cache = cache.borrow_mut();
        if let Err(e) = paint(cr, width, height, &st, &mut cache) {
            log::error!("Redraw failed: {}", e);
        }
    });
}

/// Cached static layer, then the artists the current frame touches and the
/// overlays above them.
fn paint(
    cr: &cairo::Context,
    width: i32,
    height: i32,
    state: &AppState,
    cache: &mut LayerCache,
) -> anyhow::Result<()> {
    let scene = &state.scene;

    let layer = cache.static_layer(width, height, scene, &state.options)?;
    cr.set_source_surface(layer, 0.0, 0.0)?;
    cr.paint()?;

    let frame = state.current_frame();
    let backend = CairoBackend::new(cr, (width.max(1) as u32, height.max(1) as u32))
        .map_err(|e| anyhow!("cairo backend: {:?}", e))?;
    let root = backend.into_drawing_area();
    let vp = painter::viewport_for(&root, scene);

    painter::draw_artists(
        &root,
        scene,
        &frame.electrons,
        &vp,
        &frame.paint_order(scene),
        &state.options,
    )
    .map_err(|e| anyhow!("frame {}: {}", frame.index, e))?;
    root.present().map_err(|e| anyhow!("frame {}: {}", frame.index, e))?;

    log::trace!("Painted frame {}", frame.index);
    Ok(())
}
