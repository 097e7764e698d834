pub mod export;
pub mod painter;
pub mod scene;

#[cfg(feature = "gui")]
pub mod layer_cache;
#[cfg(feature = "gui")]
pub mod screen;

// Re-export specific functions to keep the API clean for the rest of the app
pub use export::{export_gif, render_frame_rgb, GifWriter};
pub use painter::DrawOptions;
pub use scene::{Artist, Frame, Scene, Viewport};

#[cfg(feature = "gui")]
pub use export::export_frame;
#[cfg(feature = "gui")]
pub use screen::setup_drawing;
