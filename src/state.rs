// src/state.rs
use crate::config::Config;
use crate::physics::Direction;
use crate::rendering::{DrawOptions, Frame, Scene};
use std::path::Path;

/// What the window shares between its timer and draw callbacks.
pub struct AppState {
    pub config: Config,
    pub scene: Scene,
    pub frame: usize,
    pub options: DrawOptions,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let scene = Scene::new(&config);
        Self {
            config,
            scene,
            frame: 0,
            options: DrawOptions::default(),
        }
    }

    /// Steps to the next frame, starting over after the last one.
    pub fn advance(&mut self) -> usize {
        self.frame = (self.frame + 1) % self.scene.total_frames();
        self.frame
    }

    pub fn current_frame(&self) -> Frame {
        self.scene.frame(self.frame)
    }

    /// Flips the turning direction of the config and the live scene. The
    /// current angle is kept, so the picture does not jump.
    pub fn reverse_direction(&mut self) -> Direction {
        let total = self.scene.total_frames();
        let dir = self.config.animation.direction.reversed();
        self.config.animation.direction = dir;
        self.scene.animation.direction = dir;
        self.frame = (total - self.frame) % total;
        dir
    }

    /// Writes the config to the standard location and logs the outcome.
    pub fn save_config(&self) {
        match self.config.save() {
            Ok(path) => log::info!("Config saved to {:?}", path),
            Err(e) => log::error!("Failed to save config: {:#}", e),
        }
    }

    pub fn save_config_to(&self, path: &Path) -> anyhow::Result<()> {
        self.config.save_to(path)?;
        log::info!("Config saved to {:?}", path);
        Ok(())
    }
}
