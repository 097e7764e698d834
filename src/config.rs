// src/config.rs

use crate::physics::Direction;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub type Rgb = (f64, f64, f64);

/// Smallest half-width of the canvas, in world units.
pub const MIN_AXIS_LIMIT: f64 = 1.0;

// --- Animation ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
  pub total_frames: usize,
  pub interval_ms: u64,
  pub direction: Direction,
}

impl Default for AnimationSettings {
  fn default() -> Self {
    Self {
      total_frames: 200,
      interval_ms: 100,
      direction: Direction::Counterclockwise,
    }
  }
}

// --- RenderStyle ---
// Radii and the axis limit are world units (shell radius 1 = 1 unit).

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
  pub figure_color: Rgb,
  pub canvas_color: Rgb,
  pub frame_color: Rgb,
  pub nucleus_color: Rgb,
  pub electron_color: Rgb,
  pub orbit_color: Rgb,
  pub text_color: Rgb,
  pub nucleus_radius: f64,
  pub electron_radius: f64,
  pub axis_limit: f64,
  pub title: String,
  pub nucleus_label: String,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      figure_color: (1.0, 1.0, 1.0),
      canvas_color: (0.0, 0.0, 0.0),
      frame_color: (0.5, 0.5, 0.5),
      nucleus_color: (1.0, 0.0, 0.0),
      electron_color: (0.0, 0.0, 1.0),
      orbit_color: (1.0, 1.0, 1.0),
      text_color: (0.0, 0.0, 0.0),
      nucleus_radius: 0.5,
      electron_radius: 0.2,
      axis_limit: 7.0,
      title: "Bohr Atomic Model of Polonium (Po-209, Z = 84)".to_string(),
      nucleus_label: "Po".to_string(),
    }
  }
}

// --- Export ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
  pub fps: u32,
  pub width: u32,
  pub height: u32,
}

impl Default for ExportSettings {
  fn default() -> Self {
    Self {
      fps: 30,
      width: 800,
      height: 880,
    }
  }
}

// --- Main Config Struct ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub animation: AnimationSettings,
  pub style: RenderStyle,
  pub export: ExportSettings,
  pub verbose_log: bool,
}

impl Config {
  /// Loads config from the standard OS location (e.g. ~/.config/atomview/settings.json).
  ///
  /// Never fails: a missing or broken file yields defaults. The message says
  /// which happened and is meant for the log.
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if !path.exists() {
      return (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      );
    }

    match File::open(path) {
      Ok(file) => {
        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, Config>(reader) {
          Ok(cfg) => (cfg.sanitized(), format!("Config loaded from {:?}", path)),
          Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
        }
      }
      Err(e) => (Self::default(), format!("Error opening config: {}", e)),
    }
  }

  /// Saves config to the standard OS location and returns where it went.
  pub fn save(&self) -> anyhow::Result<PathBuf> {
    let path = Self::get_path();
    self.save_to(&path)?;
    Ok(path)
  }

  pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)
        .with_context(|| format!("could not create config directory {:?}", parent))?;
    }
    let file =
      File::create(path).with_context(|| format!("could not create config file {:?}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), self)
      .with_context(|| format!("could not write config to {:?}", path))?;
    Ok(())
  }

  /// Replaces values the animation cannot run with by their defaults.
  pub fn sanitized(mut self) -> Self {
    let defaults = Config::default();

    self.animation.total_frames = self.animation.total_frames.max(1);
    self.animation.interval_ms = self.animation.interval_ms.max(1);
    self.export.fps = self.export.fps.max(1);
    self.export.width = self.export.width.max(1);
    self.export.height = self.export.height.max(1);

    if !(self.style.nucleus_radius > 0.0) {
      self.style.nucleus_radius = defaults.style.nucleus_radius;
    }
    if !(self.style.electron_radius > 0.0) {
      self.style.electron_radius = defaults.style.electron_radius;
    }
    if !(self.style.axis_limit > 0.0) {
      self.style.axis_limit = defaults.style.axis_limit;
    }
    self.style.axis_limit = self.style.axis_limit.max(MIN_AXIS_LIMIT);
    self
  }

  pub fn get_path() -> PathBuf {
    // "com.example.atomview" should match the Application ID in main.rs
    if let Some(proj) = ProjectDirs::from("com", "example", "atomview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("atomview-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
  }

  #[test]
  fn defaults_match_the_reference_animation() {
    let cfg = Config::default();
    assert_eq!(cfg.animation.total_frames, 200);
    assert_eq!(cfg.animation.interval_ms, 100);
    assert_eq!(cfg.export.fps, 30);
    assert_eq!(cfg.style.axis_limit, 7.0);
    assert_eq!(cfg.style.nucleus_radius, 0.5);
    assert_eq!(cfg.style.electron_radius, 0.2);
  }

  #[test]
  fn partial_json_fills_in_defaults() {
    let cfg: Config =
      serde_json::from_str(r#"{ "animation": { "total_frames": 50 }, "verbose_log": true }"#)
        .unwrap();
    assert_eq!(cfg.animation.total_frames, 50);
    assert_eq!(cfg.animation.interval_ms, 100);
    assert!(cfg.verbose_log);
    assert_eq!(cfg.style, RenderStyle::default());
  }

  #[test]
  fn save_then_load_returns_the_same_config() {
    let dir = scratch_dir("roundtrip");
    let path = dir.join("nested").join("settings.json");

    let mut cfg = Config::default();
    cfg.animation.direction = Direction::Clockwise;
    cfg.style.nucleus_label = "Xe".to_string();
    cfg.save_to(&path).unwrap();

    let (loaded, msg) = Config::load_from(&path);
    assert_eq!(loaded, cfg);
    assert!(msg.starts_with("Config loaded"));

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn broken_file_falls_back_to_defaults() {
    let dir = scratch_dir("broken");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn missing_file_uses_defaults() {
    let (cfg, msg) = Config::load_from(Path::new("/nonexistent/atomview/settings.json"));
    assert_eq!(cfg, Config::default());
    assert_eq!(msg, "No config found. Using defaults.");
  }

  #[test]
  fn sanitized_repairs_unusable_values() {
    let mut cfg = Config::default();
    cfg.animation.total_frames = 0;
    cfg.animation.interval_ms = 0;
    cfg.export.fps = 0;
    cfg.style.electron_radius = -1.0;
    cfg.style.axis_limit = f64::NAN;

    let cfg = cfg.sanitized();
    assert_eq!(cfg.animation.total_frames, 1);
    assert_eq!(cfg.animation.interval_ms, 1);
    assert_eq!(cfg.export.fps, 1);
    assert_eq!(cfg.style.electron_radius, 0.2);
    assert_eq!(cfg.style.axis_limit, 7.0);
  }

  #[test]
  fn tiny_axis_limit_is_raised_to_the_minimum() {
    let mut cfg = Config::default();
    cfg.style.axis_limit = 0.0005;
    assert_eq!(cfg.sanitized().style.axis_limit, MIN_AXIS_LIMIT);

    let mut cfg = Config::default();
    cfg.style.axis_limit = 12.0;
    assert_eq!(cfg.sanitized().style.axis_limit, 12.0);
  }
}
