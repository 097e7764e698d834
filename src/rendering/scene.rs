// src/rendering/scene.rs

use crate::config::{AnimationSettings, Config, RenderStyle};
use crate::model::shells::{self, ElectronPosition, Shell};
use crate::physics::{frame_angle, placed_per_shell, rotate_all};

/// One drawable element of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artist {
  Title,
  Nucleus,
  NucleusLabel,
  Legend,
  /// Orbit guide, by index into `Scene::orbit_radii`.
  Orbit(usize),
  /// Electron marker, by index into the position table.
  Electron(usize),
}

impl Artist {
  /// True for artists a frame update moves or redraws.
  pub fn is_animated(&self) -> bool {
    matches!(self, Artist::Orbit(_) | Artist::Electron(_))
  }
}

/// Everything the painter needs for the atom, built once.
///
/// The position table is private and never changes after construction;
/// every frame is rotated from it.
#[derive(Clone)]
pub struct Scene {
  shells: Vec<Shell>,
  placed: Vec<usize>,
  electrons: Vec<ElectronPosition>,
  orbit_radii: Vec<f64>,
  pub animation: AnimationSettings,
  pub style: RenderStyle,
}

/// Electron positions for one animation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
  pub index: usize,
  pub angle: f64,
  pub electrons: Vec<ElectronPosition>,
}

impl Frame {
  /// Artists touched by this update: every electron and every orbit line.
  pub fn affected(&self, scene: &Scene) -> Vec<Artist> {
    let orbits = (0..scene.orbit_radii.len()).map(Artist::Orbit);
    let electrons = (0..self.electrons.len()).map(Artist::Electron);
    orbits.chain(electrons).collect()
  }

  /// Affected artists, then the overlays that must stay on top of them.
  pub fn paint_order(&self, scene: &Scene) -> Vec<Artist> {
    let mut order = self.affected(scene);
    order.extend(scene.overlay_artists());
    order
  }
}

impl Scene {
  pub fn new(config: &Config) -> Self {
    Self::from_shells(&shells::POLONIUM, shells::MAX_ELECTRONS, config)
  }

  pub fn from_shells(shell_list: &[Shell], max_electrons: usize, config: &Config) -> Self {
    let problems = shells::validate(shell_list);
    for p in &problems {
      log::warn!("Shell list: {}", p);
    }

    let electrons = crate::physics::generate_positions(shell_list, max_electrons);
    let placed = placed_per_shell(shell_list, max_electrons);
    let orbit_radii = shells::guide_radii(shell_list)
      .into_iter()
      .map(f64::from)
      .collect();

    log::debug!(
      "Scene built: {} electrons on {} shells",
      electrons.len(),
      shell_list.len()
    );

    Self {
      shells: shell_list.to_vec(),
      placed,
      electrons,
      orbit_radii,
      animation: config.animation.clone(),
      style: config.style.clone(),
    }
  }

  /// The untransformed position table.
  pub fn electrons(&self) -> &[ElectronPosition] {
    &self.electrons
  }

  pub fn orbit_radii(&self) -> &[f64] {
    &self.orbit_radii
  }

  pub fn total_frames(&self) -> usize {
    self.animation.total_frames.max(1)
  }

  /// Positions for frame `index`. Indices wrap at `total_frames`.
  pub fn frame(&self, index: usize) -> Frame {
    let total = self.total_frames();
    let index = index % total;
    let angle = self.animation.direction.signed(frame_angle(index, total));
    Frame {
      index,
      angle,
      electrons: rotate_all(&self.electrons, angle),
    }
  }

  /// Artists that no frame update touches and nothing moves over.
  pub fn static_artists(&self) -> Vec<Artist> {
    vec![Artist::Title, Artist::Nucleus, Artist::NucleusLabel]
  }

  /// Fixed artists redrawn after every frame so orbits and electrons pass
  /// underneath them.
  pub fn overlay_artists(&self) -> Vec<Artist> {
    vec![Artist::Legend]
  }

  /// One line per shell: radius, electrons configured, electrons placed.
  pub fn shell_report(&self) -> String {
    let mut out = String::from("Shell  Radius  Configured  Placed\n");
    for (i, (shell, placed)) in self.shells.iter().zip(&self.placed).enumerate() {
      out.push_str(&format!(
        "{:>5}  {:>6}  {:>10}  {:>6}\n",
        i, shell.radius, shell.electrons, placed
      ));
    }
    out.push_str(&format!("Total electrons: {}", self.electrons.len()));
    out
  }
}

/// Pixel placement of the square canvas inside a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
  pub left: i32,
  pub top: i32,
  pub side: i32,
  pub half_extent: f64,
}

impl Viewport {
  /// Largest centred square below a title strip of `title_px`, inset by `margin_px`.
  pub fn fit(width: u32, height: u32, title_px: u32, margin_px: u32, half_extent: f64) -> Self {
    let w = width as i32;
    let h = height as i32;
    let m = margin_px as i32;
    let body_top = (title_px as i32).min(h);

    let avail_w = (w - 2 * m).max(1);
    let avail_h = (h - body_top - 2 * m).max(1);
    let side = avail_w.min(avail_h);

    Self {
      left: (w - side) / 2,
      top: body_top + (h - body_top - side) / 2,
      side,
      half_extent,
    }
  }

  pub fn px_per_unit(&self) -> f64 {
    self.side as f64 / (2.0 * self.half_extent)
  }

  /// World coordinates (y up) to pixel coordinates (y down).
  pub fn to_pixel(&self, x: f64, y: f64) -> (i32, i32) {
    let s = self.px_per_unit();
    let cx = self.left as f64 + self.side as f64 / 2.0;
    let cy = self.top as f64 + self.side as f64 / 2.0;
    ((cx + x * s).round() as i32, (cy - y * s).round() as i32)
  }

  /// World length to pixels, never below one pixel.
  pub fn scale_len(&self, len: f64) -> f64 {
    (len * self.px_per_unit()).max(1.0)
  }

  pub fn bottom_right(&self) -> (i32, i32) {
    (self.left + self.side, self.top + self.side)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn polonium_scene_has_84_electrons_and_six_orbits() {
    let scene = Scene::new(&Config::default());
    assert_eq!(scene.electrons().len(), 84);
    assert_eq!(scene.orbit_radii(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
  }

  #[test]
  fn frame_index_wraps() {
    let scene = Scene::new(&Config::default());
    let total = scene.total_frames();
    let a = scene.frame(3);
    let b = scene.frame(total + 3);
    assert_eq!(b.index, 3);
    assert_eq!(a, b);
  }

  #[test]
  fn frame_zero_matches_the_table() {
    let scene = Scene::new(&Config::default());
    let f = scene.frame(0);
    assert_eq!(f.angle, 0.0);
    for (p, q) in f.electrons.iter().zip(scene.electrons()) {
      assert!(p.approx_eq(q, 1e-12));
    }
  }

  #[test]
  fn clockwise_scene_turns_the_other_way() {
    let mut cfg = Config::default();
    cfg.animation.direction = crate::physics::Direction::Clockwise;
    let shells = [Shell::new(0, 0), Shell::new(1, 1)];
    let scene = Scene::from_shells(&shells, 10, &cfg);

    let quarter = scene.frame(scene.total_frames() / 4);
    assert!(quarter.electrons[0].approx_eq(&ElectronPosition::new(0.0, -1.0), 1e-9));
  }

  #[test]
  fn affected_artists_are_orbits_and_electrons() {
    let scene = Scene::new(&Config::default());
    let affected = scene.frame(10).affected(&scene);
    assert_eq!(affected.len(), 6 + 84);
    assert!(affected.iter().all(Artist::is_animated));
    assert!(scene.static_artists().iter().all(|a| !a.is_animated()));
  }

  #[test]
  fn legend_is_painted_after_the_moving_artists() {
    let scene = Scene::new(&Config::default());
    assert!(!scene.static_artists().contains(&Artist::Legend));

    let order = scene.frame(7).paint_order(&scene);
    let legend = order.iter().position(|a| *a == Artist::Legend).unwrap();
    assert_eq!(legend, order.len() - 1);
    assert!(order[..legend].iter().all(Artist::is_animated));
  }

  #[test]
  fn shell_report_lists_every_shell() {
    let scene = Scene::new(&Config::default());
    let report = scene.shell_report();
    assert_eq!(report.lines().count(), 1 + 7 + 1);
    assert!(report.ends_with("Total electrons: 84"));
  }

  #[test]
  fn viewport_is_a_centred_square() {
    let vp = Viewport::fit(800, 880, 60, 20, 7.0);
    assert_eq!(vp.side, 760);
    assert_eq!(vp.left, 20);
    assert_eq!(vp.top, 90);

    let wide = Viewport::fit(1200, 600, 0, 0, 7.0);
    assert_eq!(wide.side, 600);
    assert_eq!(wide.left, 300);
  }

  #[test]
  fn origin_maps_to_the_canvas_centre() {
    let vp = Viewport::fit(700, 700, 0, 0, 7.0);
    assert_eq!(vp.to_pixel(0.0, 0.0), (350, 350));
    assert_eq!(vp.px_per_unit(), 50.0);
    // y grows upward in world space
    assert_eq!(vp.to_pixel(1.0, 1.0), (400, 300));
    assert_eq!(vp.bottom_right(), (700, 700));
  }
}
