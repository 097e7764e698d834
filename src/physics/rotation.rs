// src/physics/rotation.rs

use crate::model::ElectronPosition;
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Sense in which the shells turn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
  #[default]
  Counterclockwise,
  /// Row-vector product with the standard matrix, i.e. the transpose.
  Clockwise,
}

impl Direction {
  pub fn reversed(self) -> Self {
    match self {
      Direction::Counterclockwise => Direction::Clockwise,
      Direction::Clockwise => Direction::Counterclockwise,
    }
  }

  pub fn signed(self, angle: f64) -> f64 {
    match self {
      Direction::Counterclockwise => angle,
      Direction::Clockwise => -angle,
    }
  }
}

/// Rotation angle in radians of frame `frame` out of `total_frames`.
pub fn frame_angle(frame: usize, total_frames: usize) -> f64 {
  debug_assert!(total_frames > 0, "total_frames must be positive");
  TAU * frame as f64 / total_frames as f64
}

/// Applies `[[cos, -sin], [sin, cos]]` to every position.
pub fn rotate_all(base: &[ElectronPosition], angle: f64) -> Vec<ElectronPosition> {
  let rot = Rotation2::new(angle);
  base
    .iter()
    .map(|p| {
      let v = rot * Vector2::new(p.x, p.y);
      ElectronPosition::new(v.x, v.y)
    })
    .collect()
}

/// Positions for one frame, always rotated from the untouched base table.
pub fn compute_frame(
  base: &[ElectronPosition],
  frame: usize,
  total_frames: usize,
) -> Vec<ElectronPosition> {
  rotate_all(base, frame_angle(frame, total_frames))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{MAX_ELECTRONS, POLONIUM};
  use crate::physics::layout::generate_positions;

  const TOL: f64 = 1e-9;
  const FRAMES: usize = 200;

  fn polonium() -> Vec<ElectronPosition> {
    generate_positions(&POLONIUM, MAX_ELECTRONS)
  }

  fn all_close(a: &[ElectronPosition], b: &[ElectronPosition]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| p.approx_eq(q, TOL))
  }

  #[test]
  fn frame_zero_is_identity() {
    let base = polonium();
    assert!(all_close(&compute_frame(&base, 0, FRAMES), &base));
  }

  #[test]
  fn full_turn_wraps_to_frame_zero() {
    let base = polonium();
    let first = compute_frame(&base, 0, FRAMES);
    let wrapped = compute_frame(&base, FRAMES, FRAMES);
    assert!(all_close(&first, &wrapped));
  }

  #[test]
  fn rotation_preserves_distance() {
    let base = polonium();
    for frame in [1, 17, 50, 99, 150, 199] {
      let rotated = compute_frame(&base, frame, FRAMES);
      for (p, q) in base.iter().zip(&rotated) {
        assert!((p.norm() - q.norm()).abs() < TOL);
      }
    }
  }

  #[test]
  fn same_inputs_same_outputs() {
    let base = polonium();
    assert_eq!(compute_frame(&base, 37, FRAMES), compute_frame(&base, 37, FRAMES));
  }

  #[test]
  fn quarter_turn_is_counterclockwise() {
    let base = [ElectronPosition::new(1.0, 0.0)];
    let rotated = compute_frame(&base, 50, FRAMES);
    assert!(rotated[0].approx_eq(&ElectronPosition::new(0.0, 1.0), TOL));
  }

  #[test]
  fn reversing_twice_is_a_no_op() {
    assert_eq!(Direction::Counterclockwise.reversed(), Direction::Clockwise);
    assert_eq!(Direction::Clockwise.reversed().reversed(), Direction::Clockwise);
  }

  #[test]
  fn clockwise_negates_the_angle() {
    let base = [ElectronPosition::new(1.0, 0.0)];
    let angle = Direction::Clockwise.signed(frame_angle(50, FRAMES));
    let rotated = rotate_all(&base, angle);
    assert!(rotated[0].approx_eq(&ElectronPosition::new(0.0, -1.0), TOL));
  }

  #[test]
  fn base_table_is_left_alone() {
    let base = polonium();
    let copy = base.clone();
    let _ = compute_frame(&base, 123, FRAMES);
    assert_eq!(base, copy);
  }
}
