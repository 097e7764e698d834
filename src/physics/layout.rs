// src/physics/layout.rs

use crate::model::shells::total_electrons;
use crate::model::{ElectronPosition, Shell};
use std::f64::consts::TAU;

/// Number of electrons each shell actually receives under `max_electrons`.
///
/// Shells past the point where the cap is reached get zero.
pub fn placed_per_shell(shells: &[Shell], max_electrons: usize) -> Vec<usize> {
  let mut placed = Vec::with_capacity(shells.len());
  let mut count = 0usize;

  for shell in shells {
    let remaining = max_electrons.saturating_sub(count);
    let k = (shell.electrons as usize).min(remaining);
    placed.push(k);
    count += k;
  }

  placed
}

/// Lays electrons out evenly on their shells, in shell order.
///
/// The i-th of `k` electrons placed on a shell of radius `r` sits at angle
/// `2π·i/k`. When the cap cuts a shell short, `k` is the truncated count, so
/// the surviving electrons are spread over the whole ring. Generation stops
/// at the first shell that finds the cap exhausted.
pub fn generate_positions(shells: &[Shell], max_electrons: usize) -> Vec<ElectronPosition> {
  let mut positions = Vec::with_capacity(max_electrons.min(total_electrons(shells)));

  for shell in shells {
    let remaining = max_electrons - positions.len();
    if remaining == 0 {
      break;
    }

    let k = (shell.electrons as usize).min(remaining);
    let r = shell.radius as f64;

    for i in 0..k {
      let angle = TAU * i as f64 / k as f64;
      let (sin, cos) = angle.sin_cos();
      positions.push(ElectronPosition::new(r * cos, r * sin));
    }
  }

  positions
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{MAX_ELECTRONS, POLONIUM};

  const TOL: f64 = 1e-9;

  #[test]
  fn two_electrons_sit_opposite_each_other() {
    let shells = [Shell::new(0, 0), Shell::new(1, 2)];
    let pos = generate_positions(&shells, 10);

    assert_eq!(pos.len(), 2);
    assert!(pos[0].approx_eq(&ElectronPosition::new(1.0, 0.0), TOL));
    assert!(pos[1].approx_eq(&ElectronPosition::new(-1.0, 0.0), TOL));
  }

  #[test]
  fn truncated_shell_spreads_its_own_count() {
    let shells = [Shell::new(0, 0), Shell::new(1, 2)];
    let pos = generate_positions(&shells, 1);

    assert_eq!(pos.len(), 1);
    assert!(pos[0].approx_eq(&ElectronPosition::new(1.0, 0.0), TOL));

    // 3 of 8 on radius 2: 120 degrees apart, not 45
    let shells = [Shell::new(1, 2), Shell::new(2, 8)];
    let pos = generate_positions(&shells, 5);
    assert_eq!(pos.len(), 5);
    let third = pos[3];
    let expected = ElectronPosition::new(2.0 * (TAU / 3.0).cos(), 2.0 * (TAU / 3.0).sin());
    assert!(third.approx_eq(&expected, TOL));
  }

  #[test]
  fn zero_cap_is_empty() {
    assert!(generate_positions(&POLONIUM, 0).is_empty());
    assert!(placed_per_shell(&POLONIUM, 0).iter().all(|&k| k == 0));
  }

  #[test]
  fn every_electron_lies_on_its_shell() {
    let pos = generate_positions(&POLONIUM, MAX_ELECTRONS);
    let placed = placed_per_shell(&POLONIUM, MAX_ELECTRONS);

    let mut cursor = 0;
    for (shell, &k) in POLONIUM.iter().zip(&placed) {
      for p in &pos[cursor..cursor + k] {
        assert!((p.norm() - shell.radius as f64).abs() < TOL);
      }
      cursor += k;
    }
    assert_eq!(cursor, pos.len());
  }

  #[test]
  fn polonium_fills_exactly_to_the_cap() {
    let pos = generate_positions(&POLONIUM, MAX_ELECTRONS);
    assert_eq!(pos.len(), 84);
    assert_eq!(placed_per_shell(&POLONIUM, MAX_ELECTRONS), vec![0, 2, 8, 18, 32, 18, 6]);
  }

  #[test]
  fn count_never_exceeds_the_cap() {
    for cap in [1, 5, 10, 11, 30, 60, 83, 84, 200] {
      let pos = generate_positions(&POLONIUM, cap);
      assert_eq!(pos.len(), cap.min(84));
      assert_eq!(placed_per_shell(&POLONIUM, cap).iter().sum::<usize>(), pos.len());
    }
  }

  #[test]
  fn empty_ring_does_not_stop_generation() {
    let shells = [Shell::new(1, 0), Shell::new(2, 3)];
    let pos = generate_positions(&shells, 10);

    assert_eq!(pos.len(), 3);
    assert!(pos.iter().all(|p| (p.norm() - 2.0).abs() < TOL));
    assert_eq!(placed_per_shell(&shells, 10), vec![0, 3]);
  }

  #[test]
  fn cap_mid_list_omits_later_shells() {
    // 2 + 8 = 10: radius 3 and beyond are dropped entirely
    let placed = placed_per_shell(&POLONIUM, 10);
    assert_eq!(placed, vec![0, 2, 8, 0, 0, 0, 0]);
    let pos = generate_positions(&POLONIUM, 10);
    assert!(pos.iter().all(|p| p.norm() < 2.0 + TOL));
  }
}
