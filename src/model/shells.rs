// src/model/shells.rs

/// Maximum number of electrons generated across all shells.
pub const MAX_ELECTRONS: usize = 84;

/// One concentric ring of the Bohr model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
  pub radius: u32,
  pub electrons: u32,
}

impl Shell {
  pub const fn new(radius: u32, electrons: u32) -> Self {
    Self { radius, electrons }
  }
}

/// Polonium (Z = 84): nucleus plus six shells, radii 0..=6.
pub const POLONIUM: [Shell; 7] = [
  Shell::new(0, 0),
  Shell::new(1, 2),
  Shell::new(2, 8),
  Shell::new(3, 18),
  Shell::new(4, 32),
  Shell::new(5, 18),
  Shell::new(6, 6),
];

/// A fixed position of one electron in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronPosition {
  pub x: f64,
  pub y: f64,
}

impl ElectronPosition {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Distance from the nucleus.
  pub fn norm(&self) -> f64 {
    self.x.hypot(self.y)
  }

  pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
    (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
  }
}

/// Sum of the configured electron counts, ignoring any cap.
pub fn total_electrons(shells: &[Shell]) -> usize {
  shells.iter().map(|s| s.electrons as usize).sum()
}

/// Radii that get an orbit guide line (everything but the nucleus).
pub fn guide_radii(shells: &[Shell]) -> Vec<u32> {
  shells.iter().map(|s| s.radius).filter(|&r| r > 0).collect()
}

/// Checks the ordering and nucleus rules of a shell list.
///
/// Returns a description of every violation. An empty result means the
/// list is well formed. Layout never refuses a malformed list; callers
/// decide whether to warn.
pub fn validate(shells: &[Shell]) -> Vec<String> {
  let mut problems = Vec::new();

  for (i, pair) in shells.windows(2).enumerate() {
    if pair[1].radius < pair[0].radius {
      problems.push(format!(
        "shell {} has radius {} below the previous radius {}",
        i + 1,
        pair[1].radius,
        pair[0].radius
      ));
    }
  }

  for (i, shell) in shells.iter().enumerate() {
    if shell.radius == 0 && shell.electrons > 0 {
      problems.push(format!(
        "shell {} sits at radius 0 but holds {} electrons",
        i, shell.electrons
      ));
    }
  }

  problems
}
