// src/physics/mod.rs
pub mod layout;
pub mod rotation;

pub use layout::{generate_positions, placed_per_shell};
pub use rotation::{compute_frame, frame_angle, rotate_all, Direction};
