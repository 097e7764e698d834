//! Animated Bohr model of an atom: electrons laid out on concentric shells
//! and turned a little further every frame.

pub mod config;
pub mod model;
pub mod physics;
pub mod rendering;
pub mod state;
pub mod utils;

#[cfg(feature = "gui")]
pub mod menu;
#[cfg(feature = "gui")]
pub mod ui;
