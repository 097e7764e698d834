// src/model/mod.rs
pub mod shells;

pub use shells::{ElectronPosition, Shell, MAX_ELECTRONS, POLONIUM};
