pub mod window;

// Re-exports
pub use window::build_ui;
