// Shared TUI components library
// Reusable widgets and hit-testing for terminal front ends

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
pub use core::*;
pub use elements::*;
pub use utilities::*;
