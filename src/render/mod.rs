// Render module - UI rendering functions

pub mod page;

pub use page::render_page;
