// Core infrastructure module
// Application state, configuration and event plumbing

pub mod app;
pub mod app_config;
pub mod events;
pub mod page_config;

pub use app::App;
pub use app_config::AppConfig;
pub use events::{AppEvent, EventHandler};
pub use page_config::{ButtonConfig, MountedPage, PageConfig, PanelConfig};
