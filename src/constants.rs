// Application constants

/// Registry name prefix for button hit areas
pub const HWND_BUTTON_PREFIX: &str = "button:";

/// Registry name of the panel content box
pub const HWND_PANEL_BOX: &str = "panel:content";

/// Environment variable naming the page file
pub const PAGE_ENV_VAR: &str = "TAB_SWITCHER_PAGE";

/// Page file bundled under src/
pub const DEFAULT_PAGE_FILE: &str = "page.yaml";

/// How long the main loop waits for input before redrawing
pub const POLL_INTERVAL_MS: u64 = 50;
