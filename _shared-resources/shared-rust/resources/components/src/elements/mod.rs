// GUI Elements module
// Visual components that render UI elements

pub mod button_bar;
pub mod panel_view;
pub mod toast;

pub use button_bar::*;
pub use panel_view::*;
pub use toast::*;
