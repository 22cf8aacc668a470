//! UI panels

mod controls;
mod viewport;

pub use controls::{ColorPanelToggle, ControlEdit, ControlPanel};
pub use viewport::ViewportPanel;
