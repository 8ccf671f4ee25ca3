//! # UI Shell Module
//!
//! Interaction state machines for the prototype shell: exclusive panel
//! toggling, nav-tab switching, the one-slot notification center, and
//! viewport layout handling with a debounced resize path.

pub mod notify;
pub mod panels;
pub mod tabs;
pub mod viewport;

pub use notify::NotificationCenter;
pub use panels::{PanelId, PanelRegistry, UiEvent};
pub use tabs::TabStrip;
pub use viewport::{Debouncer, LayoutClass};
