//! Exclusive panel state machine.
//!
//! The shell has two toggle surfaces: the quick-actions grid and the
//! recent-chats dropdown. At most one is open; opening one closes the
//! other. Wiring is guarded by a marker so repeated initialization cannot
//! register duplicate handlers.

use serde::{Deserialize, Serialize};

/// The shell's toggle surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    QuickActions,
    RecentChats,
}

/// Interaction events the panel registry reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The trigger button of a panel was pressed.
    TriggerPressed(PanelId),
    /// An item inside an open panel was activated.
    ItemActivated(PanelId),
    /// A click landed outside both panels and their triggers.
    OutsideClick,
    EscapePressed,
}

/// Tracks which panel is open and whether handlers are wired.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    open: Option<PanelId>,
    wired: bool,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires the event handlers. Idempotent: the first call returns true,
    /// every later call is a no-op returning false.
    pub fn wire(&mut self) -> bool {
        if self.wired {
            return false;
        }
        self.wired = true;
        true
    }

    /// Applies one interaction event. Events before `wire()` are dropped,
    /// matching a page whose handlers are not registered yet.
    pub fn handle(&mut self, event: UiEvent) {
        if !self.wired {
            return;
        }
        match event {
            UiEvent::TriggerPressed(panel) => {
                // Toggling one panel closes the other as a side effect of
                // the single `open` slot.
                self.open = if self.open == Some(panel) {
                    None
                } else {
                    Some(panel)
                };
            }
            UiEvent::ItemActivated(panel) => {
                if self.open == Some(panel) {
                    self.open = None;
                }
            }
            UiEvent::OutsideClick | UiEvent::EscapePressed => {
                self.open = None;
            }
        }
    }

    /// The currently open panel, if any.
    pub fn open_panel(&self) -> Option<PanelId> {
        self.open
    }

    /// Whether a panel's trigger button should render as active.
    pub fn is_active(&self, panel: PanelId) -> bool {
        self.open == Some(panel)
    }
}
