//! Bubble model and state transitions.
//!
//! A bubble carries at most one state. Holding the state in a single
//! `Option<BubbleState>` makes the three visual states mutually exclusive by
//! construction, where the prototype relied on add/remove discipline over
//! CSS class flags.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual state of a chat bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BubbleState {
    /// Typed and submitted.
    Sent,
    /// In progress, not yet finalized.
    Typing,
    /// Originated from a button click (or judged so by the heuristic).
    CtaTriggered,
}

impl BubbleState {
    /// The CSS class name the prototype renders for this state.
    pub fn class_name(&self) -> &'static str {
        match self {
            BubbleState::Sent => "sent",
            BubbleState::Typing => "typing",
            BubbleState::CtaTriggered => "cta-triggered",
        }
    }
}

/// Containers a bubble (or a click) can sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    ChatInterface,
    ChatMessages,
    MainContentWrapper,
    ChatContainer,
    ControlBar,
}

impl Surface {
    /// True for the containers that count as "inside a chat interface".
    pub fn is_chat_surface(&self) -> bool {
        !matches!(self, Surface::ControlBar)
    }
}

/// A single rendered chat message element.
#[derive(Debug, Clone)]
pub struct Bubble {
    pub id: Uuid,
    pub text: String,
    /// The ancestor containers this bubble sits in.
    pub surfaces: Vec<Surface>,
    /// Current state; `None` until classified.
    pub state: Option<BubbleState>,
    /// Set when the bubble is CTA-classified: its trimmed lowercase text,
    /// kept for targeted styling.
    pub data_message: Option<String>,
}

impl Bubble {
    /// Creates an unclassified bubble.
    pub fn new(text: impl Into<String>, surfaces: Vec<Surface>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            surfaces,
            state: None,
            data_message: None,
        }
    }

    /// True when the bubble sits in any chat container.
    pub fn in_chat_surface(&self) -> bool {
        self.surfaces.iter().any(Surface::is_chat_surface)
    }

    /// Marks the bubble as sent. Replaces any previous state.
    pub fn mark_sent(&mut self) {
        self.state = Some(BubbleState::Sent);
    }

    /// Marks the bubble as typing. Replaces any previous state.
    pub fn mark_typing(&mut self) {
        self.state = Some(BubbleState::Typing);
    }

    /// Marks the bubble as CTA-triggered and tags it with its message text.
    pub fn mark_cta(&mut self) {
        self.state = Some(BubbleState::CtaTriggered);
        self.data_message = Some(self.text.trim().to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_mutually_exclusive() {
        let mut bubble = Bubble::new("hello", vec![Surface::ChatMessages]);
        assert!(bubble.state.is_none());

        bubble.mark_typing();
        assert_eq!(bubble.state, Some(BubbleState::Typing));

        bubble.mark_sent();
        assert_eq!(bubble.state, Some(BubbleState::Sent));

        bubble.mark_cta();
        assert_eq!(bubble.state, Some(BubbleState::CtaTriggered));
    }

    #[test]
    fn test_cta_mark_tags_message_text() {
        let mut bubble = Bubble::new("  Looks Good  ", vec![Surface::ChatInterface]);
        bubble.mark_cta();
        assert_eq!(bubble.data_message.as_deref(), Some("looks good"));
    }

    #[test]
    fn test_control_bar_is_not_a_chat_surface() {
        let bubble = Bubble::new("x", vec![Surface::ControlBar]);
        assert!(!bubble.in_chat_surface());

        let bubble = Bubble::new("x", vec![Surface::ControlBar, Surface::ChatContainer]);
        assert!(bubble.in_chat_surface());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(BubbleState::Sent.class_name(), "sent");
        assert_eq!(BubbleState::Typing.class_name(), "typing");
        assert_eq!(BubbleState::CtaTriggered.class_name(), "cta-triggered");
    }
}
