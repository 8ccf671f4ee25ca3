//! Message watcher actor.
//!
//! The explicit event-subscription interface for "element added" and
//! "button clicked" notifications. Shell code publishes [`ShellEvent`]s into
//! the watcher's queue; the actor consumes them in order on a single task
//! and assigns bubble states, so classification needs no tree-watching API
//! and no shared mutable state.

use crate::classifier::heuristics;
use crate::classifier::state::{Bubble, BubbleState, Surface};
use crate::error::AppError;
use std::collections::VecDeque;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use uuid::Uuid;

/// How many recently clicked button labels are remembered to catch bubbles
/// created right after the click.
const RECENT_LABELS_CAP: usize = 8;

/// Where a click came from.
#[derive(Debug, Clone)]
pub struct ClickSource {
    /// Element tag name, e.g. `"button"` or `"div"`.
    pub tag: String,
    /// CSS classes on the clicked element.
    pub classes: Vec<String>,
    /// Ancestor containers of the clicked element.
    pub surfaces: Vec<Surface>,
}

impl ClickSource {
    /// True when the element counts as a button.
    pub fn is_recognized_button(&self) -> bool {
        heuristics::is_recognized_button(&self.tag, &self.classes)
    }

    /// True when the click happened inside a chat container.
    pub fn in_chat_surface(&self) -> bool {
        self.surfaces.iter().any(Surface::is_chat_surface)
    }

    /// Control-bar buttons are excluded from CTA behavior.
    pub fn in_control_bar(&self) -> bool {
        self.surfaces.contains(&Surface::ControlBar)
    }
}

/// Notifications the watcher subscribes to.
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// A new message element appeared.
    BubbleAdded(Bubble),
    /// A button was clicked somewhere in the shell.
    ButtonClicked { label: String, source: ClickSource },
}

enum WatcherMessage {
    Event(ShellEvent),
    Seed {
        bubbles: Vec<Bubble>,
        responder: oneshot::Sender<usize>,
    },
    Mark {
        id: Uuid,
        state: BubbleState,
        responder: oneshot::Sender<bool>,
    },
    StateOf {
        id: Uuid,
        responder: oneshot::Sender<Option<BubbleState>>,
    },
    Snapshot {
        responder: oneshot::Sender<Vec<Bubble>>,
    },
}

/// A handle to the message watcher actor.
///
/// Cheap to clone; all operations are messages processed in order by the
/// actor task, so a query sent after an event observes that event's effect.
#[derive(Clone)]
pub struct MessageWatcherHandle {
    sender: mpsc::Sender<WatcherMessage>,
}

impl Default for MessageWatcherHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageWatcherHandle {
    /// Spawns the watcher actor and returns a handle to it.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = MessageWatcher::new(receiver);
        tokio::spawn(async move { actor.run().await });
        Self { sender }
    }

    /// Publishes an event into the watcher's queue.
    pub async fn publish(&self, event: ShellEvent) -> Result<(), AppError> {
        self.sender
            .send(WatcherMessage::Event(event))
            .await
            .map_err(|e| AppError::Channel(e.to_string()))
    }

    /// Page-load sweep over the bubbles that already exist: unclassified
    /// bubbles become `Sent`, then the CTA heuristic pass runs over all of
    /// them. Returns how many bubbles the watcher now tracks.
    pub async fn seed(&self, bubbles: Vec<Bubble>) -> Result<usize, AppError> {
        let (responder, receiver) = oneshot::channel();
        self.sender
            .send(WatcherMessage::Seed { bubbles, responder })
            .await
            .map_err(|e| AppError::Channel(e.to_string()))?;
        receiver
            .await
            .map_err(|e| AppError::Channel(e.to_string()))
    }

    /// Explicit external state change; the only way a classified bubble is
    /// ever re-evaluated. Returns false when the bubble is unknown.
    pub async fn mark(&self, id: Uuid, state: BubbleState) -> Result<bool, AppError> {
        let (responder, receiver) = oneshot::channel();
        self.sender
            .send(WatcherMessage::Mark { id, state, responder })
            .await
            .map_err(|e| AppError::Channel(e.to_string()))?;
        receiver
            .await
            .map_err(|e| AppError::Channel(e.to_string()))
    }

    /// Current state of a bubble, if the watcher knows it.
    pub async fn state_of(&self, id: Uuid) -> Result<Option<BubbleState>, AppError> {
        let (responder, receiver) = oneshot::channel();
        self.sender
            .send(WatcherMessage::StateOf { id, responder })
            .await
            .map_err(|e| AppError::Channel(e.to_string()))?;
        receiver
            .await
            .map_err(|e| AppError::Channel(e.to_string()))
    }

    /// Copy of every tracked bubble, in arrival order.
    pub async fn snapshot(&self) -> Result<Vec<Bubble>, AppError> {
        let (responder, receiver) = oneshot::channel();
        self.sender
            .send(WatcherMessage::Snapshot { responder })
            .await
            .map_err(|e| AppError::Channel(e.to_string()))?;
        receiver
            .await
            .map_err(|e| AppError::Channel(e.to_string()))
    }
}

struct MessageWatcher {
    receiver: mpsc::Receiver<WatcherMessage>,
    bubbles: Vec<Bubble>,
    /// Labels of recently clicked buttons, newest first.
    recent_labels: VecDeque<String>,
}

impl MessageWatcher {
    fn new(receiver: mpsc::Receiver<WatcherMessage>) -> Self {
        Self {
            receiver,
            bubbles: Vec::new(),
            recent_labels: VecDeque::new(),
        }
    }

    async fn run(mut self) {
        while let Some(message) = self.receiver.recv().await {
            match message {
                WatcherMessage::Event(ShellEvent::BubbleAdded(bubble)) => {
                    self.on_bubble_added(bubble);
                }
                WatcherMessage::Event(ShellEvent::ButtonClicked { label, source }) => {
                    self.on_button_clicked(&label, &source);
                }
                WatcherMessage::Seed { bubbles, responder } => {
                    self.on_seed(bubbles);
                    let _ = responder.send(self.bubbles.len());
                }
                WatcherMessage::Mark { id, state, responder } => {
                    let _ = responder.send(self.on_mark(id, state));
                }
                WatcherMessage::StateOf { id, responder } => {
                    let state = self.bubbles.iter().find(|b| b.id == id).and_then(|b| b.state);
                    let _ = responder.send(state);
                }
                WatcherMessage::Snapshot { responder } => {
                    let _ = responder.send(self.bubbles.clone());
                }
            }
        }
    }

    /// Classifies a newly added bubble. Button-generated messages become
    /// `CtaTriggered` immediately; anything still unclassified starts as
    /// `Typing`; bubbles that already carry a state are left alone.
    fn on_bubble_added(&mut self, mut bubble: Bubble) {
        if heuristics::looks_button_generated(&bubble) || self.matches_recent_label(&bubble.text) {
            bubble.mark_cta();
            debug!(id = %bubble.id, "bubble classified as cta-triggered");
        } else if bubble.state.is_none() {
            bubble.mark_typing();
            debug!(id = %bubble.id, "bubble classified as typing");
        }
        self.bubbles.push(bubble);
    }

    fn on_button_clicked(&mut self, label: &str, source: &ClickSource) {
        if !source.is_recognized_button() || !source.in_chat_surface() || source.in_control_bar() {
            return;
        }
        let label = label.trim();
        if label.is_empty() {
            return;
        }

        info!(label, "cta button clicked");
        for bubble in &mut self.bubbles {
            if bubble.text.trim() == label && bubble.state != Some(BubbleState::CtaTriggered) {
                bubble.mark_cta();
            }
        }
        self.remember_label(label.to_string());
    }

    fn on_seed(&mut self, bubbles: Vec<Bubble>) {
        for mut bubble in bubbles {
            if bubble.state.is_none() {
                bubble.mark_sent();
            }
            self.bubbles.push(bubble);
        }
        // CTA pass over everything that is not already CTA-classified.
        for bubble in &mut self.bubbles {
            if bubble.state != Some(BubbleState::CtaTriggered)
                && heuristics::looks_button_generated(bubble)
            {
                bubble.mark_cta();
            }
        }
    }

    fn on_mark(&mut self, id: Uuid, state: BubbleState) -> bool {
        match self.bubbles.iter_mut().find(|b| b.id == id) {
            Some(bubble) => {
                match state {
                    BubbleState::Sent => bubble.mark_sent(),
                    BubbleState::Typing => bubble.mark_typing(),
                    BubbleState::CtaTriggered => bubble.mark_cta(),
                }
                true
            }
            None => false,
        }
    }

    fn matches_recent_label(&self, text: &str) -> bool {
        let trimmed = text.trim();
        self.recent_labels.iter().any(|label| label == trimmed)
    }

    fn remember_label(&mut self, label: String) {
        self.recent_labels.push_front(label);
        self.recent_labels.truncate(RECENT_LABELS_CAP);
    }
}
