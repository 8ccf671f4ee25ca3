//! # Classifier Module
//!
//! Assigns each chat bubble one of three mutually exclusive visual states
//! based on its origin and content. Observational, not authoritative: the
//! content heuristic has known false positives and is documented as such.
//!
//! ## Components
//! - `state`: bubble model and state transitions
//! - `heuristics`: literal phrase tables for button-generated messages
//! - `watcher`: the event-subscription actor that classifies new bubbles

pub mod heuristics;
pub mod state;
pub mod watcher;

pub use state::{Bubble, BubbleState, Surface};
pub use watcher::{ClickSource, MessageWatcherHandle, ShellEvent};
