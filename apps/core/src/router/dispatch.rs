//! Submission handling: a pure decision step and its async execution.
//!
//! [`decide`] turns one chat submission into a [`Decision`] without touching
//! any I/O. The [`Dispatcher`] then executes a decision against a
//! [`Navigator`], which abstracts over whatever actually performs the
//! navigation (the interactive shell, a test recorder, ...).

use crate::error::AppError;
use crate::router::intent::IntentDetector;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The routing outcome of a single chat submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Notification to show, if any.
    pub notification: Option<String>,
    /// Page id to navigate to, if any.
    pub destination: Option<&'static str>,
    /// Pause before navigating. Zero for global navigation phrases.
    pub delay: Duration,
    /// Whether the submission was consumed (a handled submission clears the
    /// input field in the prototype).
    pub handled: bool,
}

impl Decision {
    fn unhandled(notification: String) -> Self {
        Self {
            notification: Some(notification),
            destination: None,
            delay: Duration::ZERO,
            handled: false,
        }
    }
}

/// Performs navigation and notification on behalf of the dispatcher.
///
/// This is the explicit seam that replaces direct location/DOM access, so
/// the routing logic stays a pure function of its input.
#[async_trait]
pub trait Navigator: Send + Sync + 'static {
    /// Navigates to a page id (resolving it against the route table is the
    /// implementor's business).
    async fn navigate(&self, page_id: &str) -> Result<(), AppError>;

    /// Shows a notification.
    async fn notify(&self, message: &str) -> Result<(), AppError>;
}

/// Decides what a submission does. Pure: text in, decision out.
///
/// Order is fixed: empty input, global navigation phrases, then the category
/// tables (privacy policy, marketing strategy, image generation, logo
/// design), then the generic fallthrough.
pub fn decide(detector: &IntentDetector, input: &str, nav_delay: Duration) -> Decision {
    if input.trim().is_empty() {
        return Decision::unhandled("Please enter a message first".to_string());
    }

    if let Some(destination) = detector.global_destination(input) {
        return Decision {
            notification: None,
            destination: Some(destination),
            delay: Duration::ZERO,
            handled: true,
        };
    }

    if let Some(intent) = detector.detect(input) {
        return Decision {
            notification: Some(intent.notification().to_string()),
            destination: Some(intent.destination()),
            delay: nav_delay,
            handled: true,
        };
    }

    Decision::unhandled(format!("Processing: \"{}\"", input))
}

/// Executes decisions against a [`Navigator`].
pub struct Dispatcher {
    detector: IntentDetector,
    navigator: Arc<dyn Navigator>,
    nav_delay: Duration,
}

impl Dispatcher {
    pub fn new(navigator: Arc<dyn Navigator>, nav_delay: Duration) -> Self {
        Self {
            detector: IntentDetector::new(),
            navigator,
            nav_delay,
        }
    }

    /// Routes one submission. Returns whether it was handled.
    pub async fn submit(&self, input: &str) -> Result<bool, AppError> {
        let decision = decide(&self.detector, input, self.nav_delay);

        if let Some(message) = &decision.notification {
            self.navigator.notify(message).await?;
        }

        if let Some(destination) = decision.destination {
            info!(destination, "routing chat submission");
            if !decision.delay.is_zero() {
                tokio::time::sleep(decision.delay).await;
            }
            self.navigator.navigate(destination).await?;
        }

        Ok(decision.handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> IntentDetector {
        IntentDetector::new()
    }

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_empty_input_prompts() {
        let decision = decide(&detector(), "   ", DELAY);
        assert_eq!(
            decision.notification.as_deref(),
            Some("Please enter a message first")
        );
        assert!(decision.destination.is_none());
        assert!(!decision.handled);
    }

    #[test]
    fn test_global_phrase_navigates_immediately() {
        let decision = decide(&detector(), "create a logo", DELAY);
        assert_eq!(decision.destination, Some("generate-logo"));
        assert_eq!(decision.delay, Duration::ZERO);
        assert!(decision.notification.is_none());
        assert!(decision.handled);
    }

    #[test]
    fn test_global_phrase_beats_category_tables() {
        // "make a privacy policy" is both a global phrase and a privacy
        // keyword; the global path must win (no notification, no delay).
        let decision = decide(&detector(), "make a privacy policy", DELAY);
        assert_eq!(decision.destination, Some("generate-privacy-policy"));
        assert_eq!(decision.delay, Duration::ZERO);
        assert!(decision.notification.is_none());
    }

    #[test]
    fn test_category_match_notifies_then_navigates_after_delay() {
        let decision = decide(&detector(), "I need a marketing strategy", DELAY);
        assert_eq!(
            decision.notification.as_deref(),
            Some("Opening Marketing Strategy Generator...")
        );
        assert_eq!(decision.destination, Some("generate-marketing-strategy"));
        assert_eq!(decision.delay, DELAY);
        assert!(decision.handled);
    }

    #[test]
    fn test_logo_keyword_routes_to_logo_destination() {
        for input in [
            "please create a logo for my shop",
            "logo design help",
            "designlogo",
        ] {
            let decision = decide(&detector(), input, DELAY);
            assert_eq!(
                decision.destination,
                Some("generate-logo"),
                "Expected logo destination for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_fallthrough_is_generic_processing() {
        let decision = decide(&detector(), "asdfghjkl", DELAY);
        assert_eq!(
            decision.notification.as_deref(),
            Some("Processing: \"asdfghjkl\"")
        );
        assert!(decision.destination.is_none());
        assert!(!decision.handled);
    }
}
