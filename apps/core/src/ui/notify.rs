//! One-slot notification center.
//!
//! At most one notification is visible. Posting replaces whatever is
//! showing; a notification expires on its own after the configured TTL.

use std::time::{Duration, Instant};

/// A posted notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    posted_at: Instant,
}

/// Holds the single visible notification.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Notification>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Posts a notification, replacing any visible one.
    pub fn post(&mut self, message: impl Into<String>) {
        self.current = Some(Notification {
            message: message.into(),
            posted_at: Instant::now(),
        });
    }

    /// The visible notification's message, or `None` once it has expired.
    pub fn active(&self) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|n| n.posted_at.elapsed() < self.ttl)
            .map(|n| n.message.as_str())
    }

    /// Drops the notification if its TTL has passed.
    pub fn sweep(&mut self) {
        if self.active().is_none() {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_post_replaces_current() {
        let mut center = NotificationCenter::new(Duration::from_secs(3));

        center.post("first");
        center.post("second");
        assert_eq!(center.active(), Some("second"));
    }

    #[test]
    fn test_notification_expires() {
        let mut center = NotificationCenter::new(Duration::from_millis(30));

        center.post("short lived");
        assert_eq!(center.active(), Some("short lived"));

        thread::sleep(Duration::from_millis(40));
        assert_eq!(center.active(), None);

        center.sweep();
        assert_eq!(center.active(), None);
    }

    #[test]
    fn test_empty_center_has_nothing_active() {
        let center = NotificationCenter::new(Duration::from_secs(3));
        assert_eq!(center.active(), None);
    }
}
