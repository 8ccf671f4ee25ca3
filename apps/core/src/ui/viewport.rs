//! Viewport layout handling.
//!
//! Width breakpoints mirror the prototype's stylesheet; resize bursts are
//! coalesced by a debouncer that cancels the pending timer on every new
//! event, so only the last value in a burst is applied.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Widths at or below this are mobile.
pub const MOBILE_MAX_WIDTH: u32 = 768;
/// Widths at or below this are small mobile.
pub const SMALL_MOBILE_MAX_WIDTH: u32 = 480;

/// Layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    Desktop,
    Mobile,
    SmallMobile,
}

impl LayoutClass {
    pub fn from_width(width: u32) -> Self {
        if width <= SMALL_MOBILE_MAX_WIDTH {
            LayoutClass::SmallMobile
        } else if width <= MOBILE_MAX_WIDTH {
            LayoutClass::Mobile
        } else {
            LayoutClass::Desktop
        }
    }
}

/// Coalesces event bursts: each call aborts the pending timer and starts a
/// new one, so the callback fires once per quiet period.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Schedules `callback` to run after the quiet period, cancelling any
    /// previously scheduled run.
    pub fn call<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.abort();
            debug!("debounce timer reset");
        }
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            callback();
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
