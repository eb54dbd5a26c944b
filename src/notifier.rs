//! Self-dismissing confirmation banner.

use std::time::{Duration, Instant};

/// How long the banner stays up by default.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(2000);

/// Transient success banner with a single pending hide.
///
/// Each `notify` replaces the pending hide deadline instead of stacking a
/// second one, so a banner re-shown before expiry stays up continuously.
#[derive(Debug, Clone)]
pub struct TransientNotifier {
    duration: Duration,
    visible: bool,
    /// Deadline of the one scheduled hide, if any
    hide_at: Option<Instant>,
}

impl TransientNotifier {
    /// Create a hidden notifier.
    ///
    /// # Arguments
    /// * `duration` - Time the banner stays visible after `notify`
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            visible: false,
            hide_at: None,
        }
    }

    /// Show the banner and (re)start the countdown.
    ///
    /// # Arguments
    /// * `now` - Current time
    pub fn notify(&mut self, now: Instant) {
        self.visible = true;
        self.hide_at = Some(now + self.duration);
    }

    /// Hide the banner and cancel the countdown.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    /// Run the scheduled hide if it is due.
    ///
    /// # Arguments
    /// * `now` - Current time
    ///
    /// # Returns
    /// * `bool` - True if the banner was hidden by this call
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// Whether the banner is showing.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for TransientNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_DURATION)
    }
}
