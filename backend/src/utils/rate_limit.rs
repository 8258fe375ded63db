use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;

/// Messages a single sender may submit per minute.
pub const MESSAGES_PER_MINUTE: u32 = 5;

/// Per-sender limits keyed by the lowercased sender email.
///
/// Keys live in governor's keyed state store. Call [`retain_recent`] on a
/// timer so senders whose budget has fully replenished are dropped.
///
/// [`retain_recent`]: ContactRateLimiter::retain_recent
pub struct ContactRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
}

impl Default for ContactRateLimiter {
    fn default() -> Self {
        Self::new(Quota::per_minute(nonzero!(MESSAGES_PER_MINUTE)))
    }
}

impl ContactRateLimiter {
    pub fn new(quota: Quota) -> Self {
        Self {
            limiter: RateLimiter::keyed(quota),
        }
    }

    /// Returns true when the sender still has budget, consuming one cell.
    pub fn check(&self, sender: &str) -> bool {
        let key = sender.trim().to_lowercase();
        self.limiter.check_key(&key).is_ok()
    }

    /// Forgets senders that are back to a full budget.
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of senders currently tracked.
    pub fn len(&self) -> usize {
        self.limiter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limiter.is_empty()
    }
}
