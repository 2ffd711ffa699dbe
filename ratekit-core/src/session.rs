//! Review-session token and its single-slot cache

use std::sync::{Mutex, MutexGuard};

/// Opaque, single-use handle required to launch the native review flow
///
/// The payload is owned and defined by the host review service; this
/// crate only carries it between the "prepare" and "launch" calls. A
/// token is consumed by exactly one launch attempt, success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSessionToken {
    payload: String,
}

impl ReviewSessionToken {
    /// Wrap a service-provided payload
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// The service-defined payload
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Single-slot cache for a pre-fetched review-session token
///
/// Holds at most one token, fetched ahead of time so the user-facing
/// request path can skip the network round trip. `set` is
/// last-write-wins: overwriting an unused token silently discards it,
/// which is fine because tokens are host-service-owned, not locally
/// allocated resources. The slot is mutex-guarded for hosts that
/// deliver service completions on arbitrary threads.
#[derive(Debug, Default)]
pub struct ReviewSessionCache {
    slot: Mutex<Option<ReviewSessionToken>>,
}

impl ReviewSessionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<ReviewSessionToken>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return the cached token without consuming it
    pub fn get(&self) -> Option<ReviewSessionToken> {
        self.slot().clone()
    }

    /// Claim the cached token, leaving the slot empty
    ///
    /// The swap happens under the slot lock, so of any number of
    /// concurrent claimants exactly one receives the token. Launch
    /// paths must claim through here rather than `get`, or two
    /// requests racing on arbitrary-thread completions could launch
    /// the same single-use token twice.
    pub fn take(&self) -> Option<ReviewSessionToken> {
        self.slot().take()
    }

    /// Replace the cached token unconditionally
    pub fn set(&self, token: ReviewSessionToken) {
        *self.slot() = Some(token);
    }

    /// Empty the cache
    pub fn clear(&self) {
        *self.slot() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_starts_empty() {
        let cache = ReviewSessionCache::new();
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_get_does_not_consume() {
        let cache = ReviewSessionCache::new();
        cache.set(ReviewSessionToken::new("t1"));

        assert_eq!(cache.get(), Some(ReviewSessionToken::new("t1")));
        assert_eq!(cache.get(), Some(ReviewSessionToken::new("t1")));
    }

    #[test]
    fn test_take_consumes_the_token() {
        let cache = ReviewSessionCache::new();
        cache.set(ReviewSessionToken::new("t1"));

        assert_eq!(cache.take(), Some(ReviewSessionToken::new("t1")));
        assert!(cache.take().is_none());
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_set_is_last_write_wins() {
        let cache = ReviewSessionCache::new();
        cache.set(ReviewSessionToken::new("t1"));
        cache.set(ReviewSessionToken::new("t2"));

        assert_eq!(cache.get(), Some(ReviewSessionToken::new("t2")));
    }

    #[test]
    fn test_clear_empties_the_slot() {
        let cache = ReviewSessionCache::new();
        cache.set(ReviewSessionToken::new("t1"));
        cache.clear();

        assert!(cache.get().is_none());
    }

    #[test]
    fn test_set_after_clear_stocks_next_request() {
        let cache = ReviewSessionCache::new();
        cache.set(ReviewSessionToken::new("t1"));
        cache.clear();
        // A late prepare completion landing after a launch consumed the
        // previous token simply populates the cache for the next request.
        cache.set(ReviewSessionToken::new("t2"));

        assert_eq!(cache.get(), Some(ReviewSessionToken::new("t2")));
    }
}
