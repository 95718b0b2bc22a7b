//! Request-generation counter for delayed loads.
//!
//! Every load takes a [`LoadTicket`] before it starts waiting. Starting a
//! newer load (or calling [`RequestGeneration::invalidate`]) makes all older
//! tickets stale, and a stale ticket must drop its result instead of
//! writing it into the page state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every ticket issued before
    pub fn begin(&self) -> LoadTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// Supersede all pending loads without starting a new one
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    /// Run `apply` only if no newer load has started
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current() {
            apply(value);
            true
        } else {
            log::debug!("dropping stale result of load #{}", self.generation);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(first.is_current());

        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_stale_result_is_not_applied() {
        let generation = RequestGeneration::new();
        let stale = generation.begin();
        let fresh = generation.begin();

        let mut shown = None;
        // fresh load finishes first, stale one arrives afterwards
        assert!(fresh.apply("fresh", |v| shown = Some(v)));
        assert!(!stale.apply("stale", |v| shown = Some(v)));
        assert_eq!(shown, Some("fresh"));
    }

    #[test]
    fn test_invalidate_cancels_everything() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        generation.invalidate();
        assert!(!ticket.is_current());
        assert_eq!(generation.begin().generation(), ticket.generation() + 2);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = RequestGeneration::new();
        let handle = generation.clone();
        let ticket = generation.begin();
        handle.begin();
        assert!(!ticket.is_current());
    }
}
