use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Per-kind id counter. Starts at 1. `observe` keeps the next id ahead of
/// every id seen during bootstrap so created records never collide with
/// seeded ones.
#[derive(Clone)]
pub struct IdAllocator(Arc<AtomicI64>);

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator(Arc::new(AtomicI64::new(1)))
    }

    pub fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    pub fn observe(&self, id: i64) {
        self.0.fetch_max(id + 1, Ordering::SeqCst);
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        IdAllocator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_and_increments() {
        let ids = IdAllocator::new();
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
        assert_eq!(ids.next(), 3);
    }

    #[test]
    fn observe_bumps_past_seen_ids() {
        let ids = IdAllocator::new();
        ids.observe(5);
        assert_eq!(ids.next(), 6);

        // older ids never move the counter back
        ids.observe(3);
        assert_eq!(ids.next(), 7);
    }

    #[test]
    fn clones_share_the_counter() {
        let ids = IdAllocator::new();
        let other = ids.clone();
        assert_eq!(ids.next(), 1);
        assert_eq!(other.next(), 2);
    }
}
