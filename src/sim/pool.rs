//! Soft-capacity pool for transient entities
//!
//! Particles and shockwaves live in pools: append under a cap, update
//! in place, and drop expired entries in a single sweep. Iteration is
//! insertion order, which keeps per-frame results deterministic.

/// A pool of transient entities with an optional hard cap.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    items: Vec<T>,
    cap: Option<usize>,
}

impl<T> Pool<T> {
    /// Unbounded pool
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cap: None,
        }
    }

    /// Pool that never holds more than `cap` live entities
    pub fn with_cap(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap.min(1024)),
            cap: Some(cap),
        }
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when a push would be rejected
    pub fn is_full(&self) -> bool {
        self.cap.is_some_and(|c| self.items.len() >= c)
    }

    /// Append unless the cap is reached. Returns whether the entity was
    /// admitted; overflow is not an error, the entity is simply dropped.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Single-pass update-and-expire sweep: `step` mutates each entity
    /// and returns whether it survives. Relative order of survivors is
    /// preserved.
    pub fn sweep(&mut self, mut step: impl FnMut(&mut T) -> bool) {
        self.items.retain_mut(|item| step(item));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
