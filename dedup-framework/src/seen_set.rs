use std::collections::HashSet;

/// How many distinct lines a [`SeenSet`] may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capacity {
    /// Grow as needed.
    #[default]
    Unbounded,
    /// Hold at most this many lines. Recording past the limit fails.
    Bounded(usize),
}

impl Capacity {
    /// Returns the limit, if any.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(limit) => Some(*limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeenSetError {
    #[error("seen-set is full ({capacity} lines)")]
    CapacityExhausted { capacity: usize },
}

/// Records the exact bytes of lines already accepted.
///
/// Membership is byte-exact and case-sensitive: `"A\n"` and `"A"` are
/// different entries. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    seen: HashSet<Box<[u8]>>,
    capacity: Capacity,
}

impl SeenSet {
    /// Creates an unbounded set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set with the given capacity.
    ///
    /// A bounded set allocates its whole capacity up front, so size it to the
    /// number of candidate lines in the run.
    pub fn with_capacity(capacity: Capacity) -> Self {
        let seen = match capacity {
            Capacity::Unbounded => HashSet::new(),
            Capacity::Bounded(limit) => HashSet::with_capacity(limit),
        };
        Self { seen, capacity }
    }

    /// Returns true if `candidate` was recorded before.
    pub fn was_seen(&self, candidate: &[u8]) -> bool {
        self.seen.contains(candidate)
    }

    /// Records `candidate`.
    ///
    /// Returns `Ok(true)` if it was new and `Ok(false)` if it was already
    /// present. Fails only when the set is bounded, full, and `candidate` is
    /// new.
    pub fn record(&mut self, candidate: &[u8]) -> Result<bool, SeenSetError> {
        if self.was_seen(candidate) {
            return Ok(false);
        }
        if let Capacity::Bounded(capacity) = self.capacity {
            if self.seen.len() >= capacity {
                return Err(SeenSetError::CapacityExhausted { capacity });
            }
        }
        self.seen.insert(candidate.into());
        Ok(true)
    }

    /// Returns the number of distinct lines recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Returns true if a bounded set has no room left.
    pub fn is_full(&self) -> bool {
        self.capacity
            .limit()
            .is_some_and(|limit| self.seen.len() >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set = SeenSet::new();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), Capacity::Unbounded);
        assert!(!set.was_seen(b"anything"));
    }

    #[test]
    fn test_record_then_seen() {
        let mut set = SeenSet::new();
        assert_eq!(set.record(b"2024-01-01T00:00:00Z\n"), Ok(true));
        assert!(set.was_seen(b"2024-01-01T00:00:00Z\n"));
        assert_eq!(set.record(b"2024-01-01T00:00:00Z\n"), Ok(false));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_bounded_full() {
        let mut set = SeenSet::with_capacity(Capacity::Bounded(1));
        assert_eq!(set.record(b"a"), Ok(true));
        assert!(set.is_full());
        assert_eq!(
            set.record(b"b"),
            Err(SeenSetError::CapacityExhausted { capacity: 1 })
        );
        // Re-recording a known line needs no room.
        assert_eq!(set.record(b"a"), Ok(false));
        assert!(!set.was_seen(b"b"));
    }

    #[test]
    fn test_bounded_zero() {
        let mut set = SeenSet::with_capacity(Capacity::Bounded(0));
        assert!(set.is_full());
        assert!(set.record(b"a").is_err());
    }

    #[test]
    fn test_capacity_error_message() {
        let err = SeenSetError::CapacityExhausted { capacity: 3 };
        assert_eq!(err.to_string(), "seen-set is full (3 lines)");
    }
}
