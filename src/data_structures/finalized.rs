/// Set of dense node positions whose shortest distance has been settled
///
/// Backed by a flag per position plus a running count, so `len` stays O(1)
/// while the relaxation loop compares it against the node count.
#[derive(Debug, Clone, Default)]
pub struct FinalizedSet {
    flags: Vec<bool>,
    count: usize,
}

impl FinalizedSet {
    /// Creates an empty set sized for positions `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        FinalizedSet {
            flags: vec![false; capacity],
            count: 0,
        }
    }

    /// Number of finalized positions
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if every position is finalized
    pub fn is_full(&self) -> bool {
        self.count == self.flags.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Marks a position finalized; returns false if it already was
    pub fn insert(&mut self, index: usize) -> bool {
        match self.flags.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Empties the set and resizes it to `capacity` positions
    pub fn reset(&mut self, capacity: usize) {
        self.flags.clear();
        self.flags.resize(capacity, false);
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_twice_counts_once() {
        let mut set = FinalizedSet::with_capacity(3);
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        assert!(set.contains(1));
        assert!(!set.contains(0));
    }

    #[test]
    fn out_of_range_positions_are_never_members() {
        let mut set = FinalizedSet::with_capacity(2);
        assert!(!set.insert(5));
        assert!(!set.contains(5));
        assert!(set.is_empty());
    }

    #[test]
    fn reset_clears_and_resizes() {
        let mut set = FinalizedSet::with_capacity(2);
        set.insert(0);
        set.insert(1);
        assert!(set.is_full());

        set.reset(4);
        assert!(set.is_empty());
        assert!(!set.is_full());
        assert!(set.insert(3));
        assert!(!set.insert(4));
    }
}
