//! Fixed-size transposition table keyed by Zobrist hash.
//!
//! Scores cached here are exact full-width negamax values, so no bound kinds
//! or depth-preferred replacement are needed: the table uses direct indexing
//! with key verification and always-replace eviction. Entries are only valid
//! within a single search invocation (terminal scores are depth-biased
//! relative to the search root), so the search clears the table per call;
//! clearing bumps a generation counter instead of wiping the slots, which
//! keeps it O(1).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TtEntry {
    key: u64,
    score: i32,
    generation: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
    current_generation: u64,
    stats: TtStats,
}

impl TranspositionTable {
    /// Default capacity comfortably exceeds the 3^9 = 19,683 possible
    /// occupancy patterns, keeping index collisions rare.
    pub const DEFAULT_ENTRIES: usize = 1 << 15;

    pub fn new() -> Self {
        Self::new_with_entries(Self::DEFAULT_ENTRIES)
    }

    pub fn new_with_entries(count: usize) -> Self {
        Self {
            entries: vec![None; count.max(1)],
            current_generation: 0,
            stats: TtStats::default(),
        }
    }

    /// Invalidate every entry and reset statistics.
    #[inline]
    pub fn clear(&mut self) {
        self.current_generation += 1;
        self.stats = TtStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff no entry from the current generation is live.
    pub fn is_empty(&self) -> bool {
        self.entries
            .iter()
            .flatten()
            .all(|e| e.generation != self.current_generation)
    }

    #[inline]
    pub fn stats(&self) -> TtStats {
        self.stats
    }

    #[inline]
    fn idx(&self, key: u64) -> usize {
        (key as usize) % self.entries.len()
    }

    pub fn probe(&mut self, key: u64) -> Option<i32> {
        self.stats.probes += 1;
        let generation = self.current_generation;
        let hit = self.entries[self.idx(key)].filter(|e| e.key == key && e.generation == generation);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit.map(|e| e.score)
    }

    pub fn store(&mut self, key: u64, score: i32) {
        self.stats.stores += 1;
        let idx = self.idx(key);
        self.entries[idx] = Some(TtEntry {
            key,
            score,
            generation: self.current_generation,
        });
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TranspositionTable;

    #[test]
    fn store_and_probe_round_trip() {
        let mut tt = TranspositionTable::new();
        tt.store(123, 7);
        assert_eq!(tt.probe(123), Some(7));
        assert_eq!(tt.stats().hits, 1);
        assert_eq!(tt.stats().stores, 1);
    }

    #[test]
    fn probe_miss_on_unknown_key() {
        let mut tt = TranspositionTable::new();
        assert_eq!(tt.probe(99), None);
        assert_eq!(tt.stats().probes, 1);
        assert_eq!(tt.stats().hits, 0);
    }

    #[test]
    fn key_verification_rejects_index_collisions() {
        // Two entries, so any two keys of equal parity share a slot.
        let mut tt = TranspositionTable::new_with_entries(2);
        tt.store(4, 1);
        assert_eq!(tt.probe(6), None, "colliding key must not hit");
        tt.store(6, 2);
        assert_eq!(tt.probe(6), Some(2), "latest store wins the slot");
        assert_eq!(tt.probe(4), None, "evicted entry is gone");
    }

    #[test]
    fn clear_invalidates_entries_and_resets_stats() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 1);
        assert!(!tt.is_empty());
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.probe(1), None, "stale generation must not hit");
        assert_eq!(tt.stats().probes, 1);
        assert_eq!(tt.stats().hits, 0);
    }

    #[test]
    fn store_after_clear_is_live_again() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 5);
        tt.clear();
        tt.store(1, 6);
        assert_eq!(tt.probe(1), Some(6));
    }
}
