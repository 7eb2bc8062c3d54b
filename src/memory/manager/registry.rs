/*!
 * Block Registry
 * Ordered, owning collection of memory blocks
 */

use crate::core::types::{Address, Pid, Size};
use crate::memory::types::{Block, PlacementPolicy};

/// Ordered collection of blocks owned by value
///
/// Two instances exist per simulation: the free registry and the allocated
/// registry. The allocated registry is always kept in ascending start-address
/// order; the free registry's order is re-established on every insertion
/// according to the active placement policy, so its order *is* the fit
/// policy rather than a cache of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    blocks: Vec<Block>,
}

impl Registry {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Number of blocks currently held, O(1)
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append at the tail (arrival order)
    pub fn push_back(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Insert keeping ascending start-address order
    pub fn insert_by_address(&mut self, block: Block) {
        let pos = self
            .blocks
            .iter()
            .position(|b| b.start >= block.start)
            .unwrap_or(self.blocks.len());
        self.blocks.insert(pos, block);
    }

    /// Insert a free block under the active placement policy
    ///
    /// FIFO appends at the tail; best-fit keeps the registry size-ascending
    /// and worst-fit size-descending. Equal-size blocks keep their relative
    /// insertion order in both sorted variants.
    pub fn insert_free(&mut self, block: Block, policy: PlacementPolicy) {
        match policy {
            PlacementPolicy::FirstAvailable => self.push_back(block),
            PlacementPolicy::BestFit => {
                let pos = self
                    .blocks
                    .iter()
                    .position(|b| b.size() > block.size())
                    .unwrap_or(self.blocks.len());
                self.blocks.insert(pos, block);
            }
            PlacementPolicy::WorstFit => {
                let pos = self
                    .blocks
                    .iter()
                    .position(|b| b.size() < block.size())
                    .unwrap_or(self.blocks.len());
                self.blocks.insert(pos, block);
            }
        }
    }

    /// Remove the unique block spanning exactly `[start, end]`
    ///
    /// Returns the removed block by value, or `None` if no block matches.
    /// Callers must not rely on the removal signal; a miss is a no-op.
    pub fn remove_matching(&mut self, start: Address, end: Address) -> Option<Block> {
        let pos = self
            .blocks
            .iter()
            .position(|b| b.start == start && b.end == end)?;
        Some(self.blocks.remove(pos))
    }

    /// Remove and return the block at the head, if any
    pub fn pop_front(&mut self) -> Option<Block> {
        if self.blocks.is_empty() {
            None
        } else {
            Some(self.blocks.remove(0))
        }
    }

    /// Find the block servicing a request of `size` under `policy`
    ///
    /// Only blocks with `size() >= size` qualify. Best-fit picks the smallest
    /// qualifying block and worst-fit the largest; both break ties in favor
    /// of the first qualifying block found. The comparisons are explicit even
    /// though the sorted registry orders would make a front-to-back scan
    /// sufficient, so selection stays correct if the ordering changes.
    pub fn select(&self, size: Size, policy: PlacementPolicy) -> Option<Block> {
        let mut qualifying = self.blocks.iter().filter(|b| b.size() >= size);

        match policy {
            PlacementPolicy::FirstAvailable => qualifying.next().copied(),
            PlacementPolicy::BestFit => {
                let mut best: Option<&Block> = None;
                for block in qualifying {
                    match best {
                        Some(b) if block.size() >= b.size() => {}
                        _ => best = Some(block),
                    }
                }
                best.copied()
            }
            PlacementPolicy::WorstFit => {
                let mut worst: Option<&Block> = None;
                for block in qualifying {
                    match worst {
                        Some(b) if block.size() <= b.size() => {}
                        _ => worst = Some(block),
                    }
                }
                worst.copied()
            }
        }
    }

    /// Iterate over blocks in current registry order
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Read-only traversal yielding `(start, end, owner)` triples
    ///
    /// This is the reporting boundary: formatters consume these triples in
    /// the registry's current order and perform no mutation.
    pub fn entries(&self) -> impl Iterator<Item = (Address, Address, Option<Pid>)> + '_ {
        self.blocks.iter().map(|b| (b.start, b.end, b.owner))
    }

    /// Sum of all block sizes
    pub fn total_size(&self) -> Size {
        self.blocks.iter().map(Block::size).sum()
    }

    /// Merge address-adjacent neighbors in one left-to-right sweep
    ///
    /// Assumes ascending start-address order. When `left.end + 1 ==
    /// right.start`, the left block absorbs the right one and the sweep
    /// resumes from the merged block, so chains of adjacent blocks collapse
    /// into a single span. Returns the number of blocks absorbed.
    pub(crate) fn merge_adjacent(&mut self) -> usize {
        let mut absorbed = 0;
        let mut i = 0;
        while i + 1 < self.blocks.len() {
            if self.blocks[i].precedes(&self.blocks[i + 1]) {
                self.blocks[i].end = self.blocks[i + 1].end;
                self.blocks.remove(i + 1);
                absorbed += 1;
            } else {
                i += 1;
            }
        }
        absorbed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(registry: &Registry) -> Vec<Size> {
        registry.iter().map(Block::size).collect()
    }

    #[test]
    fn fifo_insert_keeps_arrival_order() {
        let mut registry = Registry::new();
        registry.insert_free(Block::free(500, 999), PlacementPolicy::FirstAvailable);
        registry.insert_free(Block::free(0, 99), PlacementPolicy::FirstAvailable);

        let starts: Vec<_> = registry.iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![500, 0]);
    }

    #[test]
    fn best_fit_insert_keeps_size_ascending() {
        let mut registry = Registry::new();
        registry.insert_free(Block::free(0, 299), PlacementPolicy::BestFit);
        registry.insert_free(Block::free(400, 449), PlacementPolicy::BestFit);
        registry.insert_free(Block::free(500, 599), PlacementPolicy::BestFit);

        assert_eq!(sizes(&registry), vec![50, 100, 300]);
    }

    #[test]
    fn worst_fit_insert_keeps_size_descending() {
        let mut registry = Registry::new();
        registry.insert_free(Block::free(400, 449), PlacementPolicy::WorstFit);
        registry.insert_free(Block::free(0, 299), PlacementPolicy::WorstFit);
        registry.insert_free(Block::free(500, 599), PlacementPolicy::WorstFit);

        assert_eq!(sizes(&registry), vec![300, 100, 50]);
    }

    #[test]
    fn sorted_inserts_keep_equal_sizes_stable() {
        let mut registry = Registry::new();
        registry.insert_free(Block::free(0, 99), PlacementPolicy::BestFit);
        registry.insert_free(Block::free(200, 299), PlacementPolicy::BestFit);

        let starts: Vec<_> = registry.iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![0, 200]);
    }

    #[test]
    fn insert_by_address_orders_by_start() {
        let mut registry = Registry::new();
        registry.insert_by_address(Block::owned(500, 599, 2));
        registry.insert_by_address(Block::owned(0, 99, 1));
        registry.insert_by_address(Block::owned(300, 399, 3));

        let starts: Vec<_> = registry.iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![0, 300, 500]);
    }

    #[test]
    fn remove_matching_is_silent_on_miss() {
        let mut registry = Registry::new();
        registry.push_back(Block::free(0, 99));

        assert_eq!(registry.remove_matching(0, 50), None);
        assert_eq!(registry.len(), 1);

        let removed = registry.remove_matching(0, 99);
        assert_eq!(removed, Some(Block::free(0, 99)));
        assert!(registry.is_empty());
    }

    #[test]
    fn select_worst_fit_requires_qualifying_size() {
        let mut registry = Registry::new();
        registry.push_back(Block::free(0, 99));
        registry.push_back(Block::free(200, 249));

        assert_eq!(registry.select(150, PlacementPolicy::WorstFit), None);
        assert_eq!(
            registry.select(60, PlacementPolicy::WorstFit),
            Some(Block::free(0, 99))
        );
    }

    #[test]
    fn select_best_fit_picks_tightest() {
        let mut registry = Registry::new();
        registry.push_back(Block::free(0, 299));
        registry.push_back(Block::free(400, 449));
        registry.push_back(Block::free(500, 599));

        assert_eq!(
            registry.select(40, PlacementPolicy::BestFit),
            Some(Block::free(400, 449))
        );
    }

    #[test]
    fn merge_adjacent_collapses_chains() {
        let mut registry = Registry::new();
        registry.insert_by_address(Block::free(0, 99));
        registry.insert_by_address(Block::free(100, 199));
        registry.insert_by_address(Block::free(200, 499));
        registry.insert_by_address(Block::free(600, 999));

        let absorbed = registry.merge_adjacent();
        assert_eq!(absorbed, 2);

        let blocks: Vec<_> = registry.iter().copied().collect();
        assert_eq!(blocks, vec![Block::free(0, 499), Block::free(600, 999)]);
    }
}
