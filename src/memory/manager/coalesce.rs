/*!
 * Coalescer
 * Merges address-adjacent free blocks to reduce fragmentation
 */

use super::{MemoryManager, Registry};
use log::info;

impl MemoryManager {
    /// Coalesce the free registry, returning the number of blocks absorbed
    ///
    /// Drains the free registry and rebuilds it in ascending start-address
    /// order regardless of the active policy, then sweeps once left to right
    /// merging every pair of consecutive blocks where `left.end + 1 ==
    /// right.start`. The sweep resumes from each merged block, so chains of
    /// adjacent free blocks collapse into a single span. The allocated
    /// registry is never touched.
    ///
    /// Idempotent: a second pass over an already-coalesced registry absorbs
    /// nothing.
    pub fn coalesce(&mut self) -> usize {
        let mut rebuilt = Registry::new();
        while let Some(block) = self.free.pop_front() {
            rebuilt.insert_by_address(block);
        }

        let absorbed = rebuilt.merge_adjacent();
        self.free = rebuilt;

        info!(
            "coalesce complete: {} blocks absorbed, {} free blocks remain",
            absorbed,
            self.free.len()
        );

        absorbed
    }
}
