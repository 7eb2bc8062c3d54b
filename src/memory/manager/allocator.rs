/*!
 * Allocator
 * Allocation and deallocation over the block registries
 */

use super::MemoryManager;
use crate::core::types::{Address, Pid, Size};
use crate::memory::types::{Block, MemoryError, MemoryPressure, MemoryResult};
use log::{error, info, warn};

impl MemoryManager {
    /// Allocate `size` contiguous addresses for `pid`
    ///
    /// Scans the free registry under the active placement policy. On success
    /// the selected block is removed from the free registry, the carved
    /// portion `[start, start + size - 1]` moves into the allocated registry
    /// in address order, and any remainder is re-inserted into the free
    /// registry under the policy. Returns the carved block's start address.
    ///
    /// On failure the request is skipped and both registries are left
    /// unchanged.
    pub fn allocate(&mut self, size: Size, pid: Pid) -> MemoryResult<Address> {
        let selected = if size == 0 {
            None
        } else {
            self.free.select(size, self.policy)
        };

        let Some(selected) = selected else {
            let available = self.free.total_size();
            error!(
                "not enough memory for PID {}: requested {}, {} free",
                pid, size, available
            );
            return Err(MemoryError::AllocationFailed {
                pid,
                requested: size,
                available,
            });
        };

        // The selected block leaves the free registry by exact interval
        // match before the pieces carved from it are re-inserted.
        self.free.remove_matching(selected.start, selected.end);

        let carved = Block::owned(selected.start, selected.start + size - 1, pid);
        self.allocated.insert_by_address(carved);

        if carved.end < selected.end {
            let fragment = Block::free(carved.end + 1, selected.end);
            self.free.insert_free(fragment, self.policy);
            info!(
                "split free block [{}, {}]: carved [{}, {}] for PID {}, fragment [{}, {}]",
                selected.start, selected.end, carved.start, carved.end, pid, fragment.start,
                fragment.end
            );
        } else {
            info!(
                "allocated [{}, {}] for PID {} (exact fit)",
                carved.start, carved.end, pid
            );
        }

        let stats = self.stats();
        let pressure = stats.memory_pressure();
        if matches!(pressure, MemoryPressure::High | MemoryPressure::Critical) {
            warn!(
                "memory pressure {}: {:.1}% of partition in use",
                pressure, stats.usage_percentage
            );
        }

        Ok(carved.start)
    }

    /// Deallocate the block owned by `pid`
    ///
    /// Scans the allocated registry in address order for the first block
    /// owned by `pid`, clears its owner, and inserts it back into the free
    /// registry under the active policy. A process holding several blocks
    /// only gets the first one by address freed per call.
    pub fn deallocate(&mut self, pid: Pid) -> MemoryResult<()> {
        let owned = self
            .allocated
            .iter()
            .find(|b| b.owner == Some(pid))
            .copied();

        let Some(block) = owned else {
            warn!("no allocated block owned by PID {} to deallocate", pid);
            return Err(MemoryError::DeallocationNotFound(pid));
        };

        self.allocated.remove_matching(block.start, block.end);
        self.free
            .insert_free(Block::free(block.start, block.end), self.policy);

        info!(
            "deallocated [{}, {}] from PID {} ({} addresses back on the free registry)",
            block.start,
            block.end,
            pid,
            block.size()
        );

        Ok(())
    }
}
