/*!
 * Memory Management
 *
 * Contiguous-partition allocator over two block registries.
 *
 * The manager owns a free registry and an allocated registry and mutates
 * them through three operations driven by the external request stream:
 *
 * - **allocate**: select a free block under the placement policy, split it
 *   on partial use, move the carved portion into the allocated registry
 * - **deallocate**: move a process's block back into the free registry
 *   under the same policy
 * - **coalesce**: rebuild the free registry in address order and merge
 *   address-adjacent free blocks
 *
 * Conservation of address space is the central invariant: at every point the
 * blocks across both registries tile `[0, partition_size - 1]` exactly, with
 * no gaps and no overlaps.
 */

mod allocator;
mod coalesce;
mod registry;

pub use registry::Registry;

use crate::core::types::{Address, Pid, Size};
use crate::memory::types::{Block, MemoryStats, PlacementPolicy};
use log::info;

/// Memory manager
///
/// Exclusively owned by the single control flow driving the simulation; all
/// operations take `&mut self` and run to completion before the next request.
#[derive(Debug, Clone)]
pub struct MemoryManager {
    pub(super) free: Registry,
    pub(super) allocated: Registry,
    pub(super) partition_size: Size,
    pub(super) policy: PlacementPolicy,
}

impl MemoryManager {
    /// Create a manager for a partition of `partition_size` addresses
    ///
    /// The free registry starts with one block spanning the whole partition
    /// `[0, partition_size - 1]`; the allocated registry starts empty.
    pub fn new(partition_size: Size, policy: PlacementPolicy) -> Self {
        assert!(partition_size > 0, "partition size must be positive");

        let mut free = Registry::new();
        free.insert_free(Block::free(0, partition_size - 1), policy);

        info!(
            "memory manager initialized: partition [0, {}], policy {}",
            partition_size - 1,
            policy
        );

        Self {
            free,
            allocated: Registry::new(),
            partition_size,
            policy,
        }
    }

    pub fn partition_size(&self) -> Size {
        self.partition_size
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// Free registry traversal in current policy order
    pub fn free_blocks(&self) -> impl Iterator<Item = (Address, Address, Option<Pid>)> + '_ {
        self.free.entries()
    }

    /// Allocated registry traversal in ascending address order
    pub fn allocated_blocks(&self) -> impl Iterator<Item = (Address, Address, Option<Pid>)> + '_ {
        self.allocated.entries()
    }

    /// Get memory info as (total, used, available)
    pub fn info(&self) -> (Size, Size, Size) {
        let used = self.allocated.total_size();
        (self.partition_size, used, self.partition_size - used)
    }

    /// Get overall memory statistics
    pub fn stats(&self) -> MemoryStats {
        let (total, used, available) = self.info();
        MemoryStats {
            partition_size: total,
            used_memory: used,
            available_memory: available,
            usage_percentage: (used as f64 / total as f64) * 100.0,
            free_blocks: self.free.len(),
            allocated_blocks: self.allocated.len(),
        }
    }
}
