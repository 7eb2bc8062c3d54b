/*!
 * Shared test helpers
 */

use mmu_sim::MemoryManager;

/// Assert the conservation invariant: the blocks across both registries tile
/// `[0, partition_size - 1]` exactly, with no gaps and no overlaps.
pub fn assert_conserved(manager: &MemoryManager) {
    let mut intervals: Vec<(usize, usize)> = manager
        .free_blocks()
        .chain(manager.allocated_blocks())
        .map(|(start, end, _)| (start, end))
        .collect();
    intervals.sort_unstable();

    let mut next = 0;
    for (start, end) in intervals {
        assert!(end >= start, "inverted interval [{start}, {end}]");
        assert_eq!(start, next, "gap or overlap at address {start}");
        next = end + 1;
    }
    assert_eq!(next, manager.partition_size(), "partition not fully covered");
}
