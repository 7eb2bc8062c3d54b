/*!
 * Registry Reporting
 * Read-only formatting of registry contents
 */

use crate::core::types::{Address, Pid};
use crate::memory::{Block, MemoryManager, MemoryStats, PlacementPolicy};
use serde::Serialize;
use std::fmt::Write;

/// Render one registry traversal as a block listing
///
/// Consumes `(start, end, owner)` triples in the registry's current order:
///
/// ```text
/// Free Memory:
/// Block 0:     START: 500      END: 999
/// Block 1:     START: 0        END: 499        PID: 7
/// ```
pub fn render_registry<I>(title: &str, entries: I) -> String
where
    I: Iterator<Item = (Address, Address, Option<Pid>)>,
{
    let mut out = format!("{title}:\n");
    for (index, (start, end, owner)) in entries.enumerate() {
        let _ = write!(out, "Block {index}:\t START: {start}\t END: {end}");
        if let Some(pid) = owner {
            let _ = write!(out, "\t PID: {pid}");
        }
        out.push('\n');
    }
    out
}

/// Render both registries in their current order
pub fn render_state(manager: &MemoryManager) -> String {
    let mut out = render_registry("Free Memory", manager.free_blocks());
    out.push('\n');
    out.push_str(&render_registry("Allocated Memory", manager.allocated_blocks()));
    out
}

/// Serializable snapshot of the full simulation state
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub partition_size: usize,
    pub policy: PlacementPolicy,
    pub free: Vec<Block>,
    pub allocated: Vec<Block>,
    pub stats: MemoryStats,
}

impl Snapshot {
    pub fn capture(manager: &MemoryManager) -> Self {
        let block = |(start, end, owner)| Block { start, end, owner };
        Self {
            partition_size: manager.partition_size(),
            policy: manager.policy(),
            free: manager.free_blocks().map(block).collect(),
            allocated: manager.allocated_blocks().map(block).collect(),
            stats: manager.stats(),
        }
    }
}

/// Render the state snapshot as pretty-printed JSON
pub fn render_json(manager: &MemoryManager) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Snapshot::capture(manager))
}
