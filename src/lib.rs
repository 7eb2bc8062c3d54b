/*!
 * MMU Simulator Library
 * Contiguous-partition allocator core exposed as a library
 */

pub mod core;
pub mod memory;
pub mod sim;

// Re-exports
pub use memory::{
    Block, MemoryError, MemoryManager, MemoryResult, MemoryStats, PlacementPolicy, Registry,
};
pub use sim::{parse_workload, Request, Workload};
