/*!
 * Memory Module
 * Partition memory management and allocation
 */

pub mod manager;
pub mod types;

// Re-export for convenience
pub use manager::{MemoryManager, Registry};
pub use types::*;
