/*!
 * Memory Types
 * Common types for partition memory management
 */

use crate::core::types::{Address, Pid, Size};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// All variants are local-recoverable: the failing request leaves both
/// registries unchanged and the simulation continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("not enough memory for PID {pid}: requested {requested} addresses, {available} free")]
    AllocationFailed {
        pid: Pid,
        requested: Size,
        available: Size,
    },

    #[error("no allocated block owned by PID {0}")]
    DeallocationNotFound(Pid),
}

/// A contiguous address interval within the partition
///
/// Both bounds are inclusive, so `end >= start` always holds and the block
/// covers `end - start + 1` addresses. `owner` is `None` for free blocks and
/// `Some(pid)` for allocated ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub start: Address,
    pub end: Address,
    pub owner: Option<Pid>,
}

impl Block {
    /// Create a free block spanning `[start, end]`
    pub fn free(start: Address, end: Address) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            end,
            owner: None,
        }
    }

    /// Create a block owned by `pid` spanning `[start, end]`
    pub fn owned(start: Address, end: Address, pid: Pid) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            end,
            owner: Some(pid),
        }
    }

    /// Number of addresses covered by this block
    pub fn size(&self) -> Size {
        self.end - self.start + 1
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    /// Whether `other` starts exactly one address past this block's end
    pub fn precedes(&self, other: &Block) -> bool {
        self.end + 1 == other.start
    }
}

/// Placement policy selecting which free block services an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// First qualifying block in arrival order (free registry kept FIFO)
    FirstAvailable,
    /// Tightest qualifying block (free registry kept size-ascending)
    BestFit,
    /// Largest qualifying block (free registry kept size-descending)
    WorstFit,
}

impl FromStr for PlacementPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "fifo" | "first" => Ok(Self::FirstAvailable),
            "b" | "best" | "bestfit" => Ok(Self::BestFit),
            "w" | "worst" | "worstfit" => Ok(Self::WorstFit),
            other => Err(format!(
                "unknown policy '{other}' (expected f|fifo, b|bestfit, or w|worstfit)"
            )),
        }
    }
}

impl std::fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlacementPolicy::FirstAvailable => write!(f, "FIFO"),
            PlacementPolicy::BestFit => write!(f, "BESTFIT"),
            PlacementPolicy::WorstFit => write!(f, "WORSTFIT"),
        }
    }
}

/// Memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub partition_size: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub free_blocks: usize,
    pub allocated_blocks: usize,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        if self.usage_percentage >= 95.0 {
            MemoryPressure::Critical
        } else if self.usage_percentage >= 80.0 {
            MemoryPressure::High
        } else if self.usage_percentage >= 60.0 {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
