/*!
 * Core Module
 * Shared primitives for the simulator
 */

pub mod types;

pub use types::{Address, Pid, Size};
