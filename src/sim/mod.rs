/*!
 * Simulation Module
 * Driver-side collaborators: workload input and registry reporting
 */

pub mod input;
pub mod report;

pub use input::{parse_workload, parse_workload_str, ParseError, Request, Workload};
pub use report::{render_json, render_registry, render_state, Snapshot};
