/*!
 * Workload Input
 * Parses a request file into the ordered request stream
 */

use crate::core::types::{Pid, Size};
use log::warn;
use std::path::Path;
use thiserror::Error;

/// Sentinel amount marking a coalesce/compact trigger in the input file
pub const COALESCE_SENTINEL: i64 = -99999;

/// Workload parsing result
pub type ParseResult<T> = Result<T, ParseError>;

/// Workload parsing errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read workload file: {0}")]
    Io(#[from] std::io::Error),

    #[error("workload file is missing the partition size header")]
    MissingPartitionSize,

    #[error("invalid partition size '{0}': expected a positive integer")]
    InvalidPartitionSize(String),
}

/// One request from the external stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Allocate { pid: Pid, size: Size },
    Deallocate { pid: Pid },
    Coalesce,
}

/// A parsed workload: the partition size plus the ordered request sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub partition_size: Size,
    pub requests: Vec<Request>,
}

/// Parse a workload file
///
/// Format: the first line holds the partition size; every following line
/// holds an `amount size` pair. A positive amount is an allocation request
/// `(pid, size)`, a negative amount a deallocation request for `-amount`,
/// and the sentinel `-99999` a coalesce trigger (its size field is ignored).
pub fn parse_workload<P: AsRef<Path>>(path: P) -> ParseResult<Workload> {
    let contents = std::fs::read_to_string(path)?;
    parse_workload_str(&contents)
}

/// Parse workload text (see [`parse_workload`] for the format)
///
/// A malformed request line truncates the stream: everything up to that line
/// is returned and the rest is dropped, matching the contract that a parse
/// failure means "zero further requests available".
pub fn parse_workload_str(contents: &str) -> ParseResult<Workload> {
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or(ParseError::MissingPartitionSize)?;
    let partition_size: Size = header
        .trim()
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| ParseError::InvalidPartitionSize(header.trim().to_string()))?;

    let mut requests = Vec::new();
    for (index, line) in lines.enumerate() {
        match parse_request_line(line) {
            Some(request) => requests.push(request),
            None => {
                warn!(
                    "malformed request line {} ('{}'): dropping remaining requests",
                    index + 1,
                    line.trim()
                );
                break;
            }
        }
    }

    Ok(Workload {
        partition_size,
        requests,
    })
}

fn parse_request_line(line: &str) -> Option<Request> {
    let mut fields = line.split_whitespace();
    let amount: i64 = fields.next()?.parse().ok()?;
    let size: i64 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    if amount == COALESCE_SENTINEL {
        Some(Request::Coalesce)
    } else if amount > 0 {
        let pid = Pid::try_from(amount).ok()?;
        let size = Size::try_from(size).ok()?;
        Some(Request::Allocate { pid, size })
    } else if amount < 0 {
        let pid = Pid::try_from(-amount).ok()?;
        Some(Request::Deallocate { pid })
    } else {
        None
    }
}
