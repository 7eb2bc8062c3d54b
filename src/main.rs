/*!
 * MMU Simulator - Main Entry Point
 *
 * Reads a workload file, drives the allocator one request at a time, and
 * prints the registry contents after every request.
 */

use anyhow::{bail, Context};
use argh::FromArgs;
use log::info;
use std::path::PathBuf;

use mmu_sim::sim::{parse_workload, render_json, render_state, Request};
use mmu_sim::{MemoryManager, PlacementPolicy};

/// Contiguous-memory allocator simulator.
#[derive(FromArgs, Debug)]
struct Args {
    /// workload file: partition size header, then `amount size` request lines
    #[argh(positional)]
    input: PathBuf,

    /// placement policy: f|fifo, b|bestfit, or w|worstfit
    #[argh(option, short = 'p')]
    policy: PlacementPolicy,

    /// print a JSON snapshot of the final state
    #[argh(switch)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Args = argh::from_env();

    let workload = parse_workload(&args.input)
        .with_context(|| format!("failed to parse workload {}", args.input.display()))?;
    if workload.requests.is_empty() {
        bail!("no requests in workload {}", args.input.display());
    }

    info!(
        "running {} requests against a {}-address partition under {}",
        workload.requests.len(),
        workload.partition_size,
        args.policy
    );
    println!("PARTITION_SIZE = {}", workload.partition_size);

    let mut manager = MemoryManager::new(workload.partition_size, args.policy);

    for request in &workload.requests {
        println!("************************");
        let outcome = match *request {
            Request::Allocate { pid, size } => {
                println!("ALLOCATE: {size} FROM PID: {pid}");
                manager.allocate(size, pid).map(|_| ())
            }
            Request::Deallocate { pid } => {
                println!("DEALLOCATE MEM: PID {pid}");
                manager.deallocate(pid)
            }
            Request::Coalesce => {
                println!("COALESCE/COMPACT");
                manager.coalesce();
                Ok(())
            }
        };

        // Failed requests are reported and skipped; the run continues.
        if let Err(err) = outcome {
            eprintln!("Error: {err}");
        }

        println!("************************");
        println!("{}", render_state(&manager));
    }

    if args.json {
        println!("{}", render_json(&manager)?);
    }

    Ok(())
}
