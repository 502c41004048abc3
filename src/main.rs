//! Spawn three workers, await them all, report per-worker outcomes.
//!
//! Run with: cargo run

use std::time::Duration;

use colored::Colorize;
use workcrew::outcome::Outcome;
use workcrew::supervisor::{Supervisor, SupervisorError};
use workcrew::worker::WorkerSpec;

#[tokio::main]
async fn main() -> Result<(), SupervisorError> {
    println!("{}", "Starting...".bold());

    let supervisor = Supervisor::new(vec![
        WorkerSpec::new(0, Duration::from_secs(1)),
        WorkerSpec::new(1, Duration::from_secs(2)),
        WorkerSpec::new(2, Duration::from_secs(3)),
    ]);

    let summary = supervisor.run().await?;

    println!();
    for (id, outcome) in summary.outcomes().iter().enumerate() {
        let label = match outcome {
            Outcome::Success => "ok".green(),
            Outcome::Failed => "interrupted".red(),
            Outcome::Pending => "pending".yellow(),
        };
        println!("worker {} : {}", id, label);
    }

    if summary.all_succeeded() {
        let line = format!("All {} workers finished", summary.succeeded());
        println!("{}", line.green().bold());
    } else {
        let line = format!(
            "{} finished, {} interrupted",
            summary.succeeded(),
            summary.failed()
        );
        println!("{}", line.red().bold());
        for failure in summary.failures() {
            println!("  {}", failure);
        }
    }

    // Interrupted workers are reported above, not escalated to the exit code.
    Ok(())
}
