//! A worker task: one simulated unit of work reporting a typed outcome.

use std::time::Duration;

use thiserror::Error;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::outcome::Outcome;

pub type WorkerId = usize;

/// The single failure mode a worker knows: its work was interrupted before
/// it could finish.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkerError {
    #[error("worker {id} interrupted after {elapsed:?}")]
    Interrupted { id: WorkerId, elapsed: Duration },
}

/// Fixed description of one worker: its identity and simulated workload.
/// Ids are assigned at startup and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSpec {
    pub id: WorkerId,
    pub work: Duration,
}

impl WorkerSpec {
    pub fn new(id: WorkerId, work: Duration) -> Self {
        WorkerSpec { id, work }
    }
}

/// What one worker hands back to the supervisor when it settles. The error
/// travels here as data, so the caller decides failure policy instead of
/// losing the cause to a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub id: WorkerId,
    pub result: Result<Duration, WorkerError>,
}

impl WorkerReport {
    pub fn outcome(&self) -> Outcome {
        match self.result {
            Ok(_) => Outcome::Success,
            Err(_) => Outcome::Failed,
        }
    }
}

/// Run one simulated unit of work to completion or interruption.
///
/// The sleep stands in for any long-running job. Cancellation is
/// cooperative and only observed while the work is in flight; there are no
/// retries.
pub async fn run(spec: WorkerSpec, cancel: CancellationToken) -> WorkerReport {
    println!("worker {} - started", spec.id);
    let started = Instant::now();

    let result = tokio::select! {
        _ = time::sleep(spec.work) => {
            println!("worker {} - finished", spec.id);
            Ok(started.elapsed())
        }
        _ = cancel.cancelled() => {
            let err = WorkerError::Interrupted {
                id: spec.id,
                elapsed: started.elapsed(),
            };
            println!("{}", err);
            Err(err)
        }
    };

    WorkerReport {
        id: spec.id,
        result,
    }
}
