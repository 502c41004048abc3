//! Launches the crew and awaits collective completion through join handles.
//!
//! This module is the replacement for the classic "poll a shared flag array
//! every 200ms" loop: each worker owns its result until it hands the report
//! back, and the supervisor wakes exactly when a task settles. There is no
//! polling interval to tune and no window in which a settlement could be
//! observed late.

use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::outcome::{BoardError, Outcome, StatusBoard};
use crate::worker::{self, WorkerError, WorkerId, WorkerSpec};

/// Failures of the supervisor itself. Both variants indicate bugs (a board
/// invariant violation or a panicked worker task), not expected outcomes;
/// an interrupted worker is reported through [`Summary`], never through
/// this error.
#[derive(Error, Debug)]
pub enum SupervisorError {
    #[error("status board violation: {0}")]
    Board(#[from] BoardError),

    #[error("worker task panicked: {0}")]
    Join(#[from] JoinError),
}

/// Aggregate view of a finished crew: every slot terminal, failures kept
/// with their causes so the caller can decide policy.
#[derive(Debug, Clone)]
pub struct Summary {
    board: StatusBoard,
    failures: Vec<WorkerError>,
}

impl Summary {
    pub fn outcomes(&self) -> &[Outcome] {
        self.board.outcomes()
    }

    pub fn failures(&self) -> &[WorkerError] {
        &self.failures
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes()
            .iter()
            .filter(|o| **o == Outcome::Success)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Launches every worker as an independent task and awaits them all.
///
/// A failed worker never stops its siblings and never aborts the wait; the
/// wait ends exactly when each worker has settled its slot.
pub struct Supervisor {
    specs: Vec<WorkerSpec>,
    shutdown: CancellationToken,
    interrupts: Vec<CancellationToken>,
}

impl Supervisor {
    pub fn new(specs: Vec<WorkerSpec>) -> Self {
        let shutdown = CancellationToken::new();
        let interrupts = specs.iter().map(|_| shutdown.child_token()).collect();
        Supervisor {
            specs,
            shutdown,
            interrupts,
        }
    }

    /// Token that interrupts every worker at once.
    pub fn shutdown_handle(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Token that interrupts a single worker. This supervisor never fires
    /// it on its own; it is the capability each worker exposes to an
    /// external caller.
    pub fn interrupt_handle(&self, id: WorkerId) -> Option<CancellationToken> {
        self.interrupts.get(id).cloned()
    }

    /// Spawn the crew, then drain the join set. One status line is printed
    /// per settlement, showing every slot's sentinel value.
    pub async fn run(self) -> Result<Summary, SupervisorError> {
        let mut board = StatusBoard::new(self.specs.len());
        let mut failures = Vec::new();

        let mut crew = JoinSet::new();
        for (spec, cancel) in self.specs.into_iter().zip(self.interrupts) {
            crew.spawn(worker::run(spec, cancel));
        }

        while let Some(joined) = crew.join_next().await {
            let report = joined?;
            board.settle(report.id, report.outcome())?;
            println!("status : {}", board);

            if let Err(err) = report.result {
                failures.push(err);
            }
        }

        Ok(Summary { board, failures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    fn crew(workloads_ms: &[u64]) -> Supervisor {
        Supervisor::new(
            workloads_ms
                .iter()
                .enumerate()
                .map(|(id, ms)| WorkerSpec::new(id, Duration::from_millis(*ms)))
                .collect(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn all_workers_succeed_bounded_by_the_slowest() {
        let started = Instant::now();
        let summary = crew(&[1000, 2000, 3000]).run().await.unwrap();

        assert!(summary.all_succeeded());
        assert_eq!(summary.outcomes(), &[Outcome::Success; 3]);
        assert_eq!(summary.succeeded(), 3);

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(3));
        assert!(elapsed < Duration::from_millis(3100));
    }

    #[tokio::test(start_paused = true)]
    async fn interrupted_worker_fails_without_stopping_siblings() {
        let supervisor = crew(&[1000, 2000, 3000]);
        let interrupt = supervisor.interrupt_handle(1).unwrap();
        let running = tokio::spawn(supervisor.run());

        tokio::time::sleep(Duration::from_millis(500)).await;
        interrupt.cancel();

        let summary = running.await.unwrap().unwrap();
        assert_eq!(
            summary.outcomes(),
            &[Outcome::Success, Outcome::Failed, Outcome::Success]
        );
        assert_eq!(summary.failed(), 1);
        match &summary.failures()[0] {
            WorkerError::Interrupted { id, .. } => assert_eq!(*id, 1),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simultaneous_finishers_both_settle() {
        let summary = crew(&[1000, 1000, 2000]).run().await.unwrap();
        assert!(summary.all_succeeded());
        assert_eq!(summary.outcomes(), &[Outcome::Success; 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_interrupts_every_worker() {
        let supervisor = crew(&[1000, 2000]);
        let shutdown = supervisor.shutdown_handle();
        let running = tokio::spawn(supervisor.run());

        tokio::time::sleep(Duration::from_millis(100)).await;
        shutdown.cancel();

        let summary = running.await.unwrap().unwrap();
        assert!(!summary.all_succeeded());
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.outcomes(), &[Outcome::Failed; 2]);
    }

    #[tokio::test]
    async fn empty_crew_settles_immediately() {
        let summary = Supervisor::new(Vec::new()).run().await.unwrap();
        assert!(summary.all_succeeded());
        assert!(summary.outcomes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn interrupt_handle_is_none_for_unknown_workers() {
        assert!(crew(&[100]).interrupt_handle(5).is_none());
    }
}
