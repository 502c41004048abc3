//! # workcrew
//!
//! A minimal instructional demo of structured concurrency: three worker
//! tasks each simulate a fixed-duration unit of work, while a supervisor
//! launches them and awaits collective completion through join handles.
//!
//! This is the idiomatic replacement for the classic pattern of spawning
//! threads that write completion flags into a shared array which the main
//! thread busy-polls every 200ms. Here each worker owns its result and
//! hands a typed report back when it settles, so nothing is polled, the
//! single-writer rule is structural, and success stays distinguishable
//! from failure.
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! ```

pub mod outcome;
pub mod supervisor;
pub mod worker;

pub use outcome::{Outcome, StatusBoard};
pub use supervisor::{Summary, Supervisor, SupervisorError};
pub use worker::{WorkerReport, WorkerSpec};
