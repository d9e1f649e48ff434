//! Job domain
//!
//! Status of a pipeline run tracked outside the engine, keyed by [`JobId`].

pub mod entities;

pub use entities::{JobId, JobState, JobStatus};
