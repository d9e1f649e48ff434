//! Pipeline domain
//!
//! A compiled pipeline is a [`PromptBundle`](entities::PromptBundle): shared
//! global rules plus an ordered, never-empty list of [`Agent`](entities::Agent)
//! stages. Running it produces [`ProgressEvent`](value_objects::ProgressEvent)s
//! and finally an [`OrchestrationResult`](value_objects::OrchestrationResult).

pub mod entities;
pub mod value_objects;
