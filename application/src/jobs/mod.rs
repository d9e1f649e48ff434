//! Job-status registry
//!
//! Background runs report into a shared [`JobRegistry`] through a
//! [`JobProgressNotifier`]; foreground callers poll it by [`JobId`]. The
//! orchestration engine never sees the registry, only the notifier port.
//!
//! [`JobId`]: tailor_domain::JobId

pub mod progress;
pub mod registry;

pub use progress::JobProgressNotifier;
pub use registry::JobRegistry;
