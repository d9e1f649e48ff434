//! In-memory job-status store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tailor_domain::{JobId, JobStatus};

/// Key-value store of job statuses.
///
/// All reads and writes go through one mutex, so progress callbacks from
/// concurrent runs and polling readers are serialized.
#[derive(Default)]
pub struct JobRegistry {
    jobs: Mutex<HashMap<JobId, JobStatus>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<JobId, JobStatus>> {
        // A panic in another holder leaves the map itself intact
        self.jobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a new queued job and return its id.
    pub fn create(&self) -> JobId {
        let id = JobId::new();
        self.lock().insert(id, JobStatus::queued(id));
        id
    }

    /// Apply `f` to a job under the lock.
    ///
    /// Returns `false` (and does nothing) when the job is unknown or has been
    /// discarded.
    pub fn update<F>(&self, id: &JobId, f: F) -> bool
    where
        F: FnOnce(&mut JobStatus),
    {
        match self.lock().get_mut(id) {
            Some(status) => {
                f(status);
                true
            }
            None => false,
        }
    }

    /// Snapshot of a job's current status.
    pub fn get(&self, id: &JobId) -> Option<JobStatus> {
        self.lock().get(id).cloned()
    }

    /// Drop a job. Later updates for it become no-ops.
    pub fn discard(&self, id: &JobId) -> Option<JobStatus> {
        self.lock().remove(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tailor_domain::JobState;

    #[test]
    fn test_create_and_get() {
        let registry = JobRegistry::new();
        let id = registry.create();

        let status = registry.get(&id).unwrap();
        assert_eq!(status.id, id);
        assert_eq!(status.state, JobState::Running);
        assert_eq!(status.stage, "Queued");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_unknown_job_is_noop() {
        let registry = JobRegistry::new();
        let stranger = JobId::new();
        assert!(!registry.update(&stranger, |s| s.progress = 50));
        assert!(registry.get(&stranger).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_after_discard_is_noop() {
        let registry = JobRegistry::new();
        let id = registry.create();
        assert!(registry.discard(&id).is_some());
        assert!(!registry.update(&id, |s| s.fail("late")));
        assert!(registry.get(&id).is_none());
    }

    #[test]
    fn test_get_returns_snapshot() {
        let registry = JobRegistry::new();
        let id = registry.create();
        let before = registry.get(&id).unwrap();
        registry.update(&id, |s| s.record_progress("stage", 40, None));

        assert_eq!(before.progress, 0);
        assert_eq!(registry.get(&id).unwrap().progress, 40);
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let registry = Arc::new(JobRegistry::new());
        let id = registry.create();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        registry.update(&id, |s| s.progress = s.progress.wrapping_add(1) % 101);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // 800 increments modulo 101
        assert_eq!(registry.get(&id).unwrap().progress, (800 % 101) as u8);
    }
}
