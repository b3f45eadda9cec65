use std::collections::BTreeSet;
use std::sync::{OnceLock, RwLock};

#[derive(Debug, Default)]
pub struct UsageTracker {
    classes: RwLock<BTreeSet<String>>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self {
            classes: RwLock::new(BTreeSet::new()),
        }
    }

    pub fn track(&self, class_name: &str) {
        let mut classes = self
            .classes
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        classes.insert(class_name.to_string());
    }

    pub fn snapshot(&self) -> Vec<String> {
        let classes = self
            .classes
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        classes.iter().cloned().collect()
    }

    pub fn reset(&self) {
        let mut classes = self
            .classes
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        classes.clear();
    }
}

pub fn global() -> &'static UsageTracker {
    static TRACKER: OnceLock<UsageTracker> = OnceLock::new();
    TRACKER.get_or_init(UsageTracker::new)
}

#[cfg(test)]
mod tests {
    use super::UsageTracker;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn tracks_class_names() {
        let tracker = UsageTracker::new();
        tracker.track("p-4");
        tracker.track("flex");
        assert_eq!(tracker.snapshot(), vec!["flex".to_string(), "p-4".to_string()]);
    }

    #[test]
    fn tracking_is_idempotent() {
        let tracker = UsageTracker::new();
        tracker.track("p-4");
        tracker.track("p-4");
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.iter().filter(|name| *name == "p-4").count(), 1);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn reset_clears_tracked_classes() {
        let tracker = UsageTracker::new();
        tracker.track("p-4");
        tracker.track("bg-blue-500");
        assert!(!tracker.snapshot().is_empty());

        tracker.reset();
        assert!(tracker.snapshot().is_empty());
    }

    #[test]
    fn snapshot_of_new_tracker_is_empty() {
        assert!(UsageTracker::new().snapshot().is_empty());
    }

    #[test]
    fn concurrent_tracking_loses_no_updates() {
        let tracker = Arc::new(UsageTracker::new());
        let mut handles = Vec::new();
        for thread_idx in 0..8 {
            let tracker = Arc::clone(&tracker);
            handles.push(thread::spawn(move || {
                for step in 0..50 {
                    tracker.track(&format!("p-{}", step));
                    tracker.track(&format!("m-{}", thread_idx));
                }
            }));
        }
        for handle in handles {
            handle.join().expect("tracking thread should not panic");
        }

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.len(), 58);
        for step in 0..50 {
            assert!(snapshot.contains(&format!("p-{}", step)));
        }
        for thread_idx in 0..8 {
            assert!(snapshot.contains(&format!("m-{}", thread_idx)));
        }
    }
}
