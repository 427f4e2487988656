//! Application state shared across all handlers.

use sms_model::ClassifierAdapter;
use std::time::Instant;

/// Shared application state. Cloning shares the loaded artifacts.
#[derive(Clone, Debug)]
pub struct AppState {
    pub classifier: ClassifierAdapter,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(classifier: ClassifierAdapter) -> Self {
        Self {
            classifier,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ClassifierAdapter::uninitialized())
    }
}
