use std::time::{Duration, Instant};

use crate::model::SourceFile;

pub const SCANNED_FILE_NAME: &str = "scanned_document.pdf";
/// 245 KB
pub const SCANNED_FILE_SIZE: u64 = 245 * 1024;

/// A pending scan. Completes once, after a fixed delay, with a single file.
///
/// There is no device behind this: the event loop polls the job on every tick
/// and the session applies the result like an ordinary upload.
#[derive(Debug, Clone)]
pub struct ScanJob {
    due: Instant,
    done: bool,
}

impl ScanJob {
    pub fn start(now: Instant, delay: Duration) -> Self {
        ScanJob {
            due: now + delay,
            done: false,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        !self.done && now >= self.due
    }

    /// Yield the scanned file if the delay has elapsed. Yields at most once.
    pub fn poll(&mut self, now: Instant) -> Option<SourceFile> {
        if !self.is_due(now) {
            return None;
        }
        self.done = true;
        Some(SourceFile::new(SCANNED_FILE_NAME, SCANNED_FILE_SIZE))
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}
