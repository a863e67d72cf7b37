//! In-progress tracking with guaranteed release.

use tokio::sync::watch;

/// Counts one operation as in flight for the guard's lifetime.
///
/// The channel holds the number of running operations, so overlapping
/// calls keep it above zero until the last one finishes. The count is
/// released exactly once on drop, whatever the exit path.
#[derive(Debug)]
pub struct ProgressGuard<'a> {
    in_flight: &'a watch::Sender<usize>,
}

impl<'a> ProgressGuard<'a> {
    /// Count one more operation in flight.
    pub fn begin(in_flight: &'a watch::Sender<usize>) -> Self {
        in_flight.send_modify(|count| *count += 1);
        Self { in_flight }
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.send_modify(|count| *count = count.saturating_sub(1));
    }
}
