//! Queue change observer trait
//!
//! Lets an external playback-session object (media session, UI bridge)
//! mirror queue state without the core depending on a concrete session
//! type.

use crate::types::TrackId;

/// Observer of queue and title changes
///
/// Callbacks are invoked synchronously after each successful mutation that
/// changes the ordered sequence or the title, once per mutating call.
/// Empty queues are never pushed through `on_queue_changed`.
pub trait QueueObserver: Send {
    /// The ordered sequence of queued track ids changed
    fn on_queue_changed(&mut self, ids: &[TrackId]);

    /// The queue title changed
    fn on_title_changed(&mut self, title: &str);
}
