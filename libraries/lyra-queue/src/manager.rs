//! Queue manager - core orchestration
//!
//! Coordinates the queue store, shuffle history, navigation, and the
//! external collaborators (metadata lookup, session observer). All
//! mutations funnel through `&mut self`, so ownership rules enforce the
//! at-most-one-writer discipline the shuffle history depends on; share the
//! manager across threads behind a `Mutex` or confine it to one task.

use crate::error::Result;
use crate::history::ShuffleHistory;
use crate::lookup::TrackLookup;
use crate::navigation;
use crate::observer::QueueObserver;
use crate::queue::QueueStore;
use crate::types::{QueueConfig, ShuffleMode, Song, TrackId};
use std::time::Duration;

/// Playback queue manager
///
/// Owns the queue state and resolves next/previous navigation, including
/// the non-repeating shuffle mode. Every mutation that shifts queue
/// positions also clears the shuffle history: the history stores indices,
/// and a stale index would corrupt the non-repeat guarantee.
pub struct QueueManager {
    config: QueueConfig,
    store: QueueStore,
    history: ShuffleHistory,
    shuffle: ShuffleMode,
    lookup: Box<dyn TrackLookup>,
    observer: Option<Box<dyn QueueObserver>>,
}

impl QueueManager {
    /// Create a manager with the given configuration and metadata lookup
    pub fn new(config: QueueConfig, lookup: Box<dyn TrackLookup>) -> Self {
        let history = ShuffleHistory::new(config.shuffle_memory);
        let store = QueueStore::new(config.default_title.clone());
        Self {
            config,
            store,
            history,
            shuffle: ShuffleMode::Off,
            lookup,
            observer: None,
        }
    }

    /// Bind the session observer that mirrors queue state
    pub fn set_observer(&mut self, observer: Box<dyn QueueObserver>) {
        self.observer = Some(observer);
    }

    // ===== Mutations =====

    /// Replace the queue and its title atomically
    ///
    /// The title falls back to the configured default label when empty.
    /// The current track is left untouched. The observer sees the new
    /// sequence only when it is non-empty, and always sees the effective
    /// title.
    pub fn set_queue(&mut self, ids: Vec<TrackId>, title: &str) {
        tracing::debug!("queue replaced: {} tracks, title {:?}", ids.len(), title);
        self.store.set_tracks(ids);
        self.store.set_title(title);
        self.history.clear();
        self.notify_queue_changed();
        self.notify_title_changed();
    }

    /// Remove the first occurrence of `id` from the queue
    ///
    /// An absent id is a no-op: nothing changes and the observer is not
    /// re-notified.
    pub fn remove(&mut self, id: TrackId) {
        if !self.store.remove_first(id) {
            tracing::trace!("remove: track {} not queued, nothing to do", id);
            return;
        }
        self.history.clear();
        self.notify_queue_changed();
    }

    /// Move the track at `from` so it sits at `to`
    ///
    /// A splice move; out-of-range indices are surfaced as
    /// [`crate::QueueError::IndexOutOfBounds`], never clamped.
    pub fn move_track(&mut self, from: usize, to: usize) -> Result<()> {
        self.store.move_track(from, to)?;
        self.history.clear();
        self.notify_queue_changed();
        Ok(())
    }

    /// Queue `id` to play right after the current track
    ///
    /// An absent id is a no-op. Propagates the reorder failure when the
    /// current track sits at the end of the queue.
    pub fn play_next(&mut self, id: TrackId) -> Result<()> {
        if !self.store.insert_after_current(id)? {
            tracing::trace!("play_next: track {} not queued, nothing to do", id);
            return Ok(());
        }
        self.history.clear();
        self.notify_queue_changed();
        Ok(())
    }

    /// Reset the queue to the empty state
    ///
    /// Empties the queue, restores the default title, unsets the current
    /// track, and forgets the shuffle history. The observer sees the title
    /// change; an empty sequence is never pushed through the queue
    /// callback.
    pub fn clear(&mut self) {
        tracing::debug!("queue cleared");
        self.store.clear();
        self.history.clear();
        self.notify_title_changed();
    }

    /// Set the currently playing track id
    pub fn set_current_track(&mut self, id: TrackId) {
        self.store.set_current_track_id(id);
    }

    // ===== Navigation =====

    /// Index of the track to play next, `None` when the queue is exhausted
    ///
    /// In shuffle mode each call performs a fresh non-repeating draw and
    /// records it in the history.
    pub fn next_track_index(&mut self) -> Option<usize> {
        navigation::next_track_index(
            self.store.tracks(),
            self.store.current_track_id(),
            self.shuffle,
            &mut self.history,
            &mut rand::thread_rng(),
        )
    }

    /// Id of the track to play next, `None` when the queue is exhausted
    pub fn next_track_id(&mut self) -> Option<TrackId> {
        navigation::next_track_id(
            self.store.tracks(),
            self.store.current_track_id(),
            self.shuffle,
            &mut self.history,
            &mut rand::thread_rng(),
        )
    }

    /// Id of the track to play on "previous"
    ///
    /// `elapsed` is the playback position inside the current track; past
    /// the configured restart threshold the current track itself is
    /// returned ("restart"), otherwise navigation steps backward.
    pub fn previous_track_id(&mut self, elapsed: Duration) -> Option<TrackId> {
        navigation::previous_track_id(
            self.store.tracks(),
            self.store.current_track_id(),
            self.shuffle,
            elapsed,
            self.config.restart_threshold,
            &mut self.history,
        )
    }

    /// Current shuffle mode
    pub fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle
    }

    /// Switch shuffle mode
    ///
    /// Leaving shuffle forgets the recorded positions; they are
    /// meaningless for sequential playback.
    pub fn set_shuffle_mode(&mut self, mode: ShuffleMode) {
        if mode == ShuffleMode::Off && self.shuffle == ShuffleMode::All {
            self.history.clear();
        }
        self.shuffle = mode;
    }

    // ===== Queries =====

    /// Metadata of the current track
    ///
    /// Cached between reads; re-fetched through the lookup when the
    /// current track id changed since the last read. An unset current
    /// track or a lookup miss yields the placeholder song.
    pub fn current_song(&mut self) -> Song {
        self.store.current_song(self.lookup.as_ref())
    }

    /// Currently playing track id
    pub fn current_track_id(&self) -> Option<TrackId> {
        self.store.current_track_id()
    }

    /// Human-readable "position/total" label, 1-indexed
    pub fn position_label(&self) -> String {
        self.store.position_label()
    }

    /// Queued track ids in playback order
    pub fn tracks(&self) -> &[TrackId] {
        self.store.tracks()
    }

    /// Current queue title
    pub fn title(&self) -> &str {
        self.store.title()
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ===== Observer plumbing =====

    fn notify_queue_changed(&mut self) {
        if self.store.is_empty() {
            return;
        }
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_queue_changed(self.store.tracks());
        }
    }

    fn notify_title_changed(&mut self) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_title_changed(self.store.title());
        }
    }
}

impl std::fmt::Debug for QueueManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueManager")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("history", &self.history)
            .field("shuffle", &self.shuffle)
            .finish_non_exhaustive()
    }
}
