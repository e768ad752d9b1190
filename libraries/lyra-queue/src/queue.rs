//! Queue store
//!
//! Owns the ordered sequence of queued track ids, the current track, the
//! queue title, and the cached metadata of the current track. The store is
//! the single source of truth for playback order; there is no shadow
//! ordering.

use crate::error::Result;
use crate::list_ops;
use crate::lookup::TrackLookup;
use crate::types::{Song, TrackId};

/// Ordered playback queue with current-track state
///
/// Duplicated track ids are legal; all operations that address a track by
/// id act on its first occurrence. The current track id may reference a
/// track no longer in the queue (after an external removal); position
/// lookups then resolve to "not found" instead of failing.
#[derive(Debug)]
pub struct QueueStore {
    /// Queued track ids, in playback order
    tracks: Vec<TrackId>,

    /// Currently playing track, `None` when unset
    current: Option<TrackId>,

    /// Display label for the queue's provenance
    title: String,

    /// Label substituted when the title is set to an empty string
    default_title: String,

    /// Cached metadata for the current track
    ///
    /// Invalidated lazily: a read re-fetches whenever the cached id no
    /// longer equals the current track id.
    cached_song: Option<Song>,
}

impl QueueStore {
    /// Create an empty store
    ///
    /// The title starts as the given system default label.
    pub fn new(default_title: impl Into<String>) -> Self {
        let default_title = default_title.into();
        Self {
            tracks: Vec::new(),
            current: None,
            title: default_title.clone(),
            default_title,
            cached_song: None,
        }
    }

    /// Queued track ids in playback order
    pub fn tracks(&self) -> &[TrackId] {
        &self.tracks
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Current queue title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the queue title, substituting the default label for an empty one
    pub fn set_title(&mut self, title: &str) {
        self.title = if title.is_empty() {
            self.default_title.clone()
        } else {
            title.to_string()
        };
    }

    /// Currently playing track id
    pub fn current_track_id(&self) -> Option<TrackId> {
        self.current
    }

    /// Set the currently playing track id
    ///
    /// Does not touch the queue; the cached metadata goes stale and is
    /// re-fetched on the next read.
    pub fn set_current_track_id(&mut self, id: TrackId) {
        self.current = Some(id);
    }

    /// Replace the queued track ids
    ///
    /// Does not change the current track.
    pub fn set_tracks(&mut self, ids: Vec<TrackId>) {
        self.tracks = ids;
    }

    /// Remove the first occurrence of `id` from the queue
    ///
    /// Positional semantics: duplicates lose exactly one instance and the
    /// relative order of the remaining tracks is preserved. Returns whether
    /// the queue changed; an absent id is a no-op, not an error.
    pub fn remove_first(&mut self, id: TrackId) -> bool {
        let remaining = list_ops::delete_first_occurrence(&self.tracks, &id);
        if list_ops::collections_equal(&self.tracks, &remaining) {
            return false;
        }
        self.tracks = remaining;
        true
    }

    /// Move the track at `from` so it sits at `to`
    ///
    /// A splice: the element is removed and reinserted, shifting everything
    /// between the two positions. Out-of-range indices fail loudly.
    pub fn move_track(&mut self, from: usize, to: usize) -> Result<()> {
        self.tracks = list_ops::move_element(&self.tracks, from, to)?;
        Ok(())
    }

    /// Splice `id` into the slot right after the current track
    ///
    /// When the current track is unset or no longer queued the target slot
    /// is the front of the queue. The current track itself follows the same
    /// move mechanics as any other id. Returns `Ok(false)` when `id` is not
    /// queued; fails when the target slot is past the end (current track is
    /// last).
    pub fn insert_after_current(&mut self, id: TrackId) -> Result<bool> {
        let Some(from) = self.tracks.iter().position(|&track| track == id) else {
            return Ok(false);
        };
        let to = self.position_of_current().map_or(0, |position| position + 1);
        self.tracks = list_ops::move_element(&self.tracks, from, to)?;
        Ok(true)
    }

    /// Reset to the empty state
    ///
    /// Empties the queue, restores the default title, unsets the current
    /// track, and drops the cached metadata.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.current = None;
        self.title = self.default_title.clone();
        self.cached_song = None;
    }

    /// Position of the current track in the queue
    ///
    /// First match by value; `None` when unset or no longer queued.
    pub fn position_of_current(&self) -> Option<usize> {
        crate::navigation::position_of(&self.tracks, self.current)
    }

    /// Metadata of the current track
    ///
    /// Served from the cache while the cached id matches the current track
    /// id, re-fetched through `lookup` otherwise. An unset current track or
    /// a lookup miss yields the placeholder [`Song::default`].
    pub fn current_song(&mut self, lookup: &dyn TrackLookup) -> Song {
        let Some(current) = self.current else {
            return Song::default();
        };

        match &self.cached_song {
            Some(song) if song.id == current => song.clone(),
            _ => {
                let song = lookup.resolve(current).unwrap_or_default();
                self.cached_song = Some(song.clone());
                song
            }
        }
    }

    /// Human-readable "position/total" label, 1-indexed
    ///
    /// A current track that is unset or no longer queued reads as position
    /// 0.
    pub fn position_label(&self) -> String {
        let position = self.position_of_current().map_or(0, |index| index + 1);
        format!("{}/{}", position, self.tracks.len())
    }
}
