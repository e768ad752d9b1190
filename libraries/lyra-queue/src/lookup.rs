//! Track metadata lookup trait
//!
//! Abstracts the metadata repository so the queue manager works against any
//! storage backend (database, remote server, in-memory library).

use crate::types::{Song, TrackId};

/// Track metadata repository
///
/// Implementors resolve track ids to [`Song`] metadata. The queue manager
/// treats these calls as synchronous; callers needing timeouts or
/// cancellation wrap the implementation themselves. A miss is reported as
/// `None`, never as a panic.
pub trait TrackLookup: Send {
    /// Resolve a single track id to its metadata
    fn resolve(&self, id: TrackId) -> Option<Song>;

    /// Resolve many track ids, preserving the caller-specified order
    ///
    /// Ids with no metadata are skipped.
    fn resolve_many(&self, ids: &[TrackId]) -> Vec<Song> {
        ids.iter().filter_map(|&id| self.resolve(id)).collect()
    }
}
