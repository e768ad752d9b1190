//! Core types for queue management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unique track identifier from storage
pub type TrackId = i64;

/// Track metadata for display and session mirroring
///
/// Resolved on demand through [`crate::TrackLookup`]; the default value is
/// the placeholder returned when the current track is unset or unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique track identifier from storage
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name (optional)
    pub album: Option<String>,

    /// Track duration
    pub duration: Duration,

    /// Track number in album (optional)
    pub track_number: Option<u32>,
}

/// Shuffle mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleMode {
    /// Sequential playback order
    #[default]
    Off,

    /// Non-repeating random order across the whole queue
    All,
}

/// Configuration for the queue manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Maximum number of remembered shuffle positions (default: 50)
    pub shuffle_memory: usize,

    /// Elapsed-time cutoff after which "previous" restarts the current
    /// track instead of navigating backward (default: 5000 ms)
    pub restart_threshold: Duration,

    /// Label substituted when the queue title is set to an empty string
    /// (default: "All Songs")
    pub default_title: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            shuffle_memory: 50,
            restart_threshold: Duration::from_millis(5000),
            default_title: "All Songs".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QueueConfig::default();
        assert_eq!(config.shuffle_memory, 50);
        assert_eq!(config.restart_threshold, Duration::from_millis(5000));
        assert_eq!(config.default_title, "All Songs");
    }

    #[test]
    fn placeholder_song_is_empty() {
        let song = Song::default();
        assert_eq!(song.id, 0);
        assert!(song.title.is_empty());
        assert!(song.album.is_none());
        assert_eq!(song.duration, Duration::ZERO);
    }
}
