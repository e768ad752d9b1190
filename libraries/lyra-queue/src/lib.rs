//! Lyra Player - Playback Queue Management
//!
//! Platform-agnostic playback queue management for Lyra Player.
//!
//! This crate provides:
//! - The ordered playback queue (duplicates legal, positional semantics)
//! - Next/previous navigation, including non-repeating shuffle with a
//!   bounded position history
//! - Mutation primitives (remove, reorder, play-next) that keep an
//!   external session observer in sync
//! - Lazily invalidated current-track metadata caching
//!
//! # Architecture
//!
//! `lyra-queue` is completely platform-agnostic:
//! - No dependency on the UI layer
//! - No dependency on the audio stack
//! - No dependency on library storage
//!
//! External collaborators are provided via traits: [`TrackLookup`] resolves
//! track ids to metadata, [`QueueObserver`] mirrors queue state into a
//! session object. The manager never decodes or renders audio; it only
//! decides *which* track is current and *what comes next*.
//!
//! All mutations go through `&mut self`, so the borrow checker enforces a
//! single writer. To share a manager across threads, wrap it in a `Mutex`
//! or confine it to one task.
//!
//! # Example: Basic Navigation
//!
//! ```rust
//! use lyra_queue::{QueueConfig, QueueManager, Song, TrackId, TrackLookup};
//!
//! struct Library;
//!
//! impl TrackLookup for Library {
//!     fn resolve(&self, id: TrackId) -> Option<Song> {
//!         Some(Song {
//!             id,
//!             title: format!("Track {}", id),
//!             ..Song::default()
//!         })
//!     }
//! }
//!
//! let mut manager = QueueManager::new(QueueConfig::default(), Box::new(Library));
//!
//! manager.set_queue(vec![11, 12, 13], "Evening Mix");
//! manager.set_current_track(11);
//!
//! assert_eq!(manager.next_track_id(), Some(12));
//! assert_eq!(manager.position_label(), "1/3");
//! assert_eq!(manager.current_song().title, "Track 11");
//! ```
//!
//! # Example: Shuffle Mode
//!
//! ```rust
//! use lyra_queue::{QueueConfig, QueueManager, ShuffleMode, Song, TrackId, TrackLookup};
//!
//! struct Library;
//! impl TrackLookup for Library {
//!     fn resolve(&self, _id: TrackId) -> Option<Song> {
//!         None
//!     }
//! }
//!
//! let mut manager = QueueManager::new(QueueConfig::default(), Box::new(Library));
//! manager.set_queue((0..20).collect(), "");
//! manager.set_current_track(0);
//!
//! // Non-repeating random draws; recently visited positions are avoided
//! manager.set_shuffle_mode(ShuffleMode::All);
//! let next = manager.next_track_id();
//! assert!(next.is_some());
//! ```
//!
//! # Example: Session Integration
//!
//! ```rust
//! use lyra_queue::{QueueConfig, QueueManager, QueueObserver, Song, TrackId, TrackLookup};
//!
//! struct Library;
//! impl TrackLookup for Library {
//!     fn resolve(&self, _id: TrackId) -> Option<Song> {
//!         None
//!     }
//! }
//!
//! // Mirror queue changes into a platform media session
//! struct SessionBridge;
//!
//! impl QueueObserver for SessionBridge {
//!     fn on_queue_changed(&mut self, ids: &[TrackId]) {
//!         // push the new order to the session
//!         let _ = ids;
//!     }
//!
//!     fn on_title_changed(&mut self, title: &str) {
//!         let _ = title;
//!     }
//! }
//!
//! let mut manager = QueueManager::new(QueueConfig::default(), Box::new(Library));
//! manager.set_observer(Box::new(SessionBridge));
//! manager.set_queue(vec![1, 2, 3], "All Songs");
//! ```

mod error;
mod history;
mod list_ops;
mod lookup;
mod manager;
mod navigation;
mod observer;
mod queue;
pub mod types;

// Public exports
pub use error::{QueueError, Result};
pub use history::ShuffleHistory;
pub use list_ops::{collections_equal, delete_first_occurrence, move_element};
pub use lookup::TrackLookup;
pub use manager::QueueManager;
pub use navigation::{next_track_id, next_track_index, position_of, previous_track_id};
pub use observer::QueueObserver;
pub use queue::QueueStore;
pub use types::{QueueConfig, ShuffleMode, Song, TrackId};
