//! Next/previous track resolution
//!
//! Pure functions of (queue, current track, shuffle mode, elapsed
//! position, shuffle history). The non-repeating random draw is the only
//! call that mutates state, and the only state it touches is the history.

use crate::history::ShuffleHistory;
use crate::types::{ShuffleMode, TrackId};
use rand::Rng;
use std::time::Duration;

/// Position of the current track in the queue
///
/// First match by value; duplicates resolve to the earliest position.
/// `None` when the current track is unset or no longer queued.
pub fn position_of(queue: &[TrackId], current: Option<TrackId>) -> Option<usize> {
    let current = current?;
    queue.iter().position(|&id| id == current)
}

/// Resolve the index of the track to play next
///
/// In shuffle mode this performs a fresh non-repeating random draw and
/// records it in `history`. Sequentially it is the successor of the
/// current position; a current track that is unset or no longer queued
/// restarts from the front. `None` means the queue is exhausted or empty.
pub fn next_track_index(
    queue: &[TrackId],
    current: Option<TrackId>,
    mode: ShuffleMode,
    history: &mut ShuffleHistory,
    rng: &mut impl Rng,
) -> Option<usize> {
    match mode {
        ShuffleMode::All => next_shuffle_index(queue.len(), position_of(queue, current), history, rng),
        ShuffleMode::Off => {
            let next = position_of(queue, current).map_or(0, |position| position + 1);
            (next < queue.len()).then_some(next)
        }
    }
}

/// Resolve the id of the track to play next
///
/// Same draw semantics as [`next_track_index`].
pub fn next_track_id(
    queue: &[TrackId],
    current: Option<TrackId>,
    mode: ShuffleMode,
    history: &mut ShuffleHistory,
    rng: &mut impl Rng,
) -> Option<TrackId> {
    next_track_index(queue, current, mode, history, rng).map(|index| queue[index])
}

/// Resolve the id of the track to play on "previous"
///
/// Past `restart_threshold` of elapsed playback the answer is the current
/// track itself (restart). Before the threshold, shuffle mode rewinds the
/// history and sequential mode steps to the preceding position; `None`
/// when the current track is at the front or no longer queued.
pub fn previous_track_id(
    queue: &[TrackId],
    current: Option<TrackId>,
    mode: ShuffleMode,
    elapsed: Duration,
    restart_threshold: Duration,
    history: &mut ShuffleHistory,
) -> Option<TrackId> {
    if elapsed >= restart_threshold {
        return current;
    }

    match mode {
        ShuffleMode::All => previous_shuffle_id(queue, current, history),
        ShuffleMode::Off => {
            let position = position_of(queue, current)?;
            if position == 0 {
                None
            } else {
                queue.get(position - 1).copied()
            }
        }
    }
}

/// Non-repeating random index draw
///
/// Candidates come uniformly from the full queue range and are rejected
/// while they sit in the history. The redraw loop is bounded: the history
/// can cover every index once its capacity reaches the queue length, so
/// after a fixed number of attempts the draw falls back to any index other
/// than the current one. On acceptance, an empty history first records the
/// pre-shuffle current position so "previous" can rewind to it.
fn next_shuffle_index(
    queue_len: usize,
    current_index: Option<usize>,
    history: &mut ShuffleHistory,
    rng: &mut impl Rng,
) -> Option<usize> {
    if queue_len == 0 {
        return None;
    }
    if queue_len == 1 {
        return Some(0);
    }

    let max_attempts = queue_len.saturating_mul(4);
    let mut drawn = None;
    for _ in 0..max_attempts {
        let candidate = rng.gen_range(0..queue_len);
        if !history.contains(candidate) {
            drawn = Some(candidate);
            break;
        }
    }

    let chosen = drawn.or_else(|| (0..queue_len).find(|&index| current_index != Some(index)))?;

    if history.is_empty() {
        if let Some(current) = current_index {
            history.push(current);
        }
    }
    history.push(chosen);

    Some(chosen)
}

/// Rewind one step through the shuffle history
///
/// Pops the most recent position and lands on the one before it. With one
/// or zero entries there is nothing to rewind to and the current track is
/// returned unchanged.
fn previous_shuffle_id(
    queue: &[TrackId],
    current: Option<TrackId>,
    history: &mut ShuffleHistory,
) -> Option<TrackId> {
    if history.len() > 1 {
        history.pop();
        history.last().and_then(|index| queue.get(index).copied())
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xBADC0FFEE)
    }

    // ===== Sequential navigation =====

    #[test]
    fn sequential_next_steps_forward() {
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        let next = next_track_index(&queue, Some(10), ShuffleMode::Off, &mut history, &mut rng());
        assert_eq!(next, Some(1));
    }

    #[test]
    fn sequential_next_at_end_is_none() {
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        let next = next_track_index(&queue, Some(30), ShuffleMode::Off, &mut history, &mut rng());
        assert_eq!(next, None);
    }

    #[test]
    fn sequential_next_single_track_is_none() {
        let queue = vec![10];
        let mut history = ShuffleHistory::new(10);

        let next = next_track_index(&queue, Some(10), ShuffleMode::Off, &mut history, &mut rng());
        assert_eq!(next, None);
    }

    #[test]
    fn next_from_unset_current_starts_at_front() {
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        let next = next_track_index(&queue, None, ShuffleMode::Off, &mut history, &mut rng());
        assert_eq!(next, Some(0));
    }

    #[test]
    fn next_from_departed_current_starts_at_front() {
        // The current track was removed externally; playback resumes from
        // the front of the queue.
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        let next = next_track_id(&queue, Some(99), ShuffleMode::Off, &mut history, &mut rng());
        assert_eq!(next, Some(10));
    }

    #[test]
    fn next_on_empty_queue_is_none() {
        let mut history = ShuffleHistory::new(10);

        let next = next_track_index(&[], Some(10), ShuffleMode::Off, &mut history, &mut rng());
        assert_eq!(next, None);

        let next = next_track_index(&[], None, ShuffleMode::All, &mut history, &mut rng());
        assert_eq!(next, None);
    }

    #[test]
    fn duplicates_resolve_to_first_position() {
        let queue = vec![7, 5, 7, 9];
        assert_eq!(position_of(&queue, Some(7)), Some(0));

        let mut history = ShuffleHistory::new(10);
        let next = next_track_id(&queue, Some(7), ShuffleMode::Off, &mut history, &mut rng());
        assert_eq!(next, Some(5));
    }

    // ===== Previous / restart threshold =====

    #[test]
    fn previous_steps_backward() {
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        let previous = previous_track_id(
            &queue,
            Some(30),
            ShuffleMode::Off,
            Duration::from_millis(1000),
            Duration::from_millis(5000),
            &mut history,
        );
        assert_eq!(previous, Some(20));
    }

    #[test]
    fn previous_at_front_is_none() {
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        let previous = previous_track_id(
            &queue,
            Some(10),
            ShuffleMode::Off,
            Duration::from_millis(1000),
            Duration::from_millis(5000),
            &mut history,
        );
        assert_eq!(previous, None);
    }

    #[test]
    fn previous_at_threshold_restarts_current() {
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        // Exactly at the threshold counts as a restart
        let previous = previous_track_id(
            &queue,
            Some(30),
            ShuffleMode::Off,
            Duration::from_millis(5000),
            Duration::from_millis(5000),
            &mut history,
        );
        assert_eq!(previous, Some(30));
    }

    #[test]
    fn previous_just_under_threshold_navigates() {
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        let previous = previous_track_id(
            &queue,
            Some(30),
            ShuffleMode::Off,
            Duration::from_millis(4999),
            Duration::from_millis(5000),
            &mut history,
        );
        assert_eq!(previous, Some(20));
    }

    #[test]
    fn previous_of_departed_current_is_none() {
        let queue = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);

        let previous = previous_track_id(
            &queue,
            Some(99),
            ShuffleMode::Off,
            Duration::from_millis(0),
            Duration::from_millis(5000),
            &mut history,
        );
        assert_eq!(previous, None);
    }

    // ===== Shuffle draws =====

    #[test]
    fn shuffle_single_track_always_zero() {
        let queue = vec![10];
        let mut history = ShuffleHistory::new(10);

        for _ in 0..5 {
            let next =
                next_track_index(&queue, Some(10), ShuffleMode::All, &mut history, &mut rng());
            assert_eq!(next, Some(0));
        }
    }

    #[test]
    fn shuffle_draw_stays_in_bounds() {
        let queue: Vec<TrackId> = (0..8).collect();
        let mut history = ShuffleHistory::new(3);
        let mut rng = rng();

        for _ in 0..100 {
            let index =
                next_track_index(&queue, Some(0), ShuffleMode::All, &mut history, &mut rng)
                    .unwrap();
            assert!(index < queue.len());
        }
    }

    #[test]
    fn shuffle_can_reach_last_index() {
        // The draw covers the full queue range, including the final slot.
        let queue: Vec<TrackId> = (0..4).collect();
        let mut history = ShuffleHistory::new(1);
        let mut rng = rng();
        let mut seen = HashSet::new();

        for _ in 0..200 {
            seen.extend(next_track_index(
                &queue,
                Some(0),
                ShuffleMode::All,
                &mut history,
                &mut rng,
            ));
        }
        assert!(seen.contains(&(queue.len() - 1)));
    }

    #[test]
    fn shuffle_avoids_recent_positions() {
        let queue: Vec<TrackId> = (0..20).collect();
        let memory = 5;
        let mut history = ShuffleHistory::new(memory);
        let mut rng = rng();

        let draws: Vec<usize> = (0..60)
            .map(|_| {
                next_track_index(&queue, Some(0), ShuffleMode::All, &mut history, &mut rng)
                    .unwrap()
            })
            .collect();

        // No position may repeat within any window of `memory` draws
        for window in draws.windows(memory) {
            let distinct: HashSet<&usize> = window.iter().collect();
            assert_eq!(distinct.len(), window.len(), "repeat within {:?}", window);
        }
    }

    #[test]
    fn shuffle_seeds_history_with_current_position() {
        let queue: Vec<TrackId> = (0..10).collect();
        let mut history = ShuffleHistory::new(5);

        next_track_index(&queue, Some(3), ShuffleMode::All, &mut history, &mut rng()).unwrap();

        // First draw records the pre-shuffle position plus the draw itself
        assert_eq!(history.len(), 2);
        assert!(history.contains(3));
    }

    #[test]
    fn shuffle_saturated_history_falls_back() {
        // History capacity covers the whole queue, so every candidate can
        // be rejected; the draw must still terminate with some index other
        // than the current one.
        let queue: Vec<TrackId> = (0..4).collect();
        let mut history = ShuffleHistory::new(10);
        for index in 0..queue.len() {
            history.push(index);
        }

        let next = next_track_index(&queue, Some(1), ShuffleMode::All, &mut history, &mut rng());
        let index = next.unwrap();
        assert!(index < queue.len());
        assert_ne!(queue[index], 1);
    }

    // ===== Shuffle rewind =====

    #[test]
    fn shuffle_previous_rewinds_one_step() {
        let queue: Vec<TrackId> = vec![10, 20, 30, 40];
        let mut history = ShuffleHistory::new(10);
        history.push(0);
        history.push(2);
        history.push(3);

        let previous = previous_track_id(
            &queue,
            Some(40),
            ShuffleMode::All,
            Duration::ZERO,
            Duration::from_millis(5000),
            &mut history,
        );
        assert_eq!(previous, Some(30));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn shuffle_previous_without_history_keeps_current() {
        let queue: Vec<TrackId> = vec![10, 20, 30];
        let mut history = ShuffleHistory::new(10);
        history.push(1);

        let previous = previous_track_id(
            &queue,
            Some(20),
            ShuffleMode::All,
            Duration::ZERO,
            Duration::from_millis(5000),
            &mut history,
        );
        assert_eq!(previous, Some(20));
        assert_eq!(history.len(), 1);
    }
}
