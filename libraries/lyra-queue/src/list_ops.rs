//! List-algebra helpers for queue mutations
//!
//! Generic splice/delete/compare primitives consumed by the queue store.
//! All helpers return new sequences and leave the input untouched.

use crate::error::{QueueError, Result};

/// Move one element of a sequence to a new position
///
/// Removes the element at `from` and reinserts it at `to` in the shortened
/// sequence (a splice, not a pairwise exchange). An empty input yields an
/// empty result; out-of-range indices on a non-empty input are an error,
/// never clamped.
pub fn move_element<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let len = items.len();
    if from >= len {
        return Err(QueueError::IndexOutOfBounds { index: from, len });
    }
    if to >= len {
        return Err(QueueError::IndexOutOfBounds { index: to, len });
    }

    let mut moved = items.to_vec();
    let element = moved.remove(from);
    moved.insert(to, element);
    Ok(moved)
}

/// Remove the first element equal to `value`
///
/// Duplicates lose exactly one instance; the relative order of all
/// remaining elements is preserved. An absent value yields an unchanged
/// copy.
pub fn delete_first_occurrence<T: PartialEq + Clone>(items: &[T], value: &T) -> Vec<T> {
    let mut remaining = items.to_vec();
    if let Some(position) = remaining.iter().position(|item| item == value) {
        remaining.remove(position);
    }
    remaining
}

/// Ordered, element-wise sequence equality
///
/// Two sequences are equal iff they have the same length and are pairwise
/// equal in order. Used to detect "no real change" before re-notifying
/// observers.
pub fn collections_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}
