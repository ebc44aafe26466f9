//! Binary search over ascending sorted sequences.
//!
//! The sequence is assumed to be sorted; this is not verified. An unsorted
//! sequence gives an unspecified (but memory-safe) result.
//!
//! When the sequence holds duplicates of the target, the returned index is
//! whichever matching position the probe lands on first. It is not
//! guaranteed to be the first or last occurrence.

use std::cmp::Ordering;

/// Sentinel returned by [`search`] when the target is absent.
pub const NOT_FOUND: i64 = -1;

/// Locate `target` in `sequence`, returning its index or `None`.
///
/// Probes with inclusive bounds `low..=high` and `mid = low + (high - low) / 2`.
pub fn find<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = sequence.len().checked_sub(1)?;

    while low <= high {
        let mid = low + (high - low) / 2;

        match sequence[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            // Lower half is empty once mid reaches index 0
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }

    None
}

/// Locate `target` in `sequence`, returning its index or [`NOT_FOUND`].
pub fn search(sequence: &[i64], target: i64) -> i64 {
    match find(sequence, &target) {
        Some(index) => index as i64,
        None => NOT_FOUND,
    }
}
