//! # Error Types for the Trie Index
//!
//! The index has exactly one recoverable failure: running out of room in the
//! item counter. Everything else is either an ordinary "not found" (reported
//! as `None`, `false` or `0` by the operation in question) or a caller
//! contract violation (reported by panicking).
//!
//! ## Error Taxonomy
//!
//! | Kind                | Signal                      | Recovery            |
//! |---------------------|-----------------------------|---------------------|
//! | Capacity exhausted  | `Err(FullError)` on insert  | remove items        |
//! | Not found           | `None` / `false` / `0`      | none needed         |
//! | Contract violation  | panic                       | fix the caller      |
//!
//! Contract violations are programmer errors: indexing with `[]` on an
//! absent key, removing an item that is not linked into the index, inserting
//! an item that is already linked, or mutating an item's key while it is
//! indexed. The index never attempts to recover from these.
//!
//! All internal state transitions of the trie engine are total: given
//! consistent link state there is no internal error to propagate, so no
//! operation other than `insert` returns a `Result`.

use std::fmt;

use thiserror::Error;

/// The index is at capacity; the item could not be inserted.
///
/// Returned by `insert` when the item count has reached
/// [`max_len`](crate::GenericTrie::max_len), which is the numerical maximum
/// of the counter type. The rejected item handle is carried back to the
/// caller untouched, with its links still in the unlinked state.
///
/// This condition is only recoverable by removing items.
#[derive(Error)]
#[error("bitwise trie index is at capacity")]
pub struct FullError<H> {
	/// The item that could not be inserted, returned to the caller.
	pub item: H,
}

// Handles are frequently not Debug themselves, so the rejected item is
// elided from the debug representation.
impl<H> fmt::Debug for FullError<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FullError").finish_non_exhaustive()
	}
}
