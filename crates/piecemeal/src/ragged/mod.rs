//! # Ragged Batches
//!
//! Variable-length nested batches are stored as a flat arena of leaf values
//! plus one row-splits table per nesting level.
//!
//! A row-splits table holds cumulative boundaries: row `i` of a level spans
//! `splits[i]..splits[i + 1]` of the level below it (or of the flat values,
//! for the innermost table). So `[["a", "b"], [], ["c"]]` is:
//! * `flat_values` - `["a", "b", "c"]`,
//! * `nested_row_splits` - `[[0, 2, 2, 3]]`.
//!
//! [`RaggedVec`] is the container; [`Nested`] is a tree-shaped view used to
//! build ragged data from, and read it back into, ordinary nested lists.

pub mod nested;
pub mod ragged_vec;
pub mod row_splits;

#[doc(inline)]
pub use nested::Nested;
#[doc(inline)]
pub use ragged_vec::RaggedVec;
#[doc(inline)]
pub use row_splits::{RowSplits, row_lengths, row_splits_from_lengths, validate_row_splits};
