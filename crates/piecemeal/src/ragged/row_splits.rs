//! # Row-Splits Tables

use crate::alloc::format;
use crate::alloc::vec::Vec;
use crate::errors::{PMResult, PiecemealError};

/// Cumulative row boundaries for one nesting level.
///
/// ## Style Hints
/// Instance names should prefer `row_splits`, or `splits`.
pub type RowSplits = Vec<usize>;

/// Validate a row-splits table against the length of the level it indexes.
///
/// A valid table is non-empty, starts at `0`, never decreases,
/// and ends at `inner_len`.
///
/// ## Arguments
/// * `row_splits` - the table.
/// * `inner_len` - the length of the level below.
pub fn validate_row_splits(
    row_splits: &[usize],
    inner_len: usize,
) -> PMResult<()> {
    let (Some(&first), Some(&last)) = (row_splits.first(), row_splits.last()) else {
        return Err(PiecemealError::InvalidArgument(
            "row_splits must have at least one entry".into(),
        ));
    };
    if first != 0 || last != inner_len {
        return Err(PiecemealError::InvalidArgument(format!(
            "row_splits must span 0..{inner_len}; found {first}..{last}"
        )));
    }

    if let Some(idx) = row_splits.windows(2).position(|w| w[0] > w[1]) {
        return Err(PiecemealError::InvalidArgument(format!(
            "row_splits must be non-decreasing; found {} > {} at row {idx}",
            row_splits[idx],
            row_splits[idx + 1]
        )));
    }

    Ok(())
}

/// Build a row-splits table from per-row lengths.
pub fn row_splits_from_lengths<I>(lengths: I) -> RowSplits
where
    I: IntoIterator<Item = usize>,
{
    let lengths = lengths.into_iter();
    let mut row_splits = Vec::with_capacity(lengths.size_hint().0 + 1);
    row_splits.push(0);

    let mut acc = 0;
    for len in lengths {
        acc += len;
        row_splits.push(acc);
    }
    row_splits
}

/// The per-row lengths of a row-splits table.
pub fn row_lengths(row_splits: &[usize]) -> impl Iterator<Item = usize> + '_ {
    row_splits.windows(2).map(|w| w[1] - w[0])
}
