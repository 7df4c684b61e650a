//! # Ragged Vector

use core::ops::Range;

use crate::alloc::format;
use crate::alloc::vec;
use crate::alloc::vec::Vec;
use crate::errors::{PMResult, PiecemealError};
use crate::ragged::{Nested, RowSplits, row_splits_from_lengths, validate_row_splits};

/// A ragged nested batch, stored as row-splits tables over a flat arena.
///
/// The rank is the number of row-splits tables plus one:
/// a rank 1 [`RaggedVec`] is a plain list of values.
///
/// `nested_row_splits[0]` is the outermost level; each table indexes the
/// level after it, and the last table indexes `flat_values`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RaggedVec<V> {
    flat_values: Vec<V>,
    nested_row_splits: Vec<RowSplits>,
}

impl<V> Default for RaggedVec<V> {
    fn default() -> Self {
        Self::from_flat_values(Vec::new())
    }
}

impl<V> From<Vec<V>> for RaggedVec<V> {
    fn from(flat_values: Vec<V>) -> Self {
        Self::from_flat_values(flat_values)
    }
}

impl<V> RaggedVec<V> {
    /// Build a rank 1 [`RaggedVec`].
    pub fn from_flat_values(flat_values: Vec<V>) -> Self {
        Self {
            flat_values,
            nested_row_splits: Vec::new(),
        }
    }

    /// Build a rank 2 [`RaggedVec`] from values and a row-splits table.
    ///
    /// ## Returns
    /// An error if the table is malformed, or does not span the values.
    pub fn from_row_splits(
        flat_values: Vec<V>,
        row_splits: RowSplits,
    ) -> PMResult<Self> {
        Self::from_nested_row_splits(flat_values, vec![row_splits])
    }

    /// Build a rank 2 [`RaggedVec`] from values and per-row lengths.
    ///
    /// ## Returns
    /// An error if the lengths do not sum to the number of values.
    pub fn from_row_lengths<I>(
        flat_values: Vec<V>,
        row_lengths: I,
    ) -> PMResult<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        Self::from_row_splits(flat_values, row_splits_from_lengths(row_lengths))
    }

    /// Build a [`RaggedVec`] from values and a list of row-splits tables,
    /// outermost first.
    ///
    /// ## Returns
    /// An error if any table is malformed, or does not span the level below.
    pub fn from_nested_row_splits(
        flat_values: Vec<V>,
        nested_row_splits: Vec<RowSplits>,
    ) -> PMResult<Self> {
        let mut inner_len = flat_values.len();
        for row_splits in nested_row_splits.iter().rev() {
            validate_row_splits(row_splits, inner_len)?;
            inner_len = row_splits.len() - 1;
        }

        Ok(Self {
            flat_values,
            nested_row_splits,
        })
    }

    /// Build a rank 2 [`RaggedVec`] from rows of values.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
    {
        let mut flat_values = Vec::new();
        let mut row_splits = vec![0];
        for row in rows {
            flat_values.extend(row);
            row_splits.push(flat_values.len());
        }

        Self {
            flat_values,
            nested_row_splits: vec![row_splits],
        }
    }

    /// Build a [`RaggedVec`] from a [`Nested`] list.
    ///
    /// The rank is the depth of the nested value.
    ///
    /// ## Returns
    /// An error if the value is a bare leaf (rank 0 has no ragged form),
    /// or if its depth is not uniform.
    pub fn try_from_nested(nested: Nested<V>) -> PMResult<Self> {
        let rank = nested.depth()?;

        let mut level = match nested {
            Nested::List(items) => items,
            Nested::Leaf(_) => {
                return Err(PiecemealError::InvalidArgument(
                    "a rank 0 value has no ragged form".into(),
                ));
            }
        };

        let mut nested_row_splits = Vec::with_capacity(rank - 1);
        for _ in 1..rank {
            let mut row_splits = Vec::with_capacity(level.len() + 1);
            row_splits.push(0);

            let mut next = Vec::new();
            for item in level {
                if let Nested::List(items) = item {
                    next.extend(items);
                }
                row_splits.push(next.len());
            }

            nested_row_splits.push(row_splits);
            level = next;
        }

        let flat_values = level
            .into_iter()
            .filter_map(|item| match item {
                Nested::Leaf(value) => Some(value),
                Nested::List(_) => None,
            })
            .collect();

        Ok(Self {
            flat_values,
            nested_row_splits,
        })
    }

    /// Convert to a [`Nested`] list of depth [`Self::rank`].
    pub fn into_nested(self) -> Nested<V> {
        let mut level: Vec<Nested<V>> = self.flat_values.into_iter().map(Nested::Leaf).collect();

        for row_splits in self.nested_row_splits.iter().rev() {
            let mut items = level.into_iter();
            level = row_splits
                .windows(2)
                .map(|w| Nested::List(items.by_ref().take(w[1] - w[0]).collect()))
                .collect();
        }

        Nested::List(level)
    }

    /// The number of nesting levels, counting the flat values.
    pub fn rank(&self) -> usize {
        self.nested_row_splits.len() + 1
    }

    /// The number of outermost rows.
    pub fn len(&self) -> usize {
        match self.nested_row_splits.first() {
            Some(row_splits) => row_splits.len() - 1,
            None => self.flat_values.len(),
        }
    }

    /// Are there no outermost rows?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flat leaf values.
    pub fn flat_values(&self) -> &[V] {
        &self.flat_values
    }

    /// Consume, returning the flat leaf values.
    pub fn into_flat_values(self) -> Vec<V> {
        self.flat_values
    }

    /// The row-splits tables, outermost first.
    pub fn nested_row_splits(&self) -> &[RowSplits] {
        &self.nested_row_splits
    }

    /// The range of flat values covered by outermost row `index`.
    ///
    /// This is `O(rank)`, independent of the batch size.
    pub fn value_range(
        &self,
        index: usize,
    ) -> Option<Range<usize>> {
        if index >= self.len() {
            return None;
        }

        let mut range = index..index + 1;
        for row_splits in &self.nested_row_splits {
            range = row_splits[range.start]..row_splits[range.end];
        }
        Some(range)
    }

    /// The flat values covered by outermost row `index`.
    pub fn row_values(
        &self,
        index: usize,
    ) -> Option<&[V]> {
        self.value_range(index)
            .map(|range| &self.flat_values[range])
    }

    /// Replace the flat values, keeping the nesting structure.
    ///
    /// ## Returns
    /// An error if the number of values differs.
    pub fn with_flat_values<U>(
        &self,
        flat_values: Vec<U>,
    ) -> PMResult<RaggedVec<U>> {
        if flat_values.len() != self.flat_values.len() {
            return Err(PiecemealError::InvalidArgument(format!(
                "expected {} flat values, found {}",
                self.flat_values.len(),
                flat_values.len()
            )));
        }

        Ok(RaggedVec {
            flat_values,
            nested_row_splits: self.nested_row_splits.clone(),
        })
    }

    /// Replace every flat value with a row of new values,
    /// adding one innermost nesting level.
    ///
    /// ## Arguments
    /// * `row_splits` - one row per current flat value, indexing `flat_values`.
    /// * `flat_values` - the new leaves.
    ///
    /// ## Returns
    /// A [`RaggedVec`] of rank [`Self::rank`] + 1; or an error
    /// if `row_splits` does not match the current values.
    pub fn with_flat_rows<U>(
        &self,
        row_splits: RowSplits,
        flat_values: Vec<U>,
    ) -> PMResult<RaggedVec<U>> {
        if row_splits.len() != self.flat_values.len() + 1 {
            return Err(PiecemealError::InvalidArgument(format!(
                "expected {} row splits, found {}",
                self.flat_values.len() + 1,
                row_splits.len()
            )));
        }
        validate_row_splits(&row_splits, flat_values.len())?;

        let mut nested_row_splits = self.nested_row_splits.clone();
        nested_row_splits.push(row_splits);

        Ok(RaggedVec {
            flat_values,
            nested_row_splits,
        })
    }

    /// Drop the outermost nesting level.
    ///
    /// For a rank 2 value with a single row, this unwraps that row.
    ///
    /// ## Returns
    /// A [`RaggedVec`] of rank [`Self::rank`] - 1; or an error for rank 1.
    pub fn into_values(mut self) -> PMResult<Self> {
        if self.nested_row_splits.is_empty() {
            return Err(PiecemealError::InvalidArgument(
                "a rank 1 value has no inner values".into(),
            ));
        }
        self.nested_row_splits.remove(0);
        Ok(self)
    }

    /// Transform every leaf, preserving the shape.
    pub fn map<U, F>(
        self,
        f: F,
    ) -> RaggedVec<U>
    where
        F: FnMut(V) -> U,
    {
        RaggedVec {
            flat_values: self.flat_values.into_iter().map(f).collect(),
            nested_row_splits: self.nested_row_splits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RaggedVec<&'static str> {
        RaggedVec::from_nested_row_splits(
            vec!["a", "b", "c", "d"],
            vec![vec![0, 2, 3], vec![0, 2, 2, 4]],
        )
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let ragged = sample();
        assert_eq!(ragged.rank(), 3);
        assert_eq!(ragged.len(), 2);
        assert!(!ragged.is_empty());
        assert_eq!(ragged.value_range(0), Some(0..2));
        assert_eq!(ragged.row_values(1), Some(&["c", "d"][..]));
        assert_eq!(ragged.row_values(2), None);

        let flat = RaggedVec::from(vec![1, 2, 3]);
        assert_eq!(flat.rank(), 1);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat.row_values(1), Some(&[2][..]));

        assert!(RaggedVec::<u8>::default().is_empty());
    }

    #[test]
    fn test_invalid_splits() {
        assert!(RaggedVec::from_row_splits(vec![1, 2], vec![0, 1]).is_err());
        assert!(RaggedVec::from_nested_row_splits(vec![1, 2], vec![vec![0, 3], vec![0, 1, 2]]).is_err());
        assert!(RaggedVec::from_row_lengths(vec![1, 2], [1, 2]).is_err());
        assert_eq!(
            RaggedVec::from_row_lengths(vec![1, 2], [0, 2]).unwrap(),
            RaggedVec::from_rows([vec![], vec![1, 2]])
        );
    }

    #[test]
    fn test_nested_round_trip() {
        let nested = Nested::list([
            Nested::from_rows([vec!["a", "b"], vec![]]),
            Nested::from_rows([vec!["c", "d"]]),
        ]);

        let ragged = RaggedVec::try_from_nested(nested.clone()).unwrap();
        assert_eq!(ragged, sample());
        assert_eq!(ragged.into_nested(), nested);

        let empty = RaggedVec::try_from_nested(Nested::<u8>::list([])).unwrap();
        assert_eq!(empty.rank(), 1);
        assert_eq!(empty.into_nested(), Nested::list([]));

        assert!(RaggedVec::try_from_nested(Nested::leaf("a")).is_err());
    }

    #[test]
    fn test_with_flat_rows() {
        let words = RaggedVec::from_rows([vec!["ab", ""], vec!["c"]]);

        let pieces = words
            .with_flat_rows(vec![0, 2, 2, 3], vec!["a", "##b", "c"])
            .unwrap();
        assert_eq!(pieces.rank(), 3);
        assert_eq!(
            pieces.clone().into_nested(),
            Nested::list([
                Nested::from_rows([vec!["a", "##b"], vec![]]),
                Nested::from_rows([vec!["c"]]),
            ])
        );

        assert!(words.with_flat_rows(vec![0, 3], vec!["a", "##b", "c"]).is_err());
        assert!(words.with_flat_rows(vec![0, 2, 2, 4], vec!["a", "##b", "c"]).is_err());

        let lengths = words.with_flat_values(vec![2, 0, 1]).unwrap();
        assert_eq!(lengths.nested_row_splits(), words.nested_row_splits());
        assert!(words.with_flat_values(vec![1]).is_err());

        let unwrapped = pieces.into_values().unwrap();
        assert_eq!(unwrapped.rank(), 2);
        assert_eq!(unwrapped.nested_row_splits(), &[vec![0, 2, 2, 3]]);
        assert!(RaggedVec::from(vec![1]).into_values().is_err());
    }

    #[test]
    fn test_map() {
        let lengths = sample().map(str::len);
        assert_eq!(lengths.flat_values(), &[1, 1, 1, 1]);
        assert_eq!(lengths.rank(), 3);
    }
}
