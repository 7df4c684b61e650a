//! # Tree-Shaped Nested Lists

use crate::alloc::vec::Vec;
use crate::errors::{PMResult, PiecemealError};

/// A nested list of values, of uniform depth.
///
/// Depth 0 is a single [`Nested::Leaf`]; depth `n` is a [`Nested::List`]
/// whose items all have depth `n - 1`. An empty list fits any depth `>= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<V> {
    /// A single value.
    Leaf(V),

    /// A list of nested items.
    List(Vec<Nested<V>>),
}

impl<V> FromIterator<Nested<V>> for Nested<V> {
    fn from_iter<I: IntoIterator<Item = Nested<V>>>(iter: I) -> Self {
        Nested::List(iter.into_iter().collect())
    }
}

impl<V> Nested<V> {
    /// Build a depth-0 value.
    pub fn leaf(value: V) -> Self {
        Nested::Leaf(value)
    }

    /// Build a list of items.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Nested<V>>,
    {
        items.into_iter().collect()
    }

    /// Build a depth-1 list of values.
    pub fn from_leaves<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        values.into_iter().map(Nested::Leaf).collect()
    }

    /// Build a depth-2 list of rows of values.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
    {
        rows.into_iter().map(Nested::from_leaves).collect()
    }

    /// Get the value of a leaf.
    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::List(_) => None,
        }
    }

    /// Get the items of a list.
    pub fn as_list(&self) -> Option<&[Nested<V>]> {
        match self {
            Nested::Leaf(_) => None,
            Nested::List(items) => Some(items),
        }
    }

    /// Borrow every leaf.
    pub fn to_refs(&self) -> Nested<&V> {
        match self {
            Nested::Leaf(value) => Nested::Leaf(value),
            Nested::List(items) => items.iter().map(Nested::to_refs).collect(),
        }
    }

    /// Transform every leaf, preserving the shape.
    pub fn map<U, F>(
        self,
        mut f: F,
    ) -> Nested<U>
    where
        F: FnMut(V) -> U,
    {
        self.map_with(&mut f)
    }

    fn map_with<U, F>(
        self,
        f: &mut F,
    ) -> Nested<U>
    where
        F: FnMut(V) -> U,
    {
        match self {
            Nested::Leaf(value) => Nested::Leaf(f(value)),
            Nested::List(items) => items.into_iter().map(|item| item.map_with(f)).collect(),
        }
    }

    /// Determine the uniform depth of this value.
    ///
    /// The depth is taken from the first leaf found. A value without leaves
    /// has a depth only when it is a single (empty) list; `[[]]` could be of
    /// any depth >= 2, and is rejected rather than guessed.
    ///
    /// ## Returns
    /// The depth; or [`PiecemealError::InvalidArgument`] if leaves and lists
    /// are mixed at one level, or if a nest of lists has no leaves; so that
    /// no single depth describes the value.
    pub fn depth(&self) -> PMResult<usize> {
        let depth = match self.first_leaf_depth() {
            Some(depth) => depth,
            None if self.max_list_depth() == 1 => 1,
            None => {
                return Err(PiecemealError::InvalidArgument(
                    "nested input has nested lists but no words; rank is undetermined".into(),
                ));
            }
        };

        if self.has_depth(depth) {
            Ok(depth)
        } else {
            Err(PiecemealError::InvalidArgument(
                "nested input mixes leaves and lists at the same level; rank is undetermined"
                    .into(),
            ))
        }
    }

    fn first_leaf_depth(&self) -> Option<usize> {
        match self {
            Nested::Leaf(_) => Some(0),
            Nested::List(items) => items
                .iter()
                .find_map(Nested::first_leaf_depth)
                .map(|d| d + 1),
        }
    }

    fn max_list_depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::List(items) => {
                1 + items
                    .iter()
                    .map(Nested::max_list_depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    fn has_depth(
        &self,
        depth: usize,
    ) -> bool {
        match self {
            Nested::Leaf(_) => depth == 0,
            Nested::List(items) => depth > 0 && items.iter().all(|item| item.has_depth(depth - 1)),
        }
    }
}
