use std::borrow::Borrow;
use std::hash::Hash;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    #[error("duplicate element at position {position}")]
    Duplicate { position: usize },
    #[error("expected a set of {expected} elements but it has {found}")]
    Cardinality { expected: usize, found: usize },
}

/// An unordered collection of distinct values.
///
/// Membership is tracked in a hash table, so that `add`, `del` and `contains` are expected O(1).
/// Sets produced by the algebraic operations (`union`, `inter`, `diff`, `sym_diff`) own a copy of
/// their elements and never share storage with their operands.
///
/// The set is not synchronized: concurrent mutation must be prevented by the caller.
#[derive(Clone)]
pub struct Set<T> {
    data: hashbrown::HashSet<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set {
            data: Default::default(),
        }
    }
}

impl<T> Set<T> {
    pub(crate) fn inner(&self) -> &hashbrown::HashSet<T> {
        &self.data
    }

    pub(crate) fn into_inner(self) -> hashbrown::HashSet<T> {
        self.data
    }
}

impl<T: Hash + Eq> Set<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a slice, collapsing duplicated values.
    pub fn from_slice(vals: &[T]) -> Self
    where
        T: Clone,
    {
        vals.iter().cloned().collect()
    }

    /// Builds a set from the given values, failing on the first value that was already seen.
    ///
    /// The `position` of the error is the index of the offending value in `vals`.
    pub fn try_from_distinct(vals: impl IntoIterator<Item = T>) -> Result<Self, SetError> {
        let mut set = Set::new();
        for (position, v) in vals.into_iter().enumerate() {
            if !set.add(v) {
                return Err(SetError::Duplicate { position });
            }
        }
        Ok(set)
    }

    /// Adds `v` to the set. Returns true if it was not previously present.
    pub fn add(&mut self, v: T) -> bool {
        self.data.insert(v)
    }

    /// Removes `v` from the set. Returns true if it was present.
    pub fn del<Q>(&mut self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.remove(v)
    }

    pub fn contains<Q>(&self, v: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains(v)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    /// Returns a freshly allocated vector with all elements of the set, in no particular order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(self.len());
        items.extend(self.data.iter().cloned());
        items
    }

    /// Removes all elements. The backing table is replaced rather than emptied,
    /// so the memory held by a previously large set is released.
    pub fn clear(&mut self) {
        tracing::trace!(released = self.len(), "clear");
        self.data = hashbrown::HashSet::new();
    }

    /// Only keeps the elements for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.data.retain(keep)
    }

    /// Elements that are in `self` or in `other`.
    pub fn union(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        let mut res = self.clone();
        for v in other.iter() {
            if !res.contains(v) {
                res.add(v.clone());
            }
        }
        tracing::trace!(lhs = self.len(), rhs = other.len(), res = res.len(), "union");
        res
    }

    /// Elements that are both in `self` and in `other`.
    pub fn inter(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        // scan the smallest set and probe the largest one
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let res: Set<T> = small.iter().filter(|v| large.contains(*v)).cloned().collect();
        tracing::trace!(lhs = self.len(), rhs = other.len(), res = res.len(), "inter");
        res
    }

    /// Elements of `self` that are not in `other`.
    ///
    /// Unlike [`Set::sym_diff`], this operation is not commutative.
    pub fn diff(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        let res: Set<T> = self.iter().filter(|v| !other.contains(*v)).cloned().collect();
        tracing::trace!(lhs = self.len(), rhs = other.len(), res = res.len(), "diff");
        res
    }

    /// Elements that are in exactly one of `self` and `other`.
    pub fn sym_diff(&self, other: &Set<T>) -> Set<T>
    where
        T: Clone,
    {
        let mut res = Set::new();
        res.extend(self.iter().filter(|v| !other.contains(*v)).cloned());
        res.extend(other.iter().filter(|v| !self.contains(*v)).cloned());
        tracing::trace!(lhs = self.len(), rhs = other.len(), res = res.len(), "sym_diff");
        res
    }

    /// Returns true if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(v))
    }

    /// Returns true if `self` is a subset of `other` and the two sets differ.
    pub fn is_proper_subset(&self, other: &Set<T>) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if the two sets have no element in common.
    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().all(|v| !large.contains(v))
    }

    /// Returns true if both sets have the same elements.
    pub fn is_equal(&self, other: &Set<T>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, const N: usize> TryFrom<Set<T>> for [T; N] {
    type Error = SetError;

    /// Extracts the elements of a set with exactly `N` elements, in no particular order.
    fn try_from(set: Set<T>) -> Result<Self, Self::Error> {
        let items: Vec<T> = set.into_iter().collect();
        items.try_into().map_err(|items: Vec<T>| SetError::Cardinality {
            expected: N,
            found: items.len(),
        })
    }
}
