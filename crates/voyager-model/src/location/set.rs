use std::collections::{BTreeSet, btree_set};

use serde::{Deserialize, Serialize};

use crate::{ClusterLocation, Label, Location};

/// Ordered set of value objects.
///
/// Backed by a [`BTreeSet`], so iteration and serialization follow the
/// element ordering and two sets with the same members compare equal
/// regardless of insertion order. Serialized as a plain JSON array.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Ord"
))]
pub struct ValueSet<T>(BTreeSet<T>);

/// Set of full locations.
pub type LocationSet = ValueSet<Location>;

/// Set of cluster locations.
pub type ClusterLocationSet = ValueSet<ClusterLocation>;

impl<T: Ord> ValueSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a value; returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.0.insert(value)
    }

    /// Remove a value; returns `false` if it was absent.
    pub fn remove(&mut self, value: &T) -> bool {
        self.0.remove(value)
    }

    /// `true` if the value is a member.
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// `true` if every given value is present (vacuously true when empty).
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().all(|v| self.0.contains(v))
    }

    /// `true` if at least one given value is present.
    pub fn contains_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().any(|v| self.0.contains(v))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.0.iter()
    }

    /// Remove and return the smallest value.
    pub fn pop_first(&mut self) -> Option<T> {
        self.0.pop_first()
    }

    /// `true` if `other` is contained in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }
}

impl<T: Ord + Clone> ValueSet<T> {
    /// Values present in either set.
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Values present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Values in `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Members in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.0.iter().cloned().collect()
    }
}

impl LocationSet {
    /// Distinct clusters hosting any of the locations.
    pub fn cluster_locations(&self) -> ClusterLocationSet {
        self.iter().map(Location::cluster_location).collect()
    }
}

impl ClusterLocationSet {
    /// Every cluster narrowed to the same label.
    pub fn with_label(&self, label: &Label) -> LocationSet {
        self.iter().map(|cl| cl.location(label.clone())).collect()
    }
}

impl<T> Default for ValueSet<T> {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

impl<T: Ord> FromIterator<T> for ValueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for ValueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for ValueSet<T> {
    fn from(values: [T; N]) -> Self {
        Self(BTreeSet::from(values))
    }
}

impl<T> IntoIterator for ValueSet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ValueSet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
