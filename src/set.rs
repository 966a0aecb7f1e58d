//! An unordered hash set.

use crate::DefaultHashBuilder;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_set::{self, HashSet};

/// A set of unique elements without any particular order.
///
/// Unlike [`OrderedSet`](crate::OrderedSet) it carries no secondary vector,
/// which makes it cheaper whenever only membership matters. Iteration,
/// [`Set::to_vec`] and serialization visit the elements in an unspecified
/// order, and equality ignores order.
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    items: HashSet<T, S>,
}

impl<T> Set<T> {
    /// Makes a new, empty `Set`.
    ///
    /// Does not allocate anything on its own.
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Makes a new, empty `Set` with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> Default for Set<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> Set<T, S> {
    /// Makes a new, empty `Set` which hashes its elements with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            items: HashSet::with_hasher(hash_builder),
        }
    }

    /// Makes a new, empty `Set` with room for at least `capacity` elements
    /// which hashes its elements with `hash_builder`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            items: HashSet::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Gets an iterator over the elements in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            iter: self.items.iter(),
        }
    }

    /// Returns a copy of all elements in arbitrary order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, S> Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if the set contains an element equal to the value.
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.items.contains(value)
    }

    /// Adds a value to the set.
    ///
    /// Inserting a value that is already present leaves the set unchanged.
    pub fn insert(&mut self, value: T) {
        self.items.insert(value);
    }

    /// Inserts every value yielded by `values`.
    pub fn insert_many<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().for_each(|value| self.insert(value));
    }

    /// Removes the value from the set and returns whether it was present.
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.items.remove(value)
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> fmt::Debug for Set<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> fmt::Display for Set<T, S>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: Hash + Eq + Copy,
    S: BuildHasher,
{
    #[allow(clippy::map_clone)] // lifetime issue: seems to be a clippy bug
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().map(|value| *value))
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_many(iter);
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut set = Set::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.insert_many(iter);
        set
    }
}

impl<T, const N: usize> From<[T; N]> for Set<T>
where
    T: Hash + Eq,
{
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// An iterator over the items of a [`Set`].
///
/// This `struct` is created by the [`iter`] method on [`Set`].
///
/// [`iter`]: Set::iter
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    iter: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, T> core::iter::FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::Set;
    use crate::DefaultHashBuilder;

    #[test]
    fn test_insert_and_remove() {
        let mut set = Set::new();
        set.insert(1);
        set.insert(1);
        set.insert_many([2, 3, 2]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&2));

        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert!(!set.contains(&2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_explicit_default_hasher() {
        let mut set: Set<u8, DefaultHashBuilder> =
            Set::with_capacity_and_hasher(4, DefaultHashBuilder::default());
        set.insert_many([1, 2, 1]);
        assert_eq!(set, Set::from([2, 1]));

        let iter = set.iter();
        assert!(format!("{iter:?}").contains('1'));
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn test_empty_set() {
        let mut set: Set<String> = Set::default();
        assert!(set.is_empty());
        assert!(!set.contains("a"));
        assert!(!set.remove("a"));
        set.clear();
        assert!(set.to_vec().is_empty());
        assert_eq!(set.iter().count(), 0);
        assert_eq!(set, Set::with_capacity(4));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Set::from([1, 2, 3]);
        let b = Set::from([3, 2, 1]);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, Set::from([1, 2]));
        assert_ne!(a, Set::from([1, 2, 4]));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Set::from(["a"]);
        let mut copy = original.clone();
        copy.insert("b");
        copy.clear();
        assert!(original.contains("a"));
        assert!(!original.contains("b"));
    }

    #[test]
    fn test_items_and_iteration() {
        let set: Set<u32> = (0..10).chain(0..10).collect();
        let mut items = set.to_vec();
        items.sort_unstable();
        assert_eq!(items, (0..10).collect::<Vec<_>>());

        // iteration can be restarted and visits every element once
        assert_eq!(set.iter().count(), 10);
        assert_eq!(set.iter().copied().sum::<u32>(), 45);
        assert_eq!((&set).into_iter().len(), 10);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(Set::from([7]).to_string(), "[7]");
        assert_eq!(format!("{:?}", Set::from(["x"])), r#"{"x"}"#);
        assert_eq!(Set::<u8>::new().to_string(), "[]");
    }
}
