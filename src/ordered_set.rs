//! A hash set that keeps the insertion order of its elements.

use super::SlotIndex;
use crate::DefaultHashBuilder;
use alloc::vec::IntoIter as VecIntoIter;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::{Enumerate, FusedIterator};
use core::slice::Iter as SliceIter;
use hashbrown::hash_map::{self, HashMap};

/// A set of unique elements that remembers the order in which they were
/// inserted.
///
/// Membership is answered by a hash index in O(1) while the elements
/// themselves live in a dense vector in insertion order. Both structures are
/// updated together by every mutating method, so the vector never holds an
/// element twice and the index always points at the element's current slot.
///
/// Equality is order-sensitive: two sets holding the same elements in a
/// different order are not equal.
///
/// A set created with [`OrderedSet::new`] or [`Default`] does not allocate
/// until the first insertion.
#[derive(Clone)]
pub struct OrderedSet<T, S = DefaultHashBuilder> {
    /// A mapping from elements to slot indices.
    key2slot: HashMap<T, SlotIndex, S>,
    /// A vector holding all elements in insertion order.
    slots: Vec<T>,
}

impl<T> OrderedSet<T> {
    /// Makes a new, empty `OrderedSet`.
    ///
    /// Does not allocate anything on its own.
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Makes a new, empty `OrderedSet` with room for at least `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> Default for OrderedSet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> OrderedSet<T, S> {
    /// Makes a new, empty `OrderedSet` which hashes its elements with
    /// `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            key2slot: HashMap::with_hasher(hash_builder),
            slots: Vec::new(),
        }
    }

    /// Makes a new, empty `OrderedSet` with room for at least `capacity`
    /// elements which hashes its elements with `hash_builder`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            key2slot: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the element at position `index` in insertion order.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Returns the oldest element of the set.
    pub fn first(&self) -> Option<&T> {
        self.slots.first()
    }

    /// Returns the most recently inserted element of the set.
    pub fn last(&self) -> Option<&T> {
        self.slots.last()
    }

    /// Returns the elements of the set as a slice in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns a copy of the elements in insertion order.
    ///
    /// The returned vector is owned by the caller and does not alias the set.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.slots.clone()
    }

    /// Consumes the set and returns its elements in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.slots
    }

    /// Gets an iterator that visits the elements in the [`OrderedSet`]
    /// in the order in which they have been inserted into the set.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            iter: self.slots.iter(),
        }
    }

    /// Gets an iterator over `(position, element)` pairs in insertion order.
    ///
    /// Every call starts over at the first element.
    pub fn iter_indexed(&self) -> Enumerate<Iter<T>> {
        self.iter().enumerate()
    }

    /// Clears the set, removing all elements.
    ///
    /// Keeps the allocated memory for reuse.
    pub fn clear(&mut self) {
        self.key2slot.clear();
        self.slots.clear();
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.key2slot.reserve(additional);
        self.slots.reserve(additional);
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but [`Hash`] and [`Eq`] on the borrowed form *must* match those
    /// of the element type.
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.key2slot.contains_key(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to
    /// the value.
    pub fn get<Q: ?Sized>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.key2slot
            .get(value)
            .map(|slot| &self.slots[slot.index()])
    }

    /// Returns the position of the element equal to the value in insertion
    /// order, if any.
    pub fn get_index_of<Q: ?Sized>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.key2slot.get(value).copied().map(SlotIndex::index)
    }

    /// Adds a value to the end of the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   neither the entry nor its position are updated.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Clone,
    {
        match self.key2slot.entry(value.clone()) {
            hash_map::Entry::Vacant(entry) => {
                let new_slot = self.slots.len();
                entry.insert(SlotIndex(new_slot));
                self.slots.push(value);
                true
            }
            hash_map::Entry::Occupied(_) => false,
        }
    }

    /// Inserts every value yielded by `values` in iteration order.
    ///
    /// Returns `true` if at least one of the values was newly inserted.
    pub fn insert_many<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        values
            .into_iter()
            .fold(false, |modified, value| self.insert(value) | modified)
    }

    /// Removes the value from the set.
    ///
    /// All elements inserted after the removed one move one position to the
    /// front, so the relative order of the remaining elements is preserved.
    /// This is an O(n) operation; see [`OrderedSet::swap_remove`] for an O(1)
    /// alternative that does not keep the order.
    ///
    /// Returns whether the value was present in the set.
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        let Some(slot) = self.key2slot.remove(value) else {
            return false;
        };
        let index = slot.index();
        self.slots.remove(index);
        for shifted in &self.slots[index..] {
            if let Some(slot) = self.key2slot.get_mut(shifted) {
                *slot = SlotIndex(slot.index() - 1);
            }
        }
        true
    }

    /// Removes the value from the set by swapping the last element into its
    /// slot.
    ///
    /// This is an O(1) operation but the previously last element takes the
    /// position of the removed one.
    ///
    /// Returns whether the value was present in the set.
    pub fn swap_remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        let Some(slot) = self.key2slot.remove(value) else {
            return false;
        };
        let index = slot.index();
        self.slots.swap_remove(index);
        if let Some(moved) = self.slots.get(index) {
            if let Some(slot) = self.key2slot.get_mut(moved) {
                *slot = SlotIndex(index);
            }
        }
        true
    }
}

impl<T, S> PartialEq for OrderedSet<T, S>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T, S> Eq for OrderedSet<T, S> where T: Eq {}

impl<T, S> fmt::Debug for OrderedSet<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> fmt::Display for OrderedSet<T, S>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.iter_indexed() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<'a, T, S> Extend<&'a T> for OrderedSet<T, S>
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

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_many(iter);
    }
}

impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut set = OrderedSet::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.insert_many(iter);
        set
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedSet<T>
where
    T: Hash + Eq + Clone,
{
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.slots.into_iter(),
        }
    }
}

/// An iterator over the items of an [`OrderedSet`].
///
/// This `struct` is created by the [`iter`] method on [`OrderedSet`].
///
/// [`iter`]: OrderedSet::iter
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    iter: SliceIter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn count(self) -> usize {
        self.iter.count()
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the items of an [`OrderedSet`].
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
#[derive(Debug)]
pub struct IntoIter<T> {
    iter: VecIntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn count(self) -> usize {
        self.iter.count()
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
