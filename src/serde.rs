//! `serde` support for [`OrderedSet`] and [`Set`].
//!
//! Both sets serialize as a plain sequence of their elements. An
//! [`OrderedSet`] writes and reads the sequence in insertion order; a [`Set`]
//! writes it in arbitrary order. Deserialization always goes through
//! `insert`, so repeated elements in the input collapse into one and an
//! ordered set keeps the position of the first occurrence.

use crate::{OrderedSet, Set};
use alloc::vec::Vec;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Upper bound for preallocation driven by an untrusted size hint.
const MAX_PREALLOCATED: usize = 4096;

fn cautious(hint: Option<usize>) -> usize {
    hint.unwrap_or(0).min(MAX_PREALLOCATED)
}

impl<T, S> Serialize for OrderedSet<T, S>
where
    T: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct OrderedSetVisitor<T, S>(PhantomData<OrderedSet<T, S>>);

impl<'de, T, S> Visitor<'de> for OrderedSetVisitor<T, S>
where
    T: Deserialize<'de> + Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Value = OrderedSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = OrderedSet::with_capacity_and_hasher(cautious(seq.size_hint()), S::default());
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

impl<'de, T, S> Deserialize<'de> for OrderedSet<T, S>
where
    T: Deserialize<'de> + Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor(PhantomData))
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Decodes a sequence of elements and appends the new ones to this set.
    ///
    /// The whole sequence is decoded before the set is touched, so on error
    /// the set is left exactly as it was. Elements that are already present
    /// keep their position.
    ///
    /// Returns `true` if at least one element was newly inserted.
    pub fn deserialize_into<'de, D>(&mut self, deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(self.insert_many(values))
    }
}

impl<T, S> Serialize for Set<T, S>
where
    T: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct SetVisitor<T, S>(PhantomData<Set<T, S>>);

impl<'de, T, S> Visitor<'de> for SetVisitor<T, S>
where
    T: Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = Set::with_capacity_and_hasher(cautious(seq.size_hint()), S::default());
        while let Some(value) = seq.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

impl<'de, T, S> Deserialize<'de> for Set<T, S>
where
    T: Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor(PhantomData))
    }
}

impl<T, S> Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Decodes a sequence of elements and inserts them into this set.
    ///
    /// The whole sequence is decoded before the set is touched, so on error
    /// the set is left exactly as it was.
    pub fn deserialize_into<'de, D>(&mut self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        self.insert_many(values);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{OrderedSet, Set};
    use serde::de::value::{Error as ValueError, SeqDeserializer};
    use serde::de::IntoDeserializer;
    use serde::Deserialize;

    fn seq(values: Vec<u32>) -> SeqDeserializer<alloc::vec::IntoIter<u32>, ValueError> {
        values.into_deserializer()
    }

    fn strings(values: Vec<&str>) -> SeqDeserializer<alloc::vec::IntoIter<&str>, ValueError> {
        values.into_deserializer()
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set = OrderedSet::<u32>::deserialize(seq(vec![3, 1, 3, 2, 1])).unwrap();
        assert_eq!(set.as_slice(), &[3, 1, 2]);
        assert_eq!(set.len(), 3);

        let set = Set::<u32>::deserialize(seq(vec![1, 1, 1])).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_deserialize_into_populated_set() {
        let mut set = OrderedSet::from([5, 1]);
        assert!(set.deserialize_into(seq(vec![1, 7, 5, 8])).unwrap());
        assert_eq!(set.as_slice(), &[5, 1, 7, 8]);
        assert!(!set.deserialize_into(seq(vec![8])).unwrap());

        let mut set = Set::from([5]);
        set.deserialize_into(seq(vec![5, 6])).unwrap();
        assert_eq!(set, Set::from([5, 6]));
    }

    #[test]
    fn test_failed_deserialize_into_leaves_set_unchanged() {
        let mut set = OrderedSet::<u32>::from([5, 1]);
        assert!(set.deserialize_into(strings(vec!["7", "eight"])).is_err());
        assert_eq!(set.as_slice(), &[5, 1]);
        assert!(!set.contains(&7));

        let mut set = Set::<u32>::from([5]);
        assert!(set.deserialize_into(strings(vec!["6"])).is_err());
        assert_eq!(set, Set::from([5]));
        assert_eq!(set.len(), 1);
    }
}
