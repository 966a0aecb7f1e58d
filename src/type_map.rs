//! A heterogeneous map that stores at most one value per type.

use alloc::boxed::Box;
use core::any::{type_name, Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};
use hashbrown::hash_map::{self, HashMap};

/// Identifies the type of a value stored in a [`TypeMap`].
///
/// Two keys are equal if they describe the same type; the name is only used
/// for display.
#[derive(Debug, Copy, Clone)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Returns the key of the type `T`.
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the described type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the name of the described type.
    ///
    /// The name is meant for diagnostics and is not guaranteed to be unique.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A value that can be stored in a [`TypeMap`].
///
/// Implemented for every `'static` type that implements [`Debug`](fmt::Debug).
pub trait Value: Any + fmt::Debug {
    /// Returns the value as [`Any`] so it can be downcast.
    fn as_any(&self) -> &dyn Any;

    /// Returns the value as mutable [`Any`] so it can be downcast.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Converts the boxed value into a boxed [`Any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Returns the key of the value's concrete type.
    fn type_key(&self) -> TypeKey;
}

impl<T> Value for T
where
    T: Any + fmt::Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_key(&self) -> TypeKey {
        TypeKey::of::<T>()
    }
}

/// A map holding at most one value of every type.
///
/// Values are addressed by their type instead of a key chosen by the caller:
///
/// ```
/// use setmap_nostd::TypeMap;
///
/// let mut map = TypeMap::new();
/// map.insert(5_i32);
/// map.insert(String::from("a"));
///
/// assert_eq!(map.get::<i32>(), 5);
/// assert_eq!(map.lookup::<String>().map(String::as_str), Some("a"));
/// assert_eq!(map.lookup::<f64>(), None);
/// ```
#[derive(Default)]
pub struct TypeMap {
    entries: HashMap<TypeKey, Box<dyn Value>>,
}

impl TypeMap {
    /// Makes a new, empty `TypeMap`.
    ///
    /// Does not allocate anything on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy of the stored `T`, or `T::default()` if there is none.
    ///
    /// Use [`TypeMap::lookup`] to tell a missing value from a stored default.
    pub fn get<T>(&self) -> T
    where
        T: Value + Clone + Default,
    {
        self.lookup::<T>().cloned().unwrap_or_default()
    }

    /// Returns a reference to the stored `T`, if any.
    pub fn lookup<T>(&self) -> Option<&T>
    where
        T: Value,
    {
        self.entries
            .get(&TypeKey::of::<T>())
            .and_then(|value| (**value).as_any().downcast_ref())
    }

    /// Returns a mutable reference to the stored `T`, if any.
    pub fn lookup_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Value,
    {
        self.entries
            .get_mut(&TypeKey::of::<T>())
            .and_then(|value| (**value).as_any_mut().downcast_mut())
    }

    /// Returns `true` if a value of type `T` is stored.
    pub fn contains<T>(&self) -> bool
    where
        T: Value,
    {
        self.entries.contains_key(&TypeKey::of::<T>())
    }

    /// Stores `value` under its static type.
    ///
    /// Only `'static` types that implement [`Debug`](fmt::Debug) can be
    /// stored, so that the map can always be printed.
    ///
    /// Returns the previously stored value of the same type, if any.
    pub fn insert<T>(&mut self, value: T) -> Option<T>
    where
        T: Value,
    {
        self.entries
            .insert(TypeKey::of::<T>(), Box::new(value))
            .and_then(downcast_owned)
    }

    /// Stores a boxed value under its runtime type.
    ///
    /// This is the counterpart of [`TypeMap::insert`] for values whose
    /// concrete type is not known at the call site. A `Box<dyn Value>` holding
    /// an `i32` is stored exactly as `insert::<i32>` would store it.
    ///
    /// Returns the previously stored value of the same type, if any.
    pub fn insert_dynamic(&mut self, value: Box<dyn Value>) -> Option<Box<dyn Value>> {
        let key = (*value).type_key();
        self.entries.insert(key, value)
    }

    /// Removes and returns the stored `T`, if any.
    pub fn remove<T>(&mut self) -> Option<T>
    where
        T: Value,
    {
        self.entries
            .remove(&TypeKey::of::<T>())
            .and_then(downcast_owned)
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Gets an iterator over the stored types and their values in arbitrary
    /// order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.entries.iter(),
        }
    }

    /// Gets an iterator over the stored types in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.entries.keys().copied()
    }

    /// Gets an iterator over the stored values in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = &dyn Value> + '_ {
        self.entries.values().map(|value| -> &dyn Value { &**value })
    }
}

/// Unboxes a value that is known to be stored under the key of `T`.
fn downcast_owned<T: Value>(value: Box<dyn Value>) -> Option<T> {
    value.into_any().downcast().ok().map(|value| *value)
}

impl fmt::Debug for TypeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (key.name(), value)))
            .finish()
    }
}

impl fmt::Display for TypeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TypeMap[")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value:?}")?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a TypeMap {
    type Item = (TypeKey, &'a dyn Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`TypeMap`].
///
/// This `struct` is created by the [`iter`] method on [`TypeMap`].
///
/// [`iter`]: TypeMap::iter
#[derive(Clone)]
pub struct Iter<'a> {
    iter: hash_map::Iter<'a, TypeKey, Box<dyn Value>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (TypeKey, &'a dyn Value);

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(key, value)| -> (TypeKey, &'a dyn Value) { (*key, &**value) })
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}
