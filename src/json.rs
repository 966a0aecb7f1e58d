//! JSON helpers for [`OrderedSet`] and [`Set`].

use crate::{Error, OrderedSet, Result, Set};
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use serde::de::DeserializeOwned;
use serde::Serialize;

impl<T, S> OrderedSet<T, S>
where
    T: Serialize,
{
    /// Encodes the set as a JSON array in insertion order.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: DeserializeOwned + Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Decodes a set from a JSON array, keeping the first occurrence of
    /// repeated elements.
    pub fn from_json(json: &str) -> Result<Self>
    where
        S: Default,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Appends the elements of a JSON array that are not yet in the set.
    ///
    /// On error the set is left unchanged. Returns `true` if at least one
    /// element was newly inserted.
    pub fn extend_from_json(&mut self, json: &str) -> Result<bool> {
        let values: Vec<T> = serde_json::from_str(json)?;
        Ok(self.insert_many(values))
    }
}

impl<T, S> Set<T, S>
where
    T: Serialize,
{
    /// Encodes the set as a JSON array in arbitrary order.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }
}

impl<T, S> Set<T, S>
where
    T: DeserializeOwned + Hash + Eq,
    S: BuildHasher,
{
    /// Decodes a set from a JSON array.
    pub fn from_json(json: &str) -> Result<Self>
    where
        S: Default,
    {
        Ok(serde_json::from_str(json)?)
    }

    /// Inserts the elements of a JSON array into the set.
    ///
    /// On error the set is left unchanged.
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let values: Vec<T> = serde_json::from_str(json)?;
        self.insert_many(values);
        Ok(())
    }
}
