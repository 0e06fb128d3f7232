//! Owned JSON containers: [`Array`] (ordered sequence) and [`Object`] (key-ordered map).
//!
//! Both are thin wrappers around `Vec` and `BTreeMap` that own their children
//! and report lookup misses as [`JsonError`]s instead of panicking.

use crate::error::{JsonError, Result};
use crate::types::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// An ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Array(Vec<Value>);

impl Array {
    pub fn new() -> Self {
        Array(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.0.get_mut(index)
    }

    /// Element at `index`, or `IndexOutOfBounds`.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let len = self.0.len();
        self.0
            .get(index)
            .ok_or(JsonError::IndexOutOfBounds { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.0.len();
        self.0
            .get_mut(index)
            .ok_or(JsonError::IndexOutOfBounds { index, len })
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.0.pop()
    }

    /// Insert at `index`, shifting later elements right. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let len = self.0.len();
        if index > len {
            return Err(JsonError::IndexOutOfBounds { index, len });
        }
        self.0.insert(index, value.into());
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn erase(&mut self, index: usize) -> Result<Value> {
        let len = self.0.len();
        if index >= len {
            return Err(JsonError::IndexOutOfBounds { index, len });
        }
        Ok(self.0.remove(index))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Forward iterator; call `.rev()` for reverse order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(values)
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl std::ops::Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.0[index]
    }
}

impl std::ops::IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.0[index]
    }
}

/// A mapping from unique string keys to values, iterated in key order.
///
/// Key order only makes serialization deterministic; it carries no meaning.
/// Inserting an existing key replaces its value (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Object(BTreeMap<String, Value>);

impl Object {
    pub fn new() -> Self {
        Object(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Member under `key`, or `MissingKey`.
    pub fn at(&self, key: &str) -> Result<&Value> {
        self.0
            .get(key)
            .ok_or_else(|| JsonError::MissingKey(key.to_string()))
    }

    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.0
            .get_mut(key)
            .ok_or_else(|| JsonError::MissingKey(key.to_string()))
    }

    /// Insert or replace; returns the previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Mutable slot for `key`, inserting `null` first if the key is absent.
    pub fn entry_or_null(&mut self, key: &str) -> &mut Value {
        self.0.entry(key.to_string()).or_default()
    }

    /// Remove `key` and return its value.
    pub fn erase(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterate members in key order; call `.rev()` for reverse order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl From<BTreeMap<String, Value>> for Object {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Object(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Object {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = btree_map::IterMut<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl std::ops::Index<&str> for Object {
    type Output = Value;

    /// Panics if `key` is absent, like `BTreeMap` indexing.
    fn index(&self, key: &str) -> &Value {
        &self.0[key]
    }
}
