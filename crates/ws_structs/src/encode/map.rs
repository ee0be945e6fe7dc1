use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use core::hash::BuildHasher;
use core::ops::Index;

use foldhash::fast::FixedState;
use hashbrown::HashTable;

use crate::encode::Value;

// -----------------------------------------------------------------------------
// Hashing

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5D8A_3C41_E0F2_9B67);

#[inline]
fn hash_key(key: &str) -> u64 {
    FIXED_HASH_STATE.hash_one(key)
}

// -----------------------------------------------------------------------------
// StructMap

/// The mapping produced by the encoder.
///
/// Entries keep insertion order, which for an encoded struct is field
/// declaration order. Lookup by key is hashed. Inserting an existing key
/// replaces the value and keeps the entry at its original position.
///
/// # Examples
///
/// ```
/// use ws_structs::{StructMap, Value};
///
/// let mut map = StructMap::new();
/// map.insert("b", Value::from(String::from("1")));
/// map.insert("a", Value::from(String::from("2")));
/// map.insert("b", Value::from(String::from("3")));
///
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
/// assert_eq!(map["b"].as_text(), Some("3"));
/// assert!(map.get("c").is_none());
/// ```
#[derive(Default)]
pub struct StructMap<'a> {
    entries: Vec<(Cow<'static, str>, Value<'a>)>,
    index: HashTable<usize>,
}

impl<'a> StructMap<'a> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with space for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn find(&self, key: &str) -> Option<usize> {
        let entries = &self.entries;
        self.index
            .find(hash_key(key), |&i| entries[i].0 == key)
            .copied()
    }

    /// Inserts `value` under `key`, returning the replaced value if any.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: Value<'a>) -> Option<Value<'a>> {
        let key = key.into();
        if let Some(i) = self.find(&key) {
            return Some(core::mem::replace(&mut self.entries[i].1, value));
        }

        let hash = hash_key(&key);
        let i = self.entries.len();
        self.entries.push((key, value));
        let entries = &self.entries;
        self.index
            .insert_unique(hash, i, |&i| hash_key(&entries[i].0));
        None
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.find(key).map(|i| &self.entries[i].1)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<'a>> {
        self.find(key).map(|i| &mut self.entries[i].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| &**key)
    }

    /// Returns the values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value<'a>> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Returns the entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value<'a>)> + '_ {
        self.entries.iter().map(|(key, value)| (&**key, value))
    }
}

impl<'a> IntoIterator for StructMap<'a> {
    type Item = (Cow<'static, str>, Value<'a>);
    type IntoIter = alloc::vec::IntoIter<Self::Item>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> Index<&str> for StructMap<'a> {
    type Output = Value<'a>;

    #[track_caller]
    fn index(&self, key: &str) -> &Value<'a> {
        match self.get(key) {
            Some(value) => value,
            None => panic!("structs: key `{key}` not found in map"),
        }
    }
}

impl fmt::Debug for StructMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::StructMap;
    use crate::Value;

    #[test]
    fn overwrite_keeps_position() {
        let mut map = StructMap::new();
        assert!(map.insert("x", Value::Ref(&1_u8)).is_none());
        assert!(map.insert(String::from("y"), Value::Ref(&2_u8)).is_none());

        let old = map.insert("x", Value::Ref(&3_u8)).unwrap();
        assert_eq!(old.downcast_ref::<u8>(), Some(&1));

        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(map["x"].downcast_ref::<u8>(), Some(&3));
        assert!(map.contains_key("y"));
        assert!(!map.contains_key("Y"));
    }

    #[test]
    fn many_keys() {
        let mut map = StructMap::with_capacity(4);
        for i in 0..100_u32 {
            map.insert(alloc::format!("k{i}"), Value::Text(alloc::format!("{i}")));
        }
        assert_eq!(map.len(), 100);
        assert_eq!(map["k57"].as_text(), Some("57"));
        assert_eq!(map.into_iter().nth(3).unwrap().0, "k3");
    }
}
