use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Map trait

/// A trait for type-erased map operations.
///
/// Implemented for `BTreeMap<K, V>` and, with the `std` feature,
/// `HashMap<K, V, S>`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use ws_structs::ops::Map;
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("a"), 1_u8);
/// let map: &dyn Map = &map;
///
/// assert_eq!(map.len(), 1);
/// let (key, value) = map.iter().next().unwrap();
/// assert_eq!(key.downcast_ref::<String>().unwrap(), "a");
/// assert_eq!(value.downcast_ref::<u8>(), Some(&1));
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries, in the map's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
