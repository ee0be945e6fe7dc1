use alloc::boxed::Box;
use alloc::collections::{BTreeMap, VecDeque};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap as HashbrownMap;

use crate::Reflect;
use crate::ops::{List, Map};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Lists

// `$view` is the type owning the element accessors, `[T]` for `Vec`.
macro_rules! impl_reflect_for_list {
    ($ty:ident, $view:ty) => {
        impl<T: Reflect> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List => List);

            #[inline]
            fn is_zero(&self) -> bool {
                $ty::is_empty(self)
            }

            #[inline]
            fn set_zero(&mut self) {
                $ty::clear(self);
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(List::iter(self)).finish()
            }
        }

        impl<T: Reflect> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                <$view>::get(self, index).map(Reflect::as_reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                <$view>::get_mut(self, index).map(Reflect::as_reflect_mut)
            }

            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
                Box::new(<$view>::iter(self).map(Reflect::as_reflect))
            }
        }
    };
}

impl_reflect_for_list!(Vec, [T]);
impl_reflect_for_list!(VecDeque, VecDeque<T>);

// -----------------------------------------------------------------------------
// Maps

macro_rules! impl_reflect_for_map {
    ($ty:ident<K, V $(, $s:ident)?> $(where $($bound:tt)+)?) => {
        impl<K: Reflect, V: Reflect $(, $s)?> Reflect for $ty<K, V $(, $s)?>
        $(where $($bound)+)?
        {
            impl_reflect_cast_fn!(Map => Map);

            #[inline]
            fn is_zero(&self) -> bool {
                $ty::is_empty(self)
            }

            #[inline]
            fn set_zero(&mut self) {
                $ty::clear(self);
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(Map::iter(self)).finish()
            }
        }

        impl<K: Reflect, V: Reflect $(, $s)?> Map for $ty<K, V $(, $s)?>
        $(where $($bound)+)?
        {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
                Box::new(
                    $ty::iter(self)
                        .map(|(key, value)| (key.as_reflect(), value.as_reflect())),
                )
            }
        }
    };
}

impl_reflect_for_map!(BTreeMap<K, V>);

#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
impl_reflect_for_map!(HashMap<K, V, S> where S: Send + Sync + 'static);

impl_reflect_for_map!(HashbrownMap<K, V, S> where S: Send + Sync + 'static);

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, VecDeque};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::ReflectRef;

    #[test]
    fn list_view() {
        let mut list = vec![1_u8, 2, 3];
        assert_eq!(list.reflect_kind(), ReflectKind::List);
        assert!(!list.is_zero());

        let ReflectRef::List(view) = list.reflect_ref() else {
            panic!("expected a list");
        };
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(2).unwrap().downcast_ref::<u8>(), Some(&3));
        assert!(view.get(3).is_none());

        list.set_zero();
        assert!(list.is_zero());
        assert!(VecDeque::<u8>::new().is_zero());
        assert!(Vec::<String>::new().is_zero());
    }

    #[test]
    fn map_view() {
        let mut map = BTreeMap::new();
        map.insert(String::from("b"), 2_i32);
        map.insert(String::from("a"), 1_i32);

        let ReflectRef::Map(view) = map.reflect_ref() else {
            panic!("expected a map");
        };
        let keys: Vec<&str> = view
            .iter()
            .map(|(key, _)| key.downcast_ref::<String>().unwrap().as_str())
            .collect();
        assert_eq!(keys, ["a", "b"]);

        map.set_zero();
        assert!(map.is_zero());
    }

    #[test]
    fn collection_debug() {
        let list = vec![1_u8, 2];
        assert_eq!(alloc::format!("{:?}", list.as_reflect()), "[1, 2]");

        let map = BTreeMap::from([("k", true)]);
        assert_eq!(alloc::format!("{:?}", map.as_reflect()), "{\"k\": true}");
    }
}
