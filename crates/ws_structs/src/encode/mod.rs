//! Tag-driven encoding of structs into maps, value lists and name lists.
//!
//! [`Encoder`] and [`EncoderMut`] carry the full operation set, the free
//! functions of this module are shortcuts using [`DEFAULT_TAG_KEY`].
//!
//! ```
//! use ws_structs::derive::Reflect;
//!
//! #[derive(Reflect)]
//! struct Server {
//!     #[reflect(map = "Name")]
//!     pub name: String,
//!     #[reflect(map = "ID")]
//!     pub id: i32,
//!     #[reflect(map = "Enabled")]
//!     pub enabled: bool,
//! }
//!
//! let server = Server { name: String::from("gopher"), id: 123456, enabled: true };
//!
//! assert!(ws_structs::is_struct(&server));
//! assert_eq!(ws_structs::names(&server).unwrap(), ["Name", "ID", "Enabled"]);
//!
//! let map = ws_structs::to_map(&server).unwrap();
//! assert_eq!(map["ID"].downcast_ref::<i32>(), Some(&123456));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod encoder;
mod map;
mod value;
mod walk;

// -----------------------------------------------------------------------------
// Exports

pub use encoder::{Encoder, EncoderMut};
pub use map::StructMap;
pub use value::Value;

use alloc::vec::Vec;

use crate::access::Field;
use crate::{Error, Reflect};

/// The tag key read when none is given.
pub const DEFAULT_TAG_KEY: &str = "map";

// -----------------------------------------------------------------------------
// Shortcuts

/// Encodes `value` into a map, see [`Encoder::to_map`].
#[inline]
pub fn to_map(value: &dyn Reflect) -> Result<StructMap<'_>, Error> {
    Ok(Encoder::new(value)?.to_map())
}

/// Encodes `value` into `map`, see [`Encoder::fill_map`].
#[inline]
pub fn fill_map<'a>(value: &'a dyn Reflect, map: &mut StructMap<'a>) -> Result<(), Error> {
    Encoder::new(value)?.fill_map(map);
    Ok(())
}

/// See [`Encoder::values`].
#[inline]
pub fn values(value: &dyn Reflect) -> Result<Vec<Value<'_>>, Error> {
    Ok(Encoder::new(value)?.values())
}

/// See [`Encoder::names`].
#[inline]
pub fn names(value: &dyn Reflect) -> Result<Vec<&'static str>, Error> {
    Ok(Encoder::new(value)?.names())
}

/// See [`Encoder::fields`].
#[inline]
pub fn fields(value: &dyn Reflect) -> Result<Vec<Field<'_>>, Error> {
    Ok(Encoder::new(value)?.fields())
}

/// See [`Encoder::name`].
#[inline]
pub fn name(value: &dyn Reflect) -> Result<&'static str, Error> {
    Ok(Encoder::new(value)?.name())
}

/// See [`Encoder::has_zero`].
#[inline]
pub fn has_zero(value: &dyn Reflect) -> Result<bool, Error> {
    Ok(Encoder::new(value)?.has_zero())
}

/// See [`Encoder::is_zero`].
#[inline]
pub fn is_zero(value: &dyn Reflect) -> Result<bool, Error> {
    Ok(Encoder::new(value)?.is_zero())
}

/// Returns `true` if `value` is a struct, or a `Box`/`Some` holding one.
#[inline]
pub fn is_struct(value: &dyn Reflect) -> bool {
    value.reflect_ref().deref_struct().is_some()
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::info::ReflectKind;
    use crate::{Encoder, EncoderMut, Error, StructMap, Value, derive::Reflect};

    #[derive(Reflect, Default)]
    struct Server {
        #[reflect(map = "Name")]
        pub name: String,
        #[reflect(map = "ID")]
        pub id: i32,
        #[reflect(map = "Enabled")]
        pub enabled: bool,
    }

    fn gopher() -> Server {
        Server {
            name: String::from("gopher"),
            id: 123456,
            enabled: true,
        }
    }

    #[derive(Reflect, Default)]
    struct Plain {
        pub a: u8,
        b: u8,
        pub c: String,
        pub(crate) d: u8,
    }

    #[derive(Reflect, Default)]
    struct Tagged {
        #[reflect(map = "id,string")]
        pub id: u32,
        #[reflect(map = "desc,omitempty")]
        pub desc: String,
        #[reflect(map = "-")]
        pub password: String,
        #[reflect(map = "bytes,string")]
        pub bytes: Vec<u8>,
    }

    /// A struct without exported fields, encoded as a leaf.
    #[derive(Reflect, Default)]
    struct Stamp {
        secs: u64,
    }

    #[derive(Reflect, Default)]
    struct Nested {
        pub server: Server,
        #[reflect(map = "raw,omitnested")]
        pub raw: Server,
        pub boxed: Box<Server>,
        pub some: Option<Server>,
        pub none: Option<Server>,
        pub stamp: Stamp,
    }

    #[test]
    fn untagged_fields_in_order() {
        let plain = Plain { a: 1, b: 2, c: String::from("c"), d: 4 };
        let map = super::to_map(&plain).unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(map["a"].downcast_ref::<u8>(), Some(&1));
        assert_eq!(super::fields(&plain).unwrap().len(), 2);
        assert_eq!(super::name(&plain).unwrap(), "Plain");
    }

    #[test]
    fn basic_scenario() {
        let server = gopher();
        let encoder = Encoder::new(&server).unwrap();

        let map = encoder.to_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["Name"].as_text(), Some("gopher"));
        assert_eq!(map["ID"].downcast_ref::<i32>(), Some(&123456));
        assert_eq!(map["Enabled"].downcast_ref::<bool>(), Some(&true));

        let values = encoder.values();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].as_text(), Some("gopher"));
        assert_eq!(values[1].downcast_ref::<i32>(), Some(&123456));
        assert_eq!(values[2].downcast_ref::<bool>(), Some(&true));

        assert_eq!(encoder.names(), ["Name", "ID", "Enabled"]);
        assert!(!encoder.has_zero());
        assert!(!encoder.is_zero());
    }

    #[test]
    fn tag_options() {
        let tagged = Tagged {
            id: 42,
            desc: String::new(),
            password: String::from("hunter2"),
            bytes: vec![1, 2],
        };
        let map = super::to_map(&tagged).unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), ["id", "bytes"]);
        assert!(matches!(&map["id"], Value::Text(text) if text == "42"));
        // No text form, the raw value is kept.
        assert_eq!(map["bytes"].downcast_ref::<Vec<u8>>(), Some(&vec![1, 2]));

        let values = super::values(&tagged).unwrap();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v.as_text() != Some("hunter2")));
        assert_eq!(super::names(&tagged).unwrap(), ["id", "bytes"]);
    }

    #[test]
    fn omitempty_follows_emptiness() {
        let mut tagged = Tagged {
            desc: String::from("a server"),
            ..Tagged::default()
        };
        assert_eq!(super::names(&tagged).unwrap(), ["id", "desc", "bytes"]);

        EncoderMut::new(&mut tagged)
            .unwrap()
            .must_field_mut("desc")
            .set_zero()
            .unwrap();
        assert!(!super::to_map(&tagged).unwrap().contains_key("desc"));

        // Resetting an empty field changes nothing.
        EncoderMut::new(&mut tagged)
            .unwrap()
            .must_field_mut("desc")
            .set_zero()
            .unwrap();
        assert_eq!(super::names(&tagged).unwrap(), ["id", "bytes"]);
    }

    #[test]
    fn nested_structs() {
        let nested = Nested {
            server: gopher(),
            raw: gopher(),
            boxed: Box::new(gopher()),
            some: Some(gopher()),
            none: None,
            stamp: Stamp { secs: 9 },
        };
        let map = super::to_map(&nested).unwrap();

        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            ["server", "raw", "boxed", "some", "none", "stamp"]
        );
        let server = map["server"].as_map().unwrap();
        assert_eq!(server["Name"].as_text(), Some("gopher"));
        assert!(map["boxed"].as_map().is_some());
        assert!(map["some"].as_map().is_some());

        assert!(map["raw"].downcast_ref::<Server>().is_some());
        assert_eq!(map["none"].downcast_ref::<Option<Server>>().map(Option::is_none), Some(true));
        assert_eq!(map["stamp"].downcast_ref::<Stamp>().map(|s| s.secs), Some(9));

        // server(3) + raw + boxed(3) + some(3) + none + stamp
        let values = super::values(&nested).unwrap();
        assert_eq!(values.len(), 12);
        assert_eq!(values[3].downcast_ref::<Server>().map(|s| s.id), Some(123456));
        assert_eq!(super::names(&nested).unwrap().len(), map.len());
    }

    #[test]
    fn omitempty_on_nested() {
        #[derive(Reflect, Default)]
        struct Hidden {
            #[reflect(map = "-")]
            pub x: u8,
        }

        #[derive(Reflect, Default)]
        struct Outer {
            #[reflect(map = "server,omitempty")]
            pub server: Server,
            #[reflect(map = "hidden,omitempty")]
            pub hidden: Hidden,
            #[reflect(map = "boxed,omitempty")]
            pub boxed: Option<Box<Server>>,
            pub last: u8,
        }

        let mut outer = Outer {
            hidden: Hidden { x: 5 },
            ..Outer::default()
        };
        let encoder = Encoder::new(&outer).unwrap();
        assert_eq!(encoder.names(), ["last"]);
        assert_eq!(encoder.to_map().keys().collect::<Vec<_>>(), ["last"]);
        assert_eq!(encoder.values().len(), 1);

        outer.server.enabled = true;
        outer.boxed = Some(Box::new(gopher()));
        let encoder = Encoder::new(&outer).unwrap();
        assert_eq!(encoder.names(), ["server", "boxed", "last"]);
        // `Option<Box<_>>` is two levels deep, a raw value.
        assert!(encoder.to_map()["boxed"].as_reflect().is_some());
        assert_eq!(encoder.values().len(), 3 + 1 + 1);
    }

    #[test]
    fn zero_predicates() {
        let mut server = Server::default();
        assert!(super::is_zero(&server).unwrap());
        assert!(super::has_zero(&server).unwrap());

        server = gopher();
        assert!(!super::has_zero(&server).unwrap());
        server.enabled = false;
        assert!(super::has_zero(&server).unwrap());
        assert!(!super::is_zero(&server).unwrap());

        let nested = Nested::default();
        assert!(super::is_zero(&nested).unwrap());

        let stamp = Stamp { secs: 1 };
        assert!(!super::has_zero(&stamp).unwrap());
        assert!(super::is_zero(&stamp).unwrap());

        #[derive(Reflect)]
        struct Unit;
        assert!(super::is_zero(&Unit).unwrap());
        assert!(!super::has_zero(&Unit).unwrap());
        assert!(super::to_map(&Unit).unwrap().is_empty());
    }

    #[test]
    fn leaf_struct_emptiness() {
        use crate::Reflect as _;

        #[derive(Reflect)]
        struct Event {
            pub name: String,
            #[reflect(map = "at,omitempty")]
            pub at: Stamp,
        }

        let mut event = Event { name: String::from("x"), at: Stamp { secs: 9 } };
        assert!(!event.at.is_zero());
        assert_eq!(super::names(&event).unwrap(), ["name", "at"]);
        assert_eq!(super::to_map(&event).unwrap()["at"].downcast_ref::<Stamp>().map(|s| s.secs), Some(9));
        assert!(!super::has_zero(&event).unwrap());

        event.at.set_zero();
        assert!(event.at.is_zero());
        assert_eq!(super::names(&event).unwrap(), ["name"]);
        assert!(super::has_zero(&event).unwrap());
        assert!(!super::is_zero(&event).unwrap());
    }

    #[test]
    fn ignored_fields_skip_predicates() {
        #[derive(Reflect)]
        struct Partial {
            pub a: u8,
            #[reflect(map = "-")]
            pub b: u8,
        }

        let partial = Partial { a: 1, b: 0 };
        assert!(!super::has_zero(&partial).unwrap());
    }

    #[test]
    fn root_normalization() {
        let server = gopher();
        assert!(super::is_struct(&server));
        assert!(super::is_struct(&Box::new(gopher())));
        assert!(super::is_struct(&Some(gopher())));
        assert_eq!(super::names(&Box::new(gopher())).unwrap().len(), 3);

        assert!(!super::is_struct(&Box::new(Box::new(gopher()))));
        assert!(!super::is_struct(&None::<Server>));
        assert!(!super::is_struct(&5_i32));

        assert_eq!(
            super::to_map(&5_i32).unwrap_err(),
            Error::NotStruct {
                type_name: "i32",
                kind: ReflectKind::Int
            }
        );
        assert!(matches!(
            super::values(&Box::new(Box::new(gopher()))),
            Err(Error::NotStruct { kind: ReflectKind::Pointer, .. })
        ));
        assert!(matches!(
            super::is_zero(&None::<Server>),
            Err(Error::NotStruct { kind: ReflectKind::Option, .. })
        ));
        assert!(matches!(
            super::names(&vec![gopher()]),
            Err(Error::NotStruct { kind: ReflectKind::List, .. })
        ));
    }

    #[test]
    fn names_match_map_keys_with_duplicates() {
        #[derive(Reflect)]
        struct Dup {
            #[reflect(map = "k")]
            pub a: u8,
            pub b: u8,
            #[reflect(map = "k")]
            pub c: u8,
        }

        let dup = Dup { a: 1, b: 2, c: 3 };
        let map = super::to_map(&dup).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["k", "b"]);
        assert_eq!(map["k"].downcast_ref::<u8>(), Some(&3));
        assert_eq!(super::names(&dup).unwrap(), ["k", "b"]);
    }

    #[test]
    fn fill_existing_map() {
        let server = gopher();
        let other = String::from("kept");

        let mut map = StructMap::new();
        map.insert("ID", Value::Ref(&other));
        map.insert("extra", Value::Ref(&other));
        super::fill_map(&server, &mut map).unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), ["ID", "extra", "Name", "Enabled"]);
        assert_eq!(map["ID"].downcast_ref::<i32>(), Some(&123456));
        assert_eq!(map["extra"].as_text(), Some("kept"));
    }

    #[test]
    fn custom_tag_key() {
        #[derive(Reflect)]
        struct Multi {
            #[reflect(map = "m", json = "j,omitempty")]
            pub a: u8,
            #[reflect(json = "-")]
            pub b: u8,
        }

        let multi = Multi { a: 0, b: 1 };
        let encoder = Encoder::new(&multi).unwrap();
        assert_eq!(encoder.names(), ["m", "b"]);

        let json = encoder.with_tag_key("json");
        assert_eq!(json.tag_key(), "json");
        assert!(json.names().is_empty());
        assert!(json.has_zero() && json.is_zero());
    }

    #[test]
    fn mutable_encoder() {
        let mut server = gopher();
        let mut encoder = EncoderMut::new(&mut server).unwrap();

        assert_eq!(encoder.name(), "Server");
        assert_eq!(encoder.names(), ["Name", "ID", "Enabled"]);
        encoder.must_field_mut("id").set(7_i32).unwrap();
        assert_eq!(
            encoder.field_mut("nope").err(),
            Some(Error::FieldNotFound { name: String::from("nope") })
        );

        for mut field in encoder.fields_mut() {
            if field.kind() == ReflectKind::Bool {
                field.set(false).unwrap();
            }
        }
        assert_eq!(encoder.to_map()["ID"].downcast_ref::<i32>(), Some(&7));
        assert!(encoder.has_zero());
        assert!(!server.enabled);
    }

    #[test]
    fn generic_struct() {
        #[derive(Reflect)]
        struct Wrapper<T> {
            pub inner: T,
        }

        let wrapper = Wrapper { inner: gopher() };
        assert_eq!(super::name(&wrapper).unwrap(), "Wrapper");
        let map = super::to_map(&wrapper).unwrap();
        assert_eq!(map["inner"].as_map().map(StructMap::len), Some(3));
    }
}
