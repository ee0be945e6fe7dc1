use alloc::format;

use serde_core::ser::{Error, SerializeMap, SerializeSeq, SerializeStruct};
use serde_core::{Serialize, Serializer};

use crate::Reflect;
use crate::ops::{List, Map, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// ReflectSerializer

/// Serializes a reflected value.
///
/// # Examples
///
/// ```
/// use ws_structs::{derive::Reflect, serde::ReflectSerializer};
///
/// #[derive(Reflect)]
/// struct Server {
///     pub name: String,
///     pub ports: Vec<u16>,
///     secret: String,
/// }
///
/// let server = Server {
///     name: String::from("gopher"),
///     ports: vec![80, 443],
///     secret: String::from("hunter2"),
/// };
///
/// let json = serde_json::to_string(&ReflectSerializer::new(&server)).unwrap();
/// assert_eq!(json, r#"{"name":"gopher","ports":[80,443]}"#);
/// ```
#[derive(Clone, Copy)]
pub struct ReflectSerializer<'a> {
    value: &'a dyn Reflect,
}

impl<'a> ReflectSerializer<'a> {
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self { value }
    }
}

impl Serialize for ReflectSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(value) = self.value.as_serialize() {
            return erased_serde::serialize(value, serializer);
        }

        match self.value.reflect_ref() {
            ReflectRef::Struct(value) => serialize_struct(value, serializer),
            ReflectRef::List(value) => serialize_list(value, serializer),
            ReflectRef::Map(value) => serialize_map(value, serializer),
            ReflectRef::Option(Some(value)) => serializer.serialize_some(&ReflectSerializer::new(value)),
            ReflectRef::Option(None) => serializer.serialize_none(),
            ReflectRef::Pointer(value) => ReflectSerializer::new(value).serialize(serializer),
            ReflectRef::Leaf(value) => Err(S::Error::custom(format!(
                "`{}` does not support serialization",
                value.reflect_type_name(),
            ))),
        }
    }
}

fn serialize_struct<S: Serializer>(value: &dyn Struct, serializer: S) -> Result<S::Ok, S::Error> {
    let info = value.struct_info();
    let mut state = serializer.serialize_struct(info.type_name(), info.exported().count())?;
    for (field, value) in value.exported_fields() {
        state.serialize_field(field.name(), &ReflectSerializer::new(value))?;
    }
    state.end()
}

fn serialize_list<S: Serializer>(value: &dyn List, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_seq(Some(value.len()))?;
    for item in value.iter() {
        state.serialize_element(&ReflectSerializer::new(item))?;
    }
    state.end()
}

fn serialize_map<S: Serializer>(value: &dyn Map, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_map(Some(value.len()))?;
    for (key, value) in value.iter() {
        state.serialize_entry(&ReflectSerializer::new(key), &ReflectSerializer::new(value))?;
    }
    state.end()
}
