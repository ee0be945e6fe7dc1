use alloc::vec::Vec;

use log::debug;

use crate::access::{Field, FieldMut, exported_fields_mut, index_of, not_struct};
use crate::encode::walk::entries;
use crate::encode::{DEFAULT_TAG_KEY, StructMap, Value};
use crate::ops::Struct;
use crate::{Error, Reflect};

// -----------------------------------------------------------------------------
// Encoder

/// Encodes one struct into maps, value lists and name lists.
///
/// The root is a struct, or a `Box`/`Some` holding one. Deeper indirection
/// is rejected with [`Error::NotStruct`].
///
/// For every exported field, in declaration order, the tag under the tag
/// key (default [`DEFAULT_TAG_KEY`]) decides:
///
/// - `-` as name: the field is skipped.
/// - a non-empty name: the key, instead of the declared field name.
/// - `omitnested`: a nested struct is kept as a raw value.
/// - `string`: the value is converted to text when it has a text form.
/// - `omitempty`: the entry is skipped when the value is empty, or when a
///   nested struct encodes to no entries.
///
/// A nested struct without exported fields is always a raw value.
///
/// # Examples
///
/// ```
/// use ws_structs::{Encoder, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Server {
///     pub name: String,
///     #[reflect(map = "id,string")]
///     pub id: u32,
///     #[reflect(map = "-")]
///     pub password: String,
/// }
///
/// let server = Server {
///     name: String::from("gopher"),
///     id: 42,
///     password: String::from("hunter2"),
/// };
/// let encoder = Encoder::new(&server).unwrap();
///
/// assert_eq!(encoder.name(), "Server");
/// assert_eq!(encoder.names(), ["name", "id"]);
///
/// let map = encoder.to_map();
/// assert_eq!(map["name"].as_text(), Some("gopher"));
/// assert_eq!(map["id"].as_text(), Some("42"));
/// assert!(!map.contains_key("password"));
/// ```
#[derive(Clone, Copy)]
pub struct Encoder<'a> {
    value: &'a dyn Struct,
    tag_key: &'a str,
}

impl<'a> Encoder<'a> {
    /// Creates an encoder for `value`, with the default tag key.
    pub fn new(value: &'a dyn Reflect) -> Result<Self, Error> {
        match value.reflect_ref().deref_struct() {
            Some(value) => Ok(Self::from_struct(value)),
            None => Err(not_struct(value)),
        }
    }

    /// Creates an encoder for a struct, with the default tag key.
    #[inline]
    pub const fn from_struct(value: &'a dyn Struct) -> Self {
        Self {
            value,
            tag_key: DEFAULT_TAG_KEY,
        }
    }

    /// Replaces the key under which tags are read.
    ///
    /// ```
    /// use ws_structs::{Encoder, derive::Reflect};
    ///
    /// #[derive(Reflect)]
    /// struct Foo {
    ///     #[reflect(map = "m", json = "j")]
    ///     pub a: u8,
    /// }
    ///
    /// let foo = Foo { a: 1 };
    /// let encoder = Encoder::new(&foo).unwrap();
    ///
    /// assert_eq!(encoder.names(), ["m"]);
    /// assert_eq!(encoder.with_tag_key("json").names(), ["j"]);
    /// assert_eq!(encoder.with_tag_key("yaml").names(), ["a"]);
    /// ```
    #[inline]
    pub const fn with_tag_key(mut self, tag_key: &'a str) -> Self {
        self.tag_key = tag_key;
        self
    }

    #[inline]
    pub const fn tag_key(&self) -> &'a str {
        self.tag_key
    }

    /// Returns the encoded struct.
    #[inline]
    pub const fn as_struct(&self) -> &'a dyn Struct {
        self.value
    }

    #[inline]
    fn nested(&self, value: &'a dyn Struct) -> Self {
        Self {
            value,
            tag_key: self.tag_key,
        }
    }

    /// Returns the declared type name of the struct.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.value.struct_info().type_name()
    }

    /// Encodes the struct into a new map.
    pub fn to_map(&self) -> StructMap<'a> {
        let mut map = StructMap::with_capacity(self.value.field_len());
        self.fill_map(&mut map);
        map
    }

    /// Encodes the struct into `map`. Existing keys are overwritten.
    pub fn fill_map(&self, map: &mut StructMap<'a>) {
        for entry in entries(self.value, self.tag_key) {
            let value = match entry.nested {
                Some(nested) => {
                    let nested = self.nested(nested).to_map();
                    if entry.tag.omit_empty() && (entry.value.is_zero() || nested.is_empty()) {
                        continue;
                    }
                    Value::Map(nested)
                }
                None => {
                    if entry.tag.omit_empty() && entry.value.is_zero() {
                        continue;
                    }
                    entry.leaf_value()
                }
            };
            if map.insert(entry.key, value).is_some() {
                debug!("structs: key `{}` overwritten while encoding `{}`", entry.key, self.name());
            }
        }
    }

    /// Returns the values [`to_map`](Self::to_map) would produce, in order,
    /// with the values of nested structs spliced in place.
    pub fn values(&self) -> Vec<Value<'a>> {
        let mut values = Vec::with_capacity(self.value.field_len());
        self.collect_values(&mut values);
        values
    }

    fn collect_values(&self, values: &mut Vec<Value<'a>>) {
        for entry in entries(self.value, self.tag_key) {
            if entry.is_omitted(self.tag_key) {
                continue;
            }
            match entry.nested {
                Some(nested) => self.nested(nested).collect_values(values),
                None => values.push(entry.leaf_value()),
            }
        }
    }

    /// Returns the keys [`to_map`](Self::to_map) would produce, in order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(self.value.field_len());
        for entry in entries(self.value, self.tag_key) {
            if !entry.is_omitted(self.tag_key) && !names.contains(&entry.key) {
                names.push(entry.key);
            }
        }
        names
    }

    /// Returns accessors for the exported fields, tags not applied.
    pub fn fields(&self) -> Vec<Field<'a>> {
        self.value
            .exported_fields()
            .map(|(info, value)| Field::new(info, value))
            .collect()
    }

    /// Returns the accessor of the field named `name`, private or not.
    pub fn field(&self, name: &str) -> Result<Field<'a>, Error> {
        let index = index_of(self.value, name)?;
        let info = &self.value.struct_info().fields()[index];
        match self.value.field_at(index) {
            Some(value) => Ok(Field::new(info, value)),
            None => Err(Error::FieldNotFound { name: name.into() }),
        }
    }

    /// Like [`field`](Self::field), but panics if there is no such field.
    #[track_caller]
    pub fn must_field(&self, name: &str) -> Field<'a> {
        match self.field(name) {
            Ok(field) => field,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns `true` if any exported, non-ignored field is empty.
    ///
    /// Nested structs are inspected field by field unless tagged
    /// `omitnested`. `false` when there is no such field.
    pub fn has_zero(&self) -> bool {
        entries(self.value, self.tag_key).any(|entry| match entry.nested {
            Some(nested) => self.nested(nested).has_zero(),
            None => entry.value.is_zero(),
        })
    }

    /// Returns `true` if all exported, non-ignored fields are empty.
    ///
    /// Nested structs are inspected field by field unless tagged
    /// `omitnested`. `true` when there is no such field.
    pub fn is_zero(&self) -> bool {
        entries(self.value, self.tag_key).all(|entry| match entry.nested {
            Some(nested) => self.nested(nested).is_zero(),
            None => entry.value.is_zero(),
        })
    }
}

// -----------------------------------------------------------------------------
// EncoderMut

/// An [`Encoder`] over a mutable borrow, adding settable field accessors.
///
/// # Examples
///
/// ```
/// use ws_structs::{EncoderMut, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: u8,
///     pub b: String,
/// }
///
/// let mut foo = Foo { a: 1, b: String::from("x") };
/// let mut encoder = EncoderMut::new(&mut foo).unwrap();
///
/// assert!(!encoder.has_zero());
/// for mut field in encoder.fields_mut() {
///     field.set_zero().unwrap();
/// }
/// assert!(encoder.is_zero());
/// ```
pub struct EncoderMut<'a> {
    value: &'a mut dyn Struct,
    tag_key: &'a str,
}

impl<'a> EncoderMut<'a> {
    /// Creates an encoder for `value`, with the default tag key.
    pub fn new(value: &'a mut dyn Reflect) -> Result<Self, Error> {
        let err = not_struct(value);
        let value = value.reflect_mut().deref_struct().ok_or(err)?;
        Ok(Self::from_struct(value))
    }

    #[inline]
    pub fn from_struct(value: &'a mut dyn Struct) -> Self {
        Self {
            value,
            tag_key: DEFAULT_TAG_KEY,
        }
    }

    #[inline]
    pub fn with_tag_key(mut self, tag_key: &'a str) -> Self {
        self.tag_key = tag_key;
        self
    }

    /// Returns a read-only encoder over the same struct.
    #[inline]
    pub fn as_encoder(&self) -> Encoder<'_> {
        Encoder::from_struct(&*self.value).with_tag_key(self.tag_key)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.as_encoder().name()
    }

    #[inline]
    pub fn to_map(&self) -> StructMap<'_> {
        self.as_encoder().to_map()
    }

    #[inline]
    pub fn fill_map<'s>(&'s self, map: &mut StructMap<'s>) {
        self.as_encoder().fill_map(map);
    }

    #[inline]
    pub fn values(&self) -> Vec<Value<'_>> {
        self.as_encoder().values()
    }

    #[inline]
    pub fn names(&self) -> Vec<&'static str> {
        self.as_encoder().names()
    }

    #[inline]
    pub fn fields(&self) -> Vec<Field<'_>> {
        self.as_encoder().fields()
    }

    #[inline]
    pub fn field(&self, name: &str) -> Result<Field<'_>, Error> {
        self.as_encoder().field(name)
    }

    #[inline]
    #[track_caller]
    pub fn must_field(&self, name: &str) -> Field<'_> {
        self.as_encoder().must_field(name)
    }

    #[inline]
    pub fn has_zero(&self) -> bool {
        self.as_encoder().has_zero()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.as_encoder().is_zero()
    }

    /// Returns settable accessors for the exported fields.
    #[inline]
    pub fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        exported_fields_mut(&mut *self.value)
    }

    /// Consuming version of [`fields_mut`](Self::fields_mut).
    #[inline]
    pub fn into_fields_mut(self) -> Vec<FieldMut<'a>> {
        exported_fields_mut(self.value)
    }

    /// Returns the settable accessor of the field named `name`.
    pub fn field_mut(&mut self, name: &str) -> Result<FieldMut<'_>, Error> {
        let index = index_of(&*self.value, name)?;
        let info = &self.value.struct_info().fields()[index];
        match self.value.field_at_mut(index) {
            Some(value) => Ok(FieldMut::new(info, value)),
            None => Err(Error::FieldNotFound { name: name.into() }),
        }
    }

    #[track_caller]
    pub fn must_field_mut(&mut self, name: &str) -> FieldMut<'_> {
        match self.field_mut(name) {
            Ok(field) => field,
            Err(err) => panic!("{err}"),
        }
    }
}
