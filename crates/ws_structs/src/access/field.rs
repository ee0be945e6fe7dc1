use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::access::{index_of, not_struct};
use crate::info::{NamedField, ReflectKind};
use crate::ops::Struct;
use crate::{Error, Reflect};

// -----------------------------------------------------------------------------
// Field

/// A read-only view of one struct field.
///
/// Setters always fail: with [`Error::NotExported`] for private fields, with
/// [`Error::NotSettable`] otherwise. Use [`FieldMut`](crate::FieldMut) to
/// write.
///
/// # Examples
///
/// ```
/// use ws_structs::{Encoder, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Server {
///     #[reflect(map = "id")]
///     pub id: u32,
///     secret: String,
/// }
///
/// let server = Server { id: 7, secret: String::from("hunter2") };
/// let encoder = Encoder::new(&server).unwrap();
///
/// let id = encoder.field("id").unwrap();
/// assert_eq!(id.value().unwrap().downcast_ref::<u32>(), Some(&7));
/// assert_eq!(id.tag("map"), "id");
/// assert!(!id.can_set());
///
/// let secret = encoder.field("secret").unwrap();
/// assert!(!secret.is_exported());
/// assert!(secret.value().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    info: &'static NamedField,
    value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
    /// Binds `info` to the field value.
    #[inline]
    pub const fn new(info: &'static NamedField, value: &'a dyn Reflect) -> Self {
        Self { info, value }
    }

    /// Returns the static metadata of the field.
    #[inline]
    pub const fn info(&self) -> &'static NamedField {
        self.info
    }

    /// Returns the current value, or [`Error::NotExported`].
    pub fn value(&self) -> Result<&'a dyn Reflect, Error> {
        if self.info.is_exported() {
            Ok(self.value)
        } else {
            Err(Error::NotExported {
                field: self.info.name(),
            })
        }
    }

    /// Returns the raw tag for `key`, or `""`.
    #[inline]
    pub fn tag(&self, key: &str) -> &'static str {
        self.info.tag(key)
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.info.is_exported()
    }

    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.info.is_embedded()
    }

    /// Alias of [`is_embedded`](Self::is_embedded).
    #[inline]
    pub const fn is_anonymous(&self) -> bool {
        self.info.is_embedded()
    }

    /// Always `false`, a shared borrow cannot write.
    #[inline]
    pub const fn can_set(&self) -> bool {
        false
    }

    /// Returns the kind of the current value.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        self.value.reflect_kind()
    }

    /// Returns `true` if the value is empty, or [`Error::NotExported`].
    pub fn is_zero(&self) -> Result<bool, Error> {
        self.value().map(Reflect::is_zero)
    }

    /// Always fails, see the type level documentation.
    #[inline]
    pub fn set<T: Reflect>(&self, value: T) -> Result<(), Error> {
        self.set_boxed(value.into_boxed_reflect())
    }

    /// Always fails, see the type level documentation.
    pub fn set_boxed(&self, _value: Box<dyn Reflect>) -> Result<(), Error> {
        self.value()?;
        Err(Error::NotSettable {
            field: self.info.name(),
        })
    }

    /// Always fails, see the type level documentation.
    pub fn set_zero(&self) -> Result<(), Error> {
        self.value()?;
        Err(Error::NotSettable {
            field: self.info.name(),
        })
    }

    /// Returns the struct held by this field, following one `Box`/`Some`.
    fn as_struct(&self) -> Result<&'a dyn Struct, Error> {
        let value = self.value()?;
        value.reflect_ref().deref_struct().ok_or_else(|| not_struct(value))
    }

    /// Returns accessors for the exported fields of the nested struct.
    ///
    /// Fails with [`Error::NotExported`] on private fields and
    /// [`Error::NotStruct`] if the value is not a struct.
    pub fn fields(&self) -> Result<Vec<Field<'a>>, Error> {
        let value = self.as_struct()?;
        Ok(value
            .exported_fields()
            .map(|(info, value)| Field::new(info, value))
            .collect())
    }

    /// Returns the accessor of the nested field named `name`.
    ///
    /// Private nested fields are found too; their value stays guarded.
    pub fn field(&self, name: &str) -> Result<Field<'a>, Error> {
        let value = self.as_struct()?;
        let index = index_of(value, name)?;
        let info = &value.struct_info().fields()[index];
        match value.field_at(index) {
            Some(field) => Ok(Field::new(info, field)),
            None => Err(Error::FieldNotFound { name: name.into() }),
        }
    }

    /// Like [`field`](Self::field), but panics on error.
    #[track_caller]
    pub fn must_field(&self, name: &str) -> Field<'a> {
        match self.field(name) {
            Ok(field) => field,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::info::ReflectKind;
    use crate::{Encoder, Error, derive::Reflect};

    #[derive(Reflect)]
    struct Inner {
        pub port: u16,
        hidden: bool,
    }

    #[derive(Reflect)]
    struct Outer {
        #[reflect(map = "n", embedded)]
        pub inner: Inner,
        pub boxed: Box<Inner>,
        pub missing: Option<Inner>,
        pub label: String,
        private: Inner,
    }

    fn outer() -> Outer {
        Outer {
            inner: Inner { port: 80, hidden: true },
            boxed: Box::new(Inner { port: 0, hidden: false }),
            missing: None,
            label: String::from("x"),
            private: Inner { port: 1, hidden: true },
        }
    }

    #[test]
    fn metadata() {
        let outer = outer();
        let encoder = Encoder::new(&outer).unwrap();
        let inner = encoder.field("inner").unwrap();

        assert_eq!(inner.name(), "inner");
        assert_eq!(inner.tag("map"), "n");
        assert!(inner.is_embedded() && inner.is_anonymous());
        assert!(inner.is_exported());
        assert!(!inner.can_set());
        assert_eq!(inner.kind(), ReflectKind::Struct);
        assert_eq!(encoder.field("boxed").unwrap().kind(), ReflectKind::Pointer);
        assert_eq!(encoder.field("label").unwrap().is_zero(), Ok(false));
    }

    #[test]
    fn read_only() {
        let outer = outer();
        let encoder = Encoder::new(&outer).unwrap();

        let label = encoder.field("label").unwrap();
        assert_eq!(label.set(String::new()), Err(Error::NotSettable { field: "label" }));
        assert_eq!(label.set_zero(), Err(Error::NotSettable { field: "label" }));

        let private = encoder.field("private").unwrap();
        assert_eq!(private.set_zero(), Err(Error::NotExported { field: "private" }));
        assert_eq!(private.is_zero(), Err(Error::NotExported { field: "private" }));
    }

    #[test]
    fn nested() {
        let outer = outer();
        let encoder = Encoder::new(&outer).unwrap();

        let inner = encoder.field("inner").unwrap();
        let fields = inner.fields().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name(), "port");

        let port = inner.field("port").unwrap();
        assert_eq!(port.value().unwrap().downcast_ref::<u16>(), Some(&80));
        assert!(inner.field("hidden").unwrap().value().is_err());
        assert!(matches!(
            inner.field("Port"),
            Err(Error::FieldNotFound { name }) if name == "Port"
        ));

        let boxed = encoder.field("boxed").unwrap();
        assert!(boxed.must_field("port").is_zero().unwrap());
    }

    #[test]
    fn nested_errors() {
        let outer = outer();
        let encoder = Encoder::new(&outer).unwrap();

        assert!(matches!(
            encoder.field("missing").unwrap().fields(),
            Err(Error::NotStruct { kind: ReflectKind::Option, .. })
        ));
        assert!(matches!(
            encoder.field("label").unwrap().fields(),
            Err(Error::NotStruct { kind: ReflectKind::String, .. })
        ));
        assert_eq!(
            encoder.field("private").unwrap().fields().err(),
            Some(Error::NotExported { field: "private" })
        );
    }

    #[test]
    #[should_panic(expected = "field `nope` not found")]
    fn must_field_panics() {
        let outer = outer();
        let encoder = Encoder::new(&outer).unwrap();
        encoder.field("inner").unwrap().must_field("nope");
    }
}
