use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::access::{Field, index_of, not_struct};
use crate::info::{NamedField, ReflectKind};
use crate::ops::Struct;
use crate::{Error, Reflect};

// -----------------------------------------------------------------------------
// FieldMut

/// A settable binding to one struct field.
///
/// Offers the reads of [`Field`] plus assignment. Assignment never
/// coerces: a value of another type is rejected with
/// [`Error::TypeMismatch`] and the field keeps its prior value.
///
/// # Examples
///
/// ```
/// use ws_structs::{EncoderMut, Error, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Server {
///     pub name: String,
///     pub port: u16,
/// }
///
/// let mut server = Server { name: String::from("gopher"), port: 80 };
/// let mut encoder = EncoderMut::new(&mut server).unwrap();
///
/// let mut port = encoder.field_mut("port").unwrap();
/// assert!(port.can_set());
/// port.set(8080_u16).unwrap();
/// assert!(matches!(port.set(1_i32), Err(Error::TypeMismatch { .. })));
///
/// encoder.field_mut("name").unwrap().set_zero().unwrap();
///
/// assert_eq!(server.port, 8080);
/// assert!(server.name.is_empty());
/// ```
#[derive(Debug)]
pub struct FieldMut<'a> {
    info: &'static NamedField,
    value: &'a mut dyn Reflect,
}

impl<'a> FieldMut<'a> {
    /// Binds `info` to the field value.
    #[inline]
    pub const fn new(info: &'static NamedField, value: &'a mut dyn Reflect) -> Self {
        Self { info, value }
    }

    /// Returns a read-only view of this field.
    #[inline]
    pub fn as_field(&self) -> Field<'_> {
        Field::new(self.info, &*self.value)
    }

    /// Reborrows this binding for a shorter lifetime.
    #[inline]
    pub fn reborrow(&mut self) -> FieldMut<'_> {
        FieldMut::new(self.info, &mut *self.value)
    }

    #[inline]
    pub const fn info(&self) -> &'static NamedField {
        self.info
    }

    /// Returns the current value, or [`Error::NotExported`].
    pub fn value(&self) -> Result<&dyn Reflect, Error> {
        self.as_field().value()
    }

    /// Returns the current value mutably, or [`Error::NotExported`].
    pub fn value_mut(&mut self) -> Result<&mut dyn Reflect, Error> {
        self.check_exported()?;
        Ok(&mut *self.value)
    }

    #[inline]
    pub fn tag(&self, key: &str) -> &'static str {
        self.info.tag(key)
    }

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

    #[inline]
    pub const fn is_anonymous(&self) -> bool {
        self.info.is_embedded()
    }

    /// Returns `true` if the field is exported, the only writable kind.
    #[inline]
    pub const fn can_set(&self) -> bool {
        self.info.is_exported()
    }

    #[inline]
    pub fn kind(&self) -> ReflectKind {
        self.value.reflect_kind()
    }

    pub fn is_zero(&self) -> Result<bool, Error> {
        self.as_field().is_zero()
    }

    /// Assigns `value` to the field.
    #[inline]
    pub fn set<T: Reflect>(&mut self, value: T) -> Result<(), Error> {
        self.set_boxed(value.into_boxed_reflect())
    }

    /// Assigns a boxed value to the field.
    ///
    /// Fails with [`Error::NotExported`] on private fields and
    /// [`Error::TypeMismatch`] if the kind or the concrete type differs.
    pub fn set_boxed(&mut self, value: Box<dyn Reflect>) -> Result<(), Error> {
        self.check_exported()?;

        let field = self.info.name();
        let mismatch = |got: &dyn Reflect, want: &dyn Reflect| Error::TypeMismatch {
            field,
            want: want.reflect_type_name(),
            got: got.reflect_type_name(),
        };

        if value.reflect_kind() != self.value.reflect_kind() {
            return Err(mismatch(&*value, &*self.value));
        }
        match self.value.set(value) {
            Ok(()) => Ok(()),
            Err(value) => Err(mismatch(&*value, &*self.value)),
        }
    }

    /// Resets the field to the empty value of its type.
    pub fn set_zero(&mut self) -> Result<(), Error> {
        self.check_exported()?;
        self.value.set_zero();
        Ok(())
    }

    /// Read-only accessors for the exported fields of the nested struct.
    pub fn fields(&self) -> Result<Vec<Field<'_>>, Error> {
        self.as_field().fields()
    }

    /// Settable accessors for the exported fields of the nested struct.
    pub fn fields_mut(&mut self) -> Result<Vec<FieldMut<'_>>, Error> {
        self.reborrow().into_fields_mut()
    }

    /// Consuming version of [`fields_mut`](Self::fields_mut).
    pub fn into_fields_mut(self) -> Result<Vec<FieldMut<'a>>, Error> {
        let value = self.into_struct()?;
        Ok(exported_fields_mut(value))
    }

    pub fn field(&self, name: &str) -> Result<Field<'_>, Error> {
        self.as_field().field(name)
    }

    /// Returns the settable accessor of the nested field named `name`.
    pub fn field_mut(&mut self, name: &str) -> Result<FieldMut<'_>, Error> {
        let value = self.reborrow().into_struct()?;
        let index = index_of(value, name)?;
        let info = &value.struct_info().fields()[index];
        match value.field_at_mut(index) {
            Some(field) => Ok(FieldMut::new(info, field)),
            None => Err(Error::FieldNotFound { name: name.into() }),
        }
    }

    #[track_caller]
    pub fn must_field(&self, name: &str) -> Field<'_> {
        match self.field(name) {
            Ok(field) => field,
            Err(err) => panic!("{err}"),
        }
    }

    #[track_caller]
    pub fn must_field_mut(&mut self, name: &str) -> FieldMut<'_> {
        match self.field_mut(name) {
            Ok(field) => field,
            Err(err) => panic!("{err}"),
        }
    }

    fn check_exported(&self) -> Result<(), Error> {
        if self.info.is_exported() {
            Ok(())
        } else {
            Err(Error::NotExported {
                field: self.info.name(),
            })
        }
    }

    fn into_struct(self) -> Result<&'a mut dyn Struct, Error> {
        self.check_exported()?;
        let err = not_struct(self.value);
        self.value.reflect_mut().deref_struct().ok_or(err)
    }
}

/// Settable accessors for the exported fields of `value`, in order.
pub(crate) fn exported_fields_mut(value: &mut dyn Struct) -> Vec<FieldMut<'_>> {
    let info = value.struct_info();
    value
        .fields_mut()
        .into_iter()
        .zip(info.fields())
        .filter(|(_, info)| info.is_exported())
        .map(|(value, info)| FieldMut::new(info, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::{EncoderMut, Error, Reflect, derive::Reflect};

    #[derive(Reflect)]
    struct Inner {
        pub port: u16,
        pub tags: Vec<String>,
        hidden: bool,
    }

    #[derive(Reflect)]
    struct Outer {
        pub inner: Inner,
        pub boxed: Box<Inner>,
        pub count: i64,
        secret: String,
    }

    fn outer() -> Outer {
        Outer {
            inner: Inner {
                port: 80,
                tags: alloc::vec![String::from("a")],
                hidden: true,
            },
            boxed: Box::new(Inner {
                port: 1,
                tags: Vec::new(),
                hidden: false,
            }),
            count: 3,
            secret: String::from("s"),
        }
    }

    #[test]
    fn set_checks_kind_and_type() {
        let mut outer = outer();
        let mut encoder = EncoderMut::new(&mut outer).unwrap();
        let mut count = encoder.field_mut("count").unwrap();

        assert_eq!(
            count.set(String::from("no")),
            Err(Error::TypeMismatch {
                field: "count",
                want: "i64",
                got: "alloc::string::String",
            })
        );
        // Same kind, different type.
        assert!(matches!(count.set(1_i32), Err(Error::TypeMismatch { .. })));
        assert_eq!(count.value().unwrap().downcast_ref::<i64>(), Some(&3));

        count.set_boxed(9_i64.into_boxed_reflect()).unwrap();
        assert_eq!(outer.count, 9);
    }

    #[test]
    fn private_is_guarded() {
        let mut outer = outer();
        let mut encoder = EncoderMut::new(&mut outer).unwrap();
        let mut secret = encoder.field_mut("secret").unwrap();

        assert!(!secret.can_set());
        assert_eq!(secret.set(String::new()), Err(Error::NotExported { field: "secret" }));
        assert_eq!(secret.set_zero(), Err(Error::NotExported { field: "secret" }));
        assert!(secret.value_mut().is_err());
        assert_eq!(outer.secret, "s");
    }

    #[test]
    fn nested_mut() {
        let mut outer = outer();
        let mut encoder = EncoderMut::new(&mut outer).unwrap();

        {
            let mut inner = encoder.field_mut("inner").unwrap();
            let mut fields = inner.fields_mut().unwrap();
            assert_eq!(fields.len(), 2);
            for field in &mut fields {
                field.set_zero().unwrap();
            }
        }
        encoder.field_mut("boxed").unwrap().must_field_mut("port").set(443_u16).unwrap();

        assert_eq!(outer.inner.port, 0);
        assert!(outer.inner.tags.is_empty());
        assert!(outer.inner.hidden);
        assert_eq!(outer.boxed.port, 443);
    }

    #[test]
    fn nested_private_lookup() {
        let mut outer = outer();
        let mut encoder = EncoderMut::new(&mut outer).unwrap();
        let mut inner = encoder.field_mut("inner").unwrap();

        let mut hidden = inner.field_mut("hidden").unwrap();
        assert_eq!(hidden.set(false), Err(Error::NotExported { field: "hidden" }));
        assert!(matches!(inner.field_mut("nope"), Err(Error::FieldNotFound { .. })));
        assert!(matches!(
            encoder.field_mut("count").unwrap().fields_mut(),
            Err(Error::NotStruct { .. })
        ));
    }
}
