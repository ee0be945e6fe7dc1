use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::info::{NamedField, StructInfo};

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased struct operations.
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on a struct with
/// named fields (or a unit struct), this trait is implemented automatically.
///
/// Fields are addressed in declaration order, private fields included. The
/// [`StructInfo`] tells which fields are exported.
///
/// # Examples
///
/// ```
/// use ws_structs::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: i32,
///     pub b: bool,
/// }
///
/// let mut foo = Foo { a: 10, b: true };
/// let s: &mut dyn Struct = &mut foo;
///
/// assert_eq!(s.field_len(), 2);
/// assert_eq!(s.field("a").unwrap().downcast_ref::<i32>(), Some(&10));
///
/// *s.field_at_mut(1).unwrap().downcast_mut::<bool>().unwrap() = false;
/// assert!(!foo.b);
/// ```
pub trait Struct: Reflect {
    /// Returns the static information of this struct.
    fn struct_info(&self) -> &'static StructInfo;

    /// Returns a reference to the value of the field at `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field at `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns mutable references to all fields at once, in declaration order.
    ///
    /// The borrows are disjoint, so accessors for several fields can be
    /// alive at the same time.
    fn fields_mut(&mut self) -> Vec<&mut dyn Reflect>;

    /// Returns a reference to the value of the field named `name`.
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_at(self.struct_info().index_of(name)?)
    }

    /// Returns a mutable reference to the value of the field named `name`.
    #[inline]
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.struct_info().index_of(name)?;
        self.field_at_mut(index)
    }

    /// Returns the number of fields, private ones included.
    #[inline]
    fn field_len(&self) -> usize {
        self.struct_info().field_len()
    }
}

impl dyn Struct {
    /// Returns the exported fields with their metadata, in declaration order.
    pub fn exported_fields(&self) -> impl Iterator<Item = (&'static NamedField, &dyn Reflect)> {
        let info = self.struct_info();
        info.fields()
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_exported())
            .filter_map(move |(index, field)| Some((field, self.field_at(index)?)))
    }
}

// -----------------------------------------------------------------------------
// Helpers

/// The emptiness rule of structs: all exported fields are empty.
///
/// A struct without exported fields is a leaf to the encoder, so its
/// private state counts: it is empty iff every field is empty.
pub fn struct_is_zero(value: &dyn Struct) -> bool {
    let info = value.struct_info();
    if info.exported().next().is_none() {
        return (0..info.field_len())
            .all(|index| value.field_at(index).is_none_or(|field| field.is_zero()));
    }
    value.exported_fields().all(|(_, field)| field.is_zero())
}

/// Debug formatter of structs, listing the exported fields.
pub fn struct_debug(value: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let info = value.struct_info();
    let mut debug = f.debug_struct(info.type_name());
    for (field_info, field) in value.exported_fields() {
        debug.field(field_info.name(), &field);
    }
    if info.exported().count() < info.field_len() {
        debug.finish_non_exhaustive()
    } else {
        debug.finish()
    }
}
