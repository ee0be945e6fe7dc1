use crate::info::NamedField;

// -----------------------------------------------------------------------------
// StructInfo

/// Static information of a struct: its name and ordered field table.
///
/// Private fields are part of the table, flagged as not exported. The
/// encoder skips them, the accessors refuse to expose their values.
///
/// # Examples
///
/// ```
/// use ws_structs::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: i32,
///     b: bool,
/// }
///
/// let info = Foo { a: 1, b: true }.struct_info();
///
/// assert_eq!(info.type_name(), "Foo");
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("b"), Some(1));
/// assert_eq!(info.exported().count(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StructInfo {
    type_name: &'static str,
    module_path: &'static str,
    fields: &'static [NamedField],
}

impl StructInfo {
    /// Creates a new [`StructInfo`].
    #[inline]
    pub const fn new(
        type_name: &'static str,
        module_path: &'static str,
        fields: &'static [NamedField],
    ) -> Self {
        Self {
            type_name,
            module_path,
            fields,
        }
    }

    /// Returns the declared type name, without module path or generics.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the module in which the type is declared.
    #[inline]
    pub const fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// Returns all fields in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [NamedField] {
        self.fields
    }

    /// Returns the number of fields, private ones included.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static NamedField> {
        self.fields.get(index)
    }

    /// Returns the field named `name` (exact, case-sensitive match).
    #[inline]
    pub fn field(&self, name: &str) -> Option<&'static NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the index of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Returns the exported fields in declaration order.
    #[inline]
    pub fn exported(&self) -> impl Iterator<Item = &'static NamedField> {
        self.fields.iter().filter(|field| field.is_exported())
    }
}
