// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// Built by [`#[derive(Reflect)]`](crate::derive::Reflect) in `const`
/// context, so every piece of it is `'static`.
///
/// # Examples
///
/// ```
/// use ws_structs::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(map = "id,string", json = "identifier")]
///     pub id: u32,
///     secret: String,
/// }
///
/// let foo = Foo { id: 1, secret: String::new() };
/// let info = foo.struct_info();
///
/// let id = info.field_at(0).unwrap();
/// assert_eq!(id.name(), "id");
/// assert!(id.is_exported());
/// assert_eq!(id.tag("map"), "id,string");
/// assert_eq!(id.tag("json"), "identifier");
/// assert_eq!(id.tag("yaml"), "");
///
/// assert!(!info.field_at(1).unwrap().is_exported());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedField {
    name: &'static str,
    exported: bool,
    embedded: bool,
    tags: &'static [(&'static str, &'static str)],
}

impl NamedField {
    /// Creates a new private, non-embedded [`NamedField`] without tags.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            exported: false,
            embedded: false,
            tags: &[],
        }
    }

    /// Marks the field as exported (declared `pub`).
    #[inline]
    pub const fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Marks the field as an embedded struct.
    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Sets the `(key, raw tag)` table of the field.
    #[inline]
    pub const fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the field is declared `pub`.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Returns `true` if the field was marked `#[reflect(embedded)]`.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the raw tag string for `key`, or `""` if there is none.
    ///
    /// This is a pure lookup, the tag is not parsed.
    pub fn tag(&self, key: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map_or("", |(_, raw)| raw)
    }

    /// Returns all `(key, raw tag)` pairs in declaration order.
    #[inline]
    pub const fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }
}
