use core::fmt;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected value.
///
/// Each kind corresponds to a data shape the encoder treats differently.
/// Assignment through a [`FieldMut`](crate::FieldMut) is rejected when the
/// kinds of the field and the new value differ.
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Bool,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    Uint,
    Float,
    Char,
    /// `String` and `&'static str`.
    String,
    /// `Option<T>`, the absent-or-present value.
    Option,
    /// `Box<T>`, a single level of indirection.
    Pointer,
    List,
    Map,
    Struct,
    /// A leaf whose inside is not inspected.
    Opaque,
}

impl ReflectKind {
    /// Returns `true` for booleans, numbers and characters.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Int | Self::Uint | Self::Float | Self::Char
        )
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("Bool"),
            Self::Int => f.pad("Int"),
            Self::Uint => f.pad("Uint"),
            Self::Float => f.pad("Float"),
            Self::Char => f.pad("Char"),
            Self::String => f.pad("String"),
            Self::Option => f.pad("Option"),
            Self::Pointer => f.pad("Pointer"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Struct => f.pad("Struct"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}
