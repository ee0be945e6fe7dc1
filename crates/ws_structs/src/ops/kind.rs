use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{List, Map, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of the kinds of a reflected value.
///
/// Returned by [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    /// An `Option`, `None` when the value is absent.
    Option(Option<&'a dyn Reflect>),
    /// The pointee of a `Box`.
    Pointer(&'a dyn Reflect),
    /// Scalars, text and opaque values.
    Leaf(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Option(_) => ReflectKind::Option,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Leaf(value) => value.reflect_kind(),
        }
    }

    /// Returns the struct view, without following any indirection.
    #[inline]
    pub fn as_struct(self) -> Option<&'a dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the struct view, following at most one level of `Box` or
    /// `Some`.
    ///
    /// `Box<Box<T>>`, `Option<Box<T>>` and `None` yield `None`.
    ///
    /// ```
    /// use ws_structs::{Reflect, derive::Reflect};
    ///
    /// #[derive(Reflect)]
    /// struct Foo {
    ///     pub a: i32,
    /// }
    ///
    /// assert!(Foo { a: 1 }.reflect_ref().deref_struct().is_some());
    /// assert!(Box::new(Foo { a: 1 }).reflect_ref().deref_struct().is_some());
    /// assert!(Some(Foo { a: 1 }).reflect_ref().deref_struct().is_some());
    ///
    /// assert!(Box::new(Box::new(Foo { a: 1 })).reflect_ref().deref_struct().is_none());
    /// assert!(None::<Foo>.reflect_ref().deref_struct().is_none());
    /// assert!(1_i32.reflect_ref().deref_struct().is_none());
    /// ```
    pub fn deref_struct(self) -> Option<&'a dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            Self::Pointer(inner) | Self::Option(Some(inner)) => inner.reflect_ref().as_struct(),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of the kinds of a reflected value.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    /// An `Option`, `None` when the value is absent.
    Option(Option<&'a mut dyn Reflect>),
    /// The pointee of a `Box`.
    Pointer(&'a mut dyn Reflect),
    /// Scalars, text and opaque values.
    Leaf(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Option(_) => ReflectKind::Option,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Leaf(value) => value.reflect_kind(),
        }
    }

    /// Returns the struct view, without following any indirection.
    #[inline]
    pub fn into_struct(self) -> Option<&'a mut dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable counterpart of [`ReflectRef::deref_struct`].
    pub fn deref_struct(self) -> Option<&'a mut dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            Self::Pointer(inner) | Self::Option(Some(inner)) => inner.reflect_mut().into_struct(),
            _ => None,
        }
    }
}
