use alloc::string::String;
use core::any::Any;
use core::fmt;

use crate::Reflect;
use crate::encode::StructMap;

// -----------------------------------------------------------------------------
// Value

/// A value of the encoder output.
///
/// Raw values are borrowed from the encoded struct, no field is cloned.
pub enum Value<'a> {
    /// The raw field value.
    Ref(&'a dyn Reflect),
    /// The text form of a field tagged with `string`.
    Text(String),
    /// A nested struct.
    Map(StructMap<'a>),
}

impl<'a> Value<'a> {
    /// Returns the raw value, `None` for text and maps.
    #[inline]
    pub fn as_reflect(&self) -> Option<&'a dyn Reflect> {
        match self {
            Self::Ref(value) => Some(*value),
            _ => None,
        }
    }

    /// Downcasts a raw value, or the text of [`Value::Text`] as `String`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Ref(value) => value.downcast_ref::<T>(),
            Self::Text(text) => <dyn Any>::downcast_ref(text),
            Self::Map(_) => None,
        }
    }

    /// Returns the text of this value if it is text, raw or converted.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Ref(value) => value
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| value.downcast_ref::<&'static str>().copied()),
            Self::Map(_) => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&StructMap<'a>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns `true` for empty raw values, empty text and empty maps.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Ref(value) => value.is_zero(),
            Self::Text(text) => text.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }
}

impl<'a> From<&'a dyn Reflect> for Value<'a> {
    #[inline]
    fn from(value: &'a dyn Reflect) -> Self {
        Self::Ref(value)
    }
}

impl From<String> for Value<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<StructMap<'a>> for Value<'a> {
    #[inline]
    fn from(value: StructMap<'a>) -> Self {
        Self::Map(value)
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ref(value) => value.reflect_debug(f),
            Self::Text(text) => fmt::Debug::fmt(text, f),
            Self::Map(map) => fmt::Debug::fmt(map, f),
        }
    }
}
