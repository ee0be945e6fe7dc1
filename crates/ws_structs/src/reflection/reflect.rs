use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::ReflectKind;
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime inspection of values.
///
/// Rust has no runtime reflection, so every type that the encoder can look
/// at implements this trait. Implementations exist for primitives, text,
/// `Option`, `Box`, lists and maps. Structs get one through
/// [`#[derive(Reflect)]`](crate::derive::Reflect), and foreign leaf types
/// through [`impl_reflect_opaque!`](crate::derive::impl_reflect_opaque).
///
/// # Capabilities
///
/// - Kind inspection: [`reflect_kind`], [`reflect_ref`], [`reflect_mut`].
/// - Emptiness: [`is_zero`] and [`set_zero`], the rule behind `omitempty`
///   and the aggregate predicates.
/// - Assignment: [`set`], type-strict.
/// - Text conversion: [`to_text`], used by the `string` tag option.
/// - Serialization: [`as_serialize`], used by the [`serde`](crate::serde) bridge.
///
/// # Type Casting
///
/// `dyn Reflect` can be downcast like `dyn Any`:
///
/// ```
/// use ws_structs::Reflect;
///
/// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
///
/// assert!(x.is::<i32>());
/// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
/// assert_eq!(x.take::<i32>().ok(), Some(10));
/// ```
///
/// [`reflect_kind`]: Reflect::reflect_kind
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`is_zero`]: Reflect::is_zero
/// [`set_zero`]: Reflect::set_zero
/// [`set`]: Reflect::set
/// [`to_text`]: Reflect::to_text
/// [`as_serialize`]: Reflect::as_serialize
pub trait Reflect: Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` returns the id of the box itself,
    /// this method always returns the id of the inner value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the name of the underlying type, for diagnostics.
    ///
    /// Derived structs return their declared identifier, other types
    /// return [`core::any::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// Returns the [`ReflectKind`] of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of this value by kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of this value by kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// On type mismatch the value is handed back and `self` is unchanged.
    ///
    /// ```
    /// # use ws_structs::Reflect;
    /// let mut x = 1_i32;
    /// assert!(x.set(7_i32.into_boxed_reflect()).is_ok());
    /// assert!(x.set(7_i64.into_boxed_reflect()).is_err());
    /// assert_eq!(x, 7);
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns `true` if this value is empty.
    ///
    /// Empty means the zero value of the type: numeric zero, `false`, empty
    /// text, `None`, an empty list or map, or a struct all of whose exported
    /// fields are empty. A struct without exported fields is empty when all
    /// of its fields are.
    fn is_zero(&self) -> bool;

    /// Resets this value to its empty value, so that [`is_zero`] holds.
    ///
    /// [`is_zero`]: Reflect::is_zero
    fn set_zero(&mut self);

    /// Best-effort conversion into text.
    ///
    /// Returns `None` if this kind has no text form. Scalars, text and
    /// types opting in with the `display` flag support it.
    #[inline]
    fn to_text(&self) -> Option<String> {
        None
    }

    /// Returns the serde view of this value, if the type supports one.
    ///
    /// Composite values without it are still serializable structurally,
    /// see [`ReflectSerializer`](crate::serde::ReflectSerializer).
    #[inline]
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        None
    }

    /// Debug formatter for the value.
    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_name())
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id already checked"),
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the common methods `reflect_type_name`, `reflect_kind`,
/// `reflect_ref`, `reflect_mut` and `set`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident => $variant:ident) => {
        #[inline]
        fn reflect_type_name(&self) -> &'static str {
            ::core::any::type_name::<Self>()
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$variant(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$variant(self)
        }

        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use super::Reflect;
    use alloc::string::String;

    #[test]
    fn downcast_and_take() {
        let mut value: alloc::boxed::Box<dyn Reflect> = String::from("gopher").into_boxed_reflect();

        assert!(value.is::<String>());
        assert!(!value.is::<&'static str>());
        value.downcast_mut::<String>().unwrap().push('s');

        let value = value.take::<i32>().unwrap_err();
        assert_eq!(value.take::<String>().unwrap(), "gophers");
    }

    #[test]
    fn set_is_type_strict() {
        let mut text = String::from("before");
        let rejected = text.set(5_u8.into_boxed_reflect()).unwrap_err();

        assert_eq!(rejected.downcast_ref::<u8>(), Some(&5));
        assert_eq!(text, "before");
    }

    #[derive(crate::derive::Reflect, Default, PartialEq, Debug)]
    #[reflect(opaque, debug, display)]
    enum Level {
        #[default]
        Info,
        Warn,
    }

    impl core::fmt::Display for Level {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str(match self {
                Self::Info => "info",
                Self::Warn => "warn",
            })
        }
    }

    #[derive(crate::derive::Reflect)]
    struct Config {
        pub level: Level,
        pub retries: u8,
        token: String,
    }

    #[test]
    fn derived_opaque_flags() {
        use alloc::format;
        use crate::info::ReflectKind;

        let mut level = Level::Warn;
        assert_eq!(level.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(level.reflect_type_name(), "Level");
        assert_eq!(level.to_text().as_deref(), Some("warn"));
        assert!(level.as_serialize().is_none());
        assert_eq!(format!("{:?}", level.as_reflect()), "Warn");

        assert!(!level.is_zero());
        level.set_zero();
        assert_eq!(level, Level::Info);
    }

    #[test]
    fn derived_struct() {
        use alloc::format;
        use crate::info::ReflectKind;
        use crate::ops::Struct;

        let mut config = Config {
            level: Level::Warn,
            retries: 0,
            token: String::from("t"),
        };
        assert_eq!(config.reflect_kind(), ReflectKind::Struct);
        assert_eq!(config.reflect_type_name(), "Config");
        assert_eq!(config.to_text(), None);
        assert_eq!(config.field_len(), 3);
        assert_eq!(config.fields_mut().len(), 3);
        assert_eq!(format!("{:?}", config.as_reflect()), "Config { level: Warn, retries: 0, .. }");

        // Private fields do not count for emptiness, but are reset.
        assert!(!config.is_zero());
        config.set_zero();
        assert!(config.is_zero());
        assert_eq!(config.level, Level::Info);
        assert!(config.token.is_empty());
    }
}
