use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{ReflectMut, ReflectRef};

// A `Box` never is absent, so emptiness and text are those of the pointee.
impl<T: Reflect> Reflect for Box<T> {
    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(T::as_reflect(self))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(T::as_reflect_mut(self))
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        T::is_zero(self)
    }

    #[inline]
    fn set_zero(&mut self) {
        T::set_zero(self);
    }

    #[inline]
    fn to_text(&self) -> Option<String> {
        T::to_text(self)
    }

    #[inline]
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        T::as_serialize(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::reflect_debug(self, f)
    }
}
