use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{ReflectMut, ReflectRef};

impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Option
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Option(self.as_ref().map(T::as_reflect))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Option(self.as_mut().map(T::as_reflect_mut))
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn set_zero(&mut self) {
        *self = None;
    }

    #[inline]
    fn to_text(&self) -> Option<String> {
        self.as_ref().and_then(T::to_text)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::ReflectRef;

    #[test]
    fn absent_is_empty() {
        let mut value = Some(0_u8);
        assert!(!value.is_zero());
        assert!(matches!(value.reflect_ref(), ReflectRef::Option(Some(_))));

        value.set_zero();
        assert!(value.is_zero());
        assert!(matches!(value.reflect_ref(), ReflectRef::Option(None)));
        assert_eq!(value.to_text(), None);
    }
}
