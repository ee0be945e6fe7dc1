use alloc::string::{String, ToString};
use core::fmt;

use crate::Reflect;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_scalar {
    ($kind:ident: $($ty:ty),+ $(,)?) => {$(
        impl Reflect for $ty {
            impl_reflect_cast_fn!($kind => Leaf);

            #[inline]
            fn is_zero(&self) -> bool {
                *self == <$ty as Default>::default()
            }

            #[inline]
            fn set_zero(&mut self) {
                *self = <$ty as Default>::default();
            }

            #[inline]
            fn to_text(&self) -> Option<String> {
                Some(ToString::to_string(self))
            }

            #[inline]
            fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
                Some(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    )+};
}

impl_reflect_scalar!(Int: i8, i16, i32, i64, i128, isize);
impl_reflect_scalar!(Uint: u8, u16, u32, u64, u128, usize);
impl_reflect_scalar!(Float: f32, f64);
impl_reflect_scalar!(Bool: bool);
impl_reflect_scalar!(Char: char);
impl_reflect_scalar!(String: String, &'static str);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::ReflectKind;
    use alloc::string::String;

    #[test]
    fn scalar_kinds() {
        assert_eq!(1_i8.reflect_kind(), ReflectKind::Int);
        assert_eq!(1_usize.reflect_kind(), ReflectKind::Uint);
        assert_eq!(1.5_f32.reflect_kind(), ReflectKind::Float);
        assert_eq!(true.reflect_kind(), ReflectKind::Bool);
        assert_eq!('x'.reflect_kind(), ReflectKind::Char);
        assert_eq!("x".reflect_kind(), ReflectKind::String);
        assert_eq!(String::new().reflect_kind(), ReflectKind::String);
    }

    #[test]
    fn scalar_emptiness() {
        assert!(0_u64.is_zero());
        assert!(!7_u64.is_zero());
        assert!((-0.0_f64).is_zero());
        assert!(!f64::NAN.is_zero());
        assert!('\0'.is_zero());
        assert!(!false.to_text().unwrap().is_empty());
        assert!("".is_zero());

        let mut text = String::from("gopher");
        assert!(!text.is_zero());
        text.set_zero();
        assert!(text.is_empty());
    }

    #[test]
    fn scalar_text() {
        assert_eq!(42_i32.to_text().as_deref(), Some("42"));
        assert_eq!(1.5_f64.to_text().as_deref(), Some("1.5"));
        assert_eq!(true.to_text().as_deref(), Some("true"));
        assert_eq!('z'.to_text().as_deref(), Some("z"));
    }
}
