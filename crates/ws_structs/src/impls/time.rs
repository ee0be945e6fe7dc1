use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::core::time::Duration(serialize, debug));

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn duration_is_leaf() {
        let mut value = Duration::from_secs(3);
        assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        assert!(!value.is_zero());
        assert!(value.as_serialize().is_some());
        assert_eq!(value.to_text(), None);

        value.set_zero();
        assert_eq!(value, Duration::ZERO);
        assert!(value.is_zero());
    }
}
