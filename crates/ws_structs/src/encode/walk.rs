use log::debug;

use crate::Reflect;
use crate::encode::Value;
use crate::info::NamedField;
use crate::ops::Struct;
use crate::tags::Tag;

// -----------------------------------------------------------------------------
// Entry

/// One exported, non-ignored field of a struct, as seen by the encoder.
pub(crate) struct Entry<'a> {
    pub info: &'static NamedField,
    pub key: &'static str,
    pub tag: Tag<'static>,
    pub value: &'a dyn Reflect,
    /// The struct to recurse into: set when the field holds a struct with
    /// exported fields (through at most one `Box`/`Some`) and `omitnested`
    /// is absent.
    pub nested: Option<&'a dyn Struct>,
}

impl<'a> Entry<'a> {
    /// Returns `true` if `omitempty` drops this entry.
    pub fn is_omitted(&self, tag_key: &str) -> bool {
        if !self.tag.omit_empty() {
            return false;
        }
        if self.value.is_zero() {
            return true;
        }
        self.nested
            .is_some_and(|nested| !has_entries(nested, tag_key))
    }

    /// The output of a non-nested entry: its text under `string`, else the
    /// raw value.
    pub fn leaf_value(&self) -> Value<'a> {
        if !self.tag.string() {
            return Value::Ref(self.value);
        }
        match self.value.to_text() {
            Some(text) => Value::Text(text),
            None => {
                debug!(
                    "structs: field `{}` of kind {} has no text form, `string` ignored",
                    self.info.name(),
                    self.value.reflect_kind(),
                );
                Value::Ref(self.value)
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Walk

/// Iterates over the fields of `value` the encoder emits, in declaration order.
pub(crate) fn entries<'a>(
    value: &'a dyn Struct,
    tag_key: &'a str,
) -> impl Iterator<Item = Entry<'a>> {
    value.exported_fields().filter_map(move |(info, value)| {
        let tag = Tag::parse(info.tag(tag_key));
        if tag.is_ignored() {
            return None;
        }
        let nested = if tag.omit_nested() {
            None
        } else {
            value
                .reflect_ref()
                .deref_struct()
                .filter(|nested| nested.struct_info().exported().next().is_some())
        };
        Some(Entry {
            info,
            key: tag.key_or(info.name()),
            tag,
            value,
            nested,
        })
    })
}

/// Returns `true` if encoding `value` yields at least one entry.
pub(crate) fn has_entries(value: &dyn Struct, tag_key: &str) -> bool {
    entries(value, tag_key).any(|entry| !entry.is_omitted(tag_key))
}
