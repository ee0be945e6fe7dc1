//! Parsing of per-field tag strings.
//!
//! A tag has the form `name[,option1[,option2...]]`. The name `-` ignores the
//! field. The options understood by the encoder are listed in [`TagFlags`],
//! other options are kept but otherwise ignored.
//!
//! ```
//! use ws_structs::tags::{Tag, TagFlags};
//!
//! let tag = Tag::parse("id,string,custom");
//!
//! assert_eq!(tag.name(), "id");
//! assert!(tag.flags().contains(TagFlags::STRING));
//! assert!(tag.has_option("custom"));
//! assert!(!tag.is_ignored());
//! ```

use bitflags::bitflags;

bitflags! {
    /// Options of a tag recognized by the encoder.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagFlags: u8 {
        /// Skip the entry when the value is empty.
        const OMIT_EMPTY  = 1 << 0;
        /// Keep a nested struct as a raw value instead of recursing.
        const OMIT_NESTED = 1 << 1;
        /// Convert the value to text.
        const STRING      = 1 << 2;
    }
}

impl TagFlags {
    /// Returns the flag of a single option token, empty for unknown tokens.
    pub fn from_option(option: &str) -> Self {
        match option {
            "omitempty" => Self::OMIT_EMPTY,
            "omitnested" => Self::OMIT_NESTED,
            "string" => Self::STRING,
            _ => Self::empty(),
        }
    }
}

/// A parsed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    name: &'a str,
    options: &'a str,
    flags: TagFlags,
}

impl<'a> Tag<'a> {
    /// The literal name that ignores a field.
    pub const IGNORE: &'static str = "-";

    /// Parses a raw tag. Never fails: an empty string is an empty tag.
    pub fn parse(raw: &'a str) -> Self {
        let (name, options) = raw.split_once(',').unwrap_or((raw, ""));
        let flags = options
            .split(',')
            .fold(TagFlags::empty(), |flags, option| flags | TagFlags::from_option(option));
        Self {
            name,
            options,
            flags,
        }
    }

    /// The key override, empty if the field keeps its declared name.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns `true` if the name token is exactly `-`.
    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.name == Self::IGNORE
    }

    /// Returns the recognized options.
    #[inline]
    pub fn flags(&self) -> TagFlags {
        self.flags
    }

    /// Returns `true` if `option` is among the options, recognized or not.
    pub fn has_option(&self, option: &str) -> bool {
        !self.options.is_empty() && self.options.split(',').any(|o| o == option)
    }

    /// Returns the raw option tokens in declared order.
    pub fn options(&self) -> impl Iterator<Item = &'a str> {
        self.options.split(',').filter(|o| !o.is_empty())
    }

    /// Returns `name` if non-empty, `fallback` otherwise.
    #[inline]
    pub fn key_or(&self, fallback: &'a str) -> &'a str {
        if self.name.is_empty() {
            fallback
        } else {
            self.name
        }
    }

    #[inline]
    pub fn omit_empty(&self) -> bool {
        self.flags.contains(TagFlags::OMIT_EMPTY)
    }

    #[inline]
    pub fn omit_nested(&self) -> bool {
        self.flags.contains(TagFlags::OMIT_NESTED)
    }

    #[inline]
    pub fn string(&self) -> bool {
        self.flags.contains(TagFlags::STRING)
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, TagFlags};
    use alloc::vec::Vec;

    #[test]
    fn empty_tag() {
        let tag = Tag::parse("");
        assert_eq!(tag.name(), "");
        assert_eq!(tag.flags(), TagFlags::empty());
        assert!(!tag.is_ignored());
        assert!(!tag.has_option(""));
        assert_eq!(tag.key_or("Name"), "Name");
    }

    #[test]
    fn options_only() {
        let tag = Tag::parse(",omitempty,omitnested");
        assert_eq!(tag.key_or("Name"), "Name");
        assert!(tag.omit_empty());
        assert!(tag.omit_nested());
        assert!(!tag.string());
    }

    #[test]
    fn ignore_wins() {
        let tag = Tag::parse("-,omitempty");
        assert!(tag.is_ignored());
        assert!(tag.omit_empty());

        // Only the exact token ignores.
        assert!(!Tag::parse("-x").is_ignored());
        assert!(!Tag::parse(",-").is_ignored());
    }

    #[test]
    fn unknown_options_are_kept_raw() {
        let tag = Tag::parse("id,bogus,string");
        assert_eq!(tag.flags(), TagFlags::STRING);
        assert!(tag.has_option("bogus"));
        assert!(!tag.has_option("omitempty"));
        assert_eq!(tag.options().collect::<Vec<_>>(), ["bogus", "string"]);
    }
}
