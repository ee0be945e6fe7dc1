//! Fully qualified paths of `core` items for generated code.
//!
//! Generated code must not rely on the caller's prelude or imports, so
//! every `core` item is spelled out with a leading `::core`.
//!
//! ```
//! use quote::quote;
//! use ws_macro_utils::full_path::OptionFP;
//!
//! let tokens = quote!( #OptionFP::None ).to_string().replace(' ', "");
//! assert_eq!(tokens, "::core::option::Option::None");
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => $path:path;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!( $path ));
            }
        }
    )*};
}

define_full_path! {
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
    /// `::core::result::Result`
    ResultFP => ::core::result::Result;
    /// `::core::default::Default`
    DefaultFP => ::core::default::Default;
    /// `::core::cmp::PartialEq`
    PartialEqFP => ::core::cmp::PartialEq;
    /// `::core::fmt::Debug`
    DebugFP => ::core::fmt::Debug;
    /// `::core::fmt::Formatter`
    FormatterFP => ::core::fmt::Formatter;
    /// `::core::fmt::Result`
    FmtResultFP => ::core::fmt::Result;
}
