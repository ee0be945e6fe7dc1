use proc_macro2::Span;

/// A struct used to record whether the specified trait is available.
///
/// The span is the one of the flag, for error reporting.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    pub serialize: Option<Span>,
    pub display: Option<Span>,
    pub debug: Option<Span>,
}
