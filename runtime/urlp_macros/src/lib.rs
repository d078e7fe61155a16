use proc_macro::TokenStream;

mod record;

/// Derive `urlp::Record` (and `urlp::Decodable`) for a struct with named fields.
///
/// Field annotations are attached with `#[urlp("...")]` for the default tag,
/// or `#[urlp(tag = "...")]` for any other tag identifier.
/// Multiple tags can be combined in a single attribute: `#[urlp("g", form = "x,optional")]`.
#[proc_macro_derive(Record, attributes(urlp))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
