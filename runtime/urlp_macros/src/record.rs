use darling::{FromDeriveInput, FromField, util::Ignored};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, DeriveInput, Ident, LitStr, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};
use urlp_annotation::{Annotation, DEFAULT_TAG};

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct RecordInput {
    data: darling::ast::Data<Ignored, RecordField>,
    generics: syn::Generics,
    ident: Ident,
}

#[derive(FromField)]
#[darling(forward_attrs(urlp))]
struct RecordField {
    ident: Option<Ident>,
    ty: syn::Type,
    vis: syn::Visibility,
    attrs: Vec<Attribute>,
}

/// An annotation attached to a field, under a given tag.
#[derive(Debug)]
struct FieldTag {
    tag: String,
    annotation: LitStr,
}

/// A single entry in `#[urlp(...)]`: either `"annotation"` or `tag = "annotation"`.
enum TagArg {
    Default(LitStr),
    Named { tag: Ident, annotation: LitStr },
}

impl Parse for TagArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(TagArg::Default(input.parse()?));
        }
        let tag = Ident::parse_any(input)?;
        input.parse::<Token![=]>()?;
        let annotation = input.parse()?;
        Ok(TagArg::Named { tag, annotation })
    }
}

pub(super) fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match _derive_record(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn _derive_record(input: DeriveInput) -> Result<proc_macro2::TokenStream, darling::Error> {
    let input = RecordInput::from_derive_input(&input)?;
    reject_invalid_inputs(&input)?;

    let struct_ident = &input.ident;
    let fields = input
        .data
        .take_struct()
        // `darling` rejects every shape other than structs with named fields.
        .expect("`Record` can only be derived for structs with named fields.");

    let mut errors = darling::Error::accumulator();
    let mut accessors = Vec::with_capacity(fields.len());
    let mut entries = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let Some(tags) = errors.handle(field_tags(&field.attrs)) else {
            continue;
        };
        let name = field_ident.unraw().to_string();
        let accessor = format_ident!("__urlp_access_{}", name);
        // Private fields are never written to, they don't need to be `Decodable`.
        let settable = !matches!(field.vis, syn::Visibility::Inherited);
        let access = if settable {
            quote! {
                fn #accessor(record: &mut #struct_ident) -> ::urlp::Target<'_> {
                    ::urlp::Decodable::target(&mut record.#field_ident)
                }
            }
        } else {
            let ty = &field.ty;
            quote! {
                fn #accessor(_: &mut #struct_ident) -> ::urlp::Target<'_> {
                    ::urlp::Target::Unsupported(::core::any::type_name::<#ty>())
                }
            }
        };
        accessors.push(quote! {
            #[allow(non_snake_case)]
            #access
        });

        let tag_names = tags.iter().map(|t| &t.tag);
        let annotations = tags.iter().map(|t| &t.annotation);
        entries.push(quote! {
            ::urlp::Field::new(#name, #accessor)
                .with_annotations(&[#((#tag_names, #annotations)),*])
                .settable(#settable)
        });
    }
    errors.finish()?;

    Ok(quote! {
        const _: () = {
            #(#accessors)*

            #[automatically_derived]
            impl ::urlp::Record for #struct_ident {
                const FIELDS: &'static [::urlp::Field<Self>] = &[#(#entries),*];
            }

            #[automatically_derived]
            impl ::urlp::Decodable for #struct_ident {
                fn target(&mut self) -> ::urlp::Target<'_> {
                    ::urlp::Target::Record(self)
                }
            }
        };
    })
}

/// Collect and validate the annotations attached to a field via `#[urlp(...)]`.
fn field_tags(attrs: &[Attribute]) -> Result<Vec<FieldTag>, darling::Error> {
    let mut errors = darling::Error::accumulator();
    let mut tags: Vec<FieldTag> = Vec::new();
    for attr in attrs {
        let args = attr
            .parse_args_with(Punctuated::<TagArg, Token![,]>::parse_terminated)
            .map_err(darling::Error::from);
        let Some(args) = errors.handle(args) else {
            continue;
        };
        for arg in args {
            let (tag, annotation) = match arg {
                TagArg::Default(annotation) => (DEFAULT_TAG.to_owned(), annotation),
                TagArg::Named { tag, annotation } => (tag.unraw().to_string(), annotation),
            };
            if tags.iter().any(|t| t.tag == tag) {
                errors.push(
                    darling::Error::custom(format!(
                        "The `{tag}` tag is annotated more than once on the same field. \
                        Merge the annotations into a single comma-separated list"
                    ))
                    .with_span(&annotation),
                );
                continue;
            }
            if let Err(e) = Annotation::validate(&annotation.value()) {
                errors.push(darling::Error::custom(e).with_span(&annotation));
                continue;
            }
            tags.push(FieldTag { tag, annotation });
        }
    }
    errors.finish_with(tags)
}

fn reject_invalid_inputs(input: &RecordInput) -> Result<(), darling::Error> {
    let struct_ident = &input.ident;
    if let Some(param) = input.generics.params.first() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Record)]` can't be applied to `{struct_ident}`, it has generic parameters. \
            Use concrete types instead, or implement `urlp::Record` manually",
        ))
        .with_span(param));
    }
    Ok(())
}
