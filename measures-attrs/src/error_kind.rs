use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// One `tag = expression` entry of the `error` attribute.
struct Tag {
    name: Ident,
    value: Expr,
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Tag { name, value: input.parse()? })
    }
}

/// The parts of the report described by the `error` attribute.
#[derive(Default)]
struct ReportParts {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
    note: Option<Expr>,
}

impl ReportParts {
    /// Sorts the tags of the attribute into their parts. Unknown and repeated tags are errors.
    fn from_tags(tags: Punctuated<Tag, Token![,]>) -> Result<Self> {
        let mut parts = Self::default();
        for Tag { name, value } in tags {
            let part = match name.to_string().as_str() {
                "message" => &mut parts.message,
                "labels" => &mut parts.labels,
                "help" => &mut parts.help,
                "note" => &mut parts.note,
                other => return Err(syn::Error::new_spanned(&name, format!("unknown tag `{}`", other))),
            };
            if part.replace(value).is_some() {
                return Err(syn::Error::new_spanned(&name, format!("tag `{}` is given more than once", name)));
            }
        }
        Ok(parts)
    }
}

/// The struct to derive [`ErrorKind`] for.
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Fields,
    parts: ReportParts,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<DeriveInput>()?;
        let Data::Struct(data) = item.data else {
            return Err(syn::Error::new(item.ident.span(), "`ErrorKind` can only be derived for structs"));
        };

        let attr = item.attrs
            .iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new(item.ident.span(), "missing `#[error(...)]` attribute"))?;
        let parts = ReportParts::from_tags(attr.parse_args_with(Punctuated::parse_terminated)?)?;
        if parts.message.is_none() {
            return Err(syn::Error::new_spanned(attr, "the `error` attribute requires a `message` tag"));
        }

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: data.fields,
            parts,
        })
    }
}

impl ErrorKindTarget {
    /// Brings the named fields of `self` into scope for the tag expressions.
    fn bind_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#names),* } = self; }
            },
            Fields::Unnamed(fields) => quote_spanned! { fields.paren_token.span.join() =>
                compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => quote! {},
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bind_fields = self.bind_fields();
        let message = &self.parts.message;
        let labels = self.parts.labels
            .as_ref()
            .map_or_else(|| quote! { [""] }, |labels| quote! { #labels });
        let help = self.parts.help.as_ref().map(|help| quote! { builder.set_help(#help); });
        let note = self.parts.note.as_ref().map(|note| quote! { builder.set_note(#note); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> measures_error::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #bind_fields

                // one label per span, in order; extra spans or labels are dropped
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let text = text.to_string();
                        let label = measures_error::ariadne::Label::new((src_id, span.clone()))
                            .with_color(measures_error::EXPR);
                        if text.is_empty() { label } else { label.with_message(text) }
                    })
                    .collect::<Vec<_>>();

                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = measures_error::ariadne::Report::build(
                    measures_error::ariadne::ReportKind::Error,
                    src_id,
                    offset,
                )
                    .with_message(#message)
                    .with_labels(labels);

                #help
                #note
                builder.finish()
            }
        });
    }
}
