use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Parse the next argument in the input stream and applies it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        let ident_str = ident.to_string();
        match ident_str.as_str() {
            "message" => self.message = Some(input.parse()?),
            "labels" => self.labels = Some(input.parse()?),
            "help" => self.help = Some(input.parse()?),
            _ => return Err(syn::Error::new_spanned(ident, format!("unknown tag `{}`", ident_str))),
        }

        Ok(())
    }

    /// Finds the `error` attribute in the given attributes and parses its arguments. Returns the
    /// default (empty) arguments if there is no such attribute.
    fn from_attributes(attributes: &[Attribute]) -> Result<Self> {
        attributes.iter()
            .find(|attr| attr.path().is_ident("error"))
            .map_or_else(|| Ok(Self::default()), |attr| attr.parse_args::<ErrorArgs>())
    }

    /// Generates an expression that evaluates to the `(message, labels, help)` triple of the
    /// error, as `(String, Vec<String>, Option<String>)`.
    fn parts(&self) -> TokenStream2 {
        let message = self.message.as_ref()
            .map_or_else(|| quote! { String::new() }, |e| quote! { (#e).to_string() });
        let labels = self.labels.as_ref()
            .map_or_else(
                || quote! { Vec::<String>::new() },
                |e| quote! {
                    (#e).into_iter()
                        .map(|label| label.to_string())
                        .collect::<Vec<String>>()
                },
            );
        let help = self.help.as_ref()
            .map_or_else(|| quote! { None::<String> }, |e| quote! { Some((#e).to_string()) });
        quote! { (#message, #labels, #help) }
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        // trailing commas are allowed
        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// Creates a braced pattern that binds the named fields of `path`. Unit and tuple fields bind
/// nothing, since `Path {}` matches any struct or variant.
fn destructure_fields(path: TokenStream2, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| field.ident.as_ref());
            quote! { #path { #(#fields),* } }
        },
        Fields::Unnamed(_) | Fields::Unit => quote! { #path {} },
    }
}

/// One `match` arm of the generated code: a pattern and the error arguments that apply to it.
#[derive(Debug)]
struct Arm {
    pattern: TokenStream2,
    args: ErrorArgs,
}

/// The target struct or enum to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    name: Ident,
    arms: Vec<Arm>,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<DeriveInput>()?;
        let name = item.ident;

        let arms = match item.data {
            Data::Struct(data) => vec![Arm {
                pattern: destructure_fields(quote! { #name }, &data.fields),
                args: ErrorArgs::from_attributes(&item.attrs)?,
            }],
            Data::Enum(data) => data.variants
                .iter()
                .map(|variant| {
                    let variant_name = &variant.ident;
                    Ok(Arm {
                        pattern: destructure_fields(quote! { #name::#variant_name }, &variant.fields),
                        args: ErrorArgs::from_attributes(&variant.attrs)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "`ErrorKind` cannot be derived for unions",
                ));
            },
        };

        Ok(ErrorKindTarget { name, arms })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let arms = self.arms.iter().map(|Arm { pattern, args }| {
            let parts = args.parts();
            quote! { #pattern => #parts }
        }).collect::<Vec<_>>();

        tokens.extend(quote! {
            impl exptree_error::ErrorKind for #name {
                #[allow(unused_variables)]
                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[std::ops::Range<usize>],
                ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                    let (message, labels, help): (String, Vec<String>, Option<String>) = match self {
                        #(#arms,)*
                    };

                    let offset = spans.first().map_or(0, |span| span.start);
                    let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                        .with_message(message)
                        .with_labels(
                            labels
                                .into_iter()
                                .zip(spans.iter())
                                .map(|(label_str, span)| {
                                    let mut label = ariadne::Label::new((src_id, span.clone()))
                                        .with_color(exptree_error::EXPR);

                                    if !label_str.is_empty() {
                                        label = label.with_message(label_str);
                                    }

                                    label
                                })
                                .collect::<Vec<_>>()
                        );

                    if let Some(help) = help {
                        builder.set_help(help);
                    }
                    builder.finish()
                }
            }

            impl std::fmt::Display for #name {
                #[allow(unused_variables)]
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let (message, _, _): (String, Vec<String>, Option<String>) = match self {
                        #(#arms,)*
                    };
                    write!(f, "{}", message)
                }
            }

            impl std::error::Error for #name {}
        });
    }
}
