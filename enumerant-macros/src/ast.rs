use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Error, Fields, Ident, LitStr, Result, Visibility};

use crate::errors::Errors;

const REPR_TYPES: [&str; 12] = [
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

pub struct Enum {
    pub visibility: Visibility,
    pub name: Ident,
    pub repr: Option<Ident>,
    pub variants: Vec<Variant>,
}

pub struct Variant {
    pub name: Ident,
    pub rename: Option<LitStr>,
    pub aliases: Vec<Ident>,
    pub first: Option<Span>,
    pub last: Option<Span>,
}

impl Enum {
    pub fn from_ast(input: &DeriveInput, errors: &mut Errors) -> Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(Error::new(
                input.ident.span(),
                "`Enumerant` can only be derived for enums",
            ));
        };
        if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
            return Err(Error::new(
                input.generics.span(),
                "generic enums are not supported",
            ));
        }
        if data.variants.is_empty() {
            return Err(Error::new(
                input.ident.span(),
                "enumeration has no variants",
            ));
        }

        let repr = errors.record(parse_repr(&input.attrs)).flatten();

        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                errors.push(Error::new(
                    variant.fields.span(),
                    "variants must not have fields",
                ));
                continue;
            }
            if let Some(variant) = errors.record(Variant::new(&variant.ident, &variant.attrs)) {
                variants.push(variant);
            }
        }

        check_unique_sentinel(&variants, |v| v.first, "first", errors);
        check_unique_sentinel(&variants, |v| v.last, "last", errors);

        Ok(Self {
            visibility: input.vis.clone(),
            name: input.ident.clone(),
            repr,
            variants,
        })
    }

    /// The variant marked `#[enumerant(first)]`, if any.
    pub fn first(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.first.is_some())
    }

    /// The variant marked `#[enumerant(last)]`, if any.
    pub fn last(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.last.is_some())
    }
}

impl Variant {
    fn new(name: &Ident, attrs: &[Attribute]) -> Result<Self> {
        let mut variant = Self {
            name: name.clone(),
            rename: None,
            aliases: Vec::new(),
            first: None,
            last: None,
        };
        let mut errors = Errors::new();
        for attr in attrs {
            if attr.path().is_ident("enumerant") {
                errors.record(attr.parse_nested_meta(|meta| variant.parse_meta(meta)));
            }
        }
        errors.finish()?;
        Ok(variant)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("rename") {
            self.rename = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("alias") {
            let alias: Ident = meta.value()?.parse()?;
            if alias.unraw() == self.name.unraw() {
                return Err(Error::new(alias.span(), "an alias must differ from its variant"));
            }
            self.aliases.push(alias);
        } else if meta.path.is_ident("first") {
            self.first = Some(meta.path.span());
        } else if meta.path.is_ident("last") {
            self.last = Some(meta.path.span());
        } else {
            return Err(meta.error("unsupported property"));
        }
        Ok(())
    }
}

fn check_unique_sentinel(
    variants: &[Variant],
    marker: impl Fn(&Variant) -> Option<Span>,
    what: &str,
    errors: &mut Errors,
) {
    for span in variants.iter().filter_map(&marker).skip(1) {
        errors.push(Error::new(
            span,
            format!("only one variant may be marked `{what}`"),
        ));
    }
}

/// Reads the integer type from `#[repr(..)]`, ignoring hints such as `C` or `align`.
fn parse_repr(attrs: &[Attribute]) -> Result<Option<Ident>> {
    let mut repr = None;
    for attr in attrs {
        if attr.path().is_ident("repr") {
            attr.parse_nested_meta(|meta| {
                if let Some(ident) = meta.path.get_ident() {
                    if REPR_TYPES.iter().any(|ty| ident == ty) {
                        repr = Some(ident.clone());
                    }
                }
                if meta.input.peek(syn::token::Paren) {
                    let _content;
                    syn::parenthesized!(_content in meta.input);
                }
                Ok(())
            })?;
        }
    }
    Ok(repr)
}

#[cfg(test)]
mod tests {
    use syn::{parse_quote, DeriveInput};

    use super::Enum;
    use crate::errors::Errors;

    fn parse(input: DeriveInput) -> (syn::Result<Enum>, Errors) {
        let mut errors = Errors::new();
        (Enum::from_ast(&input, &mut errors), errors)
    }

    #[test]
    fn variants_and_attributes() {
        let (result, errors) = parse(parse_quote! {
            #[repr(C, u16)]
            pub enum Numbers {
                #[enumerant(first)]
                Zero,
                One,
                #[enumerant(alias = FIVE, alias = Cinq)]
                Five = 5,
                #[enumerant(rename = "nine", last)]
                Nine = 9,
            }
        });
        errors.finish().unwrap();
        let input = result.unwrap();

        assert_eq!(input.name, "Numbers");
        assert_eq!(input.repr.as_ref().unwrap(), "u16");
        assert_eq!(input.variants.len(), 4);
        assert_eq!(input.variants[2].aliases.len(), 2);
        assert_eq!(input.variants[3].rename.as_ref().unwrap().value(), "nine");
        assert_eq!(input.first().unwrap().name, "Zero");
        assert_eq!(input.last().unwrap().name, "Nine");
    }

    #[test]
    fn repr_defaults_to_none() {
        let (result, _) = parse(parse_quote! { #[repr(align(4))] enum Color { Red } });
        assert!(result.unwrap().repr.is_none());
    }

    #[test]
    fn rejects_structs() {
        let (result, _) = parse(parse_quote! { struct Color; });
        assert!(result.is_err());
    }

    #[test]
    fn rejects_generics() {
        let (result, _) = parse(parse_quote! { enum Color<T> { Red } });
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_enums() {
        let (result, _) = parse(parse_quote! { enum Never {} });
        assert!(result.is_err());
    }

    #[test]
    fn reports_every_bad_variant() {
        let (result, errors) = parse(parse_quote! {
            enum Shape {
                Circle(f32),
                Square { side: f32 },
                #[enumerant(shiny)]
                Point,
                #[enumerant(first)]
                A,
                #[enumerant(first)]
                B,
            }
        });
        assert!(result.is_ok());
        assert_eq!(errors.finish().unwrap_err().into_iter().count(), 4);
    }

    #[test]
    fn alias_must_differ() {
        let (_, errors) = parse(parse_quote! {
            enum Color {
                #[enumerant(alias = Red)]
                Red,
            }
        });
        assert!(errors.finish().is_err());
    }
}
