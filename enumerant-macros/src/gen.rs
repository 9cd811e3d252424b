use std::collections::hash_map::Entry;
use std::collections::HashMap;

use proc_macro2::{Literal, Span, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{DeriveInput, Error, Ident, Result};

use crate::ast::{Enum, Variant};
use crate::config::{default_bounds, Config, LiteralBound};
use crate::errors::Errors;
use crate::spelling::variant_spelling;

pub fn derive_impl(input: DeriveInput) -> TokenStream {
    match derive_impl_inner(&input) {
        Ok(result) => result,
        Err(e) => e.into_compile_error(),
    }
}

fn derive_impl_inner(input: &DeriveInput) -> Result<TokenStream> {
    let (cfg, mut errors) = Config::new(&input.ident, &input.attrs);
    let parsed = Enum::from_ast(input, &mut errors);
    let parsed = errors.finish_with(parsed)?;
    generate(&cfg, &parsed)
}

/// Names the storage word for a bitset over `count` variants.
fn bit_storage_for_count(count: usize, span: Span) -> Result<Ident> {
    let primitive_widths = [8, 16, 32, 64];
    match primitive_widths.binary_search(&count) {
        Ok(index) | Err(index) if index < primitive_widths.len() => {
            Ok(format_ident!("u{}", primitive_widths[index], span = span))
        }
        _ => Err(Error::new(
            span,
            format!("requested bitset overflow: {count} variants do not fit in 64 bits"),
        )),
    }
}

fn int_literal(value: i128) -> TokenStream {
    let magnitude = Literal::u128_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}

/// Picks the expression for one end of the scan bounds.
fn bound_expr(
    name: &Ident,
    literal: Option<LiteralBound>,
    sentinel: Option<&Variant>,
    fallback: i128,
) -> Result<TokenStream> {
    match (literal, sentinel) {
        (Some(_), Some(sentinel)) => Err(Error::new(
            sentinel.name.span(),
            "a sentinel variant conflicts with a literal bound",
        )),
        (Some(literal), None) => Ok(int_literal(literal.value)),
        (None, Some(sentinel)) => {
            let variant = &sentinel.name;
            Ok(quote! { #name::#variant as i128 })
        }
        (None, None) => Ok(int_literal(fallback)),
    }
}

fn generate(cfg: &Config, input: &Enum) -> Result<TokenStream> {
    let crate_path = &cfg.crate_path;
    let private = quote! { #crate_path::__private };
    let name = &input.name;
    let visibility = &input.visibility;
    let underlying = input
        .repr
        .clone()
        .unwrap_or_else(|| format_ident!("isize"));

    // One spelling per variant, each followed by its aliases. Aliases share the variant's value,
    // so the scan keeps the variant's own spelling.
    let mut spellings = Vec::new();
    let mut declared = Vec::new();
    let mut alias_consts = Vec::new();
    let mut errors = Errors::new();
    let mut spelled_by: HashMap<String, &Ident> = HashMap::new();
    for variant in &input.variants {
        let ident = &variant.name;
        let text = variant_spelling(ident, variant.rename.as_ref())?;
        match spelled_by.entry(text.clone()) {
            Entry::Occupied(entry) => errors.push(Error::new(
                variant.rename.as_ref().map_or(ident.span(), |rename| rename.span()),
                format!("`{ident}` is spelled \"{text}\", which already names `{}`", entry.get()),
            )),
            Entry::Vacant(entry) => {
                entry.insert(ident);
            }
        }
        let spelling = cfg.qualification.spell(&text);
        spellings.push(quote! { Spelling::new(#name::#ident as i128, #spelling) });
        declared.push(quote! { #name::#ident });

        for alias in &variant.aliases {
            alias_consts.push(quote! { #visibility const #alias: Self = Self::#ident; });
            if !cfg.contiguous {
                let spelling = cfg.qualification.spell(&alias.unraw().to_string());
                spellings.push(quote! { Spelling::new(#name::#ident as i128, #spelling) });
                declared.push(quote! { #name::#ident });
            }
        }
    }
    errors.finish()?;
    let declared_len = declared.len();
    let variant_count = input.variants.len();
    let filler = &input.variants[0].name;

    let (default_min, default_max) = default_bounds(name.span())?;
    let min = bound_expr(name, cfg.min, input.first(), default_min)?;
    let max = bound_expr(name, cfg.max, input.last(), default_max)?;

    let (count_expr, order_expr) = if cfg.contiguous {
        (
            quote! { #variant_count },
            quote! { scan::assume_contiguous(DECLARED) },
        )
    } else {
        (
            quote! { scan::count(DECLARED, BOUNDS) },
            quote! { scan::scan(DECLARED, BOUNDS) },
        )
    };

    let (unscoped_tables, with_unscoped) = if cfg!(feature = "ext") {
        (
            quote! {
                const UNSCOPED_NAMES: [&str; COUNT] = table::unscoped_names(DECLARED, &ORDER);
                const BY_UNSCOPED: [usize; COUNT] = table::sort_by_name(&UNSCOPED_NAMES);
            },
            quote! { .with_unscoped(&UNSCOPED_NAMES, &BY_UNSCOPED) },
        )
    } else {
        (quote! {}, quote! {})
    };

    let type_spelling = cfg.qualification.type_spelling();
    let scoped = cfg.qualification.is_scoped();

    let aliases = if alias_consts.is_empty() {
        quote! {}
    } else {
        quote! {
            #[allow(dead_code, non_upper_case_globals)]
            impl #name {
                #(#alias_consts)*
            }
        }
    };

    let dense = if cfg.bitset {
        let storage = bit_storage_for_count(variant_count, name.span())?;
        quote! {
            impl #crate_path::Dense for #name {
                type Bits = #storage;
            }

            const _: () = #private::assert_dense(
                &<#name as #crate_path::Enumerant>::CATALOG,
                #variant_count,
                <#storage>::BITS,
            );
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #aliases

        impl #crate_path::Enumerant for #name {
            type Underlying = #underlying;

            const CATALOG: #crate_path::Catalog<Self> = {
                use #private::{scan, table, Bounds, Catalog, Spelling};

                const DECLARED: &[Spelling] = &[#(#spellings),*];
                const VARIANTS: [#name; #declared_len] = [#(#declared),*];
                const BOUNDS: Bounds = Bounds::new(#min, #max);
                const COUNT: usize = #count_expr;
                const ORDER: [usize; COUNT] = #order_expr;
                const VALUES: [#name; COUNT] = {
                    let mut values = [#name::#filler; COUNT];
                    let mut i = 0;
                    while i < COUNT {
                        values[i] = VARIANTS[ORDER[i]];
                        i += 1;
                    }
                    values
                };
                const RAWS: [i128; COUNT] = table::raws(DECLARED, &ORDER);
                const NAMES: [&str; COUNT] = table::names(DECLARED, &ORDER);
                const BY_NAME: [usize; COUNT] = table::sort_by_name(&NAMES);
                #unscoped_tables

                Catalog::new(#type_spelling, #scoped, BOUNDS, &VALUES, &RAWS, &NAMES, &BY_NAME)
                    #with_unscoped
            };

            #[inline]
            fn enum_to_int(value: Self) -> i128 {
                value as i128
            }

            #[inline]
            fn enum_to_underlying(value: Self) -> #underlying {
                value as #underlying
            }
        }

        const _: () = #private::assert_catalog(&<#name as #crate_path::Enumerant>::CATALOG);

        #dense
    })
}

#[cfg(test)]
mod tests {
    use proc_macro2::Span;
    use quote::quote;
    use syn::{File, Item};

    use super::{bit_storage_for_count, derive_impl, int_literal};

    fn expand(tokens: proc_macro2::TokenStream) -> String {
        derive_impl(syn::parse2(tokens).unwrap()).to_string()
    }

    fn items(tokens: proc_macro2::TokenStream) -> Vec<Item> {
        syn::parse2::<File>(derive_impl(syn::parse2(tokens).unwrap()))
            .unwrap()
            .items
    }

    #[test]
    fn storage_widths() {
        let span = Span::call_site();
        assert_eq!(bit_storage_for_count(1, span).unwrap(), "u8");
        assert_eq!(bit_storage_for_count(8, span).unwrap(), "u8");
        assert_eq!(bit_storage_for_count(9, span).unwrap(), "u16");
        assert_eq!(bit_storage_for_count(33, span).unwrap(), "u64");
        assert_eq!(bit_storage_for_count(64, span).unwrap(), "u64");
        assert!(bit_storage_for_count(65, span).is_err());
    }

    #[test]
    fn negative_literals() {
        assert_eq!(int_literal(-128).to_string(), "- 128");
        assert_eq!(int_literal(127).to_string(), "127");
    }

    #[test]
    fn plain_enum() {
        let items = items(quote! {
            enum Color { Red, Green, Blue }
        });
        // The trait impl and the catalogue check.
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], Item::Impl(_)));
        assert!(matches!(items[1], Item::Const(_)));
    }

    #[test]
    fn spellings_are_qualified() {
        let out = expand(quote! {
            #[enumerant(scope = "gfx::Color")]
            enum Color { Red, #[enumerant(rename = "verde")] Green }
        });
        assert!(out.contains("\"gfx::Color::Red\""));
        assert!(out.contains("\"gfx::Color::verde\""));
        assert!(out.contains("\"gfx::Color\""));
    }

    #[test]
    fn aliases_become_constants() {
        let items = items(quote! {
            pub enum Numbers { Four = 4, #[enumerant(alias = FIVE)] Five }
        });
        assert_eq!(items.len(), 3);
        let Item::Impl(aliases) = &items[0] else {
            panic!("expected the alias impl first");
        };
        assert!(aliases.trait_.is_none());
        assert_eq!(aliases.items.len(), 1);
    }

    #[test]
    fn bitset_adds_dense_impl() {
        let out = expand(quote! {
            #[enumerant(bitset)]
            enum Numbers { Zero, One, Two, Three, Four, Five, Six, Seven, Eight, Nine }
        });
        assert!(out.contains("Dense for Numbers"));
        assert!(out.contains("type Bits = u16"));
        assert!(out.contains("assert_dense"));
    }

    #[test]
    fn contiguous_skips_scan() {
        let out = expand(quote! {
            #[enumerant(contiguous)]
            enum Color { Red, Green }
        });
        assert!(out.contains("assume_contiguous"));
        assert!(!out.contains("scan :: count"));
    }

    #[test]
    fn sentinel_bounds() {
        let out = expand(quote! {
            enum Level {
                #[enumerant(first)]
                Low = -3,
                #[enumerant(last)]
                High = 3,
            }
        });
        assert!(out.contains("Level :: Low as i128"));
        assert!(out.contains("Level :: High as i128"));
    }

    #[test]
    fn errors_become_compile_errors() {
        for tokens in [
            quote! { struct NotAnEnum; },
            quote! { enum Data { A(u8) } },
            quote! { #[enumerant(min = 4, max = 1)] enum Color { Red } },
            quote! { #[enumerant(min = 0)] enum Color { #[enumerant(first)] Red } },
        ] {
            assert!(expand(tokens).contains("compile_error"));
        }
    }

    #[test]
    fn bitset_overflow_is_rejected() {
        let variants = (0..65).map(|i| quote::format_ident!("V{i}"));
        let out = expand(quote! {
            #[enumerant(bitset)]
            enum Wide { #(#variants),* }
        });
        assert!(out.contains("requested bitset overflow"));
    }

    #[test]
    fn colliding_spellings_are_rejected() {
        let out = expand(quote! {
            enum Color { Red, #[enumerant(rename = "Red")] Green, Blue }
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("which already names `Red`"));

        let out = expand(quote! {
            #[enumerant(unscoped)]
            enum Keyword { #[enumerant(rename = "loop")] Repeat, #[enumerant(rename = "loop")] Again }
        });
        assert!(out.contains("which already names `Repeat`"));
    }

    #[test]
    fn raw_and_plain_spellings_collide() {
        let out = expand(quote! {
            enum Token { r#Type, #[enumerant(rename = "Type")] Kind }
        });
        assert!(out.contains("compile_error"));

        let out = expand(quote! {
            enum Token { r#Type, #[enumerant(rename = "type")] Kind }
        });
        assert!(!out.contains("compile_error"));
    }
}
