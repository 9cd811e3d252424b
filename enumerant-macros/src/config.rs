use litrs::IntegerLit;
use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{parse_quote, Attribute, Error, Ident, LitInt, LitStr, Path, Result, Token};

use crate::errors::Errors;
use crate::spelling::Qualification;

const FALLBACK_MIN: i128 = -128;
const FALLBACK_MAX: i128 = 127;

/// A bound given as an attribute literal.
#[derive(Clone, Copy, Debug)]
pub struct LiteralBound {
    pub value: i128,
    pub span: Span,
}

#[derive(Default)]
struct ConfigBuilder {
    crate_path: Option<Path>,
    min: Option<LiteralBound>,
    max: Option<LiteralBound>,
    scope: Option<LitStr>,
    unscoped: bool,
    contiguous: bool,
    bitset: bool,
}

impl ConfigBuilder {
    fn parse_meta(&mut self, meta: ParseNestedMeta) -> Result<()> {
        if meta.path.is_ident("crate_path") {
            self.crate_path = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("min") {
            self.min = Some(parse_bound(&meta)?);
        } else if meta.path.is_ident("max") {
            self.max = Some(parse_bound(&meta)?);
        } else if meta.path.is_ident("scope") {
            self.scope = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("unscoped") {
            self.unscoped = true;
        } else if meta.path.is_ident("contiguous") {
            self.contiguous = true;
        } else if meta.path.is_ident("bitset") {
            self.bitset = true;
        } else {
            return Err(meta.error("unsupported property"));
        }
        Ok(())
    }

    fn build(self, ident: &Ident, errors: &mut Errors) -> Config {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if max.value <= min.value {
                errors.push(Error::new(
                    max.span,
                    format!("max ({}) must be greater than min ({})", max.value, min.value),
                ));
            }
        }

        let qualification = errors
            .record(Qualification::new(ident, self.scope.as_ref(), self.unscoped))
            .unwrap_or_else(|| Qualification::Scoped {
                scope: ident.to_string(),
            });

        Config {
            crate_path: self.crate_path.unwrap_or_else(|| parse_quote! { ::enumerant }),
            min: self.min,
            max: self.max,
            qualification,
            contiguous: self.contiguous,
            bitset: self.bitset,
        }
    }
}

/// Container-level settings from `#[enumerant(...)]`.
pub struct Config {
    pub crate_path: Path,
    pub min: Option<LiteralBound>,
    pub max: Option<LiteralBound>,
    pub qualification: Qualification,
    pub contiguous: bool,
    pub bitset: bool,
}

impl Config {
    pub fn new(ident: &Ident, attrs: &[Attribute]) -> (Self, Errors) {
        let mut errors = Errors::new();
        let mut builder = ConfigBuilder::default();
        for attr in attrs {
            if attr.path().is_ident("enumerant") {
                errors.record(attr.parse_nested_meta(|meta| builder.parse_meta(meta)));
            }
        }
        (builder.build(ident, &mut errors), errors)
    }
}

/// The bounds used when an enum configures neither a literal nor a sentinel.
///
/// `ENUMERANT_MIN_VALUE` and `ENUMERANT_MAX_VALUE` override them when set while this crate is
/// compiled.
pub fn default_bounds(span: Span) -> Result<(i128, i128)> {
    let min = env_bound(
        "ENUMERANT_MIN_VALUE",
        option_env!("ENUMERANT_MIN_VALUE"),
        FALLBACK_MIN,
        span,
    )?;
    let max = env_bound(
        "ENUMERANT_MAX_VALUE",
        option_env!("ENUMERANT_MAX_VALUE"),
        FALLBACK_MAX,
        span,
    )?;
    Ok((min, max))
}

fn env_bound(var: &str, value: Option<&str>, fallback: i128, span: Span) -> Result<i128> {
    match value {
        None => Ok(fallback),
        Some(text) => text.trim().parse().map_err(|_| {
            Error::new(span, format!("`{var}` must be an integer, found {text:?}"))
        }),
    }
}

fn parse_bound(meta: &ParseNestedMeta) -> Result<LiteralBound> {
    let input = meta.value()?;
    let minus: Option<Token![-]> = input.parse()?;
    let lit: LitInt = input.parse()?;
    let span = match &minus {
        Some(minus) => minus.span().join(lit.span()).unwrap_or_else(|| lit.span()),
        None => lit.span(),
    };

    let Ok(integer_lit) = IntegerLit::try_from(lit.token()) else {
        return Err(Error::new(span, "expected an integer literal"));
    };
    let Some(magnitude) = integer_lit.value::<u128>() else {
        return Err(Error::new(span, "could not parse integer literal"));
    };
    let value = if minus.is_some() {
        0i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    };
    match value {
        Some(value) => Ok(LiteralBound { value, span }),
        None => Err(Error::new(span, "bound out of range for i128")),
    }
}

#[cfg(test)]
mod tests {
    use proc_macro2::Span;
    use syn::{parse_quote, DeriveInput};

    use super::{env_bound, Config};
    use crate::spelling::Qualification;

    fn config(input: DeriveInput) -> Config {
        let (cfg, errors) = Config::new(&input.ident, &input.attrs);
        errors.finish().unwrap();
        cfg
    }

    fn config_errors(input: DeriveInput) -> Vec<String> {
        let (_, errors) = Config::new(&input.ident, &input.attrs);
        errors
            .finish()
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn defaults() {
        let cfg = config(parse_quote! { enum Color { Red } });
        assert_eq!(cfg.crate_path, parse_quote! { ::enumerant });
        assert!(cfg.min.is_none() && cfg.max.is_none());
        assert_eq!(
            cfg.qualification,
            Qualification::Scoped {
                scope: "Color".to_string()
            },
        );
        assert!(!cfg.contiguous && !cfg.bitset);
    }

    #[test]
    fn every_property() {
        let cfg = config(parse_quote! {
            #[enumerant(crate_path = my::enumerant, min = -0x10, max = 0b111)]
            #[enumerant(scope = "a::Color", unscoped, contiguous, bitset)]
            enum Color { Red }
        });
        assert_eq!(cfg.crate_path, parse_quote! { my::enumerant });
        assert_eq!(cfg.min.unwrap().value, -16);
        assert_eq!(cfg.max.unwrap().value, 7);
        assert_eq!(
            cfg.qualification,
            Qualification::Unscoped {
                scope: "a::Color".to_string()
            },
        );
        assert!(cfg.contiguous && cfg.bitset);
    }

    #[test]
    fn other_attributes_are_ignored() {
        let cfg = config(parse_quote! {
            #[derive(Clone, Copy)]
            #[repr(u8)]
            enum Color { Red }
        });
        assert!(cfg.min.is_none());
    }

    #[test]
    fn unsupported_property() {
        assert_eq!(
            config_errors(parse_quote! {
                #[enumerant(colour)]
                enum Color { Red }
            }),
            ["unsupported property"],
        );
    }

    #[test]
    fn inverted_literal_bounds() {
        assert_eq!(
            config_errors(parse_quote! {
                #[enumerant(min = 5, max = 5)]
                enum Color { Red }
            }),
            ["max (5) must be greater than min (5)"],
        );
    }

    #[test]
    fn errors_accumulate() {
        let errors = config_errors(parse_quote! {
            #[enumerant(min = 9, max = 1)]
            #[enumerant(scope = "a::::b")]
            enum Color { Red }
        });
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn environment_bounds() {
        let span = Span::call_site();
        assert_eq!(env_bound("X", None, -128, span).unwrap(), -128);
        assert_eq!(env_bound("X", Some(" -300 "), -128, span).unwrap(), -300);
        assert!(env_bound("X", Some("lots"), -128, span).is_err());
    }
}
