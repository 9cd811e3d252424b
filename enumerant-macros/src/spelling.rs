use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::{Error, Ident, LitStr, Result};

/// Separates scope segments and the variant name in a qualified spelling.
pub const SEPARATOR: &str = "::";

/// How the names of an enum's values are qualified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Qualification {
    /// Names are `"{scope}::{variant}"`.
    Scoped { scope: String },
    /// Names are the bare variant spelling. The scope still names the type.
    Unscoped { scope: String },
}

impl Qualification {
    /// Selects the qualification for the enum `ident`.
    ///
    /// An explicit `scope` replaces the identifier in both the type spelling and the value names.
    pub fn new(ident: &Ident, scope: Option<&LitStr>, unscoped: bool) -> Result<Self> {
        let scope = match scope {
            Some(lit) => {
                let text = lit.value();
                validate_scope(&text, lit.span())?;
                text
            }
            None => ident.unraw().to_string(),
        };
        Ok(if unscoped {
            Self::Unscoped { scope }
        } else {
            Self::Scoped { scope }
        })
    }

    pub fn is_scoped(&self) -> bool {
        matches!(self, Self::Scoped { .. })
    }

    pub fn type_spelling(&self) -> &str {
        match self {
            Self::Scoped { scope } | Self::Unscoped { scope } => scope,
        }
    }

    pub fn spell(&self, variant: &str) -> String {
        match self {
            Self::Scoped { scope } => format!("{scope}{SEPARATOR}{variant}"),
            Self::Unscoped { .. } => variant.to_string(),
        }
    }
}

/// Spells a single variant or alias before qualification.
pub fn variant_spelling(ident: &Ident, rename: Option<&LitStr>) -> Result<String> {
    match rename {
        Some(lit) => {
            let text = lit.value();
            if text.is_empty() {
                return Err(Error::new(lit.span(), "renamed variants must not be empty"));
            }
            if text.contains(':') {
                return Err(Error::new(
                    lit.span(),
                    "renamed variants must not contain `:`",
                ));
            }
            Ok(text)
        }
        None => Ok(ident.unraw().to_string()),
    }
}

fn validate_scope(text: &str, span: Span) -> Result<()> {
    for segment in text.split(SEPARATOR) {
        if segment.is_empty() {
            return Err(Error::new(
                span,
                format!("scope `{text}` has an empty segment"),
            ));
        }
        if !is_identifier(segment) {
            return Err(Error::new(
                span,
                format!("scope segment `{segment}` is not an identifier"),
            ));
        }
    }
    Ok(())
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {
            segment != "_" && chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
