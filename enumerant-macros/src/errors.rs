use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Error, Result};

/// Collects every error found while reading a derive input so that they can be reported together.
#[derive(Default)]
pub struct Errors {
    error: Option<Error>,
}

impl Errors {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, e: Error) {
        match &mut self.error {
            None => self.error = Some(e),
            Some(error) => error.combine(e),
        }
    }

    pub fn record<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }

    /// Fails with the combined error if anything has been recorded.
    pub fn finish(self) -> Result<()> {
        match self.error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }

    /// Like [`finish`](Self::finish), folding in one last result.
    pub fn finish_with<T>(self, result: Result<T>) -> Result<T> {
        match (result, self.error) {
            (Ok(value), None) => Ok(value),
            (Ok(_), Some(error)) | (Err(error), None) => Err(error),
            (Err(e), Some(mut error)) => {
                error.combine(e);
                Err(error)
            }
        }
    }
}

impl ToTokens for Errors {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        if let Some(error) = &self.error {
            tokens.extend(error.to_compile_error());
        }
    }
}
