use syn::{parse_macro_input, DeriveInput};

use crate::gen::derive_impl;

mod ast;
mod config;
mod errors;
mod gen;
mod spelling;

#[proc_macro_derive(Enumerant, attributes(enumerant))]
pub fn derive_enumerant(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    derive_impl(parse_macro_input!(tokens as DeriveInput)).into()
}
