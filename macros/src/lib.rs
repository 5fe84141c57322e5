//! This is a proc-macro helper library. Don't use this library directly; use `shadevec` instead.

#![allow(missing_docs, reason = "not intended to be used directly")]

use std::error::Error;
use std::fmt;

use quote::quote;
use syn::parse::{Parse, ParseStream};

/// Generates every swizzle accessor of a vector type.
///
/// Usage: `swizzles!(Vec4, 4);`, in the crate which defines `Vec4`,
/// where `Vec4` is generic over its lane type and has 4 lanes.
#[proc_macro]
pub fn swizzles(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as SwizzlesInput);

    match swizzles_impl(&input) {
        Ok(expansion) => expansion.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

// -------------------------------------------------------------------------------------------------

struct SwizzlesInput {
    self_type: syn::Ident,
    width: syn::LitInt,
}

impl Parse for SwizzlesInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let self_type = input.parse()?;
        input.parse::<syn::Token![,]>()?;
        let width = input.parse()?;
        input.parse::<Option<syn::Token![,]>>()?;
        Ok(Self { self_type, width })
    }
}

fn swizzles_impl(input: &SwizzlesInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let SwizzlesInput { self_type, width } = input;
    let width_value: usize = width.base10_parse()?;

    let config = shadevec_swizzle::Config::new()
        .runtime_path("crate")
        .self_type(self_type.to_string());

    let generated_source: String = shadevec_swizzle::write_string(width_value, config)
        .map_err(|error| {
            syn::Error::new_spanned(
                width,
                format_args!("failed to generate swizzles: {}", ErrorChain(&error)),
            )
        })?;

    let generated_tokens: proc_macro2::TokenStream =
        generated_source.parse().map_err(|error| {
            syn::Error::new(
                self_type.span(),
                format_args!(
                    "internal error: generator did not produce valid Rust: {}",
                    ErrorChain(&error)
                ),
            )
        })?;

    Ok(quote! {
        const _: () = assert!(
            crate::#self_type::<()>::LANES == #width_value,
            "swizzle width does not match the lane count of the vector type"
        );

        #generated_tokens
    })
}

// -------------------------------------------------------------------------------------------------

/// Formatting wrapper which prints an [`Error`] together with its `source()` chain.
///
/// The text begins with the [`fmt::Display`] format of the error.
#[derive(Clone, Copy, Debug)]
struct ErrorChain<'a>(&'a (dyn Error + 'a));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_error_chain(fmt, self.0)
    }
}

fn format_error_chain(fmt: &mut fmt::Formatter<'_>, mut error: &(dyn Error + '_)) -> fmt::Result {
    write!(fmt, "{error}")?;
    while let Some(source) = error.source() {
        error = source;
        write!(fmt, "\n↳ {error}")?;
    }

    Ok(())
}
