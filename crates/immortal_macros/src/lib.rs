use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Ident, LitInt, Token,
};

extern crate proc_macro;

/// `name: rows, cols, threshold, modulus => expected`
struct Regression {
    name: Ident,
    rows: LitInt,
    cols: LitInt,
    threshold: LitInt,
    modulus: LitInt,
    expected: LitInt,
}

impl Parse for Regression {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![:]>()?;
        let rows = input.parse()?;
        input.parse::<Token![,]>()?;
        let cols = input.parse()?;
        input.parse::<Token![,]>()?;
        let threshold = input.parse()?;
        input.parse::<Token![,]>()?;
        let modulus = input.parse()?;
        input.parse::<Token![=>]>()?;
        let expected = input.parse()?;
        Ok(Regression {
            name,
            rows,
            cols,
            threshold,
            modulus,
            expected,
        })
    }
}

/// Expands to a `#[test]` asserting `immortal::compute` on one literal query.
#[proc_macro]
pub fn regression(tokens: TokenStream) -> TokenStream {
    let Regression {
        name,
        rows,
        cols,
        threshold,
        modulus,
        expected,
    } = parse_macro_input!(tokens as Regression);
    let tokens: proc_macro2::TokenStream = quote! {
        #[test]
        fn #name () {
            let (rows, cols, threshold, modulus): (u64, u64, u64, u64) =
                (#rows, #cols, #threshold, #modulus);
            let expected: u64 = #expected;
            assert_eq!(
                ::immortal::compute(rows, cols, threshold, modulus),
                Ok(expected),
                "compute({rows}, {cols}, {threshold}, {modulus})",
            );
        }
    };
    tokens.into()
}
