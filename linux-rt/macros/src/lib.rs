extern crate proc_macro;

use proc_macro::TokenStream;

use proc_macro2::Span;
use quote::quote;
use syn::{parse, parse_macro_input, spanned::Spanned, ItemFn, ReturnType, Type, Visibility};

/// Marks the program's entry point
///
/// The function must have signature `fn() -> !`: there's nothing to return to, so it has to end
/// the process itself.
#[proc_macro_attribute]
pub fn entry(args: TokenStream, input: TokenStream) -> TokenStream {
    let f = parse_macro_input!(input as ItemFn);

    if !args.is_empty() {
        return parse::Error::new(Span::call_site(), "This attribute accepts no arguments")
            .to_compile_error()
            .into();
    }

    if !is_valid_entry(&f) {
        return parse::Error::new(f.span(), "`#[entry]` function must have signature `fn() -> !`")
            .to_compile_error()
            .into();
    }

    let attrs = f.attrs;
    let ident = f.sig.ident;
    let block = f.block;
    quote!(
        #(#attrs)*
        #[export_name = "main"]
        fn #ident() -> ! #block
    )
    .into()
}

fn is_valid_entry(f: &ItemFn) -> bool {
    check_signature(f) && f.sig.inputs.is_empty() && is_bottom(&f.sig.output)
}

/// checks that a function signature
///
/// - has no bounds (like where clauses)
/// - is not `async`
/// - is not `const`
/// - is not `unsafe`
/// - is not generic (has no type parametrs)
/// - is not variadic
/// - uses the Rust ABI (and not e.g. "C")
fn check_signature(item: &ItemFn) -> bool {
    let vis_is_inherited = matches!(item.vis, Visibility::Inherited);

    vis_is_inherited
        && item.sig.constness.is_none()
        && item.sig.asyncness.is_none()
        && item.sig.abi.is_none()
        && item.sig.unsafety.is_none()
        && item.sig.generics.params.is_empty()
        && item.sig.generics.where_clause.is_none()
        && item.sig.variadic.is_none()
}

fn is_bottom(ty: &ReturnType) -> bool {
    if let ReturnType::Type(_, ty) = ty {
        matches!(**ty, Type::Never(_))
    } else {
        false
    }
}
