use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Fields, ItemStruct, Path, Token};

/// Capabilities provided by `nominal::ops`. Bare idents naming one of these
/// are resolved to the full path so the caller doesn't have to import them.
const BUILTIN_CAPS: &[&str] = &[
    "Equals",
    "Orders",
    "Hashes",
    "Adds",
    "Subtracts",
    "Multiplies",
    "Divides",
    "Increments",
    "Decrements",
    "Displays",
    "Parses",
];

pub fn expand_strong_type(attr: TokenStream2, item: ItemStruct) -> syn::Result<TokenStream2> {
    let caps = Punctuated::<Path, Token![,]>::parse_terminated.parse2(attr)?;

    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "#[strong_type] does not support generic typedefs",
        ));
    }

    let underlying = match &item.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
        _ => {
            return Err(syn::Error::new_spanned(
                &item.fields,
                "#[strong_type] expects a newtype struct with exactly one field, \
                 e.g. `struct CycleCount(u64);`",
            ));
        }
    };

    let attrs = &item.attrs;
    let vis = &item.vis;
    let ident = &item.ident;
    let tag = format_ident!("{ident}Tag");
    let cap_paths: Vec<TokenStream2> = caps.iter().map(resolve_cap).collect();

    Ok(quote! {
        #[doc(hidden)]
        #vis enum #tag {}

        #(#attrs)*
        #vis type #ident = ::nominal::Strong<#tag, #underlying>;

        #(impl #cap_paths for #tag {})*
    })
}

/// Map a bare builtin capability name to its `nominal::ops` path; leave
/// everything else untouched.
fn resolve_cap(path: &Path) -> TokenStream2 {
    if path.leading_colon.is_none() && path.segments.len() == 1 {
        let segment = &path.segments[0];
        if segment.arguments.is_none() && BUILTIN_CAPS.iter().any(|cap| segment.ident == cap) {
            let ident = &segment.ident;
            return quote!(::nominal::ops::#ident);
        }
    }
    quote!(#path)
}
