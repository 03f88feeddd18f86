use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn, LitStr};

#[derive(Default)]
struct Injected {
    version: Option<LitStr>,
    commit: Option<LitStr>,
}

/// Installs the build metadata before the function body runs.
///
/// Without arguments `VERS_VERSION` and `VERS_GITCOMMIT` are read from the
/// environment the annotated crate is compiled in. A value containing a line
/// break is treated as unset, the same as the `vers` build script does.
///
/// With arguments only the given literals are used, a missing key stays
/// empty:
///
/// ```ignore
/// #[vers::main(version = "1.4.2", commit = "a1b2c3d")]
/// fn main() {}
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, input: TokenStream) -> TokenStream {
    let from_env = args.is_empty();

    let mut injected = Injected::default();
    let parser = syn::meta::parser(|meta| {
        let slot = if meta.path.is_ident("version") {
            &mut injected.version
        } else if meta.path.is_ident("commit") {
            &mut injected.commit
        } else {
            return Err(meta.error("expected `version` or `commit`"));
        };

        if slot.is_some() {
            return Err(meta.error("duplicate key"));
        }
        *slot = Some(meta.value()?.parse()?);
        Ok(())
    });
    parse_macro_input!(args with parser);

    let input_fn = parse_macro_input!(input as ItemFn);

    let info = if from_env {
        quote! {
            ::vers::BuildInfo::from_build_env(
                ::std::option_env!("VERS_VERSION"),
                ::std::option_env!("VERS_GITCOMMIT"),
            )
        }
    } else {
        let version = injected.version.map(|v| v.value()).unwrap_or_default();
        let commit = injected.commit.map(|c| c.value()).unwrap_or_default();
        quote! { ::vers::BuildInfo::new(#version, #commit) }
    };

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input_fn;

    let expanded = quote! {
        #(#attrs)*
        #vis #sig {
            let _ = ::vers::__install(#info);
            #block
        }
    };

    TokenStream::from(expanded)
}
