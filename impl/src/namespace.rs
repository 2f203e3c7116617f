//! Contains the naming rules for generated units.

/// Strips `::name` from the end of a fully qualified name.
///
/// Returns `None` for a top level name.
pub fn namespace<'a>(full_name: &'a str, name: &str) -> Option<&'a str> {
    full_name.strip_suffix(name)?.strip_suffix("::")
}

/// Derives the unique name of a generated unit.
///
/// Identifiers never contain a `.`, so units from different namespaces can not collide.
pub fn unit_name(namespace: Option<&str>, wrapper: &str) -> String {
    match namespace {
        Some(namespace) => format!("{}.{}.rs", namespace.replace("::", "."), wrapper),
        None => format!("{}.rs", wrapper)
    }
}

/// Renders a visibility in Rust syntax, an empty string for inherited visibility.
pub fn visibility(vis: &syn::Visibility) -> String {
    match vis {
        syn::Visibility::Public(_) => "pub".to_owned(),

        syn::Visibility::Restricted(restricted) => {
            let path = &restricted.path;
            let path = quote::quote!(#path).to_string().replace(' ', "");

            match restricted.in_token {
                Some(_) => format!("pub(in {})", path),
                None => format!("pub({})", path)
            }
        },

        syn::Visibility::Inherited => String::new()
    }
}
