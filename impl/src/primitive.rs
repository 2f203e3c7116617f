//! Contains primitive type related helper functions.

const SIGNED: &[&str] = &["i8", "i16", "i32", "i64", "i128", "isize"];
const UNSIGNED: &[&str] = &["u8", "u16", "u32", "u64", "u128", "usize"];
const FLOATS: &[&str] = &["f32", "f64"];

/// Underlying type of an enumeration without a primitive `repr`.
pub(crate) const DEFAULT_REPR: &str = "i32";

pub(crate) fn is_numeric_primitive(ident: &syn::Ident) -> bool {
    SIGNED.iter().any(|name| ident == name) || is_unsigned_primitive(ident)
}

pub(crate) fn is_unsigned_primitive(ident: &syn::Ident) -> bool {
    UNSIGNED.iter().any(|name| ident == name)
}

/// Maps an integer literal suffix to its type name.
pub(crate) fn integer_name(suffix: &str) -> Option<&'static str> {
    SIGNED.iter().chain(UNSIGNED).find(|name| **name == suffix).copied()
}

/// Maps a float literal suffix to its type name.
pub(crate) fn float_name(suffix: &str) -> Option<&'static str> {
    FLOATS.iter().find(|name| **name == suffix).copied()
}

pub(crate) fn is_unsigned_name(name: &str) -> bool {
    UNSIGNED.iter().any(|unsigned| *unsigned == name)
}

/// Reads the value of an integer literal, optionally negated by a unary minus.
///
/// Values above `i64::MAX` are reinterpreted, like a `u64` discriminant cast to `i64`.
pub(crate) fn literal_value(expr: &syn::Expr) -> Option<i64> {
    fn ungroup(expr: &syn::Expr) -> &syn::Expr {
        match expr {
            syn::Expr::Group(group) => ungroup(&group.expr),
            expr => expr
        }
    }

    fn int_value(int: &syn::LitInt) -> Option<i64> {
        int.base10_parse::<i64>().ok()
            .or_else(|| int.base10_parse::<u64>().ok().map(|value| value as i64))
    }

    match expr {
        syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(int), .. }) => int_value(int),

        // Invisible groups surround `$value:expr` fragments of `macro_rules!` expansions.
        syn::Expr::Group(group) => literal_value(&group.expr),

        syn::Expr::Unary(syn::ExprUnary { op: syn::UnOp::Neg(_), expr, .. }) => match ungroup(expr) {
            syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(int), .. }) => {
                int_value(int).map(i64::wrapping_neg)
            },
            _ => None
        },

        _ => None
    }
}

/// Renders an ordinal as an unsuffixed literal of the underlying type `repr`.
pub(crate) fn ordinal_literal(ordinal: i64, repr: &syn::Ident) -> proc_macro2::TokenStream {
    if is_unsigned_primitive(repr) {
        let literal = proc_macro2::Literal::u64_unsuffixed(ordinal as u64);
        quote::quote!(#literal)
    } else if ordinal < 0 {
        let literal = proc_macro2::Literal::u64_unsuffixed(ordinal.unsigned_abs());
        quote::quote!(- #literal)
    } else {
        let literal = proc_macro2::Literal::i64_unsuffixed(ordinal);
        quote::quote!(#literal)
    }
}
