//! Contains the typed literal values attached to enumeration variants.

use syn::spanned::Spanned;

/// The Rust type of a literal value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LiteralType {
    /// `"..."`, a `&'static str`.
    Str,
    /// `b"..."`, a `&'static [u8]`.
    ByteStr,
    Char,
    Bool,
    /// An integer, typed by its suffix or `i32`. Byte literals are `u8`.
    Int(&'static str),
    /// A float, typed by its suffix or `f64`.
    Float(&'static str)
}

impl LiteralType {
    fn of(lit: &syn::Lit) -> syn::Result<Self> {
        match lit {
            syn::Lit::Str(_) => Ok(Self::Str),
            syn::Lit::ByteStr(_) => Ok(Self::ByteStr),
            syn::Lit::Byte(_) => Ok(Self::Int("u8")),
            syn::Lit::Char(_) => Ok(Self::Char),
            syn::Lit::Bool(_) => Ok(Self::Bool),

            syn::Lit::Int(int) => match int.suffix() {
                "" => Ok(Self::Int("i32")),
                suffix => crate::primitive::integer_name(suffix).map(Self::Int).ok_or_else(
                    || syn::Error::new(int.span(), "expected integer suffix")
                )
            },

            syn::Lit::Float(float) => match float.suffix() {
                "" => Ok(Self::Float("f64")),
                suffix => crate::primitive::float_name(suffix).map(Self::Float).ok_or_else(
                    || syn::Error::new(float.span(), "expected float suffix")
                )
            },

            _ => Err(syn::Error::new(lit.span(), "unsupported literal"))
        }
    }

    pub fn is_str(self) -> bool {
        self == Self::Str
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Borrowed types are accepted with any lifetime when converting into the wrapper.
    pub fn is_borrowed(self) -> bool {
        matches!(self, Self::Str | Self::ByteStr)
    }

    fn is_unsigned(self) -> bool {
        match self {
            Self::Int(name) => crate::primitive::is_unsigned_name(name),
            _ => false
        }
    }

    /// The type produced by a conversion out of the wrapper.
    pub fn output_type(self) -> proc_macro2::TokenStream {
        match self {
            Self::Str => quote::quote!(&'static str),
            Self::ByteStr => quote::quote!(&'static [u8]),
            _ => self.input_type()
        }
    }

    /// The type accepted by a conversion into the wrapper, borrowing for `'a`.
    pub fn input_type(self) -> proc_macro2::TokenStream {
        match self {
            Self::Str => quote::quote!(&'a str),
            Self::ByteStr => quote::quote!(&'a [u8]),
            Self::Char => quote::quote!(char),
            Self::Bool => quote::quote!(bool),
            Self::Int(name) | Self::Float(name) => {
                let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
                quote::quote!(#ident)
            }
        }
    }
}

/// Renders the type identifier, e.g. `&'static str` or `u8`.
impl core::fmt::Display for LiteralType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Str => f.write_str("&'static str"),
            Self::ByteStr => f.write_str("&'static [u8]"),
            Self::Char => f.write_str("char"),
            Self::Bool => f.write_str("bool"),
            Self::Int(name) | Self::Float(name) => f.write_str(name)
        }
    }
}

/// A literal argument of the value attribute, e.g. `"FOO"` or `-1i8`.
#[derive(Clone, Debug)]
pub struct Literal {
    pub ty: LiteralType,
    pub tokens: proc_macro2::TokenStream
}

impl Literal {
    /// Accepts literals, and numeric literals negated by a unary minus.
    pub fn parse(expr: &syn::Expr) -> syn::Result<Self> {
        match expr {
            syn::Expr::Lit(syn::ExprLit { lit, .. }) => Ok(Self {
                ty: LiteralType::of(lit)?,
                tokens: quote::quote!(#lit)
            }),

            syn::Expr::Unary(syn::ExprUnary { op: syn::UnOp::Neg(_), expr: operand, .. }) => {
                match &**operand {
                    syn::Expr::Lit(syn::ExprLit {
                        lit: lit @ (syn::Lit::Int(_) | syn::Lit::Float(_)), ..
                    }) => {
                        let ty = LiteralType::of(lit)?;

                        if ty.is_unsigned() {
                            return Err(syn::Error::new(expr.span(), "expected signed literal"));
                        }

                        Ok(Self { ty, tokens: quote::quote!(- #lit) })
                    },

                    _ => Err(syn::Error::new(expr.span(), "expected literal"))
                }
            },

            // Literals forwarded through `macro_rules!` arrive in invisible groups.
            syn::Expr::Group(group) => Self::parse(&group.expr),

            _ => Err(syn::Error::new(expr.span(), "expected literal"))
        }
    }

    /// The literal in expression position.
    pub fn value(&self) -> proc_macro2::TokenStream {
        let tokens = &self.tokens;

        match self.ty {
            // `b".."` is a reference to an array, the conversions work on slices.
            LiteralType::ByteStr => quote::quote!(&#tokens[..]),
            _ => tokens.clone()
        }
    }

    /// The literal in pattern position.
    pub fn pattern(&self) -> &proc_macro2::TokenStream {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! parse_valid {
        ($expr:expr) => {
            Literal::parse(&syn::parse_str($expr).unwrap()).unwrap()
        }
    }

    macro_rules! parse_invalid {
        ($expr:expr, $message:expr) => {{
            let error = Literal::parse(&syn::parse_str($expr).unwrap()).unwrap_err();
            assert_eq!(error.to_string(), $message);
        }}
    }

    #[test]
    fn types() {
        assert_eq!(parse_valid!("\"FOO\"").ty, LiteralType::Str);
        assert_eq!(parse_valid!("b\"FOO\"").ty, LiteralType::ByteStr);
        assert_eq!(parse_valid!("b'F'").ty, LiteralType::Int("u8"));
        assert_eq!(parse_valid!("'F'").ty, LiteralType::Char);
        assert_eq!(parse_valid!("true").ty, LiteralType::Bool);
        assert_eq!(parse_valid!("1").ty, LiteralType::Int("i32"));
        assert_eq!(parse_valid!("1u8").ty, LiteralType::Int("u8"));
        assert_eq!(parse_valid!("1.5").ty, LiteralType::Float("f64"));
        assert_eq!(parse_valid!("1.5f32").ty, LiteralType::Float("f32"));
        assert_eq!(parse_valid!("-1").ty, LiteralType::Int("i32"));
        assert_eq!(parse_valid!("-1.5").ty, LiteralType::Float("f64"));
    }

    #[test]
    fn tokens() {
        assert_eq!(parse_valid!("\"FOO\"").value().to_string(), "\"FOO\"");
        assert_eq!(parse_valid!("-1i8").value().to_string(), "- 1i8");
        assert_eq!(parse_valid!("b\"FOO\"").value().to_string(), "& b\"FOO\" [..]");
        assert_eq!(parse_valid!("b\"FOO\"").pattern().to_string(), "b\"FOO\"");
    }

    #[test]
    fn invalid() {
        parse_invalid!("FOO", "expected literal");
        parse_invalid!("1 + 1", "expected literal");
        parse_invalid!("-\"FOO\"", "expected literal");
        parse_invalid!("-1u8", "expected signed literal");
        parse_invalid!("1u7", "expected integer suffix");
    }

    #[test]
    fn identifiers() {
        assert_eq!(LiteralType::Str.to_string(), "&'static str");
        assert_eq!(LiteralType::ByteStr.to_string(), "&'static [u8]");
        assert_eq!(LiteralType::Int("u8").to_string(), "u8");
        assert_eq!(LiteralType::Float("f32").to_string(), "f32");

        assert_eq!(LiteralType::Str.input_type().to_string(), "& 'a str");
        assert_eq!(LiteralType::Str.output_type().to_string(), "& 'static str");
        assert_eq!(LiteralType::Bool.output_type().to_string(), "bool");
    }
}
