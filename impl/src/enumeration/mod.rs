//! Contains all data types to represent an enumeration with attached values.

#[macro_use]
pub(crate) mod parse;
pub(crate) mod unify;
pub(crate) mod generate;

use crate::literal::{Literal, LiteralType};

/// Stores all information about an annotated enumeration and its wrapper.
pub struct EnumDeclaration {
    pub vis: syn::Visibility,
    /// Primitive type of the `repr` attribute, `i32` if there is none.
    pub repr: syn::Ident,
    pub ident: syn::Ident,
    /// Path of the enumeration inside of the scanned file, e.g. `a::b::Enum`.
    pub full_name: String,
    pub wrapper: syn::Ident,
    pub convert_ordinal: bool,
    pub throw_on_cast_failure: bool,
    /// All declared variants, tagged or not.
    pub variants: Vec<syn::Ident>,
    /// Tagged variants in declaration order.
    pub members: Vec<Member>,
    /// `None` if the value types of the members differ.
    pub types: Option<Vec<LiteralType>>
}

impl EnumDeclaration {
    /// The module path of the enumeration, `None` at the top level.
    pub fn namespace(&self) -> Option<&str> {
        crate::namespace::namespace(&self.full_name, &self.ident.to_string())
    }

    /// The name of the generated unit.
    pub fn unit_name(&self) -> String {
        crate::namespace::unit_name(self.namespace(), &self.wrapper.to_string())
    }
}

/// A variant with a value attribute.
pub struct Member {
    pub ident: syn::Ident,
    /// The implicit or explicit discriminant of the variant.
    pub ordinal: i64,
    pub values: Vec<Literal>
}
