//! Contains the interface to the declarations of a compilation.
//!
//! The generator never inspects attributes itself; it asks a [`Host`] for the metadata of a
//! declaration and of its variants. [`SynHost`] reads them from `syn` attributes, tests inject
//! their own hosts.

use crate::literal::Literal;
use crate::schema::{Schema, WrapperArgs};

pub trait Host {
    /// The schema registered with this host.
    fn schema(&self) -> &Schema;

    /// Returns the wrapper arguments of an enumeration, `None` if it is not flagged.
    fn wrapper_args(&self, item: &syn::ItemEnum) -> Option<syn::Result<WrapperArgs>>;

    /// Returns the value tuple of a variant, `None` if the variant is untagged.
    fn variant_values(&self, variant: &syn::Variant) -> Option<syn::Result<Vec<Literal>>>;

    /// Returns the value of the variant's explicit discriminant, if it is an integer literal.
    ///
    /// Other expressions are not evaluated.
    fn initializer(&self, variant: &syn::Variant) -> Option<i64> {
        variant.discriminant.as_ref().and_then(|(_, expr)| crate::primitive::literal_value(expr))
    }
}

/// Reads the metadata from the attributes named by its schema.
#[derive(Clone, Debug, Default)]
pub struct SynHost {
    schema: Schema
}

impl SynHost {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }
}

impl Host for SynHost {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn wrapper_args(&self, item: &syn::ItemEnum) -> Option<syn::Result<WrapperArgs>> {
        item.attrs.iter()
            .find(|attr| self.schema.is_wrapper_attribute(attr))
            .map(|attr| attr.parse_args::<WrapperArgs>())
    }

    fn variant_values(&self, variant: &syn::Variant) -> Option<syn::Result<Vec<Literal>>> {
        let attr = variant.attrs.iter().find(|attr| self.schema.is_value_attribute(attr))?;

        Some(match &attr.meta {
            syn::Meta::Path(_) => Ok(Vec::new()),

            syn::Meta::List(list) => list.parse_args_with(
                syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated
            ).and_then(|values| values.iter().map(Literal::parse).collect()),

            syn::Meta::NameValue(value) => Err(syn::Error::new_spanned(value, "expected list"))
        })
    }
}
