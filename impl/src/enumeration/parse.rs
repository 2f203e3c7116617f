//! Contains code to build the member model of an annotated enumeration.

use syn::spanned::Spanned;

use crate::host::Host;
use crate::schema::WrapperArgs;

impl super::EnumDeclaration {
    pub(crate) fn parse<H: Host + ?Sized>(
        host: &H, item: &syn::ItemEnum, full_name: &str, args: WrapperArgs
    ) -> syn::Result<Self> {
        if item.variants.is_empty() {
            return Err(syn::Error::new(item.brace_token.span.join(), "expected variants"));
        }

        let repr = Self::parse_repr(&item.attrs)?;

        // Resolve the ordinals the way the compiler assigns discriminants.
        let mut ordinal = 0i64;
        let mut members = Vec::new();

        for variant in &item.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                return Err(syn::Error::new(variant.fields.span(), "expected unit variant"));
            }

            if let Some(initializer) = host.initializer(variant) {
                ordinal = initializer;
            }

            if let Some(values) = host.variant_values(variant) {
                let values = values?;

                tracing::trace!(variant = %variant.ident, ordinal, values = values.len(), "resolved member");

                members.push(super::Member { ident: variant.ident.clone(), ordinal, values });
            }

            ordinal = ordinal.wrapping_add(1);
        }

        let types = super::unify::unify(&members);

        Ok(Self {
            vis: item.vis.clone(),
            repr,
            ident: item.ident.clone(),
            full_name: full_name.to_owned(),
            wrapper: args.name,
            convert_ordinal: args.convert_ordinal,
            throw_on_cast_failure: args.throw_on_cast_failure,
            variants: item.variants.iter().map(|variant| variant.ident.clone()).collect(),
            members,
            types
        })
    }

    /// Returns the first primitive of all `repr` attributes, ignoring hints like `C` or `align`.
    fn parse_repr(attrs: &[syn::Attribute]) -> syn::Result<syn::Ident> {
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
            let hints = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated
            )?;

            if let Some(repr) = hints.iter()
                .filter_map(|hint| hint.path().get_ident())
                .find(|ident| crate::primitive::is_numeric_primitive(ident))
            {
                return Ok(repr.clone());
            }
        }

        Ok(syn::Ident::new(crate::primitive::DEFAULT_REPR, proc_macro2::Span::call_site()))
    }
}
