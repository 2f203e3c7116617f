//! Contains the metadata schema: the attribute names the generator reacts to, and the arguments
//! of the enumeration attribute.

/// The attributes that declare a value-mapped wrapper.
///
/// The schema is registered with the host before any declaration is scanned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schema {
    /// Attribute on the enumeration, `#[enum_with_values(Wrapper, ..)]`.
    pub wrapper_attribute: String,
    /// Attribute on a variant, `#[value(..)]`.
    pub value_attribute: String
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            wrapper_attribute: "enum_with_values".to_owned(),
            value_attribute: "value".to_owned()
        }
    }
}

impl Schema {
    /// Matches on the last path segment, so `#[enum_with_values::enum_with_values]` is accepted.
    pub fn is_wrapper_attribute(&self, attr: &syn::Attribute) -> bool {
        attr.path().segments.last().map_or(false, |segment| segment.ident == self.wrapper_attribute)
    }

    pub fn is_value_attribute(&self, attr: &syn::Attribute) -> bool {
        attr.path().is_ident(&self.value_attribute)
    }

    /// Returns the enumeration without any generator attributes.
    pub fn strip(&self, item: &syn::ItemEnum) -> syn::ItemEnum {
        let mut item = item.clone();

        item.attrs.retain(|attr| !self.is_wrapper_attribute(attr));
        for variant in &mut item.variants {
            variant.attrs.retain(|attr| !self.is_value_attribute(attr));
        }

        item
    }
}

/// Stores the arguments of the enumeration attribute.
#[derive(Clone, Debug)]
pub struct WrapperArgs {
    /// Name of the generated wrapper type.
    pub name: syn::Ident,
    /// Generate conversions between the wrapper and the underlying ordinal type.
    pub convert_ordinal: bool,
    /// Failed conversions return an error instead of the default value.
    pub throw_on_cast_failure: bool
}

impl syn::parse::Parse for WrapperArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(syn::Error::new(input.span(), "expected wrapper name"));
        }

        let name = if input.peek(syn::LitStr) {
            input.parse::<syn::LitStr>()?.parse::<syn::Ident>()?
        } else {
            input.parse::<syn::Ident>()?
        };

        let mut convert_ordinal = None;
        let mut throw_on_cast_failure = None;

        while !input.is_empty() {
            input.parse::<syn::Token![,]>()?;
            if input.is_empty() { break; }

            let key = input.parse::<syn::Ident>()?;
            input.parse::<syn::Token![=]>()?;
            let value = input.parse::<syn::LitBool>()?;

            let slot = if key == "convert_ordinal" {
                &mut convert_ordinal
            } else if key == "throw_on_cast_failure" {
                &mut throw_on_cast_failure
            } else {
                return Err(syn::Error::new(
                    key.span(), "expected `convert_ordinal` or `throw_on_cast_failure`"
                ));
            };

            if slot.replace(value.value).is_some() {
                return Err(syn::Error::new(key.span(), "duplicate argument"));
            }
        }

        Ok(Self {
            name,
            convert_ordinal: convert_ordinal.unwrap_or(true),
            throw_on_cast_failure: throw_on_cast_failure.unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! parse_invalid {
        ($args:expr, $message:expr, ($sl:expr, $sc:expr), ($el:expr, $ec:expr)) => {{
            let error = syn::parse_str::<WrapperArgs>($args).unwrap_err();
            assert_eq!(error.to_string(), $message);
            compare_span!(error.span(), ($sl, $sc), ($el, $ec));
        }}
    }

    macro_rules! parse_valid {
        ($args:expr) => {
            syn::parse_str::<WrapperArgs>($args).unwrap()
        }
    }

    // Test macros.

    #[test]
    #[should_panic]
    fn test_parse_invalid() {
        parse_invalid!("A", "", (1, 0), (1, 0));
    }

    #[test]
    #[should_panic]
    fn test_parse_valid() {
        parse_valid!("");
    }

    // Test parsing.

    #[test]
    fn name() {
        assert_eq!(parse_valid!("StatusCode").name, "StatusCode");
        assert_eq!(parse_valid!("\"StatusCode\"").name, "StatusCode");
        assert_eq!(parse_valid!("StatusCode,").name, "StatusCode");

        let error = syn::parse_str::<WrapperArgs>("").unwrap_err();
        assert_eq!(error.to_string(), "expected wrapper name");
    }

    #[test]
    fn defaults() {
        let args = parse_valid!("A");
        assert!(args.convert_ordinal);
        assert!(!args.throw_on_cast_failure);
    }

    #[test]
    fn flags() {
        let args = parse_valid!("A, convert_ordinal = false");
        assert!(!args.convert_ordinal);
        assert!(!args.throw_on_cast_failure);

        let args = parse_valid!("A, throw_on_cast_failure = true, convert_ordinal = false");
        assert!(!args.convert_ordinal);
        assert!(args.throw_on_cast_failure);

        parse_invalid!(
            "A, convert = true",
            "expected `convert_ordinal` or `throw_on_cast_failure`",
            (1, 3), (1, 10)
        );

        parse_invalid!(
            "A, convert_ordinal = true, convert_ordinal = false",
            "duplicate argument",
            (1, 27), (1, 42)
        );
    }

    #[test]
    fn strip() {
        let item: syn::ItemEnum = syn::parse_str(
            "#[enum_with_values(B)] #[derive(Debug)] enum A { #[value(1)] #[doc = \"C\"] C, D }"
        ).unwrap();
        let item = Schema::default().strip(&item);

        assert_eq!(item.attrs.len(), 1);
        assert!(item.attrs[0].path().is_ident("derive"));
        assert_eq!(item.variants[0].attrs.len(), 1);
        assert!(item.variants[0].attrs[0].path().is_ident("doc"));
    }

    #[test]
    fn attribute_paths() {
        use syn::parse::Parser;

        let schema = Schema::default();
        let attr = |source: &str| syn::Attribute::parse_outer.parse_str(source).unwrap().remove(0);

        assert!(schema.is_wrapper_attribute(&attr("#[enum_with_values(A)]")));
        assert!(schema.is_wrapper_attribute(&attr("#[enum_with_values::enum_with_values(A)]")));
        assert!(!schema.is_wrapper_attribute(&attr("#[value(A)]")));
        assert!(schema.is_value_attribute(&attr("#[value(1)]")));
        assert!(!schema.is_value_attribute(&attr("#[other::value(1)]")));
    }
}
