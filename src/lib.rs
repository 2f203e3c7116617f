//! # Value-mapped enumerations for Rust
//!
//! Provides an attribute which attaches literal values to the variants of an enumeration, and
//! generates a wrapper type which converts between the variants and their values.
//!
//! ## Dependencies
//!
//! None at runtime, the generated code only uses `core`.
//!
//! ## Description
//!
//! Imagine the following constants which describe the status codes of a protocol:
//!
//! ```ignore
//! pub const OK:        (&str, i32) = ("OK", 200);
//! pub const NOT_FOUND: (&str, i32) = ("NOT_FOUND", 404);
//!
//! fn describe(code: i32) -> &'static str {
//!     match code {
//!         200 => OK.0,
//!         404 => NOT_FOUND.0,
//!         _ => ""
//!     }
//! }
//! ```
//!
//! Every new status has to be added to every conversion by hand. With the help of this crate the
//! values are attached to the variants of an enumeration, and all conversions are generated:
//!
//! ```rust
//! use enum_with_values::enum_with_values;
//!
//! #[enum_with_values(Status)]
//! #[derive(Default)]
//! pub enum StatusKind {
//!     #[default]
//!     #[value("OK", 200)]
//!     Ok,
//!     #[value("NOT_FOUND", 404)]
//!     NotFound,
//!     Unknown
//! }
//!
//! assert_eq!(i32::from(Status::NotFound), 404);
//! assert_eq!(<&str>::from(Status::Ok), "OK");
//! assert_eq!(Status::from("NOT_FOUND"), Status::NotFound);
//! assert_eq!(Status::NotFound.to_string(), "NOT_FOUND");
//!
//! // Failed conversions fall back to the default.
//! assert_eq!(Status::from(StatusKind::Unknown), Status::default());
//! assert_eq!(Status::from("UNKNOWN"), Status::Ok);
//! ```
//!
//! ## Generated code
//!
//! The wrapper `Status` stores a `StatusKind` and provides:
//!
//! - one associated constant per variant with a `#[value(..)]` attribute, `Status::Ok` and
//!   `Status::NotFound`. Variants without the attribute, like `Unknown`, are not part of the
//!   wrapper, but are still counted for the ordinals of the following variants,
//! - `Status::as_enum`, which returns the wrapped `StatusKind`,
//! - `StatusOrdinals`, a namespace with one constant per member, `StatusOrdinals::Ok` is
//!   `StatusKind::Ok`,
//! - `PartialEq`, `Eq`, `Hash`, `Clone` and `Debug` implementations, which do not require any
//!   derives on the enumeration,
//! - conversions in both directions between `Status` and the ordinal type (the primitive of the
//!   `repr` attribute, or `i32`), the enumeration, and every value position if all members
//!   carry values of the same types. If a value type equals the ordinal type, the value is
//!   converted,
//! - a `core::fmt::Display` implementation if the members carry a string.
//!
//! ## Conversion failures
//!
//! By default the conversions are `core::convert::From` implementations which return the
//! default value of the target type if no member matches, and the enumeration has to implement
//! `Default`. With `throw_on_cast_failure = true` they are `core::convert::TryFrom`
//! implementations which return the input as error:
//!
//! ```rust
//! use enum_with_values::enum_with_values;
//!
//! #[enum_with_values(Level, convert_ordinal = false, throw_on_cast_failure = true)]
//! #[repr(u8)]
//! enum LevelKind {
//!     #[value('l')]
//!     Low = 1,
//!     #[value('h')]
//!     High
//! }
//!
//! assert_eq!(Level::try_from('h'), Ok(Level::High));
//! assert_eq!(Level::try_from('x'), Err('x'));
//! assert_eq!(char::try_from(Level::Low), Ok('l'));
//! ```

extern crate proc_macro;

/// Generates a value-mapped wrapper for an enumeration.
///
/// Arguments: `(Wrapper, convert_ordinal = true, throw_on_cast_failure = false)`. The name of
/// the wrapper is an identifier or a string literal, the flags are optional.
///
/// Variants are tagged with `#[value(..)]`, which accepts string, byte string, byte, character,
/// boolean, integer and float literals. `#[value]` tags a variant without values.
///
/// If the enumeration can not be wrapped, e.g. because a value is not a literal, only the
/// enumeration is emitted.
#[proc_macro_attribute]
pub fn enum_with_values(
    attr: proc_macro::TokenStream, item: proc_macro::TokenStream
) -> proc_macro::TokenStream {
    expand(attr.into(), item.into()).into()
}

fn expand(attr: proc_macro2::TokenStream, item: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
    let mut enumeration = match syn::parse2::<syn::ItemEnum>(item.clone()) {
        Ok(enumeration) => enumeration,
        Err(_) => {
            let error = syn::Error::new_spanned(&item, "expected enum").to_compile_error();
            return quote::quote! {
                #error
                #item
            };
        }
    };

    // The generator scans for the attribute, like it does in a build script.
    enumeration.attrs.insert(0, syn::parse_quote!(#[enum_with_values(#attr)]));

    let generator = enum_with_values_impl::Generator::new();
    let stripped = generator.schema().strip(&enumeration);
    let file = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: vec![syn::Item::Enum(enumeration)]
    };

    match generator.generate(&file).outcomes.pop() {
        Some(Ok(unit)) => unit.tokens,
        _ => quote::quote!(#stripped)
    }
}
