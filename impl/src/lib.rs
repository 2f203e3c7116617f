//! This crate serves as the backbone for the `enum-with-values` crate.
//!
//! It turns annotated enumerations into value-mapped wrappers:
//!
//! ```ignore
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
//! ```
//!
//! generates a `Status` type with the constants `Status::Ok` and `Status::NotFound`, and
//! conversions between `Status` and `i32` (the ordinal), `StatusKind`, `&'static str` and `i32`
//! (the second value, which takes precedence over the ordinal).
//!
//! The pipeline scans a file for annotated enumerations ([`scan`]), builds the member model of
//! each ([`enumeration`]) and generates one [`GeneratedUnit`] per enumeration. Every declaration
//! is generated in isolation, a failing declaration results in a [`Diagnostic`] and does not
//! affect the others.


pub mod build;
#[macro_use]
pub mod enumeration;
pub mod error;
pub mod host;
pub mod literal;
pub mod namespace;
mod primitive;
pub mod scan;
pub mod schema;

pub use error::{BuildError, Diagnostic, Fault};
pub use host::{Host, SynHost};
pub use schema::Schema;

/// The generated source of one enumeration.
#[derive(Clone, Debug)]
pub struct GeneratedUnit {
    /// Unique name of the unit, e.g. `a.b.Wrapper.rs`.
    pub name: String,
    /// The enumeration without generator attributes, followed by the wrapper.
    pub tokens: proc_macro2::TokenStream
}

impl GeneratedUnit {
    pub fn text(&self) -> String {
        self.tokens.to_string()
    }
}

/// The result of one generator run.
#[derive(Debug)]
pub struct Generation {
    /// The schema the declarations were scanned with.
    pub schema: Schema,
    /// One outcome per annotated enumeration, in source order.
    pub outcomes: Vec<Result<GeneratedUnit, Diagnostic>>
}

impl Generation {
    pub fn units(&self) -> impl Iterator<Item = &GeneratedUnit> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }
}

/// Generates the wrappers of all annotated enumerations of a file.
pub struct Generator<H = SynHost> {
    host: H
}

impl Generator {
    pub fn new() -> Self {
        Self::with_schema(Schema::default())
    }

    pub fn with_schema(schema: Schema) -> Self {
        Self::with_host(SynHost::new(schema))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> Generator<H> {
    /// Registers the schema of the host before any declaration is scanned.
    pub fn with_host(host: H) -> Self {
        let schema = host.schema();
        tracing::debug!(
            wrapper = %schema.wrapper_attribute, value = %schema.value_attribute, "registered schema"
        );

        Self { host }
    }

    pub fn schema(&self) -> &Schema {
        self.host.schema()
    }

    pub fn generate(&self, file: &syn::File) -> Generation {
        let outcomes = scan::scan(&self.host, file).into_iter()
            .map(|scanned| self.generate_unit(scanned))
            .collect();

        Generation { schema: self.schema().clone(), outcomes }
    }

    /// Generates a single unit, converting errors and panics into a diagnostic.
    fn generate_unit(&self, scanned: scan::Scanned) -> Result<GeneratedUnit, Diagnostic> {
        let scan::Scanned { full_name, item, args } = scanned;

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(
            || self.expand(item, &full_name, args)
        ));

        let fault = match result {
            Ok(Ok(unit)) => return Ok(unit),

            Ok(Err(error)) => {
                tracing::warn!(declaration = %full_name, %error, "invalid declaration");
                Fault::Invalid(error)
            },

            Err(payload) => {
                let message = payload.downcast_ref::<&str>().map(|message| message.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown cause".to_owned());

                tracing::error!(declaration = %full_name, %message, "generator panicked");
                Fault::Panicked(message)
            }
        };

        Err(Diagnostic { declaration: full_name, fault })
    }

    fn expand(
        &self, item: &syn::ItemEnum, full_name: &str, args: syn::Result<schema::WrapperArgs>
    ) -> syn::Result<GeneratedUnit> {
        let declaration = enumeration::EnumDeclaration::parse(&self.host, item, full_name, args?)?;
        let name = declaration.unit_name();

        tracing::debug!(
            unit = %name,
            visibility = %namespace::visibility(&declaration.vis),
            members = declaration.members.len(),
            unified = declaration.types.is_some(),
            "generating wrapper"
        );

        let item = self.schema().strip(item);
        let wrapper: proc_macro2::TokenStream = declaration.into();

        Ok(GeneratedUnit {
            name,
            tokens: quote::quote! {
                #item
                #wrapper
            }
        })
    }
}
