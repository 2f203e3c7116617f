//! Contains the errors of the generator and of the build script helpers.

/// Prevents a declaration from being wrapped.
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    /// Malformed metadata, e.g. a non-literal value or a variant with fields.
    #[error(transparent)]
    Invalid(#[from] syn::Error),

    #[error("generator panicked: {0}")]
    Panicked(String)
}

/// A fault of a single declaration.
#[derive(Debug, thiserror::Error)]
#[error("failed to wrap `{declaration}`")]
pub struct Diagnostic {
    /// Fully qualified name of the enumeration.
    pub declaration: String,
    #[source]
    pub fault: Fault
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to access `{}`", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("failed to parse `{}`", .path.display())]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: syn::Error
    }
}
