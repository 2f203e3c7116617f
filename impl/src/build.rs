//! Contains helpers for build scripts which generate wrappers ahead of compilation.
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     let out_dir = std::env::var("OUT_DIR").unwrap();
//!     enum_with_values_impl::build::expand_file("src/status.in.rs", out_dir).unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::host::Host;

/// Generates the wrappers of a source file into `out_dir`, one file per unit.
///
/// Returns the paths of the written files. Declarations which can not be wrapped are skipped.
pub fn expand_file(
    input: impl AsRef<Path>, out_dir: impl AsRef<Path>
) -> Result<Vec<PathBuf>, BuildError> {
    expand_file_with(&crate::Generator::new(), input, out_dir)
}

/// Same as [`expand_file`], with a custom generator.
pub fn expand_file_with<H: Host>(
    generator: &crate::Generator<H>, input: impl AsRef<Path>, out_dir: impl AsRef<Path>
) -> Result<Vec<PathBuf>, BuildError> {
    let input = input.as_ref();
    let out_dir = out_dir.as_ref();

    let source = std::fs::read_to_string(input).map_err(
        |source| BuildError::Io { path: input.to_owned(), source }
    )?;
    let file = syn::parse_file(&source).map_err(
        |source| BuildError::Parse { path: input.to_owned(), source }
    )?;

    let mut written = Vec::new();

    for outcome in generator.generate(&file).outcomes {
        let unit = match outcome {
            Ok(unit) => unit,
            Err(diagnostic) => {
                tracing::info!(declaration = %diagnostic.declaration, "skipped declaration");
                continue;
            }
        };

        let path = out_dir.join(&unit.name);
        std::fs::write(&path, unit.text()).map_err(
            |source| BuildError::Io { path: path.clone(), source }
        )?;

        tracing::debug!(path = %path.display(), "wrote unit");
        written.push(path);
    }

    Ok(written)
}
