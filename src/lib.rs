#![allow(clippy::module_inception)]

use std::{fs, path::Path, sync::Once};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::languages::Language,
};

pub mod errors;
pub mod highlight;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::tokenize;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=codeblock=debug`
/// (language fallbacks) or `RUST_LOG=codeblock=trace` (stray characters).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

pub fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|error| {
        Error::new(ErrorImpl::FileRead {
            path: path.to_string_lossy().into_owned(),
            message: error.to_string(),
        })
    })
}

/// Language identifier for a file, from its extension. Unknown extensions
/// are passed through as-is and later fall back to JavaScript keywords.
pub fn language_for_path(path: &Path) -> String {
    let extension = path
        .extension()
        .map(|extension| extension.to_string_lossy().into_owned())
        .unwrap_or_default();

    match Language::from_extension(&extension) {
        Some(language) => String::from(language.name()),
        None => extension,
    }
}
