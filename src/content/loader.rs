//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub(crate) fn parse_ron<T>(contents: &str) -> Result<T, ron::error::SpannedError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options().from_str(contents)
}

/// Load a single RON struct from a file.
pub(crate) fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&contents).map_err(|e| ContentLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}
