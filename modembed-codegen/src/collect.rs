//! Input discovery.

use std::{fs, path::Path};

use eyre::{Result, WrapErr};
use modembed_config::EmbedConfig;
use walkdir::WalkDir;

/// A library source file found under the input root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Path relative to the root, `/`-separated
    pub rel_path: String,
    /// File text; invalid UTF-8 is replaced with U+FFFD
    pub content: String,
}

/// Collect every file under `root` with a recognized extension, sorted by
/// relative path.
///
/// A missing root (or one that is not a directory) yields no files.
pub fn collect_files(root: &Path, config: &EmbedConfig) -> Result<Vec<InputFile>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.wrap_err_with(|| format!("failed to walk '{}'", root.display()))?;
        let path = entry.path();
        // is_file follows symlinks, so linked files are embedded too
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !config.is_recognized(ext) {
            continue;
        }

        let rel_path = relative_key(path.strip_prefix(root)?);
        let bytes =
            fs::read(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        files.push(InputFile {
            rel_path,
            content: decode(bytes),
        });
    }

    files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    Ok(files)
}

fn relative_key(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
