use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tempfile::{Builder, PathPersistError, TempPath};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Destination path of the rendered file
    fn path(&self) -> &Path;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self) -> Result<WriteResult> {
        File::new(self.path(), self.render())
            .with_rules(self.rules())
            .write()
    }
}

/// Moves a fully written temporary file over its target.
///
/// On failure the implementation must hand the temporary path back inside the
/// [`PathPersistError`] so the caller can remove it.
pub trait Replace {
    fn replace(&self, temp: TempPath, target: &Path) -> Result<(), PathPersistError>;
}

/// Atomic rename within the target's directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameReplace;

impl Replace for RenameReplace {
    fn replace(&self, temp: TempPath, target: &Path) -> Result<(), PathPersistError> {
        temp.persist(target)
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held identical content and was left untouched
    Unchanged,
}

impl WriteResult {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: write if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        self.write_with(&RenameReplace)
    }

    /// Write the file, using `replace` for the final rename.
    pub fn write_with(&self, replace: &dyn Replace) -> Result<WriteResult> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;

        if self.rules.overwrite == Overwrite::IfChanged
            && matches_existing(&self.path, self.content.as_bytes())
        {
            return Ok(WriteResult::Unchanged);
        }

        write_atomic(&self.path, self.content.as_bytes(), replace)?;
        Ok(WriteResult::Written)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Replace the file even when the content is identical.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always replace
    Always,
    /// Leave the file alone when its bytes already match
    #[default]
    IfChanged,
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Any read failure counts as "changed".
fn matches_existing(path: &Path, content: &[u8]) -> bool {
    fs::read(path).is_ok_and(|existing| existing == content)
}

fn write_atomic(path: &Path, content: &[u8], replace: &dyn Replace) -> Result<()> {
    let dir = parent_dir(path);
    let prefix = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| ".modembed".into());

    let mut builder = Builder::new();
    builder.prefix(&prefix);
    // Fresh targets get 0644 filtered by the umask, not tempfile's 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    // Dropping a NamedTempFile or TempPath removes it from disk.
    let mut temp = builder
        .tempfile_in(dir)
        .wrap_err_with(|| format!("failed to create temporary file in '{}'", dir.display()))?;
    temp.write_all(content)
        .and_then(|()| temp.as_file().sync_all())
        .wrap_err_with(|| format!("failed to write temporary file for '{}'", path.display()))?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .wrap_err_with(|| format!("failed to copy permissions of '{}'", path.display()))?;
    }

    match replace.replace(temp.into_temp_path(), path) {
        Ok(()) => Ok(()),
        Err(PathPersistError { error, path: temp }) => {
            drop(temp);
            Err(error).wrap_err_with(|| format!("failed to replace '{}'", path.display()))
        }
    }
}
