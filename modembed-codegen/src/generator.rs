use std::path::{Path, PathBuf};

use eyre::Result;
use modembed_config::EmbedConfig;
use modembed_core::{FileRules, GeneratedFile, WriteResult};

use crate::{
    Diagnostic, EmbedTable, InputFile, collect_files,
    files::{ModulesCpp, ModulesHeader},
};

/// Where generated files go.
#[derive(Debug, Clone)]
pub struct Targets {
    /// The generated C++ source
    pub source: PathBuf,
    /// Optional companion header declaring the lookup functions
    pub header: Option<PathBuf>,
}

impl Targets {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            header: None,
        }
    }

    pub fn with_header(mut self, header: impl Into<PathBuf>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Destination path
    pub path: String,
    /// File content
    pub content: String,
}

/// Outcome of writing one generated file
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files in the order they were written
    pub files: Vec<WrittenFile>,
}

/// Turns collected library files into the generated C++ sources.
pub struct Generator {
    config: EmbedConfig,
    table: EmbedTable,
}

impl Generator {
    /// Build the embed table from already collected files.
    pub fn new(files: &[InputFile], config: EmbedConfig) -> Self {
        let table = EmbedTable::build(files, &config);
        Self { config, table }
    }

    /// Collect files under `root` and build the embed table.
    pub fn collect(root: &Path, config: EmbedConfig) -> Result<Self> {
        let files = collect_files(root, &config)?;
        Ok(Self::new(&files, config))
    }

    pub fn table(&self) -> &EmbedTable {
        &self.table
    }

    /// Key collisions found while building the table.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.table.diagnostics()
    }

    /// The generated source for `path`.
    pub fn source_file(&self, path: impl Into<PathBuf>) -> ModulesCpp<'_> {
        ModulesCpp::new(path, &self.table, &self.config)
    }

    /// The companion header for `path`.
    pub fn header_file(&self, path: impl Into<PathBuf>) -> ModulesHeader<'_> {
        ModulesHeader::new(path, &self.config)
    }

    /// Render every target without writing to disk.
    pub fn preview(&self, targets: &Targets) -> Vec<PreviewFile> {
        let mut files = vec![PreviewFile {
            path: targets.source.display().to_string(),
            content: self.source_file(&targets.source).render(),
        }];
        if let Some(header) = &targets.header {
            files.push(PreviewFile {
                path: header.display().to_string(),
                content: self.header_file(header).render(),
            });
        }
        files
    }

    /// Write every target, skipping files whose content is unchanged.
    pub fn generate(&self, targets: &Targets, rules: FileRules) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        let source = self.source_file(&targets.source).with_rules(rules.clone());
        result.files.push(WrittenFile {
            path: targets.source.clone(),
            result: source.write()?,
        });

        if let Some(path) = &targets.header {
            let header = self.header_file(path).with_rules(rules);
            result.files.push(WrittenFile {
                path: path.clone(),
                result: header.write()?,
            });
        }

        Ok(result)
    }
}
