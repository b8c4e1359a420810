//! The key → content table embedded in the generated source.

use indexmap::IndexMap;
use modembed_config::EmbedConfig;

use crate::{Diagnostic, InputFile, keys::derive_keys, literal};

/// One embedded file with its content already rendered as C++ literals.
#[derive(Debug, Clone)]
struct Source {
    rel_path: String,
    literal: String,
}

/// Ordered, duplicate-free table of embedded modules.
///
/// Keys are added in discovery order. When a later file derives a key that
/// an earlier file already produced, the later file's content wins and the
/// key keeps its original position; a warning is recorded for each
/// overwrite.
#[derive(Debug, Clone, Default)]
pub struct EmbedTable {
    sources: Vec<Source>,
    rows: IndexMap<String, usize>,
    diagnostics: Vec<Diagnostic>,
}

impl EmbedTable {
    /// Build the table from files in discovery order.
    pub fn build(files: &[InputFile], config: &EmbedConfig) -> Self {
        let mut table = Self::default();
        for file in files {
            table.insert(file, config);
        }
        table
    }

    fn insert(&mut self, file: &InputFile, config: &EmbedConfig) {
        let index = self.sources.len();
        // Escaped once, shared by every alias of this file.
        self.sources.push(Source {
            rel_path: file.rel_path.clone(),
            literal: literal::quote(&file.content),
        });

        for key in derive_keys(&file.rel_path, config) {
            if let Some(previous) = self.rows.insert(key.clone(), index) {
                let overridden = &self.sources[previous].rel_path;
                self.diagnostics.push(
                    Diagnostic::warning(format!(
                        "key '{}' from '{}' overrides the one from '{}'",
                        key, file.rel_path, overridden
                    ))
                    .at(&file.rel_path),
                );
            }
        }
    }

    /// Rows as `(key, rendered literal)` in table order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows
            .iter()
            .map(|(key, &index)| (key.as_str(), self.sources[index].literal.as_str()))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of embedded files.
    pub fn file_count(&self) -> usize {
        self.sources.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    /// Rendered literal for `key`.
    pub fn literal(&self, key: &str) -> Option<&str> {
        self.rows
            .get(key)
            .map(|&index| self.sources[index].literal.as_str())
    }

    /// Relative path of the file that `key` resolves to.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.rows
            .get(key)
            .map(|&index| self.sources[index].rel_path.as_str())
    }

    /// Key collisions found while building.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(rel_path: &str, content: &str) -> InputFile {
        InputFile {
            rel_path: rel_path.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_three_keys_per_file() {
        let table = EmbedTable::build(&[file("pkg/foo.sl", "body")], &EmbedConfig::default());

        let keys: Vec<&str> = table.rows().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["pkg/foo.sl", "pkg/foo", "swazi:pkg/foo"]);
        for key in keys {
            assert_eq!(table.literal(key), Some("\"body\""));
        }
        assert_eq!(table.file_count(), 1);
        assert!(table.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = EmbedTable::build(&[], &EmbedConfig::default());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(!table.contains_key("std"));
    }

    #[test]
    fn test_later_file_wins_collision() {
        let files = [file("std.sl", "first"), file("std.swz", "second")];
        let table = EmbedTable::build(&files, &EmbedConfig::default());

        assert_eq!(table.len(), 4);
        assert_eq!(table.literal("std.sl"), Some("\"first\""));
        assert_eq!(table.literal("std.swz"), Some("\"second\""));
        assert_eq!(table.literal("std"), Some("\"second\""));
        assert_eq!(table.literal("swazi:std"), Some("\"second\""));
        assert_eq!(table.source_of("std"), Some("std.swz"));

        // Overwritten keys keep their first position.
        let keys: Vec<&str> = table.rows().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["std.sl", "std", "swazi:std", "std.swz"]);

        assert_eq!(table.diagnostics().len(), 2);
        assert!(table.diagnostics()[0].message.contains("key 'std'"));
        assert_eq!(
            table.diagnostics()[0].location.as_deref(),
            Some("std.swz")
        );
    }

    #[test]
    fn test_missing_key() {
        let table = EmbedTable::build(&[file("a.sl", "")], &EmbedConfig::default());
        assert_eq!(table.literal("b"), None);
        assert_eq!(table.literal("a"), Some("\"\""));
    }
}
