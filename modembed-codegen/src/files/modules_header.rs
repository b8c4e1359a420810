use std::path::{Path, PathBuf};

use modembed_config::EmbedConfig;
use modembed_core::{FileRules, GeneratedFile};

use super::generated_header;
use crate::{CppFile, Function, Include};

/// Header declaring the two lookup functions
pub struct ModulesHeader<'a> {
    path: PathBuf,
    config: &'a EmbedConfig,
    rules: FileRules,
}

impl<'a> ModulesHeader<'a> {
    pub fn new(path: impl Into<PathBuf>, config: &'a EmbedConfig) -> Self {
        Self {
            path: path.into(),
            config,
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }
}

impl GeneratedFile for ModulesHeader<'_> {
    fn path(&self) -> &Path {
        &self.path
    }

    fn rules(&self) -> FileRules {
        self.rules.clone()
    }

    fn render(&self) -> String {
        let ext = self.config.extensions().next().unwrap_or_default();
        let ns = &self.config.namespace;
        CppFile::new()
            .pragma_once()
            .include(Include::system("string"))
            .include(Include::system("optional"))
            .add(
                Function::new(format!("bool {}(const std::string &spec)", self.config.has_fn))
                    .doc(format!(
                        "Query whether an embedded module exists (keys: \"pkg/foo.{}\", \"pkg/foo\", \"{}:pkg/foo\")",
                        ext, ns
                    )),
            )
            .add(
                Function::new(format!(
                    "std::optional<std::string> {}(const std::string &spec)",
                    self.config.get_fn
                ))
                .doc("Get embedded source for a module spec (returns nullopt if not found)"),
            )
            .render_with_header(&generated_header(&self.config.command))
    }
}
