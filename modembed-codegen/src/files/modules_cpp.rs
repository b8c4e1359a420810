use std::path::{Path, PathBuf};

use modembed_config::EmbedConfig;
use modembed_core::{FileRules, GeneratedFile};

use super::generated_header;
use crate::{
    CppFile, EmbedTable, Function, Include, RawCode,
    builder::{CodeFragment, Renderable},
    literal,
};

/// The generated C++ source holding the embedded module table
pub struct ModulesCpp<'a> {
    path: PathBuf,
    table: &'a EmbedTable,
    config: &'a EmbedConfig,
    rules: FileRules,
}

impl<'a> ModulesCpp<'a> {
    pub fn new(path: impl Into<PathBuf>, table: &'a EmbedTable, config: &'a EmbedConfig) -> Self {
        Self {
            path: path.into(),
            table,
            config,
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }
}

/// `static unordered_map<string,string> NAME = { ... };`
struct TableDecl<'a> {
    name: &'a str,
    table: &'a EmbedTable,
}

impl Renderable for TableDecl<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let rows = self
            .table
            .rows()
            .map(|(key, content)| {
                CodeFragment::line(format!("{{ {}, {} }},", literal::quote(key), content))
            })
            .collect();
        vec![CodeFragment::block(
            format!("static unordered_map<string,string> {} = {{", self.name),
            rows,
            Some("};".to_string()),
        )]
    }
}

impl GeneratedFile for ModulesCpp<'_> {
    fn path(&self) -> &Path {
        &self.path
    }

    fn rules(&self) -> FileRules {
        self.rules.clone()
    }

    fn render(&self) -> String {
        let table = &self.config.table;
        CppFile::new()
            .include(Include::local(&self.config.include))
            .include(Include::system("unordered_map"))
            .include(Include::system("string"))
            .include(Include::system("optional"))
            .add(RawCode::new("using namespace std;"))
            .add(TableDecl {
                name: table,
                table: self.table,
            })
            .add(
                Function::new(format!("bool {}(const std::string &spec)", self.config.has_fn))
                    .body([format!("return {0}.find(spec) != {0}.end();", table)]),
            )
            .add(
                Function::new(format!(
                    "std::optional<std::string> {}(const std::string &spec)",
                    self.config.get_fn
                ))
                .body([
                    format!("auto it = {}.find(spec);", table),
                    format!("if (it == {}.end()) return std::nullopt;", table),
                    "return it->second;".to_string(),
                ]),
            )
            .render_with_header(&generated_header(&self.config.command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputFile;

    #[test]
    fn test_render_rows() {
        let files = [InputFile {
            rel_path: "std.sl".to_string(),
            content: "a\nb".to_string(),
        }];
        let config = EmbedConfig::default();
        let table = EmbedTable::build(&files, &config);

        let code = ModulesCpp::new("out.cpp", &table, &config).render();

        assert!(code.starts_with("// GENERATED FILE - do not edit."));
        assert!(code.contains("    { \"std.sl\", \"a\\n\"\n\"b\" },\n"));
        assert!(code.contains("    { \"std\", \"a\\n\"\n\"b\" },\n"));
        assert!(code.contains("    { \"swazi:std\", \"a\\n\"\n\"b\" },\n"));
    }

    #[test]
    fn test_keys_are_escaped() {
        let files = [InputFile {
            rel_path: "we\"ird.sl".to_string(),
            content: String::new(),
        }];
        let config = EmbedConfig::default();
        let table = EmbedTable::build(&files, &config);

        let code = ModulesCpp::new("out.cpp", &table, &config).render();

        assert!(code.contains("{ \"we\\\"ird.sl\", \"\" },"));
    }

    #[test]
    fn test_custom_names() {
        let config = EmbedConfig {
            table: "kModules".to_string(),
            has_fn: "has_module".to_string(),
            get_fn: "module_source".to_string(),
            ..Default::default()
        }
        .with_include("modules.h");
        let table = EmbedTable::default();

        let code = ModulesCpp::new("out.cpp", &table, &config).render();

        assert!(code.contains("#include \"modules.h\""));
        assert!(code.contains("static unordered_map<string,string> kModules = {\n};"));
        assert!(code.contains("bool has_module(const std::string &spec) {"));
        assert!(code.contains("std::optional<std::string> module_source(const std::string &spec) {"));
        assert!(code.contains("auto it = kModules.find(spec);"));
    }
}
