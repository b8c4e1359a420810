use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{ConfigFile, EmbedConfig, Error, Result, error::SourceContext};

/// Represents an embed.toml file with both raw content and parsed settings.
#[derive(Debug)]
pub struct EmbedToml {
    path: PathBuf,
    content: String,
    config: EmbedConfig,
}

impl EmbedToml {
    /// Open and parse an embed.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = parse_config(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Take the parsed settings.
    pub fn into_config(self) -> EmbedConfig {
        self.config
    }
}

impl FromStr for EmbedConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "embed.toml")
    }
}

/// Parse settings from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<EmbedConfig> {
    let source_ctx = SourceContext::new(content, filename);
    let file: ConfigFile = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    match file.embed.check() {
        Some((key, message)) => Err(source_ctx.validation_error(key, message)),
        None => Ok(file.embed),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: EmbedConfig = "".parse().unwrap();
        assert_eq!(config, EmbedConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config: EmbedConfig = r#"
            [embed]
            namespace = "std"
            extensions = [".lua", ".luau"]
        "#
        .parse()
        .unwrap();

        assert_eq!(config.namespace, "std");
        assert_eq!(config.extensions().collect::<Vec<_>>(), vec!["lua", "luau"]);
        assert_eq!(config.include, "builtin_sl.h");
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = "[embed]\nnamspace = \"std\"\n"
            .parse::<EmbedConfig>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_validation_error_points_at_value() {
        let src = "[embed]\nnamespace = \"a:b\"\n";
        let err = parse_config(src, "embed.toml").unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                let span = span.expect("span should be found");
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"a:b\"");
                assert!(message.contains("must not contain"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_open_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("embed.toml");
        fs::write(&path, "[embed]\ninclude = \"modules.h\"\n").unwrap();

        let toml = EmbedToml::open(&path).unwrap();

        assert_eq!(toml.path(), path.as_path());
        assert!(toml.content().contains("modules.h"));
        assert_eq!(toml.into_config().include, "modules.h");
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = EmbedToml::open(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
