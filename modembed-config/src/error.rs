use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw `embed.toml` text and its display name so validation
/// failures can point at the offending line.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `key`'s value when it can be found.
    pub fn validation_error(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_value_span(&self.src, key),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(modembed::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse embed config")]
    #[diagnostic(code(modembed::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(modembed::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {key}: {message}")]
    #[diagnostic(
        code(modembed::invalid_setting),
        help("check the command-line flag that sets '{key}'")
    )]
    InvalidSetting { key: String, message: String },
}

impl Error {
    /// Create an error for a setting that did not come from a file.
    pub fn invalid_setting(key: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidSetting {
            key: key.into(),
            message: message.into(),
        })
    }
}

/// Locate the value of `key = ...` in TOML source.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        if let Some(after_key) = rest.strip_prefix(key) {
            let after_spaces = after_key.trim_start();
            if let Some(value) = after_spaces.strip_prefix('=') {
                let value_trimmed = value.trim_start();
                let start = offset + line.len() - value_trimmed.len();
                let len = value_trimmed.trim_end().len();
                return Some(SourceSpan::from((start, len)));
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span() {
        let src = "[embed]\nnamespace = \"std\"\n";
        let span = find_value_span(src, "namespace").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"std\"");
    }

    #[test]
    fn test_find_value_span_ignores_prefixed_keys() {
        let src = "namespaces = 1\nnamespace=\"x\"";
        let span = find_value_span(src, "namespace").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"x\"");
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("[embed]\n", "namespace").is_none());
    }

    #[test]
    fn test_invalid_setting_display() {
        let err = Error::invalid_setting("namespace", "must not be empty");
        assert_eq!(err.to_string(), "invalid namespace: must not be empty");
    }
}
