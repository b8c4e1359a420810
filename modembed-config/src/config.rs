//! Embedding settings and their validation.

use serde::Deserialize;

use crate::{Error, Result};

/// Default recognized source extensions, primary first.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["sl", "swz"];

/// Default namespace tag prefixed to extension-stripped keys.
pub const DEFAULT_NAMESPACE: &str = "swazi";

/// Default header included by the generated source.
pub const DEFAULT_INCLUDE: &str = "builtin_sl.h";

/// Default regeneration command named in the generated marker comment.
pub const DEFAULT_COMMAND: &str = "modembed <lib_dir> <out_cpp>";

/// Root of an `embed.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub embed: EmbedConfig,
}

/// Settings controlling which files are embedded and how the output is named.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedConfig {
    /// The two recognized source extensions; a leading dot is optional
    pub extensions: Vec<String>,
    /// Tag prepended as `<namespace>:` to extension-stripped keys
    pub namespace: String,
    /// Header named in the generated `#include`
    pub include: String,
    /// Identifier of the static lookup table
    pub table: String,
    /// Name of the existence-check function
    pub has_fn: String,
    /// Name of the content-lookup function
    pub get_fn: String,
    /// Regeneration command shown in the generated marker comment
    pub command: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            include: DEFAULT_INCLUDE.to_string(),
            table: "__embedded_modules".to_string(),
            has_fn: "has_embedded_module".to_string(),
            get_fn: "get_embedded_module_source".to_string(),
            command: DEFAULT_COMMAND.to_string(),
        }
    }
}

impl EmbedConfig {
    /// Override the namespace tag.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Override the included header name.
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = include.into();
        self
    }

    /// Recognized extensions without their leading dot.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|e| normalize_extension(e))
    }

    /// Whether `ext` (without a dot) is one of the recognized extensions.
    pub fn is_recognized(&self, ext: &str) -> bool {
        self.extensions().any(|e| e == ext)
    }

    /// Validate settings that did not come from a file.
    pub fn validated(self) -> Result<Self> {
        match self.check() {
            Some((key, message)) => Err(Error::invalid_setting(key, message)),
            None => Ok(self),
        }
    }

    /// First invalid setting, as `(key, reason)`.
    pub(crate) fn check(&self) -> Option<(&'static str, String)> {
        if let Some(reason) = check_extensions(&self.extensions) {
            return Some(("extensions", reason));
        }
        if self.namespace.is_empty() {
            return Some(("namespace", "namespace must not be empty".to_string()));
        }
        if self.namespace.contains([':', '/']) {
            return Some((
                "namespace",
                format!("namespace '{}' must not contain ':' or '/'", self.namespace),
            ));
        }
        if self.include.is_empty() || self.include.contains(['"', '\n', '\r']) {
            return Some((
                "include",
                format!("'{}' is not a valid header name", self.include),
            ));
        }
        if self.command.contains(['\n', '\r']) {
            return Some(("command", "command must fit on one line".to_string()));
        }
        for (key, name) in [
            ("table", &self.table),
            ("has_fn", &self.has_fn),
            ("get_fn", &self.get_fn),
        ] {
            if let Some(reason) = check_identifier(name) {
                return Some((key, format!("'{}' {}", name, reason)));
            }
        }
        None
    }
}

fn normalize_extension(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

fn check_extensions(extensions: &[String]) -> Option<String> {
    if extensions.len() != 2 {
        return Some(format!(
            "expected exactly two extensions, found {}",
            extensions.len()
        ));
    }
    for ext in extensions.iter().map(|e| normalize_extension(e)) {
        if ext.is_empty() || ext.contains(['.', '/', '\\']) {
            return Some(format!("'{}' is not a valid file extension", ext));
        }
    }
    if normalize_extension(&extensions[0]) == normalize_extension(&extensions[1]) {
        return Some(format!(
            "extension '{}' is listed twice",
            normalize_extension(&extensions[0])
        ));
    }
    None
}

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "auto", "bool", "break", "case", "catch", "char", "class", "const",
    "constexpr", "continue", "default", "delete", "do", "double", "else", "enum", "explicit",
    "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable",
    "namespace", "new", "noexcept", "nullptr", "operator", "private", "protected", "public",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "template", "this",
    "throw", "true", "try", "typedef", "typename", "union", "unsigned", "using", "virtual", "void",
    "volatile", "while",
];

/// Returns why `name` is not a usable C++ identifier, if it isn't.
fn check_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("must start with a letter or underscore"),
        None => return Some("must not be empty"),
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("may only contain letters, digits and underscores");
    }
    if CPP_KEYWORDS.contains(&name) {
        return Some("is a C++ keyword");
    }
    None
}
