//! CppFile abstraction for structured C++ file generation.
//!
//! Provides a high-level API for generating C++ sources and headers with
//! ordered includes and body content.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A C++ `#include` directive.
#[derive(Debug, Clone)]
pub enum Include {
    /// `#include "name"`
    Local(String),
    /// `#include <name>`
    System(String),
}

impl Include {
    pub fn local(name: impl Into<String>) -> Self {
        Self::Local(name.into())
    }

    pub fn system(name: impl Into<String>) -> Self {
        Self::System(name.into())
    }

    fn format(&self) -> String {
        match self {
            Self::Local(name) => format!("#include \"{}\"", name),
            Self::System(name) => format!("#include <{}>", name),
        }
    }
}

impl Renderable for Include {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// A free function declaration or definition.
///
/// Without a body it renders as a declaration (`...;`).
#[derive(Debug, Clone)]
pub struct Function {
    doc: Option<String>,
    signature: String,
    body: Option<Vec<String>>,
}

impl Function {
    /// Create a function from its full signature, e.g. `bool f(int x)`.
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            doc: None,
            signature: signature.into(),
            body: None,
        }
    }

    /// Add a `//` comment above the function.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Give the function a body, one statement per line.
    pub fn body(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body = Some(lines.into_iter().map(Into::into).collect());
        self
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc));
        }
        match &self.body {
            Some(lines) => fragments.push(CodeFragment::block(
                format!("{} {{", self.signature),
                lines.iter().map(CodeFragment::line).collect(),
                Some("}".to_string()),
            )),
            None => fragments.push(CodeFragment::line(format!("{};", self.signature))),
        }
        fragments
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

/// A structured representation of a C++ file.
///
/// # Example
///
/// ```
/// use modembed_codegen::{CppFile, Function, Include};
///
/// let code = CppFile::new()
///     .include(Include::system("string"))
///     .add(Function::new("int answer()").body(["return 42;"]))
///     .render();
///
/// assert_eq!(code, "#include <string>\n\nint answer() {\n    return 42;\n}\n");
/// ```
#[derive(Default)]
pub struct CppFile {
    pragma_once: bool,
    includes: Vec<Include>,
    body: Vec<Vec<CodeFragment>>,
}

impl CppFile {
    /// Create a new empty CppFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `#pragma once` before the includes.
    pub fn pragma_once(mut self) -> Self {
        self.pragma_once = true;
        self
    }

    /// Add an include directive.
    pub fn include(mut self, include: Include) -> Self {
        self.includes.push(include);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with 4-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        // 1. Preamble: pragma and includes
        if self.pragma_once {
            builder.push_line("#pragma once");
        }
        for include in &self.includes {
            builder.emit(include);
        }

        // 2. Blank line between preamble and body
        let has_preamble = self.pragma_once || !self.includes.is_empty();
        if has_preamble && !self.body.is_empty() {
            builder.push_blank();
        }

        // 3. Render body with blank lines between elements
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render the file with a header comment line directly above it.
    pub fn render_with_header(&self, header: &str) -> String {
        format!("{}\n{}", header, self.render())
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        !self.pragma_once && self.includes.is_empty() && self.body.is_empty()
    }
}
