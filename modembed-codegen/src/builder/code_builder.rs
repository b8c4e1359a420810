//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One level of indentation in generated C++.
const INDENT: &str = "    ";

/// Line-oriented builder for indented code.
///
/// Lines are indented once, at their start. A line containing embedded
/// newlines (such as a run of adjacent string literals) keeps its
/// continuation lines exactly as given.
///
/// # Example
///
/// ```
/// use modembed_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("int main() {")
///     .push_indent()
///     .push_line("return 0;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "int main() {\n    return 0;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indentation level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::new();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("void f() {")
            .push_indent()
            .push_line("g();")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "void f() {\n    g();\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new();
        builder.push_dedent().push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_blank_and_comment() {
        let mut builder = CodeBuilder::new();
        builder
            .push_comment("header")
            .push_blank()
            .push_indent()
            .push_comment("nested");
        assert_eq!(builder.build(), "// header\n\n    // nested\n");
    }

    #[test]
    fn test_multiline_line_indents_only_first() {
        let mut builder = CodeBuilder::new();
        builder.push_indent().push_line("{ \"a\\n\"\n\"b\" },");
        assert_eq!(builder.build(), "    { \"a\\n\"\n\"b\" },\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("entry point"),
                    CodeFragment::block(
                        "int main() {",
                        vec![CodeFragment::line("return 0;")],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::new();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "// entry point\nint main() {\n    return 0;\n}\n"
        );
    }
}
