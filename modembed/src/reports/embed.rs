use modembed_codegen::{PreviewFile, WrittenFile};
use modembed_core::WriteResult;

use super::output::{Output, Report};

/// What happened to the generated files.
pub enum EmbedResult {
    /// Files were written (or left untouched)
    Written(Vec<WrittenFile>),
    /// Dry run: rendered content only
    Preview(Vec<PreviewFile>),
}

/// Report for a single embed run.
pub struct EmbedReport {
    pub warnings: Vec<String>,
    pub key_count: usize,
    pub file_count: usize,
    pub result: EmbedResult,
}

impl Report for EmbedReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            EmbedResult::Written(files) => self.render_written(out, files),
            EmbedResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl EmbedReport {
    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        for file in files {
            let line = match file.result {
                WriteResult::Written => format!("Wrote {}", file.path.display()),
                WriteResult::Unchanged => {
                    format!("No changes for {}, skipping rewrite.", file.path.display())
                }
            };
            out.preformatted(&line);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
            out.newline();
        }

        out.divider("Summary");
        out.key_value("Embedded files", &self.file_count.to_string());
        out.key_value("Keys", &self.key_count.to_string());
        out.key_value("Generated files", &files.len().to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    /// Records every call as a line of text.
    #[derive(Default)]
    struct RecordingOutput {
        lines: Vec<String>,
        warnings: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{}: {}", key, value));
        }

        fn warning(&mut self, msg: &str) {
            self.warnings.push(msg.to_string());
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("-- {} --", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.trim_end().to_string());
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }

    fn report(result: EmbedResult) -> EmbedReport {
        EmbedReport {
            warnings: vec!["key 'std' overridden".to_string()],
            key_count: 3,
            file_count: 1,
            result,
        }
    }

    #[test]
    fn test_written_lines() {
        let mut out = RecordingOutput::default();
        report(EmbedResult::Written(vec![
            WrittenFile {
                path: PathBuf::from("gen/builtin_sl.cpp"),
                result: WriteResult::Written,
            },
            WrittenFile {
                path: PathBuf::from("gen/builtin_sl.h"),
                result: WriteResult::Unchanged,
            },
        ]))
        .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Wrote gen/builtin_sl.cpp",
                "No changes for gen/builtin_sl.h, skipping rewrite.",
            ]
        );
        assert_eq!(out.warnings, vec!["key 'std' overridden"]);
    }

    #[test]
    fn test_preview_summary() {
        let mut out = RecordingOutput::default();
        report(EmbedResult::Preview(vec![PreviewFile {
            path: "gen/builtin_sl.cpp".to_string(),
            content: "// body\n".to_string(),
        }]))
        .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "-- gen/builtin_sl.cpp --",
                "// body",
                "",
                "-- Summary --",
                "Embedded files: 1",
                "Keys: 3",
                "Generated files: 1",
            ]
        );
    }
}
