use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use modembed_codegen::{Generator, Targets};
use modembed_config::{EmbedConfig, EmbedToml};
use modembed_core::FileRules;

use super::UnwrapOrExit;
use crate::reports::{EmbedReport, EmbedResult, Report, TerminalOutput};

#[derive(Args)]
pub struct EmbedCommand {
    /// Directory holding the library sources (e.g. lib/)
    pub lib_dir: PathBuf,

    /// Path of the generated C++ source (e.g. build/generated/builtin_sl.cpp)
    pub out_cpp: PathBuf,

    /// Also generate a header declaring the lookup functions
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// Path to embed.toml (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Namespace tag for aliased keys (overrides embed.toml)
    #[arg(long)]
    pub namespace: Option<String>,

    /// Header name for the generated #include (overrides embed.toml and --header)
    #[arg(long)]
    pub include: Option<String>,

    /// Rewrite outputs even when their content is unchanged
    #[arg(long)]
    pub force: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl EmbedCommand {
    /// Run the embed command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config().unwrap_or_exit();

        let generator = Generator::collect(&self.lib_dir, config).wrap_err_with(|| {
            format!("Failed to collect library files from {}", self.lib_dir.display())
        })?;

        let mut targets = Targets::new(&self.out_cpp);
        if let Some(header) = &self.header {
            targets = targets.with_header(header);
        }

        let result = if self.dry_run {
            EmbedResult::Preview(generator.preview(&targets))
        } else {
            let rules = if self.force {
                FileRules::always_overwrite()
            } else {
                FileRules::default()
            };
            let generated = generator
                .generate(&targets, rules)
                .wrap_err("Failed to write generated files")?;
            EmbedResult::Written(generated.files)
        };

        let report = EmbedReport {
            warnings: generator
                .diagnostics()
                .iter()
                .map(ToString::to_string)
                .collect(),
            key_count: generator.table().len(),
            file_count: generator.table().file_count(),
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Settings from embed.toml with command line overrides applied.
    fn load_config(&self) -> modembed_config::Result<EmbedConfig> {
        let mut config = match &self.config {
            Some(path) => EmbedToml::open(path)?.into_config(),
            None => EmbedConfig::default(),
        };

        if let Some(namespace) = &self.namespace {
            config = config.with_namespace(namespace);
        }
        if let Some(include) = &self.include {
            config = config.with_include(include);
        } else if let Some(name) = self.header.as_ref().and_then(|h| h.file_name()) {
            config = config.with_include(name.to_string_lossy());
        }

        config.validated()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        embed: EmbedCommand,
    }

    fn parse(args: &[&str]) -> EmbedCommand {
        TestCli::parse_from(std::iter::once("modembed").chain(args.iter().copied())).embed
    }

    #[test]
    fn test_defaults_without_flags() {
        let command = parse(&["lib", "out.cpp"]);
        let config = command.load_config().unwrap();
        assert_eq!(config, EmbedConfig::default());
        assert!(!command.force);
        assert!(!command.dry_run);
    }

    #[test]
    fn test_header_sets_include() {
        let command = parse(&["lib", "out.cpp", "--header", "gen/modules.h"]);
        let config = command.load_config().unwrap();
        assert_eq!(config.include, "modules.h");
    }

    #[test]
    fn test_include_flag_wins_over_header() {
        let command = parse(&[
            "lib",
            "out.cpp",
            "--header",
            "gen/modules.h",
            "--include",
            "swazi/builtin.h",
        ]);
        let config = command.load_config().unwrap();
        assert_eq!(config.include, "swazi/builtin.h");
    }

    #[test]
    fn test_namespace_override() {
        let command = parse(&["lib", "out.cpp", "--namespace", "std"]);
        assert_eq!(command.load_config().unwrap().namespace, "std");
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let command = parse(&["lib", "out.cpp", "--namespace", "a:b"]);
        let err = command.load_config().unwrap_err();
        assert!(err.to_string().contains("namespace"));
    }
}
