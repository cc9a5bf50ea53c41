use std::io::Write;

use depclosure::cli::CliArgs;
use depclosure::config::{ConfigFile, OutputSection, ParseSection, RawConfigFile};
use depclosure::types::RedeclarationPolicy;

/// Builds declaration-file text line by line.
#[derive(Debug, Default)]
pub struct DeclarationsBuilder {
    lines: Vec<String>,
}

impl DeclarationsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(mut self, library: &str, deps: &[&str]) -> Self {
        self.lines
            .push(format!("{library} depends on {}", deps.join(" ")));
        self
    }

    /// Add a line verbatim (blank lines, odd spacing, malformed input).
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }

    /// Write the text to a fresh temp file and return its handle.
    pub fn write_temp(self) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(self.build().as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

/// Builder for validated `ConfigFile`s.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                parse: ParseSection::default(),
                output: OutputSection::default(),
            },
        }
    }

    pub fn redeclaration(mut self, policy: RedeclarationPolicy) -> Self {
        self.config.parse.redeclaration = policy;
        self
    }

    pub fn banner(mut self, val: bool) -> Self {
        self.config.output.banner = val;
        self
    }

    pub fn separator(mut self, sep: &str) -> Self {
        self.config.output.separator = sep.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse CLI arguments the way the binary would, without the program name.
pub fn cli_args(args: &[&str]) -> CliArgs {
    use clap::Parser;
    CliArgs::parse_from(std::iter::once("depclosure").chain(args.iter().copied()))
}
