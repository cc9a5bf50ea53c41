// src/config/model.rs

use serde::Deserialize;

use crate::types::RedeclarationPolicy;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [parse]
/// redeclaration = "reject"
///
/// [output]
/// banner = true
/// separator = ", "
/// ```
///
/// Both sections are optional and have defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub parse: ParseSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// `[parse]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseSection {
    /// `"overwrite"` (default) or `"reject"`.
    #[serde(default)]
    pub redeclaration: RedeclarationPolicy,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Wrap the report in a "Resolved Dependencies" banner.
    #[serde(default)]
    pub banner: bool,

    /// String placed between dependency names on a report line.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            banner: false,
            separator: default_separator(),
        }
    }
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`
/// or `Default`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub parse: ParseSection,
    pub output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(parse: ParseSection, output: OutputSection) -> Self {
        Self { parse, output }
    }
}
