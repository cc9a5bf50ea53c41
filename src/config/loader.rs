// src/config/loader.rs

use std::path::Path;

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::FileSystem;

/// Read a configuration file and deserialize it into a `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the checked form.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    let config = ConfigFile::try_from(raw_config)?;
    debug!(path = %path.as_ref().display(), ?config, "loaded config");
    Ok(config)
}

/// Load the config at `path` if one was given, otherwise use defaults.
pub fn load_or_default(fs: &dyn FileSystem, path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => load_and_validate(fs, path),
        None => Ok(ConfigFile::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DepclosureError;
    use crate::fs::mock::MockFileSystem;
    use crate::types::RedeclarationPolicy;

    #[test]
    fn reads_both_sections() {
        let fs = MockFileSystem::new().with_file(
            "depclosure.toml",
            "[parse]\nredeclaration = \"reject\"\n\n[output]\nbanner = true\nseparator = \", \"\n",
        );

        let cfg = load_and_validate(&fs, "depclosure.toml").unwrap();
        assert_eq!(cfg.parse.redeclaration, RedeclarationPolicy::Reject);
        assert!(cfg.output.banner);
        assert_eq!(cfg.output.separator, ", ");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let fs = MockFileSystem::new().with_file("empty.toml", "");
        let cfg = load_and_validate(&fs, "empty.toml").unwrap();
        assert_eq!(cfg.parse.redeclaration, RedeclarationPolicy::Overwrite);
        assert_eq!(cfg.output.separator, " ");
    }

    #[test]
    fn unknown_policy_is_a_toml_error() {
        let fs = MockFileSystem::new()
            .with_file("bad.toml", "[parse]\nredeclaration = \"merge\"\n");
        assert!(matches!(
            load_and_validate(&fs, "bad.toml"),
            Err(DepclosureError::TomlError(_))
        ));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let fs = MockFileSystem::new();
        assert!(matches!(
            load_or_default(&fs, Some(Path::new("nope.toml"))),
            Err(DepclosureError::IoError(_))
        ));
        assert!(load_or_default(&fs, None).is_ok());
    }
}
