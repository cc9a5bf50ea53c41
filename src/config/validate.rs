// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DepclosureError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DepclosureError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.parse, raw.output))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_separator(&cfg.output.separator)?;
    Ok(())
}

fn validate_separator(separator: &str) -> Result<()> {
    if separator.is_empty() {
        return Err(DepclosureError::ConfigError(
            "[output].separator must not be empty".to_string(),
        ));
    }
    if separator.contains(['\n', '\r']) {
        return Err(DepclosureError::ConfigError(format!(
            "[output].separator must stay on one line (got {separator:?})"
        )));
    }
    Ok(())
}
