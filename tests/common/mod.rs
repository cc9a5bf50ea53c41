#![allow(dead_code)]

use std::path::PathBuf;

pub use depclosure_test_utils::init_tracing;

/// Path to a file under `fixtures/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}
