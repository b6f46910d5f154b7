//! Common test utilities for integration tests.
//!
//! Provides a scratch directory with helpers to drop CSV fixtures into it
//! and build a [`BuildConfig`] pointing at them.

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use csv_to_anki::BuildConfig;
use tempfile::TempDir;

/// Scratch workspace for one test.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write `content` to `name` inside the scratch directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Config for `inputs` writing `<deck_name>.apkg` into the scratch directory.
    pub fn config(&self, deck_name: &str, inputs: Vec<PathBuf>) -> BuildConfig {
        let mut config = BuildConfig::new(deck_name, inputs).expect("valid config");
        config.output = self.path(&format!("{deck_name}.apkg"));
        config
    }
}
