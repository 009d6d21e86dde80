//! `package.json` manifest reading and version extraction.
//!
//! The only thing the guard needs from the manifest is the installed version
//! of one package, looked up in `dependencies` first and `devDependencies`
//! second. Specifiers may carry range operators (`^14.2.10`, `~14.2.10`,
//! `>=14.2.10`); extraction takes the first `MAJOR.MINOR.PATCH` token and
//! ignores the rest.

use crate::error::{GuardError, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The package whose version is normalized in build output.
pub const GUARDED_PACKAGE: &str = "next";

/// Matches a semantic version token inside a dependency specifier.
const VERSION_TOKEN: &str = r"\d+\.\d+\.\d+";

/// The dependency tables of a `package.json`, everything else ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    ///
    /// Unlike walk/rewrite failures, a missing or malformed manifest is
    /// fatal: without it there is no current version to replace.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Returns the raw specifier for `name`, production table preferred.
    pub fn dependency_specifier(&self, name: &str) -> Option<&str> {
        self.dependencies
            .get(name)
            .or_else(|| self.dev_dependencies.get(name))
            .map(String::as_str)
    }
}

/// Extracts the first `MAJOR.MINOR.PATCH` token from a specifier.
pub fn extract_version(specifier: &str) -> Result<String> {
    let re = Regex::new(VERSION_TOKEN)?;

    re.find(specifier)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| GuardError::InvalidVersion(specifier.to_string()))
}

/// Resolves the installed version of `name` from the manifest.
pub fn current_version(manifest: &Manifest, name: &str) -> Result<String> {
    let specifier = manifest
        .dependency_specifier(name)
        .ok_or_else(|| GuardError::MissingDependency(name.to_string()))?;

    extract_version(specifier)
}
