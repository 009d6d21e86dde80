//! Version replacement patterns for Next.js build output.
//!
//! The installed version shows up in several textual shapes: pnpm-style
//! lockfile identifiers (with and without a trailing content hash), the
//! companion `@next/env` package, JSON version fields, and bare `next@X.Y.Z`
//! tokens. Each shape gets its own regex rule.
//!
//! Rule order is load-bearing. The compound shapes all contain the bare
//! `next@X.Y.Z` token matched by the final catch-all; running the catch-all
//! first would strip the version out of a hash-qualified identifier while
//! leaving the hash suffix behind. Rules therefore run most specific first,
//! each against the output of the previous one.

use crate::error::{GuardError, Result};
use regex::Regex;

/// Version substituted when neither the CLI flag nor the environment
/// provides one.
pub const DEFAULT_TARGET_VERSION: &str = "14.3.0";

/// Compiled replacement rules for one current/target version pair.
///
/// Built once per run and shared read-only across every file.
#[derive(Debug)]
pub struct ReplacementPatterns {
    current: String,
    target: String,
    rules: Vec<(Regex, String)>,
}

impl ReplacementPatterns {
    /// Compiles the full rule set.
    ///
    /// `current` is regex-escaped before interpolation. `target` is embedded
    /// literally into replacement strings, so anything other than a plain
    /// `MAJOR.MINOR.PATCH` version is rejected up front.
    pub fn new(current: &str, target: &str) -> Result<Self> {
        let version_shape = Regex::new(r"^\d+\.\d+\.\d+$")?;
        if !version_shape.is_match(target) {
            return Err(GuardError::InvalidVersion(target.to_string()));
        }

        let cur = regex::escape(current);
        let mut rules = Vec::new();

        // 1. Hash-qualified lockfile identifier; the hash is dropped.
        rules.push((
            Regex::new(&format!(
                r"next@{cur}_@babel\+core@\d+\.\d+_[0-9a-f]{{32}}"
            ))?,
            format!("next@{target}_@babel+core"),
        ));

        // 2. Lockfile identifier without a hash.
        rules.push((
            Regex::new(&format!(r"next@{cur}_@babel\+core"))?,
            format!("next@{target}_@babel+core"),
        ));

        // 3. Companion env package.
        rules.push((
            Regex::new(&format!(r"@next\+env@{cur}"))?,
            format!("@next+env@{target}"),
        ));

        // 4. Quoted JSON version field, canonicalized to no whitespace.
        rules.push((
            Regex::new(&format!(r#""version"\s*:\s*"{cur}""#))?,
            format!(r#""version":"{target}""#),
        ));

        // 5. Version field with an unquoted key (minified object literals).
        rules.push((
            Regex::new(&format!(r#"version\s*:\s*"{cur}""#))?,
            format!(r#"version:"{target}""#),
        ));

        // 6. Catch-all for any bare identifier still standing.
        rules.push((
            Regex::new(&format!(r"next@{cur}"))?,
            format!("next@{target}"),
        ));

        Ok(Self {
            current: current.to_string(),
            target: target.to_string(),
            rules,
        })
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Applies all rules to content, each transforming the previous result.
    ///
    /// Returns `Some(modified)` if the content actually differs afterwards,
    /// `None` otherwise. A rule can match without changing anything (current
    /// and target may be the same version), so matching alone is not enough.
    pub fn apply(&self, content: &str) -> Option<String> {
        let mut result = content.to_string();

        for (pattern, replacement) in &self.rules {
            if pattern.is_match(&result) {
                result = pattern.replace_all(&result, replacement.as_str()).to_string();
            }
        }

        if result != content { Some(result) } else { None }
    }
}
