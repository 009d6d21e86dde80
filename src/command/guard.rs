//! The guard run: resolve versions, build patterns, rewrite the build tree.

use crate::cli::GuardArgs;
use crate::error::Result;
use crate::manifest::{self, GUARDED_PACKAGE, Manifest};
use crate::patterns::{DEFAULT_TARGET_VERSION, ReplacementPatterns};
use crate::rewrite::rewrite_file;
use crate::walk::collect_files;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

/// Environment override for the substituted version.
pub const TARGET_VERSION_ENV: &str = "NEXT_TARGET_VERSION";

const LOG_PREFIX: &str = "[next-fingerprint-guard]";

/// Aggregate counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that were scanned.
    pub attempted: usize,
    /// Files whose content changed.
    pub modified: usize,
}

pub fn execute(args: GuardArgs) -> Result<RunSummary> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => env::current_dir()?,
    };

    let manifest_path = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| root.join("package.json"));

    // Version resolution is the fatal half of the run; nothing is touched
    // until both versions are known good.
    let manifest = Manifest::load(&manifest_path)?;
    let current = manifest::current_version(&manifest, GUARDED_PACKAGE)?;
    let target = resolve_target_version(&args);
    let patterns = ReplacementPatterns::new(&current, &target)?;

    println!(
        "{} Replacing {} {} -> {} ...",
        LOG_PREFIX.cyan(),
        GUARDED_PACKAGE,
        patterns.current().bold(),
        patterns.target().bold()
    );

    if args.dry_run {
        println!("{} {}", LOG_PREFIX.cyan(), "Dry run, not writing files".yellow());
    }

    let build_dir: PathBuf = root.join(&args.build_dir);
    if !build_dir.exists() {
        println!(
            "{} {}",
            LOG_PREFIX.cyan(),
            format!(
                "{} directory not found. Run the build first.",
                args.build_dir.display()
            )
            .yellow()
        );
    }

    let files = collect_files(&build_dir);
    log::debug!("Collected {} candidate file(s) under {}", files.len(), build_dir.display());

    let mut summary = RunSummary::default();
    for path in &files {
        summary.attempted += 1;
        if rewrite_file(path, &patterns, args.dry_run).is_rewritten() {
            summary.modified += 1;
        }
    }

    if summary.modified > 0 {
        println!(
            "{} {}",
            LOG_PREFIX.cyan(),
            format!("Replaced in {} file(s)", summary.modified).green()
        );
    } else {
        println!("{} {}", LOG_PREFIX.cyan(), "No replacements found".yellow());
    }

    Ok(summary)
}

fn resolve_target_version(args: &GuardArgs) -> String {
    args.target_version
        .clone()
        .or_else(|| env::var(TARGET_VERSION_ENV).ok())
        .unwrap_or_else(|| DEFAULT_TARGET_VERSION.to_string())
}
