use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments. None are required; defaults mirror running the
/// tool from a project root right after `next build`.
#[derive(Parser, Debug, Clone)]
#[command(name = "next-fingerprint-guard", version, about)]
pub struct GuardArgs {
    /// Project root containing package.json and the build output
    ///
    /// Defaults to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to the manifest (defaults to <root>/package.json)
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Build output directory, relative to the project root
    #[arg(long, value_name = "DIR", default_value = ".next")]
    pub build_dir: PathBuf,

    /// Version string to substitute for the installed one
    ///
    /// Overrides the NEXT_TARGET_VERSION environment variable. Must be a
    /// plain MAJOR.MINOR.PATCH version.
    #[arg(long, value_name = "VERSION")]
    pub target_version: Option<String>,

    /// Show what would change without writing any files
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}
