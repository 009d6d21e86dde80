//! Candidate file discovery in the build output tree.

use std::path::{Path, PathBuf};

/// Extensions of files that may embed a version string.
pub const TEXT_EXTENSIONS: &[&str] = &["js", "mjs", "json", "html", "txt", "map"];

/// Recursively collects rewrite candidates under `root`.
///
/// Best effort by design: build output may be partially unreadable or missing
/// entirely, and either case should degrade to "nothing to do" rather than
/// abort the run. Walk errors are logged at debug level and skipped, so a
/// nonexistent root yields an empty list.
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    // Build output is routinely gitignored and hidden (.next), so the
    // standard ignore filters must stay off.
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("Skipping entry due to error: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if has_text_extension(path) {
            files.push(path.to_path_buf());
        }
    }

    files
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collects_only_allowed_extensions() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("chunk.js"), "").unwrap();
        fs::write(root.join("module.mjs"), "").unwrap();
        fs::write(root.join("manifest.json"), "").unwrap();
        fs::write(root.join("data.bin"), "").unwrap();
        fs::write(root.join("image.png"), "").unwrap();

        let mut names: Vec<_> = collect_files(root)
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, ["chunk.js", "manifest.json", "module.mjs"]);
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("static/chunks");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("main.js.map"), "").unwrap();

        let files = collect_files(temp.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("static/chunks/main.js.map"));
    }

    #[test]
    fn test_visits_hidden_directories() {
        let temp = TempDir::new().unwrap();
        let hidden = temp.path().join(".next/server");
        fs::create_dir_all(&hidden).unwrap();
        fs::write(hidden.join("app.html"), "").unwrap();

        assert_eq!(collect_files(temp.path()).len(), 1);
    }

    #[test]
    fn test_missing_root_yields_empty_list() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        assert!(collect_files(&missing).is_empty());
    }

    #[test]
    fn test_file_without_extension_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("BUILD_ID"), "abc123").unwrap();

        assert!(collect_files(temp.path()).is_empty());
    }
}
