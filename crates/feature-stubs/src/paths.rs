//! Input discovery and output naming.

use globset::{Glob, GlobMatcher};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Create `root/name` if it does not exist and return its path.
pub fn ensure_output_dir(root: &Path, name: &str) -> io::Result<PathBuf> {
    let dir = root.join(name);
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "creating output directory");
        fs::create_dir(&dir)?;
    }
    Ok(dir)
}

/// File name of `input` up to its first `.`.
pub fn output_stem(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}

/// First `<stem>[_n].<extension>` in `dir` that is not an existing file.
pub fn unique_output_path(dir: &Path, input: &Path, extension: &str) -> PathBuf {
    let stem = output_stem(input);
    let mut n = 0usize;
    loop {
        let name = if n == 0 {
            format!("{stem}.{extension}")
        } else {
            format!("{stem}_{n}.{extension}")
        };
        let candidate = dir.join(name);
        if !candidate.is_file() {
            return candidate;
        }
        n += 1;
    }
}

/// Compile a file-name glob.
pub fn file_name_matcher(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(Glob::new(pattern)?.compile_matcher())
}

/// Regular files directly inside `dir` whose name matches `matcher`, sorted.
///
/// Entries that cannot be read (dangling links, permission errors) are
/// skipped. Only a failure to read `dir` itself is an error.
pub fn find_feature_files(dir: &Path, matcher: &GlobMatcher) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(io::Error::from(err)),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_stem() {
        assert_eq!(output_stem(Path::new("specs/US1.feature")), "US1");
        assert_eq!(output_stem(Path::new("US1.login.feature")), "US1");
        assert_eq!(output_stem(Path::new("README")), "README");
        assert_eq!(output_stem(Path::new(".hidden.feature")), "");
    }

    #[test]
    fn test_unique_output_path_suffixes() {
        let tmp = TempDir::new().unwrap();
        let input = Path::new("US1.feature");

        let first = unique_output_path(tmp.path(), input, "e2e.js");
        assert_eq!(first, tmp.path().join("US1.e2e.js"));
        fs::write(&first, "").unwrap();

        let second = unique_output_path(tmp.path(), input, "e2e.js");
        assert_eq!(second, tmp.path().join("US1_1.e2e.js"));
        fs::write(&second, "").unwrap();

        let third = unique_output_path(tmp.path(), input, "e2e.js");
        assert_eq!(third, tmp.path().join("US1_2.e2e.js"));
    }

    #[test]
    fn test_unique_output_path_fills_first_gap() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("US1.e2e.js"), "").unwrap();
        fs::write(tmp.path().join("US1_2.e2e.js"), "").unwrap();
        let path = unique_output_path(tmp.path(), Path::new("US1.feature"), "e2e.js");
        assert_eq!(path, tmp.path().join("US1_1.e2e.js"));
    }

    #[test]
    fn test_ensure_output_dir_is_reused() {
        let tmp = TempDir::new().unwrap();
        let dir = ensure_output_dir(tmp.path(), "step_definitions").unwrap();
        assert!(dir.is_dir());
        fs::write(dir.join("keep.e2e.js"), "x").unwrap();

        let again = ensure_output_dir(tmp.path(), "step_definitions").unwrap();
        assert_eq!(dir, again);
        assert!(again.join("keep.e2e.js").is_file());
    }

    #[test]
    fn test_find_feature_files_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        for name in [
            "US2.feature",
            "US1.feature",
            "notes.feature",
            "US3.txt",
            "xUS4.feature",
        ] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        fs::create_dir(tmp.path().join("US5.feature")).unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("US6.feature"), "").unwrap();

        let matcher = file_name_matcher("US*.feature").unwrap();
        let files = find_feature_files(tmp.path(), &matcher).unwrap();
        assert_eq!(
            files,
            vec![tmp.path().join("US1.feature"), tmp.path().join("US2.feature")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_find_feature_files_skips_dangling_links() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("US1.feature"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("zz_dangling"))
            .unwrap();
        std::os::unix::fs::symlink(
            tmp.path().join("missing.feature"),
            tmp.path().join("US9.feature"),
        )
        .unwrap();

        let matcher = file_name_matcher("US*.feature").unwrap();
        let files = find_feature_files(tmp.path(), &matcher).unwrap();
        assert_eq!(files, vec![tmp.path().join("US1.feature")]);
    }

    #[test]
    fn test_find_feature_files_missing_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let matcher = file_name_matcher("US*.feature").unwrap();
        assert!(find_feature_files(&tmp.path().join("missing"), &matcher).is_err());
    }
}
