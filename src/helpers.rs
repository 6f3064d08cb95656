use std::path::{Path, PathBuf};

/// Get the default logging directory.
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("astgen")
}

/// Search a path for files matching `predicate`, recursing for `depth`.
pub fn search_path<P, Q>(path: &P, predicate: Q, depth: u64) -> Vec<PathBuf>
where
    P: AsRef<Path>,
    Q: Copy + Fn(&Path) -> bool,
{
    if depth == 0 {
        return Vec::new();
    }

    let mut found_paths = Vec::new();

    if let Ok(iter) = std::fs::read_dir(path) {
        for entry in iter.flatten() {
            let entry_path = entry.path();

            if entry_path.is_file() && predicate(&entry_path) {
                found_paths.push(entry_path);
            } else if entry_path.is_dir() {
                found_paths.extend(search_path(
                    &entry_path,
                    predicate,
                    depth - 1,
                ));
            }
        }
    }

    found_paths.sort();

    found_paths
}

/// Normalizes newlines in `string`.
pub fn normalize_newlines<S: AsRef<str>>(string: &S) -> String {
    string.as_ref().replace("\r\n", "\n").replace('\r', "\n")
}
