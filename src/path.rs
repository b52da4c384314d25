//! Path manipulation utilities for multi-catalog
//!
//! Internal ids and runtime load paths are strings that may use either `/`
//! or `\` as a separator regardless of the host platform, so the helpers here
//! work on strings rather than relying on `std::path` splitting rules.

use std::path::{Component, Path, PathBuf};

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Replace every occurrence of `placeholder` in `path` with `root`.
///
/// An empty placeholder leaves the path unchanged.
pub fn substitute_placeholder(path: &str, placeholder: &str, root: &Path) -> String {
    if placeholder.is_empty() {
        return path.to_string();
    }
    path.replace(placeholder, &root.to_string_lossy())
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding normal component. The filesystem is never consulted.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Final component of a `/` or `\` separated path.
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATORS);
    match trimmed.rfind(SEPARATORS) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

/// Join a file name onto a runtime directory.
///
/// The directory may or may not end with a separator; an empty directory
/// yields the bare file name.
pub fn join_runtime_path(directory: &str, file_name: &str) -> String {
    if directory.is_empty() {
        return file_name.to_string();
    }
    let trimmed = directory.trim_end_matches(SEPARATORS);
    if trimmed.is_empty() {
        // directory was only separators, i.e. a root
        return format!("/{}", file_name);
    }
    format!("{}/{}", trimmed, file_name)
}
