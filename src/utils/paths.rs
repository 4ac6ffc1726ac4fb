//! Path helpers shared by the walker and classifier

use std::path::Path;

/// Lowercased extension with its leading dot, or an empty string.
///
/// Dotfiles such as `.gitignore` have no extension.
pub fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => String::new(),
    }
}

/// `path` relative to `root` as a display string; `path` itself if it is not under `root`
pub fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Final path component as a string
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
