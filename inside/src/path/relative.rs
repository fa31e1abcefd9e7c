//! Relative path computation between two normalized absolute paths.

use std::path::{Component, Path, PathBuf};

/// Compute the path that navigates from `from` to `to`.
///
/// Both inputs are expected to be normalized (see
/// [`collapse`](super::normalize::collapse)). The shared leading components
/// are skipped, one `..` is emitted for every remaining component of `from`,
/// and the remaining components of `to` follow.
///
/// If the two paths do not share a root (different Windows drives, or one
/// rooted and one not) there is no way to navigate between them and `to` is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use inside::path::relative::relative;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(relative(Path::new("/a"), Path::new("/a/b/c")), PathBuf::from("b/c"));
/// assert_eq!(relative(Path::new("/a/b"), Path::new("/a")), PathBuf::from(".."));
/// assert_eq!(relative(Path::new("/a/b"), Path::new("/x/y")), PathBuf::from("../../x/y"));
/// assert_eq!(relative(Path::new("/a"), Path::new("/a")), PathBuf::new());
/// ```
#[must_use]
pub fn relative(from: &Path, to: &Path) -> PathBuf {
    if root_of(from) != root_of(to) {
        return to.to_path_buf();
    }

    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in &from_parts[common..] {
        result.push(Component::ParentDir);
    }
    for part in &to_parts[common..] {
        result.push(part);
    }
    result
}

/// Check whether a relative expression climbs out of its starting point.
///
/// True for `..` on its own and for anything whose first segment is `..`.
/// A segment that merely begins with two dots, such as `..cache`, does not
/// count.
///
/// # Examples
///
/// ```
/// use inside::path::relative::escapes;
/// use std::path::Path;
///
/// assert!(escapes(Path::new("..")));
/// assert!(escapes(Path::new("../sibling")));
/// assert!(!escapes(Path::new("..cache/file")));
/// assert!(!escapes(Path::new("child")));
/// ```
#[must_use]
pub fn escapes(relation: &Path) -> bool {
    matches!(relation.components().next(), Some(Component::ParentDir))
}

/// The prefix and root components of a path.
fn root_of(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}
