//! Path relationship classification.
//!
//! A [`PathRelationship`] summarizes how two resolved paths relate. It is
//! produced by [`ContainmentChecker::relationship`], which runs the
//! containment predicate in both directions.
//!
//! [`ContainmentChecker::relationship`]: crate::ContainmentChecker::relationship

use std::fmt;
use std::path::Path;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use inside::{ContainmentChecker, PathRelationship};
///
/// # #[cfg(unix)]
/// # {
/// let mut checker = ContainmentChecker::with_base("/home/user").unwrap();
/// assert_eq!(
///     checker.relationship("/home/user", "/home/user/project"),
///     PathRelationship::Ancestor
/// );
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    ///
    /// The second path is strictly inside the first.
    Ancestor,

    /// The first path is a descendant of the second.
    ///
    /// The first path is strictly inside the second.
    Descendant,

    /// The paths resolve to the same location.
    Same,

    /// Neither path is inside the other.
    Unrelated,
}

impl PathRelationship {
    /// Build a relationship from the outcome of the containment checks.
    ///
    /// `same` wins over the directional flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use inside::PathRelationship;
    ///
    /// assert_eq!(PathRelationship::classify(false, true, false), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::classify(true, false, false), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::classify(false, false, true), PathRelationship::Same);
    /// assert_eq!(PathRelationship::classify(false, false, false), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn classify(first_inside_second: bool, second_inside_first: bool, same: bool) -> Self {
        if same {
            Self::Same
        } else if second_inside_first {
            Self::Ancestor
        } else if first_inside_second {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use inside::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Descendant.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// The relationship seen from the other side.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ancestor => Self::Descendant,
            Self::Descendant => Self::Ancestor,
            other => other,
        }
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use inside::PathRelationship;
    /// use std::path::Path;
    ///
    /// let desc = PathRelationship::Ancestor.description(Path::new("/a"), Path::new("/a/b"));
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => {
                format!("{} is an ancestor of {}", path1.display(), path2.display())
            }
            Self::Descendant => {
                format!("{} is a descendant of {}", path1.display(), path2.display())
            }
            Self::Same => {
                format!(
                    "{} and {} are the same path",
                    path1.display(),
                    path2.display()
                )
            }
            Self::Unrelated => {
                format!(
                    "{} and {} are unrelated paths",
                    path1.display(),
                    path2.display()
                )
            }
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_same_wins() {
        assert_eq!(
            PathRelationship::classify(true, true, true),
            PathRelationship::Same
        );
    }

    #[test]
    fn test_is_hierarchical() {
        assert!(PathRelationship::Ancestor.is_hierarchical());
        assert!(PathRelationship::Descendant.is_hierarchical());
        assert!(PathRelationship::Same.is_hierarchical());
        assert!(!PathRelationship::Unrelated.is_hierarchical());
    }

    #[test]
    fn test_reversed() {
        assert_eq!(
            PathRelationship::Ancestor.reversed(),
            PathRelationship::Descendant
        );
        assert_eq!(
            PathRelationship::Descendant.reversed(),
            PathRelationship::Ancestor
        );
        assert_eq!(PathRelationship::Same.reversed(), PathRelationship::Same);
        assert_eq!(
            PathRelationship::Unrelated.reversed(),
            PathRelationship::Unrelated
        );
    }

    #[test]
    fn test_description() {
        let desc = PathRelationship::Descendant.description(Path::new("/a/b"), Path::new("/a"));
        assert!(desc.contains("/a/b"));
        assert!(desc.contains("descendant"));

        let desc = PathRelationship::Same.description(Path::new("/a"), Path::new("/a"));
        assert!(desc.contains("same"));

        let desc = PathRelationship::Unrelated.description(Path::new("/a"), Path::new("/b"));
        assert!(desc.contains("/b"));
        assert!(desc.contains("unrelated"));
    }

    #[test]
    fn test_display() {
        assert_eq!(PathRelationship::Ancestor.to_string(), "ancestor");
        assert_eq!(PathRelationship::Unrelated.to_string(), "unrelated");
    }
}
