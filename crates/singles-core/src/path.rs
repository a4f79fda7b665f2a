//! Path handling
//!
//! Header files are identified by absolute, lexically normalized paths, so
//! `dir/../a.hpp` and `a.hpp` reached from different includers share one
//! identity in a traversal's visited-set. Symlinks are not resolved.

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and normalize it
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Lexically remove `.` and `..` components without touching the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_parent_and_current() {
        assert_eq!(
            normalize(Path::new("/a/b/../c/./d.hpp")),
            PathBuf::from("/a/c/d.hpp")
        );
    }

    #[test]
    fn test_normalize_parent_above_root() {
        assert_eq!(normalize(Path::new("/../x.hpp")), PathBuf::from("/x.hpp"));
    }

    #[test]
    fn test_normalize_relative_leading_parents() {
        assert_eq!(
            normalize(Path::new("../../a/../b.hpp")),
            PathBuf::from("../../b.hpp")
        );
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_absolutize_relative() {
        let cwd = std::env::current_dir().unwrap();
        let resolved = absolutize(Path::new("include/../meta.hpp")).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, normalize(&cwd.join("meta.hpp")));
    }
}
