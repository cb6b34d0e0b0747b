use crate::domain::model::{Dialect, IconDescriptor};
use crate::utils::error::Result;
use std::path::{Component, Path, PathBuf};

/// Lexically drops `.` components and folds `..` into its parent, so
/// `./icons/../icons/a.svg` and `icons/a.svg` compare equal.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
    /// Files directly inside `dir` with the given extension, sorted by name.
    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>>;

    /// The location `path` actually refers to, for identity comparisons.
    fn resolve(&self, path: &Path) -> PathBuf {
        normalize_path(path)
    }
}

/// Indentation applied to fragments of one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation {
    pub fragment: usize,
    pub closing: usize,
}

pub trait ConfigProvider {
    fn icons_dir(&self) -> &Path;
    fn primary_document(&self) -> &Path;
    fn alternate_document(&self) -> &Path;
    fn icon_mappings(&self) -> &[IconDescriptor];
    fn alternate_suffix(&self) -> &str;
    fn indentation(&self, dialect: Dialect) -> Indentation;

    fn dialect_for(&self, target_id: &str) -> Dialect {
        if target_id.ends_with(self.alternate_suffix()) {
            Dialect::Jsx
        } else {
            Dialect::Markup
        }
    }
}

pub trait SpriteConfigProvider: ConfigProvider {
    fn sprite_output(&self) -> &Path;
    fn symbol_prefix(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_drops_current_dir() {
        assert_eq!(normalize_path(Path::new("./icons/sprite.svg")), PathBuf::from("icons/sprite.svg"));
        assert_eq!(normalize_path(Path::new("icons/./sprite.svg")), PathBuf::from("icons/sprite.svg"));
    }

    #[test]
    fn test_normalize_path_folds_parent_dir() {
        assert_eq!(normalize_path(Path::new("icons/../icons/a.svg")), PathBuf::from("icons/a.svg"));
        assert_eq!(normalize_path(Path::new("../shared/a.svg")), PathBuf::from("../shared/a.svg"));
        assert_eq!(normalize_path(Path::new("/../a.svg")), PathBuf::from("/a.svg"));
    }
}
