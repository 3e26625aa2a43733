//! File and image path substitution.
//!
//! Entry paths end up in `href`/`src` attributes, so both styles produce URI text:
//! absolute style yields a `file://` URI, relative style yields the URI relative to a
//! fixed base directory (by default the directory holding the running executable).
use crate::error::{Error, Result};
use log::debug;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// How entry paths are written into the rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// Relative to the resolver's base directory
    Relative,
    /// Fully qualified `file://` URI
    #[default]
    Absolute,
}

impl PathStyle {
    pub fn from_relative_flag(use_relative_paths: bool) -> Self {
        if use_relative_paths {
            Self::Relative
        } else {
            Self::Absolute
        }
    }
}

/// Turns user supplied paths into URI text against a fixed base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    /// Creates a resolver rooted at `base_dir`, which must be absolute.
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Creates a resolver rooted at the directory of the running executable.
    ///
    /// # Errors
    /// * `Error::IoError` if the executable location is unavailable
    /// * `Error::PathError` if it has no parent directory
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().map_err(Error::IoError)?;
        let base_dir = exe.parent().ok_or_else(|| {
            Error::PathError(format!("'{}' has no parent directory", exe.display()))
        })?;
        Ok(Self::new(base_dir))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves `path` into URI text in the requested style.
    ///
    /// Relative input paths are taken relative to the base directory. Input that is
    /// already a URL (`https://...`, `file:///...`) is used as-is. When no relative
    /// form exists, for instance for a remote URL, the absolute URI is returned.
    ///
    /// # Errors
    /// * `Error::PathError` if the path or the base directory cannot be expressed as a URI
    pub fn resolve(&self, path: &str, style: PathStyle) -> Result<String> {
        let target = self.to_url(path)?;

        let resolved = match style {
            PathStyle::Absolute => target.to_string(),
            PathStyle::Relative => {
                let base = Url::from_directory_path(&self.base_dir).map_err(|_| {
                    Error::PathError(format!(
                        "base directory '{}' is not absolute",
                        self.base_dir.display()
                    ))
                })?;
                base.make_relative(&target).unwrap_or_else(|| target.to_string())
            }
        };

        debug!("Resolved '{}' as {:?} to '{}'.", path, style, resolved);
        Ok(resolved)
    }

    fn to_url(&self, path: &str) -> Result<Url> {
        // Single letter schemes are drive letters, not URLs.
        if let Ok(url) = Url::parse(path) {
            if url.scheme().len() > 1 {
                return Ok(url);
            }
        }

        let path = Path::new(path);
        let absolute = normalize(&if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        });

        Url::from_file_path(&absolute).map_err(|_| {
            Error::PathError(format!("'{}' cannot be converted to a URI", absolute.display()))
        })
    }
}

/// Lexically resolves `.` and `..` components.
///
/// The filesystem is not consulted, so symlinks are not followed. `..` above the
/// root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
