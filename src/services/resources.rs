//! Resource path resolution.
//!
//! Assets live in two trees under the install base:
//!
//! - `<base>/mod/<data pack>/...`: override content for the active data pack
//! - `<base>/resources/...`: base game content
//!
//! A file in the mod tree shadows the base file with the same relative path. The check
//! is existence-based only; files are never merged.
//!
//! # Examples
//!
//! ```ignore
//! let locator = ResourceLocator::new("/opt/tuxemon", "tuxemon");
//! let hero = locator.fetch(&["sprites", "hero.png"]);
//! ```

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    mod_root: Utf8PathBuf,
    resources_root: Utf8PathBuf,
}

impl ResourceLocator {
    pub fn new<P: AsRef<Utf8Path>>(base: P, data_pack: &str) -> Self {
        let base = base.as_ref();
        Self {
            mod_root: base.join("mod").join(data_pack),
            resources_root: base.join("resources"),
        }
    }

    /// Resolve a resource from its relative path segments.
    ///
    /// # Returns
    ///
    /// The mod path if it exists, else the base resource path if it exists, else None.
    /// Empty requests and segments that would leave both roots (absolute paths, `..`)
    /// also yield None. Results are not cached.
    pub fn fetch<S: AsRef<str>>(&self, segments: &[S]) -> Option<Utf8PathBuf> {
        let relative: Utf8PathBuf = segments.iter().map(|s| s.as_ref()).collect();

        if !is_contained(&relative) {
            tracing::debug!("Rejected resource request: {:?}", relative);
            return None;
        }

        let mod_path = self.mod_root.join(&relative);
        if mod_path.exists() {
            return Some(mod_path);
        }

        let default_path = self.resources_root.join(&relative);
        if default_path.exists() {
            return Some(default_path);
        }

        tracing::debug!("Resource not found: {}", relative);
        None
    }

    pub fn mod_root(&self) -> &Utf8Path {
        &self.mod_root
    }

    pub fn resources_root(&self) -> &Utf8Path {
        &self.resources_root
    }
}

/// True when `relative` names at least one entry and stays below the root it is joined to
fn is_contained(relative: &Utf8Path) -> bool {
    let mut has_name = false;
    for component in relative.components() {
        match component {
            Utf8Component::Normal(_) => has_name = true,
            Utf8Component::CurDir => {}
            Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::ParentDir => {
                return false;
            }
        }
    }
    has_name
}
