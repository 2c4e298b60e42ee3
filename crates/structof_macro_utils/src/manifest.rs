use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a workspace crate as seen from the
/// caller's Cargo.toml.
///
/// Derive output must name the reflection crate through a path that resolves
/// in the crate invoking the macro, which may depend on `structof_reflect`
/// directly or only on the `structof` facade.
///
/// # Example
///
/// ```rust
/// # use structof_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("structof_reflect"));
/// ```
///
/// Reading the manifest is not cheap; call this once per macro invocation and
/// pass the path around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested name begins with `structof_` and the caller depends on
///    the facade crate `structof`, return `::structof::short_name`
///    (e.g. `structof_reflect` -> `::structof::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// Library code refers to itself through `crate::...`, while doctests use
/// `::crate_name`. Adding `extern crate self as structof_reflect;` in the crate
/// root lets both resolve.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "structof";
const CRATE_PREFIX: &str = "structof_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
            path.segments.push(Self::parse_str(module));
            return Some(path);
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// this crate's Cargo.toml. See the type-level documentation for the
    /// resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(Item::Table(deps)) = self.manifest.get("dependencies")
            && let Some(val) = Self::find_in_deps(deps, name)
        {
            return val;
        }

        if let Some(Item::Table(deps)) = self.manifest.get("dev-dependencies")
            && let Some(val) = Self::find_in_deps(deps, name)
        {
            return val;
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Run `func` against the caller's parsed Cargo.toml.
    ///
    /// Parsed manifests are cached per path and refreshed when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use toml_edit::Document;

    use super::Manifest;

    fn resolve(toml: &str, name: &str) -> String {
        let manifest = Manifest {
            manifest: Document::parse(toml.to_owned().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        };
        manifest
            .get_crate_path(name)
            .to_token_stream()
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn direct_dependency_wins() {
        let toml = "[dependencies]\nstructof_reflect = \"0\"\nstructof = \"0\"\n";
        assert_eq!(resolve(toml, "structof_reflect"), "::structof_reflect");
    }

    #[test]
    fn facade_dependency() {
        let toml = "[dependencies]\nstructof = \"0\"\n";
        assert_eq!(resolve(toml, "structof_reflect"), "::structof::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let toml = "[dev-dependencies]\nstructof = \"0\"\n";
        assert_eq!(resolve(toml, "structof_reflect"), "::structof::reflect");
        assert_eq!(resolve("", "structof_reflect"), "::structof_reflect");
    }
}
