use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find how a workspace crate is reachable
/// from the code a derive macro emits.
///
/// # Example
///
/// ```rust
/// # use sx_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("sx_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `sx_` and the caller depends on the
///    umbrella crate `sx_core`, return `::sx_core::short_name`
///    (e.g. `sx_reflect` -> `::sx_core::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A crate that derives on its own types needs `extern crate self as sx_reflect;`
/// so that the fallback path also resolves inside the crate itself.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Option<Document<Box<str>>>,
    pub modified_time: Option<SystemTime>,
}

const CORE_NAME: &str = "sx_core";
const PREFIX: &str = "sx_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    fn read(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(text).ok()
    }

    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let module = name.strip_prefix(PREFIX)?;
        if deps.contains_key(CORE_NAME) {
            return Some(Self::parse_path(&format!("::{CORE_NAME}::{module}")));
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from the
    /// caller's Cargo.toml. See the type-level documentation for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(manifest) = &self.manifest {
            for table in ["dependencies", "dev-dependencies"] {
                if let Some(Item::Table(deps)) = manifest.get(table)
                    && let Some(path) = Self::find_in_deps(deps, name)
                {
                    return path;
                }
            }
        }

        Self::parse_path(&format!("::{name}"))
    }

    /// Run `func` with the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Parsed manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::modified_time(&path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}
