// SPDX-License-Identifier: MPL-2.0
//! Language catalog service.
//!
//! Loads the bundled `assets/lang.json` resource once per process, caches
//! the parsed list, and derives the two views the translator screen needs:
//! every supported language (including the `"auto"` detection sentinel) and
//! the concrete target languages (everything but the sentinel).
//!
//! A malformed or missing resource never surfaces as an error. The service
//! installs a fixed two-entry fallback instead, trading real language names
//! for a UI that always has something to render.

use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fmt;

/// Reserved code meaning "let the provider detect the source language".
pub const AUTO_CODE: &str = "auto";

/// Logical path of the bundled catalog resource.
const CATALOG_FILE: &str = "lang.json";

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "lang.json"]
struct CatalogAsset;

/// A translatable language from the bundled catalog.
///
/// Equality and hashing consider only the `code`; the display name is
/// presentation detail and may legitimately differ between catalog
/// revisions for the same code.
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    code: String,
    name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this entry is the auto-detect sentinel.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.code == AUTO_CODE
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Language {}

impl std::hash::Hash for Language {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Once-per-process cache of the bundled language catalog.
///
/// Constructed explicitly and owned by the application root rather than
/// living in a global; the `loaded` flag makes the load state observable
/// instead of being implied by emptiness.
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    supported: Vec<Language>,
    targets: Vec<Language>,
    loaded: bool,
}

impl CatalogService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a service with the catalog already loaded. Used by the
    /// startup task so the read happens off the first frame.
    #[must_use]
    pub fn load() -> Self {
        let mut service = Self::new();
        service.load_once();
        service
    }

    /// Whether a load (or its fallback) has completed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Loads the bundled catalog on first call; later calls are no-ops.
    pub fn load_once(&mut self) {
        self.load_once_with(|| {
            CatalogAsset::get(CATALOG_FILE)
                .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
        });
    }

    /// Same as [`load_once`](Self::load_once), but with an injectable
    /// fetch step so tests can count reads or feed malformed input.
    pub fn load_once_with<F>(&mut self, fetch: F)
    where
        F: FnOnce() -> Option<String>,
    {
        if self.loaded {
            return;
        }

        let supported = fetch()
            .and_then(|raw| serde_json::from_str::<Vec<Language>>(&raw).ok())
            .unwrap_or_else(fallback_catalog);

        // Both views come from the same parse so callers never observe a
        // partially populated catalog.
        self.targets = supported
            .iter()
            .filter(|language| !language.is_auto())
            .cloned()
            .collect();
        self.supported = supported;
        self.loaded = true;
    }

    /// Every supported language, the auto-detect sentinel included.
    /// Triggers the load if it has not happened yet.
    pub fn supported_languages(&mut self) -> &[Language] {
        self.load_once();
        &self.supported
    }

    /// The concrete target languages (sentinel excluded), resource order
    /// preserved. Triggers the load if it has not happened yet.
    pub fn target_languages(&mut self) -> &[Language] {
        self.load_once();
        &self.targets
    }

    /// Read-only view of the supported list; empty until loaded.
    #[must_use]
    pub fn supported(&self) -> &[Language] {
        &self.supported
    }

    /// Read-only view of the target list; empty until loaded.
    #[must_use]
    pub fn targets(&self) -> &[Language] {
        &self.targets
    }
}

/// Fixed catalog installed when the bundled resource is missing or
/// unparseable. The "(Error)" suffix is the only user-visible hint that
/// something went wrong.
fn fallback_catalog() -> Vec<Language> {
    vec![
        Language::new(AUTO_CODE, "Auto Detect (Error)"),
        Language::new("en", "English (Error)"),
    ]
}
