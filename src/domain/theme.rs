//! Theme target descriptor
//!
//! Describes the third-party icon theme extension whose assets and manifest
//! the integration touches. Resolved fresh on every operation; nothing here
//! is cached between calls, so external reinstalls or updates of the theme
//! extension are picked up automatically.

use std::path::{Path, PathBuf};

use crate::domain::ports::ExtensionRegistry;

/// Extension identifier of the Material Icon Theme
pub const MATERIAL_THEME_ID: &str = "PKief.material-icon-theme";

/// Icon key used inside the theme manifest
pub const ICON_KEY: &str = "kemet";

/// Filename of the icon once installed in the theme's icons directory
pub const INSTALLED_ICON_FILE: &str = "kemet.svg";

/// Filename of the bundled source icon under this crate's assets directory
pub const SOURCE_ICON_FILE: &str = "kemet-file.svg";

/// Manifest filename, relative to the theme extension's `dist` directory
pub const MANIFEST_FILE: &str = "material-icons.json";

/// Icon path as written into `iconDefinitions` (relative to `dist/`)
pub const MANIFEST_ICON_PATH: &str = "../icons/kemet.svg";

/// File extensions (without dot) mapped to the icon key
pub const FILE_EXTENSIONS: [&str; 2] = ["k", "kemet"];

/// Language identifiers mapped to the icon key
pub const LANGUAGE_IDS: [&str; 1] = ["kemet"];

/// Preference key suppressing activation-time integration prompts
pub const SKIP_INTEGRATION_KEY: &str = "skip-material-integration";

/// Resolved install location of the theme extension, with derived paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTarget {
    root: PathBuf,
}

impl ThemeTarget {
    /// Resolve the theme extension through the registry.
    ///
    /// Returns `None` when the extension is not installed.
    pub fn resolve<R: ExtensionRegistry>(registry: &R) -> Option<Self> {
        registry.locate(MATERIAL_THEME_ID).map(|root| Self { root })
    }

    /// Build a target from a known root (tests, dry-run previews).
    pub fn from_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Install root of the theme extension
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the theme's icon SVGs
    pub fn icons_dir(&self) -> PathBuf {
        self.root.join("icons")
    }

    /// Destination path of the kemet icon inside the theme
    pub fn icon_path(&self) -> PathBuf {
        self.icons_dir().join(INSTALLED_ICON_FILE)
    }

    /// Path of the theme's icon manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("dist").join(MANIFEST_FILE)
    }
}
