//! Icon Catalog
//!
//! Loads and provides access to the static registry of icon libraries.
//! The builtin registry is baked into the binary as YAML, parsed and
//! validated once at startup, then shared read-only for the process
//! lifetime. There are no mutation operations.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// Builtin registry data, embedded at compile time
const BUILTIN_LIBRARIES: &str = include_str!("libraries.yaml");

/// Root of the icon catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconCatalog {
    pub version: String,
    pub description: String,
    libraries: Vec<IconLibrary>,
}

/// A single icon library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconLibrary {
    /// Stable key (e.g. "phosphor")
    pub id: String,
    /// Human-facing name (e.g. "Phosphor")
    pub display_name: String,
    /// Library homepage
    pub base_url: String,
    /// URL template for raw vector assets; must contain `{name}`
    #[serde(default)]
    pub asset_base_url: Option<String>,
    pub icons: Vec<IconEntry>,
}

/// One icon with its descriptive keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

impl IconCatalog {
    /// Load and validate the builtin registry
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load_from_str(BUILTIN_LIBRARIES)
    }

    /// Load from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::load_from_str(&content)
    }

    /// Load from a YAML string
    ///
    /// Validation is fail-fast: a library with no icons, an icon with no
    /// keywords, a blank keyword, a duplicate icon name within a library,
    /// a relative base URL, or an asset template without the `{name}`
    /// placeholder all reject the whole catalog.
    pub fn load_from_str(yaml: &str) -> Result<Self, CatalogError> {
        let mut catalog: IconCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Libraries in declaration order. Iteration order is load-bearing:
    /// the scorer breaks score ties by catalog position.
    pub fn libraries(&self) -> &[IconLibrary] {
        &self.libraries
    }

    /// Total number of icon entries across all libraries
    pub fn entry_count(&self) -> usize {
        self.libraries.iter().map(|l| l.icons.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Find a library by display name or id, case-insensitive
    pub fn find_library(&self, name: &str) -> Option<&IconLibrary> {
        self.libraries.iter().find(|l| {
            l.display_name.eq_ignore_ascii_case(name) || l.id.eq_ignore_ascii_case(name)
        })
    }

    /// Normalize and check invariants; keywords and icon names come out
    /// trimmed and lowercased so downstream code never re-normalizes.
    fn validate(&mut self) -> Result<(), CatalogError> {
        for library in &mut self.libraries {
            if library.icons.is_empty() {
                return Err(CatalogError::EmptyLibrary {
                    library: library.id.clone(),
                });
            }

            Url::parse(&library.base_url).map_err(|_| CatalogError::InvalidBaseUrl {
                library: library.id.clone(),
                url: library.base_url.clone(),
            })?;

            if let Some(template) = &library.asset_base_url {
                if !template.contains("{name}") {
                    return Err(CatalogError::BadAssetTemplate {
                        library: library.id.clone(),
                        template: template.clone(),
                    });
                }
            }

            let mut seen = HashSet::new();
            for icon in &mut library.icons {
                icon.name = icon.name.trim().to_lowercase();
                if icon.name.is_empty() {
                    return Err(CatalogError::BlankIconName {
                        library: library.id.clone(),
                    });
                }
                if !seen.insert(icon.name.clone()) {
                    return Err(CatalogError::DuplicateIcon {
                        library: library.id.clone(),
                        icon: icon.name.clone(),
                    });
                }

                if icon.keywords.is_empty() {
                    return Err(CatalogError::NoKeywords {
                        library: library.id.clone(),
                        icon: icon.name.clone(),
                    });
                }
                for keyword in &mut icon.keywords {
                    *keyword = keyword.trim().to_lowercase();
                    if keyword.is_empty() {
                        return Err(CatalogError::BlankKeyword {
                            library: library.id.clone(),
                            icon: icon.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl IconLibrary {
    /// Find an icon entry by name, case-insensitive
    pub fn find_icon(&self, name: &str) -> Option<&IconEntry> {
        self.icons.iter().find(|i| i.name.eq_ignore_ascii_case(name))
    }
}

/// Errors that can occur when loading the catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    ParseError(String),

    #[error("Library '{library}' has no icons")]
    EmptyLibrary { library: String },

    #[error("Library '{library}' has an icon with a blank name")]
    BlankIconName { library: String },

    #[error("Library '{library}' declares icon '{icon}' more than once")]
    DuplicateIcon { library: String, icon: String },

    #[error("Icon '{icon}' in library '{library}' has no keywords")]
    NoKeywords { library: String, icon: String },

    #[error("Icon '{icon}' in library '{library}' has a blank keyword")]
    BlankKeyword { library: String, icon: String },

    #[error("Library '{library}' has invalid base_url '{url}'")]
    InvalidBaseUrl { library: String, url: String },

    #[error("Library '{library}' asset_base_url '{template}' is missing the {{name}} placeholder")]
    BadAssetTemplate { library: String, template: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CATALOG: &str = r#"
version: "1.0"
description: "Test catalog"
libraries:
  - id: lucide
    display_name: Lucide
    base_url: https://lucide.dev
    asset_base_url: "https://unpkg.com/lucide-static@latest/icons/{name}.svg"
    icons:
      - name: music
        keywords: [music, audio, sound, song]
      - name: Bell
        keywords: [Notification, " alert "]
  - id: heroicons
    display_name: Heroicons
    base_url: https://heroicons.com
    icons:
      - name: star
        keywords: [rating, favorite]
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = IconCatalog::load_from_str(SAMPLE_CATALOG).unwrap();
        assert_eq!(catalog.version, "1.0");
        assert_eq!(catalog.libraries().len(), 2);
        assert_eq!(catalog.entry_count(), 3);
    }

    #[test]
    fn test_builtin_loads() {
        let catalog = IconCatalog::builtin().unwrap();
        assert_eq!(catalog.libraries().len(), 3);
        assert!(catalog.find_library("Phosphor").is_some());
        assert!(catalog.find_library("Heroicons").is_some());
        assert!(catalog.find_library("Lucide").is_some());
        // 20 + 15 + 15
        assert_eq!(catalog.entry_count(), 50);
    }

    #[test]
    fn test_names_and_keywords_normalized() {
        let catalog = IconCatalog::load_from_str(SAMPLE_CATALOG).unwrap();
        let lucide = catalog.find_library("lucide").unwrap();
        let bell = lucide.find_icon("bell").unwrap();
        assert_eq!(bell.name, "bell");
        assert_eq!(bell.keywords, vec!["notification", "alert"]);
    }

    #[test]
    fn test_find_library_case_insensitive() {
        let catalog = IconCatalog::load_from_str(SAMPLE_CATALOG).unwrap();
        assert!(catalog.find_library("LUCIDE").is_some());
        assert!(catalog.find_library("Lucide").is_some());
        assert!(catalog.find_library("unknown").is_none());
    }

    #[test]
    fn test_empty_library_rejected() {
        let yaml = r#"
version: "1.0"
description: "bad"
libraries:
  - id: empty
    display_name: Empty
    base_url: https://example.com
    icons: []
"#;
        let err = IconCatalog::load_from_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyLibrary { .. }));
    }

    #[test]
    fn test_missing_keywords_rejected() {
        let yaml = r#"
version: "1.0"
description: "bad"
libraries:
  - id: lib
    display_name: Lib
    base_url: https://example.com
    icons:
      - name: lonely
        keywords: []
"#;
        let err = IconCatalog::load_from_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::NoKeywords { .. }));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let yaml = r#"
version: "1.0"
description: "bad"
libraries:
  - id: lib
    display_name: Lib
    base_url: https://example.com
    icons:
      - name: icon
        keywords: ["ok", "   "]
"#;
        let err = IconCatalog::load_from_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::BlankKeyword { .. }));
    }

    #[test]
    fn test_duplicate_icon_rejected() {
        let yaml = r#"
version: "1.0"
description: "bad"
libraries:
  - id: lib
    display_name: Lib
    base_url: https://example.com
    icons:
      - name: star
        keywords: [rating]
      - name: STAR
        keywords: [favorite]
"#;
        let err = IconCatalog::load_from_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIcon { .. }));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let yaml = r#"
version: "1.0"
description: "bad"
libraries:
  - id: lib
    display_name: Lib
    base_url: not-a-url
    icons:
      - name: icon
        keywords: [thing]
"#;
        let err = IconCatalog::load_from_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_asset_template_requires_placeholder() {
        let yaml = r#"
version: "1.0"
description: "bad"
libraries:
  - id: lib
    display_name: Lib
    base_url: https://example.com
    asset_base_url: "https://example.com/icons/static.svg"
    icons:
      - name: icon
        keywords: [thing]
"#;
        let err = IconCatalog::load_from_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::BadAssetTemplate { .. }));
    }
}
