//! File discovery options: which files a directory scan picks up.

use serde::{Deserialize, Deserializer, Serialize};

fn default_extensions() -> Vec<String> {
    vec![".go".to_string()]
}

fn default_exclude_suffixes() -> Vec<String> {
    vec!["_test.go".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Allow-list of file extensions (e.g. `.go`, `.gno`).
    #[serde(default = "default_extensions", deserialize_with = "list_or_csv")]
    pub extensions: Vec<String>,

    /// File name suffixes that are never processed (e.g. `_test.go`).
    #[serde(
        default = "default_exclude_suffixes",
        deserialize_with = "list_or_csv"
    )]
    pub exclude_suffixes: Vec<String>,

    /// Honor `.gitignore`/`.ignore` files while walking directories.
    #[serde(default)]
    pub respect_gitignore: bool,
}

impl DiscoveryConfig {
    /// Trim entries, drop empty ones and give every extension a leading dot.
    #[must_use]
    pub fn normalized(self) -> Self {
        let extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim())
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        let exclude_suffixes = self
            .exclude_suffixes
            .iter()
            .map(|suffix| suffix.trim())
            .filter(|suffix| !suffix.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            extensions,
            exclude_suffixes,
            respect_gitignore: self.respect_gitignore,
        }
    }

    /// Case-insensitive check against the extension allow-list.
    #[must_use]
    pub fn has_allowed_extension(&self, path: &str) -> bool {
        ends_with_any(path, &self.extensions)
    }

    /// Case-insensitive check against the suffix deny-list.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        ends_with_any(path, &self.exclude_suffixes)
    }

    /// Extension list as it appears in messages: `.go,.gno`.
    #[must_use]
    pub fn extensions_display(&self) -> String {
        self.extensions.join(",")
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_suffixes: default_exclude_suffixes(),
            respect_gitignore: false,
        }
    }
}

fn ends_with_any(path: &str, suffixes: &[String]) -> bool {
    let path = path.to_lowercase();
    suffixes
        .iter()
        .any(|suffix| path.ends_with(&suffix.to_lowercase()))
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accept either a TOML array or a comma-separated string
/// (`GOSIG_DISCOVERY__EXTENSIONS=.go,.gno`).
fn list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrCsv {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match ListOrCsv::deserialize(deserializer)? {
        ListOrCsv::List(list) => list,
        ListOrCsv::Csv(raw) => split_list(&raw),
    })
}
