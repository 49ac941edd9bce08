use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    pager::{PaginatorConfig, DEFAULT_LIMIT, DEFAULT_RANGE},
    render::nav::DEFAULT_CLASS,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid arguments: {0}")]
    Args(#[from] pico_args::Error),
}

/// How the item listing asks for and renders its pager.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub limit: i64,
    pub range: i64,
    pub hash: Option<String>,
    pub fixed_first_and_last: bool,
    pub class: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            range: DEFAULT_RANGE,
            hash: None,
            fixed_first_and_last: true,
            class: DEFAULT_CLASS.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind: String,
    /// Number of rows the demo listing pretends to have.
    pub rows: i64,
    pub paginator: PaginatorConfig,
    pub listing: ListingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".into(),
            rows: 95,
            paginator: PaginatorConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&data).map_err(|source| ConfigError::Json {
            path: path.to_owned(),
            source,
        })
    }

    pub fn parse(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(AppConfig::parse("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn nested_sections_merge_with_defaults() {
        let config = AppConfig::parse(
            r#"{
                "rows": 1234,
                "paginator": { "title": "Seite" },
                "listing": { "limit": 25, "hash": "top", "fixed_first_and_last": false }
            }"#,
        )
        .unwrap();

        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.rows, 1234);
        assert_eq!(config.paginator.title, "Seite");
        assert_eq!(config.paginator.link_base, "?page=");
        assert_eq!(config.listing.limit, 25);
        assert_eq!(config.listing.range, DEFAULT_RANGE);
        assert_eq!(config.listing.hash.as_deref(), Some("top"));
        assert!(!config.listing.fixed_first_and_last);
        assert_eq!(config.listing.class, DEFAULT_CLASS);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/nonexistent/pagenav.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pagenav.json"));
    }
}
