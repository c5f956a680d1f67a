//! Configuration types for the DeviceSearchProvider.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::errors::DeviceSearchError;

/// Environment variable read by `SearchProviderConfig::from_env`.
pub const BACKEND_ENV_VAR: &str = "DEVICE_SEARCH_CATALOG_BACKEND";

/// Catalog back end a provider searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogBackend {
    /// The generalized model catalog.
    ModelCatalog,
    /// The legacy device search catalog. Deprecated.
    DeviceSearchCatalog,
}

impl FromStr for CatalogBackend {
    type Err = DeviceSearchError;

    /// Valid values: "model-catalog" or "device-search" (case-insensitive,
    /// dashes, underscores or no separator).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "model-catalog" | "modelcatalog" | "model" => Ok(Self::ModelCatalog),
            "device-search" | "devicesearch" | "device-search-catalog" | "legacy" => {
                Ok(Self::DeviceSearchCatalog)
            }
            other => Err(DeviceSearchError::config(format!(
                "Unknown catalog backend '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for CatalogBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelCatalog => write!(f, "model-catalog"),
            Self::DeviceSearchCatalog => write!(f, "device-search"),
        }
    }
}

/// Configuration for the DeviceSearchProvider.
///
/// The backend is chosen once, when the provider is built, and stays fixed
/// for the provider's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchProviderConfig {
    /// Backend to search.
    ///
    /// `None` uses the model catalog when the deployment provides one and
    /// falls back to the device search catalog otherwise.
    pub backend: Option<CatalogBackend>,
}

impl SearchProviderConfig {
    /// Create a config pinned to one backend.
    pub fn with_backend(backend: CatalogBackend) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Read the backend from `DEVICE_SEARCH_CATALOG_BACKEND`.
    ///
    /// Unset, empty or `auto` selects automatically. Invalid values are
    /// logged and also select automatically.
    pub fn from_env() -> Self {
        Self {
            backend: parse_backend_setting(env::var(BACKEND_ENV_VAR).ok().as_deref()),
        }
    }

    /// Backend to use given whether a model catalog is available.
    pub fn resolve_backend(&self, model_catalog_available: bool) -> CatalogBackend {
        match self.backend {
            Some(backend) => backend,
            None if model_catalog_available => CatalogBackend::ModelCatalog,
            None => CatalogBackend::DeviceSearchCatalog,
        }
    }
}

fn parse_backend_setting(value: Option<&str>) -> Option<CatalogBackend> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    if value.eq_ignore_ascii_case("auto") {
        return None;
    }
    match value.parse() {
        Ok(backend) => Some(backend),
        Err(e) => {
            warn!(value = %value, error = %e, "Invalid {}, selecting backend automatically", BACKEND_ENV_VAR);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!(
            "model-catalog".parse::<CatalogBackend>().unwrap(),
            CatalogBackend::ModelCatalog
        );
        assert_eq!(
            "MODEL_CATALOG".parse::<CatalogBackend>().unwrap(),
            CatalogBackend::ModelCatalog
        );
        assert_eq!(
            "device-search".parse::<CatalogBackend>().unwrap(),
            CatalogBackend::DeviceSearchCatalog
        );
        assert_eq!(
            "DeviceSearch".parse::<CatalogBackend>().unwrap(),
            CatalogBackend::DeviceSearchCatalog
        );
        assert!(matches!(
            "solr".parse::<CatalogBackend>(),
            Err(DeviceSearchError::ConfigError(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for backend in [CatalogBackend::ModelCatalog, CatalogBackend::DeviceSearchCatalog] {
            assert_eq!(backend.to_string().parse::<CatalogBackend>().unwrap(), backend);
        }
    }

    #[test]
    fn test_parse_backend_setting() {
        assert_eq!(parse_backend_setting(None), None);
        assert_eq!(parse_backend_setting(Some("")), None);
        assert_eq!(parse_backend_setting(Some("auto")), None);
        assert_eq!(parse_backend_setting(Some("bogus")), None);
        assert_eq!(
            parse_backend_setting(Some(" legacy ")),
            Some(CatalogBackend::DeviceSearchCatalog)
        );
    }

    #[test]
    fn test_resolve_backend() {
        let auto = SearchProviderConfig::default();
        assert_eq!(auto.resolve_backend(true), CatalogBackend::ModelCatalog);
        assert_eq!(auto.resolve_backend(false), CatalogBackend::DeviceSearchCatalog);

        let pinned = SearchProviderConfig::with_backend(CatalogBackend::DeviceSearchCatalog);
        assert_eq!(pinned.resolve_backend(true), CatalogBackend::DeviceSearchCatalog);
    }
}
