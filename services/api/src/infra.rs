use metrics_exporter_prometheus::PrometheusHandle;
use nailcare_advisor::config::CatalogConfig;
use nailcare_advisor::error::AppError;
use nailcare_advisor::workflows::diagnosis::{
    AnswerSet, ConfiguredCatalog, HttpCatalogReader, StaticCatalog,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Pick the catalog source: remote listing, then fixture file, then empty.
pub(crate) fn catalog_from_config(config: &CatalogConfig) -> Result<ConfiguredCatalog, AppError> {
    if let Some(url) = &config.url {
        info!(%url, timeout_secs = config.timeout.as_secs(), "using storefront catalog");
        let reader = HttpCatalogReader::new(url.clone(), config.timeout)?;
        return Ok(ConfiguredCatalog::Http(reader));
    }

    if let Some(path) = &config.file {
        let catalog = StaticCatalog::from_path(path)?;
        info!(
            path = %path.display(),
            products = catalog.products().len(),
            "using catalog fixture"
        );
        return Ok(ConfiguredCatalog::Static(catalog));
    }

    warn!("no CATALOG_URL or CATALOG_FILE configured, recommendations will be empty");
    Ok(ConfiguredCatalog::Static(StaticCatalog::default()))
}

pub(crate) fn load_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let file = std::fs::File::open(path)?;
    let answers = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_config_falls_back_to_empty_static_catalog() {
        let config = CatalogConfig {
            url: None,
            file: None,
            timeout: Duration::from_secs(1),
        };

        match catalog_from_config(&config).expect("catalog builds") {
            ConfiguredCatalog::Static(catalog) => assert!(catalog.products().is_empty()),
            other => panic!("expected static catalog, got {other:?}"),
        }
    }

    #[test]
    fn url_takes_precedence_over_file() {
        let config = CatalogConfig {
            url: Some("http://127.0.0.1:4000/api/products".to_string()),
            file: Some("/does/not/exist.json".into()),
            timeout: Duration::from_secs(1),
        };

        match catalog_from_config(&config).expect("catalog builds") {
            ConfiguredCatalog::Http(reader) => {
                assert_eq!(reader.url(), "http://127.0.0.1:4000/api/products")
            }
            other => panic!("expected http catalog, got {other:?}"),
        }
    }

    #[test]
    fn missing_fixture_file_is_an_error() {
        let config = CatalogConfig {
            url: None,
            file: Some("/does/not/exist.json".into()),
            timeout: Duration::from_secs(1),
        };

        assert!(matches!(
            catalog_from_config(&config),
            Err(AppError::Catalog(_))
        ));
    }
}
