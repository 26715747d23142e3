use std::future::Future;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

/// Product as returned by the storefront "list products" query. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_images")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub category: Option<ProductCategory>,
}

impl CatalogProduct {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.name.as_str())
    }
}

// Decimal columns frequently arrive as strings ("24.50").
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(value) => Ok(value),
        RawPrice::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|err| serde::de::Error::custom(format!("invalid price '{raw}': {err}"))),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Storefronts send either bare paths or `{ "url": ... }` objects.
fn deserialize_images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawImage {
        Path(String),
        Object { url: String },
    }

    let images = Option::<Vec<RawImage>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(images
        .into_iter()
        .map(|image| match image {
            RawImage::Path(path) => path,
            RawImage::Object { url } => url,
        })
        .collect())
}

/// Decode a product listing entry by entry, skipping products that do not parse.
pub fn decode_products(entries: Vec<Value>) -> Vec<CatalogProduct> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, entry)| match serde_json::from_value::<CatalogProduct>(entry) {
                Ok(product) => Some(product),
                Err(err) => {
                    warn!(index, error = %err, "skipping catalog product that does not decode");
                    None
                }
            },
        )
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("catalog payload could not be decoded: {0}")]
    Decode(String),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of the product catalog consumed by the matcher.
pub trait CatalogReader: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<CatalogProduct>, CatalogError>> + Send;
}

/// Catalog held in memory, loaded from a JSON fixture or built in code.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<CatalogProduct>,
}

impl StaticCatalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries: Vec<Value> = serde_json::from_reader(reader)
            .map_err(|err| CatalogError::Decode(err.to_string()))?;
        Ok(Self::new(decode_products(entries)))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|err| {
            CatalogError::Unavailable(format!("cannot open {}: {err}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }
}

impl CatalogReader for StaticCatalog {
    async fn list(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        Ok(self.products.clone())
    }
}

/// Reads the catalog from the storefront's product listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogReader {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogReader {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CatalogError::Unavailable(err.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogReader for HttpCatalogReader {
    async fn list(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let entries = response
            .json::<Vec<Value>>()
            .await
            .map_err(|err| CatalogError::Decode(err.to_string()))?;
        Ok(decode_products(entries))
    }
}

/// The catalog readers the service can be configured with.
#[derive(Debug, Clone)]
pub enum ConfiguredCatalog {
    Http(HttpCatalogReader),
    Static(StaticCatalog),
}

impl CatalogReader for ConfiguredCatalog {
    async fn list(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        match self {
            Self::Http(reader) => reader.list().await,
            Self::Static(reader) => reader.list().await,
        }
    }
}
