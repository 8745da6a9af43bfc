//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    catalog::{
        errors::CatalogError,
        models::{Product, ProductId, ProductQuery},
    },
    config::ApiConfig,
};

/// HTTP client for the remote catalog endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    config: ApiConfig,
    http: Client,
}

impl HttpCatalogService {
    /// Create a new service from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    #[tracing::instrument(name = "catalog.service.get_product", skip(self), err)]
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = format!("{}/goods/{id}", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse(format!(
                "product request failed with status {status}: {text}"
            )));
        }

        let parsed: Product = response.json().await?;

        Ok(parsed)
    }

    #[tracing::instrument(
        name = "catalog.service.list_products",
        skip(self, query),
        fields(page = query.page, per_page = query.per_page),
        err
    )]
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/goods", self.config.base_url);

        let mut params = vec![
            ("api_key", self.config.api_key.clone()),
            ("page", query.page.to_string()),
            ("per_page", query.per_page.to_string()),
        ];

        if let Some(search) = query.search {
            params.push(("query", search));
        }

        let response = self.http.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedResponse(format!(
                "goods request failed with status {status}: {text}"
            )));
        }

        let parsed: GoodsBody = response.json().await?;

        Ok(parsed.into_products())
    }
}

/// The goods endpoint wraps paginated results in an envelope but returns a
/// bare array for search results.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GoodsBody {
    Wrapped { goods: Vec<Product> },
    Bare(Vec<Product>),
}

impl GoodsBody {
    fn into_products(self) -> Vec<Product> {
        match self {
            Self::Wrapped { goods } | Self::Bare(goods) => goods,
        }
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch a single product record by identifier.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetch a page of the catalog, optionally narrowed by a search query.
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>, CatalogError>;
}
