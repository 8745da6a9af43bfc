//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Response, StatusCode};

use crate::{
    config::ApiConfig,
    orders::{
        errors::OrdersError,
        models::{NewOrder, Order, OrderId, OrderUpdate},
    },
};

/// HTTP client for the remote order endpoints.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    config: ApiConfig,
    http: Client,
}

impl HttpOrdersService {
    /// Create a new service from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

async fn check(response: Response, context: &str) -> Result<Response, OrdersError> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(OrdersError::NotFound);
    }

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        return Err(OrdersError::UnexpectedResponse(format!(
            "{context} failed with status {status}: {text}"
        )));
    }

    Ok(response)
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(good_count = order.good_ids.len()),
        err
    )]
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersError> {
        let url = format!("{}/orders", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .json(&order)
            .send()
            .await?;

        let response = check(response, "order creation").await?;

        Ok(response.json().await?)
    }

    #[tracing::instrument(name = "orders.service.get_orders", skip(self), err)]
    async fn get_orders(&self) -> Result<Vec<Order>, OrdersError> {
        let url = format!("{}/orders", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await?;

        let response = check(response, "order listing").await?;

        Ok(response.json().await?)
    }

    #[tracing::instrument(name = "orders.service.get_order", skip(self), err)]
    async fn get_order(&self, id: OrderId) -> Result<Order, OrdersError> {
        let url = format!("{}/orders/{id}", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await?;

        let response = check(response, "order lookup").await?;

        Ok(response.json().await?)
    }

    #[tracing::instrument(name = "orders.service.update_order", skip(self, update), err)]
    async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrdersError> {
        let url = format!("{}/orders/{id}", self.config.base_url);

        let response = self
            .http
            .put(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .json(&update)
            .send()
            .await?;

        let response = check(response, "order update").await?;

        Ok(response.json().await?)
    }

    #[tracing::instrument(name = "orders.service.delete_order", skip(self), err)]
    async fn delete_order(&self, id: OrderId) -> Result<(), OrdersError> {
        let url = format!("{}/orders/{id}", self.config.base_url);

        let response = self
            .http
            .delete(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await?;

        check(response, "order deletion").await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Submit a new order.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersError>;

    /// List the account's orders.
    async fn get_orders(&self) -> Result<Vec<Order>, OrdersError>;

    /// Retrieve a single order.
    async fn get_order(&self, id: OrderId) -> Result<Order, OrdersError>;

    /// Update the editable fields of an existing order.
    async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrdersError>;

    /// Delete an order.
    async fn delete_order(&self, id: OrderId) -> Result<(), OrdersError>;
}
