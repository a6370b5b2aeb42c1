//! # Sales Client
//!
//! Sale recording and history retrieval.
//!
//! Recording is a single atomic call: either the backend acknowledges the
//! sale or the error surfaces to the user with no partial local record and
//! no retry. History is rendered exactly in the order the backend returns.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use karyana_core::{CartItem, Sale};

use crate::config::ApiConfig;
use crate::credentials::CredentialStore;
use crate::error::{ApiError, ApiResult};
use crate::http::{bearer_token, read_json};
use crate::ports::SalesApi;

const SALES_PATH: &str = "/products/sales";

/// Body of the record-sale call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordSaleBody<'a> {
    cart_items: &'a [CartItem],
    total_amount: f64,
}

/// Client for the sales endpoint family.
pub struct SalesClient {
    http: Client,
    config: ApiConfig,
    store: Arc<CredentialStore>,
}

impl SalesClient {
    /// Creates the client on a shared HTTP client.
    pub fn new(http: Client, config: ApiConfig, store: Arc<CredentialStore>) -> Self {
        SalesClient {
            http,
            config,
            store,
        }
    }

    /// Builds the client with its own HTTP client (standalone use).
    pub fn connect(config: ApiConfig, store: Arc<CredentialStore>) -> ApiResult<Self> {
        let http = config.http_client()?;
        Ok(Self::new(http, config, store))
    }
}

#[async_trait]
impl SalesApi for SalesClient {
    async fn record_sale(&self, cart_items: &[CartItem], total_amount: f64) -> ApiResult<Sale> {
        debug!(items = cart_items.len(), total_amount, "Recording sale");

        let token = bearer_token(&self.store)?;
        let response = self
            .http
            .post(self.config.endpoint(SALES_PATH))
            .bearer_auth(token)
            .json(&RecordSaleBody {
                cart_items,
                total_amount,
            })
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let sale: Sale = read_json(response).await?;
        info!(sale_id = %sale.id, total = sale.total_amount, "Sale recorded");
        Ok(sale)
    }

    async fn history(&self) -> ApiResult<Vec<Sale>> {
        debug!("Fetching sales history");

        let token = bearer_token(&self.store)?;
        let response = self
            .http
            .get(self.config.endpoint(SALES_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let sales: Vec<Sale> = read_json(response).await?;
        debug!(count = sales.len(), "Sales history fetched");
        Ok(sales)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sale_body_wire_format() {
        let items = vec![CartItem {
            product_id: None,
            name: "Rice".to_string(),
            quantity: 2,
            price: Some(250.0),
        }];
        let body = RecordSaleBody {
            cart_items: &items,
            total_amount: 500.0,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["totalAmount"], 500.0);
        assert_eq!(value["cartItems"][0]["name"], "Rice");
        assert_eq!(value["cartItems"][0]["quantity"], 2);
        // Absent product ids must not appear as null.
        assert!(value["cartItems"][0].get("productId").is_none());
    }
}
