//! cart-service client: `GET {cart_url}/cart/{user_id}`

use async_trait::async_trait;

use super::{CartClient, Dependency, DependencyError, endpoint, parse_base_url, send_json};
use crate::models::CartSnapshot;

pub struct HttpCartClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpCartClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url, Dependency::Cart)?,
        })
    }
}

#[async_trait]
impl CartClient for HttpCartClient {
    async fn fetch_cart(&self, user_id: &str) -> Result<CartSnapshot, DependencyError> {
        let url = endpoint(&self.base_url, &["cart", user_id]);
        tracing::debug!(user_id, url = %url, "fetching cart");
        send_json(Dependency::Cart, self.client.get(url)).await
    }
}
