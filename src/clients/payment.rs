//! payment-service client: `POST {payment_url}/pay`

use async_trait::async_trait;

use super::{Dependency, DependencyError, PaymentClient, endpoint, parse_base_url, send_json};
use crate::models::{PaymentRequest, PaymentResult};

pub struct HttpPaymentClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpPaymentClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url, Dependency::Payment)?,
        })
    }
}

#[async_trait]
impl PaymentClient for HttpPaymentClient {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentResult, DependencyError> {
        let url = endpoint(&self.base_url, &["pay"]);
        tracing::debug!(user_id = %request.user_id, amount = %request.amount, "submitting payment");
        send_json(Dependency::Payment, self.client.post(url).json(request)).await
    }
}
