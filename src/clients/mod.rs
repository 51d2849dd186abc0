//! Upstream Service Clients
//!
//! Thin wrappers over cart-service and payment-service. Every failure mode
//! (timeout, connection error, non-2xx status, malformed body) is normalized
//! into a [`DependencyError`] with a distinct cause; nothing from the
//! transport layer leaks past this boundary.

pub mod cart;
pub mod payment;

pub use cart::HttpCartClient;
pub use payment::HttpPaymentClient;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{CartSnapshot, PaymentRequest, PaymentResult};

/// Upstream service a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    Cart,
    Payment,
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::Cart => f.write_str("cart-service"),
            Dependency::Payment => f.write_str("payment-service"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DependencyError {
    #[error("{service} timed out: {message}")]
    Timeout { service: Dependency, message: String },

    #[error("{service} unreachable: {message}")]
    Transport { service: Dependency, message: String },

    #[error("{service} returned {status}: {body}")]
    Status {
        service: Dependency,
        status: u16,
        body: String,
    },

    #[error("{service} returned a malformed body: {message}")]
    Decode { service: Dependency, message: String },
}

impl DependencyError {
    pub fn service(&self) -> Dependency {
        match self {
            DependencyError::Timeout { service, .. }
            | DependencyError::Transport { service, .. }
            | DependencyError::Status { service, .. }
            | DependencyError::Decode { service, .. } => *service,
        }
    }

    /// Short machine-friendly cause, used as a log field.
    pub fn cause(&self) -> &'static str {
        match self {
            DependencyError::Timeout { .. } => "timeout",
            DependencyError::Transport { .. } => "transport",
            DependencyError::Status { .. } => "status",
            DependencyError::Decode { .. } => "decode",
        }
    }

    fn from_reqwest(service: Dependency, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DependencyError::Timeout {
                service,
                message: err.to_string(),
            }
        } else if err.is_decode() {
            DependencyError::Decode {
                service,
                message: err.to_string(),
            }
        } else {
            DependencyError::Transport {
                service,
                message: err.to_string(),
            }
        }
    }
}

/// Fetches a user's cart
#[async_trait]
pub trait CartClient: Send + Sync {
    async fn fetch_cart(&self, user_id: &str) -> Result<CartSnapshot, DependencyError>;
}

/// Submits a payment charge
#[async_trait]
pub trait PaymentClient: Send + Sync {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentResult, DependencyError>;
}

/// Shared HTTP client with a bounded per-request timeout.
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Append path segments to a base URL, percent-encoding each one.
fn endpoint(base: &reqwest::Url, segments: &[&str]) -> reqwest::Url {
    let mut url = base.clone();
    // base URLs are checked for `cannot_be_a_base` at construction
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn parse_base_url(raw: &str, service: Dependency) -> anyhow::Result<reqwest::Url> {
    let url = reqwest::Url::parse(raw)
        .map_err(|e| anyhow::anyhow!("invalid {} url {:?}: {}", service, raw, e))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("invalid {} url {:?}: not a base url", service, raw);
    }
    Ok(url)
}

/// Send a request and decode a 2xx JSON body.
async fn send_json<T: DeserializeOwned>(
    service: Dependency,
    request: reqwest::RequestBuilder,
) -> Result<T, DependencyError> {
    let response = request
        .send()
        .await
        .map_err(|e| DependencyError::from_reqwest(service, e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| DependencyError::from_reqwest(service, e))?;

    if !status.is_success() {
        tracing::warn!(
            service = %service,
            status = status.as_u16(),
            body = %body,
            "upstream returned non-success status"
        );
        return Err(DependencyError::Status {
            service,
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(service = %service, body = %body, "upstream body did not decode: {}", e);
        DependencyError::Decode {
            service,
            message: e.to_string(),
        }
    })
}

/// Mock clients for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::models::{CartLine, PaymentStatus};

    pub struct MockCartClient {
        items: Mutex<Vec<CartLine>>,
        fail_with_status: Mutex<Option<u16>>,
        calls: AtomicUsize,
    }

    impl MockCartClient {
        pub fn new(items: Vec<CartLine>) -> Self {
            Self {
                items: Mutex::new(items),
                fail_with_status: Mutex::new(None),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_line(product_id: &str, quantity: u32) -> Self {
            Self::new(vec![CartLine {
                product_id: product_id.to_string(),
                quantity,
            }])
        }

        pub fn set_fail_with_status(&self, status: Option<u16>) {
            *self.fail_with_status.lock().unwrap() = status;
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CartClient for MockCartClient {
        async fn fetch_cart(&self, user_id: &str) -> Result<CartSnapshot, DependencyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = *self.fail_with_status.lock().unwrap() {
                return Err(DependencyError::Status {
                    service: Dependency::Cart,
                    status,
                    body: "mock cart failure".to_string(),
                });
            }
            Ok(CartSnapshot {
                user_id: user_id.to_string(),
                items: self.items.lock().unwrap().clone(),
            })
        }
    }

    pub struct MockPaymentClient {
        status: Mutex<PaymentStatus>,
        fail_transport: Mutex<bool>,
        requests: Mutex<Vec<PaymentRequest>>,
        next_id: AtomicUsize,
    }

    impl MockPaymentClient {
        pub fn new() -> Self {
            Self {
                status: Mutex::new(PaymentStatus::Success),
                fail_transport: Mutex::new(false),
                requests: Mutex::new(Vec::new()),
                next_id: AtomicUsize::new(1),
            }
        }

        pub fn set_status(&self, status: PaymentStatus) {
            *self.status.lock().unwrap() = status;
        }

        pub fn set_fail_transport(&self, fail: bool) {
            *self.fail_transport.lock().unwrap() = fail;
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn requests(&self) -> Vec<PaymentRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PaymentClient for MockPaymentClient {
        async fn charge(
            &self,
            request: &PaymentRequest,
        ) -> Result<PaymentResult, DependencyError> {
            self.requests.lock().unwrap().push(request.clone());
            if *self.fail_transport.lock().unwrap() {
                return Err(DependencyError::Transport {
                    service: Dependency::Payment,
                    message: "connection refused".to_string(),
                });
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            Ok(PaymentResult {
                payment_id: format!("p{}", id),
                status: self.status.lock().unwrap().clone(),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_cart_counts_calls() {
            let cart = MockCartClient::with_line("car", 2);
            let snapshot = cart.fetch_cart("u1").await.unwrap();
            assert_eq!(snapshot.user_id, "u1");
            assert_eq!(snapshot.total_quantity(), 2);
            assert_eq!(cart.calls(), 1);

            cart.set_fail_with_status(Some(500));
            let err = cart.fetch_cart("u1").await.unwrap_err();
            assert_eq!(err.cause(), "status");
            assert_eq!(cart.calls(), 2);
        }
    }
}
