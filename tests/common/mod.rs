//! Stub cart-service / payment-service for integration tests.
//!
//! One axum server on 127.0.0.1:0 answers both `GET /cart/{user_id}` and
//! `POST /pay`, so it can stand in for both upstreams.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use order_service::config::UpstreamConfig;

#[derive(Clone)]
pub enum CartBehavior {
    /// 200 with `{"user_id", "items": [...]}`
    Items(Vec<(&'static str, u32)>),
    /// Non-2xx with a text body
    Status(u16),
    /// 200 with a body that is not a cart
    Malformed,
    /// Sleep before answering with an empty cart
    Delay(Duration),
}

#[derive(Clone)]
pub enum PaymentBehavior {
    /// 200 with `{"payment_id": "p<n>", "status": <status>}`
    Reply(&'static str),
    /// Non-2xx with a text body
    Status(u16),
}

pub struct StubState {
    cart: CartBehavior,
    payment: PaymentBehavior,
    pub cart_calls: AtomicUsize,
    pub payment_calls: AtomicUsize,
    pub payment_bodies: Mutex<Vec<Value>>,
}

pub struct StubUpstream {
    pub url: String,
    pub state: Arc<StubState>,
}

impl StubUpstream {
    pub async fn spawn(cart: CartBehavior, payment: PaymentBehavior) -> Self {
        let state = Arc::new(StubState {
            cart,
            payment,
            cart_calls: AtomicUsize::new(0),
            payment_calls: AtomicUsize::new(0),
            payment_bodies: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/cart/{user_id}", get(cart_handler))
            .route("/pay", post(pay_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            state,
        }
    }

    /// Upstream config pointing both services at this stub.
    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            cart_url: self.url.clone(),
            payment_url: self.url.clone(),
            timeout_ms: 500,
            ..UpstreamConfig::default()
        }
    }

    pub fn cart_calls(&self) -> usize {
        self.state.cart_calls.load(Ordering::SeqCst)
    }

    pub fn payment_calls(&self) -> usize {
        self.state.payment_calls.load(Ordering::SeqCst)
    }

    pub fn payment_bodies(&self) -> Vec<Value> {
        self.state.payment_bodies.lock().unwrap().clone()
    }
}

/// An address nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn cart_handler(State(state): State<Arc<StubState>>, Path(user_id): Path<String>) -> Response {
    state.cart_calls.fetch_add(1, Ordering::SeqCst);
    match &state.cart {
        CartBehavior::Items(items) => {
            let items: Vec<Value> = items
                .iter()
                .map(|(product_id, quantity)| json!({"product_id": product_id, "quantity": quantity}))
                .collect();
            Json(json!({"user_id": user_id, "items": items})).into_response()
        }
        CartBehavior::Status(code) => (
            StatusCode::from_u16(*code).unwrap(),
            "cart exploded",
        )
            .into_response(),
        CartBehavior::Malformed => "<html>definitely not a cart</html>".into_response(),
        CartBehavior::Delay(delay) => {
            tokio::time::sleep(*delay).await;
            Json(json!({"user_id": user_id, "items": []})).into_response()
        }
    }
}

async fn pay_handler(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    let n = state.payment_calls.fetch_add(1, Ordering::SeqCst) + 1;
    state.payment_bodies.lock().unwrap().push(body);
    match &state.payment {
        PaymentBehavior::Reply(status) => {
            Json(json!({"payment_id": format!("p{}", n), "status": status})).into_response()
        }
        PaymentBehavior::Status(code) => (
            StatusCode::from_u16(*code).unwrap(),
            "payment exploded",
        )
            .into_response(),
    }
}
