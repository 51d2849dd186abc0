//! In-memory order ledger
//!
//! Append-only mapping `user_id -> [Order]`, insertion order = creation order.
//! Every read and write runs under one mutex held only for the map
//! operation itself; callers never hold it across an await point.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::Order;

#[derive(Debug, Default)]
pub struct OrderStore {
    orders_by_user: Mutex<HashMap<String, Vec<Order>>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order under its `user_id`.
    pub fn append(&self, order: Order) {
        let mut orders = self.lock();
        orders.entry(order.user_id.clone()).or_default().push(order);
    }

    /// Snapshot of a user's orders in creation order.
    ///
    /// Unknown users yield an empty vec. Later appends are not visible
    /// through the returned value.
    pub fn list_by_user(&self, user_id: &str) -> Vec<Order> {
        self.lock().get(user_id).cloned().unwrap_or_default()
    }

    /// Number of users with at least one order.
    pub fn user_count(&self) -> usize {
        self.lock().len()
    }

    /// Total number of orders across all users.
    pub fn order_count(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    // Appends are a single push, so a panic elsewhere can't leave a
    // half-written entry behind; a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Order>>> {
        self.orders_by_user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
