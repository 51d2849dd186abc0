//! Order Query Service - read path over the order store

use std::sync::Arc;

use thiserror::Error;

use crate::models::Order;
use crate::store::OrderStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderQueryError {
    #[error("user_id required")]
    MissingUserId,
}

pub struct OrderQueryService {
    store: Arc<OrderStore>,
}

impl OrderQueryService {
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }

    /// All orders for `user_id`, oldest first. Unknown users get an empty list.
    pub fn get_orders(&self, user_id: &str) -> Result<Vec<Order>, OrderQueryError> {
        if user_id.is_empty() {
            return Err(OrderQueryError::MissingUserId);
        }
        Ok(self.store.list_by_user(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_id_rejected() {
        let service = OrderQueryService::new(Arc::new(OrderStore::new()));
        assert_eq!(
            service.get_orders("").unwrap_err(),
            OrderQueryError::MissingUserId
        );
    }

    #[test]
    fn test_unknown_user_gets_empty_list() {
        let service = OrderQueryService::new(Arc::new(OrderStore::new()));
        assert!(service.get_orders("ghost").unwrap().is_empty());
    }
}
