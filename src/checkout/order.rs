//! Order entity handled by checkout.

use crate::core::Record;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment status of an order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Open,
    Paid,
}

impl OrderStatus {
    pub fn name(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Paid => "paid",
        }
    }
}

/// A customer order awaiting checkout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub total_price: f64,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    /// Create an open order with a fresh id.
    pub fn new(customer_name: impl Into<String>, total_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            total_price,
            status: OrderStatus::Open,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }
}

impl Record for Order {
    fn subject(&self) -> &str {
        &self.customer_name
    }
}
