//! Order types.

use crate::cart::CartLine;
use crate::checkout::CheckoutForm;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed.
    Confirmed,
    /// Order picked up and completed.
    Completed,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// A placed order.
///
/// Orders are not persisted anywhere; this is the value handed to the
/// confirmation view after checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Client-generated order number.
    pub id: OrderId,
    /// Snapshot of the cart lines at placement.
    pub items: Vec<CartLine>,
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Flat pickup shipping fee.
    pub shipping_total: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
    /// Validated customer details.
    pub customer: CheckoutForm,
    /// Order status.
    pub status: OrderStatus,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    /// Assemble a pending order from checkout data.
    pub(crate) fn new(
        items: Vec<CartLine>,
        subtotal: Money,
        shipping_total: Money,
        grand_total: Money,
        customer: CheckoutForm,
    ) -> Self {
        Self {
            id: Self::generate_order_number(),
            items,
            subtotal,
            shipping_total,
            grand_total,
            customer,
            status: OrderStatus::Pending,
            placed_at: current_timestamp(),
        }
    }

    /// Generate a human-readable order number.
    ///
    /// `#` followed by the last six digits of the millisecond timestamp and
    /// an uppercase hex block. An atomic counter keeps numbers minted in the
    /// same millisecond distinct within the process.
    pub fn generate_order_number() -> OrderId {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

        let suffix = ((millis << 16) | (counter & 0xFFFF)) & 0xF_FFFF_FFFF;
        OrderId::new(format!("#{:06}{:09X}", millis % 1_000_000, suffix))
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
