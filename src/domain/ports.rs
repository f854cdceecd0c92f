use super::order::Order;
use crate::error::Result;
use std::io::Write;

/// A way of paying for an order.
///
/// Implementations write a single confirmation line to `out` and must not
/// modify the order.
pub trait PaymentMethod: Send + Sync {
    fn pay(&self, order: &Order, out: &mut dyn Write) -> Result<()>;
}

/// A channel used to confirm an order to the customer.
pub trait NotificationMethod: Send + Sync {
    fn notify(&self, order: &Order, out: &mut dyn Write) -> Result<()>;
}

pub type PaymentMethodBox = Box<dyn PaymentMethod>;
pub type NotificationMethodBox = Box<dyn NotificationMethod>;
