use crate::domain::order::Order;
use crate::domain::ports::{NotificationMethodBox, PaymentMethodBox};
use crate::error::Result;
use std::io::Write;
use tracing::{info, warn};

/// Coordinates payment and notification for an order.
///
/// `OrderProcessor` depends only on the `PaymentMethod` and
/// `NotificationMethod` ports; the concrete strategies are injected at
/// construction and stay fixed for the processor's lifetime.
pub struct OrderProcessor {
    payment: PaymentMethodBox,
    notification: NotificationMethodBox,
}

impl OrderProcessor {
    /// Creates a new `OrderProcessor`.
    ///
    /// # Arguments
    ///
    /// * `payment` - The strategy used to pay each order.
    /// * `notification` - The strategy used to confirm each order.
    pub fn new(payment: PaymentMethodBox, notification: NotificationMethodBox) -> Self {
        Self {
            payment,
            notification,
        }
    }

    /// Pays for and confirms `order`, then marks it completed.
    ///
    /// Every step writes its line to `out`. If the payment or the
    /// notification fails the error is returned and the order stays
    /// pending. There is no guard against reprocessing: a completed order
    /// passed in again is paid and notified again.
    pub fn process(&self, order: &mut Order, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Processing order #{} in the amount of {}...",
            order.id(),
            order.amount()
        )?;

        if let Err(e) = self.payment.pay(order, out) {
            warn!(order_id = order.id(), error = %e, "payment failed");
            return Err(e);
        }

        if let Err(e) = self.notification.notify(order, out) {
            warn!(order_id = order.id(), error = %e, "notification failed");
            return Err(e);
        }

        order.complete();
        info!(order_id = order.id(), status = %order.status(), "order processed");
        writeln!(out, "Order completed!")?;
        Ok(())
    }
}
