use crate::domain::order::Order;
use crate::domain::ports::NotificationMethod;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct Email;

/// SMS confirmation. Addresses the same contact field as `Email`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sms;

impl NotificationMethod for Email {
    fn notify(&self, order: &Order, out: &mut dyn Write) -> Result<()> {
        debug!(order_id = order.id(), channel = "email", contact = order.contact(), "notifying customer");
        writeln!(out, "Sending confirmation email to {}...", order.contact())?;
        Ok(())
    }
}

impl NotificationMethod for Sms {
    fn notify(&self, order: &Order, out: &mut dyn Write) -> Result<()> {
        debug!(order_id = order.id(), channel = "sms", contact = order.contact(), "notifying customer");
        writeln!(out, "Sending confirmation SMS to {}...", order.contact())?;
        Ok(())
    }
}
