use crate::domain::order::Order;
use crate::domain::ports::PaymentMethod;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// Simulated credit card charge.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCard;

/// Simulated bank slip ("boleto") issued for the order amount.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankSlip;

/// Simulated instant transfer ("pix").
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantTransfer;

impl PaymentMethod for CreditCard {
    fn pay(&self, order: &Order, out: &mut dyn Write) -> Result<()> {
        debug!(order_id = order.id(), amount = %order.amount(), method = "credit-card", "paying order");
        writeln!(out, "Paying {} by credit card...", order.amount())?;
        Ok(())
    }
}

impl PaymentMethod for BankSlip {
    fn pay(&self, order: &Order, out: &mut dyn Write) -> Result<()> {
        debug!(order_id = order.id(), amount = %order.amount(), method = "bank-slip", "paying order");
        writeln!(
            out,
            "Generating a bank slip for the amount of {}...",
            order.amount()
        )?;
        Ok(())
    }
}

impl PaymentMethod for InstantTransfer {
    fn pay(&self, order: &Order, out: &mut dyn Write) -> Result<()> {
        debug!(order_id = order.id(), amount = %order.amount(), method = "instant-transfer", "paying order");
        writeln!(out, "Paying {} via instant transfer...", order.amount())?;
        Ok(())
    }
}
