use super::processor::OrderProcessor;
use crate::domain::order::Order;
use crate::error::Result;
use crate::infrastructure::{NotificationKind, PaymentKind};
use rust_decimal_macros::dec;
use std::io::Write;

pub const DEMO_CONTACT: &str = "cliente@exemplo.com";

const SCENARIOS: [(u32, PaymentKind, NotificationKind); 3] = [
    (123, PaymentKind::CreditCard, NotificationKind::Email),
    (456, PaymentKind::BankSlip, NotificationKind::Sms),
    (789, PaymentKind::InstantTransfer, NotificationKind::Email),
];

/// Processes the three sample orders, each with a different strategy pair,
/// separated by a dashed line. Returns the orders in their final state.
pub fn run_demo(out: &mut dyn Write) -> Result<Vec<Order>> {
    let template = Order::new(SCENARIOS[0].0, dec!(150.75), DEMO_CONTACT)?;
    let mut orders = Vec::with_capacity(SCENARIOS.len());

    for (i, (id, payment, notification)) in SCENARIOS.into_iter().enumerate() {
        if i > 0 {
            writeln!(out, "{}", "-".repeat(20))?;
        }
        let mut order = template.with_id(id);
        OrderProcessor::new(payment.build(), notification.build()).process(&mut order, out)?;
        orders.push(order);
    }

    Ok(orders)
}
