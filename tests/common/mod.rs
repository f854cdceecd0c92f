#![allow(dead_code)]

use order_strategies::application::processor::OrderProcessor;
use order_strategies::domain::order::Order;
use order_strategies::domain::ports::{NotificationMethodBox, PaymentMethodBox};
use rust_decimal_macros::dec;

pub const CONTACT: &str = "cliente@exemplo.com";

pub fn sample_order(id: u32) -> Order {
    Order::new(id, dec!(150.75), CONTACT).unwrap()
}

/// Runs `order` through a processor built from the given strategies and
/// returns everything it wrote.
pub fn process_capture(
    payment: PaymentMethodBox,
    notification: NotificationMethodBox,
    order: &mut Order,
) -> String {
    let processor = OrderProcessor::new(payment, notification);
    let mut out = Vec::new();
    processor.process(order, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}
