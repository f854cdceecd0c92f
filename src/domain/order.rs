use crate::error::{OrderError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount.
///
/// Wraps `rust_decimal::Decimal` so an order can never be built with a
/// negative value. Displays as a dollar-prefixed value with two decimals,
/// e.g. `$150.75`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(OrderError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = OrderError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${:.2}", cents)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("pending"),
            OrderStatus::Completed => f.write_str("completed"),
        }
    }
}

/// An order awaiting payment and notification.
///
/// The amount is fixed at creation. The status starts as `Pending` and is
/// only moved to `Completed` by `OrderProcessor::process`.
#[derive(Debug, PartialEq, Clone)]
pub struct Order {
    id: u32,
    amount: Amount,
    contact: String,
    status: OrderStatus,
}

impl Order {
    pub fn new(id: u32, amount: Decimal, contact: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id,
            amount: Amount::new(amount)?,
            contact: contact.into(),
            status: OrderStatus::Pending,
        })
    }

    /// Returns a pending copy of this order under a different id.
    pub fn with_id(&self, id: u32) -> Self {
        Self {
            id,
            status: OrderStatus::Pending,
            ..self.clone()
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Address used by every notification channel.
    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub(crate) fn complete(&mut self) {
        self.status = OrderStatus::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_is_pending() {
        let order = Order::new(123, dec!(150.75), "cliente@exemplo.com").unwrap();
        assert_eq!(order.id(), 123);
        assert_eq!(order.amount().value(), dec!(150.75));
        assert_eq!(order.contact(), "cliente@exemplo.com");
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Order::new(1, dec!(-0.01), "a@b.com");
        assert!(matches!(result, Err(OrderError::ValidationError(_))));
    }

    #[test]
    fn test_zero_amount_accepted() {
        let order = Order::new(1, Decimal::ZERO, "a@b.com").unwrap();
        assert_eq!(order.amount(), Amount::ZERO);
    }

    #[test]
    fn test_amount_display_two_decimals() {
        assert_eq!(Amount::new(dec!(150.75)).unwrap().to_string(), "$150.75");
        assert_eq!(Amount::new(dec!(10)).unwrap().to_string(), "$10.00");
        assert_eq!(Amount::new(dec!(0.5)).unwrap().to_string(), "$0.50");
        assert_eq!(Amount::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_amount_display_rounds_midpoint_away_from_zero() {
        assert_eq!(Amount::new(dec!(2.345)).unwrap().to_string(), "$2.35");
        assert_eq!(Amount::new(dec!(2.344)).unwrap().to_string(), "$2.34");
    }

    #[test]
    fn test_with_id_resets_status() {
        let mut order = Order::new(123, dec!(150.75), "cliente@exemplo.com").unwrap();
        order.complete();

        let copy = order.with_id(456);
        assert_eq!(copy.id(), 456);
        assert_eq!(copy.amount(), order.amount());
        assert_eq!(copy.contact(), order.contact());
        assert_eq!(copy.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
        assert_eq!(OrderStatus::Completed.to_string(), "completed");
    }
}
