//! Concrete payment and notification strategies.
//!
//! `PaymentKind` and `NotificationKind` name the built-in strategies so they
//! can be picked at runtime (from the command line or a config value) and
//! turned into boxed ports for `OrderProcessor`.

pub mod notification;
pub mod payment;

use crate::domain::ports::{NotificationMethodBox, PaymentMethodBox};
use clap::ValueEnum;
use notification::{Email, Sms};
use payment::{BankSlip, CreditCard, InstantTransfer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentKind {
    #[default]
    CreditCard,
    BankSlip,
    InstantTransfer,
}

impl PaymentKind {
    pub fn build(self) -> PaymentMethodBox {
        match self {
            PaymentKind::CreditCard => Box::new(CreditCard),
            PaymentKind::BankSlip => Box::new(BankSlip),
            PaymentKind::InstantTransfer => Box::new(InstantTransfer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    #[default]
    Email,
    Sms,
}

impl NotificationKind {
    pub fn build(self) -> NotificationMethodBox {
        match self {
            NotificationKind::Email => Box::new(Email),
            NotificationKind::Sms => Box::new(Sms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Order;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_kind_builds_matching_strategy() {
        let order = Order::new(1, dec!(3), "a@b.com").unwrap();
        let cases = [
            (PaymentKind::CreditCard, "by credit card"),
            (PaymentKind::BankSlip, "bank slip"),
            (PaymentKind::InstantTransfer, "via instant transfer"),
        ];

        for (kind, expected) in cases {
            let mut out = Vec::new();
            kind.build().pay(&order, &mut out).unwrap();
            assert!(String::from_utf8(out).unwrap().contains(expected));
        }
    }

    #[test]
    fn test_notification_kind_builds_matching_strategy() {
        let order = Order::new(1, dec!(3), "a@b.com").unwrap();
        let cases = [
            (NotificationKind::Email, "email"),
            (NotificationKind::Sms, "SMS"),
        ];

        for (kind, expected) in cases {
            let mut out = Vec::new();
            kind.build().notify(&order, &mut out).unwrap();
            assert!(String::from_utf8(out).unwrap().contains(expected));
        }
    }

    #[test]
    fn test_kinds_parse_from_cli_names() {
        assert_eq!(
            PaymentKind::from_str("instant-transfer", false).unwrap(),
            PaymentKind::InstantTransfer
        );
        assert_eq!(
            NotificationKind::from_str("sms", false).unwrap(),
            NotificationKind::Sms
        );
    }
}
