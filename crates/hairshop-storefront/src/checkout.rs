//! Order confirmation and purchase history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::address::Address;
use crate::cart::CartItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    Pickup,
    Delivery,
}

impl DeliveryMethod {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DeliveryMethod::Pickup => "Самовывоз",
            DeliveryMethod::Delivery => "Доставка",
        }
    }
}

impl std::str::FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(DeliveryMethod::Pickup),
            "delivery" => Ok(DeliveryMethod::Delivery),
            other => Err(format!("unknown delivery method \"{other}\"")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Online,
    Sbp,
}

impl PaymentMethod {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Наличными",
            PaymentMethod::Card => "Перевод на карту",
            PaymentMethod::Online => "Онлайн оплата",
            PaymentMethod::Sbp => "СБП",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "online" => Ok(PaymentMethod::Online),
            "sbp" => Ok(PaymentMethod::Sbp),
            other => Err(format!("unknown payment method \"{other}\"")),
        }
    }
}

/// A confirmed order, kept in the user's purchase history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub delivery: DeliveryMethod,
    pub payment: PaymentMethod,
    /// Present only for [`DeliveryMethod::Delivery`].
    pub address: Option<Address>,
}

/// Formats a ruble amount with space-grouped thousands, e.g. `"12 500 ₽"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_rub(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let cents = ((rounded - rounded.trunc()).abs() * 100.0).round() as i64;

    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if whole < 0 { "-" } else { "" };
    if cents == 0 {
        format!("{sign}{grouped} ₽")
    } else {
        format!("{sign}{grouped},{cents:02} ₽")
    }
}

/// Renders the confirmation text shown to the customer after checkout.
#[must_use]
pub fn order_message(purchase: &Purchase, customer: &str) -> String {
    let lines: Vec<String> = purchase
        .items
        .iter()
        .map(|item| {
            format!(
                "• {} - {} × {}",
                item.product.name,
                item.quantity,
                format_rub(item.product.price)
            )
        })
        .collect();

    let destination = match &purchase.address {
        Some(address) => format!("Адрес доставки: {}", address.summary()),
        None => "Самовывоз из магазина".to_string(),
    };

    format!(
        "Заказ подтвержден!\n\n\
         Покупатель: {customer}\n\
         Способ получения: {delivery}\n\
         {destination}\n\
         Способ оплаты: {payment}\n\n\
         Товары:\n{items}\n\n\
         Итого: {total}\n\n\
         Время: {time}",
        delivery = purchase.delivery.label(),
        payment = purchase.payment.label(),
        items = lines.join("\n"),
        total = format_rub(purchase.total),
        time = purchase.date.format("%d.%m.%Y %H:%M"),
    )
}
