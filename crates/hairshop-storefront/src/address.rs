use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StorefrontError;

/// Human-readable name for a delivery company code. Unknown codes are shown
/// as-is.
#[must_use]
pub fn delivery_company_name(code: &str) -> &str {
    match code {
        "cdek" => "СДЭК",
        "boxberry" => "Boxberry",
        "russian_post" => "Почта России",
        "dhl" => "DHL",
        "dpd" => "DPD",
        "yandex" => "Яндекс Доставка",
        other => other,
    }
}

/// Address form input before validation.
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub city: String,
    pub street: String,
    pub house: String,
    pub apartment: Option<String>,
    pub delivery_company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub city: String,
    pub street: String,
    pub house: String,
    /// Empty when the address has no apartment.
    pub apartment: String,
    pub delivery_company: String,
    pub created_at: DateTime<Utc>,
}

impl Address {
    /// Validates and trims a form submission.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidAddress`] when city, street or house
    /// is blank.
    pub fn from_new(new: NewAddress, now: DateTime<Utc>) -> Result<Self, StorefrontError> {
        let city = new.city.trim().to_string();
        let street = new.street.trim().to_string();
        let house = new.house.trim().to_string();

        for (label, value) in [("city", &city), ("street", &street), ("house", &house)] {
            if value.is_empty() {
                return Err(StorefrontError::InvalidAddress(format!("{label} is required")));
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            city,
            street,
            house,
            apartment: new
                .apartment
                .map(|a| a.trim().to_string())
                .unwrap_or_default(),
            delivery_company: new.delivery_company.trim().to_string(),
            created_at: now,
        })
    }

    /// One-line postal form, e.g. `"Москва, ул. Тверская, д. 1, кв. 5"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!("{}, ул. {}, д. {}", self.city, self.street, self.house);
        if !self.apartment.is_empty() {
            line.push_str(", кв. ");
            line.push_str(&self.apartment);
        }
        line
    }

    #[must_use]
    pub fn delivery_company_name(&self) -> &str {
        delivery_company_name(&self.delivery_company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewAddress {
        NewAddress {
            city: " Москва ".to_string(),
            street: "Тверская".to_string(),
            house: "1".to_string(),
            apartment: Some(" 5 ".to_string()),
            delivery_company: "cdek".to_string(),
        }
    }

    #[test]
    fn from_new_trims_fields() {
        let address = Address::from_new(form(), Utc::now()).unwrap();
        assert_eq!(address.city, "Москва");
        assert_eq!(address.apartment, "5");
    }

    #[test]
    fn from_new_requires_house() {
        let mut new = form();
        new.house = "  ".to_string();
        let err = Address::from_new(new, Utc::now()).unwrap_err();
        assert!(matches!(err, StorefrontError::InvalidAddress(ref m) if m.contains("house")));
    }

    #[test]
    fn summary_includes_apartment_when_present() {
        let address = Address::from_new(form(), Utc::now()).unwrap();
        assert_eq!(address.summary(), "Москва, ул. Тверская, д. 1, кв. 5");

        let mut new = form();
        new.apartment = None;
        let address = Address::from_new(new, Utc::now()).unwrap();
        assert_eq!(address.summary(), "Москва, ул. Тверская, д. 1");
    }

    #[test]
    fn delivery_company_names() {
        assert_eq!(delivery_company_name("cdek"), "СДЭК");
        assert_eq!(delivery_company_name("russian_post"), "Почта России");
        assert_eq!(delivery_company_name("pony_express"), "pony_express");
    }
}
