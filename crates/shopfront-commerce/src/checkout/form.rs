//! Checkout form and validation.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Pay on pickup.
    #[default]
    Cash,
    /// Pay by card on pickup.
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
        }
    }
}

/// Customer details collected at checkout.
///
/// The storefront ships to convenience-store pickup points, so the shipping
/// destination is a store location rather than a street address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutForm {
    /// Customer name.
    pub customer_name: String,
    /// Contact phone number, 9-10 digits (dashes and spaces allowed).
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Selected pickup store.
    pub store_location: String,
    /// Payment method.
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Validate all fields, returning the first failure.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.customer_name.trim().is_empty() {
            return Err(CommerceError::InvalidForm {
                field: "customer_name",
                message: "name is required",
            });
        }
        if self.phone.trim().is_empty() {
            return Err(CommerceError::InvalidForm {
                field: "phone",
                message: "phone number is required",
            });
        }
        if !is_valid_phone(&self.phone) {
            return Err(CommerceError::InvalidForm {
                field: "phone",
                message: "phone number must be 9-10 digits",
            });
        }
        if self.email.trim().is_empty() {
            return Err(CommerceError::InvalidForm {
                field: "email",
                message: "email is required",
            });
        }
        if !is_valid_email(&self.email) {
            return Err(CommerceError::InvalidForm {
                field: "email",
                message: "email format is invalid",
            });
        }
        if self.store_location.trim().is_empty() {
            return Err(CommerceError::InvalidForm {
                field: "store_location",
                message: "a pickup store must be selected",
            });
        }
        Ok(())
    }
}

/// Phone numbers are 9-10 digits after stripping dashes and spaces.
fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| *c != '-' && *c != ' ').collect();
    (9..=10).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Minimal `local@domain.tld` shape check.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
