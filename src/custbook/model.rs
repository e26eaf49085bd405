//! # Domain Model
//!
//! [`Customer`] is the unit of storage: identity fields plus two ordered lists
//! of [`Entry`] values, one per [`Section`]. Entries keep insertion order
//! everywhere (storage, listing, export); nothing in the crate sorts them.
//!
//! ## Input Normalization
//!
//! Customer data arrives from forms and command lines in whatever shape the
//! user typed it. Before it is stored:
//!
//! - The name is trimmed and must be non-empty.
//! - Optional fields (phone, email, address) are trimmed; blank becomes `None`.
//! - An email, when present, must look like `local@domain.tld`.
//!
//! [`NewCustomer::validate`] and [`CustomerPatch::apply`] are the only two
//! paths that write identity fields, so a stored [`Customer`] always satisfies
//! these rules. The layout engine relies on a non-empty name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{CustbookError, Result};

/// Which list of a customer an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Received,
    Details,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Received => write!(f, "received"),
            Section::Details => write!(f, "details"),
        }
    }
}

impl FromStr for Section {
    type Err = CustbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "received" | "r" | "note" => Ok(Section::Received),
            "details" | "detail" | "d" => Ok(Section::Details),
            other => Err(CustbookError::Validation(format!(
                "Unknown section: {} (expected received or details)",
                other
            ))),
        }
    }
}

/// A titled, dated, optionally currency-tagged note attached to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Entry {
    pub fn new(title: String, content: String, currency: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            date: Utc::now(),
            currency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub received: Vec<Entry>,
    #[serde(default)]
    pub details: Vec<Entry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            phone: None,
            email: None,
            address: None,
            received: Vec::new(),
            details: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn entries(&self, section: Section) -> &[Entry] {
        match section {
            Section::Received => &self.received,
            Section::Details => &self.details,
        }
    }

    pub fn entries_mut(&mut self, section: Section) -> &mut Vec<Entry> {
        match section {
            Section::Received => &mut self.received,
            Section::Details => &mut self.details,
        }
    }

    /// Identity fields that are set, in display order, with their labels.
    pub fn contact_lines(&self) -> Vec<(&'static str, &str)> {
        [
            ("Phone", self.phone.as_deref()),
            ("Email", self.email.as_deref()),
            ("Address", self.address.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| match value {
            Some(v) if !v.trim().is_empty() => Some((label, v)),
            _ => None,
        })
        .collect()
    }
}

/// Form input for a new customer.
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Normalizes the input and builds a fresh [`Customer`].
    pub fn validate(self) -> Result<Customer> {
        let name = normalize_name(&self.name)?;
        let email = normalize_optional(self.email);
        if let Some(email) = &email {
            validate_email(email)?;
        }

        let mut customer = Customer::new(name);
        customer.phone = normalize_optional(self.phone);
        customer.email = email;
        customer.address = normalize_optional(self.address);
        Ok(customer)
    }
}

/// A partial update of identity fields. `Some("")` clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }

    /// Applies the patch in place. Nothing is modified if validation fails.
    pub fn apply(&self, customer: &mut Customer) -> Result<()> {
        let name = match &self.name {
            Some(n) => Some(normalize_name(n)?),
            None => None,
        };
        let email = self.email.clone().map(|e| normalize_optional(Some(e)));
        if let Some(Some(email)) = &email {
            validate_email(email)?;
        }

        if let Some(name) = name {
            customer.name = name;
        }
        if let Some(phone) = &self.phone {
            customer.phone = normalize_optional(Some(phone.clone()));
        }
        if let Some(email) = email {
            customer.email = email;
        }
        if let Some(address) = &self.address {
            customer.address = normalize_optional(Some(address.clone()));
        }
        customer.updated_at = Utc::now();
        Ok(())
    }
}

fn normalize_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CustbookError::Validation(
            "Customer name is required".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accepts `something@something.something` with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    email.char_indices().any(|(at, c)| {
        if c != '@' || at == 0 {
            return false;
        }
        let domain = &email[at + 1..];
        domain
            .char_indices()
            .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
    })
}

fn validate_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CustbookError::Validation(
            "Please enter a valid email address".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_and_drops_blank_fields() {
        let customer = NewCustomer::new("  Acme Co  ")
            .with_phone("   ")
            .with_email(" sales@acme.io ")
            .validate()
            .unwrap();

        assert_eq!(customer.name, "Acme Co");
        assert_eq!(customer.phone, None);
        assert_eq!(customer.email.as_deref(), Some("sales@acme.io"));
        assert!(customer.received.is_empty());
        assert!(customer.details.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let err = NewCustomer::new("   ").validate().unwrap_err();
        assert!(matches!(err, CustbookError::Validation(_)));
        assert_eq!(err.to_string(), "Customer name is required");
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let err = NewCustomer::new("Acme")
            .with_email("not-an-email")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("x@@y.z"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@bc"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn test_patch_clears_optional_field() {
        let mut customer = NewCustomer::new("Acme")
            .with_phone("555-0100")
            .validate()
            .unwrap();

        let patch = CustomerPatch {
            phone: Some(String::new()),
            ..CustomerPatch::default()
        };
        patch.apply(&mut customer).unwrap();
        assert_eq!(customer.phone, None);
        assert_eq!(customer.name, "Acme");
    }

    #[test]
    fn test_patch_is_atomic_on_validation_failure() {
        let mut customer = NewCustomer::new("Acme").validate().unwrap();
        let patch = CustomerPatch {
            name: Some("Renamed".into()),
            email: Some("broken".into()),
            ..CustomerPatch::default()
        };

        assert!(patch.apply(&mut customer).is_err());
        assert_eq!(customer.name, "Acme");
        assert_eq!(customer.email, None);
    }

    #[test]
    fn test_contact_lines_fixed_order() {
        let customer = NewCustomer::new("Acme")
            .with_address("1 Main St")
            .with_phone("555")
            .validate()
            .unwrap();

        assert_eq!(
            customer.contact_lines(),
            vec![("Phone", "555"), ("Address", "1 Main St")]
        );
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("received".parse::<Section>().unwrap(), Section::Received);
        assert_eq!("Details".parse::<Section>().unwrap(), Section::Details);
        assert!("other".parse::<Section>().is_err());
    }

    #[test]
    fn test_customer_json_shape_omits_missing_fields() {
        let customer = Customer::new("Acme".into());
        let json = serde_json::to_value(&customer).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["received"], serde_json::json!([]));
    }
}
