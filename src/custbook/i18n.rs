//! UI string lookup for the supported languages.
//!
//! Keys are dotted (`customers.noResults`). A missing key, or a key with no
//! text for the active language, renders as the key itself so gaps show up
//! in the output instead of disappearing.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CustbookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fa,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }

    /// Persian is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Fa)
    }

    pub fn t(&self, key: &str) -> String {
        translate(*self, key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CustbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "fa" | "persian" | "farsi" => Ok(Language::Fa),
            other => Err(CustbookError::Validation(format!(
                "Unsupported language: {} (expected en or fa)",
                other
            ))),
        }
    }
}

static TRANSLATIONS: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        // Common
        ("common.save", ("Save", "ذخیره")),
        ("common.cancel", ("Cancel", "لغو")),
        ("common.delete", ("Delete", "حذف")),
        ("common.error", ("Error", "خطا")),
        ("common.success", ("Success", "موفقیت")),
        // Settings
        ("settings.title", ("Settings", "تنظیمات")),
        ("settings.language", ("Language", "زبان")),
        ("settings.english", ("English", "انگلیسی")),
        ("settings.persian", ("Persian", "فارسی")),
        ("settings.currency", ("Currency Settings", "تنظیمات ارز")),
        ("settings.defaultCurrency", ("Default Currency", "ارز پیش‌فرض")),
        ("settings.clearData", ("Clear All Data", "پاک کردن همه اطلاعات")),
        // Customers
        ("customers.title", ("Customers", "مشتریان")),
        ("customers.new", ("New Customer", "مشتری جدید")),
        ("customers.noResults", ("No customers found", "مشتری‌ای یافت نشد")),
        ("customers.addFirst", ("Add your first customer", "اولین مشتری خود را اضافه کنید")),
        ("customers.received", ("Received Items", "اقلام دریافتی")),
        ("customers.details", ("Customer Details", "جزئیات مشتری")),
        ("customers.noEntries", ("No entries", "موردی وجود ندارد")),
    ])
});

/// Looks up `key` for `lang`, falling back to the key itself.
pub fn translate(lang: Language, key: &str) -> String {
    TRANSLATIONS
        .get(key)
        .map(|(en, fa)| match lang {
            Language::En => *en,
            Language::Fa => *fa,
        })
        .filter(|s| !s.is_empty())
        .unwrap_or(key)
        .to_string()
}
