//! Supported currencies and the rules for the active/default currency set.
//!
//! The settings keep two pieces of state: the list of active currencies
//! (what entries may be tagged with) and the default currency (what a new
//! entry gets when none is given). The rules below keep them consistent:
//!
//! - At least one currency stays active; the last one cannot be toggled off.
//! - The default is always active. Toggling the default off moves the default
//!   to the first remaining active currency.

use crate::config::CustbookConfig;
use crate::error::{CustbookError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const SUPPORTED: &[CurrencyInfo] = &[
    CurrencyInfo {
        code: "AFN",
        name: "Afghanistan Afghani",
        symbol: "؋",
    },
    CurrencyInfo {
        code: "IRR",
        name: "Iranian Rial",
        symbol: "﷼",
    },
    CurrencyInfo {
        code: "USD",
        name: "US Dollar",
        symbol: "$",
    },
    CurrencyInfo {
        code: "AED",
        name: "UAE Dirham",
        symbol: "د.إ",
    },
    CurrencyInfo {
        code: "EUR",
        name: "Euro",
        symbol: "€",
    },
    CurrencyInfo {
        code: "USDT",
        name: "Tether",
        symbol: "₮",
    },
];

pub const DEFAULT_CURRENCY: &str = "USD";

pub fn default_active() -> Vec<String> {
    SUPPORTED.iter().map(|c| c.code.to_string()).collect()
}

pub fn lookup(code: &str) -> Option<&'static CurrencyInfo> {
    SUPPORTED.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Display symbol for a code; unknown codes render as themselves.
pub fn symbol(code: &str) -> String {
    lookup(code)
        .map(|c| c.symbol.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Canonical (upper-case) code for a supported currency.
pub fn normalize_code(code: &str) -> Result<String> {
    lookup(code)
        .map(|c| c.code.to_string())
        .ok_or_else(|| CustbookError::Validation(format!("Unsupported currency: {}", code)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Activated(String),
    Deactivated {
        code: String,
        new_default: Option<String>,
    },
    Refused(String),
}

pub fn toggle(config: &mut CustbookConfig, code: &str) -> Result<ToggleOutcome> {
    let code = normalize_code(code)?;

    if !config.active_currencies.contains(&code) {
        config.active_currencies.push(code.clone());
        return Ok(ToggleOutcome::Activated(code));
    }

    if config.active_currencies.len() == 1 {
        return Ok(ToggleOutcome::Refused(format!(
            "{} is the only active currency and cannot be disabled",
            code
        )));
    }

    config.active_currencies.retain(|c| c != &code);
    let new_default = if config.default_currency == code {
        let replacement = config
            .active_currencies
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        config.default_currency = replacement.clone();
        Some(replacement)
    } else {
        None
    };

    Ok(ToggleOutcome::Deactivated { code, new_default })
}

pub fn set_default(config: &mut CustbookConfig, code: &str) -> Result<String> {
    let code = normalize_code(code)?;
    if !config.active_currencies.contains(&code) {
        return Err(CustbookError::Validation(format!(
            "{} is not an active currency",
            code
        )));
    }
    config.default_currency = code.clone();
    Ok(code)
}

/// Replaces the active set. The default follows the first entry if it was dropped.
pub fn set_active(config: &mut CustbookConfig, codes: &[String]) -> Result<()> {
    let mut normalized: Vec<String> = Vec::with_capacity(codes.len());
    for code in codes {
        let code = normalize_code(code)?;
        if !normalized.contains(&code) {
            normalized.push(code);
        }
    }
    if normalized.is_empty() {
        return Err(CustbookError::Validation(
            "At least one currency must stay active".to_string(),
        ));
    }
    if !normalized.contains(&config.default_currency) {
        config.default_currency = normalized[0].clone();
    }
    config.active_currencies = normalized;
    Ok(())
}

/// Currency for a new entry: the explicit one if given (must be active), else the default.
pub fn resolve_for_entry(config: &CustbookConfig, requested: Option<&str>) -> Result<String> {
    match requested {
        Some(code) => {
            let code = normalize_code(code)?;
            if !config.active_currencies.contains(&code) {
                return Err(CustbookError::Validation(format!(
                    "{} is not an active currency",
                    code
                )));
            }
            Ok(code)
        }
        None => Ok(config.default_currency.clone()),
    }
}
