use crate::commands::{CmdMessage, CmdResult, EntryDraft};
use crate::config::CustbookConfig;
use crate::currency;
use crate::error::{CustbookError, Result};
use crate::index::CustomerSelector;
use crate::model::{Entry, Section};
use crate::store::DataStore;
use chrono::Utc;
use tracing::info;

use super::helpers::resolve_single;

/// Appends an entry to the end of `section`. Entries without a currency get the
/// configured default; an explicit currency must be active.
pub fn add<S: DataStore>(
    store: &mut S,
    config: &CustbookConfig,
    selectors: &[CustomerSelector],
    section: Section,
    draft: EntryDraft,
) -> Result<CmdResult> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(CustbookError::Validation(
            "Entry title is required".to_string(),
        ));
    }
    let currency = currency::resolve_for_entry(config, draft.currency.as_deref())?;

    let target = resolve_single(store, selectors)?;
    let mut customer = target.customer;
    customer
        .entries_mut(section)
        .push(Entry::new(title.clone(), draft.content, Some(currency)));
    customer.updated_at = Utc::now();
    store.save_customer(&customer)?;

    let position = customer.entries(section).len();
    info!(id = %customer.id, %section, position, "added entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} entry {} to {}: {}",
        section, position, customer.name, title
    )));
    result.affected_customers.push(customer);
    Ok(result)
}

/// Removes the entry at 1-based `position` within `section`.
pub fn remove<S: DataStore>(
    store: &mut S,
    selectors: &[CustomerSelector],
    section: Section,
    position: usize,
) -> Result<CmdResult> {
    let target = resolve_single(store, selectors)?;
    let mut customer = target.customer;

    let entries = customer.entries_mut(section);
    if position == 0 || position > entries.len() {
        return Err(CustbookError::Api(format!(
            "{} has no {} entry {}",
            customer.name, section, position
        )));
    }
    let removed = entries.remove(position - 1);
    customer.updated_at = Utc::now();
    store.save_customer(&customer)?;
    info!(id = %customer.id, %section, position, "removed entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} entry from {}: {}",
        section, customer.name, removed.title
    )));
    result.affected_customers.push(customer);
    Ok(result)
}
