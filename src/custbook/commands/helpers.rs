use crate::error::{CustbookError, Result};
use crate::index::{index_customers, CustomerSelector, DisplayCustomer};
use crate::store::DataStore;

pub fn indexed_customers<S: DataStore>(store: &S) -> Result<Vec<DisplayCustomer>> {
    let customers = store.list_customers()?;
    Ok(index_customers(customers))
}

/// Resolves selectors to customers, in selector order.
///
/// A name query matches case-insensitively. An exact name match wins; otherwise
/// the query must be a substring of exactly one customer name.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    selectors: &[CustomerSelector],
) -> Result<Vec<DisplayCustomer>> {
    let indexed = indexed_customers(store)?;

    selectors
        .iter()
        .map(|selector| match selector {
            CustomerSelector::Index(idx) => indexed
                .iter()
                .find(|dc| &dc.index == idx)
                .cloned()
                .ok_or_else(|| CustbookError::Api(format!("Index {} not found", idx))),
            CustomerSelector::Name(term) => resolve_name(&indexed, term),
        })
        .collect()
}

fn resolve_name(indexed: &[DisplayCustomer], term: &str) -> Result<DisplayCustomer> {
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        return Err(CustbookError::Api("Empty customer name".to_string()));
    }

    let exact: Vec<&DisplayCustomer> = indexed
        .iter()
        .filter(|dc| dc.customer.name.to_lowercase() == term_lower)
        .collect();
    if let [only] = exact.as_slice() {
        return Ok((*only).clone());
    }

    let matches: Vec<&DisplayCustomer> = if exact.is_empty() {
        indexed
            .iter()
            .filter(|dc| dc.customer.name.to_lowercase().contains(&term_lower))
            .collect()
    } else {
        exact
    };

    match matches.as_slice() {
        [] => Err(CustbookError::Api(format!(
            "No customer found matching \"{}\"",
            term
        ))),
        [only] => Ok((*only).clone()),
        many => {
            let names = many
                .iter()
                .map(|dc| format!("{} {}", dc.index, dc.customer.name))
                .collect::<Vec<_>>()
                .join(", ");
            Err(CustbookError::Api(format!(
                "\"{}\" matches {} customers ({}). Use an index instead.",
                term,
                many.len(),
                names
            )))
        }
    }
}

/// Resolves selectors that must name exactly one customer.
pub fn resolve_single<S: DataStore>(
    store: &S,
    selectors: &[CustomerSelector],
) -> Result<DisplayCustomer> {
    let mut resolved = resolve_selectors(store, selectors)?;
    match resolved.len() {
        1 => Ok(resolved.remove(0)),
        0 => Err(CustbookError::Api("No customer given".to_string())),
        n => Err(CustbookError::Api(format!(
            "Expected one customer, got {}",
            n
        ))),
    }
}
