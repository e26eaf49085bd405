use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayCustomer;
use crate::model::Customer;
use crate::store::DataStore;

use super::helpers::indexed_customers;

/// Case-insensitive substring search over identity fields and entries.
///
/// Ranking: exact name, then name contains, then phone/email/address contains,
/// then any entry title or content contains. Ties keep insertion order. An empty
/// term matches everything.
pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let indexed = indexed_customers(store)?;
    let term_lower = term.trim().to_lowercase();

    if term_lower.is_empty() {
        return Ok(CmdResult::default().with_listed_customers(indexed));
    }

    let mut matches: Vec<(DisplayCustomer, u8)> = indexed
        .into_iter()
        .filter_map(|dc| score(&dc.customer, &term_lower).map(|s| (dc, s)))
        .collect();

    // Stable sort keeps insertion order within a rank.
    matches.sort_by_key(|(_, score)| *score);

    let listed = matches.into_iter().map(|(dc, _)| dc).collect();
    Ok(CmdResult::default().with_listed_customers(listed))
}

fn score(customer: &Customer, term_lower: &str) -> Option<u8> {
    let name = customer.name.to_lowercase();
    if name == term_lower {
        return Some(1);
    }
    if name.contains(term_lower) {
        return Some(2);
    }

    let identity = [&customer.phone, &customer.email, &customer.address];
    if identity
        .iter()
        .filter_map(|f| f.as_deref())
        .any(|f| f.to_lowercase().contains(term_lower))
    {
        return Some(3);
    }

    if customer
        .received
        .iter()
        .chain(customer.details.iter())
        .any(|e| {
            e.title.to_lowercase().contains(term_lower)
                || e.content.to_lowercase().contains(term_lower)
        })
    {
        return Some(4);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_customers
            .iter()
            .map(|dc| dc.customer.name.as_str())
            .collect()
    }

    #[test]
    fn ranks_exact_name_matches_first() {
        let fixture = StoreFixture::new()
            .with_customer("Bar Foods")
            .with_entries("Zed", "bar tab", "paid")
            .with_contact("Quinn", "555", "hello@bar.io")
            .with_customer("Bar");

        let result = run(&fixture.store, "BAR").unwrap();
        assert_eq!(names(&result), vec!["Bar", "Bar Foods", "Quinn", "Zed"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let fixture = StoreFixture::new()
            .with_customer("Acme West")
            .with_customer("Acme East");
        let result = run(&fixture.store, "acme").unwrap();
        assert_eq!(names(&result), vec!["Acme West", "Acme East"]);
    }

    #[test]
    fn matches_entry_content() {
        let fixture = StoreFixture::new()
            .with_entries("Acme", "Deposit", "Note")
            .with_customer("Globex");
        let result = run(&fixture.store, "deposit content").unwrap();
        assert_eq!(names(&result), vec!["Acme"]);
    }

    #[test]
    fn empty_term_returns_everything() {
        let fixture = StoreFixture::new().with_customers(3);
        assert_eq!(run(&fixture.store, "  ").unwrap().listed_customers.len(), 3);
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let fixture = StoreFixture::new().with_customers(2);
        assert!(run(&fixture.store, "nothing").unwrap().listed_customers.is_empty());
    }
}
