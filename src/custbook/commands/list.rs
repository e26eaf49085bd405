use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::indexed_customers;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let listed = indexed_customers(store)?;
    Ok(CmdResult::default().with_listed_customers(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new()
            .with_customer("Zed")
            .with_customer("Abe");
        let result = run(&fixture.store).unwrap();

        assert_eq!(result.listed_customers.len(), 2);
        assert_eq!(result.listed_customers[0].customer.name, "Zed");
        assert_eq!(result.listed_customers[1].index, DisplayIndex(2));
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        assert!(run(&fixture.store).unwrap().listed_customers.is_empty());
    }
}
