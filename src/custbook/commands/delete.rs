use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::CustomerSelector;
use crate::store::DataStore;
use tracing::info;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(store: &mut S, selectors: &[CustomerSelector]) -> Result<CmdResult> {
    // Resolve everything up front so indexes refer to the listing the user saw.
    let targets = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for dc in targets {
        if result.affected_customers.iter().any(|c| c.id == dc.customer.id) {
            continue;
        }
        store.delete_customer(&dc.customer.id)?;
        info!(id = %dc.customer.id, "deleted customer");
        result.add_message(CmdMessage::success(format!(
            "Customer deleted ({}): {}",
            dc.index, dc.customer.name
        )));
        result.affected_customers.push(dc.customer);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_by_original_indexes() {
        let mut fixture = StoreFixture::new().with_customers(3);
        let result = run(
            &mut fixture.store,
            &[
                CustomerSelector::Index(DisplayIndex(1)),
                CustomerSelector::Index(DisplayIndex(3)),
            ],
        )
        .unwrap();

        assert_eq!(result.affected_customers.len(), 2);
        let left = fixture.store.list_customers().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].name, "Customer 2");
    }

    #[test]
    fn duplicate_selectors_delete_once() {
        let mut fixture = StoreFixture::new().with_customer("Acme");
        let result = run(
            &mut fixture.store,
            &[
                CustomerSelector::Index(DisplayIndex(1)),
                CustomerSelector::Name("acme".into()),
            ],
        )
        .unwrap();
        assert_eq!(result.affected_customers.len(), 1);
    }
}
