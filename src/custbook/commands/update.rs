use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::CustomerSelector;
use crate::model::CustomerPatch;
use crate::store::DataStore;
use tracing::info;

use super::helpers::resolve_single;

pub fn run<S: DataStore>(
    store: &mut S,
    selectors: &[CustomerSelector],
    patch: &CustomerPatch,
) -> Result<CmdResult> {
    let target = resolve_single(store, selectors)?;
    let mut result = CmdResult::default();

    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let mut customer = target.customer;
    patch.apply(&mut customer)?;
    store.save_customer(&customer)?;
    info!(id = %customer.id, "updated customer");

    result.add_message(CmdMessage::success(format!(
        "Customer updated ({}): {}",
        target.index, customer.name
    )));
    result.affected_customers.push(customer);
    Ok(result)
}
