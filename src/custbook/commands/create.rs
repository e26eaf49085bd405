use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewCustomer;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, input: NewCustomer) -> Result<CmdResult> {
    let customer = input.validate()?;
    store.save_customer(&customer)?;
    info!(id = %customer.id, "created customer");

    let position = store.list_customers()?.len();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer created ({}): {}",
        position, customer.name
    )));
    result.affected_customers.push(customer);
    Ok(result)
}
