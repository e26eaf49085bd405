use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::CustomerSelector;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(store: &S, selectors: &[CustomerSelector]) -> Result<CmdResult> {
    let customers = resolve_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_customers(customers))
}
