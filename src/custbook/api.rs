//! # API Facade
//!
//! A thin layer over `commands/`. It is the single entry point for every
//! custbook operation regardless of the client:
//!
//! - **Dispatches** to the right command function
//! - **Normalizes inputs**: raw selector strings become [`CustomerSelector`]s,
//!   and the persisted [`CustbookConfig`] is loaded for commands that need it
//! - **Returns structured types** (`Result<CmdResult>`), never strings or output
//!
//! `CustbookApi<S: DataStore>` is generic over storage: production uses
//! `CustbookApi<FileStore>`, tests use `CustbookApi<InMemoryStore>`.

use crate::commands;
use crate::config::CustbookConfig;
use crate::error::Result;
use crate::index::{CustomerSelector, DisplayIndex};
use crate::model::{CustomerPatch, NewCustomer, Section};
use crate::store::DataStore;
use std::path::Path;
use std::str::FromStr;

pub struct CustbookApi<S: DataStore> {
    store: S,
    paths: commands::DataPaths,
}

impl<S: DataStore> CustbookApi<S> {
    pub fn new(store: S, paths: commands::DataPaths) -> Self {
        Self { store, paths }
    }

    pub fn create_customer(&mut self, input: NewCustomer) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    pub fn list_customers(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_customers<I: AsRef<str>>(&self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn update_customer<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        patch: &CustomerPatch,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::update::run(&mut self.store, &selectors, patch)
    }

    pub fn delete_customers<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn add_entry<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        section: Section,
        draft: commands::EntryDraft,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        let config = self.load_config()?;
        commands::entry::add(&mut self.store, &config, &selectors, section, draft)
    }

    pub fn remove_entry<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        section: Section,
        position: usize,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::entry::remove(&mut self.store, &selectors, section, position)
    }

    pub fn search_customers(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn export_customers<I: AsRef<str>>(
        &self,
        inputs: &[I],
        out_dir: &Path,
    ) -> Result<commands::CmdResult> {
        let selectors = if inputs.is_empty() {
            Vec::new()
        } else {
            parse_selectors(inputs)?
        };
        let config = self.load_config()?;
        commands::export::run(&self.store, &config, &selectors, out_dir)
    }

    pub fn backup(&self, target: &Path) -> Result<commands::CmdResult> {
        commands::backup::run(&self.store, target)
    }

    pub fn clear(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, &self.paths, confirmed)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn currency(&self, action: CurrencyAction) -> Result<commands::CmdResult> {
        commands::currency::run(&self.paths, action)
    }

    pub fn load_config(&self) -> Result<CustbookConfig> {
        CustbookConfig::load(&self.paths.data_dir)
    }

    pub fn paths(&self) -> &commands::DataPaths {
        &self.paths
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<CustomerSelector>> {
    if inputs.is_empty() {
        return Err(crate::error::CustbookError::Api(
            "No customer given".to_string(),
        ));
    }

    // All inputs are indexes: select each one.
    let all_indexes: std::result::Result<Vec<DisplayIndex>, _> = inputs
        .iter()
        .map(|s| DisplayIndex::from_str(s.as_ref()))
        .collect();

    if let Ok(indexes) = all_indexes {
        return Ok(indexes.into_iter().map(CustomerSelector::Index).collect());
    }

    // Otherwise the words form one name query ("acme co" typed unquoted).
    let term = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    Ok(vec![CustomerSelector::Name(term)])
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::currency::CurrencyAction;
pub use commands::{CmdMessage, CmdResult, DataPaths, EntryDraft, MessageLevel};
