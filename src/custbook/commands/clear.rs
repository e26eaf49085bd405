use crate::commands::{CmdMessage, CmdResult, DataPaths};
use crate::config::CustbookConfig;
use crate::error::Result;
use crate::store::DataStore;
use tracing::warn;

/// Deletes every customer and resets settings to defaults. Does nothing unless
/// `confirmed` is set; asking the user is the caller's job.
pub fn run<S: DataStore>(store: &mut S, paths: &DataPaths, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !confirmed {
        result.add_message(CmdMessage::warning(
            "Not confirmed; nothing was cleared.",
        ));
        return Ok(result);
    }

    let removed = store.clear()?;
    CustbookConfig::reset(&paths.data_dir)?;
    warn!(removed, "cleared all data");

    result.add_message(CmdMessage::success(format!(
        "Removed {} customer{} and reset settings.",
        removed,
        if removed == 1 { "" } else { "s" }
    )));
    Ok(result.with_config(CustbookConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::tempdir;

    #[test]
    fn requires_confirmation() {
        let mut fixture = StoreFixture::new().with_customers(2);
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().to_path_buf());

        let result = run(&mut fixture.store, &paths, false).unwrap();
        assert_eq!(fixture.store.list_customers().unwrap().len(), 2);
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
    }

    #[test]
    fn clears_customers_and_settings() {
        let mut fixture = StoreFixture::new().with_customers(2);
        let dir = tempdir().unwrap();
        let paths = DataPaths::new(dir.path().to_path_buf());

        let config = CustbookConfig {
            default_currency: "EUR".into(),
            ..CustbookConfig::default()
        };
        config.save(dir.path()).unwrap();

        run(&mut fixture.store, &paths, true).unwrap();
        assert!(fixture.store.list_customers().unwrap().is_empty());
        assert_eq!(CustbookConfig::load(dir.path()).unwrap(), CustbookConfig::default());
    }
}
