use crate::api::{CustbookApi, DataPaths};
use crate::config::CustbookConfig;
use crate::error::{CustbookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CustbookContext {
    pub api: CustbookApi<FileStore>,
    pub config: CustbookConfig,
}

/// The per-user data directory, e.g. `~/.local/share/custbook` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "custbook", "custbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CustbookError::Store("Could not determine data directory".to_string()))
}

/// Builds the API over the file store. `data_dir` overrides the default location.
pub fn initialize(data_dir: Option<&Path>) -> Result<CustbookContext> {
    let data_dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_data_dir()?,
    };
    debug!(data_dir = %data_dir.display(), "initializing");

    let config = CustbookConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = CustbookApi::new(store, DataPaths::new(data_dir));

    Ok(CustbookContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewCustomer;
    use tempfile::tempdir;

    #[test]
    fn test_initialize_with_override_persists_to_dir() {
        let dir = tempdir().unwrap();
        let mut ctx = initialize(Some(dir.path())).unwrap();
        assert_eq!(ctx.config, CustbookConfig::default());

        ctx.api.create_customer(NewCustomer::new("Acme")).unwrap();
        assert!(dir.path().join("customers.json").exists());

        let ctx = initialize(Some(dir.path())).unwrap();
        assert_eq!(ctx.api.list_customers().unwrap().listed_customers.len(), 1);
    }
}
