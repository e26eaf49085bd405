use super::DataStore;
use crate::error::{CustbookError, Result};
use crate::model::Customer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const CUSTOMERS_FILENAME: &str = "customers.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(CUSTOMERS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CustbookError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Customer>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(CustbookError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let customers: Vec<Customer> =
            serde_json::from_str(&content).map_err(CustbookError::Serialization)?;
        debug!(count = customers.len(), path = %data_file.display(), "loaded customers");
        Ok(customers)
    }

    fn persist(&self, customers: &[Customer]) -> Result<()> {
        self.ensure_dir()?;
        let data_file = self.data_file();
        let tmp_file = self.root.join(format!("{}.tmp", CUSTOMERS_FILENAME));

        let content =
            serde_json::to_string_pretty(customers).map_err(CustbookError::Serialization)?;
        fs::write(&tmp_file, content).map_err(CustbookError::Io)?;
        fs::rename(&tmp_file, &data_file).map_err(CustbookError::Io)?;

        debug!(count = customers.len(), path = %data_file.display(), "saved customers");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_customer(&mut self, customer: &Customer) -> Result<()> {
        let mut customers = self.load()?;
        match customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer.clone(),
            None => customers.push(customer.clone()),
        }
        self.persist(&customers)
    }

    fn get_customer(&self, id: &Uuid) -> Result<Customer> {
        self.load()?
            .into_iter()
            .find(|c| &c.id == id)
            .ok_or(CustbookError::CustomerNotFound(*id))
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        self.load()
    }

    fn delete_customer(&mut self, id: &Uuid) -> Result<()> {
        let mut customers = self.load()?;
        let before = customers.len();
        customers.retain(|c| &c.id != id);
        if customers.len() == before {
            return Err(CustbookError::CustomerNotFound(*id));
        }
        self.persist(&customers)
    }

    fn clear(&mut self) -> Result<usize> {
        let customers = self.load()?;
        if customers.is_empty() {
            return Ok(0);
        }
        self.persist(&[])?;
        Ok(customers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, NewCustomer};
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_lists_empty() {
        let (_dir, store) = setup();
        assert!(store.list_customers().unwrap().is_empty());
    }

    #[test]
    fn test_save_appends_and_updates_in_place() {
        let (_dir, mut store) = setup();
        let first = NewCustomer::new("First").validate().unwrap();
        let mut second = NewCustomer::new("Second").validate().unwrap();
        store.save_customer(&first).unwrap();
        store.save_customer(&second).unwrap();

        second
            .received
            .push(Entry::new("Invoice".into(), "Paid".into(), Some("USD".into())));
        store.save_customer(&second).unwrap();

        let listed = store.list_customers().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "First");
        assert_eq!(listed[1].name, "Second");
        assert_eq!(listed[1].received.len(), 1);
    }

    #[test]
    fn test_collection_lives_under_single_file() {
        let (_dir, mut store) = setup();
        let customer = NewCustomer::new("Acme").validate().unwrap();
        store.save_customer(&customer).unwrap();

        let raw = fs::read_to_string(store.data_file()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed[0]["name"], "Acme");

        let leftovers: Vec<_> = fs::read_dir(store.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let (_dir, mut store) = setup();
        let err = store.delete_customer(&Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CustbookError::CustomerNotFound(_)));
    }

    #[test]
    fn test_clear_reports_count() {
        let (_dir, mut store) = setup();
        store
            .save_customer(&NewCustomer::new("A").validate().unwrap())
            .unwrap();
        store
            .save_customer(&NewCustomer::new("B").validate().unwrap())
            .unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.list_customers().unwrap().is_empty());
        assert_eq!(store.clear().unwrap(), 0);
    }
}
