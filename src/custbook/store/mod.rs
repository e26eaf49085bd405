//! # Storage Layer
//!
//! The [`DataStore`] trait hides where customers live. Business logic in
//! `commands/` only ever talks to the trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. The whole collection is kept under
//!   a single key, `customers.json`, as an ordered JSON array. Every mutation
//!   rewrites the file atomically (write to a temp file, then rename).
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! ## Ordering
//!
//! `list_customers` returns customers in insertion order. Saving an existing
//! customer replaces it in place; saving a new one appends. Display indexes
//! (see [`crate::index`]) are derived from this order, so implementations
//! must keep it stable.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── customers.json    # [{ "id": ..., "name": ..., "received": [...], ... }]
//! └── config.json       # CustbookConfig
//! ```

use crate::error::Result;
use crate::model::Customer;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for customer storage.
pub trait DataStore {
    /// Save a customer (create or update in place)
    fn save_customer(&mut self, customer: &Customer) -> Result<()>;

    /// Get a customer by ID
    fn get_customer(&self, id: &Uuid) -> Result<Customer>;

    /// List all customers in insertion order
    fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Delete a customer permanently
    fn delete_customer(&mut self, id: &Uuid) -> Result<()>;

    /// Remove every customer, returning how many were removed
    fn clear(&mut self) -> Result<usize>;
}
