use super::DataStore;
use crate::error::{CustbookError, Result};
use crate::model::Customer;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    customers: Vec<Customer>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_customer(&mut self, customer: &Customer) -> Result<()> {
        match self.customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer.clone(),
            None => self.customers.push(customer.clone()),
        }
        Ok(())
    }

    fn get_customer(&self, id: &Uuid) -> Result<Customer> {
        self.customers
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(CustbookError::CustomerNotFound(*id))
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.clone())
    }

    fn delete_customer(&mut self, id: &Uuid) -> Result<()> {
        let before = self.customers.len();
        self.customers.retain(|c| &c.id != id);
        if self.customers.len() == before {
            return Err(CustbookError::CustomerNotFound(*id));
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<usize> {
        let removed = self.customers.len();
        self.customers.clear();
        Ok(removed)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Entry, NewCustomer};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_customers(mut self, count: usize) -> Self {
            for i in 0..count {
                let customer = NewCustomer::new(format!("Customer {}", i + 1))
                    .validate()
                    .unwrap();
                self.store.save_customer(&customer).unwrap();
            }
            self
        }

        pub fn with_customer(mut self, name: &str) -> Self {
            let customer = NewCustomer::new(name).validate().unwrap();
            self.store.save_customer(&customer).unwrap();
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str, email: &str) -> Self {
            let customer = NewCustomer::new(name)
                .with_phone(phone)
                .with_email(email)
                .validate()
                .unwrap();
            self.store.save_customer(&customer).unwrap();
            self
        }

        /// Adds a customer with one received entry and one detail entry.
        pub fn with_entries(mut self, name: &str, received: &str, detail: &str) -> Self {
            let mut customer = NewCustomer::new(name).validate().unwrap();
            customer.received.push(Entry::new(
                received.to_string(),
                format!("{} content", received),
                Some("USD".to_string()),
            ));
            customer.details.push(Entry::new(
                detail.to_string(),
                format!("{} content", detail),
                None,
            ));
            self.store.save_customer(&customer).unwrap();
            self
        }
    }
}
