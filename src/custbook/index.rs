//! # Display Indexes
//!
//! Customers are stored under UUIDs, which nobody wants to type. The CLI shows
//! a 1-based index next to each customer instead (`1`, `2`, ...), derived from
//! insertion order, and resolves it back to a UUID when a command runs.
//!
//! Because the order is insertion order and deletions are permanent, indexes
//! after a deleted customer shift down by one. That is the same thing the
//! user sees in the next `list`, so it is not a surprise in practice.
//!
//! A [`CustomerSelector`] is either such an index or a name query; see
//! [`crate::commands::helpers::resolve_selectors`] for how names resolve.

use crate::error::CustbookError;
use crate::model::Customer;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = CustbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(CustbookError::Api(format!("Invalid index format: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerSelector {
    Index(DisplayIndex),
    Name(String),
}

#[derive(Debug, Clone)]
pub struct DisplayCustomer {
    pub customer: Customer,
    pub index: DisplayIndex,
}

/// Assigns display indexes in the order the store returned the customers.
pub fn index_customers(customers: Vec<Customer>) -> Vec<DisplayCustomer> {
    customers
        .into_iter()
        .enumerate()
        .map(|(i, customer)| DisplayCustomer {
            customer,
            index: DisplayIndex(i + 1),
        })
        .collect()
}
