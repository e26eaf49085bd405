//! # Commands
//!
//! One module per operation. Every `run` takes a [`DataStore`](crate::store::DataStore)
//! (and, where needed, [`DataPaths`] or a loaded [`CustbookConfig`]) and returns a
//! [`CmdResult`]: the customers it touched or listed, any files it wrote, and
//! user-facing messages. Nothing here prints; presentation is the caller's job.

use crate::config::CustbookConfig;
use crate::index::DisplayCustomer;
use crate::model::Customer;
use std::path::PathBuf;

pub mod backup;
pub mod clear;
pub mod config;
pub mod create;
pub mod currency;
pub mod delete;
pub mod entry;
pub mod export;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

/// Where custbook keeps its files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub data_dir: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_customers: Vec<Customer>,
    pub listed_customers: Vec<DisplayCustomer>,
    pub written_paths: Vec<PathBuf>,
    pub config: Option<CustbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_customers(mut self, customers: Vec<Customer>) -> Self {
        self.affected_customers = customers;
        self
    }

    pub fn with_listed_customers(mut self, customers: Vec<DisplayCustomer>) -> Self {
        self.listed_customers = customers;
        self
    }

    pub fn with_written_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_paths = paths;
        self
    }

    pub fn with_config(mut self, config: CustbookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// An entry as typed by the user, before currency defaulting.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub currency: Option<String>,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            currency: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}
