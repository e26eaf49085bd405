use crate::commands::{CmdMessage, CmdResult};
use crate::config::CustbookConfig;
use crate::error::{CustbookError, Result};
use crate::index::{CustomerSelector, DisplayCustomer};
use crate::layout::{layout, LayoutOptions};
use crate::render::write_pdf;
use crate::store::DataStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::helpers::{indexed_customers, resolve_selectors};

/// Writes one PDF per selected customer into `out_dir`. No selectors means
/// every customer.
pub fn run<S: DataStore>(
    store: &S,
    config: &CustbookConfig,
    selectors: &[CustomerSelector],
    out_dir: &Path,
) -> Result<CmdResult> {
    let customers = if selectors.is_empty() {
        indexed_customers(store)?
    } else {
        resolve_selectors(store, selectors)?
    };

    let mut result = CmdResult::default();
    if customers.is_empty() {
        result.add_message(CmdMessage::info("No customers to export."));
        return Ok(result);
    }

    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(CustbookError::Io)?;
    }

    let options = LayoutOptions::new(config.page_size, config.date_format);
    let mut written: Vec<PathBuf> = Vec::with_capacity(customers.len());

    for dc in &customers {
        let path = unique_path(out_dir, &export_filename(&dc.customer.name), &written, dc);
        let pages = export_one(dc, &options, &path)?;
        info!(id = %dc.customer.id, path = %path.display(), pages, "exported customer");
        result.add_message(CmdMessage::success(format!(
            "Exported {} ({} page{}) to {}",
            dc.customer.name,
            pages,
            if pages == 1 { "" } else { "s" },
            path.display()
        )));
        written.push(path);
    }

    Ok(result.with_written_paths(written))
}

fn export_one(dc: &DisplayCustomer, options: &LayoutOptions, path: &Path) -> Result<usize> {
    let doc = layout(&dc.customer, options);
    let bytes = write_pdf(&doc)?;
    debug!(bytes = bytes.len(), "pdf rendered");
    fs::write(path, bytes)
        .map_err(|e| CustbookError::Export(format!("{}: {}", path.display(), e)))?;
    Ok(doc.page_count())
}

/// `<name>_details.pdf`, with the name lower-cased and everything that is not
/// an ASCII letter or digit replaced by `_`.
pub fn export_filename(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_details.pdf", safe)
}

// Two customers can sanitize to the same name within one run.
fn unique_path(dir: &Path, filename: &str, taken: &[PathBuf], dc: &DisplayCustomer) -> PathBuf {
    let path = dir.join(filename);
    if !taken.contains(&path) {
        return path;
    }
    let stem = filename.trim_end_matches(".pdf");
    dir.join(format!("{}_{}.pdf", stem, dc.index))
}
