use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CustbookError, Result};
use crate::model::{Customer, Section};
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

const ARCHIVE_ROOT: &str = "custbook";

/// Writes a `.tar.gz` holding the full collection as `customers.json` plus a
/// readable text file per customer. `target` may be a directory (a timestamped
/// name is generated) or a file path.
pub fn run<S: DataStore>(store: &S, target: &Path) -> Result<CmdResult> {
    let customers = store.list_customers()?;

    let path = archive_path(target);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(CustbookError::Io)?;
        }
    }

    let file = File::create(&path).map_err(CustbookError::Io)?;
    write_archive(file, &customers)?;
    info!(path = %path.display(), customers = customers.len(), "wrote backup");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Backed up {} customer{} to {}",
        customers.len(),
        if customers.len() == 1 { "" } else { "s" },
        path.display()
    )));
    Ok(result.with_written_paths(vec![path]))
}

fn archive_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        let stamp = Utc::now().format("%Y-%m-%d_%H%M%S");
        target.join(format!("custbook-backup-{}.tar.gz", stamp))
    } else {
        target.to_path_buf()
    }
}

fn write_archive<W: Write>(writer: W, customers: &[Customer]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    let json = serde_json::to_vec_pretty(customers).map_err(CustbookError::Serialization)?;
    append(&mut tar, &format!("{}/customers.json", ARCHIVE_ROOT), &json)?;

    for (i, customer) in customers.iter().enumerate() {
        let entry_name = format!(
            "{}/customers/{:03}-{}.txt",
            ARCHIVE_ROOT,
            i + 1,
            sanitize_filename(&customer.name)
        );
        append(&mut tar, &entry_name, render_text(customer).as_bytes())?;
    }

    let enc = tar.into_inner().map_err(CustbookError::Io)?;
    enc.finish().map_err(CustbookError::Io)?;
    Ok(())
}

fn append<W: Write>(tar: &mut tar::Builder<W>, name: &str, data: &[u8]) -> Result<()> {
    let mut header = tar::Header::new_gnu();
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(Utc::now().timestamp().max(0) as u64);
    header.set_cksum();
    tar.append_data(&mut header, name, data)
        .map_err(CustbookError::Io)
}

fn render_text(customer: &Customer) -> String {
    let mut out = String::new();
    out.push_str(&customer.name);
    out.push('\n');
    for (label, value) in customer.contact_lines() {
        out.push_str(&format!("{}: {}\n", label, value));
    }

    for section in [Section::Received, Section::Details] {
        let entries = customer.entries(section);
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("\n## {}\n", section));
        for entry in entries {
            out.push_str(&format!("\n### {}\n", entry.title));
            out.push_str(&format!("Date: {}\n", entry.date.format("%Y-%m-%d")));
            if let Some(currency) = &entry.currency {
                out.push_str(&format!("Currency: {}\n", currency));
            }
            if !entry.content.trim().is_empty() {
                out.push('\n');
                out.push_str(entry.content.trim_end());
                out.push('\n');
            }
        }
    }
    out
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
}
