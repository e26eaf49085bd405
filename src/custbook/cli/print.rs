use chrono::{DateTime, Utc};
use colored::Colorize;
use custbook::api::{CmdMessage, MessageLevel};
use custbook::config::CustbookConfig;
use custbook::currency::{self, SUPPORTED};
use custbook::i18n::Language;
use custbook::index::DisplayCustomer;
use custbook::model::{Customer, Section};
use std::path::PathBuf;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const RULE_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

pub(super) fn print_customers(customers: &[DisplayCustomer], lang: Language) {
    if customers.is_empty() {
        println!("{}", align_to_rule(&lang.t("customers.noResults"), lang));
        return;
    }

    for dc in customers {
        let idx_str = format!("{}. ", dc.index);
        let left_prefix = "    ";
        let time_ago = format_time_ago(dc.customer.created_at);

        let summary = summary_line(&dc.customer);

        let fixed_width = left_prefix.width() + idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(display.width());

        println!(
            "{}{}{}{}  {}",
            left_prefix,
            idx_str.yellow(),
            display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn summary_line(customer: &Customer) -> String {
    let mut parts = vec![customer.name.clone()];
    parts.extend(
        customer
            .contact_lines()
            .into_iter()
            .filter(|(label, _)| *label != "Address")
            .map(|(_, value)| value.to_string()),
    );
    let entries = customer.received.len() + customer.details.len();
    if entries > 0 {
        parts.push(format!("[{}]", entries));
    }
    parts.join(" · ")
}

pub(super) fn print_full_customers(customers: &[DisplayCustomer], config: &CustbookConfig) {
    let lang = config.language;
    for (i, dc) in customers.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let customer = &dc.customer;
        println!("{} {}", dc.index.to_string().yellow(), customer.name.bold());
        for (label, value) in customer.contact_lines() {
            println!("{}: {}", label.dimmed(), value);
        }

        for (section, key) in [
            (Section::Received, "customers.received"),
            (Section::Details, "customers.details"),
        ] {
            println!("\n{}", align_to_rule(&lang.t(key), lang).bold());
            println!("{}", "-".repeat(RULE_WIDTH));
            let entries = customer.entries(section);
            if entries.is_empty() {
                println!("{}", align_to_rule(&lang.t("customers.noEntries"), lang).dimmed());
                continue;
            }
            for (n, entry) in entries.iter().enumerate() {
                let currency = entry
                    .currency
                    .as_deref()
                    .map(|c| format!(" ({})", currency::symbol(c)))
                    .unwrap_or_default();
                println!(
                    "{}. {}{}  {}",
                    n + 1,
                    entry.title.bold(),
                    currency,
                    config.date_format.format(&entry.date).dimmed()
                );
                if !entry.content.trim().is_empty() {
                    for line in entry.content.lines() {
                        println!("   {}", line);
                    }
                }
            }
        }
    }
}

pub(super) fn print_config(config: &CustbookConfig) {
    for key in CustbookConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn print_currencies(config: &CustbookConfig) {
    let lang = config.language;
    println!("{}", align_to_rule(&lang.t("settings.currency"), lang).bold());
    for info in SUPPORTED {
        let active = config.active_currencies.iter().any(|c| c == info.code);
        let marker = if active { "[x]" } else { "[ ]" };
        let default = if config.default_currency == info.code {
            format!(" ({})", lang.t("settings.defaultCurrency"))
        } else {
            String::new()
        };
        let line = format!("{} {:<5} {:<4} {}{}", marker, info.code, info.symbol, info.name, default);
        if active {
            println!("{}", line);
        } else {
            println!("{}", line.dimmed());
        }
    }
}

/// Right-aligns localized labels against the section rule for right-to-left
/// languages.
fn align_to_rule(text: &str, lang: Language) -> String {
    if !lang.is_rtl() {
        return text.to_string();
    }
    let padding = RULE_WIDTH.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use custbook::model::NewCustomer;

    #[test]
    fn truncates_wide_text() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_to_width("日本語テキスト", 6).width(), 5);
    }

    #[test]
    fn rtl_labels_align_right() {
        let fa = Language::Fa.t("customers.details");
        let aligned = align_to_rule(&fa, Language::Fa);
        assert!(aligned.ends_with(&fa));
        assert_eq!(aligned.width(), RULE_WIDTH.max(fa.width()));

        assert_eq!(align_to_rule("Details", Language::En), "Details");
    }

    #[test]
    fn summary_skips_address() {
        let customer = NewCustomer::new("Acme")
            .with_phone("555")
            .with_address("1 Main St")
            .validate()
            .unwrap();
        assert_eq!(summary_line(&customer), "Acme · 555");
    }
}
