use super::print::{
    print_config, print_currencies, print_customers, print_full_customers, print_messages,
    print_paths,
};
use super::setup::{Cli, Commands, ContactArgs, CurrencyCommands, EntryCommands};
use clap::Parser;
use custbook::api::{ConfigAction, CurrencyAction, EntryDraft};
use custbook::error::Result;
use custbook::init::{initialize, CustbookContext};
use custbook::logging::init_cli_logger;
use custbook::model::{CustomerPatch, NewCustomer};
use std::io::{self, Write};
use std::path::Path;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let mut ctx = initialize(cli.data_dir.as_deref())?;

    match cli.command {
        Some(Commands::Create { name, contact }) => handle_create(&mut ctx, name, contact),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { customers }) => handle_view(&ctx, customers),
        Some(Commands::Update {
            customer,
            name,
            contact,
        }) => handle_update(&mut ctx, customer, name, contact),
        Some(Commands::Delete { customers }) => handle_delete(&mut ctx, customers),
        Some(Commands::Entry(cmd)) => handle_entry(&mut ctx, cmd),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Export { customers, out }) => handle_export(&ctx, customers, &out),
        Some(Commands::Backup { out }) => handle_backup(&ctx, &out),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Currency(cmd)) => handle_currency(&ctx, cmd),
    }
}

fn handle_create(ctx: &mut CustbookContext, name: Vec<String>, contact: ContactArgs) -> Result<()> {
    let input = NewCustomer {
        name: name.join(" "),
        phone: contact.phone,
        email: contact.email,
        address: contact.address,
    };
    let result = ctx.api.create_customer(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &CustbookContext) -> Result<()> {
    let result = ctx.api.list_customers()?;
    print_customers(&result.listed_customers, ctx.config.language);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &CustbookContext, customers: Vec<String>) -> Result<()> {
    let result = ctx.api.view_customers(&customers)?;
    print_full_customers(&result.listed_customers, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut CustbookContext,
    customer: Vec<String>,
    name: Option<String>,
    contact: ContactArgs,
) -> Result<()> {
    let patch = CustomerPatch {
        name,
        phone: contact.phone,
        email: contact.email,
        address: contact.address,
    };
    let result = ctx.api.update_customer(&customer, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut CustbookContext, customers: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_customers(&customers)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_entry(ctx: &mut CustbookContext, cmd: EntryCommands) -> Result<()> {
    let result = match cmd {
        EntryCommands::Add {
            customer,
            section,
            title,
            content,
            currency,
        } => {
            let mut draft = EntryDraft::new(title, content);
            draft.currency = currency;
            ctx.api.add_entry(&customer, section.into(), draft)?
        }
        EntryCommands::Remove {
            customer,
            section,
            position,
        } => ctx.api.remove_entry(&customer, section.into(), position)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &CustbookContext, term: Vec<String>) -> Result<()> {
    let result = ctx.api.search_customers(&term.join(" "))?;
    print_customers(&result.listed_customers, ctx.config.language);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &CustbookContext, customers: Vec<String>, out: &Path) -> Result<()> {
    let result = ctx.api.export_customers(&customers, out)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &CustbookContext, out: &Path) -> Result<()> {
    let result = ctx.api.backup(out)?;
    print_messages(&result.messages);
    print_paths(&result.written_paths);
    Ok(())
}

fn handle_clear(ctx: &mut CustbookContext, yes: bool) -> Result<()> {
    let confirmed = yes || confirm_clear(ctx)?;
    let result = ctx.api.clear(confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm_clear(ctx: &CustbookContext) -> Result<bool> {
    let count = ctx.api.list_customers()?.listed_customers.len();
    println!(
        "This will permanently remove {} customer{} and reset all settings.",
        count,
        if count == 1 { "" } else { "s" }
    );
    print!("[Y] To clear: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim() == "Y")
}

fn handle_config(ctx: &CustbookContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_currency(ctx: &CustbookContext, cmd: CurrencyCommands) -> Result<()> {
    let action = match cmd {
        CurrencyCommands::List => CurrencyAction::List,
        CurrencyCommands::Toggle { code } => CurrencyAction::Toggle(code),
        CurrencyCommands::Default { code } => CurrencyAction::SetDefault(code),
    };
    let is_list = matches!(action, CurrencyAction::List);
    let result = ctx.api.currency(action)?;
    if is_list {
        if let Some(config) = &result.config {
            print_currencies(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
